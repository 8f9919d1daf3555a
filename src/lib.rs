//! Pure-Rust object model of the PostgreSQL parse tree with a hand-written
//! deparser.
//!
//! The crate contains no parser: trees are built by an external producer (a
//! grammar, a protobuf decoder, test code) and handed in fully formed. What
//! it provides is the node model itself — one struct per grammar node type,
//! collected under the [`ast::Node`] sum type — plus three operations over
//! it:
//!
//! - **deparsing**: every node implements `Display`, rendering canonical SQL
//!   text for its construct; [`deparse`] renders a whole statement;
//! - **checked deep copy**: [`ast::copy_checked`] validates a tree against
//!   grammar-version skew (deprecated fields populated by an old producer)
//!   before cloning it;
//! - **list emulation**: [`list::PgList`] mirrors PostgreSQL's internal
//!   `List`, including live sub-list views and fail-fast cursors.
//!
//! # Example
//!
//! ```rust
//! use pg_deparse::ast::{Node, RangeVar, SelectStmt};
//! use pg_deparse::deparse;
//!
//! let stmt = SelectStmt {
//!     target_list: pg_deparse::pg_list![Node::res_target_expr(Node::column_star())],
//!     from_clause: pg_deparse::pg_list![RangeVar::new("users").into_node()],
//!     where_clause: Some(Node::bool_const(true)),
//!     ..Default::default()
//! };
//! assert_eq!(deparse(&stmt.into_node()), "select * from users where true");
//! ```
//!
//! Rendering never fails: a flag bit or discriminant no renderer knows about
//! degrades to an inline `<<unknown ...>>` marker in the output instead of an
//! error, so batch rendering completes and the gap is visible in the text.
//!
//! All types are single-threaded value types; sharing a tree across threads
//! is the caller's synchronization problem.

pub mod ast;
pub mod list;
pub mod str;

use ast::{Node, RawStmt};
use itertools::Itertools;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// The tree carries a field retired by a newer grammar version; it was
    /// produced by an unsupported old grammar variant. The copy that found
    /// it was abandoned whole.
    #[error("deprecated field {node}.{field} is populated (value: {value}); tree comes from an unsupported grammar version")]
    DeprecatedField {
        node: &'static str,
        field: &'static str,
        value: String,
    },

    /// List access past the end.
    #[error("list index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A list was structurally modified while a detached cursor was active.
    #[error("list modified while a cursor was active")]
    ConcurrentModification,

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Renders a single statement (or any subtree) to SQL text.
pub fn deparse(node: &Node) -> String {
    node.to_string()
}

/// Renders a batch of raw statements, joined with `"; "`.
pub fn deparse_stmts(stmts: &[RawStmt]) -> String {
    stmts.iter().map(|raw| raw.stmt.to_string()).join("; ")
}

/// Serializes a tree to JSON, the crate's interchange format.
pub fn node_to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string(node)?)
}

/// Rebuilds a tree from its JSON form.
pub fn node_from_json(json: &str) -> Result<Node> {
    Ok(serde_json::from_str(json)?)
}
