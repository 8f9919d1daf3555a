//! The parse-tree node types and the operations defined over them.
//!
//! [`nodes`] holds the data model: one struct per grammar node type under the
//! [`Node`] sum type, with `PgList` children. `deparse` implements `Display`
//! for every node, rendering canonical SQL. `copy` implements the checked
//! deep-copy entry point that rejects trees carrying deprecated fields.
//!
//! # Example
//!
//! ```rust
//! use pg_deparse::ast::Node;
//!
//! fn tables(from_clause: &pg_deparse::list::PgList<Node>) -> Vec<&str> {
//!     from_clause
//!         .iter()
//!         .filter_map(|item| match item {
//!             Node::RangeVar(rv) => Some(rv.relname.as_str()),
//!             _ => None,
//!         })
//!         .collect()
//! }
//! ```

mod copy;
mod deparse;
mod nodes;

pub use copy::copy_checked;
pub use nodes::*;
