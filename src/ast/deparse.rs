//! SQL rendering: a `Display` impl per node type.
//!
//! Keywords are emitted lowercase, identifiers quoted only when needed, and
//! optional clauses skipped when their field is `None` or empty, so the
//! output is canonical regardless of how the source was spelled.
//!
//! Rendering is total. A flag bit or stored character no renderer has syntax
//! for degrades to an inline `<<unknown ...>>` marker instead of failing, so
//! a batch render always completes and gaps are visible in the text.

use std::fmt;

use itertools::Itertools;

use super::nodes::*;
use crate::list::PgList;
use crate::str::{dollar_quote, qualified_name, quote_identifier, string_literal, unknown_value};

// ============================================================================
// Shared helpers
// ============================================================================

/// Comma-joined rendering of an expression list.
fn joined(list: &PgList<Node>) -> String {
    list.iter().join(", ")
}

/// Comma-joined, quoted rendering of a list of bare name leaves (column
/// lists, alias column names).
fn ident_csv(list: &PgList<Node>) -> String {
    list.iter()
        .map(|n| match strval(n) {
            Some(s) => quote_identifier(s),
            None => n.to_string(),
        })
        .join(", ")
}

/// Renders one object reference: a name list becomes a dot-joined qualified
/// name, anything else renders itself.
fn any_name(node: &Node) -> String {
    match node {
        Node::List(items) => name_list(items),
        Node::String(s) => quote_identifier(&s.sval),
        other => other.to_string(),
    }
}

/// Operator name from its (possibly qualified) parts. Qualified operators
/// need the `operator(...)` syntax to parse back.
fn operator_name(name: &PgList<Node>) -> String {
    if name.len() == 1 {
        if let Some(op) = name.first().and_then(strval) {
            return op.to_string();
        }
    }
    let parts = name
        .iter()
        .map(|n| strval(n).unwrap_or("").to_string())
        .join(".");
    format!("operator({parts})")
}

/// Operand of an operator expression; compound operands are parenthesized so
/// the rendered text reparses with the same shape.
fn operand(node: &Node) -> String {
    match node {
        Node::AExpr(_) | Node::BoolExpr(_) => format!("({node})"),
        other => other.to_string(),
    }
}

/// Function name list, with the implicit `pg_catalog` prefix dropped the way
/// the original query would have spelled it.
fn func_name(name: &PgList<Node>) -> String {
    if name.len() == 2 && name.first().and_then(strval) == Some("pg_catalog") {
        if let Some(f) = name.get(1).and_then(strval) {
            return quote_identifier(f);
        }
    }
    name_list(name)
}

/// Scalar value of an option element: leaves render bare, anything else
/// renders itself.
fn def_value(node: &Node) -> String {
    match node {
        Node::String(s) => s.sval.clone(),
        Node::AConst(c) => match &c.val {
            Some(AConstValue::String(s)) => s.sval.clone(),
            _ => c.to_string(),
        },
        Node::List(items) => items.iter().map(def_value).join(", "),
        other => other.to_string(),
    }
}

fn fmt_where(f: &mut fmt::Formatter<'_>, clause: &Option<Node>) -> fmt::Result {
    if let Some(expr) = clause {
        write!(f, " where {expr}")?;
    }
    Ok(())
}

fn fmt_returning(f: &mut fmt::Formatter<'_>, list: &PgList<Node>) -> fmt::Result {
    if !list.is_empty() {
        write!(f, " returning {}", joined(list))?;
    }
    Ok(())
}

fn fmt_with_prefix(f: &mut fmt::Formatter<'_>, with: &Option<WithClause>) -> fmt::Result {
    if let Some(w) = with {
        write!(f, "{w} ")?;
    }
    Ok(())
}

/// `set` assignment entry: `name[indirection] = value`.
fn set_target(rt: &ResTarget) -> String {
    let mut out = quote_identifier(&rt.name);
    for step in &rt.indirection {
        out.push_str(&indirection_step(step));
    }
    if let Some(val) = &rt.val {
        out.push_str(" = ");
        out.push_str(&val.to_string());
    }
    out
}

/// Insert column entry: `name[indirection]`.
fn insert_col(node: &Node) -> String {
    match node {
        Node::ResTarget(rt) => {
            let mut out = quote_identifier(&rt.name);
            for step in &rt.indirection {
                out.push_str(&indirection_step(step));
            }
            out
        }
        other => other.to_string(),
    }
}

fn indirection_step(node: &Node) -> String {
    match node {
        Node::String(s) => format!(".{}", quote_identifier(&s.sval)),
        Node::AStar(_) => ".*".to_string(),
        other => other.to_string(),
    }
}

fn object_type_keyword(objtype: ObjectType) -> &'static str {
    match objtype {
        ObjectType::Table => "table",
        ObjectType::Index => "index",
        ObjectType::Sequence => "sequence",
        ObjectType::View => "view",
        ObjectType::MatView => "materialized view",
        ObjectType::Type => "type",
        ObjectType::Schema => "schema",
        ObjectType::Function => "function",
        ObjectType::Procedure => "procedure",
        ObjectType::Routine => "routine",
        ObjectType::Aggregate => "aggregate",
        ObjectType::Operator => "operator",
        ObjectType::Language => "language",
        ObjectType::Cast => "cast",
        ObjectType::Trigger => "trigger",
        ObjectType::Rule => "rule",
        ObjectType::Database => "database",
        ObjectType::Tablespace => "tablespace",
        ObjectType::Role => "role",
        ObjectType::Extension => "extension",
        ObjectType::ForeignTable => "foreign table",
        ObjectType::Collation => "collation",
        ObjectType::Conversion => "conversion",
        ObjectType::Domain => "domain",
        ObjectType::Constraint => "constraint",
        ObjectType::Column => "column",
        ObjectType::AccessMethod => "access method",
        ObjectType::Publication => "publication",
        ObjectType::Subscription => "subscription",
        ObjectType::StatisticsObject => "statistics",
    }
}

/// Persistence prefix for a to-be-created relation, from the stored
/// `relpersistence` character.
fn persistence_prefix(rel: &Option<RangeVar>) -> &'static str {
    match rel.as_ref().map(|r| r.relpersistence.as_str()) {
        Some("t") => "temporary ",
        Some("u") => "unlogged ",
        _ => "",
    }
}

fn cascade_suffix(behavior: DropBehavior) -> &'static str {
    match behavior {
        DropBehavior::Cascade => " cascade",
        DropBehavior::Restrict => "",
    }
}

// ============================================================================
// Node dispatch and leaves
// ============================================================================

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Integer(v) => write!(f, "{}", v.ival),
            Node::Float(v) => f.write_str(&v.fval),
            Node::Boolean(v) => f.write_str(if v.boolval { "true" } else { "false" }),
            Node::String(v) => f.write_str(&v.sval),
            Node::BitString(v) => {
                let (radix, digits) = v.bsval.split_at(1.min(v.bsval.len()));
                write!(f, "{radix}'{digits}'")
            }
            Node::Null => f.write_str("null"),
            Node::AStar(_) => f.write_str("*"),
            Node::List(items) => write!(f, "{items}"),
            Node::AExpr(n) => n.fmt(f),
            Node::ColumnRef(n) => n.fmt(f),
            Node::ParamRef(n) => n.fmt(f),
            Node::AConst(n) => n.fmt(f),
            Node::TypeCast(n) => n.fmt(f),
            Node::CollateClause(n) => n.fmt(f),
            Node::FuncCall(n) => n.fmt(f),
            Node::AIndices(n) => n.fmt(f),
            Node::AIndirection(n) => n.fmt(f),
            Node::AArrayExpr(n) => n.fmt(f),
            Node::SubLink(n) => n.fmt(f),
            Node::BoolExpr(n) => n.fmt(f),
            Node::NullTest(n) => n.fmt(f),
            Node::BooleanTest(n) => n.fmt(f),
            Node::CaseExpr(n) => n.fmt(f),
            Node::CaseWhen(n) => n.fmt(f),
            Node::CoalesceExpr(n) => n.fmt(f),
            Node::MinMaxExpr(n) => n.fmt(f),
            Node::RowExpr(n) => n.fmt(f),
            Node::ResTarget(n) => n.fmt(f),
            Node::RangeVar(n) => n.fmt(f),
            Node::RangeSubselect(n) => n.fmt(f),
            Node::RangeFunction(n) => n.fmt(f),
            Node::JoinExpr(n) => n.fmt(f),
            Node::Alias(n) => n.fmt(f),
            Node::RoleSpec(n) => n.fmt(f),
            Node::SortBy(n) => n.fmt(f),
            Node::WindowDef(n) => n.fmt(f),
            Node::WithClause(n) => n.fmt(f),
            Node::CommonTableExpr(n) => n.fmt(f),
            Node::IntoClause(n) => n.fmt(f),
            Node::InferClause(n) => n.fmt(f),
            Node::OnConflictClause(n) => n.fmt(f),
            Node::LockingClause(n) => n.fmt(f),
            Node::GroupingSet(n) => n.fmt(f),
            Node::TypeName(n) => n.fmt(f),
            Node::ColumnDef(n) => n.fmt(f),
            Node::Constraint(n) => n.fmt(f),
            Node::DefElem(n) => n.fmt(f),
            Node::IndexElem(n) => n.fmt(f),
            Node::TableLikeClause(n) => n.fmt(f),
            Node::PartitionSpec(n) => n.fmt(f),
            Node::PartitionElem(n) => n.fmt(f),
            Node::PartitionBoundSpec(n) => n.fmt(f),
            Node::AccessPriv(n) => n.fmt(f),
            Node::ObjectWithArgs(n) => n.fmt(f),
            Node::FunctionParameter(n) => n.fmt(f),
            Node::JsonTable(n) => n.fmt(f),
            Node::JsonTableColumn(n) => n.fmt(f),
            Node::JsonTablePlan(n) => n.fmt(f),
            Node::SelectStmt(n) => n.fmt(f),
            Node::InsertStmt(n) => n.fmt(f),
            Node::UpdateStmt(n) => n.fmt(f),
            Node::DeleteStmt(n) => n.fmt(f),
            Node::CreateStmt(n) => n.fmt(f),
            Node::CreateTableAsStmt(n) => n.fmt(f),
            Node::AlterTableStmt(n) => n.fmt(f),
            Node::AlterTableCmd(n) => n.fmt(f),
            Node::DropStmt(n) => n.fmt(f),
            Node::TruncateStmt(n) => n.fmt(f),
            Node::IndexStmt(n) => n.fmt(f),
            Node::CreateSchemaStmt(n) => n.fmt(f),
            Node::ViewStmt(n) => n.fmt(f),
            Node::CreateFunctionStmt(n) => n.fmt(f),
            Node::CreateSeqStmt(n) => n.fmt(f),
            Node::AlterSeqStmt(n) => n.fmt(f),
            Node::CreateTrigStmt(n) => n.fmt(f),
            Node::RuleStmt(n) => n.fmt(f),
            Node::CreateDomainStmt(n) => n.fmt(f),
            Node::RefreshMatViewStmt(n) => n.fmt(f),
            Node::RenameStmt(n) => n.fmt(f),
            Node::CommentStmt(n) => n.fmt(f),
            Node::TransactionStmt(n) => n.fmt(f),
            Node::VariableSetStmt(n) => n.fmt(f),
            Node::VariableShowStmt(n) => n.fmt(f),
            Node::ExplainStmt(n) => n.fmt(f),
            Node::CopyStmt(n) => n.fmt(f),
            Node::GrantStmt(n) => n.fmt(f),
            Node::GrantRoleStmt(n) => n.fmt(f),
            Node::LockStmt(n) => n.fmt(f),
            Node::VacuumStmt(n) => n.fmt(f),
            Node::DoStmt(n) => n.fmt(f),
            Node::NotifyStmt(n) => n.fmt(f),
            Node::ListenStmt(n) => n.fmt(f),
            Node::UnlistenStmt(n) => n.fmt(f),
            Node::CheckPointStmt(n) => n.fmt(f),
            Node::DiscardStmt(n) => n.fmt(f),
            Node::PrepareStmt(n) => n.fmt(f),
            Node::ExecuteStmt(n) => n.fmt(f),
            Node::DeallocateStmt(n) => n.fmt(f),
            Node::ClosePortalStmt(n) => n.fmt(f),
            Node::FetchStmt(n) => n.fmt(f),
        }
    }
}

impl fmt::Display for RawStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stmt.fmt(f)
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl fmt::Display for AExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = operator_name(&self.name);
        let lexpr = self.lexpr.as_ref().map(operand);
        let rexpr = self.rexpr.as_ref().map(operand);
        match self.kind {
            AExprKind::Op => match (lexpr, rexpr) {
                (Some(l), Some(r)) => write!(f, "{l} {op} {r}"),
                (None, Some(r)) => write!(f, "{op} {r}"),
                (Some(l), None) => write!(f, "{l} {op}"),
                (None, None) => write!(f, "{op}"),
            },
            AExprKind::OpAny => write!(
                f,
                "{} {op} any ({})",
                lexpr.unwrap_or_default(),
                self.rexpr.as_ref().map(Node::to_string).unwrap_or_default()
            ),
            AExprKind::OpAll => write!(
                f,
                "{} {op} all ({})",
                lexpr.unwrap_or_default(),
                self.rexpr.as_ref().map(Node::to_string).unwrap_or_default()
            ),
            AExprKind::Distinct => write!(
                f,
                "{} is distinct from {}",
                lexpr.unwrap_or_default(),
                rexpr.unwrap_or_default()
            ),
            AExprKind::NotDistinct => write!(
                f,
                "{} is not distinct from {}",
                lexpr.unwrap_or_default(),
                rexpr.unwrap_or_default()
            ),
            AExprKind::NullIf => write!(
                f,
                "nullif({}, {})",
                self.lexpr.as_ref().map(Node::to_string).unwrap_or_default(),
                self.rexpr.as_ref().map(Node::to_string).unwrap_or_default()
            ),
            AExprKind::In => {
                let kw = if op == "<>" { "not in" } else { "in" };
                write!(f, "{} {kw} {}", lexpr.unwrap_or_default(), rexpr.unwrap_or_default())
            }
            AExprKind::Like => {
                let kw = if op.starts_with('!') { "not like" } else { "like" };
                write!(f, "{} {kw} {}", lexpr.unwrap_or_default(), rexpr.unwrap_or_default())
            }
            AExprKind::ILike => {
                let kw = if op.starts_with('!') { "not ilike" } else { "ilike" };
                write!(f, "{} {kw} {}", lexpr.unwrap_or_default(), rexpr.unwrap_or_default())
            }
            AExprKind::Similar => {
                let kw = if op.starts_with('!') {
                    "not similar to"
                } else {
                    "similar to"
                };
                write!(f, "{} {kw} {}", lexpr.unwrap_or_default(), rexpr.unwrap_or_default())
            }
            AExprKind::Between
            | AExprKind::NotBetween
            | AExprKind::BetweenSym
            | AExprKind::NotBetweenSym => {
                let kw = match self.kind {
                    AExprKind::Between => "between",
                    AExprKind::NotBetween => "not between",
                    AExprKind::BetweenSym => "between symmetric",
                    _ => "not between symmetric",
                };
                // The bounds travel as a two-element list in rexpr.
                let (lo, hi) = match self.rexpr.as_ref() {
                    Some(Node::List(bounds)) => (
                        bounds.first().map(Node::to_string).unwrap_or_default(),
                        bounds.get(1).map(Node::to_string).unwrap_or_default(),
                    ),
                    other => (
                        other.map(|n| n.to_string()).unwrap_or_default(),
                        String::new(),
                    ),
                };
                write!(f, "{} {kw} {lo} and {hi}", lexpr.unwrap_or_default())
            }
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.fields {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            match field {
                Node::String(s) => f.write_str(&quote_identifier(&s.sval))?,
                Node::AStar(_) => f.write_str("*")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.number)
    }
}

impl fmt::Display for AConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.isnull {
            return f.write_str("null");
        }
        match &self.val {
            None => f.write_str("null"),
            Some(AConstValue::Integer(v)) => write!(f, "{}", v.ival),
            Some(AConstValue::Float(v)) => f.write_str(&v.fval),
            Some(AConstValue::Boolean(v)) => {
                f.write_str(if v.boolval { "true" } else { "false" })
            }
            Some(AConstValue::String(v)) => f.write_str(&string_literal(&v.sval)),
            Some(AConstValue::BitString(v)) => {
                let (radix, digits) = v.bsval.split_at(1.min(v.bsval.len()));
                write!(f, "{radix}'{digits}'")
            }
        }
    }
}

impl fmt::Display for TypeCast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cast(")?;
        if let Some(arg) = &self.arg {
            write!(f, "{arg}")?;
        }
        f.write_str(" as ")?;
        if let Some(t) = &self.type_name {
            write!(f, "{t}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for CollateClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(arg) = &self.arg {
            write!(f, "{} ", operand(arg))?;
        }
        write!(f, "collate {}", name_list(&self.collname))
    }
}

impl fmt::Display for FuncCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", func_name(&self.funcname))?;
        if self.agg_star {
            f.write_str("*")?;
        } else {
            if self.agg_distinct {
                f.write_str("distinct ")?;
            }
            let mut first = true;
            let last = self.args.len().saturating_sub(1);
            for (i, arg) in self.args.iter().enumerate() {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                if self.func_variadic && i == last {
                    f.write_str("variadic ")?;
                }
                write!(f, "{arg}")?;
            }
            if !self.agg_within_group && !self.agg_order.is_empty() {
                write!(f, " order by {}", joined(&self.agg_order))?;
            }
        }
        f.write_str(")")?;
        if self.agg_within_group && !self.agg_order.is_empty() {
            write!(f, " within group (order by {})", joined(&self.agg_order))?;
        }
        if let Some(filter) = &self.agg_filter {
            write!(f, " filter (where {filter})")?;
        }
        if let Some(over) = &self.over {
            if over.name.is_empty() {
                write!(f, " over {over}")?;
            } else {
                write!(f, " over {}", quote_identifier(&over.name))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for AIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if self.is_slice {
            if let Some(lidx) = &self.lidx {
                write!(f, "{lidx}")?;
            }
            f.write_str(":")?;
        }
        if let Some(uidx) = &self.uidx {
            write!(f, "{uidx}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for AIndirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arg.as_ref() {
            Some(arg @ (Node::ColumnRef(_) | Node::ParamRef(_) | Node::AIndirection(_))) => {
                write!(f, "{arg}")?
            }
            Some(arg) => write!(f, "({arg})")?,
            None => {}
        }
        for step in &self.indirection {
            f.write_str(&indirection_step(step))?;
        }
        Ok(())
    }
}

impl fmt::Display for AArrayExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array[{}]", joined(&self.elements))
    }
}

impl fmt::Display for SubLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub = self
            .subselect
            .as_ref()
            .map(Node::to_string)
            .unwrap_or_default();
        let test = self
            .testexpr
            .as_ref()
            .map(operand)
            .unwrap_or_default();
        match self.sub_link_type {
            SubLinkType::Exists => write!(f, "exists ({sub})"),
            SubLinkType::Expr => write!(f, "({sub})"),
            SubLinkType::Array => write!(f, "array({sub})"),
            SubLinkType::Any => {
                if self.oper_name.is_empty() {
                    write!(f, "{test} in ({sub})")
                } else {
                    write!(f, "{test} {} any ({sub})", operator_name(&self.oper_name))
                }
            }
            SubLinkType::All => {
                write!(f, "{test} {} all ({sub})", operator_name(&self.oper_name))
            }
            SubLinkType::RowCompare => {
                write!(f, "{test} {} ({sub})", operator_name(&self.oper_name))
            }
            SubLinkType::MultiExpr | SubLinkType::Cte => {
                f.write_str(&unknown_value("sublink type", format!("{:?}", self.sub_link_type)))
            }
        }
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.boolop {
            BoolExprType::Not => {
                let arg = self.args.first().map(operand).unwrap_or_default();
                write!(f, "not {arg}")
            }
            BoolExprType::And | BoolExprType::Or => {
                let sep = if self.boolop == BoolExprType::And {
                    " and "
                } else {
                    " or "
                };
                let mut first = true;
                for arg in &self.args {
                    if !first {
                        f.write_str(sep)?;
                    }
                    first = false;
                    // Nested connectives of the other kind keep their parens.
                    match arg {
                        Node::BoolExpr(inner) if inner.boolop != self.boolop => {
                            write!(f, "({arg})")?
                        }
                        _ => write!(f, "{arg}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for NullTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg = self.arg.as_ref().map(operand).unwrap_or_default();
        match self.nulltesttype {
            NullTestType::IsNull => write!(f, "{arg} is null"),
            NullTestType::IsNotNull => write!(f, "{arg} is not null"),
        }
    }
}

impl fmt::Display for BooleanTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg = self.arg.as_ref().map(operand).unwrap_or_default();
        let kw = match self.booltesttype {
            BoolTestType::IsTrue => "is true",
            BoolTestType::IsNotTrue => "is not true",
            BoolTestType::IsFalse => "is false",
            BoolTestType::IsNotFalse => "is not false",
            BoolTestType::IsUnknown => "is unknown",
            BoolTestType::IsNotUnknown => "is not unknown",
        };
        write!(f, "{arg} {kw}")
    }
}

impl fmt::Display for CaseExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("case")?;
        if let Some(arg) = &self.arg {
            write!(f, " {arg}")?;
        }
        for when in &self.args {
            write!(f, " {when}")?;
        }
        if let Some(defresult) = &self.defresult {
            write!(f, " else {defresult}")?;
        }
        f.write_str(" end")
    }
}

impl fmt::Display for CaseWhen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "when {} then {}",
            self.expr.as_ref().map(Node::to_string).unwrap_or_default(),
            self.result.as_ref().map(Node::to_string).unwrap_or_default()
        )
    }
}

impl fmt::Display for CoalesceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coalesce({})", joined(&self.args))
    }
}

impl fmt::Display for MinMaxExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = match self.op {
            MinMaxOp::Greatest => "greatest",
            MinMaxOp::Least => "least",
        };
        write!(f, "{kw}({})", joined(&self.args))
    }
}

impl fmt::Display for RowExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.explicit_row {
            write!(f, "row({})", joined(&self.args))
        } else {
            write!(f, "({})", joined(&self.args))
        }
    }
}

// ============================================================================
// Targets and range items
// ============================================================================

impl fmt::Display for ResTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(val) = &self.val {
            write!(f, "{val}")?;
            if !self.name.is_empty() {
                write!(f, " as {}", quote_identifier(&self.name))?;
            }
        } else {
            f.write_str(&quote_identifier(&self.name))?;
        }
        Ok(())
    }
}

impl fmt::Display for RangeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.inh {
            f.write_str("only ")?;
        }
        f.write_str(&qualified_name([
            self.catalogname.as_str(),
            self.schemaname.as_str(),
            self.relname.as_str(),
        ]))?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RangeSubselect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lateral {
            f.write_str("lateral ")?;
        }
        write!(
            f,
            "({})",
            self.subquery.as_ref().map(Node::to_string).unwrap_or_default()
        )?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RangeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lateral {
            f.write_str("lateral ")?;
        }
        // Each functions element pairs the call with a per-call column
        // definition list.
        let one = |node: &Node| -> String {
            match node {
                Node::List(pair) => {
                    let call = pair.first().map(Node::to_string).unwrap_or_default();
                    match pair.get(1) {
                        Some(Node::List(defs)) if !defs.is_empty() => {
                            format!("{call} as ({})", joined(defs))
                        }
                        _ => call,
                    }
                }
                other => other.to_string(),
            }
        };
        if self.is_rowsfrom {
            write!(f, "rows from ({})", self.functions.iter().map(one).join(", "))?;
        } else if let Some(first) = self.functions.first() {
            f.write_str(&one(first))?;
        }
        if self.ordinality {
            f.write_str(" with ordinality")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        if !self.coldeflist.is_empty() {
            write!(f, " ({})", joined(&self.coldeflist))?;
        }
        Ok(())
    }
}

impl fmt::Display for JoinExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = {
            let larg = self.larg.as_ref().map(Node::to_string).unwrap_or_default();
            let rarg = self.rarg.as_ref().map(Node::to_string).unwrap_or_default();
            let cross = self.jointype == JoinType::Inner
                && !self.is_natural
                && self.quals.is_none()
                && self.using_clause.is_empty();
            let mut out = larg;
            out.push(' ');
            if cross {
                out.push_str("cross join ");
            } else {
                if self.is_natural {
                    out.push_str("natural ");
                }
                out.push_str(match self.jointype {
                    JoinType::Inner => "join ",
                    JoinType::Left => "left join ",
                    JoinType::Right => "right join ",
                    JoinType::Full => "full join ",
                });
            }
            out.push_str(&rarg);
            if !self.using_clause.is_empty() {
                out.push_str(&format!(" using ({})", ident_csv(&self.using_clause)));
                if let Some(ja) = &self.join_using_alias {
                    out.push_str(&format!(" as {ja}"));
                }
            } else if let Some(quals) = &self.quals {
                out.push_str(&format!(" on {quals}"));
            }
            out
        };
        match &self.alias {
            Some(alias) => write!(f, "({body}) as {alias}"),
            None => f.write_str(&body),
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_identifier(&self.aliasname))?;
        if !self.colnames.is_empty() {
            write!(f, " ({})", ident_csv(&self.colnames))?;
        }
        Ok(())
    }
}

impl fmt::Display for RoleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.roletype {
            RoleSpecType::CString => f.write_str(&quote_identifier(&self.rolename)),
            RoleSpecType::CurrentRole => f.write_str("current_role"),
            RoleSpecType::CurrentUser => f.write_str("current_user"),
            RoleSpecType::SessionUser => f.write_str("session_user"),
            RoleSpecType::Public => f.write_str("public"),
        }
    }
}

// ============================================================================
// Clause building blocks
// ============================================================================

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(f, "{node}")?;
        }
        match self.sortby_dir {
            SortByDir::Default => {}
            SortByDir::Asc => f.write_str(" asc")?,
            SortByDir::Desc => f.write_str(" desc")?,
            SortByDir::Using => write!(f, " using {}", operator_name(&self.use_op))?,
        }
        match self.sortby_nulls {
            SortByNulls::Default => {}
            SortByNulls::First => f.write_str(" nulls first")?,
            SortByNulls::Last => f.write_str(" nulls last")?,
        }
        Ok(())
    }
}

impl WindowDef {
    /// The bits any frame renderer understands; anything beyond degrades to
    /// a marker.
    const KNOWN_FRAME_BITS: i32 = FRAMEOPTION_NONDEFAULT
        | FRAMEOPTION_RANGE
        | FRAMEOPTION_ROWS
        | FRAMEOPTION_GROUPS
        | FRAMEOPTION_BETWEEN
        | FRAMEOPTION_START_UNBOUNDED_PRECEDING
        | FRAMEOPTION_END_UNBOUNDED_PRECEDING
        | FRAMEOPTION_START_UNBOUNDED_FOLLOWING
        | FRAMEOPTION_END_UNBOUNDED_FOLLOWING
        | FRAMEOPTION_START_CURRENT_ROW
        | FRAMEOPTION_END_CURRENT_ROW
        | FRAMEOPTION_START_OFFSET_PRECEDING
        | FRAMEOPTION_END_OFFSET_PRECEDING
        | FRAMEOPTION_START_OFFSET_FOLLOWING
        | FRAMEOPTION_END_OFFSET_FOLLOWING
        | FRAMEOPTION_EXCLUDE_CURRENT_ROW
        | FRAMEOPTION_EXCLUDE_GROUP
        | FRAMEOPTION_EXCLUDE_TIES;

    fn frame_bound(&self, start: bool) -> String {
        let opts = self.frame_options;
        let (unbounded_p, unbounded_f, current, offset_p, offset_f, offset) = if start {
            (
                FRAMEOPTION_START_UNBOUNDED_PRECEDING,
                FRAMEOPTION_START_UNBOUNDED_FOLLOWING,
                FRAMEOPTION_START_CURRENT_ROW,
                FRAMEOPTION_START_OFFSET_PRECEDING,
                FRAMEOPTION_START_OFFSET_FOLLOWING,
                &self.start_offset,
            )
        } else {
            (
                FRAMEOPTION_END_UNBOUNDED_PRECEDING,
                FRAMEOPTION_END_UNBOUNDED_FOLLOWING,
                FRAMEOPTION_END_CURRENT_ROW,
                FRAMEOPTION_END_OFFSET_PRECEDING,
                FRAMEOPTION_END_OFFSET_FOLLOWING,
                &self.end_offset,
            )
        };
        let offset_text = || offset.as_ref().map(Node::to_string).unwrap_or_default();
        if opts & unbounded_p != 0 {
            "unbounded preceding".to_string()
        } else if opts & unbounded_f != 0 {
            "unbounded following".to_string()
        } else if opts & current != 0 {
            "current row".to_string()
        } else if opts & offset_p != 0 {
            format!("{} preceding", offset_text())
        } else if opts & offset_f != 0 {
            format!("{} following", offset_text())
        } else {
            unknown_value("frame bound", opts)
        }
    }

    fn fmt_spec(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut need_space = false;
        if !self.refname.is_empty() {
            f.write_str(&quote_identifier(&self.refname))?;
            need_space = true;
        }
        if !self.partition_clause.is_empty() {
            if need_space {
                f.write_str(" ")?;
            }
            write!(f, "partition by {}", joined(&self.partition_clause))?;
            need_space = true;
        }
        if !self.order_clause.is_empty() {
            if need_space {
                f.write_str(" ")?;
            }
            write!(f, "order by {}", joined(&self.order_clause))?;
            need_space = true;
        }
        if self.frame_options & FRAMEOPTION_NONDEFAULT != 0 {
            if need_space {
                f.write_str(" ")?;
            }
            let opts = self.frame_options;
            if opts & FRAMEOPTION_RANGE != 0 {
                f.write_str("range ")?;
            } else if opts & FRAMEOPTION_ROWS != 0 {
                f.write_str("rows ")?;
            } else if opts & FRAMEOPTION_GROUPS != 0 {
                f.write_str("groups ")?;
            } else {
                write!(f, "{} ", unknown_value("frame unit", opts))?;
            }
            if opts & FRAMEOPTION_BETWEEN != 0 {
                write!(
                    f,
                    "between {} and {}",
                    self.frame_bound(true),
                    self.frame_bound(false)
                )?;
            } else {
                f.write_str(&self.frame_bound(true))?;
            }
            if opts & FRAMEOPTION_EXCLUDE_CURRENT_ROW != 0 {
                f.write_str(" exclude current row")?;
            } else if opts & FRAMEOPTION_EXCLUDE_GROUP != 0 {
                f.write_str(" exclude group")?;
            } else if opts & FRAMEOPTION_EXCLUDE_TIES != 0 {
                f.write_str(" exclude ties")?;
            }
            if opts & !Self::KNOWN_FRAME_BITS != 0 {
                write!(
                    f,
                    " {}",
                    unknown_value("frame option bits", opts & !Self::KNOWN_FRAME_BITS)
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for WindowDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.fmt_spec(f)?;
        f.write_str(")")
    }
}

impl fmt::Display for WithClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("with ")?;
        if self.recursive {
            f.write_str("recursive ")?;
        }
        f.write_str(&joined(&self.ctes))
    }
}

impl fmt::Display for CommonTableExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_identifier(&self.ctename))?;
        if !self.aliascolnames.is_empty() {
            write!(f, " ({})", ident_csv(&self.aliascolnames))?;
        }
        f.write_str(" as ")?;
        match self.ctematerialized {
            CTEMaterialize::Default => {}
            CTEMaterialize::Always => f.write_str("materialized ")?,
            CTEMaterialize::Never => f.write_str("not materialized ")?,
        }
        write!(
            f,
            "({})",
            self.ctequery.as_ref().map(Node::to_string).unwrap_or_default()
        )
    }
}

impl fmt::Display for IntoClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rel) = &self.rel {
            write!(f, "{rel}")?;
        }
        if !self.col_names.is_empty() {
            write!(f, " ({})", ident_csv(&self.col_names))?;
        }
        if !self.access_method.is_empty() {
            write!(f, " using {}", quote_identifier(&self.access_method))?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", joined(&self.options))?;
        }
        match self.on_commit {
            OnCommitAction::Noop => {}
            OnCommitAction::PreserveRows => f.write_str(" on commit preserve rows")?,
            OnCommitAction::DeleteRows => f.write_str(" on commit delete rows")?,
            OnCommitAction::Drop => f.write_str(" on commit drop")?,
        }
        if !self.table_space_name.is_empty() {
            write!(f, " tablespace {}", quote_identifier(&self.table_space_name))?;
        }
        Ok(())
    }
}

impl fmt::Display for InferClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.conname.is_empty() {
            return write!(f, "on constraint {}", quote_identifier(&self.conname));
        }
        write!(f, "({})", joined(&self.index_elems))?;
        fmt_where(f, &self.where_clause)
    }
}

impl fmt::Display for OnConflictClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("on conflict")?;
        if let Some(infer) = &self.infer {
            write!(f, " {infer}")?;
        }
        match self.action {
            OnConflictAction::Nothing => f.write_str(" do nothing")?,
            OnConflictAction::Update => {
                f.write_str(" do update set ")?;
                let mut first = true;
                for target in &self.target_list {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    match target {
                        Node::ResTarget(rt) => f.write_str(&set_target(rt))?,
                        other => write!(f, "{other}")?,
                    }
                }
                fmt_where(f, &self.where_clause)?;
            }
            OnConflictAction::None => {}
        }
        Ok(())
    }
}

impl fmt::Display for LockingClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.strength {
            LockClauseStrength::ForKeyShare => "for key share",
            LockClauseStrength::ForShare => "for share",
            LockClauseStrength::ForNoKeyUpdate => "for no key update",
            LockClauseStrength::ForUpdate => "for update",
        })?;
        if !self.locked_rels.is_empty() {
            write!(f, " of {}", joined(&self.locked_rels))?;
        }
        match self.wait_policy {
            LockWaitPolicy::Block => {}
            LockWaitPolicy::Skip => f.write_str(" skip locked")?,
            LockWaitPolicy::Error => f.write_str(" nowait")?,
        }
        Ok(())
    }
}

impl fmt::Display for GroupingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GroupingSetKind::Empty => f.write_str("()"),
            GroupingSetKind::Simple => write!(f, "({})", joined(&self.content)),
            GroupingSetKind::Rollup => write!(f, "rollup ({})", joined(&self.content)),
            GroupingSetKind::Cube => write!(f, "cube ({})", joined(&self.content)),
            GroupingSetKind::Sets => write!(f, "grouping sets ({})", joined(&self.content)),
        }
    }
}

/// Abbreviated catalog type names and their SQL spellings. The second part
/// lands after any type modifier, so `timestamptz(3)` comes out as
/// `timestamp(3) with time zone`.
fn pg_catalog_spelling(name: &str) -> Option<(&'static str, &'static str)> {
    Some(match name {
        "bool" => ("boolean", ""),
        "int2" => ("smallint", ""),
        "int4" => ("integer", ""),
        "int8" => ("bigint", ""),
        "float4" => ("real", ""),
        "float8" => ("double precision", ""),
        "numeric" => ("numeric", ""),
        "bpchar" => ("char", ""),
        "varchar" => ("varchar", ""),
        "text" => ("text", ""),
        "time" => ("time", ""),
        "timetz" => ("time", " with time zone"),
        "timestamp" => ("timestamp", ""),
        "timestamptz" => ("timestamp", " with time zone"),
        "interval" => ("interval", ""),
        _ => return None,
    })
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.setof {
            f.write_str("setof ")?;
        }
        let catalog_type = if self.names.len() == 2
            && self.names.first().and_then(strval) == Some("pg_catalog")
        {
            self.names.get(1).and_then(strval).and_then(pg_catalog_spelling)
        } else {
            None
        };
        let suffix = match catalog_type {
            Some((spelling, suffix)) => {
                f.write_str(spelling)?;
                suffix
            }
            None => {
                f.write_str(&name_list(&self.names))?;
                ""
            }
        };
        if self.pct_type {
            f.write_str("%type")?;
        }
        if !self.typmods.is_empty() {
            write!(f, "({})", joined(&self.typmods))?;
        }
        f.write_str(suffix)?;
        for bound in &self.array_bounds {
            match bound {
                Node::Integer(n) if n.ival >= 0 => write!(f, "[{}]", n.ival)?,
                _ => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_identifier(&self.colname))?;
        if let Some(t) = &self.type_name {
            write!(f, " {t}")?;
        }
        if !self.storage_name.is_empty() {
            write!(f, " storage {}", self.storage_name)?;
        }
        if !self.compression.is_empty() {
            write!(f, " compression {}", quote_identifier(&self.compression))?;
        }
        if !self.fdwoptions.is_empty() {
            write!(f, " options ({})", joined(&self.fdwoptions))?;
        }
        if let Some(coll) = &self.coll_clause {
            write!(f, " collate {}", name_list(&coll.collname))?;
        }
        if let Some(default) = &self.raw_default {
            write!(f, " default {default}")?;
        }
        if !self.identity.is_empty() {
            match self.identity.as_str() {
                "a" => f.write_str(" generated always as identity")?,
                "d" => f.write_str(" generated by default as identity")?,
                other => write!(f, " {}", unknown_value("identity kind", other))?,
            }
        }
        if self.is_not_null {
            f.write_str(" not null")?;
        }
        for constraint in &self.constraints {
            write!(f, " {constraint}")?;
        }
        Ok(())
    }
}

impl Constraint {
    fn fmt_fk_action(f: &mut fmt::Formatter<'_>, which: &str, action: &str) -> fmt::Result {
        match action {
            // "a" is no action, the default.
            "" | "a" => Ok(()),
            "r" => write!(f, " on {which} restrict"),
            "c" => write!(f, " on {which} cascade"),
            "n" => write!(f, " on {which} set null"),
            "d" => write!(f, " on {which} set default"),
            other => write!(f, " {}", unknown_value("foreign key action", other)),
        }
    }

    fn fmt_index_tail(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.including.is_empty() {
            write!(f, " include ({})", ident_csv(&self.including))?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", joined(&self.options))?;
        }
        if !self.indexspace.is_empty() {
            write!(f, " using index tablespace {}", quote_identifier(&self.indexspace))?;
        }
        Ok(())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.conname.is_empty() {
            write!(f, "constraint {} ", quote_identifier(&self.conname))?;
        }
        match self.contype {
            ConstrType::Null => f.write_str("null")?,
            ConstrType::NotNull => f.write_str("not null")?,
            ConstrType::Default => {
                write!(
                    f,
                    "default {}",
                    self.raw_expr.as_ref().map(Node::to_string).unwrap_or_default()
                )?;
            }
            ConstrType::Identity => {
                match self.generated_when.as_str() {
                    "a" => f.write_str("generated always as identity")?,
                    "d" => f.write_str("generated by default as identity")?,
                    other => {
                        write!(f, "{}", unknown_value("identity kind", other))?;
                    }
                }
                if !self.options.is_empty() {
                    write!(f, " ({})", seq_options(&self.options))?;
                }
            }
            ConstrType::Generated => {
                write!(
                    f,
                    "generated always as ({}) stored",
                    self.raw_expr.as_ref().map(Node::to_string).unwrap_or_default()
                )?;
            }
            ConstrType::Check => {
                write!(
                    f,
                    "check ({})",
                    self.raw_expr.as_ref().map(Node::to_string).unwrap_or_default()
                )?;
                if self.is_no_inherit {
                    f.write_str(" no inherit")?;
                }
            }
            ConstrType::Primary => {
                f.write_str("primary key")?;
                if !self.keys.is_empty() {
                    write!(f, " ({})", ident_csv(&self.keys))?;
                }
                if !self.indexname.is_empty() {
                    write!(f, " using index {}", quote_identifier(&self.indexname))?;
                }
                self.fmt_index_tail(f)?;
            }
            ConstrType::Unique => {
                f.write_str("unique")?;
                if self.nulls_not_distinct {
                    f.write_str(" nulls not distinct")?;
                }
                if !self.keys.is_empty() {
                    write!(f, " ({})", ident_csv(&self.keys))?;
                }
                if !self.indexname.is_empty() {
                    write!(f, " using index {}", quote_identifier(&self.indexname))?;
                }
                self.fmt_index_tail(f)?;
            }
            ConstrType::Exclusion => {
                f.write_str("exclude ")?;
                if !self.access_method.is_empty() {
                    write!(f, "using {} ", quote_identifier(&self.access_method))?;
                }
                // Each exclusion pairs an index element with an operator
                // name list.
                let items = self
                    .exclusions
                    .iter()
                    .map(|ex| match ex {
                        Node::List(pair) => {
                            let elem = pair.first().map(Node::to_string).unwrap_or_default();
                            let op = match pair.get(1) {
                                Some(Node::List(op)) => operator_name(op),
                                Some(other) => other.to_string(),
                                None => String::new(),
                            };
                            format!("{elem} with {op}")
                        }
                        other => other.to_string(),
                    })
                    .join(", ");
                write!(f, "({items})")?;
                self.fmt_index_tail(f)?;
                if let Some(pred) = &self.where_clause {
                    write!(f, " where ({pred})")?;
                }
            }
            ConstrType::Foreign => {
                if !self.fk_attrs.is_empty() {
                    write!(f, "foreign key ({}) ", ident_csv(&self.fk_attrs))?;
                }
                write!(
                    f,
                    "references {}",
                    self.pktable.as_ref().map(|t| t.to_string()).unwrap_or_default()
                )?;
                if !self.pk_attrs.is_empty() {
                    write!(f, " ({})", ident_csv(&self.pk_attrs))?;
                }
                match self.fk_matchtype.as_str() {
                    "" | "s" => {}
                    "f" => f.write_str(" match full")?,
                    "p" => f.write_str(" match partial")?,
                    other => write!(f, " {}", unknown_value("match type", other))?,
                }
                Self::fmt_fk_action(f, "update", &self.fk_upd_action)?;
                if self.fk_del_action == "n" && !self.fk_del_set_cols.is_empty() {
                    write!(f, " on delete set null ({})", ident_csv(&self.fk_del_set_cols))?;
                } else {
                    Self::fmt_fk_action(f, "delete", &self.fk_del_action)?;
                }
            }
            ConstrType::AttrDeferrable => f.write_str("deferrable")?,
            ConstrType::AttrNotDeferrable => f.write_str("not deferrable")?,
            ConstrType::AttrDeferred => f.write_str("initially deferred")?,
            ConstrType::AttrImmediate => f.write_str("initially immediate")?,
        }
        if self.deferrable {
            f.write_str(" deferrable")?;
        }
        if self.initdeferred {
            f.write_str(" initially deferred")?;
        }
        if self.skip_validation {
            f.write_str(" not valid")?;
        }
        Ok(())
    }
}

impl fmt::Display for DefElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.defnamespace.is_empty() {
            write!(f, "{}.", self.defnamespace)?;
        }
        f.write_str(&self.defname)?;
        if let Some(arg) = &self.arg {
            write!(f, " = {}", def_value(arg))?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            f.write_str(&quote_identifier(&self.name))?;
        } else if let Some(expr) = &self.expr {
            // Non-trivial index expressions need their own parens to parse.
            match expr {
                Node::FuncCall(_) => write!(f, "{expr}")?,
                other => write!(f, "({other})")?,
            }
        }
        if !self.collation.is_empty() {
            write!(f, " collate {}", name_list(&self.collation))?;
        }
        if !self.opclass.is_empty() {
            write!(f, " {}", name_list(&self.opclass))?;
            if !self.opclassopts.is_empty() {
                write!(f, " ({})", joined(&self.opclassopts))?;
            }
        }
        match self.ordering {
            SortByDir::Default | SortByDir::Using => {}
            SortByDir::Asc => f.write_str(" asc")?,
            SortByDir::Desc => f.write_str(" desc")?,
        }
        match self.nulls_ordering {
            SortByNulls::Default => {}
            SortByNulls::First => f.write_str(" nulls first")?,
            SortByNulls::Last => f.write_str(" nulls last")?,
        }
        Ok(())
    }
}

impl fmt::Display for TableLikeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "like {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        if self.options == CREATE_TABLE_LIKE_ALL {
            return f.write_str(" including all");
        }
        // Keyword order follows bit order.
        const BITS: &[(i32, &str)] = &[
            (CREATE_TABLE_LIKE_COMMENTS, "comments"),
            (CREATE_TABLE_LIKE_COMPRESSION, "compression"),
            (CREATE_TABLE_LIKE_CONSTRAINTS, "constraints"),
            (CREATE_TABLE_LIKE_DEFAULTS, "defaults"),
            (CREATE_TABLE_LIKE_GENERATED, "generated"),
            (CREATE_TABLE_LIKE_IDENTITY, "identity"),
            (CREATE_TABLE_LIKE_INDEXES, "indexes"),
            (CREATE_TABLE_LIKE_STATISTICS, "statistics"),
            (CREATE_TABLE_LIKE_STORAGE, "storage"),
        ];
        let mut known = 0;
        for &(bit, word) in BITS {
            known |= bit;
            if self.options & bit != 0 {
                write!(f, " including {word}")?;
            }
        }
        if self.options & !known != 0 {
            write!(
                f,
                " {}",
                unknown_value("table like option bits", self.options & !known)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartitionStrategy::Range => "range",
            PartitionStrategy::List => "list",
            PartitionStrategy::Hash => "hash",
        })
    }
}

impl fmt::Display for PartitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "partition by {} ({})", self.strategy, joined(&self.part_params))
    }
}

impl fmt::Display for PartitionElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            f.write_str(&quote_identifier(&self.name))?;
        } else if let Some(expr) = &self.expr {
            match expr {
                Node::FuncCall(_) => write!(f, "{expr}")?,
                other => write!(f, "({other})")?,
            }
        }
        if !self.collation.is_empty() {
            write!(f, " collate {}", name_list(&self.collation))?;
        }
        if !self.opclass.is_empty() {
            write!(f, " {}", name_list(&self.opclass))?;
        }
        Ok(())
    }
}

impl fmt::Display for PartitionBoundSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default {
            return f.write_str("default");
        }
        match self.strategy {
            PartitionStrategy::Hash => write!(
                f,
                "for values with (modulus {}, remainder {})",
                self.modulus, self.remainder
            ),
            PartitionStrategy::List => {
                write!(f, "for values in ({})", joined(&self.listdatums))
            }
            PartitionStrategy::Range => write!(
                f,
                "for values from ({}) to ({})",
                joined(&self.lowerdatums),
                joined(&self.upperdatums)
            ),
        }
    }
}

impl fmt::Display for AccessPriv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.priv_name.is_empty() {
            f.write_str("all privileges")?;
        } else {
            f.write_str(&self.priv_name)?;
        }
        if !self.cols.is_empty() {
            write!(f, " ({})", ident_csv(&self.cols))?;
        }
        Ok(())
    }
}

impl fmt::Display for ObjectWithArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&name_list(&self.objname))?;
        if self.args_unspecified {
            return Ok(());
        }
        if !self.objfuncargs.is_empty() {
            write!(f, "({})", joined(&self.objfuncargs))
        } else {
            write!(f, "({})", joined(&self.objargs))
        }
    }
}

impl fmt::Display for FunctionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FunctionParameterMode::In | FunctionParameterMode::Table => {}
            FunctionParameterMode::Out => f.write_str("out ")?,
            FunctionParameterMode::InOut => f.write_str("inout ")?,
            FunctionParameterMode::Variadic => f.write_str("variadic ")?,
        }
        if !self.name.is_empty() {
            write!(f, "{} ", quote_identifier(&self.name))?;
        }
        if let Some(t) = &self.arg_type {
            write!(f, "{t}")?;
        }
        if let Some(default) = &self.defexpr {
            write!(f, " default {default}")?;
        }
        Ok(())
    }
}

// ============================================================================
// JSON table family
// ============================================================================

impl fmt::Display for JsonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lateral {
            f.write_str("lateral ")?;
        }
        f.write_str("json_table(")?;
        if let Some(ctx) = &self.context_item {
            write!(f, "{ctx}")?;
        }
        if let Some(path) = &self.pathspec {
            write!(f, ", {path}")?;
        }
        if !self.passing.is_empty() {
            write!(f, " passing {}", joined(&self.passing))?;
        }
        write!(f, " columns ({})", joined(&self.columns))?;
        if let Some(plan) = &self.plan {
            write!(f, " plan ({plan})")?;
        }
        f.write_str(")")?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for JsonTableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coltype {
            JsonTableColumnType::ForOrdinality => {
                write!(f, "{} for ordinality", quote_identifier(&self.name))
            }
            JsonTableColumnType::Nested => {
                write!(f, "nested path {}", string_literal(&self.pathspec))?;
                if !self.name.is_empty() {
                    write!(f, " as {}", quote_identifier(&self.name))?;
                }
                write!(f, " columns ({})", joined(&self.columns))
            }
            JsonTableColumnType::Regular
            | JsonTableColumnType::Exists
            | JsonTableColumnType::Formatted => {
                write!(f, "{}", quote_identifier(&self.name))?;
                if let Some(t) = &self.type_name {
                    write!(f, " {t}")?;
                }
                match self.coltype {
                    JsonTableColumnType::Exists => f.write_str(" exists")?,
                    JsonTableColumnType::Formatted => f.write_str(" format json")?,
                    _ => {}
                }
                if !self.pathspec.is_empty() {
                    write!(f, " path {}", string_literal(&self.pathspec))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for JsonTablePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(p1), Some(p2)) = (&self.plan1, &self.plan2) {
            const BITS: &[(i32, &str)] = &[
                (JSTP_JOIN_INNER, "inner"),
                (JSTP_JOIN_OUTER, "outer"),
                (JSTP_JOIN_CROSS, "cross"),
                (JSTP_JOIN_UNION, "union"),
            ];
            let mut words = Vec::new();
            let mut known = 0;
            for &(bit, word) in BITS {
                known |= bit;
                if self.join_type & bit != 0 {
                    words.push(word.to_string());
                }
            }
            if self.join_type & !known != 0 {
                words.push(unknown_value("plan join bits", self.join_type & !known));
            }
            return write!(f, "{p1} {} {p2}", words.join(" "));
        }
        f.write_str(&quote_identifier(&self.pathname))
    }
}

// ============================================================================
// DML statements
// ============================================================================

impl SelectStmt {
    /// True when this arm of a set operation needs its own parens to keep
    /// the original grouping.
    fn needs_parens(&self) -> bool {
        self.op != SetOperation::None
            || !self.sort_clause.is_empty()
            || self.limit_count.is_some()
            || self.limit_offset.is_some()
            || self.with_clause.is_some()
            || !self.locking_clause.is_empty()
    }

    fn fmt_set_arm(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_parens() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn fmt_core(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.values_lists.is_empty() {
            return write!(f, "values {}", joined(&self.values_lists));
        }
        f.write_str("select")?;
        if !self.distinct_clause.is_empty() {
            let plain =
                self.distinct_clause.len() == 1 && self.distinct_clause.first() == Some(&Node::Null);
            if plain {
                f.write_str(" distinct")?;
            } else {
                write!(f, " distinct on ({})", joined(&self.distinct_clause))?;
            }
        }
        if !self.target_list.is_empty() {
            write!(f, " {}", joined(&self.target_list))?;
        }
        if let Some(into) = &self.into_clause {
            write!(f, " into {}{into}", persistence_prefix(&into.rel))?;
        }
        if !self.from_clause.is_empty() {
            write!(f, " from {}", joined(&self.from_clause))?;
        }
        fmt_where(f, &self.where_clause)?;
        if !self.group_clause.is_empty() {
            f.write_str(" group by ")?;
            if self.group_distinct {
                f.write_str("distinct ")?;
            }
            f.write_str(&joined(&self.group_clause))?;
        }
        if let Some(having) = &self.having_clause {
            write!(f, " having {having}")?;
        }
        if !self.window_clause.is_empty() {
            f.write_str(" window ")?;
            let mut first = true;
            for w in &self.window_clause {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                match w {
                    Node::WindowDef(wd) => {
                        write!(f, "{} as {wd}", quote_identifier(&wd.name))?
                    }
                    other => write!(f, "{other}")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SelectStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(with) = &self.with_clause {
            write!(f, "{with} ")?;
        }
        if self.op == SetOperation::None {
            self.fmt_core(f)?;
        } else {
            if let Some(larg) = &self.larg {
                larg.fmt_set_arm(f)?;
            }
            f.write_str(match self.op {
                SetOperation::Union => " union ",
                SetOperation::Intersect => " intersect ",
                SetOperation::Except => " except ",
                SetOperation::None => unreachable!(),
            })?;
            if self.all {
                f.write_str("all ")?;
            }
            if let Some(rarg) = &self.rarg {
                rarg.fmt_set_arm(f)?;
            }
        }
        if !self.sort_clause.is_empty() {
            write!(f, " order by {}", joined(&self.sort_clause))?;
        }
        if let Some(count) = &self.limit_count {
            if self.limit_option == LimitOption::WithTies {
                write!(f, " fetch first {count} rows with ties")?;
            } else {
                write!(f, " limit {count}")?;
            }
        }
        if let Some(offset) = &self.limit_offset {
            write!(f, " offset {offset}")?;
        }
        for lc in &self.locking_clause {
            write!(f, " {lc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for InsertStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_prefix(f, &self.with_clause)?;
        write!(
            f,
            "insert into {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        if !self.cols.is_empty() {
            write!(f, " ({})", self.cols.iter().map(insert_col).join(", "))?;
        }
        match self.override_ {
            OverridingKind::NotSet => {}
            OverridingKind::UserValue => f.write_str(" overriding user value")?,
            OverridingKind::SystemValue => f.write_str(" overriding system value")?,
        }
        match &self.select_stmt {
            Some(sel) => write!(f, " {sel}")?,
            None => f.write_str(" default values")?,
        }
        if let Some(conflict) = &self.on_conflict_clause {
            write!(f, " {conflict}")?;
        }
        fmt_returning(f, &self.returning_list)
    }
}

impl fmt::Display for UpdateStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_prefix(f, &self.with_clause)?;
        write!(
            f,
            "update {} set ",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        let mut first = true;
        for target in &self.target_list {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match target {
                Node::ResTarget(rt) => f.write_str(&set_target(rt))?,
                other => write!(f, "{other}")?,
            }
        }
        if !self.from_clause.is_empty() {
            write!(f, " from {}", joined(&self.from_clause))?;
        }
        fmt_where(f, &self.where_clause)?;
        fmt_returning(f, &self.returning_list)
    }
}

impl fmt::Display for DeleteStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_prefix(f, &self.with_clause)?;
        write!(
            f,
            "delete from {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        if !self.using_clause.is_empty() {
            write!(f, " using {}", joined(&self.using_clause))?;
        }
        fmt_where(f, &self.where_clause)?;
        fmt_returning(f, &self.returning_list)
    }
}

// ============================================================================
// DDL statements
// ============================================================================

impl fmt::Display for CreateStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "create {}table ", persistence_prefix(&self.relation))?;
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        if let Some(rel) = &self.relation {
            write!(f, "{rel}")?;
        }
        if let Some(of_type) = &self.of_typename {
            write!(f, " of {of_type}")?;
            if !self.table_elts.is_empty() {
                write!(f, " ({})", joined(&self.table_elts))?;
            }
        } else if let Some(bound) = &self.partbound {
            // Partition child: the parent travels in inh_relations.
            if let Some(parent) = self.inh_relations.first() {
                write!(f, " partition of {parent}")?;
            }
            if !self.table_elts.is_empty() {
                write!(f, " ({})", joined(&self.table_elts))?;
            }
            write!(f, " {bound}")?;
        } else {
            write!(f, " ({})", joined(&self.table_elts))?;
            if !self.inh_relations.is_empty() {
                write!(f, " inherits ({})", joined(&self.inh_relations))?;
            }
        }
        if let Some(spec) = &self.partspec {
            write!(f, " {spec}")?;
        }
        if !self.access_method.is_empty() {
            write!(f, " using {}", quote_identifier(&self.access_method))?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", joined(&self.options))?;
        }
        match self.oncommit {
            OnCommitAction::Noop => {}
            OnCommitAction::PreserveRows => f.write_str(" on commit preserve rows")?,
            OnCommitAction::DeleteRows => f.write_str(" on commit delete rows")?,
            OnCommitAction::Drop => f.write_str(" on commit drop")?,
        }
        if !self.tablespacename.is_empty() {
            write!(f, " tablespace {}", quote_identifier(&self.tablespacename))?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateTableAsStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rel = self.into.as_ref().and_then(|i| i.rel.clone());
        write!(f, "create {}", persistence_prefix(&rel))?;
        match self.objtype {
            ObjectType::Table => f.write_str("table ")?,
            ObjectType::MatView => f.write_str("materialized view ")?,
            other => {
                write!(f, "{} ", unknown_value("create table as object type", format!("{other:?}")))?;
            }
        }
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        if let Some(into) = &self.into {
            write!(f, "{into}")?;
        }
        write!(
            f,
            " as {}",
            self.query.as_ref().map(Node::to_string).unwrap_or_default()
        )?;
        if self.into.as_ref().is_some_and(|i| i.skip_data) {
            f.write_str(" with no data")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterTableStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alter {} ", object_type_keyword(self.objtype))?;
        if self.missing_ok {
            f.write_str("if exists ")?;
        }
        if let Some(rel) = &self.relation {
            write!(f, "{rel}")?;
        }
        write!(f, " {}", joined(&self.cmds))
    }
}

impl fmt::Display for AlterTableCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = quote_identifier(&self.name);
        let def = || self.def.as_ref().map(Node::to_string).unwrap_or_default();
        let def_items = || match self.def.as_ref() {
            Some(Node::List(items)) => joined(items),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        match self.subtype {
            AlterTableType::AddColumn => {
                f.write_str("add column ")?;
                if self.missing_ok {
                    f.write_str("if not exists ")?;
                }
                f.write_str(&def())
            }
            AlterTableType::ColumnDefault => match &self.def {
                Some(expr) => write!(f, "alter column {name} set default {expr}"),
                None => write!(f, "alter column {name} drop default"),
            },
            AlterTableType::DropNotNull => write!(f, "alter column {name} drop not null"),
            AlterTableType::SetNotNull => write!(f, "alter column {name} set not null"),
            AlterTableType::DropExpression => {
                write!(f, "alter column {name} drop expression")?;
                if self.missing_ok {
                    f.write_str(" if exists")?;
                }
                Ok(())
            }
            AlterTableType::SetStatistics => {
                write!(f, "alter column {name} set statistics {}", def())
            }
            AlterTableType::SetOptions => {
                write!(f, "alter column {name} set ({})", def_items())
            }
            AlterTableType::ResetOptions => {
                write!(f, "alter column {name} reset ({})", def_items())
            }
            AlterTableType::SetStorage => {
                write!(f, "alter column {name} set storage {}", def())
            }
            AlterTableType::SetCompression => {
                write!(f, "alter column {name} set compression {}", def())
            }
            AlterTableType::DropColumn => {
                f.write_str("drop column ")?;
                if self.missing_ok {
                    f.write_str("if exists ")?;
                }
                write!(f, "{name}{}", cascade_suffix(self.behavior))
            }
            AlterTableType::AddConstraint => write!(f, "add {}", def()),
            AlterTableType::AlterConstraint => write!(f, "alter {}", def()),
            AlterTableType::ValidateConstraint => write!(f, "validate constraint {name}"),
            AlterTableType::DropConstraint => {
                f.write_str("drop constraint ")?;
                if self.missing_ok {
                    f.write_str("if exists ")?;
                }
                write!(f, "{name}{}", cascade_suffix(self.behavior))
            }
            AlterTableType::AlterColumnType => match self.def.as_ref() {
                Some(Node::ColumnDef(cd)) => {
                    write!(f, "alter column {name} type ")?;
                    if let Some(t) = &cd.type_name {
                        write!(f, "{t}")?;
                    }
                    if let Some(coll) = &cd.coll_clause {
                        write!(f, " collate {}", name_list(&coll.collname))?;
                    }
                    if let Some(using) = &cd.raw_default {
                        write!(f, " using {using}")?;
                    }
                    Ok(())
                }
                _ => write!(f, "alter column {name} type {}", def()),
            },
            AlterTableType::ChangeOwner => write!(
                f,
                "owner to {}",
                self.newowner.as_ref().map(|o| o.to_string()).unwrap_or_default()
            ),
            AlterTableType::ClusterOn => write!(f, "cluster on {name}"),
            AlterTableType::DropCluster => f.write_str("set without cluster"),
            AlterTableType::SetLogged => f.write_str("set logged"),
            AlterTableType::SetUnLogged => f.write_str("set unlogged"),
            AlterTableType::SetAccessMethod => write!(f, "set access method {name}"),
            AlterTableType::SetTableSpace => write!(f, "set tablespace {name}"),
            AlterTableType::SetRelOptions => write!(f, "set ({})", def_items()),
            AlterTableType::ResetRelOptions => write!(f, "reset ({})", def_items()),
            AlterTableType::EnableTrig => write!(f, "enable trigger {name}"),
            AlterTableType::EnableAlwaysTrig => write!(f, "enable always trigger {name}"),
            AlterTableType::EnableReplicaTrig => write!(f, "enable replica trigger {name}"),
            AlterTableType::DisableTrig => write!(f, "disable trigger {name}"),
            AlterTableType::EnableTrigAll => f.write_str("enable trigger all"),
            AlterTableType::DisableTrigAll => f.write_str("disable trigger all"),
            AlterTableType::EnableTrigUser => f.write_str("enable trigger user"),
            AlterTableType::DisableTrigUser => f.write_str("disable trigger user"),
            AlterTableType::EnableRule => write!(f, "enable rule {name}"),
            AlterTableType::EnableAlwaysRule => write!(f, "enable always rule {name}"),
            AlterTableType::EnableReplicaRule => write!(f, "enable replica rule {name}"),
            AlterTableType::DisableRule => write!(f, "disable rule {name}"),
            AlterTableType::AddInherit => write!(f, "inherit {}", def()),
            AlterTableType::DropInherit => write!(f, "no inherit {}", def()),
            AlterTableType::AddOf => write!(f, "of {}", def()),
            AlterTableType::DropOf => f.write_str("not of"),
            AlterTableType::EnableRowSecurity => f.write_str("enable row level security"),
            AlterTableType::DisableRowSecurity => f.write_str("disable row level security"),
            AlterTableType::ForceRowSecurity => f.write_str("force row level security"),
            AlterTableType::NoForceRowSecurity => f.write_str("no force row level security"),
            AlterTableType::AttachPartition => write!(f, "attach partition {}", def()),
            AlterTableType::DetachPartition => write!(f, "detach partition {}", def()),
            AlterTableType::DetachPartitionFinalize => {
                write!(f, "detach partition {} finalize", def())
            }
            AlterTableType::AddIdentity => write!(f, "alter column {name} add {}", def()),
            AlterTableType::SetIdentity => {
                write!(f, "alter column {name} {}", def_items())
            }
            AlterTableType::DropIdentity => {
                write!(f, "alter column {name} drop identity")?;
                if self.missing_ok {
                    f.write_str(" if exists")?;
                }
                Ok(())
            }
            AlterTableType::ReplicaIdentity | AlterTableType::GenericOptions => f.write_str(
                &unknown_value("alter table subtype", format!("{:?}", self.subtype)),
            ),
        }
    }
}

impl fmt::Display for DropStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drop {}", object_type_keyword(self.remove_type))?;
        if self.concurrent {
            f.write_str(" concurrently")?;
        }
        if self.missing_ok {
            f.write_str(" if exists")?;
        }
        let one = |node: &Node| -> String {
            match self.remove_type {
                // The qualified relation precedes the object's own name.
                ObjectType::Trigger | ObjectType::Rule => match node {
                    Node::List(parts) if parts.len() >= 2 => {
                        let name = parts.last().and_then(strval).unwrap_or_default();
                        let rel = parts
                            .iter()
                            .take(parts.len() - 1)
                            .filter_map(strval)
                            .map(quote_identifier)
                            .join(".");
                        format!("{} on {rel}", quote_identifier(name))
                    }
                    other => any_name(other),
                },
                _ => any_name(node),
            }
        };
        write!(f, " {}", self.objects.iter().map(one).join(", "))?;
        f.write_str(cascade_suffix(self.behavior))
    }
}

impl fmt::Display for TruncateStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truncate table {}", joined(&self.relations))?;
        if self.restart_seqs {
            f.write_str(" restart identity")?;
        }
        f.write_str(cascade_suffix(self.behavior))
    }
}

impl fmt::Display for IndexStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create ")?;
        if self.unique {
            f.write_str("unique ")?;
        }
        f.write_str("index ")?;
        if self.concurrent {
            f.write_str("concurrently ")?;
        }
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        if !self.idxname.is_empty() {
            write!(f, "{} ", quote_identifier(&self.idxname))?;
        }
        write!(
            f,
            "on {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        if !self.access_method.is_empty() && self.access_method != "btree" {
            write!(f, " using {}", quote_identifier(&self.access_method))?;
        }
        write!(f, " ({})", joined(&self.index_params))?;
        if !self.index_including_params.is_empty() {
            write!(f, " include ({})", joined(&self.index_including_params))?;
        }
        if self.nulls_not_distinct {
            f.write_str(" nulls not distinct")?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", joined(&self.options))?;
        }
        if !self.table_space.is_empty() {
            write!(f, " tablespace {}", quote_identifier(&self.table_space))?;
        }
        fmt_where(f, &self.where_clause)
    }
}

impl fmt::Display for CreateSchemaStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create schema")?;
        if self.if_not_exists {
            f.write_str(" if not exists")?;
        }
        if !self.schemaname.is_empty() {
            write!(f, " {}", quote_identifier(&self.schemaname))?;
        }
        if let Some(role) = &self.authrole {
            write!(f, " authorization {role}")?;
        }
        for elt in &self.schema_elts {
            write!(f, " {elt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ViewStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create ")?;
        if self.replace {
            f.write_str("or replace ")?;
        }
        write!(f, "{}view ", persistence_prefix(&self.view))?;
        if let Some(view) = &self.view {
            write!(f, "{view}")?;
        }
        if !self.aliases.is_empty() {
            write!(f, " ({})", ident_csv(&self.aliases))?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", joined(&self.options))?;
        }
        write!(
            f,
            " as {}",
            self.query.as_ref().map(Node::to_string).unwrap_or_default()
        )?;
        match self.with_check_option {
            ViewCheckOption::NoCheckOption => {}
            ViewCheckOption::Local => f.write_str(" with local check option")?,
            ViewCheckOption::Cascaded => f.write_str(" with cascaded check option")?,
        }
        Ok(())
    }
}

/// Function options have clause syntax of their own rather than the generic
/// `name = value` form.
fn function_option(d: &DefElem) -> String {
    let arg_text = || d.arg.as_ref().map(def_value).unwrap_or_default();
    match d.defname.as_str() {
        "language" => format!("language {}", arg_text()),
        "as" => {
            let body = match d.arg.as_ref() {
                Some(Node::List(parts)) => parts
                    .iter()
                    .map(|p| dollar_quote(strval(p).unwrap_or_default()))
                    .join(", "),
                Some(other) => dollar_quote(&def_value(other)),
                None => String::new(),
            };
            format!("as {body}")
        }
        "volatility" => arg_text(),
        "strict" => match d.arg.as_ref() {
            Some(Node::Boolean(b)) if !b.boolval => "called on null input".to_string(),
            _ => "strict".to_string(),
        },
        "security" => match d.arg.as_ref() {
            Some(Node::Boolean(b)) if !b.boolval => "security invoker".to_string(),
            _ => "security definer".to_string(),
        },
        "window" => "window".to_string(),
        "leakproof" => match d.arg.as_ref() {
            Some(Node::Boolean(b)) if !b.boolval => "not leakproof".to_string(),
            _ => "leakproof".to_string(),
        },
        "parallel" => format!("parallel {}", arg_text()),
        "cost" => format!("cost {}", arg_text()),
        "rows" => format!("rows {}", arg_text()),
        "support" => format!("support {}", arg_text()),
        "set" => match d.arg.as_ref() {
            Some(set) => set.to_string(),
            None => String::new(),
        },
        other => format!("{other} {}", arg_text()),
    }
}

impl fmt::Display for CreateFunctionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create ")?;
        if self.replace {
            f.write_str("or replace ")?;
        }
        f.write_str(if self.is_procedure {
            "procedure "
        } else {
            "function "
        })?;
        f.write_str(&name_list(&self.funcname))?;
        let is_table_param = |n: &&Node| {
            matches!(n, Node::FunctionParameter(p) if p.mode == FunctionParameterMode::Table)
        };
        write!(
            f,
            "({})",
            self.parameters
                .iter()
                .filter(|p| !is_table_param(p))
                .join(", ")
        )?;
        let table_params = self.parameters.iter().filter(is_table_param).join(", ");
        if !table_params.is_empty() {
            write!(f, " returns table ({table_params})")?;
        } else if let Some(ret) = &self.return_type {
            write!(f, " returns {ret}")?;
        }
        for opt in &self.options {
            match opt {
                Node::DefElem(d) => write!(f, " {}", function_option(d))?,
                other => write!(f, " {other}")?,
            }
        }
        if let Some(body) = &self.sql_body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

/// Sequence options use keyword syntax (`increment by 2`, `no cycle`) rather
/// than the generic form.
fn seq_options(options: &PgList<Node>) -> String {
    options
        .iter()
        .map(|opt| match opt {
            Node::DefElem(d) => seq_option(d),
            other => other.to_string(),
        })
        .join(" ")
}

fn seq_option(d: &DefElem) -> String {
    let arg_text = || d.arg.as_ref().map(def_value).unwrap_or_default();
    match d.defname.as_str() {
        "as" => format!("as {}", arg_text()),
        "increment" => format!("increment by {}", arg_text()),
        "start" => format!("start with {}", arg_text()),
        "restart" => match d.arg.as_ref() {
            Some(v) => format!("restart with {}", def_value(v)),
            None => "restart".to_string(),
        },
        "minvalue" => match d.arg.as_ref() {
            Some(v) => format!("minvalue {}", def_value(v)),
            None => "no minvalue".to_string(),
        },
        "maxvalue" => match d.arg.as_ref() {
            Some(v) => format!("maxvalue {}", def_value(v)),
            None => "no maxvalue".to_string(),
        },
        "cache" => format!("cache {}", arg_text()),
        "cycle" => match d.arg.as_ref() {
            Some(Node::Boolean(b)) if !b.boolval => "no cycle".to_string(),
            _ => "cycle".to_string(),
        },
        "owned_by" => match d.arg.as_ref() {
            Some(Node::List(parts)) => {
                let owner = parts
                    .iter()
                    .filter_map(strval)
                    .map(quote_identifier)
                    .join(".");
                if owner == "none" {
                    "owned by none".to_string()
                } else {
                    format!("owned by {owner}")
                }
            }
            _ => format!("owned by {}", arg_text()),
        },
        "sequence_name" => format!("sequence name {}", arg_text()),
        "logged" => "logged".to_string(),
        "unlogged" => "unlogged".to_string(),
        other => format!("{other} {}", arg_text()),
    }
}

impl fmt::Display for CreateSeqStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "create {}sequence ", persistence_prefix(&self.sequence))?;
        if self.if_not_exists {
            f.write_str("if not exists ")?;
        }
        if let Some(seq) = &self.sequence {
            write!(f, "{seq}")?;
        }
        if !self.options.is_empty() {
            write!(f, " {}", seq_options(&self.options))?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterSeqStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("alter sequence ")?;
        if self.missing_ok {
            f.write_str("if exists ")?;
        }
        if let Some(seq) = &self.sequence {
            write!(f, "{seq}")?;
        }
        if !self.options.is_empty() {
            write!(f, " {}", seq_options(&self.options))?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateTrigStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create ")?;
        if self.replace {
            f.write_str("or replace ")?;
        }
        if self.isconstraint {
            f.write_str("constraint ")?;
        }
        write!(f, "trigger {} ", quote_identifier(&self.trigname))?;
        if self.timing & TRIGGER_TYPE_BEFORE != 0 {
            f.write_str("before")?;
        } else if self.timing & TRIGGER_TYPE_INSTEAD != 0 {
            f.write_str("instead of")?;
        } else if self.timing == TRIGGER_TYPE_AFTER {
            f.write_str("after")?;
        } else {
            f.write_str(&unknown_value("trigger timing", self.timing))?;
        }
        // Event keywords come out in bit order.
        let mut events = Vec::new();
        if self.events & TRIGGER_TYPE_INSERT != 0 {
            events.push("insert".to_string());
        }
        if self.events & TRIGGER_TYPE_DELETE != 0 {
            events.push("delete".to_string());
        }
        if self.events & TRIGGER_TYPE_UPDATE != 0 {
            if self.columns.is_empty() {
                events.push("update".to_string());
            } else {
                events.push(format!("update of {}", ident_csv(&self.columns)));
            }
        }
        if self.events & TRIGGER_TYPE_TRUNCATE != 0 {
            events.push("truncate".to_string());
        }
        let known = TRIGGER_TYPE_INSERT
            | TRIGGER_TYPE_DELETE
            | TRIGGER_TYPE_UPDATE
            | TRIGGER_TYPE_TRUNCATE;
        if self.events & !known != 0 {
            events.push(unknown_value("trigger event bits", self.events & !known));
        }
        write!(f, " {}", events.join(" or "))?;
        write!(
            f,
            " on {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        if let Some(constrrel) = &self.constrrel {
            write!(f, " from {constrrel}")?;
        }
        if self.deferrable {
            f.write_str(" deferrable")?;
        }
        if self.initdeferred {
            f.write_str(" initially deferred")?;
        }
        if !self.transition_rels.is_empty() {
            write!(f, " referencing {}", self.transition_rels.iter().join(" "))?;
        }
        f.write_str(if self.row {
            " for each row"
        } else {
            " for each statement"
        })?;
        if let Some(when) = &self.when_clause {
            write!(f, " when ({when})")?;
        }
        write!(f, " execute function {}(", name_list(&self.funcname))?;
        let args = self
            .args
            .iter()
            .map(|a| match strval(a) {
                Some(s) => string_literal(s),
                None => a.to_string(),
            })
            .join(", ");
        write!(f, "{args})")
    }
}

impl fmt::Display for RuleStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("create ")?;
        if self.replace {
            f.write_str("or replace ")?;
        }
        write!(f, "rule {} as on ", quote_identifier(&self.rulename))?;
        match self.event {
            CmdType::Select => f.write_str("select")?,
            CmdType::Update => f.write_str("update")?,
            CmdType::Insert => f.write_str("insert")?,
            CmdType::Delete => f.write_str("delete")?,
            other => {
                f.write_str(&unknown_value("rule event", format!("{other:?}")))?;
            }
        }
        write!(
            f,
            " to {}",
            self.relation.as_ref().map(|r| r.to_string()).unwrap_or_default()
        )?;
        fmt_where(f, &self.where_clause)?;
        f.write_str(" do ")?;
        if self.instead {
            f.write_str("instead ")?;
        }
        match self.actions.len() {
            0 => f.write_str("nothing"),
            1 => write!(f, "{}", self.actions.first().map(Node::to_string).unwrap_or_default()),
            _ => write!(f, "({})", self.actions.iter().join("; ")),
        }
    }
}

impl fmt::Display for CreateDomainStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "create domain {} as {}",
            name_list(&self.domainname),
            self.type_name.as_ref().map(|t| t.to_string()).unwrap_or_default()
        )?;
        if let Some(coll) = &self.coll_clause {
            write!(f, " collate {}", name_list(&coll.collname))?;
        }
        for constraint in &self.constraints {
            write!(f, " {constraint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RefreshMatViewStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refresh materialized view ")?;
        if self.concurrent {
            f.write_str("concurrently ")?;
        }
        if let Some(rel) = &self.relation {
            write!(f, "{rel}")?;
        }
        if self.skip_data {
            f.write_str(" with no data")?;
        }
        Ok(())
    }
}

impl fmt::Display for RenameStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rel = || {
            self.relation
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_default()
        };
        let newname = quote_identifier(&self.newname);
        match self.rename_type {
            ObjectType::Column => {
                write!(f, "alter {} ", object_type_keyword(self.relation_type))?;
                if self.missing_ok {
                    f.write_str("if exists ")?;
                }
                write!(
                    f,
                    "{} rename column {} to {newname}",
                    rel(),
                    quote_identifier(&self.subname)
                )
            }
            ObjectType::Constraint => {
                write!(f, "alter {} ", object_type_keyword(self.relation_type))?;
                if self.missing_ok {
                    f.write_str("if exists ")?;
                }
                write!(
                    f,
                    "{} rename constraint {} to {newname}",
                    rel(),
                    quote_identifier(&self.subname)
                )
            }
            ObjectType::Trigger | ObjectType::Rule => write!(
                f,
                "alter {} {} on {} rename to {newname}",
                object_type_keyword(self.rename_type),
                quote_identifier(&self.subname),
                rel()
            ),
            ObjectType::Schema | ObjectType::Database => write!(
                f,
                "alter {} {} rename to {newname}",
                object_type_keyword(self.rename_type),
                quote_identifier(&self.subname)
            ),
            ObjectType::Table
            | ObjectType::Index
            | ObjectType::Sequence
            | ObjectType::View
            | ObjectType::MatView
            | ObjectType::ForeignTable => {
                write!(f, "alter {} ", object_type_keyword(self.rename_type))?;
                if self.missing_ok {
                    f.write_str("if exists ")?;
                }
                write!(f, "{} rename to {newname}", rel())
            }
            _ => {
                write!(f, "alter {} ", object_type_keyword(self.rename_type))?;
                match &self.object {
                    Some(object) => write!(f, "{}", any_name(object))?,
                    None => f.write_str(&rel())?,
                }
                write!(f, " rename to {newname}")
            }
        }
    }
}

impl fmt::Display for CommentStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comment on {} ", object_type_keyword(self.objtype))?;
        match (&self.objtype, &self.object) {
            // A cast's object is a pair of type names.
            (ObjectType::Cast, Some(Node::List(pair))) => write!(
                f,
                "({} as {})",
                pair.first().map(Node::to_string).unwrap_or_default(),
                pair.get(1).map(Node::to_string).unwrap_or_default()
            )?,
            (_, Some(object)) => f.write_str(&any_name(object))?,
            (_, None) => {}
        }
        match &self.comment {
            Some(text) => write!(f, " is {}", string_literal(text)),
            None => f.write_str(" is null"),
        }
    }
}

// ============================================================================
// Administrative statements
// ============================================================================

/// Transaction characteristic options carry their value as a constant; the
/// rendered clause uses keyword syntax.
fn transaction_options(options: &PgList<Node>) -> String {
    options
        .iter()
        .map(|opt| match opt {
            Node::DefElem(d) => {
                let value = d.arg.as_ref().map(def_value).unwrap_or_default();
                match d.defname.as_str() {
                    "transaction_isolation" => format!("isolation level {value}"),
                    "transaction_read_only" => {
                        if value == "1" || value == "true" {
                            "read only".to_string()
                        } else {
                            "read write".to_string()
                        }
                    }
                    "transaction_deferrable" => {
                        if value == "1" || value == "true" {
                            "deferrable".to_string()
                        } else {
                            "not deferrable".to_string()
                        }
                    }
                    other => format!("{other} {value}"),
                }
            }
            other => other.to_string(),
        })
        .join(", ")
}

impl fmt::Display for TransactionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransactionStmtKind::Begin => {
                f.write_str("begin")?;
                if !self.options.is_empty() {
                    write!(f, " {}", transaction_options(&self.options))?;
                }
                Ok(())
            }
            TransactionStmtKind::Start => {
                f.write_str("start transaction")?;
                if !self.options.is_empty() {
                    write!(f, " {}", transaction_options(&self.options))?;
                }
                Ok(())
            }
            TransactionStmtKind::Commit => {
                f.write_str("commit")?;
                if self.chain {
                    f.write_str(" and chain")?;
                }
                Ok(())
            }
            TransactionStmtKind::Rollback => {
                f.write_str("rollback")?;
                if self.chain {
                    f.write_str(" and chain")?;
                }
                Ok(())
            }
            TransactionStmtKind::Savepoint => {
                write!(f, "savepoint {}", quote_identifier(&self.savepoint_name))
            }
            TransactionStmtKind::Release => {
                write!(f, "release savepoint {}", quote_identifier(&self.savepoint_name))
            }
            TransactionStmtKind::RollbackTo => write!(
                f,
                "rollback to savepoint {}",
                quote_identifier(&self.savepoint_name)
            ),
            TransactionStmtKind::Prepare => {
                write!(f, "prepare transaction {}", string_literal(&self.gid))
            }
            TransactionStmtKind::CommitPrepared => {
                write!(f, "commit prepared {}", string_literal(&self.gid))
            }
            TransactionStmtKind::RollbackPrepared => {
                write!(f, "rollback prepared {}", string_literal(&self.gid))
            }
        }
    }
}

impl fmt::Display for VariableSetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = if self.is_local { "local " } else { "" };
        match self.kind {
            VariableSetKind::Value => {
                write!(f, "set {local}{} to {}", self.name, joined(&self.args))
            }
            VariableSetKind::Default => write!(f, "set {local}{} to default", self.name),
            VariableSetKind::Current => write!(f, "set {} from current", self.name),
            VariableSetKind::Multi => match self.name.as_str() {
                "TRANSACTION" => {
                    write!(f, "set transaction {}", transaction_options(&self.args))
                }
                "SESSION CHARACTERISTICS" => write!(
                    f,
                    "set session characteristics as transaction {}",
                    transaction_options(&self.args)
                ),
                other => f.write_str(&unknown_value("set target", other)),
            },
            VariableSetKind::Reset => write!(f, "reset {}", self.name),
            VariableSetKind::ResetAll => f.write_str("reset all"),
        }
    }
}

impl fmt::Display for VariableShowStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "show {}", self.name)
    }
}

/// Utility option lists (`explain (...)`, `vacuum (...)`) use space-separated
/// name/value pairs.
fn utility_options(options: &PgList<Node>) -> String {
    options
        .iter()
        .map(|opt| match opt {
            Node::DefElem(d) => match d.arg.as_ref() {
                Some(arg) => format!("{} {}", d.defname, def_value(arg)),
                None => d.defname.clone(),
            },
            other => other.to_string(),
        })
        .join(", ")
}

impl fmt::Display for ExplainStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("explain")?;
        if !self.options.is_empty() {
            write!(f, " ({})", utility_options(&self.options))?;
        }
        write!(
            f,
            " {}",
            self.query.as_ref().map(Node::to_string).unwrap_or_default()
        )
    }
}

impl fmt::Display for CopyStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("copy ")?;
        match (&self.relation, &self.query) {
            (Some(rel), _) => {
                write!(f, "{rel}")?;
                if !self.attlist.is_empty() {
                    write!(f, " ({})", ident_csv(&self.attlist))?;
                }
            }
            (None, Some(query)) => write!(f, "({query})")?,
            (None, None) => {}
        }
        f.write_str(if self.is_from { " from" } else { " to" })?;
        if self.is_program {
            f.write_str(" program")?;
        }
        if self.filename.is_empty() {
            f.write_str(if self.is_from { " stdin" } else { " stdout" })?;
        } else {
            write!(f, " {}", string_literal(&self.filename))?;
        }
        if !self.options.is_empty() {
            write!(f, " with ({})", utility_options(&self.options))?;
        }
        fmt_where(f, &self.where_clause)
    }
}

impl GrantStmt {
    fn fmt_privileges(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.privileges.is_empty() {
            f.write_str("all privileges")
        } else {
            f.write_str(&joined(&self.privileges))
        }
    }

    fn fmt_objects(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.targtype {
            GrantTargetType::Object => {
                write!(f, "{} ", object_type_keyword(self.objtype))?;
                write!(f, "{}", self.objects.iter().map(any_name).join(", "))
            }
            GrantTargetType::AllInSchema => {
                let plural = match self.objtype {
                    ObjectType::Table => "tables",
                    ObjectType::Sequence => "sequences",
                    ObjectType::Function => "functions",
                    ObjectType::Procedure => "procedures",
                    ObjectType::Routine => "routines",
                    _ => {
                        return f.write_str(&unknown_value(
                            "grant object class",
                            format!("{:?}", self.objtype),
                        ))
                    }
                };
                write!(
                    f,
                    "all {plural} in schema {}",
                    self.objects.iter().map(any_name).join(", ")
                )
            }
            GrantTargetType::Defaults => {
                f.write_str(&unknown_value("grant target", "Defaults"))
            }
        }
    }
}

impl fmt::Display for GrantStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_grant {
            f.write_str("grant ")?;
            self.fmt_privileges(f)?;
            f.write_str(" on ")?;
            self.fmt_objects(f)?;
            write!(f, " to {}", joined(&self.grantees))?;
            if self.grant_option {
                f.write_str(" with grant option")?;
            }
            if let Some(grantor) = &self.grantor {
                write!(f, " granted by {grantor}")?;
            }
            Ok(())
        } else {
            f.write_str("revoke ")?;
            if self.grant_option {
                f.write_str("grant option for ")?;
            }
            self.fmt_privileges(f)?;
            f.write_str(" on ")?;
            self.fmt_objects(f)?;
            write!(f, " from {}", joined(&self.grantees))?;
            f.write_str(cascade_suffix(self.behavior))
        }
    }
}

impl fmt::Display for GrantRoleStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let admin = self.opt.iter().any(|o| match o {
            Node::DefElem(d) => {
                d.defname == "admin"
                    && matches!(d.arg.as_ref(), Some(Node::Boolean(b)) if b.boolval)
            }
            _ => false,
        });
        if self.is_grant {
            write!(
                f,
                "grant {} to {}",
                joined(&self.granted_roles),
                joined(&self.grantee_roles)
            )?;
            if admin {
                f.write_str(" with admin option")?;
            }
            if let Some(grantor) = &self.grantor {
                write!(f, " granted by {grantor}")?;
            }
            Ok(())
        } else {
            f.write_str("revoke ")?;
            if admin {
                f.write_str("admin option for ")?;
            }
            write!(
                f,
                "{} from {}",
                joined(&self.granted_roles),
                joined(&self.grantee_roles)
            )?;
            f.write_str(cascade_suffix(self.behavior))
        }
    }
}

impl fmt::Display for LockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lock table {}", joined(&self.relations))?;
        let mode = match self.mode {
            1 => "access share",
            2 => "row share",
            3 => "row exclusive",
            4 => "share update exclusive",
            5 => "share",
            6 => "share row exclusive",
            7 => "exclusive",
            8 => "access exclusive",
            other => {
                write!(f, " in {} mode", unknown_value("lock mode", other))?;
                if self.nowait {
                    f.write_str(" nowait")?;
                }
                return Ok(());
            }
        };
        write!(f, " in {mode} mode")?;
        if self.nowait {
            f.write_str(" nowait")?;
        }
        Ok(())
    }
}

impl fmt::Display for VacuumStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_vacuumcmd { "vacuum" } else { "analyze" })?;
        if !self.options.is_empty() {
            write!(f, " ({})", utility_options(&self.options))?;
        }
        if !self.rels.is_empty() {
            write!(f, " {}", joined(&self.rels))?;
        }
        Ok(())
    }
}

impl fmt::Display for DoStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("do")?;
        for arg in &self.args {
            if let Node::DefElem(d) = arg {
                if d.defname == "language" {
                    write!(
                        f,
                        " language {}",
                        d.arg.as_ref().map(def_value).unwrap_or_default()
                    )?;
                }
            }
        }
        for arg in &self.args {
            if let Node::DefElem(d) = arg {
                if d.defname == "as" {
                    write!(
                        f,
                        " {}",
                        dollar_quote(&d.arg.as_ref().map(def_value).unwrap_or_default())
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for NotifyStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notify {}", quote_identifier(&self.conditionname))?;
        if !self.payload.is_empty() {
            write!(f, ", {}", string_literal(&self.payload))?;
        }
        Ok(())
    }
}

impl fmt::Display for ListenStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listen {}", quote_identifier(&self.conditionname))
    }
}

impl fmt::Display for UnlistenStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditionname.is_empty() || self.conditionname == "*" {
            f.write_str("unlisten *")
        } else {
            write!(f, "unlisten {}", quote_identifier(&self.conditionname))
        }
    }
}

impl fmt::Display for CheckPointStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("checkpoint")
    }
}

impl fmt::Display for DiscardStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.target {
            DiscardMode::All => "discard all",
            DiscardMode::Plans => "discard plans",
            DiscardMode::Sequences => "discard sequences",
            DiscardMode::Temp => "discard temp",
        })
    }
}

impl fmt::Display for PrepareStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prepare {}", quote_identifier(&self.name))?;
        if !self.argtypes.is_empty() {
            write!(f, " ({})", joined(&self.argtypes))?;
        }
        write!(
            f,
            " as {}",
            self.query.as_ref().map(Node::to_string).unwrap_or_default()
        )
    }
}

impl fmt::Display for ExecuteStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "execute {}", quote_identifier(&self.name))?;
        if !self.params.is_empty() {
            write!(f, " ({})", joined(&self.params))?;
        }
        Ok(())
    }
}

impl fmt::Display for DeallocateStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("deallocate all")
        } else {
            write!(f, "deallocate {}", quote_identifier(&self.name))
        }
    }
}

impl fmt::Display for ClosePortalStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.portalname.is_empty() {
            f.write_str("close all")
        } else {
            write!(f, "close {}", quote_identifier(&self.portalname))
        }
    }
}

impl fmt::Display for FetchStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.ismove { "move" } else { "fetch" })?;
        match self.direction {
            FetchDirection::Forward => {
                if self.how_many == FETCH_ALL {
                    f.write_str(" all")?;
                } else if self.how_many != 1 {
                    write!(f, " forward {}", self.how_many)?;
                }
            }
            FetchDirection::Backward => {
                if self.how_many == FETCH_ALL {
                    f.write_str(" backward all")?;
                } else {
                    write!(f, " backward {}", self.how_many)?;
                }
            }
            FetchDirection::Absolute => write!(f, " absolute {}", self.how_many)?,
            FetchDirection::Relative => write!(f, " relative {}", self.how_many)?,
        }
        write!(f, " from {}", quote_identifier(&self.portalname))
    }
}
