//! The parse-tree node model: one struct per grammar node type, collected
//! under the [`Node`] sum type.
//!
//! Trees are built by an external producer and are in practice always trees:
//! every child node and list is exclusively owned by its parent. `Clone` is
//! the deep-copy protocol — owned children are cloned recursively, scalars
//! copied — so cloning never changes what a tree renders to.
//!
//! A few fields are relics of older grammar versions (`RangeVar::inh_opt`,
//! `DropStmt::arguments`, `ObjectWithArgs::operargs`). They exist so trees
//! from old producers remain representable, are never read by any renderer,
//! and are rejected by [`copy_checked`](super::copy_checked) when populated.

use serde::{Deserialize, Serialize};

use crate::list::PgList;
use crate::str::quote_identifier;

/// A statement wrapper carrying the source span of the statement text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawStmt {
    pub stmt: Node,
    /// Character offset in the original source, -1 when unknown.
    pub stmt_location: i32,
    /// Length in characters, 0 meaning "rest of string".
    pub stmt_len: i32,
}

/// The closed set of node variants. Tree-walking code matches on this (or on
/// [`Node::tag`]) rather than doing any runtime type inspection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Node {
    // Primitive values
    Integer(Integer),
    Float(Float),
    Boolean(Boolean),
    String(StringValue),
    BitString(BitString),
    #[default]
    Null,
    AStar(AStar),

    /// A nested list; renders as `(e1, e2, ...)`.
    List(PgList<Node>),

    // Expressions
    AExpr(Box<AExpr>),
    ColumnRef(Box<ColumnRef>),
    ParamRef(Box<ParamRef>),
    AConst(Box<AConst>),
    TypeCast(Box<TypeCast>),
    CollateClause(Box<CollateClause>),
    FuncCall(Box<FuncCall>),
    AIndices(Box<AIndices>),
    AIndirection(Box<AIndirection>),
    AArrayExpr(Box<AArrayExpr>),
    SubLink(Box<SubLink>),
    BoolExpr(Box<BoolExpr>),
    NullTest(Box<NullTest>),
    BooleanTest(Box<BooleanTest>),
    CaseExpr(Box<CaseExpr>),
    CaseWhen(Box<CaseWhen>),
    CoalesceExpr(Box<CoalesceExpr>),
    MinMaxExpr(Box<MinMaxExpr>),
    RowExpr(Box<RowExpr>),

    // Targets and range items
    ResTarget(Box<ResTarget>),
    RangeVar(Box<RangeVar>),
    RangeSubselect(Box<RangeSubselect>),
    RangeFunction(Box<RangeFunction>),
    JoinExpr(Box<JoinExpr>),
    Alias(Box<Alias>),
    RoleSpec(Box<RoleSpec>),

    // Clause building blocks
    SortBy(Box<SortBy>),
    WindowDef(Box<WindowDef>),
    WithClause(Box<WithClause>),
    CommonTableExpr(Box<CommonTableExpr>),
    IntoClause(Box<IntoClause>),
    InferClause(Box<InferClause>),
    OnConflictClause(Box<OnConflictClause>),
    LockingClause(Box<LockingClause>),
    GroupingSet(Box<GroupingSet>),
    TypeName(Box<TypeName>),
    ColumnDef(Box<ColumnDef>),
    Constraint(Box<Constraint>),
    DefElem(Box<DefElem>),
    IndexElem(Box<IndexElem>),
    TableLikeClause(Box<TableLikeClause>),
    PartitionSpec(Box<PartitionSpec>),
    PartitionElem(Box<PartitionElem>),
    PartitionBoundSpec(Box<PartitionBoundSpec>),
    AccessPriv(Box<AccessPriv>),
    ObjectWithArgs(Box<ObjectWithArgs>),
    FunctionParameter(Box<FunctionParameter>),

    // JSON table family
    JsonTable(Box<JsonTable>),
    JsonTableColumn(Box<JsonTableColumn>),
    JsonTablePlan(Box<JsonTablePlan>),

    // DML statements
    SelectStmt(Box<SelectStmt>),
    InsertStmt(Box<InsertStmt>),
    UpdateStmt(Box<UpdateStmt>),
    DeleteStmt(Box<DeleteStmt>),

    // DDL statements
    CreateStmt(Box<CreateStmt>),
    CreateTableAsStmt(Box<CreateTableAsStmt>),
    AlterTableStmt(Box<AlterTableStmt>),
    AlterTableCmd(Box<AlterTableCmd>),
    DropStmt(Box<DropStmt>),
    TruncateStmt(Box<TruncateStmt>),
    IndexStmt(Box<IndexStmt>),
    CreateSchemaStmt(Box<CreateSchemaStmt>),
    ViewStmt(Box<ViewStmt>),
    CreateFunctionStmt(Box<CreateFunctionStmt>),
    CreateSeqStmt(Box<CreateSeqStmt>),
    AlterSeqStmt(Box<AlterSeqStmt>),
    CreateTrigStmt(Box<CreateTrigStmt>),
    RuleStmt(Box<RuleStmt>),
    CreateDomainStmt(Box<CreateDomainStmt>),
    RefreshMatViewStmt(Box<RefreshMatViewStmt>),
    RenameStmt(Box<RenameStmt>),
    CommentStmt(Box<CommentStmt>),

    // Administrative statements
    TransactionStmt(Box<TransactionStmt>),
    VariableSetStmt(Box<VariableSetStmt>),
    VariableShowStmt(Box<VariableShowStmt>),
    ExplainStmt(Box<ExplainStmt>),
    CopyStmt(Box<CopyStmt>),
    GrantStmt(Box<GrantStmt>),
    GrantRoleStmt(Box<GrantRoleStmt>),
    LockStmt(Box<LockStmt>),
    VacuumStmt(Box<VacuumStmt>),
    DoStmt(Box<DoStmt>),
    NotifyStmt(Box<NotifyStmt>),
    ListenStmt(Box<ListenStmt>),
    UnlistenStmt(Box<UnlistenStmt>),
    CheckPointStmt(Box<CheckPointStmt>),
    DiscardStmt(Box<DiscardStmt>),
    PrepareStmt(Box<PrepareStmt>),
    ExecuteStmt(Box<ExecuteStmt>),
    DeallocateStmt(Box<DeallocateStmt>),
    ClosePortalStmt(Box<ClosePortalStmt>),
    FetchStmt(Box<FetchStmt>),
}

/// Discriminant identifying a node's concrete variant. Fixed at construction
/// by the variant itself; generic walkers dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeTag {
    Integer,
    Float,
    Boolean,
    String,
    BitString,
    Null,
    AStar,
    List,
    AExpr,
    ColumnRef,
    ParamRef,
    AConst,
    TypeCast,
    CollateClause,
    FuncCall,
    AIndices,
    AIndirection,
    AArrayExpr,
    SubLink,
    BoolExpr,
    NullTest,
    BooleanTest,
    CaseExpr,
    CaseWhen,
    CoalesceExpr,
    MinMaxExpr,
    RowExpr,
    ResTarget,
    RangeVar,
    RangeSubselect,
    RangeFunction,
    JoinExpr,
    Alias,
    RoleSpec,
    SortBy,
    WindowDef,
    WithClause,
    CommonTableExpr,
    IntoClause,
    InferClause,
    OnConflictClause,
    LockingClause,
    GroupingSet,
    TypeName,
    ColumnDef,
    Constraint,
    DefElem,
    IndexElem,
    TableLikeClause,
    PartitionSpec,
    PartitionElem,
    PartitionBoundSpec,
    AccessPriv,
    ObjectWithArgs,
    FunctionParameter,
    JsonTable,
    JsonTableColumn,
    JsonTablePlan,
    SelectStmt,
    InsertStmt,
    UpdateStmt,
    DeleteStmt,
    CreateStmt,
    CreateTableAsStmt,
    AlterTableStmt,
    AlterTableCmd,
    DropStmt,
    TruncateStmt,
    IndexStmt,
    CreateSchemaStmt,
    ViewStmt,
    CreateFunctionStmt,
    CreateSeqStmt,
    AlterSeqStmt,
    CreateTrigStmt,
    RuleStmt,
    CreateDomainStmt,
    RefreshMatViewStmt,
    RenameStmt,
    CommentStmt,
    TransactionStmt,
    VariableSetStmt,
    VariableShowStmt,
    ExplainStmt,
    CopyStmt,
    GrantStmt,
    GrantRoleStmt,
    LockStmt,
    VacuumStmt,
    DoStmt,
    NotifyStmt,
    ListenStmt,
    UnlistenStmt,
    CheckPointStmt,
    DiscardStmt,
    PrepareStmt,
    ExecuteStmt,
    DeallocateStmt,
    ClosePortalStmt,
    FetchStmt,
}

impl Node {
    pub fn tag(&self) -> NodeTag {
        match self {
            Node::Integer(_) => NodeTag::Integer,
            Node::Float(_) => NodeTag::Float,
            Node::Boolean(_) => NodeTag::Boolean,
            Node::String(_) => NodeTag::String,
            Node::BitString(_) => NodeTag::BitString,
            Node::Null => NodeTag::Null,
            Node::AStar(_) => NodeTag::AStar,
            Node::List(_) => NodeTag::List,
            Node::AExpr(_) => NodeTag::AExpr,
            Node::ColumnRef(_) => NodeTag::ColumnRef,
            Node::ParamRef(_) => NodeTag::ParamRef,
            Node::AConst(_) => NodeTag::AConst,
            Node::TypeCast(_) => NodeTag::TypeCast,
            Node::CollateClause(_) => NodeTag::CollateClause,
            Node::FuncCall(_) => NodeTag::FuncCall,
            Node::AIndices(_) => NodeTag::AIndices,
            Node::AIndirection(_) => NodeTag::AIndirection,
            Node::AArrayExpr(_) => NodeTag::AArrayExpr,
            Node::SubLink(_) => NodeTag::SubLink,
            Node::BoolExpr(_) => NodeTag::BoolExpr,
            Node::NullTest(_) => NodeTag::NullTest,
            Node::BooleanTest(_) => NodeTag::BooleanTest,
            Node::CaseExpr(_) => NodeTag::CaseExpr,
            Node::CaseWhen(_) => NodeTag::CaseWhen,
            Node::CoalesceExpr(_) => NodeTag::CoalesceExpr,
            Node::MinMaxExpr(_) => NodeTag::MinMaxExpr,
            Node::RowExpr(_) => NodeTag::RowExpr,
            Node::ResTarget(_) => NodeTag::ResTarget,
            Node::RangeVar(_) => NodeTag::RangeVar,
            Node::RangeSubselect(_) => NodeTag::RangeSubselect,
            Node::RangeFunction(_) => NodeTag::RangeFunction,
            Node::JoinExpr(_) => NodeTag::JoinExpr,
            Node::Alias(_) => NodeTag::Alias,
            Node::RoleSpec(_) => NodeTag::RoleSpec,
            Node::SortBy(_) => NodeTag::SortBy,
            Node::WindowDef(_) => NodeTag::WindowDef,
            Node::WithClause(_) => NodeTag::WithClause,
            Node::CommonTableExpr(_) => NodeTag::CommonTableExpr,
            Node::IntoClause(_) => NodeTag::IntoClause,
            Node::InferClause(_) => NodeTag::InferClause,
            Node::OnConflictClause(_) => NodeTag::OnConflictClause,
            Node::LockingClause(_) => NodeTag::LockingClause,
            Node::GroupingSet(_) => NodeTag::GroupingSet,
            Node::TypeName(_) => NodeTag::TypeName,
            Node::ColumnDef(_) => NodeTag::ColumnDef,
            Node::Constraint(_) => NodeTag::Constraint,
            Node::DefElem(_) => NodeTag::DefElem,
            Node::IndexElem(_) => NodeTag::IndexElem,
            Node::TableLikeClause(_) => NodeTag::TableLikeClause,
            Node::PartitionSpec(_) => NodeTag::PartitionSpec,
            Node::PartitionElem(_) => NodeTag::PartitionElem,
            Node::PartitionBoundSpec(_) => NodeTag::PartitionBoundSpec,
            Node::AccessPriv(_) => NodeTag::AccessPriv,
            Node::ObjectWithArgs(_) => NodeTag::ObjectWithArgs,
            Node::FunctionParameter(_) => NodeTag::FunctionParameter,
            Node::JsonTable(_) => NodeTag::JsonTable,
            Node::JsonTableColumn(_) => NodeTag::JsonTableColumn,
            Node::JsonTablePlan(_) => NodeTag::JsonTablePlan,
            Node::SelectStmt(_) => NodeTag::SelectStmt,
            Node::InsertStmt(_) => NodeTag::InsertStmt,
            Node::UpdateStmt(_) => NodeTag::UpdateStmt,
            Node::DeleteStmt(_) => NodeTag::DeleteStmt,
            Node::CreateStmt(_) => NodeTag::CreateStmt,
            Node::CreateTableAsStmt(_) => NodeTag::CreateTableAsStmt,
            Node::AlterTableStmt(_) => NodeTag::AlterTableStmt,
            Node::AlterTableCmd(_) => NodeTag::AlterTableCmd,
            Node::DropStmt(_) => NodeTag::DropStmt,
            Node::TruncateStmt(_) => NodeTag::TruncateStmt,
            Node::IndexStmt(_) => NodeTag::IndexStmt,
            Node::CreateSchemaStmt(_) => NodeTag::CreateSchemaStmt,
            Node::ViewStmt(_) => NodeTag::ViewStmt,
            Node::CreateFunctionStmt(_) => NodeTag::CreateFunctionStmt,
            Node::CreateSeqStmt(_) => NodeTag::CreateSeqStmt,
            Node::AlterSeqStmt(_) => NodeTag::AlterSeqStmt,
            Node::CreateTrigStmt(_) => NodeTag::CreateTrigStmt,
            Node::RuleStmt(_) => NodeTag::RuleStmt,
            Node::CreateDomainStmt(_) => NodeTag::CreateDomainStmt,
            Node::RefreshMatViewStmt(_) => NodeTag::RefreshMatViewStmt,
            Node::RenameStmt(_) => NodeTag::RenameStmt,
            Node::CommentStmt(_) => NodeTag::CommentStmt,
            Node::TransactionStmt(_) => NodeTag::TransactionStmt,
            Node::VariableSetStmt(_) => NodeTag::VariableSetStmt,
            Node::VariableShowStmt(_) => NodeTag::VariableShowStmt,
            Node::ExplainStmt(_) => NodeTag::ExplainStmt,
            Node::CopyStmt(_) => NodeTag::CopyStmt,
            Node::GrantStmt(_) => NodeTag::GrantStmt,
            Node::GrantRoleStmt(_) => NodeTag::GrantRoleStmt,
            Node::LockStmt(_) => NodeTag::LockStmt,
            Node::VacuumStmt(_) => NodeTag::VacuumStmt,
            Node::DoStmt(_) => NodeTag::DoStmt,
            Node::NotifyStmt(_) => NodeTag::NotifyStmt,
            Node::ListenStmt(_) => NodeTag::ListenStmt,
            Node::UnlistenStmt(_) => NodeTag::UnlistenStmt,
            Node::CheckPointStmt(_) => NodeTag::CheckPointStmt,
            Node::DiscardStmt(_) => NodeTag::DiscardStmt,
            Node::PrepareStmt(_) => NodeTag::PrepareStmt,
            Node::ExecuteStmt(_) => NodeTag::ExecuteStmt,
            Node::DeallocateStmt(_) => NodeTag::DeallocateStmt,
            Node::ClosePortalStmt(_) => NodeTag::ClosePortalStmt,
            Node::FetchStmt(_) => NodeTag::FetchStmt,
        }
    }
}

// ============================================================================
// Primitive value types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Integer {
    pub ival: i32,
}

/// Floats carry their source spelling so rendering loses no precision.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Float {
    pub fval: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Boolean {
    pub boolval: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StringValue {
    pub sval: String,
}

/// Bit string; `bsval` keeps the `b`/`x` radix prefix from the source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BitString {
    pub bsval: String,
}

/// The `*` in a column reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AStar;

// ============================================================================
// Expressions
// ============================================================================

/// Operator-style expression; `kind` selects the surface syntax.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AExpr {
    pub kind: AExprKind,
    /// Possibly-qualified operator name as a list of string leaves.
    pub name: PgList<Node>,
    pub lexpr: Option<Node>,
    pub rexpr: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnRef {
    /// String leaves and/or a trailing `AStar`.
    pub fields: PgList<Node>,
    pub location: i32,
}

/// `$n` parameter reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamRef {
    pub number: i32,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AConst {
    pub val: Option<AConstValue>,
    pub isnull: bool,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AConstValue {
    Integer(Integer),
    Float(Float),
    Boolean(Boolean),
    String(StringValue),
    BitString(BitString),
}

impl AConstValue {
    pub fn int(ival: i32) -> Self {
        AConstValue::Integer(Integer { ival })
    }

    pub fn float(fval: impl Into<String>) -> Self {
        AConstValue::Float(Float { fval: fval.into() })
    }

    pub fn bool(boolval: bool) -> Self {
        AConstValue::Boolean(Boolean { boolval })
    }

    pub fn string(sval: impl Into<String>) -> Self {
        AConstValue::String(StringValue { sval: sval.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeCast {
    pub arg: Option<Node>,
    pub type_name: Option<TypeName>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollateClause {
    pub arg: Option<Node>,
    pub collname: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuncCall {
    pub funcname: PgList<Node>,
    pub args: PgList<Node>,
    pub agg_order: PgList<Node>,
    pub agg_filter: Option<Node>,
    pub over: Option<WindowDef>,
    pub agg_within_group: bool,
    pub agg_star: bool,
    pub agg_distinct: bool,
    pub func_variadic: bool,
    pub location: i32,
}

/// Array subscript: `[uidx]`, or `[lidx:uidx]` when `is_slice`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AIndices {
    pub is_slice: bool,
    pub lidx: Option<Node>,
    pub uidx: Option<Node>,
}

/// Subscripting or field selection applied to an expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AIndirection {
    pub arg: Option<Node>,
    pub indirection: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AArrayExpr {
    pub elements: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubLink {
    pub sub_link_type: SubLinkType,
    pub testexpr: Option<Node>,
    pub oper_name: PgList<Node>,
    pub subselect: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoolExpr {
    pub boolop: BoolExprType,
    pub args: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NullTest {
    pub arg: Option<Node>,
    pub nulltesttype: NullTestType,
    pub argisrow: bool,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BooleanTest {
    pub arg: Option<Node>,
    pub booltesttype: BoolTestType,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseExpr {
    pub arg: Option<Node>,
    pub args: PgList<Node>,
    pub defresult: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseWhen {
    pub expr: Option<Node>,
    pub result: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoalesceExpr {
    pub args: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MinMaxExpr {
    pub op: MinMaxOp,
    pub args: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowExpr {
    pub args: PgList<Node>,
    pub explicit_row: bool,
    pub location: i32,
}

// ============================================================================
// Targets and range items
// ============================================================================

/// A select-list entry, a SET target, or an insert column, depending on the
/// statement that owns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResTarget {
    pub name: String,
    pub indirection: PgList<Node>,
    pub val: Option<Node>,
    pub location: i32,
}

/// A (possibly qualified, possibly aliased) relation reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeVar {
    pub catalogname: String,
    pub schemaname: String,
    pub relname: String,
    /// False renders the `only` prefix.
    pub inh: bool,
    /// `p` permanent, `u` unlogged, `t` temporary.
    pub relpersistence: String,
    pub alias: Option<Alias>,
    pub location: i32,
    /// Pre-v10 inheritance marker, superseded by `inh`. Never rendered;
    /// rejected by checked copying when populated.
    #[deprecated(note = "superseded by `inh`")]
    pub inh_opt: Option<i32>,
}

impl Default for RangeVar {
    fn default() -> Self {
        #[allow(deprecated)]
        RangeVar {
            catalogname: String::new(),
            schemaname: String::new(),
            relname: String::new(),
            inh: true,
            relpersistence: "p".into(),
            alias: None,
            location: -1,
            inh_opt: None,
        }
    }
}

impl RangeVar {
    pub fn new(relname: impl Into<String>) -> Self {
        RangeVar { relname: relname.into(), ..Default::default() }
    }

    pub fn qualified(schemaname: impl Into<String>, relname: impl Into<String>) -> Self {
        RangeVar {
            schemaname: schemaname.into(),
            relname: relname.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSubselect {
    pub lateral: bool,
    pub subquery: Option<Node>,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeFunction {
    pub lateral: bool,
    pub ordinality: bool,
    pub is_rowsfrom: bool,
    /// Each element is a two-element list: the call and its column
    /// definition list (empty when absent).
    pub functions: PgList<Node>,
    pub alias: Option<Alias>,
    pub coldeflist: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JoinExpr {
    pub jointype: JoinType,
    pub is_natural: bool,
    pub larg: Option<Node>,
    pub rarg: Option<Node>,
    pub using_clause: PgList<Node>,
    pub join_using_alias: Option<Alias>,
    pub quals: Option<Node>,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Alias {
    pub aliasname: String,
    pub colnames: PgList<Node>,
}

impl Alias {
    pub fn new(aliasname: impl Into<String>) -> Self {
        Alias { aliasname: aliasname.into(), colnames: PgList::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleSpec {
    pub roletype: RoleSpecType,
    pub rolename: String,
    pub location: i32,
}

// ============================================================================
// Clause building blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SortBy {
    pub node: Option<Node>,
    pub sortby_dir: SortByDir,
    pub sortby_nulls: SortByNulls,
    pub use_op: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowDef {
    pub name: String,
    pub refname: String,
    pub partition_clause: PgList<Node>,
    pub order_clause: PgList<Node>,
    /// `FRAMEOPTION_*` bit set.
    pub frame_options: i32,
    pub start_offset: Option<Node>,
    pub end_offset: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WithClause {
    pub ctes: PgList<Node>,
    pub recursive: bool,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommonTableExpr {
    pub ctename: String,
    pub aliascolnames: PgList<Node>,
    pub ctematerialized: CTEMaterialize,
    pub ctequery: Option<Node>,
    pub location: i32,
}

/// Target of `select into` / `create table as`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntoClause {
    pub rel: Option<RangeVar>,
    pub col_names: PgList<Node>,
    pub access_method: String,
    pub options: PgList<Node>,
    pub on_commit: OnCommitAction,
    pub table_space_name: String,
    pub skip_data: bool,
}

/// Conflict target of `on conflict`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InferClause {
    pub index_elems: PgList<Node>,
    pub where_clause: Option<Node>,
    pub conname: String,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnConflictClause {
    pub action: OnConflictAction,
    pub infer: Option<InferClause>,
    pub target_list: PgList<Node>,
    pub where_clause: Option<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LockingClause {
    pub locked_rels: PgList<Node>,
    pub strength: LockClauseStrength,
    pub wait_policy: LockWaitPolicy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupingSet {
    pub kind: GroupingSetKind,
    pub content: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeName {
    /// Possibly-qualified name as string leaves.
    pub names: PgList<Node>,
    pub setof: bool,
    pub pct_type: bool,
    pub typmods: PgList<Node>,
    pub array_bounds: PgList<Node>,
    pub location: i32,
}

impl TypeName {
    pub fn simple(name: impl Into<String>) -> Self {
        TypeName { names: crate::pg_list![Node::string(name)], ..Default::default() }
    }

    /// A type from the system catalog, rendered with its SQL spelling
    /// (`int4` as `integer`, and so on).
    pub fn pg_catalog(name: impl Into<String>) -> Self {
        TypeName {
            names: crate::pg_list![Node::string("pg_catalog"), Node::string(name)],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnDef {
    pub colname: String,
    pub type_name: Option<TypeName>,
    pub compression: String,
    pub storage_name: String,
    pub is_not_null: bool,
    pub is_from_type: bool,
    pub raw_default: Option<Node>,
    /// `a` always, `d` by default; empty when not an identity column.
    pub identity: String,
    /// `s` stored; empty when not a generated column.
    pub generated: String,
    pub coll_clause: Option<CollateClause>,
    pub constraints: PgList<Node>,
    pub fdwoptions: PgList<Node>,
    pub location: i32,
}

impl ColumnDef {
    pub fn new(colname: impl Into<String>, type_name: TypeName) -> Self {
        ColumnDef {
            colname: colname.into(),
            type_name: Some(type_name),
            ..Default::default()
        }
    }
}

/// Column or table constraint; `contype` selects which fields apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraint {
    pub contype: ConstrType,
    pub conname: String,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub is_no_inherit: bool,
    pub raw_expr: Option<Node>,
    /// `a` always, `d` by default (identity and generated constraints).
    pub generated_when: String,
    pub nulls_not_distinct: bool,
    pub keys: PgList<Node>,
    pub including: PgList<Node>,
    pub exclusions: PgList<Node>,
    pub options: PgList<Node>,
    pub indexname: String,
    pub indexspace: String,
    pub access_method: String,
    pub where_clause: Option<Node>,
    pub pktable: Option<RangeVar>,
    pub fk_attrs: PgList<Node>,
    pub pk_attrs: PgList<Node>,
    /// `f` full, `p` partial, `s` simple.
    pub fk_matchtype: String,
    /// `a` no action, `r` restrict, `c` cascade, `n` set null, `d` set
    /// default.
    pub fk_upd_action: String,
    pub fk_del_action: String,
    pub fk_del_set_cols: PgList<Node>,
    pub skip_validation: bool,
    pub initially_valid: bool,
    pub location: i32,
}

/// Generic name/value option element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefElem {
    pub defnamespace: String,
    pub defname: String,
    pub arg: Option<Node>,
    pub defaction: DefElemAction,
    pub location: i32,
}

impl DefElem {
    pub fn new(defname: impl Into<String>, arg: Option<Node>) -> Self {
        DefElem { defname: defname.into(), arg, ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexElem {
    pub name: String,
    pub expr: Option<Node>,
    pub indexcolname: String,
    pub collation: PgList<Node>,
    pub opclass: PgList<Node>,
    pub opclassopts: PgList<Node>,
    pub ordering: SortByDir,
    pub nulls_ordering: SortByNulls,
}

/// `like parent including ...` in a table definition; `options` is a
/// `CREATE_TABLE_LIKE_*` bit set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableLikeClause {
    pub relation: Option<RangeVar>,
    pub options: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionSpec {
    pub strategy: PartitionStrategy,
    pub part_params: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionElem {
    pub name: String,
    pub expr: Option<Node>,
    pub collation: PgList<Node>,
    pub opclass: PgList<Node>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionBoundSpec {
    pub strategy: PartitionStrategy,
    pub is_default: bool,
    pub modulus: i32,
    pub remainder: i32,
    pub listdatums: PgList<Node>,
    pub lowerdatums: PgList<Node>,
    pub upperdatums: PgList<Node>,
    pub location: i32,
}

/// One privilege in a GRANT/REVOKE list; an empty `priv_name` means
/// `all privileges`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessPriv {
    pub priv_name: String,
    pub cols: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectWithArgs {
    pub objname: PgList<Node>,
    pub objargs: PgList<Node>,
    pub objfuncargs: PgList<Node>,
    pub args_unspecified: bool,
    /// Pre-v10 operator argument list, superseded by `objfuncargs`. Never
    /// rendered; rejected by checked copying when populated.
    #[deprecated(note = "superseded by `objfuncargs`")]
    pub operargs: Option<PgList<Node>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    pub arg_type: Option<TypeName>,
    pub mode: FunctionParameterMode,
    pub defexpr: Option<Node>,
}

// ============================================================================
// JSON table family
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonTable {
    pub context_item: Option<Node>,
    pub pathspec: Option<Node>,
    pub passing: PgList<Node>,
    pub columns: PgList<Node>,
    pub plan: Option<Node>,
    pub lateral: bool,
    pub alias: Option<Alias>,
    pub location: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonTableColumn {
    pub coltype: JsonTableColumnType,
    pub name: String,
    pub type_name: Option<TypeName>,
    pub pathspec: String,
    /// Nested column list, for `coltype == Nested`.
    pub columns: PgList<Node>,
    pub location: i32,
}

/// A `plan (...)` clause element; `join_type` is a `JSTP_JOIN_*` bit set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonTablePlan {
    pub pathname: String,
    pub join_type: i32,
    pub plan1: Option<Node>,
    pub plan2: Option<Node>,
    pub location: i32,
}

// ============================================================================
// DML statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectStmt {
    pub distinct_clause: PgList<Node>,
    pub into_clause: Option<IntoClause>,
    pub target_list: PgList<Node>,
    pub from_clause: PgList<Node>,
    pub where_clause: Option<Node>,
    pub group_clause: PgList<Node>,
    pub group_distinct: bool,
    pub having_clause: Option<Node>,
    pub window_clause: PgList<Node>,
    /// Each element is a row: a list node that renders as `(v1, v2, ...)`.
    pub values_lists: PgList<Node>,
    pub sort_clause: PgList<Node>,
    pub limit_offset: Option<Node>,
    pub limit_count: Option<Node>,
    pub limit_option: LimitOption,
    pub locking_clause: PgList<Node>,
    pub with_clause: Option<WithClause>,
    pub op: SetOperation,
    pub all: bool,
    pub larg: Option<Box<SelectStmt>>,
    pub rarg: Option<Box<SelectStmt>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsertStmt {
    pub relation: Option<RangeVar>,
    pub cols: PgList<Node>,
    pub select_stmt: Option<Node>,
    pub on_conflict_clause: Option<OnConflictClause>,
    pub returning_list: PgList<Node>,
    pub with_clause: Option<WithClause>,
    pub override_: OverridingKind,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateStmt {
    pub relation: Option<RangeVar>,
    pub target_list: PgList<Node>,
    pub where_clause: Option<Node>,
    pub from_clause: PgList<Node>,
    pub returning_list: PgList<Node>,
    pub with_clause: Option<WithClause>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteStmt {
    pub relation: Option<RangeVar>,
    pub using_clause: PgList<Node>,
    pub where_clause: Option<Node>,
    pub returning_list: PgList<Node>,
    pub with_clause: Option<WithClause>,
}

// ============================================================================
// DDL statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateStmt {
    pub relation: Option<RangeVar>,
    pub table_elts: PgList<Node>,
    pub inh_relations: PgList<Node>,
    pub partbound: Option<PartitionBoundSpec>,
    pub partspec: Option<PartitionSpec>,
    pub of_typename: Option<TypeName>,
    pub constraints: PgList<Node>,
    pub options: PgList<Node>,
    pub oncommit: OnCommitAction,
    pub tablespacename: String,
    pub access_method: String,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTableAsStmt {
    pub query: Option<Node>,
    pub into: Option<IntoClause>,
    pub objtype: ObjectType,
    pub is_select_into: bool,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlterTableStmt {
    pub relation: Option<RangeVar>,
    pub cmds: PgList<Node>,
    pub objtype: ObjectType,
    pub missing_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlterTableCmd {
    pub subtype: AlterTableType,
    pub name: String,
    pub newowner: Option<RoleSpec>,
    pub def: Option<Node>,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
    pub recurse: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DropStmt {
    /// Each object is a name list, a `TypeName`, or an `ObjectWithArgs`,
    /// depending on `remove_type`.
    pub objects: PgList<Node>,
    pub remove_type: ObjectType,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
    pub concurrent: bool,
    /// Pre-v10 per-object argument lists, folded into `ObjectWithArgs`.
    /// Never rendered; rejected by checked copying when populated.
    #[deprecated(note = "folded into ObjectWithArgs")]
    pub arguments: Option<PgList<Node>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TruncateStmt {
    pub relations: PgList<Node>,
    pub restart_seqs: bool,
    pub behavior: DropBehavior,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexStmt {
    pub idxname: String,
    pub relation: Option<RangeVar>,
    pub access_method: String,
    pub table_space: String,
    pub index_params: PgList<Node>,
    pub index_including_params: PgList<Node>,
    pub options: PgList<Node>,
    pub where_clause: Option<Node>,
    pub exclude_op_names: PgList<Node>,
    pub unique: bool,
    pub nulls_not_distinct: bool,
    pub primary: bool,
    pub is_constraint: bool,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub concurrent: bool,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSchemaStmt {
    pub schemaname: String,
    pub authrole: Option<RoleSpec>,
    pub schema_elts: PgList<Node>,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewStmt {
    pub view: Option<RangeVar>,
    pub aliases: PgList<Node>,
    pub query: Option<Node>,
    pub replace: bool,
    pub options: PgList<Node>,
    pub with_check_option: ViewCheckOption,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateFunctionStmt {
    pub is_procedure: bool,
    pub replace: bool,
    pub funcname: PgList<Node>,
    pub parameters: PgList<Node>,
    pub return_type: Option<TypeName>,
    pub options: PgList<Node>,
    pub sql_body: Option<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSeqStmt {
    pub sequence: Option<RangeVar>,
    pub options: PgList<Node>,
    pub for_identity: bool,
    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlterSeqStmt {
    pub sequence: Option<RangeVar>,
    pub options: PgList<Node>,
    pub for_identity: bool,
    pub missing_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTrigStmt {
    pub replace: bool,
    pub isconstraint: bool,
    pub trigname: String,
    pub relation: Option<RangeVar>,
    pub funcname: PgList<Node>,
    pub args: PgList<Node>,
    pub row: bool,
    /// `TRIGGER_TYPE_BEFORE` / `TRIGGER_TYPE_INSTEAD` bit, or 0 for after.
    pub timing: i32,
    /// `TRIGGER_TYPE_{INSERT,DELETE,UPDATE,TRUNCATE}` bit set.
    pub events: i32,
    pub columns: PgList<Node>,
    pub when_clause: Option<Node>,
    pub transition_rels: PgList<Node>,
    pub deferrable: bool,
    pub initdeferred: bool,
    pub constrrel: Option<RangeVar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleStmt {
    pub relation: Option<RangeVar>,
    pub rulename: String,
    pub where_clause: Option<Node>,
    pub event: CmdType,
    pub instead: bool,
    pub actions: PgList<Node>,
    pub replace: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDomainStmt {
    pub domainname: PgList<Node>,
    pub type_name: Option<TypeName>,
    pub coll_clause: Option<CollateClause>,
    pub constraints: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefreshMatViewStmt {
    pub concurrent: bool,
    pub skip_data: bool,
    pub relation: Option<RangeVar>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenameStmt {
    pub rename_type: ObjectType,
    pub relation_type: ObjectType,
    pub relation: Option<RangeVar>,
    pub object: Option<Node>,
    pub subname: String,
    pub newname: String,
    pub behavior: DropBehavior,
    pub missing_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentStmt {
    pub objtype: ObjectType,
    pub object: Option<Node>,
    /// `None` renders `is null`, removing the comment.
    pub comment: Option<String>,
}

// ============================================================================
// Administrative statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionStmt {
    pub kind: TransactionStmtKind,
    pub options: PgList<Node>,
    pub savepoint_name: String,
    pub gid: String,
    pub chain: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableSetStmt {
    pub kind: VariableSetKind,
    pub name: String,
    pub args: PgList<Node>,
    pub is_local: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableShowStmt {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExplainStmt {
    pub query: Option<Node>,
    pub options: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CopyStmt {
    pub relation: Option<RangeVar>,
    pub query: Option<Node>,
    pub attlist: PgList<Node>,
    pub is_from: bool,
    pub is_program: bool,
    /// Empty means stdin/stdout.
    pub filename: String,
    pub options: PgList<Node>,
    pub where_clause: Option<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrantStmt {
    pub is_grant: bool,
    pub targtype: GrantTargetType,
    pub objtype: ObjectType,
    pub objects: PgList<Node>,
    /// Empty means `all privileges`.
    pub privileges: PgList<Node>,
    pub grantees: PgList<Node>,
    pub grant_option: bool,
    pub grantor: Option<RoleSpec>,
    pub behavior: DropBehavior,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrantRoleStmt {
    pub granted_roles: PgList<Node>,
    pub grantee_roles: PgList<Node>,
    pub is_grant: bool,
    pub opt: PgList<Node>,
    pub grantor: Option<RoleSpec>,
    pub behavior: DropBehavior,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LockStmt {
    pub relations: PgList<Node>,
    /// Lock mode 1..=8, `AccessShareLock` through `AccessExclusiveLock`.
    pub mode: i32,
    pub nowait: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VacuumStmt {
    pub options: PgList<Node>,
    pub rels: PgList<Node>,
    pub is_vacuumcmd: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoStmt {
    /// DefElems: `as` (the code block) and optionally `language`.
    pub args: PgList<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotifyStmt {
    pub conditionname: String,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListenStmt {
    pub conditionname: String,
}

/// Empty `conditionname` renders `unlisten *`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnlistenStmt {
    pub conditionname: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckPointStmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscardStmt {
    pub target: DiscardMode,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrepareStmt {
    pub name: String,
    pub argtypes: PgList<Node>,
    pub query: Option<Node>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecuteStmt {
    pub name: String,
    pub params: PgList<Node>,
}

/// Empty `name` renders `deallocate all`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeallocateStmt {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClosePortalStmt {
    /// Empty renders `close all`.
    pub portalname: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchStmt {
    pub direction: FetchDirection,
    pub how_many: i64,
    pub portalname: String,
    pub ismove: bool,
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AExprKind {
    #[default]
    Op,
    OpAny,
    OpAll,
    Distinct,
    NotDistinct,
    NullIf,
    In,
    Like,
    ILike,
    Similar,
    Between,
    NotBetween,
    BetweenSym,
    NotBetweenSym,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoolExprType {
    #[default]
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubLinkType {
    #[default]
    Exists,
    All,
    Any,
    RowCompare,
    Expr,
    MultiExpr,
    Array,
    Cte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NullTestType {
    #[default]
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoolTestType {
    #[default]
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    IsUnknown,
    IsNotUnknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MinMaxOp {
    #[default]
    Greatest,
    Least,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Full,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortByDir {
    #[default]
    Default,
    Asc,
    Desc,
    Using,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortByNulls {
    #[default]
    Default,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CTEMaterialize {
    #[default]
    Default,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnCommitAction {
    #[default]
    Noop,
    PreserveRows,
    DeleteRows,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    Table,
    Index,
    Sequence,
    View,
    MatView,
    Type,
    Schema,
    Function,
    Procedure,
    Routine,
    Aggregate,
    Operator,
    Language,
    Cast,
    Trigger,
    Rule,
    Database,
    Tablespace,
    Role,
    Extension,
    ForeignTable,
    Collation,
    Conversion,
    Domain,
    Constraint,
    Column,
    AccessMethod,
    Publication,
    Subscription,
    StatisticsObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropBehavior {
    #[default]
    Restrict,
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnConflictAction {
    #[default]
    None,
    Nothing,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupingSetKind {
    #[default]
    Empty,
    Simple,
    Rollup,
    Cube,
    Sets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CmdType {
    #[default]
    Unknown,
    Select,
    Update,
    Insert,
    Delete,
    Utility,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionStmtKind {
    #[default]
    Begin,
    Start,
    Commit,
    Rollback,
    Savepoint,
    Release,
    RollbackTo,
    Prepare,
    CommitPrepared,
    RollbackPrepared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstrType {
    #[default]
    Null,
    NotNull,
    Default,
    Identity,
    Generated,
    Check,
    Primary,
    Unique,
    Exclusion,
    Foreign,
    AttrDeferrable,
    AttrNotDeferrable,
    AttrDeferred,
    AttrImmediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DefElemAction {
    #[default]
    Unspec,
    Set,
    Add,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoleSpecType {
    #[default]
    CString,
    CurrentRole,
    CurrentUser,
    SessionUser,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableSetKind {
    #[default]
    Value,
    Default,
    Current,
    Multi,
    Reset,
    ResetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockClauseStrength {
    #[default]
    ForKeyShare,
    ForShare,
    ForNoKeyUpdate,
    ForUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockWaitPolicy {
    #[default]
    Block,
    Skip,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewCheckOption {
    #[default]
    NoCheckOption,
    Local,
    Cascaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiscardMode {
    #[default]
    All,
    Plans,
    Sequences,
    Temp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchDirection {
    #[default]
    Forward,
    Backward,
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FunctionParameterMode {
    #[default]
    In,
    Out,
    InOut,
    Variadic,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlterTableType {
    #[default]
    AddColumn,
    ColumnDefault,
    DropNotNull,
    SetNotNull,
    DropExpression,
    SetStatistics,
    SetOptions,
    ResetOptions,
    SetStorage,
    SetCompression,
    DropColumn,
    AddConstraint,
    AlterConstraint,
    ValidateConstraint,
    DropConstraint,
    AlterColumnType,
    ChangeOwner,
    ClusterOn,
    DropCluster,
    SetLogged,
    SetUnLogged,
    SetAccessMethod,
    SetTableSpace,
    SetRelOptions,
    ResetRelOptions,
    EnableTrig,
    EnableAlwaysTrig,
    EnableReplicaTrig,
    DisableTrig,
    EnableTrigAll,
    DisableTrigAll,
    EnableTrigUser,
    DisableTrigUser,
    EnableRule,
    EnableAlwaysRule,
    EnableReplicaRule,
    DisableRule,
    AddInherit,
    DropInherit,
    AddOf,
    DropOf,
    ReplicaIdentity,
    EnableRowSecurity,
    DisableRowSecurity,
    ForceRowSecurity,
    NoForceRowSecurity,
    GenericOptions,
    AttachPartition,
    DetachPartition,
    DetachPartitionFinalize,
    AddIdentity,
    SetIdentity,
    DropIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrantTargetType {
    #[default]
    Object,
    AllInSchema,
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverridingKind {
    #[default]
    NotSet,
    UserValue,
    SystemValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SetOperation {
    #[default]
    None,
    Union,
    Intersect,
    Except,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitOption {
    #[default]
    Default,
    Count,
    WithTies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartitionStrategy {
    #[default]
    Range,
    List,
    Hash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JsonTableColumnType {
    #[default]
    ForOrdinality,
    Regular,
    Exists,
    Formatted,
    Nested,
}

// ============================================================================
// Bit-flag constants
// ============================================================================

/// Trigger timing/event bits, as stored in `CreateTrigStmt::timing` and
/// `CreateTrigStmt::events`.
pub const TRIGGER_TYPE_ROW: i32 = 1 << 0;
pub const TRIGGER_TYPE_BEFORE: i32 = 1 << 1;
pub const TRIGGER_TYPE_INSERT: i32 = 1 << 2;
pub const TRIGGER_TYPE_DELETE: i32 = 1 << 3;
pub const TRIGGER_TYPE_UPDATE: i32 = 1 << 4;
pub const TRIGGER_TYPE_TRUNCATE: i32 = 1 << 5;
pub const TRIGGER_TYPE_INSTEAD: i32 = 1 << 6;
/// `timing` value meaning the trigger fires after the event.
pub const TRIGGER_TYPE_AFTER: i32 = 0;

/// `TableLikeClause::options` bits; keyword order when rendering follows
/// bit order.
pub const CREATE_TABLE_LIKE_COMMENTS: i32 = 1 << 0;
pub const CREATE_TABLE_LIKE_COMPRESSION: i32 = 1 << 1;
pub const CREATE_TABLE_LIKE_CONSTRAINTS: i32 = 1 << 2;
pub const CREATE_TABLE_LIKE_DEFAULTS: i32 = 1 << 3;
pub const CREATE_TABLE_LIKE_GENERATED: i32 = 1 << 4;
pub const CREATE_TABLE_LIKE_IDENTITY: i32 = 1 << 5;
pub const CREATE_TABLE_LIKE_INDEXES: i32 = 1 << 6;
pub const CREATE_TABLE_LIKE_STATISTICS: i32 = 1 << 7;
pub const CREATE_TABLE_LIKE_STORAGE: i32 = 1 << 8;
pub const CREATE_TABLE_LIKE_ALL: i32 = 0x7FFF_FFFF;

/// `JsonTablePlan::join_type` bits.
pub const JSTP_JOIN_INNER: i32 = 1 << 0;
pub const JSTP_JOIN_OUTER: i32 = 1 << 1;
pub const JSTP_JOIN_CROSS: i32 = 1 << 2;
pub const JSTP_JOIN_UNION: i32 = 1 << 3;

/// `FetchStmt::how_many` sentinel meaning "all remaining rows".
pub const FETCH_ALL: i64 = i64::MAX;

/// `WindowDef::frame_options` bits.
pub const FRAMEOPTION_NONDEFAULT: i32 = 0x00001;
pub const FRAMEOPTION_RANGE: i32 = 0x00002;
pub const FRAMEOPTION_ROWS: i32 = 0x00004;
pub const FRAMEOPTION_GROUPS: i32 = 0x00008;
pub const FRAMEOPTION_BETWEEN: i32 = 0x00010;
pub const FRAMEOPTION_START_UNBOUNDED_PRECEDING: i32 = 0x00020;
pub const FRAMEOPTION_END_UNBOUNDED_PRECEDING: i32 = 0x00040;
pub const FRAMEOPTION_START_UNBOUNDED_FOLLOWING: i32 = 0x00080;
pub const FRAMEOPTION_END_UNBOUNDED_FOLLOWING: i32 = 0x00100;
pub const FRAMEOPTION_START_CURRENT_ROW: i32 = 0x00200;
pub const FRAMEOPTION_END_CURRENT_ROW: i32 = 0x00400;
pub const FRAMEOPTION_START_OFFSET_PRECEDING: i32 = 0x00800;
pub const FRAMEOPTION_END_OFFSET_PRECEDING: i32 = 0x01000;
pub const FRAMEOPTION_START_OFFSET_FOLLOWING: i32 = 0x02000;
pub const FRAMEOPTION_END_OFFSET_FOLLOWING: i32 = 0x04000;
pub const FRAMEOPTION_EXCLUDE_CURRENT_ROW: i32 = 0x08000;
pub const FRAMEOPTION_EXCLUDE_GROUP: i32 = 0x10000;
pub const FRAMEOPTION_EXCLUDE_TIES: i32 = 0x20000;

// ============================================================================
// Conversions into Node
// ============================================================================

macro_rules! impl_into_node {
    ($($ty:ident),+ $(,)?) => {$(
        impl From<$ty> for Node {
            fn from(value: $ty) -> Node {
                Node::$ty(Box::new(value))
            }
        }

        impl $ty {
            pub fn into_node(self) -> Node {
                self.into()
            }
        }
    )+};
}

macro_rules! impl_into_node_unboxed {
    ($($ty:ident),+ $(,)?) => {$(
        impl From<$ty> for Node {
            fn from(value: $ty) -> Node {
                Node::$ty(value)
            }
        }

        impl $ty {
            pub fn into_node(self) -> Node {
                self.into()
            }
        }
    )+};
}

impl_into_node_unboxed!(Integer, Float, Boolean, BitString, AStar);

impl From<StringValue> for Node {
    fn from(value: StringValue) -> Node {
        Node::String(value)
    }
}

impl_into_node!(
    AExpr,
    ColumnRef,
    ParamRef,
    AConst,
    TypeCast,
    CollateClause,
    FuncCall,
    AIndices,
    AIndirection,
    AArrayExpr,
    SubLink,
    BoolExpr,
    NullTest,
    BooleanTest,
    CaseExpr,
    CaseWhen,
    CoalesceExpr,
    MinMaxExpr,
    RowExpr,
    ResTarget,
    RangeVar,
    RangeSubselect,
    RangeFunction,
    JoinExpr,
    Alias,
    RoleSpec,
    SortBy,
    WindowDef,
    WithClause,
    CommonTableExpr,
    IntoClause,
    InferClause,
    OnConflictClause,
    LockingClause,
    GroupingSet,
    TypeName,
    ColumnDef,
    Constraint,
    DefElem,
    IndexElem,
    TableLikeClause,
    PartitionSpec,
    PartitionElem,
    PartitionBoundSpec,
    AccessPriv,
    ObjectWithArgs,
    FunctionParameter,
    JsonTable,
    JsonTableColumn,
    JsonTablePlan,
    SelectStmt,
    InsertStmt,
    UpdateStmt,
    DeleteStmt,
    CreateStmt,
    CreateTableAsStmt,
    AlterTableStmt,
    AlterTableCmd,
    DropStmt,
    TruncateStmt,
    IndexStmt,
    CreateSchemaStmt,
    ViewStmt,
    CreateFunctionStmt,
    CreateSeqStmt,
    AlterSeqStmt,
    CreateTrigStmt,
    RuleStmt,
    CreateDomainStmt,
    RefreshMatViewStmt,
    RenameStmt,
    CommentStmt,
    TransactionStmt,
    VariableSetStmt,
    VariableShowStmt,
    ExplainStmt,
    CopyStmt,
    GrantStmt,
    GrantRoleStmt,
    LockStmt,
    VacuumStmt,
    DoStmt,
    NotifyStmt,
    ListenStmt,
    UnlistenStmt,
    CheckPointStmt,
    DiscardStmt,
    PrepareStmt,
    ExecuteStmt,
    DeallocateStmt,
    ClosePortalStmt,
    FetchStmt,
);

// ============================================================================
// Leaf and expression shorthands
// ============================================================================

impl Node {
    /// Bare string leaf (identifier or keyword fragment, not a SQL literal).
    pub fn string(sval: impl Into<String>) -> Node {
        Node::String(StringValue { sval: sval.into() })
    }

    pub fn int(ival: i32) -> Node {
        Node::Integer(Integer { ival })
    }

    /// `'...'` string constant.
    pub fn string_const(sval: impl Into<String>) -> Node {
        AConst { val: Some(AConstValue::string(sval)), ..Default::default() }.into_node()
    }

    pub fn int_const(ival: i32) -> Node {
        AConst { val: Some(AConstValue::int(ival)), ..Default::default() }.into_node()
    }

    pub fn bool_const(boolval: bool) -> Node {
        AConst { val: Some(AConstValue::bool(boolval)), ..Default::default() }.into_node()
    }

    pub fn null_const() -> Node {
        AConst { isnull: true, ..Default::default() }.into_node()
    }

    /// Column reference from its name parts.
    pub fn column_ref<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Node {
        ColumnRef {
            fields: parts.into_iter().map(Node::string).collect(),
            location: -1,
        }
        .into_node()
    }

    /// The bare `*` target.
    pub fn column_star() -> Node {
        ColumnRef { fields: crate::pg_list![Node::AStar(AStar)], location: -1 }.into_node()
    }

    /// Select-list entry wrapping an expression.
    pub fn res_target_expr(val: Node) -> Node {
        ResTarget { val: Some(val), ..Default::default() }.into_node()
    }

    /// Binary operator expression.
    pub fn op_expr(op: &str, lexpr: Node, rexpr: Node) -> Node {
        AExpr {
            kind: AExprKind::Op,
            name: crate::pg_list![Node::string(op)],
            lexpr: Some(lexpr),
            rexpr: Some(rexpr),
            location: -1,
        }
        .into_node()
    }
}

impl RawStmt {
    pub fn new(stmt: impl Into<Node>) -> Self {
        RawStmt { stmt: stmt.into(), stmt_location: -1, stmt_len: 0 }
    }
}

/// Extracts the text of a string leaf, used wherever grammar lists hold bare
/// names rather than expressions.
pub(crate) fn strval(node: &Node) -> Option<&str> {
    match node {
        Node::String(s) => Some(&s.sval),
        _ => None,
    }
}

/// Dot-joined, quoted rendering of a name list (e.g. `funcname`,
/// `domainname`). Non-string elements fall back to their own rendering.
pub(crate) fn name_list(names: &PgList<Node>) -> String {
    let mut out = String::new();
    for node in names {
        if !out.is_empty() {
            out.push('.');
        }
        match strval(node) {
            Some(s) => out.push_str(&quote_identifier(s)),
            None => out.push_str(&node.to_string()),
        }
    }
    out
}
