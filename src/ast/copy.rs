//! Checked deep copy.
//!
//! `Clone` on a node is already a deep copy; what [`copy_checked`] adds is a
//! validation walk that runs before the clone. Trees produced by an old
//! grammar variant can carry fields the current grammar has retired
//! (`RangeVar::inh_opt`, `DropStmt::arguments`, `ObjectWithArgs::operargs`).
//! Those fields are never rendered, so copying such a tree would silently
//! drop information; the walk rejects the whole tree instead, before any
//! part of it has been copied.

use super::nodes::*;
use crate::list::PgList;
use crate::{Error, Result};

/// Validates `node` against retired-field population, then deep-copies it.
///
/// The walk covers the entire tree; the first populated retired field aborts
/// the copy with [`Error::DeprecatedField`] naming the node type and field.
pub fn copy_checked(node: &Node) -> Result<Node> {
    check_node(node)?;
    Ok(node.clone())
}

impl RawStmt {
    /// Checked deep copy of a wrapped statement; see [`copy_checked`].
    pub fn try_copy(&self) -> Result<RawStmt> {
        check_node(&self.stmt)?;
        Ok(self.clone())
    }
}

fn check_list(list: &PgList<Node>) -> Result<()> {
    for node in list {
        check_node(node)?;
    }
    Ok(())
}

fn check_opt(opt: &Option<Node>) -> Result<()> {
    match opt {
        Some(node) => check_node(node),
        None => Ok(()),
    }
}

fn check_alias(alias: &Alias) -> Result<()> {
    check_list(&alias.colnames)
}

fn check_opt_alias(alias: &Option<Alias>) -> Result<()> {
    match alias {
        Some(a) => check_alias(a),
        None => Ok(()),
    }
}

fn check_range_var(rv: &RangeVar) -> Result<()> {
    #[allow(deprecated)]
    if let Some(value) = rv.inh_opt {
        return Err(Error::DeprecatedField {
            node: "RangeVar",
            field: "inh_opt",
            value: value.to_string(),
        });
    }
    check_opt_alias(&rv.alias)
}

fn check_opt_range_var(rv: &Option<RangeVar>) -> Result<()> {
    match rv {
        Some(rv) => check_range_var(rv),
        None => Ok(()),
    }
}

fn check_type_name(t: &TypeName) -> Result<()> {
    check_list(&t.names)?;
    check_list(&t.typmods)?;
    check_list(&t.array_bounds)
}

fn check_opt_type_name(t: &Option<TypeName>) -> Result<()> {
    match t {
        Some(t) => check_type_name(t),
        None => Ok(()),
    }
}

fn check_collate(c: &CollateClause) -> Result<()> {
    check_opt(&c.arg)?;
    check_list(&c.collname)
}

fn check_window_def(w: &WindowDef) -> Result<()> {
    check_list(&w.partition_clause)?;
    check_list(&w.order_clause)?;
    check_opt(&w.start_offset)?;
    check_opt(&w.end_offset)
}

fn check_with_clause(w: &Option<WithClause>) -> Result<()> {
    match w {
        Some(w) => check_list(&w.ctes),
        None => Ok(()),
    }
}

fn check_into_clause(into: &IntoClause) -> Result<()> {
    check_opt_range_var(&into.rel)?;
    check_list(&into.col_names)?;
    check_list(&into.options)
}

fn check_infer(infer: &InferClause) -> Result<()> {
    check_list(&infer.index_elems)?;
    check_opt(&infer.where_clause)
}

fn check_on_conflict(oc: &OnConflictClause) -> Result<()> {
    if let Some(infer) = &oc.infer {
        check_infer(infer)?;
    }
    check_list(&oc.target_list)?;
    check_opt(&oc.where_clause)
}

fn check_partition_bound(b: &PartitionBoundSpec) -> Result<()> {
    check_list(&b.listdatums)?;
    check_list(&b.lowerdatums)?;
    check_list(&b.upperdatums)
}

fn check_select(s: &SelectStmt) -> Result<()> {
    check_list(&s.distinct_clause)?;
    if let Some(into) = &s.into_clause {
        check_into_clause(into)?;
    }
    check_list(&s.target_list)?;
    check_list(&s.from_clause)?;
    check_opt(&s.where_clause)?;
    check_list(&s.group_clause)?;
    check_opt(&s.having_clause)?;
    check_list(&s.window_clause)?;
    check_list(&s.values_lists)?;
    check_list(&s.sort_clause)?;
    check_opt(&s.limit_offset)?;
    check_opt(&s.limit_count)?;
    check_list(&s.locking_clause)?;
    check_with_clause(&s.with_clause)?;
    if let Some(larg) = &s.larg {
        check_select(larg)?;
    }
    if let Some(rarg) = &s.rarg {
        check_select(rarg)?;
    }
    Ok(())
}

fn check_node(node: &Node) -> Result<()> {
    match node {
        Node::Integer(_)
        | Node::Float(_)
        | Node::Boolean(_)
        | Node::String(_)
        | Node::BitString(_)
        | Node::Null
        | Node::AStar(_) => Ok(()),
        Node::List(items) => check_list(items),

        Node::AExpr(n) => {
            check_list(&n.name)?;
            check_opt(&n.lexpr)?;
            check_opt(&n.rexpr)
        }
        Node::ColumnRef(n) => check_list(&n.fields),
        Node::ParamRef(_) => Ok(()),
        Node::AConst(_) => Ok(()),
        Node::TypeCast(n) => {
            check_opt(&n.arg)?;
            check_opt_type_name(&n.type_name)
        }
        Node::CollateClause(n) => check_collate(n),
        Node::FuncCall(n) => {
            check_list(&n.funcname)?;
            check_list(&n.args)?;
            check_list(&n.agg_order)?;
            check_opt(&n.agg_filter)?;
            match &n.over {
                Some(over) => check_window_def(over),
                None => Ok(()),
            }
        }
        Node::AIndices(n) => {
            check_opt(&n.lidx)?;
            check_opt(&n.uidx)
        }
        Node::AIndirection(n) => {
            check_opt(&n.arg)?;
            check_list(&n.indirection)
        }
        Node::AArrayExpr(n) => check_list(&n.elements),
        Node::SubLink(n) => {
            check_opt(&n.testexpr)?;
            check_list(&n.oper_name)?;
            check_opt(&n.subselect)
        }
        Node::BoolExpr(n) => check_list(&n.args),
        Node::NullTest(n) => check_opt(&n.arg),
        Node::BooleanTest(n) => check_opt(&n.arg),
        Node::CaseExpr(n) => {
            check_opt(&n.arg)?;
            check_list(&n.args)?;
            check_opt(&n.defresult)
        }
        Node::CaseWhen(n) => {
            check_opt(&n.expr)?;
            check_opt(&n.result)
        }
        Node::CoalesceExpr(n) => check_list(&n.args),
        Node::MinMaxExpr(n) => check_list(&n.args),
        Node::RowExpr(n) => check_list(&n.args),

        Node::ResTarget(n) => {
            check_list(&n.indirection)?;
            check_opt(&n.val)
        }
        Node::RangeVar(n) => check_range_var(n),
        Node::RangeSubselect(n) => {
            check_opt(&n.subquery)?;
            check_opt_alias(&n.alias)
        }
        Node::RangeFunction(n) => {
            check_list(&n.functions)?;
            check_opt_alias(&n.alias)?;
            check_list(&n.coldeflist)
        }
        Node::JoinExpr(n) => {
            check_opt(&n.larg)?;
            check_opt(&n.rarg)?;
            check_list(&n.using_clause)?;
            check_opt_alias(&n.join_using_alias)?;
            check_opt(&n.quals)?;
            check_opt_alias(&n.alias)
        }
        Node::Alias(n) => check_alias(n),
        Node::RoleSpec(_) => Ok(()),

        Node::SortBy(n) => {
            check_opt(&n.node)?;
            check_list(&n.use_op)
        }
        Node::WindowDef(n) => check_window_def(n),
        Node::WithClause(n) => check_list(&n.ctes),
        Node::CommonTableExpr(n) => {
            check_list(&n.aliascolnames)?;
            check_opt(&n.ctequery)
        }
        Node::IntoClause(n) => check_into_clause(n),
        Node::InferClause(n) => check_infer(n),
        Node::OnConflictClause(n) => check_on_conflict(n),
        Node::LockingClause(n) => check_list(&n.locked_rels),
        Node::GroupingSet(n) => check_list(&n.content),
        Node::TypeName(n) => check_type_name(n),
        Node::ColumnDef(n) => {
            check_opt_type_name(&n.type_name)?;
            check_opt(&n.raw_default)?;
            if let Some(coll) = &n.coll_clause {
                check_collate(coll)?;
            }
            check_list(&n.constraints)?;
            check_list(&n.fdwoptions)
        }
        Node::Constraint(n) => {
            check_opt(&n.raw_expr)?;
            check_list(&n.keys)?;
            check_list(&n.including)?;
            check_list(&n.exclusions)?;
            check_list(&n.options)?;
            check_opt(&n.where_clause)?;
            check_opt_range_var(&n.pktable)?;
            check_list(&n.fk_attrs)?;
            check_list(&n.pk_attrs)?;
            check_list(&n.fk_del_set_cols)
        }
        Node::DefElem(n) => check_opt(&n.arg),
        Node::IndexElem(n) => {
            check_opt(&n.expr)?;
            check_list(&n.collation)?;
            check_list(&n.opclass)?;
            check_list(&n.opclassopts)
        }
        Node::TableLikeClause(n) => check_opt_range_var(&n.relation),
        Node::PartitionSpec(n) => check_list(&n.part_params),
        Node::PartitionElem(n) => {
            check_opt(&n.expr)?;
            check_list(&n.collation)?;
            check_list(&n.opclass)
        }
        Node::PartitionBoundSpec(n) => check_partition_bound(n),
        Node::AccessPriv(n) => check_list(&n.cols),
        Node::ObjectWithArgs(n) => {
            #[allow(deprecated)]
            if let Some(operargs) = &n.operargs {
                return Err(Error::DeprecatedField {
                    node: "ObjectWithArgs",
                    field: "operargs",
                    value: format!("list of {} elements", operargs.len()),
                });
            }
            check_list(&n.objname)?;
            check_list(&n.objargs)?;
            check_list(&n.objfuncargs)
        }
        Node::FunctionParameter(n) => {
            check_opt_type_name(&n.arg_type)?;
            check_opt(&n.defexpr)
        }

        Node::JsonTable(n) => {
            check_opt(&n.context_item)?;
            check_opt(&n.pathspec)?;
            check_list(&n.passing)?;
            check_list(&n.columns)?;
            check_opt(&n.plan)?;
            check_opt_alias(&n.alias)
        }
        Node::JsonTableColumn(n) => {
            check_opt_type_name(&n.type_name)?;
            check_list(&n.columns)
        }
        Node::JsonTablePlan(n) => {
            check_opt(&n.plan1)?;
            check_opt(&n.plan2)
        }

        Node::SelectStmt(n) => check_select(n),
        Node::InsertStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.cols)?;
            check_opt(&n.select_stmt)?;
            if let Some(oc) = &n.on_conflict_clause {
                check_on_conflict(oc)?;
            }
            check_list(&n.returning_list)?;
            check_with_clause(&n.with_clause)
        }
        Node::UpdateStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.target_list)?;
            check_opt(&n.where_clause)?;
            check_list(&n.from_clause)?;
            check_list(&n.returning_list)?;
            check_with_clause(&n.with_clause)
        }
        Node::DeleteStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.using_clause)?;
            check_opt(&n.where_clause)?;
            check_list(&n.returning_list)?;
            check_with_clause(&n.with_clause)
        }

        Node::CreateStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.table_elts)?;
            check_list(&n.inh_relations)?;
            if let Some(bound) = &n.partbound {
                check_partition_bound(bound)?;
            }
            if let Some(spec) = &n.partspec {
                check_list(&spec.part_params)?;
            }
            check_opt_type_name(&n.of_typename)?;
            check_list(&n.constraints)?;
            check_list(&n.options)
        }
        Node::CreateTableAsStmt(n) => {
            check_opt(&n.query)?;
            match &n.into {
                Some(into) => check_into_clause(into),
                None => Ok(()),
            }
        }
        Node::AlterTableStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.cmds)
        }
        Node::AlterTableCmd(n) => check_opt(&n.def),
        Node::DropStmt(n) => {
            #[allow(deprecated)]
            if let Some(arguments) = &n.arguments {
                return Err(Error::DeprecatedField {
                    node: "DropStmt",
                    field: "arguments",
                    value: format!("list of {} elements", arguments.len()),
                });
            }
            check_list(&n.objects)
        }
        Node::TruncateStmt(n) => check_list(&n.relations),
        Node::IndexStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.index_params)?;
            check_list(&n.index_including_params)?;
            check_list(&n.options)?;
            check_opt(&n.where_clause)?;
            check_list(&n.exclude_op_names)
        }
        Node::CreateSchemaStmt(n) => check_list(&n.schema_elts),
        Node::ViewStmt(n) => {
            check_opt_range_var(&n.view)?;
            check_list(&n.aliases)?;
            check_opt(&n.query)?;
            check_list(&n.options)
        }
        Node::CreateFunctionStmt(n) => {
            check_list(&n.funcname)?;
            check_list(&n.parameters)?;
            check_opt_type_name(&n.return_type)?;
            check_list(&n.options)?;
            check_opt(&n.sql_body)
        }
        Node::CreateSeqStmt(n) => {
            check_opt_range_var(&n.sequence)?;
            check_list(&n.options)
        }
        Node::AlterSeqStmt(n) => {
            check_opt_range_var(&n.sequence)?;
            check_list(&n.options)
        }
        Node::CreateTrigStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_list(&n.funcname)?;
            check_list(&n.args)?;
            check_list(&n.columns)?;
            check_opt(&n.when_clause)?;
            check_list(&n.transition_rels)?;
            check_opt_range_var(&n.constrrel)
        }
        Node::RuleStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_opt(&n.where_clause)?;
            check_list(&n.actions)
        }
        Node::CreateDomainStmt(n) => {
            check_list(&n.domainname)?;
            check_opt_type_name(&n.type_name)?;
            if let Some(coll) = &n.coll_clause {
                check_collate(coll)?;
            }
            check_list(&n.constraints)
        }
        Node::RefreshMatViewStmt(n) => check_opt_range_var(&n.relation),
        Node::RenameStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_opt(&n.object)
        }
        Node::CommentStmt(n) => check_opt(&n.object),

        Node::TransactionStmt(n) => check_list(&n.options),
        Node::VariableSetStmt(n) => check_list(&n.args),
        Node::VariableShowStmt(_) => Ok(()),
        Node::ExplainStmt(n) => {
            check_opt(&n.query)?;
            check_list(&n.options)
        }
        Node::CopyStmt(n) => {
            check_opt_range_var(&n.relation)?;
            check_opt(&n.query)?;
            check_list(&n.attlist)?;
            check_list(&n.options)?;
            check_opt(&n.where_clause)
        }
        Node::GrantStmt(n) => {
            check_list(&n.objects)?;
            check_list(&n.privileges)?;
            check_list(&n.grantees)
        }
        Node::GrantRoleStmt(n) => {
            check_list(&n.granted_roles)?;
            check_list(&n.grantee_roles)?;
            check_list(&n.opt)
        }
        Node::LockStmt(n) => check_list(&n.relations),
        Node::VacuumStmt(n) => {
            check_list(&n.options)?;
            check_list(&n.rels)
        }
        Node::DoStmt(n) => check_list(&n.args),
        Node::NotifyStmt(_)
        | Node::ListenStmt(_)
        | Node::UnlistenStmt(_)
        | Node::CheckPointStmt(_)
        | Node::DiscardStmt(_)
        | Node::DeallocateStmt(_)
        | Node::ClosePortalStmt(_)
        | Node::FetchStmt(_) => Ok(()),
        Node::PrepareStmt(n) => {
            check_list(&n.argtypes)?;
            check_opt(&n.query)
        }
        Node::ExecuteStmt(n) => check_list(&n.params),
    }
}
