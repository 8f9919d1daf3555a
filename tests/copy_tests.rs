//! Checked-copy tests: clean trees clone, trees carrying retired fields are
//! rejected whole, and copies are fully independent of their source.

use pg_deparse::ast::*;
use pg_deparse::{deparse, node_from_json, node_to_json, pg_list, Error};

#[macro_use]
mod support;

fn sample_select() -> Node {
    SelectStmt {
        target_list: pg_list![Node::res_target_expr(Node::column_star())],
        from_clause: pg_list![RangeVar::new("users").into_node()],
        where_clause: Some(Node::op_expr("=", Node::column_ref(["id"]), Node::int_const(1))),
        ..Default::default()
    }
    .into_node()
}

#[test]
fn clean_tree_copies() {
    let original = sample_select();
    let copy = copy_checked(&original).unwrap();
    assert_eq!(copy, original);
    assert_eq!(deparse(&copy), deparse(&original));
}

#[test]
fn copy_is_independent() {
    let original = sample_select();
    let mut copy = copy_checked(&original).unwrap();

    let select = cast!(&mut copy, Node::SelectStmt);
    select.where_clause = None;
    select.from_clause.push(RangeVar::new("orders").into_node());

    assert_eq!(deparse(&original), "select * from users where id = 1");
    assert_eq!(deparse(&copy), "select * from users, orders");
}

#[test]
fn populated_inh_opt_is_rejected() {
    let mut rv = RangeVar::new("users");
    #[allow(deprecated)]
    {
        rv.inh_opt = Some(1);
    }
    let tree = SelectStmt {
        target_list: pg_list![Node::res_target_expr(Node::column_star())],
        from_clause: pg_list![rv.into_node()],
        ..Default::default()
    }
    .into_node();

    let err = copy_checked(&tree).unwrap_err();
    match err {
        Error::DeprecatedField { node, field, value } => {
            assert_eq!(node, "RangeVar");
            assert_eq!(field, "inh_opt");
            assert_eq!(value, "1");
        }
        other => panic!("expected DeprecatedField, got: {other}"),
    }
}

#[test]
fn populated_drop_arguments_is_rejected() {
    let mut stmt = DropStmt {
        remove_type: ObjectType::Function,
        objects: pg_list![Node::List(pg_list![Node::string("f")])],
        ..Default::default()
    };
    #[allow(deprecated)]
    {
        stmt.arguments = Some(pg_list![Node::List(pg_list![])]);
    }

    let err = copy_checked(&stmt.into_node()).unwrap_err();
    match err {
        Error::DeprecatedField { node, field, .. } => {
            assert_eq!(node, "DropStmt");
            assert_eq!(field, "arguments");
        }
        other => panic!("expected DeprecatedField, got: {other}"),
    }
}

#[test]
fn populated_operargs_is_rejected_even_when_nested() {
    let mut owa = ObjectWithArgs {
        objname: pg_list![Node::string("my_func")],
        ..Default::default()
    };
    #[allow(deprecated)]
    {
        owa.operargs = Some(pg_list![]);
    }
    // Bury the offending node a few levels down.
    let tree = DropStmt {
        remove_type: ObjectType::Function,
        objects: pg_list![owa.into_node()],
        ..Default::default()
    }
    .into_node();

    let err = copy_checked(&tree).unwrap_err();
    match err {
        Error::DeprecatedField { node, field, .. } => {
            assert_eq!(node, "ObjectWithArgs");
            assert_eq!(field, "operargs");
        }
        other => panic!("expected DeprecatedField, got: {other}"),
    }
}

#[test]
fn rejection_happens_before_any_copy() {
    // Clean siblings before the offender do not produce a partial result;
    // the whole copy fails.
    let mut rv = RangeVar::new("bad");
    #[allow(deprecated)]
    {
        rv.inh_opt = Some(0);
    }
    let tree = SelectStmt {
        from_clause: pg_list![
            RangeVar::new("good_a").into_node(),
            RangeVar::new("good_b").into_node(),
            rv.into_node(),
        ],
        ..Default::default()
    }
    .into_node();
    assert!(copy_checked(&tree).is_err());
}

#[test]
fn raw_stmt_try_copy() {
    let raw = RawStmt::new(SelectStmt {
        target_list: pg_list![Node::res_target_expr(Node::int_const(1))],
        ..Default::default()
    });
    let copy = raw.try_copy().unwrap();
    assert_eq!(copy, raw);

    let mut rv = RangeVar::new("t");
    #[allow(deprecated)]
    {
        rv.inh_opt = Some(1);
    }
    let bad = RawStmt::new(SelectStmt {
        from_clause: pg_list![rv.into_node()],
        ..Default::default()
    });
    assert!(bad.try_copy().is_err());
}

#[test]
fn error_message_names_node_and_field() {
    let mut rv = RangeVar::new("users");
    #[allow(deprecated)]
    {
        rv.inh_opt = Some(1);
    }
    let err = copy_checked(&rv.into_node()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("RangeVar.inh_opt"), "got: {message}");
}

#[test]
fn json_round_trip_preserves_tree() {
    let original = sample_select();
    let json = node_to_json(&original).unwrap();
    let rebuilt = node_from_json(&json).unwrap();
    assert_eq!(rebuilt, original);
    assert_eq!(deparse(&rebuilt), deparse(&original));
}

#[test]
fn node_tags_match_variants() {
    assert_eq!(sample_select().tag(), NodeTag::SelectStmt);
    assert_eq!(Node::Null.tag(), NodeTag::Null);
    assert_eq!(Node::int(1).tag(), NodeTag::Integer);
    assert_eq!(RangeVar::new("t").into_node().tag(), NodeTag::RangeVar);
}
