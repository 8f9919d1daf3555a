//! List behavior through the public API, exercised with real node elements.

use pg_deparse::ast::Node;
use pg_deparse::list::PgList;
use pg_deparse::{deparse, pg_list, Error};

#[macro_use]
mod support;

#[test]
fn node_list_renders_as_sql_parenthesized_list() {
    let list: PgList<Node> = pg_list![
        Node::int_const(1),
        Node::string_const("two"),
        Node::column_ref(["t", "three"]),
    ];
    assert_eq!(list.to_string(), "(1, 'two', t.three)");
    assert_eq!(PgList::<Node>::new().to_string(), "()");

    // The same text comes out when the list is embedded as a node.
    assert_eq!(deparse(&Node::List(list)), "(1, 'two', t.three)");
}

#[test]
fn editing_a_clause_list_in_place() {
    let mut targets: PgList<Node> = pg_list![
        Node::res_target_expr(Node::column_ref(["a"])),
        Node::res_target_expr(Node::column_ref(["b"])),
    ];
    targets.insert(1, Node::res_target_expr(Node::column_ref(["x"]))).unwrap();
    let removed = targets.remove(0).unwrap();
    assert_eq!(deparse(&removed), "a");
    assert_eq!(
        targets.iter().map(|n| deparse(n)).collect::<Vec<_>>(),
        vec!["x", "b"]
    );
}

#[test]
fn out_of_bounds_edits_report_index_and_len() {
    let mut list: PgList<Node> = pg_list![Node::Null];
    match list.insert(5, Node::Null) {
        Err(Error::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("expected IndexOutOfBounds, got: {other:?}"),
    }
}

#[test]
fn detached_cursor_survives_value_edits_but_not_splices() {
    let mut list: PgList<Node> = pg_list![Node::int(1), Node::int(2)];
    let mut cursor = list.cursor();

    // Replacing a value is not a structural change.
    *list.get_mut(0).unwrap() = Node::int(10);
    assert_eq!(list.cursor_next(&mut cursor).unwrap(), Some(&Node::int(10)));

    list.push(Node::int(3));
    assert!(matches!(
        list.cursor_next(&mut cursor),
        Err(Error::ConcurrentModification)
    ));

    // A fresh cursor sees the new shape.
    let mut cursor = list.cursor();
    let mut seen = 0;
    while list.cursor_next(&mut cursor).unwrap().is_some() {
        seen += 1;
    }
    assert_eq!(seen, 3);
}

#[test]
fn sub_list_view_rewrites_a_statement_fragment() {
    let mut args: PgList<Node> = pg_list![
        Node::int_const(1),
        Node::int_const(2),
        Node::int_const(3),
        Node::int_const(4),
    ];
    {
        let mut view = args.view_mut(1, 3).unwrap();
        view.remove(0).unwrap();
        view.insert(0, Node::int_const(20)).unwrap();
        view.push(Node::int_const(35));
    }
    assert_eq!(Node::List(args).to_string(), "(1, 20, 3, 35, 4)");
}

#[test]
fn collecting_and_extending() {
    let mut list: PgList<Node> = (1..=2).map(Node::int_const).collect();
    list.extend((3..=4).map(Node::int_const));
    assert_eq!(list.len(), 4);
    assert_eq!(list.to_string(), "(1, 2, 3, 4)");

    let from_vec = PgList::from(vec![Node::Null, Node::Null]);
    assert_eq!(from_vec.len(), 2);
}

#[test]
fn node_lists_round_trip_through_json() {
    let list: PgList<Node> = pg_list![Node::int_const(1), Node::string_const("x")];
    let node = Node::List(list);
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
