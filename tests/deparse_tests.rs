//! Rendering tests: build trees by hand and check the SQL they produce.

use pg_deparse::ast::*;
use pg_deparse::{deparse, deparse_stmts, pg_list};

#[macro_use]
mod support;

fn col(name: &str) -> Node {
    Node::column_ref([name])
}

fn target(expr: Node) -> Node {
    Node::res_target_expr(expr)
}

fn simple_select(table: &str) -> SelectStmt {
    SelectStmt {
        target_list: pg_list![target(Node::column_star())],
        from_clause: pg_list![RangeVar::new(table).into_node()],
        ..Default::default()
    }
}

// ============================================================================
// SELECT
// ============================================================================

#[test]
fn select_star() {
    assert_eq!(deparse(&simple_select("users").into_node()), "select * from users");
}

#[test]
fn select_columns_where_order_limit() {
    let stmt = SelectStmt {
        target_list: pg_list![target(col("id")), target(col("name"))],
        from_clause: pg_list![RangeVar::new("users").into_node()],
        where_clause: Some(Node::op_expr("=", col("id"), Node::int_const(1))),
        sort_clause: pg_list![SortBy {
            node: Some(col("name")),
            sortby_dir: SortByDir::Asc,
            ..Default::default()
        }
        .into_node()],
        limit_count: Some(Node::int_const(10)),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "select id, name from users where id = 1 order by name asc limit 10"
    );
}

#[test]
fn select_distinct_and_distinct_on() {
    let mut stmt = simple_select("t");
    stmt.distinct_clause = pg_list![Node::Null];
    assert_eq!(deparse(&stmt.clone().into_node()), "select distinct * from t");

    stmt.distinct_clause = pg_list![col("a")];
    assert_eq!(deparse(&stmt.into_node()), "select distinct on (a) * from t");
}

#[test]
fn select_group_by_having() {
    let stmt = SelectStmt {
        target_list: pg_list![target(col("dept"))],
        from_clause: pg_list![RangeVar::new("emp").into_node()],
        group_clause: pg_list![col("dept")],
        having_clause: Some(Node::op_expr(
            ">",
            FuncCall {
                funcname: pg_list![Node::string("count")],
                agg_star: true,
                ..Default::default()
            }
            .into_node(),
            Node::int_const(5),
        )),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "select dept from emp group by dept having count(*) > 5"
    );
}

#[test]
fn select_set_operation_keeps_grouping() {
    let stmt = SelectStmt {
        op: SetOperation::Union,
        all: true,
        larg: Some(Box::new(simple_select("a"))),
        rarg: Some(Box::new(SelectStmt {
            sort_clause: pg_list![SortBy {
                node: Some(col("x")),
                ..Default::default()
            }
            .into_node()],
            target_list: pg_list![target(Node::column_star())],
            from_clause: pg_list![RangeVar::new("b").into_node()],
            ..Default::default()
        })),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "select * from a union all (select * from b order by x)"
    );
}

#[test]
fn select_values() {
    let stmt = SelectStmt {
        values_lists: pg_list![
            Node::List(pg_list![Node::int_const(1), Node::string_const("a")]),
            Node::List(pg_list![Node::int_const(2), Node::string_const("b")]),
        ],
        ..Default::default()
    };
    assert_eq!(deparse(&stmt.into_node()), "values (1, 'a'), (2, 'b')");
}

#[test]
fn select_with_cte() {
    let stmt = SelectStmt {
        with_clause: Some(WithClause {
            ctes: pg_list![CommonTableExpr {
                ctename: "recent".into(),
                ctequery: Some(simple_select("orders").into_node()),
                ..Default::default()
            }
            .into_node()],
            ..Default::default()
        }),
        target_list: pg_list![target(Node::column_star())],
        from_clause: pg_list![RangeVar::new("recent").into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "with recent as (select * from orders) select * from recent"
    );
}

#[test]
fn select_locking_clause() {
    let mut stmt = simple_select("t");
    stmt.locking_clause = pg_list![LockingClause {
        strength: LockClauseStrength::ForUpdate,
        wait_policy: LockWaitPolicy::Skip,
        ..Default::default()
    }
    .into_node()];
    assert_eq!(deparse(&stmt.into_node()), "select * from t for update skip locked");
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn between_renders_bounds_from_list() {
    let expr = AExpr {
        kind: AExprKind::Between,
        name: pg_list![Node::string("BETWEEN")],
        lexpr: Some(col("x")),
        rexpr: Some(Node::List(pg_list![Node::int_const(1), Node::int_const(10)])),
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "x between 1 and 10");
}

#[test]
fn not_between_symmetric() {
    let expr = AExpr {
        kind: AExprKind::NotBetweenSym,
        name: pg_list![Node::string("NOT BETWEEN SYMMETRIC")],
        lexpr: Some(col("x")),
        rexpr: Some(Node::List(pg_list![Node::int_const(5), Node::int_const(1)])),
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "x not between symmetric 5 and 1");
}

#[test]
fn in_list() {
    let expr = AExpr {
        kind: AExprKind::In,
        name: pg_list![Node::string("=")],
        lexpr: Some(col("id")),
        rexpr: Some(Node::List(pg_list![Node::int_const(1), Node::int_const(2)])),
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "id in (1, 2)");
}

#[test]
fn not_in_list() {
    let expr = AExpr {
        kind: AExprKind::In,
        name: pg_list![Node::string("<>")],
        lexpr: Some(col("id")),
        rexpr: Some(Node::List(pg_list![Node::int_const(3)])),
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "id not in (3)");
}

#[test]
fn like_and_not_ilike() {
    let like = AExpr {
        kind: AExprKind::Like,
        name: pg_list![Node::string("~~")],
        lexpr: Some(col("name")),
        rexpr: Some(Node::string_const("a%")),
        location: -1,
    };
    assert_eq!(deparse(&like.into_node()), "name like 'a%'");

    let not_ilike = AExpr {
        kind: AExprKind::ILike,
        name: pg_list![Node::string("!~~*")],
        lexpr: Some(col("name")),
        rexpr: Some(Node::string_const("b%")),
        location: -1,
    };
    assert_eq!(deparse(&not_ilike.into_node()), "name not ilike 'b%'");
}

#[test]
fn compound_operands_are_parenthesized() {
    let sum = Node::op_expr("+", col("a"), col("b"));
    let expr = Node::op_expr("*", sum, col("c"));
    assert_eq!(deparse(&expr), "(a + b) * c");
}

#[test]
fn bool_expr_nests_other_connective() {
    let inner = BoolExpr {
        boolop: BoolExprType::Or,
        args: pg_list![
            Node::op_expr("=", col("b"), Node::int_const(2)),
            Node::op_expr("=", col("c"), Node::int_const(3)),
        ],
        location: -1,
    };
    let outer = BoolExpr {
        boolop: BoolExprType::And,
        args: pg_list![
            Node::op_expr("=", col("a"), Node::int_const(1)),
            inner.into_node(),
        ],
        location: -1,
    };
    assert_eq!(deparse(&outer.into_node()), "a = 1 and (b = 2 or c = 3)");
}

#[test]
fn not_expr() {
    let expr = BoolExpr {
        boolop: BoolExprType::Not,
        args: pg_list![Node::op_expr("=", col("a"), Node::int_const(1))],
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "not (a = 1)");
}

#[test]
fn null_and_boolean_tests() {
    let null_test = NullTest {
        arg: Some(col("x")),
        nulltesttype: NullTestType::IsNotNull,
        ..Default::default()
    };
    assert_eq!(deparse(&null_test.into_node()), "x is not null");

    let bool_test = BooleanTest {
        arg: Some(col("flag")),
        booltesttype: BoolTestType::IsNotTrue,
        location: -1,
    };
    assert_eq!(deparse(&bool_test.into_node()), "flag is not true");
}

#[test]
fn case_expression() {
    let expr = CaseExpr {
        args: pg_list![CaseWhen {
            expr: Some(Node::op_expr(">", col("x"), Node::int_const(0))),
            result: Some(Node::string_const("pos")),
            location: -1,
        }
        .into_node()],
        defresult: Some(Node::string_const("neg")),
        ..Default::default()
    };
    assert_eq!(
        deparse(&expr.into_node()),
        "case when x > 0 then 'pos' else 'neg' end"
    );
}

#[test]
fn cast_renders_function_form() {
    let expr = TypeCast {
        arg: Some(col("id")),
        type_name: Some(TypeName::pg_catalog("int8")),
        location: -1,
    };
    assert_eq!(deparse(&expr.into_node()), "cast(id as bigint)");
}

#[test]
fn catalog_type_spellings() {
    assert_eq!(deparse(&TypeName::pg_catalog("int4").into_node()), "integer");
    assert_eq!(deparse(&TypeName::pg_catalog("bool").into_node()), "boolean");
    assert_eq!(
        deparse(&TypeName::pg_catalog("float8").into_node()),
        "double precision"
    );

    let tz = TypeName {
        typmods: pg_list![Node::int_const(3)],
        ..TypeName::pg_catalog("timestamptz")
    };
    assert_eq!(deparse(&tz.into_node()), "timestamp(3) with time zone");

    let arr = TypeName {
        array_bounds: pg_list![Node::int(-1)],
        ..TypeName::pg_catalog("int4")
    };
    assert_eq!(deparse(&arr.into_node()), "integer[]");
}

#[test]
fn func_call_variants() {
    let count_star = FuncCall {
        funcname: pg_list![Node::string("count")],
        agg_star: true,
        ..Default::default()
    };
    assert_eq!(deparse(&count_star.into_node()), "count(*)");

    // The implicit catalog prefix disappears.
    let sum = FuncCall {
        funcname: pg_list![Node::string("pg_catalog"), Node::string("sum")],
        args: pg_list![col("x")],
        agg_distinct: true,
        ..Default::default()
    };
    assert_eq!(deparse(&sum.into_node()), "sum(distinct x)");

    let filtered = FuncCall {
        funcname: pg_list![Node::string("count")],
        agg_star: true,
        agg_filter: Some(Node::op_expr(">", col("x"), Node::int_const(0))),
        ..Default::default()
    };
    assert_eq!(deparse(&filtered.into_node()), "count(*) filter (where x > 0)");
}

#[test]
fn window_function_inline_spec() {
    let call = FuncCall {
        funcname: pg_list![Node::string("row_number")],
        over: Some(WindowDef {
            partition_clause: pg_list![col("dept")],
            order_clause: pg_list![SortBy {
                node: Some(col("salary")),
                sortby_dir: SortByDir::Desc,
                ..Default::default()
            }
            .into_node()],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        deparse(&call.into_node()),
        "row_number() over (partition by dept order by salary desc)"
    );
}

#[test]
fn window_frame_clause() {
    let call = FuncCall {
        funcname: pg_list![Node::string("sum")],
        args: pg_list![col("x")],
        over: Some(WindowDef {
            order_clause: pg_list![SortBy { node: Some(col("ts")), ..Default::default() }.into_node()],
            frame_options: FRAMEOPTION_NONDEFAULT
                | FRAMEOPTION_ROWS
                | FRAMEOPTION_BETWEEN
                | FRAMEOPTION_START_UNBOUNDED_PRECEDING
                | FRAMEOPTION_END_CURRENT_ROW,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        deparse(&call.into_node()),
        "sum(x) over (order by ts rows between unbounded preceding and current row)"
    );
}

#[test]
fn sublinks() {
    let exists = SubLink {
        sub_link_type: SubLinkType::Exists,
        subselect: Some(simple_select("t").into_node()),
        ..Default::default()
    };
    assert_eq!(deparse(&exists.into_node()), "exists (select * from t)");

    let any = SubLink {
        sub_link_type: SubLinkType::Any,
        testexpr: Some(col("id")),
        subselect: Some(simple_select("t").into_node()),
        ..Default::default()
    };
    assert_eq!(deparse(&any.into_node()), "id in (select * from t)");
}

#[test]
fn array_and_row_expressions() {
    let arr = AArrayExpr {
        elements: pg_list![Node::int_const(1), Node::int_const(2)],
        location: -1,
    };
    assert_eq!(deparse(&arr.into_node()), "array[1, 2]");

    let row = RowExpr {
        args: pg_list![col("a"), col("b")],
        explicit_row: true,
        location: -1,
    };
    assert_eq!(deparse(&row.into_node()), "row(a, b)");
}

#[test]
fn coalesce_and_greatest() {
    let c = CoalesceExpr { args: pg_list![col("a"), Node::int_const(0)], location: -1 };
    assert_eq!(deparse(&c.into_node()), "coalesce(a, 0)");

    let g = MinMaxExpr {
        op: MinMaxOp::Greatest,
        args: pg_list![col("a"), col("b")],
        location: -1,
    };
    assert_eq!(deparse(&g.into_node()), "greatest(a, b)");
}

#[test]
fn identifier_quoting_flows_through() {
    let stmt = SelectStmt {
        target_list: pg_list![target(col("Name"))],
        from_clause: pg_list![RangeVar::qualified("My Schema", "users").into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "select \"Name\" from \"My Schema\".users"
    );
}

#[test]
fn string_constant_escaping() {
    assert_eq!(deparse(&Node::string_const("it's")), "'it''s'");
    assert_eq!(deparse(&Node::string_const("a\\b")), "E'a\\\\b'");
}

#[test]
fn param_ref_and_indirection() {
    let p = ParamRef { number: 2, location: -1 };
    assert_eq!(deparse(&p.into_node()), "$2");

    let ind = AIndirection {
        arg: Some(col("arr")),
        indirection: pg_list![AIndices {
            uidx: Some(Node::int_const(1)),
            ..Default::default()
        }
        .into_node()],
    };
    assert_eq!(deparse(&ind.into_node()), "arr[1]");
}

// ============================================================================
// Joins and range items
// ============================================================================

#[test]
fn left_join_on() {
    let join = JoinExpr {
        jointype: JoinType::Left,
        larg: Some(RangeVar::new("a").into_node()),
        rarg: Some(RangeVar::new("b").into_node()),
        quals: Some(Node::op_expr(
            "=",
            Node::column_ref(["a", "id"]),
            Node::column_ref(["b", "id"]),
        )),
        ..Default::default()
    };
    assert_eq!(deparse(&join.into_node()), "a left join b on a.id = b.id");
}

#[test]
fn cross_join_and_using() {
    let cross = JoinExpr {
        larg: Some(RangeVar::new("a").into_node()),
        rarg: Some(RangeVar::new("b").into_node()),
        ..Default::default()
    };
    assert_eq!(deparse(&cross.into_node()), "a cross join b");

    let using = JoinExpr {
        jointype: JoinType::Inner,
        larg: Some(RangeVar::new("a").into_node()),
        rarg: Some(RangeVar::new("b").into_node()),
        using_clause: pg_list![Node::string("id")],
        ..Default::default()
    };
    assert_eq!(deparse(&using.into_node()), "a join b using (id)");
}

#[test]
fn subselect_in_from() {
    let sub = RangeSubselect {
        subquery: Some(simple_select("t").into_node()),
        alias: Some(Alias::new("s")),
        ..Default::default()
    };
    assert_eq!(deparse(&sub.into_node()), "(select * from t) as s");
}

#[test]
fn range_function_with_ordinality() {
    let rf = RangeFunction {
        functions: pg_list![Node::List(pg_list![
            FuncCall {
                funcname: pg_list![Node::string("generate_series")],
                args: pg_list![Node::int_const(1), Node::int_const(3)],
                ..Default::default()
            }
            .into_node(),
            Node::List(pg_list![]),
        ])],
        ordinality: true,
        alias: Some(Alias::new("g")),
        ..Default::default()
    };
    assert_eq!(
        deparse(&rf.into_node()),
        "generate_series(1, 3) with ordinality as g"
    );
}

#[test]
fn only_prefix_and_alias() {
    let mut rv = RangeVar::new("parent");
    rv.inh = false;
    rv.alias = Some(Alias::new("p"));
    assert_eq!(deparse(&rv.into_node()), "only parent as p");
}

// ============================================================================
// DML
// ============================================================================

#[test]
fn insert_values() {
    let stmt = InsertStmt {
        relation: Some(RangeVar::new("users")),
        cols: pg_list![
            ResTarget { name: "id".into(), ..Default::default() }.into_node(),
            ResTarget { name: "name".into(), ..Default::default() }.into_node(),
        ],
        select_stmt: Some(
            SelectStmt {
                values_lists: pg_list![Node::List(pg_list![
                    Node::int_const(1),
                    Node::string_const("bob"),
                ])],
                ..Default::default()
            }
            .into_node(),
        ),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "insert into users (id, name) values (1, 'bob')"
    );
}

#[test]
fn insert_default_values_and_returning() {
    let stmt = InsertStmt {
        relation: Some(RangeVar::new("users")),
        returning_list: pg_list![target(col("id"))],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "insert into users default values returning id"
    );
}

#[test]
fn insert_on_conflict_do_update() {
    let stmt = InsertStmt {
        relation: Some(RangeVar::new("t")),
        cols: pg_list![ResTarget { name: "id".into(), ..Default::default() }.into_node()],
        select_stmt: Some(
            SelectStmt {
                values_lists: pg_list![Node::List(pg_list![Node::int_const(1)])],
                ..Default::default()
            }
            .into_node(),
        ),
        on_conflict_clause: Some(OnConflictClause {
            action: OnConflictAction::Update,
            infer: Some(InferClause {
                index_elems: pg_list![IndexElem { name: "id".into(), ..Default::default() }
                    .into_node()],
                ..Default::default()
            }),
            target_list: pg_list![ResTarget {
                name: "seen".into(),
                val: Some(Node::bool_const(true)),
                ..Default::default()
            }
            .into_node()],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "insert into t (id) values (1) on conflict (id) do update set seen = true"
    );
}

#[test]
fn update_set_where() {
    let stmt = UpdateStmt {
        relation: Some(RangeVar::new("users")),
        target_list: pg_list![ResTarget {
            name: "name".into(),
            val: Some(Node::string_const("bob")),
            ..Default::default()
        }
        .into_node()],
        where_clause: Some(Node::op_expr("=", col("id"), Node::int_const(1))),
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "update users set name = 'bob' where id = 1"
    );
}

#[test]
fn delete_using_returning() {
    let stmt = DeleteStmt {
        relation: Some(RangeVar::new("logs")),
        using_clause: pg_list![RangeVar::new("sessions").into_node()],
        where_clause: Some(Node::op_expr(
            "=",
            Node::column_ref(["logs", "sid"]),
            Node::column_ref(["sessions", "id"]),
        )),
        returning_list: pg_list![target(Node::column_star())],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "delete from logs using sessions where logs.sid = sessions.id returning *"
    );
}

// ============================================================================
// DDL
// ============================================================================

#[test]
fn create_table_columns() {
    let mut id = ColumnDef::new("id", TypeName::pg_catalog("int4"));
    id.is_not_null = true;
    let name = ColumnDef::new("name", TypeName::simple("text"));
    let stmt = CreateStmt {
        relation: Some(RangeVar::new("t")),
        table_elts: pg_list![id.into_node(), name.into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create table t (id integer not null, name text)"
    );
}

#[test]
fn create_temporary_table() {
    let mut rel = RangeVar::new("scratch");
    rel.relpersistence = "t".into();
    let stmt = CreateStmt {
        relation: Some(rel),
        table_elts: pg_list![ColumnDef::new("x", TypeName::pg_catalog("int4")).into_node()],
        if_not_exists: true,
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create temporary table if not exists scratch (x integer)"
    );
}

#[test]
fn create_table_with_constraints() {
    let mut id = ColumnDef::new("id", TypeName::pg_catalog("int4"));
    id.constraints = pg_list![Constraint {
        contype: ConstrType::Primary,
        ..Default::default()
    }
    .into_node()];
    let fk = Constraint {
        contype: ConstrType::Foreign,
        fk_attrs: pg_list![Node::string("owner")],
        pktable: Some(RangeVar::new("users")),
        pk_attrs: pg_list![Node::string("id")],
        fk_del_action: "c".into(),
        ..Default::default()
    };
    let stmt = CreateStmt {
        relation: Some(RangeVar::new("pets")),
        table_elts: pg_list![
            id.into_node(),
            ColumnDef::new("owner", TypeName::pg_catalog("int4")).into_node(),
            fk.into_node(),
        ],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create table pets (id integer primary key, owner integer, \
         foreign key (owner) references users (id) on delete cascade)"
    );
}

#[test]
fn table_like_including_all() {
    let like = TableLikeClause {
        relation: Some(RangeVar::new("src")),
        options: CREATE_TABLE_LIKE_ALL,
    };
    assert_eq!(deparse(&like.into_node()), "like src including all");
}

#[test]
fn table_like_selected_options() {
    let like = TableLikeClause {
        relation: Some(RangeVar::new("src")),
        options: CREATE_TABLE_LIKE_DEFAULTS | CREATE_TABLE_LIKE_INDEXES,
    };
    assert_eq!(
        deparse(&like.into_node()),
        "like src including defaults including indexes"
    );
}

#[test]
fn create_partitioned_table_and_child() {
    let parent = CreateStmt {
        relation: Some(RangeVar::new("events")),
        table_elts: pg_list![ColumnDef::new("at", TypeName::pg_catalog("timestamptz")).into_node()],
        partspec: Some(PartitionSpec {
            strategy: PartitionStrategy::Range,
            part_params: pg_list![PartitionElem { name: "at".into(), ..Default::default() }
                .into_node()],
            location: -1,
        }),
        ..Default::default()
    };
    assert_eq!(
        deparse(&parent.into_node()),
        "create table events (at timestamp with time zone) partition by range (at)"
    );

    let child = CreateStmt {
        relation: Some(RangeVar::new("events_2024")),
        inh_relations: pg_list![RangeVar::new("events").into_node()],
        partbound: Some(PartitionBoundSpec {
            strategy: PartitionStrategy::Range,
            lowerdatums: pg_list![Node::string_const("2024-01-01")],
            upperdatums: pg_list![Node::string_const("2025-01-01")],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(
        deparse(&child.into_node()),
        "create table events_2024 partition of events for values from ('2024-01-01') to ('2025-01-01')"
    );
}

#[test]
fn create_index() {
    let stmt = IndexStmt {
        idxname: "idx_users_email".into(),
        relation: Some(RangeVar::new("users")),
        unique: true,
        index_params: pg_list![
            IndexElem { name: "email".into(), ..Default::default() }.into_node(),
            IndexElem {
                name: "created_at".into(),
                ordering: SortByDir::Desc,
                ..Default::default()
            }
            .into_node(),
        ],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create unique index idx_users_email on users (email, created_at desc)"
    );
}

#[test]
fn create_view_and_matview() {
    let view = ViewStmt {
        view: Some(RangeVar::new("v")),
        query: Some(simple_select("t").into_node()),
        replace: true,
        ..Default::default()
    };
    assert_eq!(
        deparse(&view.into_node()),
        "create or replace view v as select * from t"
    );

    let matview = CreateTableAsStmt {
        query: Some(simple_select("t").into_node()),
        into: Some(IntoClause {
            rel: Some(RangeVar::new("mv")),
            skip_data: true,
            ..Default::default()
        }),
        objtype: ObjectType::MatView,
        ..Default::default()
    };
    assert_eq!(
        deparse(&matview.into_node()),
        "create materialized view mv as select * from t with no data"
    );

    let table = CreateTableAsStmt {
        query: Some(simple_select("src").into_node()),
        into: Some(IntoClause { rel: Some(RangeVar::new("t")), ..Default::default() }),
        objtype: ObjectType::Table,
        ..Default::default()
    };
    assert_eq!(deparse(&table.into_node()), "create table t as select * from src");

    // An object class outside table/matview degrades to a marker instead of
    // passing itself off as a table.
    let odd = CreateTableAsStmt {
        query: Some(simple_select("src").into_node()),
        into: Some(IntoClause { rel: Some(RangeVar::new("t")), ..Default::default() }),
        objtype: ObjectType::Sequence,
        ..Default::default()
    };
    assert!(deparse(&odd.into_node())
        .contains("<<unknown create table as object type: Sequence>>"));
}

#[test]
fn create_rule() {
    let stmt = RuleStmt {
        rulename: "protect".into(),
        event: CmdType::Delete,
        relation: Some(RangeVar::new("t")),
        instead: true,
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create rule protect as on delete to t do instead nothing"
    );

    let with_action = RuleStmt {
        rulename: "log_select".into(),
        event: CmdType::Select,
        relation: Some(RangeVar::new("t")),
        actions: pg_list![simple_select("audit").into_node()],
        replace: true,
        ..Default::default()
    };
    assert_eq!(
        deparse(&with_action.into_node()),
        "create or replace rule log_select as on select to t do select * from audit"
    );
}

#[test]
fn rule_event_outside_dml_renders_marker() {
    let stmt = RuleStmt {
        rulename: "odd".into(),
        event: CmdType::Utility,
        relation: Some(RangeVar::new("t")),
        ..Default::default()
    };
    assert!(deparse(&stmt.into_node()).contains("<<unknown rule event: Utility>>"));
}

#[test]
fn alter_table_commands() {
    let stmt = AlterTableStmt {
        relation: Some(RangeVar::new("t")),
        cmds: pg_list![
            AlterTableCmd {
                subtype: AlterTableType::AddColumn,
                def: Some(ColumnDef::new("age", TypeName::pg_catalog("int4")).into_node()),
                ..Default::default()
            }
            .into_node(),
            AlterTableCmd {
                subtype: AlterTableType::DropColumn,
                name: "legacy".into(),
                behavior: DropBehavior::Cascade,
                ..Default::default()
            }
            .into_node(),
        ],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "alter table t add column age integer, drop column legacy cascade"
    );
}

#[test]
fn alter_column_type_using() {
    let mut def = ColumnDef::new("id", TypeName::pg_catalog("int8"));
    def.colname = String::new();
    def.raw_default = Some(TypeCast {
        arg: Some(col("id")),
        type_name: Some(TypeName::pg_catalog("int8")),
        location: -1,
    }
    .into_node());
    let stmt = AlterTableStmt {
        relation: Some(RangeVar::new("t")),
        cmds: pg_list![AlterTableCmd {
            subtype: AlterTableType::AlterColumnType,
            name: "id".into(),
            def: Some(def.into_node()),
            ..Default::default()
        }
        .into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "alter table t alter column id type bigint using cast(id as bigint)"
    );
}

#[test]
fn drop_statements() {
    let table = DropStmt {
        remove_type: ObjectType::Table,
        objects: pg_list![Node::List(pg_list![
            Node::string("public"),
            Node::string("users"),
        ])],
        missing_ok: true,
        behavior: DropBehavior::Cascade,
        ..Default::default()
    };
    assert_eq!(
        deparse(&table.into_node()),
        "drop table if exists public.users cascade"
    );

    let trigger = DropStmt {
        remove_type: ObjectType::Trigger,
        objects: pg_list![Node::List(pg_list![
            Node::string("t"),
            Node::string("audit"),
        ])],
        ..Default::default()
    };
    assert_eq!(deparse(&trigger.into_node()), "drop trigger audit on t");
}

#[test]
fn truncate_restart_identity() {
    let stmt = TruncateStmt {
        relations: pg_list![RangeVar::new("a").into_node(), RangeVar::new("b").into_node()],
        restart_seqs: true,
        behavior: DropBehavior::Cascade,
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "truncate table a, b restart identity cascade"
    );
}

#[test]
fn create_sequence_options() {
    let stmt = CreateSeqStmt {
        sequence: Some(RangeVar::new("seq")),
        options: pg_list![
            DefElem::new("increment", Some(Node::int_const(2))).into_node(),
            DefElem::new("start", Some(Node::int_const(10))).into_node(),
            DefElem::new("minvalue", None).into_node(),
        ],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create sequence seq increment by 2 start with 10 no minvalue"
    );
}

#[test]
fn create_trigger() {
    let stmt = CreateTrigStmt {
        trigname: "audit".into(),
        relation: Some(RangeVar::new("users")),
        timing: TRIGGER_TYPE_BEFORE,
        events: TRIGGER_TYPE_INSERT | TRIGGER_TYPE_UPDATE,
        row: true,
        funcname: pg_list![Node::string("log_change")],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create trigger audit before insert or update on users for each row execute function log_change()"
    );
}

#[test]
fn create_function_with_body() {
    let stmt = CreateFunctionStmt {
        funcname: pg_list![Node::string("add_one")],
        parameters: pg_list![FunctionParameter {
            name: "x".into(),
            arg_type: Some(TypeName::pg_catalog("int4")),
            ..Default::default()
        }
        .into_node()],
        return_type: Some(TypeName::pg_catalog("int4")),
        options: pg_list![
            DefElem::new("language", Some(Node::string("sql"))).into_node(),
            DefElem::new("as", Some(Node::List(pg_list![Node::string("select x + 1")])))
                .into_node(),
        ],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create function add_one(x integer) returns integer language sql as $$select x + 1$$"
    );
}

#[test]
fn create_domain_with_check() {
    let stmt = CreateDomainStmt {
        domainname: pg_list![Node::string("positive_int")],
        type_name: Some(TypeName::pg_catalog("int4")),
        constraints: pg_list![Constraint {
            contype: ConstrType::Check,
            raw_expr: Some(Node::op_expr(">", Node::column_ref(["value"]), Node::int_const(0))),
            ..Default::default()
        }
        .into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "create domain positive_int as integer check (value > 0)"
    );
}

#[test]
fn comment_set_and_clear() {
    let set = CommentStmt {
        objtype: ObjectType::Table,
        object: Some(Node::List(pg_list![Node::string("users")])),
        comment: Some("account table".into()),
    };
    assert_eq!(
        deparse(&set.into_node()),
        "comment on table users is 'account table'"
    );

    let clear = CommentStmt {
        objtype: ObjectType::Column,
        object: Some(Node::List(pg_list![Node::string("users"), Node::string("id")])),
        comment: None,
    };
    assert_eq!(deparse(&clear.into_node()), "comment on column users.id is null");
}

#[test]
fn rename_table_and_column() {
    let table = RenameStmt {
        rename_type: ObjectType::Table,
        relation: Some(RangeVar::new("old")),
        newname: "new".into(),
        ..Default::default()
    };
    assert_eq!(deparse(&table.into_node()), "alter table old rename to new");

    let column = RenameStmt {
        rename_type: ObjectType::Column,
        relation_type: ObjectType::Table,
        relation: Some(RangeVar::new("t")),
        subname: "a".into(),
        newname: "b".into(),
        ..Default::default()
    };
    assert_eq!(deparse(&column.into_node()), "alter table t rename column a to b");
}

// ============================================================================
// Administrative statements
// ============================================================================

#[test]
fn transactions() {
    assert_eq!(
        deparse(&TransactionStmt::default().into_node()),
        "begin"
    );
    let commit = TransactionStmt {
        kind: TransactionStmtKind::Commit,
        chain: true,
        ..Default::default()
    };
    assert_eq!(deparse(&commit.into_node()), "commit and chain");

    let savepoint = TransactionStmt {
        kind: TransactionStmtKind::Savepoint,
        savepoint_name: "sp1".into(),
        ..Default::default()
    };
    assert_eq!(deparse(&savepoint.into_node()), "savepoint sp1");
}

#[test]
fn set_and_show() {
    let set = VariableSetStmt {
        kind: VariableSetKind::Value,
        name: "search_path".into(),
        args: pg_list![Node::string_const("public")],
        is_local: false,
    };
    assert_eq!(deparse(&set.into_node()), "set search_path to 'public'");

    let reset = VariableSetStmt {
        kind: VariableSetKind::Reset,
        name: "search_path".into(),
        ..Default::default()
    };
    assert_eq!(deparse(&reset.into_node()), "reset search_path");

    let show = VariableShowStmt { name: "server_version".into() };
    assert_eq!(deparse(&show.into_node()), "show server_version");
}

#[test]
fn explain_with_options() {
    let stmt = ExplainStmt {
        query: Some(simple_select("t").into_node()),
        options: pg_list![
            DefElem::new("analyze", None).into_node(),
            DefElem::new("format", Some(Node::string("json"))).into_node(),
        ],
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "explain (analyze, format json) select * from t"
    );
}

#[test]
fn copy_to_stdout_and_from_file() {
    let out = CopyStmt {
        relation: Some(RangeVar::new("users")),
        ..Default::default()
    };
    assert_eq!(deparse(&out.into_node()), "copy users to stdout");

    let from = CopyStmt {
        relation: Some(RangeVar::new("users")),
        is_from: true,
        filename: "/tmp/users.csv".into(),
        options: pg_list![DefElem::new("format", Some(Node::string("csv"))).into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&from.into_node()),
        "copy users from '/tmp/users.csv' with (format csv)"
    );
}

#[test]
fn grant_and_revoke() {
    let grant = GrantStmt {
        is_grant: true,
        objtype: ObjectType::Table,
        objects: pg_list![Node::List(pg_list![Node::string("users")])],
        privileges: pg_list![AccessPriv { priv_name: "select".into(), ..Default::default() }
            .into_node()],
        grantees: pg_list![RoleSpec {
            roletype: RoleSpecType::Public,
            ..Default::default()
        }
        .into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&grant.into_node()),
        "grant select on table users to public"
    );

    let revoke = GrantStmt {
        is_grant: false,
        targtype: GrantTargetType::AllInSchema,
        objtype: ObjectType::Table,
        objects: pg_list![Node::string("public")],
        grantees: pg_list![RoleSpec {
            rolename: "app".into(),
            ..Default::default()
        }
        .into_node()],
        ..Default::default()
    };
    assert_eq!(
        deparse(&revoke.into_node()),
        "revoke all privileges on all tables in schema public from app"
    );
}

#[test]
fn lock_vacuum_notify() {
    let lock = LockStmt {
        relations: pg_list![RangeVar::new("t").into_node()],
        mode: 8,
        nowait: true,
    };
    assert_eq!(deparse(&lock.into_node()), "lock table t in access exclusive mode nowait");

    let vacuum = VacuumStmt {
        is_vacuumcmd: true,
        options: pg_list![DefElem::new("full", None).into_node()],
        rels: pg_list![RangeVar::new("t").into_node()],
    };
    assert_eq!(deparse(&vacuum.into_node()), "vacuum (full) t");

    let notify = NotifyStmt {
        conditionname: "jobs".into(),
        payload: "run".into(),
    };
    assert_eq!(deparse(&notify.into_node()), "notify jobs, 'run'");
}

#[test]
fn prepared_statement_lifecycle() {
    let prepare = PrepareStmt {
        name: "q".into(),
        argtypes: pg_list![TypeName::pg_catalog("int4").into_node()],
        query: Some(
            SelectStmt {
                target_list: pg_list![target(Node::column_star())],
                from_clause: pg_list![RangeVar::new("t").into_node()],
                where_clause: Some(Node::op_expr(
                    "=",
                    col("id"),
                    ParamRef { number: 1, location: -1 }.into_node(),
                )),
                ..Default::default()
            }
            .into_node(),
        ),
    };
    assert_eq!(
        deparse(&prepare.into_node()),
        "prepare q (integer) as select * from t where id = $1"
    );

    let execute = ExecuteStmt {
        name: "q".into(),
        params: pg_list![Node::int_const(5)],
    };
    assert_eq!(deparse(&execute.into_node()), "execute q (5)");

    assert_eq!(deparse(&DeallocateStmt { name: "q".into() }.into_node()), "deallocate q");
    assert_eq!(deparse(&DeallocateStmt::default().into_node()), "deallocate all");
}

#[test]
fn cursor_statements() {
    let fetch = FetchStmt {
        direction: FetchDirection::Forward,
        how_many: FETCH_ALL,
        portalname: "cur".into(),
        ismove: false,
    };
    assert_eq!(deparse(&fetch.into_node()), "fetch all from cur");

    let backward = FetchStmt {
        direction: FetchDirection::Backward,
        how_many: 5,
        portalname: "cur".into(),
        ismove: true,
    };
    assert_eq!(deparse(&backward.into_node()), "move backward 5 from cur");

    assert_eq!(
        deparse(&ClosePortalStmt { portalname: "cur".into() }.into_node()),
        "close cur"
    );
}

#[test]
fn listen_notify_discard_checkpoint() {
    assert_eq!(
        deparse(&ListenStmt { conditionname: "jobs".into() }.into_node()),
        "listen jobs"
    );
    assert_eq!(deparse(&UnlistenStmt::default().into_node()), "unlisten *");
    assert_eq!(deparse(&CheckPointStmt.into_node()), "checkpoint");
    assert_eq!(
        deparse(&DiscardStmt { target: DiscardMode::Plans }.into_node()),
        "discard plans"
    );
}

#[test]
fn do_block() {
    let stmt = DoStmt {
        args: pg_list![
            DefElem::new("language", Some(Node::string("plpgsql"))).into_node(),
            DefElem::new("as", Some(Node::string("begin return; end"))).into_node(),
        ],
    };
    assert_eq!(
        deparse(&stmt.into_node()),
        "do language plpgsql $$begin return; end$$"
    );
}

// ============================================================================
// Totality and batch rendering
// ============================================================================

#[test]
fn unknown_flag_bits_degrade_to_marker() {
    let like = TableLikeClause {
        relation: Some(RangeVar::new("src")),
        options: 1 << 20,
    };
    let rendered = deparse(&like.into_node());
    assert!(rendered.contains("<<unknown"), "got: {rendered}");

    let lock = LockStmt {
        relations: pg_list![RangeVar::new("t").into_node()],
        mode: 42,
        nowait: false,
    };
    let rendered = deparse(&lock.into_node());
    assert!(rendered.contains("<<unknown lock mode: 42>>"), "got: {rendered}");
}

#[test]
fn deparse_stmts_joins_with_semicolons() {
    let stmts = vec![
        RawStmt::new(SelectStmt {
            target_list: pg_list![target(Node::int_const(1))],
            ..Default::default()
        }),
        RawStmt::new(SelectStmt {
            target_list: pg_list![target(Node::int_const(2))],
            ..Default::default()
        }),
    ];
    assert_eq!(deparse_stmts(&stmts), "select 1; select 2");
}

#[test]
fn clone_renders_identically() {
    let stmt = SelectStmt {
        target_list: pg_list![target(col("id")), target(col("name"))],
        from_clause: pg_list![RangeVar::qualified("public", "users").into_node()],
        where_clause: Some(Node::op_expr("<", col("id"), Node::int_const(100))),
        ..Default::default()
    }
    .into_node();
    support::assert_clone_renders_same(&stmt);
}
