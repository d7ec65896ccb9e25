use super::imports::module_path;
use super::*;
use pretty_assertions::assert_eq;
use tern_ir::{BinaryOp, Expr as Src, ImportAlias, ImportName, Stmt as SrcStmt};
use tern_js::{render_stmt, Stmt};

fn require(path: &str) -> Expr {
    Expr::call(Expr::name("$tern.require"), vec![Expr::str(path)])
}

fn lower(stmt: &SrcStmt) -> Stmt {
    let mut ctx = TransformContext::new(&[]);
    lower_stmt(&mut ctx, stmt)
}

fn lower_module_without_exports(body: Vec<SrcStmt>) -> Stmt {
    transform(&Module::new(body), &[])
}

// -- Module --

#[test]
fn transform_module() {
    assert_eq!(
        lower_module_without_exports(vec![SrcStmt::expr(Src::name("x"))]),
        Stmt::Statements(vec![Stmt::expr(Expr::name("x"))])
    );
}

#[test]
fn transform_module_with_exports() {
    let module = Module::new(vec![SrcStmt::assign(
        ["__all__"],
        Src::list(vec![Src::str("x")]),
    )]);
    let exports = vec!["x".to_string()];
    assert_eq!(
        transform(&module, &exports),
        Stmt::Statements(vec![
            Stmt::var("__all__"),
            Stmt::assign("__all__", Expr::Array(vec![Expr::str("x")])),
            Stmt::assign(
                AssignTarget::property(Expr::name("$exports"), "x"),
                Expr::name("x"),
            ),
        ])
    );
}

#[test]
fn module_declarations_precede_body() {
    let lowered = lower_module_without_exports(vec![
        SrcStmt::expr(Src::name("y")),
        SrcStmt::assign(["x"], Src::int(1)),
    ]);
    assert_eq!(render_stmt(&lowered), "var x;y;x = 1;");
}

#[test]
fn exported_function_module_end_to_end() {
    let module = Module::new(vec![SrcStmt::func(
        "f",
        ["x"],
        vec![SrcStmt::ret(Src::name("x"))],
    )]);
    let exports = vec!["f".to_string()];
    let lowered = Transformer::new(&exports).transform(&module);

    assert_eq!(
        lowered,
        Stmt::Statements(vec![
            Stmt::Function {
                name: "f".to_string(),
                params: vec!["x".to_string()],
                body: vec![Stmt::ret(Expr::name("x"))],
            },
            Stmt::assign(
                AssignTarget::property(Expr::name("$exports"), "f"),
                Expr::name("f"),
            ),
        ])
    );
    assert_eq!(
        render_stmt(&lowered),
        "function f(x) { return x; }($exports).f = f;"
    );
}

// -- Imports --

#[test]
fn transform_basic_import_of_top_level_module() {
    assert_eq!(
        lower(&SrcStmt::import(vec![ImportAlias::new("x", None)])),
        Stmt::Statements(vec![Stmt::assign("x", require("x"))])
    );
}

#[test]
fn transform_basic_import_of_module_in_package() {
    assert_eq!(
        lower(&SrcStmt::import(vec![ImportAlias::new("x.y.z", None)])),
        Stmt::Statements(vec![
            Stmt::assign("x", require("x")),
            Stmt::assign(AssignTarget::property(Expr::name("x"), "y"), require("x/y")),
            Stmt::assign(
                AssignTarget::property(Expr::property(Expr::name("x"), "y"), "z"),
                require("x/y/z"),
            ),
        ])
    );
}

#[test]
fn transform_aliased_import_binds_only_alias() {
    assert_eq!(
        lower(&SrcStmt::import(vec![ImportAlias::new("x.y", Some("z"))])),
        Stmt::Statements(vec![Stmt::assign("z", require("x/y"))])
    );
}

#[test]
fn transform_import_from_current_package() {
    assert_eq!(
        lower(&SrcStmt::import_from(["."], vec![ImportName::new("x", None)])),
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("./")),
            Stmt::assign("x", Expr::property(Expr::name("$import0"), "x")),
        ])
    );
}

#[test]
fn transform_import_from_parent_package() {
    assert_eq!(
        lower(&SrcStmt::import_from([".."], vec![ImportName::new("x", None)])),
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("../")),
            Stmt::assign("x", Expr::property(Expr::name("$import0"), "x")),
        ])
    );
}

#[test]
fn transform_import_from_with_multiple_names_shares_one_temporary() {
    let lowered = lower(&SrcStmt::import_from(
        ["."],
        vec![ImportName::new("x", None), ImportName::new("y", None)],
    ));
    assert_eq!(
        lowered,
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("./")),
            Stmt::assign("x", Expr::property(Expr::name("$import0"), "x")),
            Stmt::assign("y", Expr::property(Expr::name("$import0"), "y")),
        ])
    );
    assert_eq!(
        render_stmt(&lowered),
        "var $import0 = $tern.require(\"./\");x = ($import0).x;y = ($import0).y;"
    );
}

#[test]
fn transform_import_from_with_alias() {
    assert_eq!(
        lower(&SrcStmt::import_from(["."], vec![ImportName::new("x", Some("y"))])),
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("./")),
            Stmt::assign("y", Expr::property(Expr::name("$import0"), "x")),
        ])
    );
}

#[test]
fn transform_import_from_child_and_absolute_packages() {
    assert_eq!(
        lower(&SrcStmt::import_from([".", "x"], vec![ImportName::new("y", None)])),
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("./x")),
            Stmt::assign("y", Expr::property(Expr::name("$import0"), "y")),
        ])
    );
    assert_eq!(
        lower(&SrcStmt::import_from(["x"], vec![ImportName::new("y", None)])),
        Stmt::Statements(vec![
            Stmt::var_init("$import0", require("x")),
            Stmt::assign("y", Expr::property(Expr::name("$import0"), "y")),
        ])
    );
}

#[test]
fn multiple_imports_use_different_names() {
    let lowered = lower_module_without_exports(vec![
        SrcStmt::import_from([".", "x1"], vec![ImportName::new("y1", None)]),
        SrcStmt::import_from([".", "x2"], vec![ImportName::new("y2", None)]),
    ]);
    assert_eq!(
        lowered,
        Stmt::Statements(vec![
            Stmt::var("y1"),
            Stmt::var("y2"),
            Stmt::Statements(vec![
                Stmt::var_init("$import0", require("./x1")),
                Stmt::assign("y1", Expr::property(Expr::name("$import0"), "y1")),
            ]),
            Stmt::Statements(vec![
                Stmt::var_init("$import1", require("./x2")),
                Stmt::assign("y2", Expr::property(Expr::name("$import1"), "y2")),
            ]),
        ])
    );
}

#[test]
fn module_path_joins_segments() {
    let path = |segments: &[&str]| {
        module_path(&segments.iter().map(|s| (*s).to_string()).collect::<Vec<_>>())
    };
    assert_eq!(path(&["."]), "./");
    assert_eq!(path(&[".."]), "../");
    assert_eq!(path(&[".", "x"]), "./x");
    assert_eq!(path(&["..", "x", "y"]), "../x/y");
    assert_eq!(path(&["x", "y"]), "x/y");
}

// -- Statements --

#[test]
fn transform_expression_statement() {
    assert_eq!(
        lower(&SrcStmt::expr(Src::name("x"))),
        Stmt::expr(Expr::name("x"))
    );
}

#[test]
fn transform_single_assignment() {
    assert_eq!(
        lower(&SrcStmt::assign(["x"], Src::name("z"))),
        Stmt::assign("x", Expr::name("z"))
    );
}

#[test]
fn transform_compound_assignment_chains_left_target_outermost() {
    let lowered = lower(&SrcStmt::assign(["a", "b"], Src::name("z")));
    assert_eq!(
        lowered,
        Stmt::expr(Expr::assign("a", Expr::assign("b", Expr::name("z"))))
    );
    assert_eq!(render_stmt(&lowered), "a = b = z;");
}

#[test]
fn transform_compound_assignment_evaluates_value_once() {
    let value = Src::call(Src::name("f"), vec![]);
    let lowered = lower(&SrcStmt::assign(["a", "b", "c"], value));
    let text = render_stmt(&lowered);
    assert_eq!(text, "a = b = c = f();");
    assert_eq!(text.matches("f()").count(), 1);
}

#[test]
fn transform_function_declaration() {
    assert_eq!(
        lower(&SrcStmt::func(
            "f",
            ["x", "y"],
            vec![SrcStmt::ret(Src::name("x"))]
        )),
        Stmt::Function {
            name: "f".to_string(),
            params: vec!["x".to_string(), "y".to_string()],
            body: vec![Stmt::ret(Expr::name("x"))],
        }
    );
}

#[test]
fn transform_function_declaration_declares_variables_at_top_of_function() {
    assert_eq!(
        lower(&SrcStmt::func(
            "f",
            Vec::<&str>::new(),
            vec![SrcStmt::assign(["x"], Src::name("y"))]
        )),
        Stmt::Function {
            name: "f".to_string(),
            params: vec![],
            body: vec![Stmt::var("x"), Stmt::assign("x", Expr::name("y"))],
        }
    );
}

#[test]
fn function_hoists_branch_assignments_once() {
    let func = SrcStmt::func(
        "f",
        ["c"],
        vec![
            SrcStmt::expr(Src::name("c")),
            SrcStmt::if_else(
                Src::name("c"),
                vec![SrcStmt::assign(["x"], Src::name("y"))],
                vec![
                    SrcStmt::assign(["x"], Src::name("y")),
                    SrcStmt::assign(["x"], Src::int(1)),
                ],
            ),
            SrcStmt::ret(Src::name("x")),
        ],
    );
    let text = render_stmt(&lower(&func));
    assert_eq!(
        text,
        "function f(c) { var x;c;if ($tern.bool(c)) { x = y; } else { x = y;x = 1; }return x; }"
    );
    assert_eq!(text.matches("var x;").count(), 1);
}

#[test]
fn nested_function_locals_stay_in_nested_function() {
    let outer = SrcStmt::func(
        "outer",
        Vec::<&str>::new(),
        vec![SrcStmt::func(
            "inner",
            Vec::<&str>::new(),
            vec![SrcStmt::assign(["x"], Src::int(1))],
        )],
    );
    assert_eq!(
        render_stmt(&lower(&outer)),
        "function outer() { function inner() { var x;x = 1; } }"
    );
}

#[test]
fn transform_return() {
    assert_eq!(
        lower(&SrcStmt::ret(Src::name("x"))),
        Stmt::ret(Expr::name("x"))
    );
}

#[test]
fn transform_if_else_wraps_condition_in_truthiness_shim() {
    assert_eq!(
        lower(&SrcStmt::if_else(
            Src::name("x"),
            vec![SrcStmt::ret(Src::name("y"))],
            vec![SrcStmt::ret(Src::name("z"))],
        )),
        Stmt::If {
            condition: Expr::call(Expr::name("$tern.bool"), vec![Expr::name("x")]),
            then_body: vec![Stmt::ret(Expr::name("y"))],
            else_body: vec![Stmt::ret(Expr::name("z"))],
        }
    );
}

// -- Expressions --

#[test]
fn transform_call_preserves_argument_order() {
    assert_eq!(
        lower_expr(&Src::call(Src::name("f"), vec![Src::name("x"), Src::name("y")])),
        Expr::call(Expr::name("f"), vec![Expr::name("x"), Expr::name("y")])
    );
}

#[test]
fn transform_attribute_access_uses_getattr_shim() {
    let lowered = lower_expr(&Src::attr(Src::name("x"), "y"));
    assert_eq!(
        lowered,
        Expr::call(
            Expr::name("$tern.getattr"),
            vec![Expr::name("x"), Expr::str("y")]
        )
    );
    assert_eq!(tern_js::render_expr(&lowered), "$tern.getattr(x, \"y\")");
}

#[test]
fn transform_binary_operation_uses_operator_shim() {
    let lowered = lower_expr(&Src::binary(BinaryOp::Add, Src::name("x"), Src::name("y")));
    assert_eq!(
        lowered,
        Expr::call(
            Expr::name("$tern.operators.add"),
            vec![Expr::name("x"), Expr::name("y")]
        )
    );
    assert_eq!(tern_js::render_expr(&lowered), "$tern.operators.add(x, y)");
}

#[test]
fn transform_nested_binary_operations() {
    let expr = Src::binary(
        BinaryOp::Mul,
        Src::binary(BinaryOp::Sub, Src::int(1), Src::int(2)),
        Src::name("z"),
    );
    assert_eq!(
        tern_js::render_expr(&lower_expr(&expr)),
        "$tern.operators.mul($tern.operators.sub(1, 2), z)"
    );
}

#[test]
fn transform_literals() {
    assert_eq!(lower_expr(&Src::name("x")), Expr::name("x"));
    assert_eq!(lower_expr(&Src::None), Expr::Null);
    assert_eq!(lower_expr(&Src::Bool(true)), Expr::Bool(true));
    assert_eq!(lower_expr(&Src::int(42)), Expr::Number(42));
    assert_eq!(lower_expr(&Src::str("hello")), Expr::str("hello"));
}

#[test]
fn transform_list_preserves_element_order() {
    assert_eq!(
        lower_expr(&Src::list(vec![Src::int(1), Src::None, Src::str("a")])),
        Expr::Array(vec![Expr::Number(1), Expr::Null, Expr::str("a")])
    );
}
