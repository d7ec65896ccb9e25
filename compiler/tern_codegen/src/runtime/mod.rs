//! Runtime Prelude
//!
//! Fixed target-language support code prepended to every generated unit.
//! Lowered code depends on the prelude for every piece of dynamic source
//! semantics:
//!
//! - **Truthiness**: `$tern.bool` treats empty containers as false
//! - **Attributes**: `$tern.getattr` consults per-type override tables
//! - **Operators**: `$tern.operators.<tag>` dispatches to overload methods
//! - **Modules**: `$tern.require` decides between sibling files and library
//!   modules at load time
//!
//! The helpers in this module are the only place the transformer learns the
//! runtime's names, and the prelude text is generated from the same tables,
//! so the two cannot drift apart.

mod writer;

use std::sync::OnceLock;

use tern_ir::BinaryOp;
use tern_js::Expr;

use writer::PreludeWriter;

/// Runtime namespace object defined by the prelude.
pub const RUNTIME_OBJECT: &str = "$tern";
/// Truthiness coercion shim.
pub const BOOL_SHIM: &str = "$tern.bool";
/// Dynamic attribute-access shim.
pub const GETATTR_SHIM: &str = "$tern.getattr";
/// Module-resolution shim.
pub const REQUIRE_SHIM: &str = "$tern.require";
/// Operator-dispatch table.
pub const OPERATORS_TABLE: &str = "$tern.operators";
/// The unit's exports object.
pub const EXPORTS_OBJECT: &str = "$exports";

/// Builtin functions bound as unit-level variables.
pub const BUILTIN_NAMES: &[&str] = &["print", "str", "bool", "len", "abs"];

/// Attribute overrides for builtin types, keyed by the target's
/// `Object.prototype.toString` tag. Each entry maps an attribute name to a
/// function expression that is bound to the receiver on lookup.
///
/// Adding a row here changes only the prelude; lowered code is unaffected.
pub const BUILTIN_METHODS: &[(&str, &[(&str, &str)])] = &[
    (
        "[object String]",
        &[
            // `str.find` has no same-named native method; `indexOf` matches
            // its semantics, including `-1` when absent.
            ("find", "String.prototype.indexOf"),
            ("__len__", "function() { return this.length; }"),
            ("__str__", "function() { return \"\" + this; }"),
            ("__add__", "function(right) { return \"\" + this + right; }"),
        ],
    ),
    (
        "[object Array]",
        &[
            ("__len__", "function() { return this.length; }"),
            ("__add__", "function(right) { return this.concat(right); }"),
            (
                "__str__",
                "function() { return \"[\" + this.map(repr).join(\", \") + \"]\"; }",
            ),
            ("append", "function(value) { this.push(value); return null; }"),
        ],
    ),
    (
        "[object Number]",
        &[("__str__", "function() { return \"\" + this; }")],
    ),
];

/// `$tern.bool(value)`
pub fn truthiness(value: Expr) -> Expr {
    Expr::call(Expr::name(BOOL_SHIM), vec![value])
}

/// `$tern.getattr(value, "attr")`
pub fn get_attribute(value: Expr, attr: &str) -> Expr {
    Expr::call(Expr::name(GETATTR_SHIM), vec![value, Expr::str(attr)])
}

/// `$tern.operators.<tag>(left, right)`
pub fn binary_operation(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::call(
        Expr::name(format!("{OPERATORS_TABLE}.{}", op.tag())),
        vec![left, right],
    )
}

/// `$tern.require("path")`
pub fn require(path: &str) -> Expr {
    Expr::call(Expr::name(REQUIRE_SHIM), vec![Expr::str(path)])
}

/// The prelude text. Built on first use and identical for every unit.
pub fn prelude() -> &'static str {
    static PRELUDE: OnceLock<String> = OnceLock::new();
    PRELUDE.get_or_init(build_prelude)
}

fn build_prelude() -> String {
    let mut w = PreludeWriter::new();

    w.writeln(&format!("var {RUNTIME_OBJECT} = (function() {{"));
    w.indent();
    emit_number_helpers(&mut w);
    emit_attribute_access(&mut w);
    emit_truthiness(&mut w);
    emit_operators(&mut w);
    emit_module_resolution(&mut w);
    emit_builtins(&mut w);
    w.writeln("return {");
    w.indent();
    w.writeln("bool: bool,");
    w.writeln("getattr: getattr,");
    w.writeln("operators: operators,");
    w.writeln("require: resolveModule,");
    let builtins: Vec<String> = BUILTIN_NAMES
        .iter()
        .map(|name| format!("{name}: {name}"))
        .collect();
    w.writeln(&format!("builtins: {{ {} }}", builtins.join(", ")));
    w.dedent();
    w.writeln("};");
    w.dedent();
    w.writeln("})();");

    w.writeln(&format!("var {EXPORTS_OBJECT} = module.exports;"));
    for name in BUILTIN_NAMES {
        w.writeln(&format!("var {name} = {RUNTIME_OBJECT}.builtins.{name};"));
    }

    w.finish()
}

fn emit_number_helpers(w: &mut PreludeWriter) {
    w.writeln("function isNumber(value) {");
    w.indent();
    w.writeln("return typeof value === \"number\" || typeof value === \"boolean\";");
    w.dedent();
    w.writeln("}");
    w.writeln("function numberFloorDiv(left, right) {");
    w.indent();
    w.writeln("return Math.floor(left / right);");
    w.dedent();
    w.writeln("}");
    w.writeln("function numberMod(left, right) {");
    w.indent();
    w.writeln("return (left % right + right) % right;");
    w.dedent();
    w.writeln("}");
    w.writeln("function numberPow(left, right) {");
    w.indent();
    w.writeln("return Math.pow(left, right);");
    w.dedent();
    w.writeln("}");
}

fn emit_attribute_access(w: &mut PreludeWriter) {
    w.writeln("var builtinMethods = {};");
    for (type_tag, methods) in BUILTIN_METHODS {
        w.writeln(&format!("builtinMethods[\"{type_tag}\"] = {{"));
        w.indent();
        for (index, (name, implementation)) in methods.iter().enumerate() {
            let separator = if index + 1 < methods.len() { "," } else { "" };
            w.writeln(&format!("{name}: {implementation}{separator}"));
        }
        w.dedent();
        w.writeln("};");
    }

    w.writeln("function getattr(value, name) {");
    w.indent();
    w.writeln("var methods = builtinMethods[Object.prototype.toString.call(value)];");
    w.writeln("if (methods === undefined) {");
    w.indent();
    w.writeln("return value[name];");
    w.dedent();
    w.writeln("}");
    w.writeln("if (Object.prototype.hasOwnProperty.call(methods, name)) {");
    w.indent();
    w.writeln("return methods[name].bind(value);");
    w.dedent();
    w.writeln("}");
    w.writeln("var property = value[name];");
    w.writeln("return typeof property === \"function\" ? property.bind(value) : property;");
    w.dedent();
    w.writeln("}");
    w.writeln("function callMethod(receiver, name, argument) {");
    w.indent();
    w.writeln("return getattr(receiver, name).call(receiver, argument);");
    w.dedent();
    w.writeln("}");
}

fn emit_truthiness(w: &mut PreludeWriter) {
    w.writeln("function bool(value) {");
    w.indent();
    w.writeln("if (value === null || value === undefined) {");
    w.indent();
    w.writeln("return false;");
    w.dedent();
    w.writeln("}");
    w.writeln("var length = getattr(value, \"__len__\");");
    w.writeln("if (typeof length === \"function\") {");
    w.indent();
    w.writeln("return length.call(value) > 0;");
    w.dedent();
    w.writeln("}");
    w.writeln("return !!value;");
    w.dedent();
    w.writeln("}");
}

fn emit_operators(w: &mut PreludeWriter) {
    w.writeln("var operators = {};");
    for op in BinaryOp::ALL {
        let native = match op.number_op() {
            tern_ir::NumberOp::Infix(token) => format!("left {token} right"),
            tern_ir::NumberOp::Helper(helper) => format!("{helper}(left, right)"),
        };
        w.writeln(&format!("operators.{} = function(left, right) {{", op.tag()));
        w.indent();
        w.writeln("if (isNumber(left) && isNumber(right)) {");
        w.indent();
        w.writeln(&format!("return {native};"));
        w.dedent();
        w.writeln("}");
        w.writeln(&format!(
            "return callMethod(left, \"{}\", right);",
            op.overload_method()
        ));
        w.dedent();
        w.writeln("};");
    }
}

/// The entry-point check runs when each unit loads: `require.main` is only
/// known at run time. The entry point installs a global resolver that tries
/// absolute names as files next to itself before library resolution.
fn emit_module_resolution(w: &mut PreludeWriter) {
    w.writeln("function isRelativeImport(name) {");
    w.indent();
    w.writeln("return name.indexOf(\".\") === 0;");
    w.dedent();
    w.writeln("}");
    w.writeln("function canResolve(name) {");
    w.indent();
    w.writeln("try {");
    w.indent();
    w.writeln("require.resolve(name);");
    w.writeln("return true;");
    w.dedent();
    w.writeln("} catch (error) {");
    w.indent();
    w.writeln("return false;");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.writeln("if (require.main === module) {");
    w.indent();
    w.writeln("global.$ternResolve = function(name) {");
    w.indent();
    w.writeln("var siblingName = \"./\" + name;");
    w.writeln("return canResolve(siblingName) ? require(siblingName) : undefined;");
    w.dedent();
    w.writeln("};");
    w.dedent();
    w.writeln("}");
    w.writeln("function resolveModule(name) {");
    w.indent();
    w.writeln("if (!isRelativeImport(name) && global.$ternResolve) {");
    w.indent();
    w.writeln("var result = global.$ternResolve(name);");
    w.writeln("if (result !== undefined) {");
    w.indent();
    w.writeln("return result;");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.writeln("return require(name);");
    w.dedent();
    w.writeln("}");
}

fn emit_builtins(w: &mut PreludeWriter) {
    w.writeln("function str(value) {");
    w.indent();
    w.writeln("if (value === null || value === undefined) {");
    w.indent();
    w.writeln("return \"None\";");
    w.dedent();
    w.writeln("}");
    w.writeln("if (typeof value === \"boolean\") {");
    w.indent();
    w.writeln("return value ? \"True\" : \"False\";");
    w.dedent();
    w.writeln("}");
    w.writeln("var method = getattr(value, \"__str__\");");
    w.writeln("return typeof method === \"function\" ? method.call(value) : String(value);");
    w.dedent();
    w.writeln("}");
    // Quoted form used for string elements of containers: `'x'`, or `"it's"`
    // when only single quotes occur.
    w.writeln("function repr(value) {");
    w.indent();
    w.writeln(r#"if (typeof value !== "string") {"#);
    w.indent();
    w.writeln("return str(value);");
    w.dedent();
    w.writeln("}");
    w.writeln(r#"var escaped = value.replace(/\\/g, "\\\\").replace(/\n/g, "\\n");"#);
    w.writeln(r#"if (value.indexOf("'") !== -1 && value.indexOf("\"") === -1) {"#);
    w.indent();
    w.writeln(r#"return "\"" + escaped + "\"";"#);
    w.dedent();
    w.writeln("}");
    w.writeln(r#"return "'" + escaped.replace(/'/g, "\\'") + "'";"#);
    w.dedent();
    w.writeln("}");
    w.writeln("function print(value) {");
    w.indent();
    w.writeln("console.log(str(value));");
    w.writeln("return null;");
    w.dedent();
    w.writeln("}");
    w.writeln("function len(value) {");
    w.indent();
    w.writeln("return getattr(value, \"__len__\").call(value);");
    w.dedent();
    w.writeln("}");
    w.writeln("function abs(value) {");
    w.indent();
    w.writeln("return isNumber(value) ? Math.abs(value) : getattr(value, \"__abs__\").call(value);");
    w.dedent();
    w.writeln("}");
}
