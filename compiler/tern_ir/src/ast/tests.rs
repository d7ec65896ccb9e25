use super::*;
use pretty_assertions::assert_eq;

#[test]
fn import_alias_splits_dotted_path() {
    let alias = ImportAlias::new("a.b.c", None);
    assert_eq!(alias.name_parts, vec!["a", "b", "c"]);
    assert_eq!(alias.bound_name(), Some("a"));
}

#[test]
fn import_alias_binds_alias_when_present() {
    let alias = ImportAlias::new("a.b", Some("c"));
    assert_eq!(alias.bound_name(), Some("c"));
}

#[test]
fn import_name_bound_name() {
    assert_eq!(ImportName::new("x", None).bound_name(), "x");
    assert_eq!(ImportName::new("x", Some("y")).bound_name(), "y");
}

#[test]
fn operator_tags_are_unique() {
    let mut tags: Vec<_> = BinaryOp::ALL.iter().map(|op| op.tag()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), BinaryOp::ALL.len());
}

#[test]
fn overload_method_wraps_tag() {
    assert_eq!(BinaryOp::Add.overload_method(), "__add__");
    assert_eq!(BinaryOp::BitAnd.overload_method(), "__and__");
}

#[test]
fn floored_and_power_operators_use_helpers() {
    assert_eq!(BinaryOp::Add.number_op(), NumberOp::Infix("+"));
    assert!(matches!(BinaryOp::FloorDiv.number_op(), NumberOp::Helper(_)));
    assert!(matches!(BinaryOp::Mod.number_op(), NumberOp::Helper(_)));
    assert!(matches!(BinaryOp::Pow.number_op(), NumberOp::Helper(_)));
}

#[test]
fn assign_constructor_collects_targets() {
    let stmt = Stmt::assign(["a", "b"], Expr::int(1));
    assert_eq!(
        stmt,
        Stmt::Assign {
            targets: vec!["a".to_string(), "b".to_string()],
            value: Expr::Int(1),
        }
    );
}

#[test]
fn operator_symbols_are_distinct() {
    let symbols: std::collections::HashSet<_> =
        BinaryOp::ALL.iter().map(|op| op.as_symbol()).collect();
    assert_eq!(symbols.len(), BinaryOp::ALL.len());
    assert_eq!(BinaryOp::FloorDiv.as_symbol(), "//");
    assert_eq!(BinaryOp::Pow.as_symbol(), "**");
}
