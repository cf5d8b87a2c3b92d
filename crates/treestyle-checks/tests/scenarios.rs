//! Integration tests: all built-in checks end-to-end via the walker.
//!
//! Builds small positioned trees the way a host parser adapter would and
//! verifies the findings of the full check set, configuration loading from a
//! TOML file and violation serialization.

use treestyle_checks::all_checks;
use treestyle_core::{
    Config, NodeId, Severity, SyntaxTree, TokenKind, TreeBuilder, Violation, Walker,
};

fn walker_with(config: &Config) -> Walker {
    let mut builder = Walker::builder().config(config.clone());
    for check in all_checks(config) {
        builder = builder.check_box(check);
    }
    builder.build()
}

fn walk(tree: &SyntaxTree) -> Vec<Violation> {
    let config = Config::default();
    walker_with(&config)
        .walk(tree)
        .expect("tree should be consistent")
        .violations
}

// class A { int x = 7; double xxx = 7.0; } with the two fields on lines 5
// and 6 and their names in the given columns. Both initializers share a
// column so only name alignment varies.
fn two_fields(first_name_column: u32, second_name_column: u32) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let class = b.root(TokenKind::ClassDef, 1, 0, "");
    b.child(class, TokenKind::Modifiers, 1, 0, "");
    b.child(class, TokenKind::LiteralClass, 1, 0, "class");
    b.child(class, TokenKind::Ident, 1, 6, "A");
    let block = b.child(class, TokenKind::Objblock, 1, 8, "");
    b.child(block, TokenKind::Lcurly, 1, 8, "{");
    add_field(&mut b, block, 5, first_name_column, "int", "x", "7");
    add_field(&mut b, block, 6, second_name_column, "double", "xxx", "7.0");
    b.child(block, TokenKind::Rcurly, 7, 0, "}");
    b.build()
}

fn add_field(
    b: &mut TreeBuilder,
    block: NodeId,
    line: u32,
    name_column: u32,
    type_text: &str,
    name: &str,
    value: &str,
) {
    let var = b.child(block, TokenKind::VariableDef, line, 4, "");
    b.child(var, TokenKind::Modifiers, line, 4, "");
    let ty = b.child(var, TokenKind::Type, line, 4, "");
    b.child(ty, TokenKind::Ident, line, 4, type_text);
    b.child(var, TokenKind::Ident, line, name_column, name);
    let assign = b.child(var, TokenKind::Assign, line, 16, "=");
    let expr = b.child(assign, TokenKind::Expr, line, 18, "");
    b.child(expr, TokenKind::NumInt, line, 18, value);
    b.child(block, TokenKind::Semi, line, 21, ";");
}

#[test]
fn aligned_adjacent_fields_are_clean() {
    assert!(walk(&two_fields(4, 4)).is_empty());
}

#[test]
fn misaligned_adjacent_fields_cite_the_previous_line() {
    let violations = walk(&two_fields(4, 11));
    assert_eq!(violations.len(), 1);
    let v = &violations[0];
    assert_eq!(v.code, "TS001");
    assert_eq!(v.line, 6);
    assert_eq!(v.column, 11);
    assert_eq!(v.message_key, "alignment.misaligned");
    assert_eq!(v.args, vec!["xxx", "x", "5"]);
}

// a = b = c; optionally with the inner assignment parenthesized.
fn assignment_statement(parenthesized: bool) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let slist = b.root(TokenKind::Slist, 1, 0, "{");
    let expr = b.child(slist, TokenKind::Expr, 2, 4, "");
    let outer = b.child(expr, TokenKind::Assign, 2, 6, "=");
    b.child(outer, TokenKind::Ident, 2, 4, "a");
    if parenthesized {
        b.child(outer, TokenKind::Lparen, 2, 8, "(");
    }
    let offset = u32::from(parenthesized);
    let inner = b.child(outer, TokenKind::Assign, 2, 10 + offset, "=");
    b.child(inner, TokenKind::Ident, 2, 8 + offset, "b");
    b.child(inner, TokenKind::Ident, 2, 12 + offset, "c");
    if parenthesized {
        b.child(outer, TokenKind::Rparen, 2, 14, ")");
    }
    b.child(slist, TokenKind::Semi, 2, 15, ";");
    b.build()
}

#[test]
fn parenthesized_inner_assignment_is_clean() {
    assert!(walk(&assignment_statement(true)).is_empty());
}

#[test]
fn chained_assignment_is_flagged_at_the_inner_operator() {
    let violations = walk(&assignment_statement(false));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "TS004");
    assert_eq!(violations[0].column, 10);
}

// Foo(int a) { super(...); } with zero or one argument.
fn constructor_with_super(argument: Option<&str>) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let ctor = b.root(TokenKind::CtorDef, 2, 4, "");
    b.child(ctor, TokenKind::Modifiers, 2, 4, "");
    b.child(ctor, TokenKind::Ident, 2, 4, "Foo");
    b.child(ctor, TokenKind::Lparen, 2, 7, "(");
    let parameters = b.child(ctor, TokenKind::Parameters, 2, 8, "");
    let parameter = b.child(parameters, TokenKind::ParameterDef, 2, 8, "");
    b.child(parameter, TokenKind::Modifiers, 2, 8, "");
    let ty = b.child(parameter, TokenKind::Type, 2, 8, "");
    b.child(ty, TokenKind::LiteralInt, 2, 8, "int");
    b.child(parameter, TokenKind::Ident, 2, 12, "a");
    b.child(ctor, TokenKind::Rparen, 2, 13, ")");
    let body = b.child(ctor, TokenKind::Slist, 2, 15, "{");
    let call = b.child(body, TokenKind::SuperCtorCall, 3, 8, "super");
    b.child(call, TokenKind::Lparen, 3, 13, "(");
    let elist = b.child(call, TokenKind::Elist, 3, 14, "");
    if let Some(name) = argument {
        let expr = b.child(elist, TokenKind::Expr, 3, 14, "");
        b.child(expr, TokenKind::Ident, 3, 14, name);
    }
    b.child(call, TokenKind::Rparen, 3, 15, ")");
    b.child(call, TokenKind::Semi, 3, 16, ";");
    b.child(body, TokenKind::Rcurly, 4, 4, "}");
    b.build()
}

#[test]
fn zero_parameter_super_invocation_is_flagged() {
    let violations = walk(&constructor_with_super(None));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "TS005");
    assert_eq!(violations[0].line, 3);
}

#[test]
fn super_with_an_argument_is_clean() {
    assert!(walk(&constructor_with_super(Some("a"))).is_empty());
}

// switch (x) { case 1: f(); case 2: g(); } with the two first statements in
// the given columns on adjacent lines.
fn two_case_groups(first_column: u32, second_column: u32) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    let switch = b.root(TokenKind::LiteralSwitch, 2, 4, "switch");
    b.child(switch, TokenKind::Lparen, 2, 11, "(");
    let cond = b.child(switch, TokenKind::Expr, 2, 12, "");
    b.child(cond, TokenKind::Ident, 2, 12, "x");
    b.child(switch, TokenKind::Rparen, 2, 13, ")");
    b.child(switch, TokenKind::Lcurly, 2, 15, "{");
    add_case_group(&mut b, switch, 3, first_column, "f");
    add_case_group(&mut b, switch, 4, second_column, "g");
    b.child(switch, TokenKind::Rcurly, 5, 4, "}");
    b.build()
}

fn add_case_group(b: &mut TreeBuilder, switch: NodeId, line: u32, column: u32, callee: &str) {
    let group = b.child(switch, TokenKind::CaseGroup, line, 4, "");
    let case = b.child(group, TokenKind::LiteralCase, line, 4, "case");
    let label = b.child(case, TokenKind::Expr, line, 9, "");
    b.child(label, TokenKind::NumInt, line, 9, "1");
    let slist = b.child(group, TokenKind::Slist, line, column, "");
    let statement = b.child(slist, TokenKind::Expr, line, column, "");
    let call = b.child(statement, TokenKind::MethodCall, line, column + 1, "(");
    b.child(call, TokenKind::Ident, line, column, callee);
    b.child(call, TokenKind::Elist, line, column + 2, "");
    b.child(call, TokenKind::Rparen, line, column + 2, ")");
    b.child(slist, TokenKind::Semi, line, column + 3, ";");
}

#[test]
fn aligned_case_group_statements_are_clean() {
    assert!(walk(&two_case_groups(9, 9)).is_empty());
}

#[test]
fn misaligned_case_group_statements_are_flagged() {
    let violations = walk(&two_case_groups(9, 13));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "TS001");
    assert_eq!(violations[0].line, 4);
    assert_eq!(violations[0].column, 13);
}

#[test]
fn config_file_disables_checks_and_categories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("treestyle.toml");
    std::fs::write(
        &path,
        r#"
[checks.inner-assignment]
enabled = false

[alignment]
field-names = false
"#,
    )
    .expect("write config");

    let config = Config::from_file(&path).expect("config should parse");
    let mut walker = walker_with(&config);
    assert_eq!(walker.check_count(), 4);

    // The chained assignment is no longer reported.
    let result = walker.walk(&assignment_statement(false)).expect("walk");
    assert!(result.violations.is_empty());

    // Neither are misaligned field names.
    let result = walker.walk(&two_fields(4, 11)).expect("walk");
    assert!(result.violations.is_empty());
}

#[test]
fn walk_all_continues_past_inconsistent_trees() {
    let mut bad = TreeBuilder::new();
    let new = bad.root(TokenKind::LiteralNew, 1, 0, "new");
    bad.child(new, TokenKind::Ident, 1, 4, "Foo");
    bad.child(new, TokenKind::Semi, 1, 7, ";");
    let bad = bad.build();

    let good = assignment_statement(false);

    let config = Config::default();
    let mut walker = walker_with(&config);
    let (result, errors) = walker.walk_all([&bad, &good]);
    assert_eq!(errors.len(), 1);
    assert_eq!(result.trees_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, "TS004");
}

#[test]
fn findings_survive_a_json_round_trip() {
    let violations = walk(&two_fields(4, 11));
    let json = serde_json::to_string(&violations).expect("serialize");
    let back: Vec<Violation> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].code, "TS001");
    assert_eq!(back[0].severity, Severity::Error);
    assert_eq!(back[0].args, vec!["xxx", "x", "5"]);
}

#[test]
fn walking_twice_reports_the_same_findings() {
    let tree = two_fields(4, 11);
    let config = Config::default();
    let mut walker = walker_with(&config);
    let first = walker.walk(&tree).expect("walk").violations;
    let second = walker.walk(&tree).expect("walk").violations;
    assert_eq!(first, second);
}
