use std::rc::Rc;

use rill::{
    ast::AstNode,
    evaluate,
    interpreter::{environment::Environment, evaluator::core::Interpreter},
};

fn render_in(env: &Rc<Environment>, source: &str) -> String {
    match evaluate(source, env) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => panic!("Expression produced no value: {source}"),
        Err(e) => panic!("Expression failed: {source}\n{e}"),
    }
}

fn render(source: &str) -> String {
    render_in(&Environment::root(), source)
}

fn diagnostic_in(env: &Rc<Environment>, source: &str) -> String {
    match evaluate(source, env) {
        Ok(_) => panic!("Expression succeeded but was expected to fail: {source}"),
        Err(e) => e.to_string(),
    }
}

fn diagnostic(source: &str) -> String {
    diagnostic_in(&Environment::root(), source)
}

fn absent_in(env: &Rc<Environment>, source: &str) {
    match evaluate(source, env) {
        Ok(None) => {},
        Ok(Some(value)) => panic!("Expected no value from {source}, got {value}"),
        Err(e) => panic!("Expression failed: {source}\n{e}"),
    }
}

fn absent(source: &str) {
    absent_in(&Environment::root(), source);
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(render("1 + 2 * 3"), "7");
    assert_eq!(render("(1 + 2) * 3"), "9");
    assert_eq!(render("2 ^ 3 ^ 2"), "512");
    assert_eq!(render("(2 ^ 3) ^ 2"), "64");
    assert_eq!(render("10 - 4 - 3"), "3");
    assert_eq!(render("7 / 2"), "3.5");
    assert_eq!(render("10 % 4"), "2");
    assert_eq!(render("1 + 2 * 3 ^ 2"), "19");
}

#[test]
fn unary_operators() {
    assert_eq!(render("-3 + 5"), "2");
    assert_eq!(render("--5"), "5");
    assert_eq!(render("+7"), "7");
    assert_eq!(render("2 ^ -1"), "0.5");
    assert_eq!(render("not 0"), "1");
    assert_eq!(render("not 7"), "0");
    assert_eq!(render("not 1 == 1"), "0");
}

#[test]
fn comparisons_yield_canonical_booleans() {
    assert_eq!(render("1 == 1"), "1");
    assert_eq!(render("1 != 1"), "0");
    assert_eq!(render("2 < 3"), "1");
    assert_eq!(render("3 <= 3"), "1");
    assert_eq!(render("2 > 3"), "0");
    assert_eq!(render("3 >= 4"), "0");
}

#[test]
fn logic_treats_only_positive_numbers_as_true() {
    assert_eq!(render("1 and 2"), "1");
    assert_eq!(render("1 and 0"), "0");
    assert_eq!(render("-1 and 1"), "0");
    assert_eq!(render("0 or -5"), "0");
    assert_eq!(render("1 or 0"), "1");
}

#[test]
fn logic_evaluates_both_operands() {
    assert_eq!(diagnostic("0 and oops"),
               "Runtime Error: 'oops' is not defined");
    assert_eq!(diagnostic("1 or oops"), "Runtime Error: 'oops' is not defined");
}

#[test]
fn preloaded_constants() {
    assert_eq!(render("true"), "1");
    assert_eq!(render("false"), "0");
    assert_eq!(render("null"), "0");
}

#[test]
fn string_operations() {
    assert_eq!(render(r#""foo" + "bar""#), "foobar");
    assert_eq!(render(r#""ab" * 3"#), "ababab");
    assert_eq!(render(r#""ab" * 2.9"#), "abab");
    assert_eq!(render(r#""ab" * -1"#), "");
    assert_eq!(render(r#""a" == "a""#), "1");
    assert_eq!(render(r#""a" != "b""#), "1");
}

#[test]
fn string_escapes() {
    assert_eq!(render(r#""a\nb""#), "a\nb");
    assert_eq!(render(r#""a\tb""#), "a\tb");
    assert_eq!(render(r#""say \"hi\"""#), "say \"hi\"");
    assert_eq!(render(r#""c:\\temp""#), "c:\\temp");
    assert_eq!(render(r#""\q""#), "q");
}

#[test]
fn unsupported_string_operations_fail() {
    assert_eq!(diagnostic(r#""a" - "b""#),
               "Runtime Error: Illegal operation '-'");
    assert_eq!(diagnostic(r#""a" < "b""#),
               "Runtime Error: Illegal operation '<'");
    assert_eq!(diagnostic(r#"1 + "a""#), "Runtime Error: Illegal operation '+'");
}

#[test]
fn list_operations() {
    assert_eq!(render("[1, 2, 3] / 0"), "1");
    assert_eq!(render("[1, 2, 3] / -1"), "3");
    assert_eq!(render("[1, 2, 3] / -3"), "1");
    assert_eq!(render("[1, 2, 3] - 1"), "[1, 3]");
    assert_eq!(render("[1, 2, 3] - -1"), "[1, 2]");
    assert_eq!(render("[1, 2] * [3, 4]"), "[1, 2, 3, 4]");
    assert_eq!(render("[1, 2] + 3"), "[1, 2, 3]");
    // `+` appends its right operand whole, even when that operand is a list.
    assert_eq!(render("[1, 2] + [3]"), "[1, 2, [3]]");
    assert_eq!(render(r#"[] + "x""#), "[x]");
}

#[test]
fn list_equality_is_deep() {
    assert_eq!(render("[] == []"), "1");
    assert_eq!(render("[1, [2, 3]] == [1, [2, 3]]"), "1");
    assert_eq!(render("[1, [2, 3]] == [1, [2, 4]]"), "0");
    assert_eq!(render("[1] != [2]"), "1");
}

#[test]
fn list_index_errors() {
    assert_eq!(diagnostic("[1, 2, 3] / 3"), "Runtime Error: Index out of bounds");
    assert_eq!(diagnostic("[1, 2, 3] / -4"),
               "Runtime Error: Index out of bounds");
    assert_eq!(diagnostic("[1, 2, 3] / 1.5"),
               "Runtime Error: Index must be an integer");
    assert_eq!(diagnostic("[1] - 1"), "Runtime Error: Index out of bounds");
    assert_eq!(diagnostic("[1, 2] == 1"),
               "Runtime Error: Illegal operation '=='");
}

#[test]
fn rendering() {
    assert_eq!(render("0.5"), "0.5");
    assert_eq!(render("2."), "2");
    assert_eq!(render("007"), "7");
    assert_eq!(render(r#"[1, "two", [3]]"#), "[1, two, [3]]");
    assert_eq!(render("5 % 0"), "NaN");
}

#[test]
fn var_binds_and_reports_the_value() {
    let env = Environment::root();

    assert_eq!(render_in(&env, "var a = 5"), "5");
    assert_eq!(render_in(&env, "a * a"), "25");
    assert_eq!(render_in(&env, "var a = a + 1"), "6");
    assert_eq!(render_in(&env, r#"var s = "hi""#), "hi");
    assert_eq!(render_in(&env, "s"), "hi");
}

#[test]
fn var_is_an_expression() {
    let env = Environment::root();

    assert_eq!(render_in(&env, "(var x = 4) + x"), "8");
}

#[test]
fn undefined_variable_diagnostic() {
    assert_eq!(diagnostic("some_var"),
               "Runtime Error: 'some_var' is not defined");
}

#[test]
fn if_requires_exactly_one() {
    assert_eq!(render("if 1 == 1 then 10 else 20"), "10");
    assert_eq!(render("if 0 then 10 else 20"), "20");
    // Strict truthiness: 2 is not exactly 1, so the else branch runs.
    assert_eq!(render("if 2 then 10 else 20"), "20");
    absent("if 0 then 10");
}

#[test]
fn elif_chain_takes_the_first_match() {
    assert_eq!(render("if 0 then 1 elif 1 then 2 else 3"), "2");
    assert_eq!(render("if 0 then 1 elif 0 then 2 else 3"), "3");
    assert_eq!(render("if 1 then 1 elif 1 then 2 else 3"), "1");
}

#[test]
fn for_loop_binds_in_the_current_scope() {
    let env = Environment::root();

    render_in(&env, "var total = 0");
    absent_in(&env, "for k = 1 to 5 then var total = total + k");
    assert_eq!(render_in(&env, "total"), "10");
    // The loop variable stays bound to the last iterated value.
    assert_eq!(render_in(&env, "k"), "4");
}

#[test]
fn for_loop_with_negative_step_counts_down() {
    let env = Environment::root();

    render_in(&env, "var total = 0");
    absent_in(&env, "for k = 5 to 1 step -1 then var total = total + k");
    assert_eq!(render_in(&env, "total"), "14");
}

#[test]
fn for_loop_bounds_are_strict() {
    let env = Environment::root();

    render_in(&env, "var runs = 0");
    absent_in(&env, "for k = 1 to 1 then var runs = runs + 1");
    assert_eq!(render_in(&env, "runs"), "0");
}

#[test]
fn while_loop_runs_until_the_condition_breaks() {
    let env = Environment::root();

    render_in(&env, "var i = 0");
    absent_in(&env, "while i < 3 then var i = i + 1");
    assert_eq!(render_in(&env, "i"), "3");

    absent_in(&env, "while 0 then 1");
}

#[test]
fn loop_headers_require_numbers() {
    assert_eq!(diagnostic(r#"for i = "a" to 3 then i"#),
               "Runtime Error: Expected a number");
}

#[test]
fn embedded_valueless_expressions_fail() {
    assert_eq!(diagnostic("(while 0 then 0) + 1"),
               "Runtime Error: Expression produced no value");
    assert_eq!(diagnostic("[if 0 then 1]"),
               "Runtime Error: Expression produced no value");
}

#[test]
fn function_definition_and_call() {
    let env = Environment::root();

    assert_eq!(render_in(&env, "fun sq(x) -> x * x"), "<function sq>");
    assert_eq!(render_in(&env, "sq(6)"), "36");
    assert_eq!(render_in(&env, "sq(sq(2))"), "16");
}

#[test]
fn anonymous_functions_bind_through_var() {
    let env = Environment::root();

    assert_eq!(render_in(&env, "var dbl = fun (n) -> n * 2"),
               "<function <anonymous>>");
    assert_eq!(render_in(&env, "dbl(4)"), "8");
}

#[test]
fn functions_are_first_class() {
    let env = Environment::root();

    render_in(&env, "fun sq(x) -> x * x");
    render_in(&env, "fun apply(f, x) -> f(x)");
    assert_eq!(render_in(&env, "apply(sq, 6)"), "36");
}

#[test]
fn arity_mismatch_diagnostics() {
    let env = Environment::root();
    render_in(&env, "fun add(a, b) -> a + b");

    assert_eq!(diagnostic_in(&env, "add(1)"),
               "Runtime Error: 1 too few args passed into 'add'");
    assert_eq!(diagnostic_in(&env, "add(1, 2, 3)"),
               "Runtime Error: 1 too many args passed into 'add'");
}

#[test]
fn calling_a_non_function_fails() {
    assert_eq!(diagnostic("3(1)"), "Runtime Error: Illegal operation '()'");
    assert_eq!(diagnostic(r#""f"()"#), "Runtime Error: Illegal operation '()'");
}

#[test]
fn operators_on_functions_fail() {
    assert_eq!(diagnostic("(fun (x) -> x) + 1"),
               "Runtime Error: Illegal operation '+'");
    assert_eq!(diagnostic("(fun (x) -> x) == (fun (x) -> x)"),
               "Runtime Error: Illegal operation '=='");
}

#[test]
fn call_scope_is_parented_on_the_caller() {
    let env = Environment::root();

    render_in(&env, "fun get_y() -> y");
    assert_eq!(diagnostic_in(&env, "get_y()"),
               "Runtime Error: 'y' is not defined");

    render_in(&env, "var y = 7");
    assert_eq!(render_in(&env, "get_y()"), "7");
}

#[test]
fn free_names_resolve_through_the_call_site() {
    let env = Environment::root();

    render_in(&env, "fun inner() -> z");
    render_in(&env, "fun outer(z) -> inner()");

    // `inner` has no `z` of its own; it sees the caller's parameter binding.
    assert_eq!(render_in(&env, "outer(9)"), "9");
}

#[test]
fn parameters_shadow_caller_bindings_without_leaking() {
    let env = Environment::root();

    render_in(&env, "var x = 1");
    render_in(&env, "fun shadow(x) -> x * 10");
    assert_eq!(render_in(&env, "shadow(5)"), "50");
    assert_eq!(render_in(&env, "x"), "1");
}

#[test]
fn division_by_zero() {
    assert_eq!(diagnostic("1 / 0"), "Runtime Error: Division by 0");
    assert_eq!(diagnostic("1 / (2 - 2)"), "Runtime Error: Division by 0");
}

#[test]
fn lexical_diagnostics() {
    assert_eq!(diagnostic("2 @ 3"), "Illegal Character: '@'");
    assert_eq!(diagnostic("$"), "Illegal Character: '$'");
    assert_eq!(diagnostic("!1"), "Expected Character: '=' (after '!')");
    assert_eq!(diagnostic("1.2.3"), "Illegal Character: '.'");
    assert_eq!(diagnostic(r#""abc"#), "Illegal Character: '\"'");
}

#[test]
fn syntax_diagnostics() {
    assert_eq!(diagnostic("(1 + 2"), "Invalid Syntax: Expected ')'");
    assert_eq!(diagnostic("[1, 2"), "Invalid Syntax: Expected ']'");
    assert_eq!(diagnostic("if 1 10"), "Invalid Syntax: Expected 'then'");
    assert_eq!(diagnostic("while 1 1"), "Invalid Syntax: Expected 'then'");
    assert_eq!(diagnostic("for i = 1 5"), "Invalid Syntax: Expected 'to'");
    assert_eq!(diagnostic("fun f(x) x"), "Invalid Syntax: Expected '->'");
    assert_eq!(diagnostic("fun f x -> x"), "Invalid Syntax: Expected '('");
    assert_eq!(diagnostic("var x 5"), "Invalid Syntax: Expected '='");
    assert_eq!(diagnostic("var = 5"), "Invalid Syntax: Expected identifier");
    assert_eq!(diagnostic("fun f(1) -> 1"), "Invalid Syntax: Expected identifier");
    assert_eq!(diagnostic("var if = 1"), "Invalid Syntax: Expected identifier");
}

#[test]
fn atom_diagnostic_enumerates_starters() {
    let expected = "Invalid Syntax: Expected int, float, string, identifier, \
                    '+', '-', '(', '[', 'if', 'for', 'while' or 'fun'";

    assert_eq!(diagnostic(""), expected);
    assert_eq!(diagnostic("*"), expected);
    assert_eq!(diagnostic("1 + then"), expected);
}

#[test]
fn trailing_tokens_are_rejected() {
    let expected = "Invalid Syntax: Expected '+', '-', '*', '/', '%', '^', \
                    '==', '!=', '<', '<=', '>', '>=', 'and' or 'or'";

    assert_eq!(diagnostic("1 2"), expected);
    // Call suffixes do not chain; the second suffix is a trailing token.
    assert_eq!(diagnostic("f()()"), expected);
}

#[test]
fn numeric_lexeme_reparse_failure_is_a_runtime_error() {
    let node = AstNode::Number { literal: "bogus".to_string() };
    let err = Interpreter::new().visit(&node, &Environment::root()).unwrap_err();

    assert_eq!(err.to_string(), "Runtime Error: 'bogus' is not a valid number");
}
