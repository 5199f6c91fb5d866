//! Precedence, associativity and postfix chains of the expression grammar.

mod common;

use common::{expr, parse_source, scan, single};
use loxparse::{Diagnostics, Expr, Literal, Parser, Stmt, TokenKind};
use rstest::rstest;

#[rstest]
#[case("1 - 2 - 3", "(- (- 1 2) 3)")]
#[case("8 / 4 / 2", "(/ (/ 8 4) 2)")]
#[case("-2 * 3", "(* (- 2) 3)")]
#[case("1 + 2 * 3", "(+ 1 (* 2 3))")]
#[case("(1 + 2) * 3", "(* (group (+ 1 2)) 3)")]
#[case("a = b = c", "(= a (= b c))")]
#[case("a or b and c", "(or a (and b c))")]
#[case("a or b or c", "(or (or a b) c)")]
#[case("a and b and c", "(and (and a b) c)")]
#[case("a == b != c", "(!= (== a b) c)")]
#[case("1 < 2 == true", "(== (< 1 2) true)")]
#[case("1 + 2 >= 3 - 4", "(>= (+ 1 2) (- 3 4))")]
#[case("!!x", "(! (! x))")]
#[case("- -x", "(- (- x))")]
#[case("!a == b", "(== (! a) b)")]
#[case("a = 1 + 2", "(= a (+ 1 2))")]
#[case("a = b or c", "(= a (or b c))")]
fn precedence_and_associativity(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(expr(source), expected);
}

#[rstest]
#[case("f()", "(call f)")]
#[case("f(1, 2)", "(call f 1 2)")]
#[case("a(1)(2).b", "(. (call (call a 1) 2) b)")]
#[case("a.b.c", "(. (. a b) c)")]
#[case("a.b(1).c()", "(call (. (call (. a b) 1) c))")]
#[case("this.x", "(. this x)")]
#[case("-a.b", "(- (. a b))")]
#[case("a.b.c = 1", "(= (. (. a b) c) 1)")]
#[case("f(a = 1)", "(call f (= a 1))")]
fn postfix_chains(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(expr(source), expected);
}

#[rstest]
#[case("true", Literal::Bool(true))]
#[case("false", Literal::Bool(false))]
#[case("nil", Literal::Nil)]
#[case("12.5", Literal::Number(12.5))]
#[case("\"hello\"", Literal::String("hello".to_string()))]
fn primary_literals(#[case] source: &str, #[case] expected: Literal) {
    let tokens = scan(source);
    let mut diagnostics = Diagnostics::new();
    let parsed = Parser::new(&tokens, &mut diagnostics).parse_expression();

    assert_eq!(parsed, Some(Expr::Literal(expected)));
}

#[test]
fn assignment_is_right_associative() {
    let Stmt::Expression(outer) = single("a = b = c;") else {
        panic!("expected expression statement");
    };

    let Expr::Assign { name, value } = outer else {
        panic!("expected assignment");
    };
    assert_eq!(name.lexeme, "a");

    let Expr::Assign { name, value } = *value else {
        panic!("expected nested assignment");
    };
    assert_eq!(name.lexeme, "b");
    assert!(matches!(*value, Expr::Variable(ref c) if c.lexeme == "c"));
}

#[test]
fn property_assignment_becomes_set() {
    let Stmt::Expression(Expr::Set { object, name, value }) = single("point.x = 3;") else {
        panic!("expected Set");
    };

    assert!(matches!(*object, Expr::Variable(ref p) if p.lexeme == "point"));
    assert_eq!(name.lexeme, "x");
    assert_eq!(*value, Expr::Literal(Literal::Number(3.0)));
}

#[test]
fn call_chain_structure() {
    let Stmt::Expression(Expr::Get { object, name }) = single("a(1)(2).b;") else {
        panic!("expected Get at the top");
    };
    assert_eq!(name.lexeme, "b");

    let Expr::Call { callee, arguments, paren } = *object else {
        panic!("expected outer call");
    };
    assert_eq!(paren.kind, TokenKind::RightParen);
    assert_eq!(arguments, vec![Expr::Literal(Literal::Number(2.0))]);

    let Expr::Call { callee, arguments, .. } = *callee else {
        panic!("expected inner call");
    };
    assert_eq!(arguments, vec![Expr::Literal(Literal::Number(1.0))]);
    assert!(matches!(*callee, Expr::Variable(ref a) if a.lexeme == "a"));
}

#[test]
fn operators_keep_their_tokens() {
    let Stmt::Expression(Expr::Binary { operator, .. }) = single("1 +\n 2;") else {
        panic!("expected binary");
    };

    assert_eq!(operator.kind, TokenKind::Plus);
    assert_eq!(operator.lexeme, "+");
    assert_eq!(operator.line, 1);
}

#[test]
fn logical_operators_build_logical_nodes() {
    let Stmt::Expression(expr) = single("a and b;") else {
        panic!("expected expression statement");
    };

    assert!(matches!(expr, Expr::Logical { ref operator, .. } if operator.kind == TokenKind::And));
}

#[test]
fn trailing_tokens_after_expression_are_reported() {
    let tokens = scan("1 + 2 3");
    let mut diagnostics = Diagnostics::new();
    let parsed = Parser::new(&tokens, &mut diagnostics).parse_expression();

    assert!(parsed.is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.iter().next().unwrap().token.lexeme, "3");
}

#[test]
fn missing_operand_is_unexpected_expression() {
    let (statements, diagnostics) = parse_source("print 1 + ;");

    assert_eq!(statements, vec![None]);
    let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(messages, vec!["[line 1] Error at ';': Expect expression."]);
}
