use numera::{
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
        printer::render,
    },
    parse,
};

fn assert_result(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", 3);
    assert_result("8 - 5", 3);
    assert_result("7 * 9", 63);
    assert_result("10 / 2", 5);
    assert_result("42", 42);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("2 + 3 * 4", 14);
    assert_result("2 * 3 + 4", 10);
    assert_result("2 - 6 / 3", 0);
}

#[test]
fn same_level_operators_fold_left() {
    assert_result("10 - 3 - 2", 5);
    assert_result("100 / 5 / 2", 10);
    assert_result("1 - 2 + 3", 2);
}

#[test]
fn parentheses_override_precedence() {
    assert_result("(2 + 3) * 4", 20);
    assert_result("2 * (3 + 4)", 14);
    assert_result("((1 + 1)) * ((2 + 2))", 8);
}

#[test]
fn division_truncates_toward_zero() {
    assert_result("7 / 2", 3);
    assert_result("(0 - 7) / 2", -3);
    assert_result("1 / 3", 0);
}

#[test]
fn division_by_zero_fails_only_at_evaluation() {
    let expr = parse("1 / 0").expect("the tree itself is well-formed");
    assert!(matches!(evaluate(&expr), Err(RuntimeError::DivisionByZero)));
    assert_failure("1 / 0");
    assert_failure("4 + 6 / (3 - 3)");
}

#[test]
fn arithmetic_overflow_is_rejected() {
    assert_result("9223372036854775807 - 1 + 1", 9_223_372_036_854_775_807);

    let expr = parse("9223372036854775807 + 1").unwrap();
    assert!(matches!(evaluate(&expr), Err(RuntimeError::Overflow)));
    assert_failure("9223372036854775807 * 2");

    // i64::MIN / -1 is the one division that overflows.
    assert_failure("(0 - 9223372036854775807 - 1) / (0 - 1)");
}

#[test]
fn oversized_literals_fail_to_parse() {
    assert!(matches!(parse("9223372036854775808"),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn malformed_input_never_yields_a_tree() {
    assert!(matches!(parse("+"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("2 + "), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("(2 + 3"), Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse(""), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("2 $ 3"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("2 * / 3"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse("2 3"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse("(1) (2)"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert_failure("1 + 2 )");
}

#[test]
fn unary_minus_is_not_part_of_the_grammar() {
    assert_failure("-5");
    assert_failure("2 * -3");
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(parse("2+3").unwrap(), parse(" 2 + 3 ").unwrap());
    assert_result("2+3", 5);
    assert_result("\t2 +\n 3 ", 5);
}

#[test]
fn tokenize_records_byte_offsets() {
    let tokens = tokenize(" 12 + 3").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number("12".to_string()), 1),
                    (Token::Plus, 4),
                    (Token::Number("3".to_string()), 6),]);
}

#[test]
fn rendered_tree_is_depth_faithful() {
    let expr = parse("2 + 3 * 4").unwrap();
    let expected = "expr: Add\n  lhs: Number: 2\n  rhs: Mul\n    lhs: Number: 3\n    rhs: Number: 4\n";
    assert_eq!(render(&expr, "expr"), expected);
}

#[test]
fn parsing_is_deterministic() {
    let first = parse("(2 + 3) * 4").unwrap();
    let second = parse("(2 + 3) * 4").unwrap();
    assert_eq!(first, second);
    assert_eq!(render(&first, "expr"), render(&second, "expr"));
}

#[test]
fn reevaluation_is_pure() {
    let expr = parse("6 * 7").unwrap();
    assert_eq!(evaluate(&expr).unwrap(), 42);
    assert_eq!(evaluate(&expr).unwrap(), 42);
}
