use crate::ops::Operator;
use crate::parser::{ParseError, ShuntingParser};
use crate::tokenizer::Token;

#[test]
fn test_precedence() {
    let rpn = ShuntingParser::parse_str("3 + 4 * 2").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::Number(2.0),
        Token::Op(Operator::Times),
        Token::Op(Operator::Plus),
    ];
    assert_eq!(rpn.tokens().len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.tokens()[i], *token);
    }
    assert_eq!(rpn.to_string(), "3 4 2 * +");
}

#[test]
fn test_right_associativity() {
    let rpn = ShuntingParser::parse_str("2 ^ 3 ^ 2").unwrap();
    let expect = [
        Token::Number(2.0),
        Token::Number(3.0),
        Token::Number(2.0),
        Token::Op(Operator::Power),
        Token::Op(Operator::Power),
    ];
    assert_eq!(rpn.tokens().len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.tokens()[i], *token);
    }
    assert_eq!(rpn.to_string(), "2 3 2 ^ ^");
}

#[test]
fn test_left_associativity() {
    let rpn = ShuntingParser::parse_str("1 - 2 - 3").unwrap();
    assert_eq!(rpn.to_string(), "1 2 - 3 -");
}

#[test]
fn test_parens_override_precedence() {
    let rpn = ShuntingParser::parse_str("(1 + 2) * 3").unwrap();
    let expect = [
        Token::Number(1.0),
        Token::Number(2.0),
        Token::Op(Operator::Plus),
        Token::Number(3.0),
        Token::Op(Operator::Times),
    ];
    assert_eq!(rpn.tokens().len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.tokens()[i], *token);
    }
    assert_eq!(rpn.to_string(), "1 2 + 3 *");
}

#[test]
fn test_worked_example() {
    let rpn = ShuntingParser::parse_str("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3").unwrap();
    let expect = [
        Token::Number(3.0),
        Token::Number(4.0),
        Token::Number(2.0),
        Token::Op(Operator::Times),
        Token::Number(1.0),
        Token::Number(5.0),
        Token::Op(Operator::Minus),
        Token::Number(2.0),
        Token::Number(3.0),
        Token::Op(Operator::Power),
        Token::Op(Operator::Power),
        Token::Op(Operator::Divide),
        Token::Op(Operator::Plus),
    ];
    assert_eq!(rpn.tokens().len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.tokens()[i], *token);
    }
    assert_eq!(rpn.to_string(), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
}

#[test]
fn test_pasted_input_matches_spaced() {
    let spaced = ShuntingParser::parse_str("3 + 4 * 2").unwrap();
    let pasted = ShuntingParser::parse_str("3+4*2").unwrap();
    assert_eq!(spaced, pasted);
}

#[test]
fn test_input_order_subsequences() {
    let rpn = ShuntingParser::parse_str("3 + 4 * 2 / ( 1 - 5 )").unwrap();
    assert_eq!(rpn.numbers(), [3.0, 4.0, 2.0, 1.0, 5.0]);
    assert_eq!(
        rpn.operators(),
        [
            Operator::Plus,
            Operator::Times,
            Operator::Divide,
            Operator::Minus,
        ]
    );
}

#[test]
fn test_empty_input() {
    let rpn = ShuntingParser::parse_str("").unwrap();
    assert!(rpn.tokens().is_empty());
    assert_eq!(rpn.to_string(), "");

    let rpn = ShuntingParser::parse_str("   \t ").unwrap();
    assert!(rpn.tokens().is_empty());
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(1 + 2");
    assert_eq!(rpn, Err(ParseError::MissingCParen));

    let rpn = ShuntingParser::parse_str("1 + 2)");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str("1 ++ 2");
    assert_eq!(rpn, Err(ParseError::UnknownToken("++".to_string())));
}
