use crate::parser::RPNExpr;
use crate::tokenizer::{Token, Tokenizer};
use std::fmt;

/// Errors that can arise while evaluating an RPN expression.
#[derive(Debug, PartialEq)]
pub enum EvalErr {
    /// An operator had fewer than two operands, or the input was empty.
    MissingOperands,
    /// More than one value was left on the stack once input ran out.
    LeftoverOperands,
    /// A token that is neither a number nor a known operator.
    BadToken(String),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalErr::MissingOperands => write!(f, "not enough operands"),
            EvalErr::LeftoverOperands => write!(f, "leftover operands"),
            EvalErr::BadToken(lexeme) => write!(f, "bad token: {}", lexeme),
        }
    }
}

impl std::error::Error for EvalErr {}

/// Evaluate a parsed RPN expression.
pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    eval_tokens(rpn.tokens().iter().cloned())
}

/// Evaluate the whitespace-joined string form of an RPN expression.
pub fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    eval_tokens(Tokenizer::new(expr))
}

fn eval_tokens(tokens: impl Iterator<Item = Token>) -> Result<f64, EvalErr> {
    let mut stack = Vec::new();

    for token in tokens {
        match token {
            Token::Number(num) => stack.push(num),
            Token::Op(op) => {
                // first pop is the right operand; the order matters for - and /
                let right = stack.pop().ok_or(EvalErr::MissingOperands)?;
                let left = stack.pop().ok_or(EvalErr::MissingOperands)?;
                stack.push(op.apply(left, right));
            }
            Token::OParen => return Err(EvalErr::BadToken("(".to_string())),
            Token::CParen => return Err(EvalErr::BadToken(")".to_string())),
            Token::Unknown(lexeme) => return Err(EvalErr::BadToken(lexeme)),
        }
    }
    let result = stack.pop().ok_or(EvalErr::MissingOperands)?;
    if !stack.is_empty() {
        return Err(EvalErr::LeftoverOperands);
    }
    Ok(result)
}
