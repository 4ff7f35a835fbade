//! Restricted arithmetic evaluator.
//!
//! Evaluates expressions made of decimal numbers, `+ - * /`, unary signs and
//! parentheses. Evaluation is split into a tokenizer and a recursive-descent
//! parser that computes the value while it parses:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor | primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Nothing outside this grammar is ever executed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum nesting of parentheses and unary signs.
pub const MAX_DEPTH: usize = 64;

/// Reasons an expression cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationError {
    #[error("empty expression")]
    Empty,
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { position: usize, found: String },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("expression nested too deeply")]
    NestingTooDeep,
    #[error("result is not a finite number")]
    NotFinite,
}

/// A classified token with its starting character position.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Splits `input` into tokens, skipping whitespace.
fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, EvaluationError> {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        let ch = chars[i];

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let start = i;
            while i < len && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value: f64 = literal
                .parse()
                .map_err(|_| EvaluationError::InvalidNumber(literal.clone()))?;
            tokens.push((start, Token::Number(value)));
            continue;
        }

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(EvaluationError::UnexpectedToken {
                    position: i,
                    found: other.to_string(),
                });
            }
        };
        tokens.push((i, token));
        i += 1;
    }

    Ok(tokens)
}

/// Rejects token streams whose parentheses do not pair up.
fn check_balance(tokens: &[(usize, Token)]) -> Result<(), EvaluationError> {
    let mut depth: usize = 0;
    for (_, token) in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(EvaluationError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(EvaluationError::UnbalancedParentheses)
    }
}

struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [(usize, Token)]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn advance(&mut self) -> Option<&(usize, Token)> {
        let current = self.tokens.get(self.pos);
        if current.is_some() {
            self.pos += 1;
        }
        current
    }

    fn unexpected(&self) -> EvaluationError {
        match self.tokens.get(self.pos) {
            Some((position, token)) => EvaluationError::UnexpectedToken {
                position: *position,
                found: token.to_string(),
            },
            None => EvaluationError::UnexpectedEnd,
        }
    }

    fn enter(&mut self) -> Result<(), EvaluationError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvaluationError::NestingTooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvaluationError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.factor()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvaluationError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, EvaluationError> {
        match self.peek() {
            Some(Token::Plus) | Some(Token::Minus) => {
                let negate = matches!(self.peek(), Some(Token::Minus));
                self.advance();
                self.enter()?;
                let value = self.factor()?;
                self.depth -= 1;
                Ok(if negate { -value } else { value })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvaluationError> {
        match self.peek() {
            Some(Token::Number(value)) => {
                let value = *value;
                self.advance();
                Ok(value)
            }
            Some(Token::LParen) => {
                self.advance();
                self.enter()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.advance();
                        Ok(value)
                    }
                    _ => Err(self.unexpected()),
                }
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// Evaluates an arithmetic expression.
///
/// # Examples
///
/// ```
/// use deska_core::math::evaluate;
///
/// assert_eq!(evaluate("25*4").unwrap(), 100.0);
/// assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvaluationError::Empty);
    }
    check_balance(&tokens)?;

    let mut parser = Parser::new(&tokens);
    let value = parser.expr()?;
    if parser.pos < tokens.len() {
        return Err(parser.unexpected());
    }
    if !value.is_finite() {
        return Err(EvaluationError::NotFinite);
    }
    Ok(value)
}

/// Formats a result the way it is spoken back: integral values without a
/// fractional part, everything else in shortest decimal form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Evaluates `expression` and formats the result for display.
///
/// Used by front-ends that calculate directly, without intent matching.
pub fn calculate(expression: &str) -> crate::Result<String> {
    let value = evaluate(expression)?;
    Ok(format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate("25*4"), Ok(100.0));
        assert_eq!(evaluate("7+3"), Ok(10.0));
        assert_eq!(evaluate("7-10"), Ok(-3.0));
        assert_eq!(evaluate("9/4"), Ok(2.25));
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("64/4/2"), Ok(8.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("2*(3+(4-1))"), Ok(12.0));
    }

    #[test]
    fn test_unary_signs_and_decimals() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("4*-2"), Ok(-8.0));
        assert_eq!(evaluate("--1"), Ok(1.0));
        assert_eq!(evaluate(".5+2."), Ok(2.5));
        assert_eq!(evaluate(" 1.5 * 2 "), Ok(3.0));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate(""), Err(EvaluationError::Empty));
        assert_eq!(evaluate("   "), Err(EvaluationError::Empty));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(evaluate("(1+2"), Err(EvaluationError::UnbalancedParentheses));
        assert_eq!(evaluate("1+2)"), Err(EvaluationError::UnbalancedParentheses));
        assert_eq!(evaluate(")("), Err(EvaluationError::UnbalancedParentheses));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_rejects_tokens_outside_grammar() {
        assert_eq!(
            evaluate("2^3"),
            Err(EvaluationError::UnexpectedToken {
                position: 1,
                found: "^".to_string()
            })
        );
        assert!(matches!(
            evaluate("alert(1)"),
            Err(EvaluationError::UnexpectedToken { position: 0, .. })
        ));
        assert_eq!(
            evaluate("1.2.3"),
            Err(EvaluationError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_malformed_sequences() {
        assert_eq!(evaluate("5+"), Err(EvaluationError::UnexpectedEnd));
        assert_eq!(
            evaluate("5*/2"),
            Err(EvaluationError::UnexpectedToken {
                position: 2,
                found: "/".to_string()
            })
        );
        assert!(matches!(
            evaluate("()"),
            Err(EvaluationError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            evaluate("2(3)"),
            Err(EvaluationError::UnexpectedToken { position: 1, .. })
        ));
    }

    #[test]
    fn test_nesting_is_bounded() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&deep), Err(EvaluationError::NestingTooDeep));

        let shallow = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(evaluate(&shallow), Ok(1.0));
    }

    #[test]
    fn test_calculate_formats_or_reports() {
        assert_eq!(calculate("(2+3)*4").unwrap(), "20");
        assert_eq!(calculate("1/4").unwrap(), "0.25");

        let err = calculate("2^3").unwrap_err();
        assert!(err.is_evaluation());
        assert!(err.to_string().starts_with("Evaluation error: unexpected '^'"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }
}
