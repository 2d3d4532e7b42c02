use crate::error::CalcError;
use crate::types::{Bracket, Operator};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters a finished arithmetic expression may contain
    static ref ALLOWED_CHARS: Regex = Regex::new(r"^[0-9+\-*/.() ]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Bracket(Bracket),
}

/// Replace display glyphs with their ASCII operators
pub fn normalize(expr: &str) -> String {
    expr.chars()
        .map(|c| match Operator::from_char(c) {
            Some(op) => op.ascii(),
            None => c,
        })
        .collect()
}

/// Split a sanitized expression into typed tokens
pub fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = start + c.len_utf8();
            while let Some(&(pos, next)) = chars.peek() {
                if next.is_ascii_digit() || next == '.' {
                    end = pos + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let literal = &expr[start..end];
            let value = literal.parse::<f64>().map_err(|_| {
                CalcError::InvalidExpression(format!("Invalid number '{}'", literal))
            })?;
            tokens.push(Token::Number(value));
        } else if let Some(op) = Operator::from_char(c) {
            tokens.push(Token::Operator(op));
        } else if let Some(bracket) = Bracket::from_char(c) {
            tokens.push(Token::Bracket(bracket));
        } else {
            return Err(CalcError::InvalidExpression(format!(
                "Invalid character '{}' at position {}",
                c, start
            )));
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser evaluating while it parses
///
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := ('+' | '-') factor | number | '(' expr ')'
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(Token::Operator(op)) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Operator::Add => value + rhs,
                _ => value - rhs,
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(Token::Operator(op)) = self.peek() {
            if op.is_additive() {
                break;
            }
            self.pos += 1;
            let rhs = self.factor()?;
            value = match op {
                Operator::Multiply => value * rhs,
                _ => value / rhs,
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Operator(Operator::Add)) => self.factor(),
            Some(Token::Operator(Operator::Subtract)) => Ok(-self.factor()?),
            Some(Token::Bracket(Bracket::Open)) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::Bracket(Bracket::Close)) => Ok(value),
                    _ => Err(CalcError::InvalidExpression(
                        "Missing closing bracket".to_string(),
                    )),
                }
            }
            Some(token) => Err(CalcError::InvalidExpression(format!(
                "Unexpected token {:?} at position {}",
                token,
                self.pos - 1
            ))),
            None => Err(CalcError::InvalidExpression(
                "Unexpected end of expression".to_string(),
            )),
        }
    }
}

/// Evaluate an arithmetic expression with standard precedence.
///
/// Display glyphs are accepted. Anything outside digits, `.`, spaces,
/// `+-*/` and brackets is rejected before parsing. A result that is not
/// finite is a computation error.
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let normalized = normalize(expr);
    if !ALLOWED_CHARS.is_match(&normalized) {
        return Err(CalcError::InvalidExpression(normalized));
    }

    let tokens = tokenize(&normalized)?;
    let mut parser = Parser::new(&tokens);
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(CalcError::InvalidExpression(format!(
            "Unexpected token {:?} at position {}",
            token, parser.pos
        )));
    }

    if !value.is_finite() {
        return Err(CalcError::Computation);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("10-4-3").unwrap(), 3.0);
        assert_eq!(evaluate("100/10/5").unwrap(), 2.0);
        assert_eq!(evaluate("2*3+4*5").unwrap(), 26.0);
    }

    #[test]
    fn test_brackets() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("2*(3+(4-1))").unwrap(), 12.0);
        assert_eq!(evaluate(" ( 1 + 1 ) ").unwrap(), 2.0);
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-5+2").unwrap(), -3.0);
        assert_eq!(evaluate("(-2)*3").unwrap(), -6.0);
        assert_eq!(evaluate("4*-2").unwrap(), -8.0);
        assert_eq!(evaluate("+7").unwrap(), 7.0);
    }

    #[test]
    fn test_glyphs_are_normalized() {
        assert_eq!(evaluate("6×7").unwrap(), 42.0);
        assert_eq!(evaluate("9÷3−1").unwrap(), 2.0);
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(evaluate(".5+5.").unwrap(), 5.5);
    }

    #[test]
    fn test_division_by_zero_is_computation_error() {
        assert_eq!(evaluate("5/0"), Err(CalcError::Computation));
        assert_eq!(evaluate("0/0"), Err(CalcError::Computation));
    }

    #[test]
    fn test_overflow_is_computation_error() {
        let huge = format!("1{}*1{}", "0".repeat(200), "0".repeat(200));
        assert_eq!(evaluate(&huge), Err(CalcError::Computation));
    }

    #[test]
    fn test_invalid_expressions() {
        assert!(matches!(
            evaluate("2+abc"),
            Err(CalcError::InvalidExpression(_))
        ));
        assert!(matches!(evaluate("2^3"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate("2+"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate("(2"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate("2)"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate("1.2.3"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate("()"), Err(CalcError::InvalidExpression(_))));
        assert!(matches!(evaluate(""), Err(CalcError::InvalidExpression(_))));
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("12.5*(3)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Operator(Operator::Multiply),
                Token::Bracket(Bracket::Open),
                Token::Number(3.0),
                Token::Bracket(Bracket::Close),
            ]
        );
    }
}
