use crate::display::{format_plain, format_result};
use crate::error::CalcError;
use crate::input::{parse_operand, NumberInput};
use crate::normal::evaluator;
use crate::types::{Bracket, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// `number operator` at the very end of the text before the current token
    static ref PERCENT_BASE: Regex = Regex::new(r"(\d+\.?\d*)\s*[+\-*/]\s*$").unwrap();
}

/// Arithmetic expression being typed in normal mode.
///
/// `full_expression` holds the whole expression with ASCII operators.
/// `current_input` is the number being typed and, when non-empty, is always
/// a suffix of `full_expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer {
    full_expression: String,
    current_input: String,
    open_brackets: u32,
    reset_on_next_digit: bool,
    precision: usize,
}

impl Default for ExpressionBuffer {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ExpressionBuffer {
    /// `precision` is the number of decimals kept in non-integral results
    pub fn new(precision: usize) -> Self {
        Self {
            full_expression: String::new(),
            current_input: String::new(),
            open_brackets: 0,
            reset_on_next_digit: false,
            precision,
        }
    }

    pub fn full_expression(&self) -> &str {
        &self.full_expression
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn open_brackets(&self) -> u32 {
        self.open_brackets
    }

    /// True right after a result was computed
    pub fn holds_result(&self) -> bool {
        self.reset_on_next_digit
    }

    fn last_char(&self) -> Option<char> {
        self.full_expression.chars().last()
    }

    fn ends_with_operator(&self) -> bool {
        self.last_char().is_some_and(Operator::is_ascii_operator)
    }

    pub fn append_digit(&mut self, ch: char) {
        if !NumberInput::is_number_char(ch) {
            debug!(%ch, "ignoring non-numeric digit input");
            return;
        }

        if self.reset_on_next_digit {
            self.current_input.clear();
            self.full_expression.clear();
            self.reset_on_next_digit = false;
        }

        if ch == '.' && self.current_input.contains('.') {
            return;
        }

        if self.current_input == "0" && ch != '.' {
            self.current_input.clear();
            self.full_expression.pop();
        }

        self.current_input.push(ch);
        self.full_expression.push(ch);
    }

    pub fn append_operator(&mut self, op: Operator) {
        if self.reset_on_next_digit && !self.current_input.is_empty() {
            // a result cut down to its sign by backspace is not an operand
            if parse_operand(&self.current_input).is_err() {
                self.current_input.clear();
            }
            self.full_expression = self.current_input.clone();
            self.reset_on_next_digit = false;
        }

        if self.current_input.is_empty() && self.full_expression.is_empty() {
            return;
        }

        if self.ends_with_operator() {
            self.full_expression.pop();
            self.full_expression.push(op.ascii());
            self.current_input.clear();
        } else if !self.current_input.is_empty() {
            self.full_expression.push(op.ascii());
            self.current_input.clear();
        } else {
            // after a closing bracket
            self.full_expression.push(op.ascii());
        }
    }

    pub fn append_bracket(&mut self, bracket: Bracket) {
        match bracket {
            Bracket::Open => {
                // a result on screen becomes the left operand, so `4 ( 3`
                // reads `4*(3` instead of starting a new expression
                self.reset_on_next_digit = false;
                let after_number = !self.current_input.is_empty()
                    || self.last_char().is_some_and(|c| c.is_ascii_digit());
                if after_number {
                    self.full_expression.push(Operator::Multiply.ascii());
                }
                self.full_expression.push('(');
                self.open_brackets += 1;
                self.current_input.clear();
            }
            Bracket::Close => {
                if self.open_brackets == 0 || self.last_char() == Some('(') {
                    return;
                }
                self.reset_on_next_digit = false;
                self.full_expression.push(')');
                self.open_brackets -= 1;
                self.current_input.clear();
            }
        }
    }

    pub fn delete_last_char(&mut self) {
        if !self.current_input.is_empty() {
            self.current_input.pop();
            self.full_expression.pop();
            return;
        }

        let Some(removed) = self.full_expression.pop() else {
            return;
        };

        match removed {
            '(' => self.open_brackets = self.open_brackets.saturating_sub(1),
            ')' => self.open_brackets += 1,
            _ => {}
        }

        if NumberInput::is_number_char(removed) {
            self.current_input = self
                .full_expression
                .rsplit(|c: char| Operator::is_ascii_operator(c) || c == '(' || c == ')')
                .next()
                .unwrap_or_default()
                .to_string();
        }
    }

    /// Replace the current token by its percentage.
    ///
    /// After `base +` or `base -` the percentage is taken of `base`; after
    /// `*` or `/`, or with nothing before it, the token is divided by 100.
    pub fn calculate_percent(&mut self) {
        if self.current_input.is_empty() {
            return;
        }
        let Ok(pct) = parse_operand(&self.current_input) else {
            return;
        };

        let prefix_len = self.full_expression.len() - self.current_input.len();
        let before = &self.full_expression[..prefix_len];

        let value = match PERCENT_BASE.captures(before) {
            Some(caps) => {
                let base = caps[1].parse::<f64>().unwrap_or(0.0);
                match before.trim_end().chars().last() {
                    Some('+' | '-') => base * pct / 100.0,
                    _ => pct / 100.0,
                }
            }
            None => pct / 100.0,
        };

        let replacement = format_plain(value);
        self.full_expression.truncate(prefix_len);
        self.full_expression.push_str(&replacement);
        self.current_input = replacement;
    }

    /// Evaluate the expression, closing any open brackets.
    ///
    /// On success the result replaces the whole expression and the next
    /// digit starts a new one. On failure nothing changes.
    pub fn evaluate(&mut self) -> Result<(), CalcError> {
        if self.full_expression.is_empty() {
            return Ok(());
        }

        let mut expr = self.full_expression.clone();
        for _ in 0..self.open_brackets {
            expr.push(')');
        }

        let value = evaluator::evaluate(&expr)?;
        let result = format_result(value, self.precision);
        debug!(expression = %expr, %result, "evaluated");

        self.full_expression = result.clone();
        self.current_input = result;
        self.open_brackets = 0;
        self.reset_on_next_digit = true;
        Ok(())
    }

    /// Drop the number being typed, keeping the rest of the expression
    pub fn clear_entry(&mut self) {
        let prefix_len = self.full_expression.len() - self.current_input.len();
        self.full_expression.truncate(prefix_len);
        self.current_input.clear();
        self.reset_on_next_digit = false;
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.precision);
    }
}
