// Normal mode: arithmetic expressions typed key by key

pub mod buffer;
pub mod evaluator;

#[cfg(test)]
mod tests;

pub use buffer::ExpressionBuffer;
pub use evaluator::evaluate;

use crate::calculator::CalculatorEngine;
use crate::config::DisplayConfig;
use crate::display::{DisplayFormatter, DisplayFrame};
use crate::error::CalcError;
use crate::types::{Bracket, Mode, Operator};

/// Normal-mode engine: an expression buffer plus its display rules
#[derive(Debug, Clone)]
pub struct NormalEngine {
    buffer: ExpressionBuffer,
    formatter: DisplayFormatter,
}

impl NormalEngine {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            buffer: ExpressionBuffer::new(config.result_precision),
            formatter: DisplayFormatter::from_config(config),
        }
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn append_bracket(&mut self, bracket: Bracket) {
        self.buffer.append_bracket(bracket);
    }

    pub fn calculate_percent(&mut self) {
        self.buffer.calculate_percent();
    }
}

impl CalculatorEngine for NormalEngine {
    fn mode(&self) -> Mode {
        Mode::Normal
    }

    fn append_digit(&mut self, ch: char) -> Result<(), CalcError> {
        self.buffer.append_digit(ch);
        Ok(())
    }

    fn append_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        self.buffer.append_operator(op);
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), CalcError> {
        self.buffer.evaluate()
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn clear_entry(&mut self) {
        self.buffer.clear_entry();
    }

    fn backspace(&mut self) {
        self.buffer.delete_last_char();
    }

    fn frame(&self) -> DisplayFrame {
        let full = self.buffer.full_expression();
        let current = self.buffer.current_input();

        let result = if !current.is_empty() {
            self.formatter.number(current)
        } else if !full.is_empty() {
            self.formatter.expression(full)
        } else {
            "0".to_string()
        };

        DisplayFrame::line(self.formatter.expression(full), result)
    }
}
