// Time mode: sums and differences of durations, optionally anchored at "now"

pub mod expression;

#[cfg(test)]
mod tests;

pub use expression::{full_breakdown, TimeExpression, TimeToken};

use crate::calculator::CalculatorEngine;
use crate::display::{DisplayFormatter, DisplayFrame};
use crate::error::CalcError;
use crate::input::NumberInput;
use crate::types::{Mode, Operator};
use crate::units::TimeUnit;
use expression::{describe_quantity, format_clock};
use tracing::debug;

const NOW_LABEL: &str = "Сейчас";

/// Time-mode engine
#[derive(Debug, Clone, Default)]
pub struct TimeEngine {
    expression: TimeExpression,
    input: NumberInput,
    unit: Option<TimeUnit>,
    /// Output of the last calculation, shown until the next input
    pinned: Option<DisplayFrame>,
    formatter: DisplayFormatter,
}

impl TimeEngine {
    pub fn new(formatter: DisplayFormatter) -> Self {
        Self {
            formatter,
            ..Self::default()
        }
    }

    pub fn expression(&self) -> &TimeExpression {
        &self.expression
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn unit(&self) -> Option<TimeUnit> {
        self.unit
    }

    /// Attach a unit to the number being typed
    pub fn select_unit(&mut self, unit: TimeUnit) -> Result<(), CalcError> {
        if self.input.is_empty() {
            return Err(CalcError::missing_number());
        }
        self.unit = Some(unit);
        self.pinned = None;
        Ok(())
    }

    /// Replace the expression with the current time of day
    pub fn show_now_at(&mut self, seconds_since_midnight: u32) {
        self.expression = TimeExpression::now(seconds_since_midnight);
        self.input.clear();
        self.unit = None;
        self.pinned = Some(DisplayFrame::line(
            format!("{}:", NOW_LABEL),
            format_clock(seconds_since_midnight),
        ));
    }

    /// Pending number with its unit, if both are present
    fn pending_quantity(&self) -> Result<Option<TimeToken>, CalcError> {
        match self.unit {
            Some(unit) if !self.input.is_empty() => {
                Ok(Some(TimeToken::quantity(self.input.value()?, unit)))
            }
            _ => Ok(None),
        }
    }

    fn reset_pending(&mut self) {
        self.input.clear();
        self.unit = None;
    }

    /// Reduce the expression and show its formatted total
    pub fn calculate_time(&mut self) -> Result<(), CalcError> {
        let mut expression = self.expression.clone();
        if let Some(quantity) = self.pending_quantity()? {
            expression.push(quantity);
        }
        if expression.is_empty() {
            return Ok(());
        }

        let total = expression.reduce().ok_or(CalcError::Computation)?;
        let result = expression.format(total);
        debug!(total, %result, "time expression reduced");

        self.expression.clear();
        self.reset_pending();
        self.pinned = Some(DisplayFrame::line("", result));
        Ok(())
    }

    /// Show the full years-to-seconds breakdown of the expression, or of the
    /// pending quantity when there is no expression
    pub fn convert_time(&mut self) -> Result<(), CalcError> {
        let total = if !self.expression.is_empty() {
            self.expression.reduce()
        } else if let Some(quantity) = self.pending_quantity()? {
            quantity.seconds()
        } else {
            return Err(CalcError::MissingOperand(
                "Введите время для конвертации!",
            ));
        };
        let total = total.ok_or(CalcError::Computation)?;

        self.expression.clear();
        self.reset_pending();
        self.pinned = Some(DisplayFrame::line(
            "Полное разложение времени:",
            full_breakdown(total),
        ));
        Ok(())
    }

    fn live_frame(&self) -> DisplayFrame {
        let mut expression = String::new();
        for token in self.expression.tokens() {
            match *token {
                TimeToken::Operator(op) => {
                    expression.push(' ');
                    expression.push(self.formatter.operator(op));
                    expression.push(' ');
                }
                TimeToken::Quantity { is_now: true, .. } => expression.push_str(NOW_LABEL),
                TimeToken::Quantity { value, unit, .. } => {
                    expression.push_str(&describe_quantity(value, unit))
                }
            }
        }

        let mut pending = self.input.as_str().to_string();
        if let Some(unit) = self.unit {
            pending.push(' ');
            pending.push_str(unit.label());
        }

        if !self.input.is_empty() {
            if !expression.is_empty() && !expression.ends_with(' ') {
                expression.push(' ');
            }
            expression.push_str(&pending);
        }

        let result = if !self.expression.is_empty() {
            match self.expression.reduce() {
                Some(total) => self.expression.format(total),
                None => CalcError::Computation.to_string(),
            }
        } else if !self.input.is_empty() {
            pending
        } else {
            "0".to_string()
        };

        DisplayFrame::line(expression, result)
    }
}

impl CalculatorEngine for TimeEngine {
    fn mode(&self) -> Mode {
        Mode::Time
    }

    fn append_digit(&mut self, ch: char) -> Result<(), CalcError> {
        if self.input.push(ch) {
            self.pinned = None;
        }
        Ok(())
    }

    fn append_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if !op.is_additive() {
            debug!(?op, "only + and - combine durations");
            return Ok(());
        }
        if self.input.is_empty() && self.expression.is_empty() {
            return Ok(());
        }

        let mut expression = self.expression.clone();
        if !self.input.is_empty() {
            let unit = self.unit.ok_or_else(CalcError::missing_time_unit)?;
            expression.push(TimeToken::quantity(self.input.value()?, unit));
        }
        expression.push(TimeToken::Operator(op));
        if expression.reduce().is_none() {
            return Err(CalcError::Computation);
        }

        self.expression = expression;
        self.reset_pending();
        self.pinned = None;
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), CalcError> {
        self.calculate_time()
    }

    fn clear(&mut self) {
        *self = Self::new(self.formatter.clone());
    }

    fn clear_entry(&mut self) {
        self.reset_pending();
        self.pinned = None;
    }

    fn backspace(&mut self) {
        self.clear_entry();
    }

    fn frame(&self) -> DisplayFrame {
        match &self.pinned {
            Some(frame) => frame.clone(),
            None => self.live_frame(),
        }
    }
}
