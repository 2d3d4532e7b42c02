// Speed mode: one value converted across its unit group

pub mod converter;

pub use converter::{convert_all, Conversion};

use crate::calculator::CalculatorEngine;
use crate::config::DisplayConfig;
use crate::display::DisplayFrame;
use crate::error::CalcError;
use crate::input::{parse_operand, NumberInput};
use crate::types::{Mode, Operator};
use crate::units::SpeedUnit;
use tracing::debug;

/// Speed-mode engine
#[derive(Debug, Clone)]
pub struct SpeedEngine {
    input: NumberInput,
    unit: Option<SpeedUnit>,
    /// Number captured when the unit was chosen
    value: String,
    pinned: Option<DisplayFrame>,
    decimals: usize,
}

impl Default for SpeedEngine {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl SpeedEngine {
    pub fn new(config: &DisplayConfig) -> Self {
        Self::with_decimals(config.speed_decimals)
    }

    fn with_decimals(decimals: usize) -> Self {
        Self {
            input: NumberInput::default(),
            unit: None,
            value: String::new(),
            pinned: None,
            decimals,
        }
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn unit(&self) -> Option<SpeedUnit> {
        self.unit
    }

    fn lines(&self, value: f64, unit: SpeedUnit, include_source: bool) -> Vec<String> {
        convert_all(value, unit, include_source)
            .iter()
            .map(|conversion| conversion.describe(self.decimals))
            .collect()
    }

    /// Choose the unit of the typed number and list it in the peer units
    pub fn select_unit(&mut self, unit: SpeedUnit) -> Result<(), CalcError> {
        if self.input.is_empty() {
            return Err(CalcError::missing_number());
        }
        let value = self.input.value()?;

        self.unit = Some(unit);
        self.value = self.input.as_str().to_string();
        self.pinned = Some(DisplayFrame::lines(
            format!("{} {} =", self.value, unit.label()),
            self.lines(value, unit, false),
        ));
        Ok(())
    }

    /// List the typed number in every unit of its group, itself included
    pub fn show_all(&mut self) -> Result<(), CalcError> {
        if self.input.is_empty() {
            return Err(CalcError::MissingOperand("Введите скорость!"));
        }
        let unit = self.unit.ok_or_else(CalcError::missing_speed_unit)?;
        let value = self.input.value()?;

        self.value = self.input.as_str().to_string();
        self.pinned = Some(DisplayFrame::lines(
            "Все единицы:",
            self.lines(value, unit, true),
        ));
        Ok(())
    }

    fn live_frame(&self) -> DisplayFrame {
        match self.unit {
            _ if self.input.is_empty() => DisplayFrame::line("Введите скорость", "0"),
            None => DisplayFrame::line("Выберите единицу скорости:", self.input.as_str()),
            Some(unit) => DisplayFrame::line(
                format!("{} {} =", self.input.as_str(), unit.label()),
                "...",
            ),
        }
    }
}

impl CalculatorEngine for SpeedEngine {
    fn mode(&self) -> Mode {
        Mode::Speed
    }

    fn append_digit(&mut self, ch: char) -> Result<(), CalcError> {
        if self.input.push(ch) {
            self.pinned = None;
        }
        Ok(())
    }

    fn append_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        debug!(?op, "operators have no meaning in speed mode");
        Ok(())
    }

    /// Convert again: the typed number if there is one, else the captured value
    fn evaluate(&mut self) -> Result<(), CalcError> {
        let Some(unit) = self.unit else {
            return Ok(());
        };
        let text = if self.input.is_empty() {
            self.value.clone()
        } else {
            self.input.as_str().to_string()
        };
        if text.is_empty() {
            return Ok(());
        }
        let value = parse_operand(&text)?;

        self.pinned = Some(DisplayFrame::lines(
            format!("{} {} =", text, unit.label()),
            self.lines(value, unit, false),
        ));
        self.value = text;
        Ok(())
    }

    fn clear(&mut self) {
        *self = Self::with_decimals(self.decimals);
    }

    fn clear_entry(&mut self) {
        self.input.clear();
        self.unit = None;
        self.value.clear();
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
