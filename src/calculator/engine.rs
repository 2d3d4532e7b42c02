use crate::display::DisplayFrame;
use crate::error::CalcError;
use crate::types::{Mode, Operator};

/// Input handling shared by every calculator mode.
///
/// Failed operations leave the engine exactly as it was.
pub trait CalculatorEngine {
    fn mode(&self) -> Mode;

    /// Digit or decimal point
    fn append_digit(&mut self, ch: char) -> Result<(), CalcError>;

    fn append_operator(&mut self, op: Operator) -> Result<(), CalcError>;

    /// `=` / Enter
    fn evaluate(&mut self) -> Result<(), CalcError>;

    /// Forget everything
    fn clear(&mut self);

    /// Forget the number being typed
    fn clear_entry(&mut self);

    fn backspace(&mut self);

    /// Current display content
    fn frame(&self) -> DisplayFrame;
}
