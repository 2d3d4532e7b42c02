use crate::error::CalcError;

/// Number being typed, kept as text until it is committed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberInput {
    text: String,
}

impl NumberInput {
    /// Whether `ch` can appear in a typed number at all
    pub fn is_number_char(ch: char) -> bool {
        ch.is_ascii_digit() || ch == '.'
    }

    /// Append a digit or decimal point.
    ///
    /// A second point is ignored and a lone leading zero is replaced by the
    /// next digit. Returns whether the text changed.
    pub fn push(&mut self, ch: char) -> bool {
        if !Self::is_number_char(ch) {
            return false;
        }
        if ch == '.' && self.text.contains('.') {
            return false;
        }
        if self.text == "0" && ch != '.' {
            self.text.clear();
        }
        self.text.push(ch);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parsed value; a missing or unparsable number is a missing operand
    pub fn value(&self) -> Result<f64, CalcError> {
        parse_operand(&self.text)
    }
}

pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(CalcError::missing_number)
}
