use crate::types::{Bracket, Mode, Operator};
use crate::units::{SpeedUnit, TimeUnit};
use serde::{Deserialize, Serialize};

/// A discrete user action delivered to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "intent", content = "arg", rename_all = "snake_case")]
pub enum Intent {
    Digit(char),
    Operator(Operator),
    Bracket(Bracket),
    Percent,
    Evaluate,
    ClearAll,
    ClearEntry,
    Backspace,
    SelectTimeUnit(TimeUnit),
    ShowNow,
    CalculateTime,
    ConvertTime,
    SelectSpeedUnit(SpeedUnit),
    ShowAllSpeeds,
    SwitchMode(Mode),
}

impl Intent {
    /// Map a keyboard key name to an intent the way the widget does.
    ///
    /// Normal mode understands the full arithmetic keyboard. Time and speed
    /// modes take digits, `+`/`-`, Enter, Escape, and treat Backspace as
    /// clear entry.
    pub fn from_key(key: &str, mode: Mode) -> Option<Intent> {
        match key {
            "Enter" | "=" => return Some(Intent::Evaluate),
            "Escape" => return Some(Intent::ClearAll),
            "Backspace" if mode == Mode::Normal => return Some(Intent::Backspace),
            "Backspace" => return Some(Intent::ClearEntry),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if ch.is_ascii_digit() || ch == '.' {
            return Some(Intent::Digit(ch));
        }

        match mode {
            Mode::Normal => match ch {
                '%' => Some(Intent::Percent),
                '(' | ')' => Bracket::from_char(ch).map(Intent::Bracket),
                '+' | '-' | '*' | '/' => Operator::from_char(ch).map(Intent::Operator),
                _ => None,
            },
            Mode::Time | Mode::Speed => match ch {
                '+' | '-' => Operator::from_char(ch).map(Intent::Operator),
                _ => None,
            },
        }
    }

    /// Parse one word of a scripted key sequence.
    ///
    /// Accepts named actions (`now`, `convert`, `all`, `ce`, `ac`, `back`,
    /// `mode:<name>`), unit names (`hour`, `km/h`, ...) and runs of
    /// keyboard keys such as `12+3*(4`.
    pub fn parse_word(word: &str, mode: Mode) -> Result<Vec<Intent>, String> {
        let named = match word {
            "now" => Some(Intent::ShowNow),
            "calc" => Some(Intent::CalculateTime),
            "convert" => Some(Intent::ConvertTime),
            "all" => Some(Intent::ShowAllSpeeds),
            "ce" => Some(Intent::ClearEntry),
            "ac" => Some(Intent::ClearAll),
            "back" => Some(Intent::Backspace),
            _ => None,
        };
        if let Some(intent) = named {
            return Ok(vec![intent]);
        }

        if let Some(name) = word.strip_prefix("mode:") {
            return name.parse::<Mode>().map(|mode| vec![Intent::SwitchMode(mode)]);
        }
        if let Ok(unit) = word.parse::<TimeUnit>() {
            return Ok(vec![Intent::SelectTimeUnit(unit)]);
        }
        if let Ok(unit) = word.parse::<SpeedUnit>() {
            return Ok(vec![Intent::SelectSpeedUnit(unit)]);
        }
        if let Some(intent) = Intent::from_key(word, mode) {
            return Ok(vec![intent]);
        }

        word.chars()
            .map(|ch| {
                Intent::from_key(&ch.to_string(), mode)
                    .ok_or_else(|| format!("Unknown key '{}' in '{}'", ch, word))
            })
            .collect()
    }
}
