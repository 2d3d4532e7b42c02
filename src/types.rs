use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calculator mode; decides which engine interprets input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Time,
    Speed,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "time" => Ok(Mode::Time),
            "speed" => Ok(Mode::Speed),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Normal => "normal",
            Mode::Time => "time",
            Mode::Speed => "speed",
        };
        write!(f, "{}", name)
    }
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Accepts both the ASCII form and the display glyph
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// `+` and `-` are the only operators with meaning between durations
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }

    pub fn is_ascii_operator(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/')
    }
}

/// Opening or closing parenthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Open),
            ')' => Some(Bracket::Close),
            _ => None,
        }
    }
}
