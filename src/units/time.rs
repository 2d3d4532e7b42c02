use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of a time quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Sec,
    Min,
    Hour,
    Day,
    Year,
}

impl TimeUnit {
    /// All units, smallest first
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Sec,
        TimeUnit::Min,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Year,
    ];

    /// Seconds in one unit. A year is always 365 days.
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Sec => 1,
            TimeUnit::Min => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Year => 31_536_000,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Sec => "сек",
            TimeUnit::Min => "мин",
            TimeUnit::Hour => "ч",
            TimeUnit::Day => "дн",
            TimeUnit::Year => "лет",
        }
    }

    /// Identifier used by intents and the CLI
    pub fn key(self) -> &'static str {
        match self {
            TimeUnit::Sec => "sec",
            TimeUnit::Min => "min",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Year => "year",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ALL
            .iter()
            .copied()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| format!("Unknown time unit: {}", s))
    }
}
