use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Family of mutually convertible speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedGroup {
    /// Base unit m/min
    Linear,
    /// Base unit rpm
    Angular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SpeedUnit {
    #[serde(rename = "m/min")]
    MetersPerMinute,
    #[serde(rename = "m/h")]
    MetersPerHour,
    #[serde(rename = "km/h")]
    KilometersPerHour,
    #[serde(rename = "m/s")]
    MetersPerSecond,
    #[serde(rename = "km/min")]
    KilometersPerMinute,
    #[serde(rename = "rpm")]
    RevolutionsPerMinute,
    #[serde(rename = "rps")]
    RevolutionsPerSecond,
    #[serde(rename = "rph")]
    RevolutionsPerHour,
}

impl SpeedUnit {
    /// Every unit, grouped, in display order
    pub const ALL: [SpeedUnit; 8] = [
        SpeedUnit::MetersPerMinute,
        SpeedUnit::MetersPerHour,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::MetersPerSecond,
        SpeedUnit::KilometersPerMinute,
        SpeedUnit::RevolutionsPerMinute,
        SpeedUnit::RevolutionsPerSecond,
        SpeedUnit::RevolutionsPerHour,
    ];

    pub fn group(self) -> SpeedGroup {
        match self {
            SpeedUnit::RevolutionsPerMinute
            | SpeedUnit::RevolutionsPerSecond
            | SpeedUnit::RevolutionsPerHour => SpeedGroup::Angular,
            _ => SpeedGroup::Linear,
        }
    }

    /// Size of one unit in the group's base unit, as numerator/denominator.
    ///
    /// Kept as a ratio so that round numbers survive a conversion
    /// (60 km/h is exactly 1000 m/min).
    pub fn ratio(self) -> (f64, f64) {
        match self {
            SpeedUnit::MetersPerMinute => (1.0, 1.0),
            SpeedUnit::MetersPerHour => (1.0, 60.0),
            SpeedUnit::KilometersPerHour => (1000.0, 60.0),
            SpeedUnit::MetersPerSecond => (60.0, 1.0),
            SpeedUnit::KilometersPerMinute => (1000.0, 1.0),
            SpeedUnit::RevolutionsPerMinute => (1.0, 1.0),
            SpeedUnit::RevolutionsPerSecond => (60.0, 1.0),
            SpeedUnit::RevolutionsPerHour => (1.0, 60.0),
        }
    }

    /// Conversion factor to the base unit
    pub fn factor(self) -> f64 {
        let (num, den) = self.ratio();
        num / den
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerMinute => "м/мин",
            SpeedUnit::MetersPerHour => "м/ч",
            SpeedUnit::KilometersPerHour => "км/ч",
            SpeedUnit::MetersPerSecond => "м/с",
            SpeedUnit::KilometersPerMinute => "км/мин",
            SpeedUnit::RevolutionsPerMinute => "об/мин",
            SpeedUnit::RevolutionsPerSecond => "об/сек",
            SpeedUnit::RevolutionsPerHour => "об/час",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerMinute => "m/min",
            SpeedUnit::MetersPerHour => "m/h",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::KilometersPerMinute => "km/min",
            SpeedUnit::RevolutionsPerMinute => "rpm",
            SpeedUnit::RevolutionsPerSecond => "rps",
            SpeedUnit::RevolutionsPerHour => "rph",
        }
    }

    /// Units sharing a group, in display order
    pub fn in_group(group: SpeedGroup) -> impl Iterator<Item = SpeedUnit> {
        SpeedUnit::ALL
            .into_iter()
            .filter(move |unit| unit.group() == group)
    }
}

impl FromStr for SpeedUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpeedUnit::ALL
            .iter()
            .copied()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| format!("Unknown speed unit: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups() {
        assert_eq!(SpeedUnit::in_group(SpeedGroup::Linear).count(), 5);
        assert_eq!(SpeedUnit::in_group(SpeedGroup::Angular).count(), 3);
        assert_eq!(SpeedUnit::RevolutionsPerSecond.group(), SpeedGroup::Angular);
        assert_eq!(SpeedUnit::MetersPerSecond.group(), SpeedGroup::Linear);
    }

    #[test]
    fn test_base_units_have_unit_factor() {
        assert_eq!(SpeedUnit::MetersPerMinute.factor(), 1.0);
        assert_eq!(SpeedUnit::RevolutionsPerMinute.factor(), 1.0);
        assert_eq!(SpeedUnit::MetersPerSecond.factor(), 60.0);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            "km/h".parse::<SpeedUnit>().unwrap(),
            SpeedUnit::KilometersPerHour
        );
        assert_eq!("rph".parse::<SpeedUnit>().unwrap(), SpeedUnit::RevolutionsPerHour);
        assert!("knots".parse::<SpeedUnit>().is_err());
    }
}
