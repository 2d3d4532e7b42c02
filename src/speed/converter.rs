use crate::display::format_speed;
use crate::units::SpeedUnit;
use serde::Serialize;

/// A speed expressed in one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub unit: SpeedUnit,
    pub value: f64,
}

impl Conversion {
    /// `value label`, with `decimals` digits unless the value is whole
    pub fn describe(&self, decimals: usize) -> String {
        format!("{} {}", format_speed(self.value, decimals), self.unit.label())
    }
}

/// Convert `value` in `unit` to every unit of the same group, in table order.
///
/// The source unit itself is listed only when `include_source` is set.
/// Both factors are applied as one ratio so whole-number conversions stay
/// whole.
pub fn convert_all(value: f64, unit: SpeedUnit, include_source: bool) -> Vec<Conversion> {
    let (from_num, from_den) = unit.ratio();
    SpeedUnit::in_group(unit.group())
        .filter(|other| include_source || *other != unit)
        .map(|other| {
            let (to_num, to_den) = other.ratio();
            Conversion {
                unit: other,
                value: value * from_num * to_den / (from_den * to_num),
            }
        })
        .collect()
}
