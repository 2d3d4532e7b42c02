use crate::display::format_plain;
use crate::types::Operator;
use crate::units::TimeUnit;

const NEGATIVE_MARK: char = '−';
const SECONDS_PER_DAY: u64 = 86_400;

/// One element of a time expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeToken {
    Quantity {
        value: f64,
        unit: TimeUnit,
        /// Wall-clock snapshot rather than a typed duration
        is_now: bool,
    },
    Operator(Operator),
}

impl TimeToken {
    pub fn quantity(value: f64, unit: TimeUnit) -> Self {
        TimeToken::Quantity {
            value,
            unit,
            is_now: false,
        }
    }

    /// Whole seconds contributed by a quantity, `None` when they do not fit
    /// in an `i64`. Operators contribute nothing.
    pub fn seconds(&self) -> Option<i64> {
        let seconds = match *self {
            TimeToken::Quantity {
                value,
                is_now: true,
                ..
            } => value,
            TimeToken::Quantity { value, unit, .. } => value * unit.seconds() as f64,
            TimeToken::Operator(_) => return Some(0),
        }
        .floor();
        // `i64::MAX as f64` rounds up to 2^63
        let in_range = seconds >= i64::MIN as f64 && seconds < i64::MAX as f64;
        in_range.then_some(seconds as i64)
    }
}

/// Signed durations combined left to right with `+` and `-`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeExpression {
    tokens: Vec<TimeToken>,
}

impl TimeExpression {
    /// Expression holding only a "now" anchor
    pub fn now(seconds_since_midnight: u32) -> Self {
        Self {
            tokens: vec![TimeToken::Quantity {
                value: f64::from(seconds_since_midnight),
                unit: TimeUnit::Sec,
                is_now: true,
            }],
        }
    }

    pub fn tokens(&self) -> &[TimeToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token. An operator following another operator replaces it.
    pub fn push(&mut self, token: TimeToken) {
        match (token, self.tokens.last_mut()) {
            (TimeToken::Operator(op), Some(TimeToken::Operator(last))) => *last = op,
            _ => self.tokens.push(token),
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn has_now_anchor(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, TimeToken::Quantity { is_now: true, .. }))
    }

    /// Total signed seconds, or `None` if it overflows. Each operator sets
    /// the sign of the quantities after it; the first quantity is added.
    pub fn reduce(&self) -> Option<i64> {
        let mut sign = Operator::Add;
        let mut total = 0i64;
        for token in &self.tokens {
            match token {
                TimeToken::Operator(op) => sign = *op,
                quantity => {
                    let seconds = quantity.seconds()?;
                    total = match sign {
                        Operator::Subtract => total.checked_sub(seconds)?,
                        _ => total.checked_add(seconds)?,
                    };
                }
            }
        }
        Some(total)
    }

    /// Render a total produced by [`reduce`](Self::reduce).
    ///
    /// With a "now" anchor the total is a time of day: `HH:MM:SS` while it
    /// stays within the same day, otherwise days/hours/minutes/seconds.
    /// Without one it is a duration showing at most four components.
    pub fn format(&self, total_seconds: i64) -> String {
        if total_seconds == 0 {
            return format!("0 {}", TimeUnit::Sec.label());
        }
        if self.has_now_anchor() {
            format_time_of_day(total_seconds)
        } else {
            format_duration(total_seconds)
        }
    }
}

struct Breakdown {
    negative: bool,
    years: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Breakdown {
    fn new(total_seconds: i64, with_years: bool) -> Self {
        let abs = total_seconds.unsigned_abs();
        let (years, rest) = if with_years {
            let year = TimeUnit::Year.seconds() as u64;
            (abs / year, abs % year)
        } else {
            (0, abs)
        };
        let hour = TimeUnit::Hour.seconds() as u64;
        let minute = TimeUnit::Min.seconds() as u64;
        Self {
            negative: total_seconds < 0,
            years,
            days: rest / SECONDS_PER_DAY,
            hours: rest % SECONDS_PER_DAY / hour,
            minutes: rest % hour / minute,
            seconds: rest % minute,
        }
    }

    fn components(&self) -> [(u64, TimeUnit); 5] {
        [
            (self.years, TimeUnit::Year),
            (self.days, TimeUnit::Day),
            (self.hours, TimeUnit::Hour),
            (self.minutes, TimeUnit::Min),
            (self.seconds, TimeUnit::Sec),
        ]
    }

    /// Nonzero components, seconds kept when nothing else is, capped to `limit`
    fn nonzero(&self, limit: usize) -> String {
        let mut parts: Vec<String> = self
            .components()
            .iter()
            .filter(|(amount, unit)| *amount > 0 && *unit != TimeUnit::Sec)
            .map(|(amount, unit)| format!("{} {}", amount, unit.label()))
            .collect();
        if self.seconds > 0 || parts.is_empty() {
            parts.push(format!("{} {}", self.seconds, TimeUnit::Sec.label()));
        }
        parts.truncate(limit);
        self.signed(parts.join(" "))
    }

    fn signed(&self, text: String) -> String {
        if self.negative {
            format!("{}{}", NEGATIVE_MARK, text)
        } else {
            text
        }
    }
}

fn format_time_of_day(total_seconds: i64) -> String {
    let breakdown = Breakdown::new(total_seconds, false);
    if breakdown.days == 0 && !breakdown.negative {
        return format!(
            "{:02}:{:02}:{:02}",
            breakdown.hours, breakdown.minutes, breakdown.seconds
        );
    }
    breakdown.nonzero(usize::MAX)
}

fn format_duration(total_seconds: i64) -> String {
    Breakdown::new(total_seconds, true).nonzero(4)
}

/// Every component from years down to seconds, zeros included
pub fn full_breakdown(total_seconds: i64) -> String {
    let breakdown = Breakdown::new(total_seconds, true);
    let text = breakdown
        .components()
        .iter()
        .map(|(amount, unit)| format!("{} {}", amount, unit.label()))
        .collect::<Vec<_>>()
        .join(" ");
    breakdown.signed(text)
}

/// `HH:MM:SS` of a time of day
pub fn format_clock(seconds_since_midnight: u32) -> String {
    let hours = seconds_since_midnight / 3600;
    let minutes = seconds_since_midnight % 3600 / 60;
    let seconds = seconds_since_midnight % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Label of a quantity as typed
pub fn describe_quantity(value: f64, unit: TimeUnit) -> String {
    format!("{} {}", format_plain(value), unit.label())
}
