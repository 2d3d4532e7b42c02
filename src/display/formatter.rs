use crate::config::DisplayConfig;
use crate::types::Operator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Numeric literal inside an expression: digits, optional point, optional fraction
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d+\.?\d*").unwrap();
}

/// Formats numbers and expressions for the display lines
#[derive(Debug, Clone)]
pub struct DisplayFormatter {
    separator: String,
    glyphs: bool,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl DisplayFormatter {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            separator: config.thousands_separator.clone(),
            glyphs: config.operator_glyphs,
        }
    }

    /// Insert thousands separators into the integer part of a numeric string.
    /// The fractional part and a leading sign are kept as typed.
    pub fn number(&self, text: &str) -> String {
        let (sign, unsigned) = match text.chars().next() {
            Some(c @ ('-' | '−')) => (Some(c), &text[c.len_utf8()..]),
            _ => (None, text),
        };

        let (int_part, frac_part) = match unsigned.find('.') {
            Some(pos) => unsigned.split_at(pos),
            None => (unsigned, ""),
        };

        if !int_part.chars().all(|c| c.is_ascii_digit()) {
            return text.to_string();
        }

        let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
        if let Some(sign) = sign {
            grouped.push(sign);
        }
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push_str(&self.separator);
            }
            grouped.push(c);
        }
        grouped.push_str(frac_part);
        grouped
    }

    /// Group digits of every number in an expression and, when enabled,
    /// swap ASCII operators for their display glyphs
    pub fn expression(&self, expr: &str) -> String {
        let grouped = NUMBER_PATTERN.replace_all(expr, |caps: &regex::Captures| {
            self.number(&caps[0])
        });

        if !self.glyphs {
            return grouped.into_owned();
        }

        grouped
            .chars()
            .map(|c| match Operator::from_char(c) {
                Some(op) => op.glyph(),
                None => c,
            })
            .collect()
    }

    /// Operator as shown in expression lines
    pub fn operator(&self, op: Operator) -> char {
        if self.glyphs {
            op.glyph()
        } else {
            op.ascii()
        }
    }
}

/// Shortest decimal representation of a number, never in exponent form
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Arithmetic result: integers without a fraction, everything else rounded
/// to `precision` decimals with trailing zeros removed
pub fn format_result(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 {
        return format_plain(value);
    }

    let rounded = format!("{:.*}", precision, value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Speed value: integers with no decimals, otherwise exactly `decimals`
pub fn format_speed(value: f64, decimals: usize) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_grouping() {
        let formatter = DisplayFormatter::default();
        assert_eq!(formatter.number("1234567"), "1 234 567");
        assert_eq!(formatter.number("123"), "123");
        assert_eq!(formatter.number("1000.12345"), "1 000.12345");
        assert_eq!(formatter.number("-98765"), "-98 765");
        assert_eq!(formatter.number("0."), "0.");
        assert_eq!(formatter.number(""), "");
    }

    #[test]
    fn test_custom_separator() {
        let config = DisplayConfig {
            thousands_separator: ",".to_string(),
            ..DisplayConfig::default()
        };
        let formatter = DisplayFormatter::from_config(&config);
        assert_eq!(formatter.number("1000000"), "1,000,000");
    }

    #[test]
    fn test_expression_formatting() {
        let formatter = DisplayFormatter::default();
        assert_eq!(formatter.expression("12000*3-1.5"), "12 000×3−1.5");
        assert_eq!(formatter.expression("(2500+1)/4"), "(2 500+1)÷4");

        let config = DisplayConfig {
            operator_glyphs: false,
            ..DisplayConfig::default()
        };
        let ascii = DisplayFormatter::from_config(&config);
        assert_eq!(ascii.expression("12000*3"), "12 000*3");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(220.0, 10), "220");
        assert_eq!(format_result(0.1 + 0.2, 10), "0.3");
        assert_eq!(format_result(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_result(-2.5, 10), "-2.5");
        assert_eq!(format_result(-0.0, 10), "0");
        assert_eq!(format_result(1e-12, 10), "0");
    }

    #[test]
    fn test_format_plain_avoids_exponent() {
        assert_eq!(format_plain(1e21), "1000000000000000000000");
        assert_eq!(format_plain(0.1), "0.1");
        assert_eq!(format_plain(20.0), "20");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(1000.0, 2), "1000");
        assert_eq!(format_speed(1000.0 / 60.0, 2), "16.67");
        assert_eq!(format_speed(0.5, 2), "0.50");
    }
}
