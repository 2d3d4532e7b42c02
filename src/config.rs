use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Display settings shared by all modes
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Inserted between groups of three integer digits
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    // Show − × ÷ instead of - * / in expression lines
    #[serde(default = "default_operator_glyphs")]
    pub operator_glyphs: bool,

    // Decimal digits kept for non-integral arithmetic results
    #[serde(default = "default_result_precision")]
    pub result_precision: usize,

    // Decimal digits for non-integral speed conversions
    #[serde(default = "default_speed_decimals")]
    pub speed_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: default_thousands_separator(),
            operator_glyphs: default_operator_glyphs(),
            result_precision: default_result_precision(),
            speed_decimals: default_speed_decimals(),
        }
    }
}

fn default_thousands_separator() -> String {
    " ".to_string()
}

fn default_operator_glyphs() -> bool {
    true
}

fn default_result_precision() -> usize {
    10
}

fn default_speed_decimals() -> usize {
    2
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}
