use thiserror::Error;

/// Failure of a single calculator operation.
///
/// Every variant aborts the triggering operation and leaves the calculator
/// state untouched. The message is what the renderer shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Expression contains characters outside the arithmetic charset,
    /// or is not well formed.
    #[error("Ошибка в выражении!")]
    InvalidExpression(String),
    /// Result is not a finite number (overflow, division by zero).
    #[error("Ошибка вычисления!")]
    Computation,
    /// Operation needs a number that has not been entered yet.
    #[error("{0}")]
    MissingOperand(&'static str),
    /// A number was entered without choosing its unit first.
    #[error("{0}")]
    MissingUnit(&'static str),
}

impl CalcError {
    pub fn missing_number() -> Self {
        CalcError::MissingOperand("Введите число сначала!")
    }

    pub fn missing_time_unit() -> Self {
        CalcError::MissingUnit("Выберите единицу времени!")
    }

    pub fn missing_speed_unit() -> Self {
        CalcError::MissingUnit("Выберите единицу скорости!")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
