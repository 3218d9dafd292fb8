#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("cannot combine an empty set of waves")]
    EmptyAggregate,
}
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [Error::InvalidConfiguration] unless `value` is finite and strictly positive
pub(crate) fn positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0f64 {
        Ok(value)
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be strictly positive, found {value}"
        )))
    }
}
/// Fails with [Error::InvalidConfiguration] unless `value` is finite and positive or zero
pub(crate) fn non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0f64 {
        Ok(value)
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be positive or zero, found {value}"
        )))
    }
}
pub(crate) fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be finite, found {value}"
        )))
    }
}
