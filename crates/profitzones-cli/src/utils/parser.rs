use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid {expected} value for {key}: '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits a `KEY=VALUE` override at the first `=`, trimming both halves.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_float(key: &str, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: "float",
    })
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ParseError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "boolean",
        }),
    }
}
