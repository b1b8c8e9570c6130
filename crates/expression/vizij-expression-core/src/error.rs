//! Errors raised at the configuration boundary.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(String),
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("blink interval [{min}, {max}] must be non-negative and ordered")]
    InvalidInterval { min: f32, max: f32 },
}
