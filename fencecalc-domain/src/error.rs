//! Error types for fencecalc-domain.
//!
//! Only the boundary can fail. Once a job is validated the calculators are total.

use fencecalc_types::pricing::MaterialKind;
use thiserror::Error;

/// A job or price list that cannot be estimated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The height string has no leading integer.
    #[error("invalid fence height `{raw}`: expected a whole number")]
    InvalidHeight { raw: String },

    /// The height parsed but is not a usable fence height.
    #[error("fence height {value} out of range: must be between 1 and {max}")]
    HeightOutOfRange { value: i64, max: u32 },

    #[error("run {index} has invalid length {length}: must be finite and non-negative")]
    InvalidRunLength { index: usize, length: f64 },

    /// The runs are individually fine but add up to more fence than one job holds.
    #[error("total fence length {total} out of range: must be at most {max}")]
    TotalLengthOutOfRange { total: f64, max: f64 },

    #[error("`{field}` is {value}: must be at most {max}")]
    CountOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("price for `{}` is {price}: must be finite and non-negative", .kind.key())]
    InvalidPrice { kind: MaterialKind, price: f64 },
}

impl InputError {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

/// Result type alias using InputError.
pub type InputResult<T> = Result<T, InputError>;
