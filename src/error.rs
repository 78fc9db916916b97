use thiserror::Error;

/// Reasons a `FloatFormat` cannot be used to build values.
///
/// Every variant describes a configuration under which normalization would
/// either never terminate or produce a pair that collides with a special
/// value code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("base must be at least 2, got {base}")]
    Base { base: String },

    #[error("mantissa bounds {lowest}..={max} are unusable with base {base}")]
    MantissaBounds {
        lowest: String,
        max: String,
        base: String,
    },

    #[error("exponent bounds {lowest}..={max} must contain the special codes 0..=3")]
    ExponentBounds { lowest: String, max: String },

    #[error("exponent lower bound {lowest} leaves no room to normalize 1 ({steps} base steps needed)")]
    OneUnderflows { lowest: String, steps: u32 },
}
