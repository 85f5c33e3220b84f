//! Result and Error types for the units module

/// Type alias for `Result<T, units::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nreact-units`
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Only half-lives recorded in seconds can be converted
    #[error("unable to convert half-life unit \"{unit}\" to seconds")]
    UnsupportedUnit { unit: String },

    /// Half-life text is not a number, e.g. `stbl`
    #[error("half-life value \"{value}\" is not numeric")]
    InvalidValue { value: String },
}
