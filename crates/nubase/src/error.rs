//! Result and Error types for the NUBASE data module

/// Type alias for `Result<T, nubase::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nreact-nubase`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    FailedBinaryOp(#[from] Box<bincode::ErrorKind>),

    /// Table row without a usable mass excess, i.e. not a nuclide
    #[error("no mass excess found in row \"{row}\"")]
    MissingMassExcess { row: String },

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),

    /// Reaction spec token that is not a nuclide, element, or `all`
    #[error("unknown nuclide or element \"{symbol}\"")]
    UnknownElement { symbol: String },

    /// Failed unit conversion
    #[error("failed unit conversion")]
    Units(#[from] nreact_units::Error),
}
