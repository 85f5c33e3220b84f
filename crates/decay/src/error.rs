//! Result and Error types for the decay module

/// Type alias for `Result<T, decay::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nreact-decay`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise JSON
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure in the nuclide data module
    #[error("failed to resolve nuclides")]
    Nubase(#[from] nreact_nubase::Error),

    /// Failure in the reactions module
    #[error("failed to enumerate reactions")]
    Reactions(#[from] nreact_reactions::Error),
}
