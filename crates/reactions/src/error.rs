//! Result and Error types for the reactions module

/// Type alias for `Result<T, reactions::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nreact-reactions`
pub enum Error {
    /// Reaction model name is not recognised
    #[error("unknown reaction model \"{name}\", expected one of {expected:?}")]
    UnknownModel {
        name: String,
        expected: &'static [&'static str],
    },

    /// Failure in the nuclide data module
    #[error("failed to resolve nuclides")]
    Nubase(#[from] nreact_nubase::Error),
}
