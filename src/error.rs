//! Error types for DH group selection.

/// Errors raised when a caller asks for a group by name or size.
///
/// The accessors themselves never fail; this only covers selection of a
/// strength class from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The name does not match any known strength class alias.
    #[error("Unknown DH group strength: {0}")]
    UnknownStrength(String),

    /// No canonical group exists for the requested bit size.
    #[error("Unsupported DH group size: {0} bits")]
    UnsupportedBits(u64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
