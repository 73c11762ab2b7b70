//! Umbrella error for facade operations.

use morningstar_types::{DateError, FormatError, ProviderError};
use thiserror::Error;

use crate::TransportError;

/// Result type alias for facade operations.
pub type Result<T> = std::result::Result<T, MorningstarError>;

/// Errors returned by [`MorningstarClient`](crate::MorningstarClient).
#[derive(Error, Debug)]
pub enum MorningstarError {
    /// Malformed identifier, ISIN or currency supplied by the caller.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Malformed date or inverted date range supplied by the caller.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The provider rejected the query or returned unusable data.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Network or HTTP failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
