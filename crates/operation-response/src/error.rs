//! Errors raised when an outcome is used against its state.

use thiserror::Error;

/// Misuse of an [`OperationResponse`](crate::OperationResponse).
///
/// These signal a bug in the caller rather than a runtime condition, so
/// nothing in this crate recovers from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OperationResponseError {
    /// A successful outcome was asked to re-type itself as a failure.
    #[error("cannot re-type a succeeded operation response as a failure")]
    RetypeSucceeded,
}
