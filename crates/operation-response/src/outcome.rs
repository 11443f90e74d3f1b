//! Operation outcomes produced by business logic.
//!
//! An [`OperationResponse`] is either a success carrying an optional value or
//! a failure carrying optional [`ProblemDetails`]. Both sides hold an optional
//! HTTP-style status code; constructors taking a raw `u16` treat `0` as
//! "unset" so callers speaking the legacy convention keep working.

use std::num::NonZeroU16;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::OperationResponseError;
use crate::problem::ProblemDetails;

pub(crate) const OK: u16 = 200;
pub(crate) const CREATED: u16 = 201;
pub(crate) const ACCEPTED: u16 = 202;
pub(crate) const NO_CONTENT: u16 = 204;
pub(crate) const BAD_REQUEST: u16 = 400;
pub(crate) const UNAUTHORIZED: u16 = 401;
pub(crate) const FORBIDDEN: u16 = 403;
pub(crate) const NOT_FOUND: u16 = 404;
pub(crate) const CONFLICT: u16 = 409;
pub(crate) const INTERNAL_SERVER_ERROR: u16 = 500;

/// Outcome whose value is arbitrary JSON.
pub type UntypedOperationResponse = OperationResponse<Value>;

/// Result of a business operation.
///
/// ## Invariants
/// - When `succeeded` is true the problem is never consulted.
/// - When `succeeded` is false the value is never consulted.
///
/// # Examples
/// ```
/// use operation_response::OperationResponse;
///
/// let missing: OperationResponse<String> = OperationResponse::not_found("no such user");
/// assert!(!missing.succeeded());
/// assert_eq!(missing.status_code(), Some(404));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResponse<T = ()> {
    pub(crate) succeeded: bool,
    pub(crate) status_code: Option<NonZeroU16>,
    pub(crate) value: Option<T>,
    pub(crate) problem: Option<Arc<ProblemDetails>>,
}

impl<T> OperationResponse<T> {
    /// Successful outcome with an explicit status code; `0` leaves it unset.
    #[must_use]
    pub fn success(value: Option<T>, status_code: u16) -> Self {
        Self {
            succeeded: true,
            status_code: NonZeroU16::new(status_code),
            value,
            problem: None,
        }
    }

    /// `200 OK` carrying `value`.
    #[must_use]
    pub fn ok(value: T) -> Self {
        Self::success(Some(value), OK)
    }

    /// `201 Created` carrying `value`.
    #[must_use]
    pub fn created(value: T) -> Self {
        Self::success(Some(value), CREATED)
    }

    /// `202 Accepted` carrying `value`.
    #[must_use]
    pub fn accepted(value: T) -> Self {
        Self::success(Some(value), ACCEPTED)
    }

    /// `204 No Content`.
    #[must_use]
    pub fn no_content() -> Self {
        Self::success(None, NO_CONTENT)
    }

    /// Failed outcome with an explicit status code and optional problem.
    ///
    /// A `status_code` of `0` leaves the code unset.
    #[must_use]
    pub fn failure(status_code: u16, problem: Option<Arc<ProblemDetails>>) -> Self {
        Self {
            succeeded: false,
            status_code: NonZeroU16::new(status_code),
            value: None,
            problem,
        }
    }

    /// Failed outcome whose status code is taken from `problem`.
    #[must_use]
    pub fn fail(problem: impl Into<Arc<ProblemDetails>>) -> Self {
        let shared = problem.into();
        Self::failure(shared.status().unwrap_or_default(), Some(shared))
    }

    /// `400 Bad Request` with the given detail.
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::standard_failure(BAD_REQUEST, "Bad Request", detail.into())
    }

    /// `401 Unauthorized` with the given detail.
    #[must_use]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::standard_failure(UNAUTHORIZED, "Unauthorized", detail.into())
    }

    /// `403 Forbidden` with the given detail.
    #[must_use]
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::standard_failure(FORBIDDEN, "Forbidden", detail.into())
    }

    /// `404 Not Found` with the given detail.
    #[must_use]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::standard_failure(NOT_FOUND, "Not Found", detail.into())
    }

    /// `409 Conflict` with the given detail.
    #[must_use]
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::standard_failure(CONFLICT, "Conflict", detail.into())
    }

    /// `500 Internal Server Error` with the given detail.
    #[must_use]
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::standard_failure(INTERNAL_SERVER_ERROR, "Internal Server Error", detail.into())
    }

    fn standard_failure(status: u16, title: &str, detail: String) -> Self {
        Self::fail(
            ProblemDetails::new(title)
                .with_status(status)
                .with_detail(detail),
        )
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Status code, or `None` when unset.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status_code.map(NonZeroU16::get)
    }

    /// Success value. Always `None` for failures.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        if self.succeeded {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Consume the outcome, returning the success value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        if self.succeeded { self.value } else { None }
    }

    /// Problem details as supplied. Always `None` for successes.
    #[must_use]
    pub const fn problem(&self) -> Option<&Arc<ProblemDetails>> {
        if self.succeeded {
            None
        } else {
            self.problem.as_ref()
        }
    }

    /// Re-type a failed outcome to another success-value type.
    ///
    /// The new outcome keeps the status code and shares the same problem
    /// instance.
    ///
    /// # Errors
    /// Returns [`OperationResponseError::RetypeSucceeded`] when called on a
    /// successful outcome.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use operation_response::OperationResponse;
    ///
    /// let lookup: OperationResponse<u32> = OperationResponse::not_found("gone");
    /// let page: OperationResponse<Vec<String>> = lookup.retype_failure().expect("failure");
    /// assert!(Arc::ptr_eq(
    ///     page.problem().expect("problem"),
    ///     lookup.problem().expect("problem"),
    /// ));
    /// ```
    pub fn retype_failure<U>(&self) -> Result<OperationResponse<U>, OperationResponseError> {
        if self.succeeded {
            warn!(
                status_code = self.status_code(),
                "attempted to re-type a succeeded operation response"
            );
            return Err(OperationResponseError::RetypeSucceeded);
        }
        Ok(OperationResponse {
            succeeded: false,
            status_code: self.status_code,
            value: None,
            problem: self.problem.clone(),
        })
    }

    /// Convert into a `Result`, synthesising a problem for bare failures.
    ///
    /// # Errors
    /// Returns the (possibly synthesised) problem when the outcome failed.
    pub fn into_result(self) -> Result<Option<T>, Arc<ProblemDetails>> {
        if self.succeeded {
            Ok(self.value)
        } else {
            Err(resolve_problem(self.problem, self.status_code))
        }
    }
}

impl<T> From<Result<T, ProblemDetails>> for OperationResponse<T> {
    fn from(value: Result<T, ProblemDetails>) -> Self {
        match value {
            Ok(inner) => Self::ok(inner),
            Err(problem) => Self::fail(problem),
        }
    }
}

/// Problem to report for a failure, defaulting when none was supplied.
pub(crate) fn resolve_problem(
    problem: Option<Arc<ProblemDetails>>,
    status_code: Option<NonZeroU16>,
) -> Arc<ProblemDetails> {
    problem.unwrap_or_else(|| {
        let status = status_code.map_or(INTERNAL_SERVER_ERROR, NonZeroU16::get);
        debug!(status, "failed operation carried no problem details; using default");
        Arc::new(ProblemDetails::unknown(status))
    })
}

#[cfg(test)]
mod tests;
