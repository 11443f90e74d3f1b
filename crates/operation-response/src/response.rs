//! Transport-neutral responses derived from operation outcomes.
//!
//! [`ResponseDescriptor::from_outcome`] is the single mapping from an
//! [`OperationResponse`] to a status and optional body. HTTP adapters only
//! serialise what it produces.

use std::num::NonZeroU16;
use std::sync::Arc;

use serde::Serialize;

use crate::outcome::{INTERNAL_SERVER_ERROR, NO_CONTENT, OK, OperationResponse, resolve_problem};
use crate::problem::ProblemDetails;

/// Payload of a response that has a body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    /// Success value; `None` serialises as `null`.
    Value(Option<T>),
    /// Problem details describing a failure.
    Problem(Arc<ProblemDetails>),
}

/// Status and optional body for an HTTP layer to write.
///
/// # Examples
/// ```
/// use operation_response::{OperationResponse, ResponseBody, ResponseDescriptor};
///
/// let outcome: OperationResponse<String> = OperationResponse::failure(404, None);
/// let descriptor = ResponseDescriptor::from_outcome(outcome);
///
/// assert_eq!(descriptor.status(), 404);
/// let Some(ResponseBody::Problem(problem)) = descriptor.body() else {
///     panic!("expected a problem body");
/// };
/// assert_eq!(problem.title(), "Unknown error");
/// assert_eq!(problem.status(), Some(404));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseDescriptor<T> {
    /// Status only, no body.
    NoContent {
        /// HTTP status code.
        status: u16,
    },
    /// Status with a serialisable body.
    Body {
        /// HTTP status code.
        status: u16,
        /// Payload to serialise.
        body: ResponseBody<T>,
    },
}

impl<T> ResponseDescriptor<T> {
    /// Map an outcome onto the response an HTTP layer should write.
    ///
    /// Successes become `204` without a body when the status is `204`, and
    /// otherwise carry the value with the outcome status or `200`. Failures
    /// carry the supplied problem, or an "Unknown error" problem when none was
    /// supplied; the problem's own status takes precedence over the outcome's,
    /// falling back to `500` when neither is set.
    #[must_use]
    pub fn from_outcome(outcome: OperationResponse<T>) -> Self {
        let OperationResponse {
            succeeded,
            status_code,
            value,
            problem,
        } = outcome;
        if succeeded {
            Self::success(status_code, value)
        } else {
            Self::failure(status_code, problem)
        }
    }

    fn success(status_code: Option<NonZeroU16>, value: Option<T>) -> Self {
        match status_code.map(NonZeroU16::get) {
            Some(NO_CONTENT) => Self::NoContent { status: NO_CONTENT },
            code => Self::Body {
                status: code.unwrap_or(OK),
                body: ResponseBody::Value(value),
            },
        }
    }

    fn failure(status_code: Option<NonZeroU16>, problem: Option<Arc<ProblemDetails>>) -> Self {
        let resolved = resolve_problem(problem, status_code);
        let status = resolved
            .status()
            .and_then(NonZeroU16::new)
            .or(status_code)
            .map_or(INTERNAL_SERVER_ERROR, NonZeroU16::get);
        Self::Body {
            status,
            body: ResponseBody::Problem(resolved),
        }
    }

    /// Status code to write.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NoContent { status } | Self::Body { status, .. } => *status,
        }
    }

    /// Body to write, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&ResponseBody<T>> {
        match self {
            Self::NoContent { .. } => None,
            Self::Body { body, .. } => Some(body),
        }
    }

    /// Consume the descriptor, returning its body.
    #[must_use]
    pub fn into_body(self) -> Option<ResponseBody<T>> {
        match self {
            Self::NoContent { .. } => None,
            Self::Body { body, .. } => Some(body),
        }
    }
}

impl<T> From<OperationResponse<T>> for ResponseDescriptor<T> {
    fn from(value: OperationResponse<T>) -> Self {
        Self::from_outcome(value)
    }
}

impl<T> OperationResponse<T> {
    /// Map this outcome onto a [`ResponseDescriptor`].
    #[must_use]
    pub fn into_response_descriptor(self) -> ResponseDescriptor<T> {
        ResponseDescriptor::from_outcome(self)
    }
}
