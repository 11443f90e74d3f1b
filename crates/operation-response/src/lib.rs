//! Operation outcomes and their translation into HTTP responses.
//!
//! Business logic reports its result as an [`OperationResponse`]: either a
//! success value or [`ProblemDetails`], plus an HTTP-style status code. The
//! [`ResponseDescriptor`] mapping turns that outcome into a transport-neutral
//! response, and the optional `actix` feature serves it through actix-web.
//!
//! # Examples
//! ```
//! use operation_response::{OperationResponse, ResponseBody, ResponseDescriptor};
//!
//! let descriptor = ResponseDescriptor::from(OperationResponse::ok("hi"));
//! assert_eq!(descriptor.status(), 200);
//! assert_eq!(descriptor.into_body(), Some(ResponseBody::Value(Some("hi"))));
//! ```

pub mod error;
#[cfg(feature = "actix")]
pub mod http;
pub mod outcome;
pub mod problem;
pub mod response;

pub use error::OperationResponseError;
pub use outcome::{OperationResponse, UntypedOperationResponse};
pub use problem::{APPLICATION_PROBLEM_JSON, ProblemDetails, UNKNOWN_ERROR_TITLE};
pub use response::{ResponseBody, ResponseDescriptor};
