//! Problem details payloads for failed operations.
//!
//! [`ProblemDetails`] follows the RFC 9457 JSON shape: the well-known members
//! `type`, `title`, `status`, `detail` and `instance`, plus any extension
//! members flattened alongside them. Absent members are omitted on output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Media type for problem details bodies.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Title given to problems synthesised for failures that carried none.
pub const UNKNOWN_ERROR_TITLE: &str = "Unknown error";

/// Standard members that extensions may not shadow.
const RESERVED_MEMBERS: [&str; 5] = ["type", "title", "status", "detail", "instance"];

/// Structured error payload describing why an operation failed.
///
/// # Examples
/// ```
/// use operation_response::ProblemDetails;
/// use serde_json::json;
///
/// let problem = ProblemDetails::new("Not Found")
///     .with_status(404)
///     .with_detail("user 42 does not exist");
/// assert_eq!(
///     serde_json::to_value(&problem).expect("problem serialises"),
///     json!({ "title": "Not Found", "status": 404, "detail": "user 42 does not exist" })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    problem_type: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl ProblemDetails {
    /// Create a problem with the given title and no other members.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Default problem for a failure that carried no details.
    #[must_use]
    pub fn unknown(status: u16) -> Self {
        Self::new(UNKNOWN_ERROR_TITLE).with_status(status)
    }

    /// Set the HTTP status the problem describes.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the URI reference identifying the problem type.
    #[must_use]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    /// Set the occurrence-specific explanation.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the URI reference identifying this occurrence.
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Attach an extension member, replacing any previous value for `key`.
    ///
    /// Keys naming a standard member (`type`, `title`, `status`, `detail`,
    /// `instance`) are ignored so the payload never carries duplicate members.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        let name = key.into();
        if RESERVED_MEMBERS.contains(&name.as_str()) {
            warn!(member = %name, "ignoring extension that shadows a standard problem member");
            return self;
        }
        self.extensions.insert(name, value);
        self
    }

    /// Short human-readable summary.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// HTTP status the problem describes, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Problem type URI reference.
    #[must_use]
    pub fn problem_type(&self) -> Option<&str> {
        self.problem_type.as_deref()
    }

    /// Occurrence-specific explanation.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Occurrence URI reference.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Extension members beyond the standard ones.
    #[must_use]
    pub const fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }
}
