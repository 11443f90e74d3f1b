//! actix-web integration.
//!
//! Handlers may return an [`OperationResponse`] or a [`ResponseDescriptor`]
//! directly; both are written through [`ResponseDescriptor::into_http_response`].
//!
//! ```no_run
//! use actix_web::{get, web};
//! use operation_response::OperationResponse;
//!
//! #[get("/users/{id}")]
//! async fn show(id: web::Path<u32>) -> OperationResponse<String> {
//!     match id.into_inner() {
//!         1 => OperationResponse::ok("ada".to_owned()),
//!         other => OperationResponse::not_found(format!("user {other} does not exist")),
//!     }
//! }
//! ```

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::outcome::OperationResponse;
use crate::problem::APPLICATION_PROBLEM_JSON;
use crate::response::{ResponseBody, ResponseDescriptor};

const APPLICATION_JSON: &str = "application/json";

impl<T: Serialize> ResponseDescriptor<T> {
    /// Write the descriptor as an actix-web response.
    ///
    /// Problem bodies use `application/problem+json` and values use
    /// `application/json`. Statuses actix-web cannot represent and bodies
    /// that fail to serialise degrade to `500 Internal Server Error`.
    #[must_use]
    pub fn into_http_response(self) -> HttpResponse {
        let status = http_status(self.status());
        let Some(body) = self.into_body() else {
            return HttpResponse::build(status).finish();
        };
        let content_type = match &body {
            ResponseBody::Value(_) => APPLICATION_JSON,
            ResponseBody::Problem(_) => APPLICATION_PROBLEM_JSON,
        };
        match serde_json::to_string(&body) {
            Ok(json) => HttpResponse::build(status)
                .content_type(content_type)
                .body(json),
            Err(err) => {
                error!(error = %err, status = status.as_u16(), "response body failed to serialise");
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

fn http_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or_else(|err| {
        error!(error = %err, status, "status code cannot be written; answering 500");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

impl<T: Serialize> Responder for ResponseDescriptor<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<BoxBody> {
        self.into_http_response()
    }
}

impl<T: Serialize> Responder for OperationResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<BoxBody> {
        self.into_response_descriptor().into_http_response()
    }
}
