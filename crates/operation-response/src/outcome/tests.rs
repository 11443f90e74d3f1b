//! Tests for outcome construction and failure re-typing.

use super::*;
use crate::problem::UNKNOWN_ERROR_TITLE;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn shared_problem() -> Arc<ProblemDetails> {
    Arc::new(ProblemDetails::new("Gone").with_status(410))
}

#[rstest]
#[case::ok(OperationResponse::ok(1), Some(200))]
#[case::created(OperationResponse::created(1), Some(201))]
#[case::accepted(OperationResponse::accepted(1), Some(202))]
#[case::explicit(OperationResponse::success(Some(1), 299), Some(299))]
#[case::zero_is_unset(OperationResponse::success(Some(1), 0), None)]
fn success_constructors_set_status(
    #[case] outcome: OperationResponse<i32>,
    #[case] expected: Option<u16>,
) {
    assert!(outcome.succeeded());
    assert_eq!(outcome.status_code(), expected);
    assert_eq!(outcome.value(), Some(&1));
    assert!(outcome.problem().is_none());
}

#[test]
fn no_content_has_no_value() {
    let outcome: OperationResponse = OperationResponse::no_content();

    assert!(outcome.succeeded());
    assert_eq!(outcome.status_code(), Some(204));
    assert!(outcome.into_value().is_none());
}

#[rstest]
#[case::bad_request(OperationResponse::bad_request("d"), 400, "Bad Request")]
#[case::unauthorized(OperationResponse::unauthorized("d"), 401, "Unauthorized")]
#[case::forbidden(OperationResponse::forbidden("d"), 403, "Forbidden")]
#[case::not_found(OperationResponse::not_found("d"), 404, "Not Found")]
#[case::conflict(OperationResponse::conflict("d"), 409, "Conflict")]
#[case::internal(OperationResponse::internal_error("d"), 500, "Internal Server Error")]
fn standard_failures_carry_matching_problem(
    #[case] outcome: OperationResponse<String>,
    #[case] status: u16,
    #[case] title: &str,
) {
    assert!(!outcome.succeeded());
    assert_eq!(outcome.status_code(), Some(status));
    let problem = outcome.problem().expect("problem present");
    assert_eq!(problem.title(), title);
    assert_eq!(problem.status(), Some(status));
    assert_eq!(problem.detail(), Some("d"));
}

#[test]
fn fail_without_problem_status_leaves_code_unset() {
    let outcome: OperationResponse<()> = OperationResponse::fail(ProblemDetails::new("Oops"));

    assert_eq!(outcome.status_code(), None);
}

#[test]
fn value_is_hidden_on_failure() {
    let outcome = OperationResponse {
        succeeded: false,
        status_code: NonZeroU16::new(400),
        value: Some("stale"),
        problem: None,
    };

    assert!(outcome.value().is_none());
    assert!(outcome.into_value().is_none());
}

#[rstest]
fn problem_is_hidden_on_success(shared_problem: Arc<ProblemDetails>) {
    let outcome = OperationResponse {
        succeeded: true,
        status_code: None,
        value: Some(1),
        problem: Some(shared_problem),
    };

    assert!(outcome.problem().is_none());
}

#[rstest]
#[case::ok(OperationResponse::ok(json!({ "id": 1 })))]
#[case::zero_status(OperationResponse::success(None, 0))]
#[case::no_content(OperationResponse::no_content())]
#[case::odd_status(OperationResponse::success(Some(json!(null)), 999))]
fn retype_rejects_succeeded_outcomes(#[case] outcome: UntypedOperationResponse) {
    let result = outcome.retype_failure::<String>();

    assert_eq!(result, Err(OperationResponseError::RetypeSucceeded));
}

#[rstest]
fn retype_shares_problem_and_status(shared_problem: Arc<ProblemDetails>) {
    let original: OperationResponse<u64> =
        OperationResponse::failure(422, Some(Arc::clone(&shared_problem)));

    let retyped: OperationResponse<Vec<String>> =
        original.retype_failure().expect("failed outcome re-types");

    assert!(!retyped.succeeded());
    assert_eq!(retyped.status_code(), Some(422));
    assert!(retyped.value().is_none());
    assert!(Arc::ptr_eq(
        retyped.problem().expect("problem kept"),
        &shared_problem
    ));
}

#[test]
fn retype_keeps_missing_problem_missing() {
    let original: OperationResponse<u8> = OperationResponse::failure(0, None);

    let retyped = original.retype_failure::<()>().expect("failed outcome re-types");

    assert_eq!(retyped.status_code(), None);
    assert!(retyped.problem().is_none());
}

#[test]
fn from_result_maps_both_arms() {
    let ok: OperationResponse<&str> = Ok("v").into();
    let err: OperationResponse<&str> = Err(ProblemDetails::new("Nope").with_status(418)).into();

    assert_eq!(ok.status_code(), Some(200));
    assert_eq!(ok.value(), Some(&"v"));
    assert_eq!(err.status_code(), Some(418));
    assert_eq!(err.problem().map(|p| p.title()), Some("Nope"));
}

#[rstest]
#[case::unset(0, 500)]
#[case::explicit(404, 404)]
fn into_result_synthesises_missing_problem(#[case] status_code: u16, #[case] expected: u16) {
    let outcome: OperationResponse<()> = OperationResponse::failure(status_code, None);

    let problem = outcome.into_result().expect_err("failure maps to Err");

    assert_eq!(problem.title(), UNKNOWN_ERROR_TITLE);
    assert_eq!(problem.status(), Some(expected));
}

#[rstest]
fn into_result_returns_supplied_problem(shared_problem: Arc<ProblemDetails>) {
    let outcome: OperationResponse<()> =
        OperationResponse::failure(400, Some(Arc::clone(&shared_problem)));

    let problem = outcome.into_result().expect_err("failure maps to Err");

    assert!(Arc::ptr_eq(&problem, &shared_problem));
}
