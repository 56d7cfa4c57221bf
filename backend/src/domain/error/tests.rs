//! Tests for the failure envelope and error categorisation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::bad_request("page 0"), 400, "bad request")]
#[case(Error::not_found("empty"), 404, "resource not found")]
#[case(Error::unprocessable("missing answer"), 422, "unprocessable")]
#[case(Error::internal("boom"), 500, "Internal Server Error")]
fn serialises_fixed_envelope(#[case] error: Error, #[case] code: u16, #[case] message: &str) {
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({ "success": false, "code": code, "message": message })
    );
}

#[rstest]
fn envelope_never_contains_the_cause() {
    let error = Error::internal("password=hunter2 at db.internal:5432");
    let body = serde_json::to_string(&error).expect("serialise error");
    assert!(!body.contains("hunter2"));
    assert!(!body.contains("db.internal"));
}

#[rstest]
fn display_combines_message_and_cause() {
    let error = Error::unprocessable("no search matches");
    assert_eq!(error.to_string(), "unprocessable: no search matches");
}
