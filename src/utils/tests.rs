use super::error::ApiError;
use super::logging;

#[test]
fn logging_init_accepts_directives_and_repeat_calls() {
    // Only the first call installs a subscriber; later ones are no-ops.
    logging::init("emuhub=debug");
    logging::init("warn");
    // A malformed fallback directive must not panic either.
    logging::init("not a directive!!!");
}

#[test]
fn status_error_exposes_code_and_endpoint() {
    let err = ApiError::Status {
        status: 404,
        endpoint: "http://localhost:8085/v1/projects/p/topics/t".to_string(),
    };
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.endpoint(), "http://localhost:8085/v1/projects/p/topics/t");
    assert!(!err.is_transport());
}

#[test]
fn decode_error_has_no_status() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ApiError::Decode {
        endpoint: "http://localhost:8085/v1/projects/p/topics".to_string(),
        source,
    };
    assert_eq!(err.status(), None);
    assert!(!err.is_transport());
}
