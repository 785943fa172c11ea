//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
///
/// This macro unwraps a Result, providing a better error message
/// if the result is an error.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response is a JSON error body with the given status
///
/// Checks both the HTTP status and the `status` field, and optionally that
/// the `error` field contains a message fragment.
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "body: {}", response.text());
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], $status.as_u16());
        body
    }};
    ($response:expr, $status:expr, $needle:expr) => {{
        let body = assert_error_response!($response, $status);
        assert_contains!(body["error"].as_str().unwrap_or_default(), $needle);
        body
    }};
}
