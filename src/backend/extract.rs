//! Request Extractors
//!
//! `Json` wraps `axum::Json` so that a body which is not valid JSON, or
//! does not match the target type, is answered with the same JSON error
//! body as every other failure instead of axum's plain-text 422.

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};

use crate::backend::error::BackendError;

/// JSON body extractor and response, rejecting with `BackendError`
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
