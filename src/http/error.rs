use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
    /// The requested route does not exist.
    pub const ROUTE_NOT_FOUND: Self = Self(404);
    /// The Newsdata.io API key is not configured.
    pub const MISSING_CREDENTIAL: Self = Self(1000);
    /// An upstream API returned a failure; the error text is its raw payload.
    pub const UPSTREAM_ERROR: Self = Self(2000);
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub status: Cow<'static, str>,
    pub error_code: ApiErrorCode,
    pub error: Cow<'static, str>,
}

impl ApiError {
    pub fn new(
        status_code: StatusCode,
        error_code: ApiErrorCode,
        error: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            status_code,
            status: status_code.canonical_reason().unwrap_or("unknown").into(),
            error_code,
            error: error.into(),
        }
    }

    pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_code, error)
    }

    pub fn service_unavailable(
        error_code: ApiErrorCode,
        error: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, error_code, error)
    }

    pub fn bad_gateway(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, error_code, error)
    }
}

/// Interactive-path policy: a missing credential is a displayed error, an
/// upstream failure is displayed with its raw payload inline.
impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::MissingCredential => Self::service_unavailable(
                ApiErrorCode::MISSING_CREDENTIAL,
                "missing NEWSDATA API key",
            ),
            FetchError::Upstream { payload } => {
                Self::bad_gateway(ApiErrorCode::UPSTREAM_ERROR, payload)
            }
            FetchError::Http(e) => {
                Self::bad_gateway(ApiErrorCode::UPSTREAM_ERROR, e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        (self.status_code, Json(self)).into_response()
    }
}
