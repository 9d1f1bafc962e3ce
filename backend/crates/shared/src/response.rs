//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//! `{ "statusCode": 200, "data": ..., "message": "...", "success": true }`.
//! Failures use the same shape with `data: null` and `success: false`.

use serde::{Deserialize, Serialize};

use crate::error::app_error::AppError;

/// Uniform JSON envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }

    /// 200 OK
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(200, data, message)
    }

    /// 201 Created
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(201, data, message)
    }
}

impl ApiResponse<()> {
    /// Envelope for a failed request. `()` serializes as `null`.
    pub fn failure(err: &AppError) -> Self {
        Self::new(err.status_code(), (), err.public_message())
    }
}

#[cfg(feature = "axum")]
mod http_impls {
    use axum::Json;
    use axum::extract::{FromRequest, Request};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiResponse;
    use crate::error::app_error::AppError;

    impl<T: Serialize> IntoResponse for ApiResponse<T> {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(self)).into_response()
        }
    }

    /// JSON body extractor whose rejection is an enveloped 400
    ///
    /// `axum::Json` rejects with a plain-text body; handlers use `Payload`
    /// so that malformed bodies still produce the envelope.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Payload<T>(pub T);

    impl<T, S> FromRequest<S> for Payload<T>
    where
        T: DeserializeOwned,
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(Payload(value)),
                Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
            }
        }
    }

    /// Fallback handler for paths no router matched
    pub async fn route_not_found() -> ApiResponse<()> {
        ApiResponse::failure(&AppError::not_found("Route not found"))
    }
}

#[cfg(feature = "axum")]
pub use http_impls::{Payload, route_not_found};
