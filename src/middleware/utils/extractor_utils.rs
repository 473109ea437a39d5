use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::{
    async_trait,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::middleware::error::ErrorResponseBody;

/// JSON body extractor that rejects with the app's `{error, req_id}` body
/// instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + Sync + 'static,
{
    type Rejection = Response;

    async fn from_request(req: Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type_header = req.headers().get(CONTENT_TYPE);
        let content_type = content_type_header.and_then(|value| value.to_str().ok());

        if let Some(content_type) = content_type {
            if content_type.starts_with("application/json") {
                let Json(payload) = Json::<T>::from_request(req, &()).await.map_err(
                    |err: JsonRejection| {
                        let body: String = ErrorResponseBody::new(err.body_text(), None).into();
                        (
                            StatusCode::BAD_REQUEST,
                            [(CONTENT_TYPE, "application/json")],
                            body,
                        )
                            .into_response()
                    },
                )?;
                return Ok(Self(payload));
            }
        }

        Err(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response())
    }
}

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

/// Query params for paginated listings. Raw strings so that non-numeric
/// input falls back to the defaults instead of rejecting the request.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Missing, non-numeric and non-positive values resolve to 50, anything
    /// above 100 clamps to 100.
    pub fn effective_limit(&self) -> usize {
        match self.limit.as_deref().and_then(|v| v.parse::<i64>().ok()) {
            Some(n) if n > 0 => (n as usize).min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        }
    }

    /// Missing, non-numeric and negative values resolve to 0.
    pub fn effective_offset(&self) -> usize {
        match self.offset.as_deref().and_then(|v| v.parse::<i64>().ok()) {
            Some(n) if n > 0 => n as usize,
            _ => 0,
        }
    }
}

pub const UNSPECIFIED_IP: &str = "0.0.0.0";

/// First value of the forwarding header. Advisory only - a fraud/audit
/// signal for the withdrawal service, never an authorization input.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNSPECIFIED_IP.to_string())
}
