use std::fmt;

use axum::http::header::CONTENT_TYPE;
use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    Validation { description: String },
    AuthFailNoJwtCookie,
    AuthenticationFail { description: String },
    BountyStore { source: String },
    WithdrawalGateway { source: String },
}

/// CtxError carries the req_id reported to the client and implements IntoResponse.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error for storing before composing a response.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

const INTERNAL: &str = "Internal Server Error";
const UNAUTHORIZED: &str = "Unauthorized";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::Validation { description } => write!(f, "{description}"),
            Self::AuthFailNoJwtCookie => write!(f, "{UNAUTHORIZED}"),
            // identity rejections from collaborators keep their own wording
            Self::AuthenticationFail { description } => write!(f, "{description}"),
            // store trouble is never surfaced, the source stays in the logs
            Self::BountyStore { .. } => write!(f, "{INTERNAL}"),
            // withdrawal failures are shown to the authenticated owner of the request
            Self::WithdrawalGateway { source } => write!(f, "{source}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    error: String,
    req_id: String,
}

impl ErrorResponseBody {
    pub fn new(error: String, req_id: Option<String>) -> Self {
        ErrorResponseBody {
            error,
            req_id: req_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }
}

impl From<ErrorResponseBody> for String {
    fn from(value: ErrorResponseBody) -> Self {
        serde_json::to_string(&value).unwrap()
    }
}

// REST error response
impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        println!("->> {:<12} - into_response - {self:?}", "ERROR");
        let status_code = match self.error {
            AppError::Generic { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::AuthFailNoJwtCookie | AppError::AuthenticationFail { .. } => {
                StatusCode::UNAUTHORIZED
            }
            AppError::BountyStore { .. } | AppError::WithdrawalGateway { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let err = self.error.clone();
        let body_str: String =
            ErrorResponseBody::new(self.error.to_string(), Some(self.req_id.to_string())).into();
        let mut response =
            (status_code, [(CONTENT_TYPE, "application/json")], body_str).into_response();
        // Insert the real Error into the response - for the logger
        response.extensions_mut().insert(err);
        response
    }
}
