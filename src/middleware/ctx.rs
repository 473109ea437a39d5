use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    http::StatusCode,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use super::error::{AppError, AppResult, CtxError, CtxResult};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};

/// Request identity resolved once per request. Handlers call `user_id()` and
/// bail with 401 before touching any collaborator.
#[derive(Clone, Debug)]
pub struct Ctx {
    result_user_id: AppResult<String>,
}

impl Ctx {
    pub fn new(result_user_id: AppResult<String>) -> Self {
        Self { result_user_id }
    }

    pub fn user_id(&self) -> CtxResult<String> {
        self.result_user_id
            .clone()
            .map_err(|error| self.to_ctx_error(error))
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError {
            req_id: Uuid::new_v4(),
            error,
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<CtxState>> for Ctx {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state): State<Arc<CtxState>> = State::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        let cookies = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let jwt_user_id: Result<String, AppError> = match cookies.get(JWT_KEY) {
            Some(cookie) => match app_state.jwt.decode(cookie.value()) {
                Ok(claims) => Ok(claims.sub),
                Err(_) => Err(AppError::AuthFailNoJwtCookie),
            },
            None => Err(AppError::AuthFailNoJwtCookie),
        };

        Ok(Ctx::new(jwt_user_id))
    }
}
