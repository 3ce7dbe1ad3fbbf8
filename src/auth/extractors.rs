//! Authorization predicates, expressed as extractors so every gated handler
//! states its requirement in its signature.
//!
//! `CurrentUser` rejects with 401 when the request carries no valid session;
//! `AdminUser` additionally rejects with 403 when the session's user lacks the
//! admin flag — the caller is known but not privileged.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::error::ApiError;
use crate::state::AppState;

use super::session::{Session, SESSION_COOKIE};

pub struct CurrentUser(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
        let session = state
            .sessions
            .get(token.value())
            .await
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
        Ok(CurrentUser(session))
    }
}

pub struct AdminUser(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(session) = CurrentUser::from_request_parts(parts, state).await?;
        if !session.is_admin {
            return Err(ApiError::forbidden("Admin access required"));
        }
        Ok(AdminUser(session))
    }
}
