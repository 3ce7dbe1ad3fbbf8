use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use time::Duration;
use tracing::{info, instrument, warn};

use crate::error::{ApiError, MessageResponse};
use crate::extract::Json;
use crate::state::AppState;

use super::dto::{AuthStatus, LoginRequest, SessionUser};
use super::extractors::CurrentUser;
use super::password::verify_password;
use super::session::SESSION_COOKIE;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/status", get(status))
}

#[instrument(skip(state, jar, payload))]
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>), ApiError> {
    payload.username = payload.username.trim().to_string();

    // Unknown username and wrong password answer identically so callers
    // cannot enumerate accounts.
    let Some(user) = state.store.user_by_username(&payload.username).await? else {
        warn!(username = %payload.username, "login unknown username");
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(username = %payload.username, user_id = user.id, "login invalid password");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.sessions.create(&user).await;
    let cookie = session_cookie(token, Duration::hours(state.config.session_ttl_hours));

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok((
        jar.add(cookie),
        Json(SessionUser {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }),
    ))
}

#[instrument(skip(state, jar))]
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.sessions.destroy(cookie.value()).await {
            info!("session destroyed");
        }
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Json(MessageResponse::new("Logged out")))
}

async fn status(user: Option<CurrentUser>) -> Json<AuthStatus> {
    let status = match user {
        Some(CurrentUser(session)) => AuthStatus {
            authenticated: true,
            username: Some(session.username),
            is_admin: Some(session.is_admin),
        },
        None => AuthStatus {
            authenticated: false,
            username: None,
            is_admin: None,
        },
    };
    Json(status)
}

fn session_cookie(token: String, ttl: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(ttl)
        .build()
}
