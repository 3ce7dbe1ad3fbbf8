use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod session;
pub mod user;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
