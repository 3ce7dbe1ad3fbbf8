use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod mailer;
pub mod model;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
