//! Generic CRUD route factory for the admin-managed content kinds.
//!
//! One parameterized router replaces four near-identical hand-written route
//! sets, so the admin gate and validation cannot be forgotten on any of them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Router,
};
use tracing::info;

use crate::auth::extractors::AdminUser;
use crate::error::{ApiError, MessageResponse};
use crate::extract::Json;
use crate::state::AppState;
use crate::store::{ContentStore, Crud, Record};
use crate::validate::Validate;

pub fn admin_router<R>() -> Router<AppState>
where
    R: Record,
    dyn ContentStore: Crud<R>,
{
    Router::new()
        .route("/", post(create_one::<R>))
        .route("/:id", put(update_one::<R>).delete(delete_one::<R>))
}

/// Public, unauthenticated list endpoint shared by all content kinds.
pub async fn list_all<R>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiError>
where
    R: Record,
    dyn ContentStore: Crud<R>,
{
    let rows = Crud::<R>::list(state.store.as_ref()).await?;
    Ok(Json(rows))
}

async fn create_one<R>(
    State(state): State<AppState>,
    AdminUser(session): AdminUser,
    Json(input): Json<R::Create>,
) -> Result<(StatusCode, Json<R>), ApiError>
where
    R: Record,
    dyn ContentStore: Crud<R>,
{
    input.validate().map_err(ApiError::Validation)?;
    let row = Crud::<R>::create(state.store.as_ref(), input).await?;
    info!(kind = R::KIND, id = row.id(), user_id = session.user_id, "created");
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update_one<R>(
    State(state): State<AppState>,
    AdminUser(session): AdminUser,
    Path(id): Path<i64>,
    Json(patch): Json<R::Update>,
) -> Result<Json<R>, ApiError>
where
    R: Record,
    dyn ContentStore: Crud<R>,
{
    patch.validate().map_err(ApiError::Validation)?;
    let row = Crud::<R>::update(state.store.as_ref(), id, patch)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    info!(kind = R::KIND, id, user_id = session.user_id, "updated");
    Ok(Json(row))
}

async fn delete_one<R>(
    State(state): State<AppState>,
    AdminUser(session): AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: Record,
    dyn ContentStore: Crud<R>,
{
    if !Crud::<R>::delete(state.store.as_ref(), id).await? {
        return Err(not_found::<R>(id));
    }
    info!(kind = R::KIND, id, user_id = session.user_id, "deleted");
    Ok(Json(MessageResponse::new(format!("Deleted {} {id}", R::KIND))))
}

fn not_found<R: Record>(id: i64) -> ApiError {
    ApiError::not_found(format!("No {} with id {id}", R::KIND))
}
