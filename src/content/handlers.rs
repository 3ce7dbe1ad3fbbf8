use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::Crud;

use super::model::Project;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

/// `GET /projects?category=` — no category (or the `Tous` sentinel) returns
/// everything; anything else is an exact match on the free-text category.
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = match query.category.as_deref() {
        Some(category) => state.store.projects_by_category(category).await?,
        None => Crud::<Project>::list(state.store.as_ref()).await?,
    };
    Ok(Json(projects))
}
