use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::{info, instrument, warn};

use crate::auth::extractors::AdminUser;
use crate::error::{ApiError, MessageResponse};
use crate::extract::Json;
use crate::state::AppState;
use crate::validate::Validate;

use super::dto::{ContactInput, ContactResponse};
use super::model::Contact;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/admin/contacts", get(list_contacts))
        .route("/admin/contacts/:id", axum::routing::delete(delete_contact))
}

/// The notification is a post-commit side effect: once the row is stored the
/// submission has succeeded, and a failed dispatch only flips `emailSent`.
#[instrument(skip(state, input))]
async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    input.validate().map_err(ApiError::Validation)?;

    let contact = state.store.create_contact(input).await?;
    info!(contact_id = contact.id, "contact stored");

    let email_sent = match state.mailer.notify(&contact).await {
        Ok(()) => true,
        Err(error) => {
            warn!(contact_id = contact.id, error = %error, "contact notification failed");
            false
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Message received".into(),
            email_sent,
        }),
    ))
}

#[instrument(skip(state, _admin))]
async fn list_contacts(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.store.list_contacts().await?))
}

#[instrument(skip(state, _admin))]
async fn delete_contact(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.store.delete_contact(id).await? {
        return Err(ApiError::not_found(format!("No contact with id {id}")));
    }
    info!(contact_id = id, "contact deleted");
    Ok(Json(MessageResponse::new("Contact deleted")))
}
