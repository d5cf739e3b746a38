//! Contact form handler
//!
//! Validates the form fields and relays them to the transactional-email
//! service. The relay credentials never leave the server.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::services::mailer;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use shared::ApiMessage;
use shared::client::ContactRequest;

/// POST /api/contact
pub async fn submit(
    State(state): State<ServerState>,
    Json(form): Json<ContactRequest>,
) -> AppResult<Json<ApiMessage>> {
    validate_required_text(&form.name, "name", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&form.subject, "subject", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.message, "message", MAX_NOTE_LEN)?;
    validate_optional_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    mailer::send_contact(&state, &form).await?;

    Ok(Json(ApiMessage::new("Message sent")))
}
