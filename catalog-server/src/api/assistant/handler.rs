//! Assistant chat handler
//!
//! Relays visitor questions to the generative-text API with the company
//! context and current stock summary. The API key never reaches the
//! browser.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::services::assistant;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use shared::client::{AssistantReply, AssistantRequest};

/// POST /api/assistant
pub async fn chat(
    State(state): State<ServerState>,
    Json(req): Json<AssistantRequest>,
) -> AppResult<Json<AssistantReply>> {
    validate_required_text(&req.message, "message", MAX_NOTE_LEN)?;

    let products = state.product_repository().find_all().await?;
    let reply = assistant::ask(&state, &req.message, &products).await?;

    Ok(Json(AssistantReply { reply }))
}
