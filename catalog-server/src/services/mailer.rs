//! Contact-form email relay
//!
//! Forwards the contact form field map to the EmailJS REST API. No retry
//! is attempted; a failed send surfaces to the caller as a 502.

use serde_json::json;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::client::ContactRequest;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Relay one contact-form submission to the transactional-email API.
pub async fn send_contact(state: &ServerState, form: &ContactRequest) -> AppResult<()> {
    let Some((service_id, template_id, user_id)) = state.config.mailer.credentials() else {
        return Err(AppError::unavailable("Contact form is not configured"));
    };

    let body = json!({
        "service_id": service_id,
        "template_id": template_id,
        "user_id": user_id,
        "template_params": {
            "name": form.name,
            "email": form.email,
            "phone": form.phone.as_deref().unwrap_or_default(),
            "subject": form.subject,
            "message": form.message,
        },
    });

    let resp = state
        .http
        .post(EMAILJS_SEND_URL)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::upstream("Contact", e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(AppError::upstream(
            "Contact",
            format!("status {status}: {detail}"),
        ));
    }

    tracing::info!(subject = %form.subject, "Contact message relayed");
    Ok(())
}
