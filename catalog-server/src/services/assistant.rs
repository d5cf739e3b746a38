//! Generative-text assistant relay
//!
//! Builds the support prompt (company details plus a live stock summary
//! rendered from the repository) and relays it to the Generative Language
//! API. Candidate text parts are concatenated into the single reply the
//! chat widget expects.

use serde::Deserialize;
use serde_json::json;

use crate::core::{CompanyInfo, ServerState};
use crate::db::models::Product;
use crate::utils::{AppError, AppResult};
use shared::models::DeliveryTier;

const GENERATE_CONTENT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Relay one visitor question and return the assistant's reply.
pub async fn ask(state: &ServerState, message: &str, products: &[Product]) -> AppResult<String> {
    let Some(api_key) = state.config.assistant.api_key.as_deref() else {
        return Err(AppError::unavailable("Assistant is not configured"));
    };

    let prompt = build_prompt(&state.config.company, message, products);
    let url = format!(
        "{GENERATE_CONTENT_BASE}/{}:generateContent",
        state.config.assistant.model
    );

    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
    });

    let resp = state
        .http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::upstream("Assistant", e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(AppError::upstream(
            "Assistant",
            format!("status {status}: {detail}"),
        ));
    }

    let parsed: GenerateContentResponse = resp
        .json()
        .await
        .map_err(|e| AppError::upstream("Assistant", e.to_string()))?;

    let reply = collect_reply(parsed);
    if reply.is_empty() {
        return Err(AppError::upstream(
            "Assistant",
            "response contained no text candidates".to_string(),
        ));
    }

    Ok(reply)
}

/// Concatenate every text part of the first candidate into one reply.
fn collect_reply(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Support-assistant prompt with company context and current stock.
fn build_prompt(company: &CompanyInfo, message: &str, products: &[Product]) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are a helpful customer support assistant for {}. \
         You specialize in answering customer inquiries about roofing \
         products and services, including roof installation, repair, and \
         maintenance. Respond to the following customer query \
         professionally and helpfully.\n\n",
        company.name
    ));

    prompt.push_str("Company info:\n");
    if let Some(phone) = &company.phone {
        prompt.push_str(&format!("phone: {phone}\n"));
    }
    if let Some(email) = &company.email {
        prompt.push_str(&format!("email: {email}\n"));
    }
    if let Some(address) = &company.address {
        prompt.push_str(&format!("address: {address}\n"));
    }

    prompt.push_str("\nCurrent stock:\n");
    for product in products {
        let tier = DeliveryTier::from_stock(product.availability, product.quantity);
        prompt.push_str(&format!(
            "- {} ({}): {:.2} per unit, {} in stock, {}, delivery {}\n",
            product.name,
            product.category,
            product.price,
            product.quantity,
            if product.availability {
                "In Stock"
            } else {
                "Out of Stock"
            },
            tier,
        ));
    }

    prompt.push_str(&format!("\nCustomer: \"{message}\"\n"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_product(name: &str, quantity: i64) -> Product {
        let now = chrono::Utc::now().timestamp_millis();
        Product {
            id: None,
            name: name.into(),
            category: "metal".into(),
            description: None,
            price: Decimal::from(300),
            quantity,
            availability: quantity > 0,
            image_url: "https://cdn.example.com/sheet.jpg".into(),
            features: vec![],
            estimated_delivery: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn company() -> CompanyInfo {
        CompanyInfo {
            name: "Amman Roofing".into(),
            phone: Some("555-0100".into()),
            email: None,
            address: None,
        }
    }

    #[test]
    fn prompt_includes_company_stock_and_question() {
        let products = vec![sample_product("Roofing Sheets", 100)];
        let prompt = build_prompt(&company(), "Do you have metal sheets?", &products);

        assert!(prompt.contains("Amman Roofing"));
        assert!(prompt.contains("phone: 555-0100"));
        assert!(prompt.contains("Roofing Sheets"));
        assert!(prompt.contains("2-3 business days"));
        assert!(prompt.contains("Customer: \"Do you have metal sheets?\""));
    }

    #[test]
    fn prompt_marks_out_of_stock_items() {
        let products = vec![sample_product("Ashpalt Shingles", 0)];
        let prompt = build_prompt(&company(), "any shingles?", &products);

        assert!(prompt.contains("Out of Stock"));
        assert!(prompt.contains("delivery Out of stock"));
    }

    #[test]
    fn reply_concatenates_candidate_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        CandidatePart {
                            text: Some("Yes, ".into()),
                        },
                        CandidatePart {
                            text: Some("we stock them.".into()),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(collect_reply(response), "Yes, we stock them.");
    }
}
