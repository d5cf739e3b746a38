//! HTTP client - network communication
//!
//! Typed wrapper over reqwest for the catalog API. Requests carry a hard
//! timeout so abandoned calls do not hang their caller, and no call is
//! ever retried automatically.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use shared::client::{
    ApiMessage, AssistantReply, AssistantRequest, ContactRequest, LoginRequest, LoginResponse,
};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// Network client for the catalog server
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Base URL the client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a login has succeeded on this client
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Drop the stored session token
    pub fn logout(&mut self) {
        self.token = None;
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            // Every error body is a plain {message}
            let message = response
                .json::<ApiMessage>()
                .await
                .map(|m| m.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ClientError::Unauthorized(message)
                }
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                _ => ClientError::Server(message),
            });
        }
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.post(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.put(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.delete(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    // ========== Auth ==========

    /// Log in and keep the session token for subsequent calls
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self
            .post(
                "api/admin/login",
                &LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    // ========== Catalog ==========

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("api/products").await
    }

    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        self.get(&format!("api/products/{id}")).await
    }

    pub async fn create_product(&self, fields: &ProductCreate) -> ClientResult<Product> {
        self.post("api/products", fields).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        fields: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.put(&format!("api/products/{id}"), fields).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<ApiMessage> {
        self.delete(&format!("api/products/{id}")).await
    }

    // ========== Relays ==========

    pub async fn send_contact(&self, form: &ContactRequest) -> ClientResult<ApiMessage> {
        self.post("api/contact", form).await
    }

    pub async fn ask_assistant(&self, message: &str) -> ClientResult<AssistantReply> {
        self.post(
            "api/assistant",
            &AssistantRequest {
                message: message.to_string(),
            },
        )
        .await
    }
}
