//! Shared types for the catalog service
//!
//! Wire-level request/response types used on both sides of the HTTP
//! boundary: the product catalog models and the auth, contact form, and
//! assistant DTOs.

pub mod client;
pub mod models;

// Re-exports
pub use client::{
    ApiMessage, AssistantReply, AssistantRequest, ContactRequest, LoginRequest, LoginResponse,
};
pub use models::{DeliveryTier, Product, ProductCreate, ProductUpdate, in_stock};
