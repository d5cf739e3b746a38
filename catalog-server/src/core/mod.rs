//! Core module - configuration, state, and server loop

pub mod config;
pub mod server;
pub mod state;

pub use config::{AssistantConfig, CompanyInfo, Config, MailerConfig};
pub use server::Server;
pub use state::ServerState;
