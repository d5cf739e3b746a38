//! External service relays
//!
//! Server-side calls to the third-party email and generative-text APIs.
//! Keeping these behind the API means the credentials are never shipped
//! to a browser.

pub mod assistant;
pub mod mailer;
