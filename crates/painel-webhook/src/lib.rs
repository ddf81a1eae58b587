//! Painel Webhook Transport
//!
//! All remote calls go through a fixed webhook prefix: one JSON POST per
//! operation, no retries, response status left to the caller's semantics.

mod client;
mod error;

pub use client::{webhook_url, WebhookClient};
pub use error::WebhookError;

/// Path suffix of the login webhook.
pub const PATH_LOGIN: &str = "login";
/// Path suffix of the password-reset webhook.
pub const PATH_RESET_PASSWORD: &str = "reset-password";
/// Path suffix of the company-listing webhook.
pub const PATH_LIST_COMPANIES: &str = "listar-empresas";

pub type Result<T> = std::result::Result<T, WebhookError>;
