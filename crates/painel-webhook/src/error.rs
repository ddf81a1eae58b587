//! Webhook error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Invalid webhook base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
