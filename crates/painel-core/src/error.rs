//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] painel_storage::StorageError),

    #[error("Webhook error: {0}")]
    Webhook(#[from] painel_webhook::WebhookError),

    #[error("Session error: {0}")]
    Auth(#[from] painel_session::AuthError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
