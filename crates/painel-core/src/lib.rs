//! Painel Core
//!
//! Wires the session store together: configuration, the persistence
//! database, the webhook client, and the `Portal` object that owns them.

mod config;
mod error;
mod portal;

pub use config::Config;
pub use error::CoreError;
pub use portal::Portal;

// Re-export core components
pub use painel_session::{
    AuthError, Company, Role, SessionStore, User, UserUpdate, KEY_SELECTED_COMPANY, KEY_USER,
};
pub use painel_storage::{Database, StorageError};
pub use painel_webhook::{webhook_url, WebhookClient, WebhookError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
