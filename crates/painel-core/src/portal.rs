//! Portal state container
//!
//! The single explicitly-constructed object consumers hold: it owns the
//! database, the webhook client, and the session store. There is no ambient
//! global state; clone it (cheap, shared Arcs) or pass it by reference.

use painel_session::SessionStore;
use painel_storage::Database;
use painel_webhook::WebhookClient;

use crate::config::Config;
use crate::Result;

pub struct Portal {
    config: Config,
    db: Database,
    session: SessionStore,
}

impl Portal {
    /// Open the database and construct the session store.
    ///
    /// State is not hydrated yet; call [`Portal::initialize`] once at
    /// startup.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let client = WebhookClient::with_timeout(config.webhook_base.as_str(), config.request_timeout)?;
        let session = SessionStore::new(db.clone(), client);

        Ok(Self {
            config,
            db,
            session,
        })
    }

    /// In-memory portal for tests and tooling.
    pub fn in_memory(config: Config) -> Result<Self> {
        let db = Database::open_in_memory()?;
        let client = WebhookClient::with_timeout(config.webhook_base.as_str(), config.request_timeout)?;
        let session = SessionStore::new(db.clone(), client);

        Ok(Self {
            config,
            db,
            session,
        })
    }

    /// Restore persisted session state.
    pub fn initialize(&self) -> Result<()> {
        self.session.initialize()?;
        tracing::info!(
            authenticated = self.session.is_authenticated(),
            "Portal initialized"
        );

        Ok(())
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Portal {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session: self.session.clone(),
        }
    }
}
