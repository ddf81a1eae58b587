//! Session Store
//!
//! Holds the current user, the franchisor's selected company, and the list
//! of companies available to franchisor users. Every mutation persists
//! synchronously, so a restart restores the exact same session.

use parking_lot::RwLock;
use serde_json::json;
use std::sync::Arc;

use painel_storage::Database;
use painel_webhook::{WebhookClient, PATH_LIST_COMPANIES, PATH_LOGIN, PATH_RESET_PASSWORD};

use crate::error::AuthError;
use crate::user::{Company, Role, User, UserUpdate};
use crate::wire;
use crate::Result;

/// Storage key of the persisted user record.
pub const KEY_USER: &str = "user";
/// Storage key of the persisted company selection.
pub const KEY_SELECTED_COMPANY: &str = "selectedCompany";

pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
    /// Only meaningful while the current user is a franchisor.
    selected_company: Arc<RwLock<Option<Company>>>,
    companies: Arc<RwLock<Vec<Company>>>,
    db: Database,
    client: WebhookClient,
}

impl SessionStore {
    pub fn new(db: Database, client: WebhookClient) -> Self {
        Self {
            user: Arc::new(RwLock::new(None)),
            selected_company: Arc::new(RwLock::new(None)),
            companies: Arc::new(RwLock::new(Vec::new())),
            db,
            client,
        }
    }

    /// Restore session state from persisted storage.
    ///
    /// A record that fails to parse, or that lacks an id or a tenant id, is
    /// treated as corrupt: removed and ignored. The company selection is
    /// hydrated independently, so a bad selection never loses the user.
    pub fn initialize(&self) -> Result<()> {
        if let Some(raw) = self.db.get(KEY_USER)? {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) if !user.id.is_empty() && user.company_id.is_some() => {
                    tracing::info!(
                        user_id = %user.id,
                        role = %user.role.as_str(),
                        "Restored session"
                    );
                    *self.user.write() = Some(user);
                }
                Ok(_) => {
                    tracing::warn!("Discarding persisted user without id or company");
                    self.db.remove(KEY_USER)?;
                }
                Err(e) => {
                    tracing::warn!("Discarding unparsable persisted user: {}", e);
                    self.db.remove(KEY_USER)?;
                }
            }
        }

        if let Some(raw) = self.db.get(KEY_SELECTED_COMPANY)? {
            match serde_json::from_str::<Company>(&raw) {
                Ok(company) => *self.selected_company.write() = Some(company),
                Err(e) => {
                    tracing::debug!("Discarding unparsable company selection: {}", e);
                    self.db.remove(KEY_SELECTED_COMPANY)?;
                }
            }
        }

        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn selected_company(&self) -> Option<Company> {
        self.selected_company.read().clone()
    }

    pub fn companies(&self) -> Vec<Company> {
        self.companies.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(&*self.user.read(), Some(u) if u.role == Role::SuperAdmin)
    }

    pub fn is_franqueadora(&self) -> bool {
        matches!(&*self.user.read(), Some(u) if u.role == Role::Franqueadora)
    }

    pub fn is_manager(&self) -> bool {
        matches!(&*self.user.read(), Some(u) if u.role.is_manager())
    }

    /// The tenant id that scopes data queries.
    ///
    /// Franchisors see the company they selected, or every tenant (`None`)
    /// when nothing is selected. Everyone else is pinned to their own
    /// company. `None` while logged out.
    pub fn effective_company_id(&self) -> Option<i64> {
        let user = self.user.read();
        match &*user {
            Some(u) if u.role == Role::Franqueadora => {
                self.selected_company.read().as_ref().map(|c| c.id)
            }
            Some(u) => u.company_id,
            None => None,
        }
    }

    /// Authenticate against the login webhook.
    ///
    /// A single attempt. Transport or JSON failures surface as the generic
    /// connection error; a rejected login leaves the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let body = json!({ "email": email, "password": password });
        let value = self
            .client
            .post_value(PATH_LOGIN, &body)
            .await
            .map_err(|e| {
                tracing::error!("Login request failed: {}", e);
                AuthError::Connection
            })?;

        self.apply_login_reply(&value)
    }

    /// Apply a decoded login response to the store.
    fn apply_login_reply(&self, value: &serde_json::Value) -> Result<()> {
        let reply = wire::parse_login_reply(value);

        if !reply.success {
            return Err(AuthError::InvalidCredentials);
        }

        let raw_user = reply.user.ok_or_else(|| {
            tracing::error!("Login response marked success but carried no user");
            AuthError::Connection
        })?;

        let user = wire::user_from_payload(&raw_user)?;

        let mut slot = self.user.write();
        self.db.set(KEY_USER, &serde_json::to_string(&user)?)?;
        tracing::info!(
            user_id = %user.id,
            role = %user.role.as_str(),
            "Logged in"
        );
        *slot = Some(user);

        Ok(())
    }

    /// Request a password-reset email.
    ///
    /// The response body is never inspected; only a transport failure is an
    /// error.
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        let body = json!({ "email": email });
        self.client
            .post(PATH_RESET_PASSWORD, &body)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!("Password reset request failed: {}", e);
                AuthError::ResetEmail
            })
    }

    /// Refresh the list of companies available to franchisor users.
    ///
    /// Fire and forget: failures and unrecognized payloads leave the current
    /// list unchanged and are only logged.
    pub async fn fetch_companies(&self) {
        match self.client.post_value(PATH_LIST_COMPANIES, &json!({})).await {
            Ok(value) => self.apply_companies(&value),
            Err(e) => tracing::warn!("Company listing request failed: {}", e),
        }
    }

    fn apply_companies(&self, value: &serde_json::Value) {
        match wire::parse_companies(value) {
            Some(companies) => {
                tracing::debug!(count = companies.len(), "Loaded company list");
                *self.companies.write() = companies;
            }
            None => tracing::warn!("Unrecognized company listing shape, keeping current list"),
        }
    }

    /// Set or clear the franchisor's company filter.
    pub fn select_company(&self, company: Option<Company>) -> Result<()> {
        let mut slot = self.selected_company.write();
        match &company {
            Some(c) => self.db.set(KEY_SELECTED_COMPANY, &serde_json::to_string(c)?)?,
            None => self.db.remove(KEY_SELECTED_COMPANY)?,
        }
        *slot = company;

        Ok(())
    }

    /// Clear the session. Purely local, no webhook call.
    pub fn logout(&self) -> Result<()> {
        *self.user.write() = None;
        *self.selected_company.write() = None;
        self.companies.write().clear();

        self.db.remove(KEY_USER)?;
        self.db.remove(KEY_SELECTED_COMPANY)?;

        tracing::info!("Logged out");
        Ok(())
    }

    /// Merge a partial update into the current user and persist the result.
    ///
    /// No-op while logged out. The read-merge-write happens under one write
    /// lock, so a concurrent update can never be clobbered by a stale copy.
    pub fn update_user(&self, update: UserUpdate) -> Result<()> {
        let mut slot = self.user.write();
        if let Some(current) = &*slot {
            let mut merged = current.clone();
            merged.merge(update);
            self.db.set(KEY_USER, &serde_json::to_string(&merged)?)?;
            *slot = Some(merged);
        }

        Ok(())
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            user: Arc::clone(&self.user),
            selected_company: Arc::clone(&self.selected_company),
            companies: Arc::clone(&self.companies),
            db: self.db.clone(),
            client: self.client.clone(),
        }
    }
}
