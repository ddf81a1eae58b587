//! Painel Session Management
//!
//! The session store for the multi-tenant dashboard:
//! - restores identity and tenant selection from persisted storage on startup
//! - derives role-based capability flags from the current state
//! - resolves the effective tenant for franchisor users
//! - performs the login, password-reset and company-listing webhook calls
//!
//! Sessions persist on any mutation and are cleared on logout.

mod error;
mod store;
mod user;
mod wire;

pub use error::AuthError;
pub use store::{SessionStore, KEY_SELECTED_COMPANY, KEY_USER};
pub use user::{Company, Role, User, UserUpdate};

pub type Result<T> = std::result::Result<T, AuthError>;
