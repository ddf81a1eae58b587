//! Session error types
//!
//! The first four variants carry the user-facing messages shown by the
//! dashboard, so `to_string()` is directly displayable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Erro ao conectar com o servidor")]
    Connection,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Dados de empresa inválidos")]
    InvalidCompanyData,

    #[error("Erro ao enviar email de recuperação")]
    ResetEmail,

    #[error("Storage error: {0}")]
    Storage(#[from] painel_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AuthError::Connection.to_string(),
            "Erro ao conectar com o servidor"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Credenciais inválidas"
        );
        assert_eq!(
            AuthError::InvalidCompanyData.to_string(),
            "Dados de empresa inválidos"
        );
        assert_eq!(
            AuthError::ResetEmail.to_string(),
            "Erro ao enviar email de recuperação"
        );
    }
}
