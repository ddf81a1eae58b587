//! User, company and role data structures

use serde::{Deserialize, Serialize};

/// Access level of a dashboard user.
///
/// The backend is the authority on role names; strings outside the known
/// set are carried through as [`Role::Other`] and grant no capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Funcionario,
    Coordenador,
    Direcao,
    SuperAdmin,
    Franqueadora,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Funcionario => "funcionario",
            Role::Coordenador => "coordenador",
            Role::Direcao => "direcao",
            Role::SuperAdmin => "super_admin",
            Role::Franqueadora => "franqueadora",
            Role::Other(s) => s,
        }
    }

    /// Roles with management capabilities.
    pub fn is_manager(&self) -> bool {
        matches!(
            self,
            Role::Coordenador | Role::Direcao | Role::SuperAdmin | Role::Franqueadora
        )
    }

    /// Roles that are not bound to a single company.
    pub fn is_company_exempt(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Franqueadora)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "funcionario" => Role::Funcionario,
            "coordenador" => Role::Coordenador,
            "direcao" => Role::Direcao,
            "super_admin" => Role::SuperAdmin,
            "franqueadora" => Role::Franqueadora,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A dashboard user, as held in memory and persisted under the `user` key.
///
/// Field names serialize in camelCase so the stored record matches the
/// entries written by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// The tenant the user belongs to. Absent only for company-exempt roles.
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl User {
    /// Apply a partial update in place. Fields left `None` are untouched.
    pub fn merge(&mut self, update: UserUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(company_id) = update.company_id {
            self.company_id = Some(company_id);
        }
        if let Some(company_name) = update.company_name {
            self.company_name = Some(company_name);
        }
    }
}

/// A tenant the dashboard scopes data to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Partial user record for profile updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for name in [
            "funcionario",
            "coordenador",
            "direcao",
            "super_admin",
            "franqueadora",
        ] {
            let role = Role::from(name.to_string());
            assert!(!matches!(role, Role::Other(_)));
            assert_eq!(role.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_role_passes_through() {
        let role = Role::from("estagiario".to_string());
        assert_eq!(role, Role::Other("estagiario".to_string()));
        assert!(!role.is_manager());
        assert!(!role.is_company_exempt());

        // Survives a serialize/deserialize cycle unchanged
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#""estagiario""#);
        assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
    }

    #[test]
    fn test_capability_helpers() {
        assert!(Role::Coordenador.is_manager());
        assert!(Role::Direcao.is_manager());
        assert!(Role::SuperAdmin.is_manager());
        assert!(Role::Franqueadora.is_manager());
        assert!(!Role::Funcionario.is_manager());

        assert!(Role::SuperAdmin.is_company_exempt());
        assert!(Role::Franqueadora.is_company_exempt());
        assert!(!Role::Coordenador.is_company_exempt());
    }

    #[test]
    fn test_user_persists_camel_case() {
        let user = User {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "123".to_string(),
            role: Role::Funcionario,
            company_id: Some(5),
            company_name: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["companyId"], 5);
        assert!(json.get("companyName").is_none());
        assert!(json.get("company_id").is_none());
    }

    #[test]
    fn test_merge_partial_fields() {
        let mut user = User {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "123".to_string(),
            role: Role::Funcionario,
            company_id: Some(5),
            company_name: None,
        };

        user.merge(UserUpdate {
            phone: Some("456".to_string()),
            company_name: Some("Unidade Centro".to_string()),
            ..Default::default()
        });

        assert_eq!(user.phone, "456");
        assert_eq!(user.company_name.as_deref(), Some("Unidade Centro"));
        // Untouched fields keep their values
        assert_eq!(user.name, "Ana");
        assert_eq!(user.company_id, Some(5));
    }
}
