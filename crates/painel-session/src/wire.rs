//! Webhook payload parsing
//!
//! The webhooks are loosely typed: scalar fields arrive as strings or
//! numbers, the tenant id comes under either of two names, and the company
//! listing has two accepted shapes. All of that tolerance lives here, so the
//! rest of the crate only sees typed values.

use serde_json::Value;

use crate::user::{Company, Role, User};
use crate::AuthError;
use crate::Result;

/// A decoded login response: the `success` marker plus the raw user object,
/// if one was present.
pub struct LoginReply {
    pub success: bool,
    pub user: Option<Value>,
}

pub fn parse_login_reply(value: &Value) -> LoginReply {
    LoginReply {
        success: value.get("success").and_then(Value::as_bool).unwrap_or(false),
        user: value.get("user").filter(|u| u.is_object()).cloned(),
    }
}

/// Build a session [`User`] from the raw user object of a login reply.
///
/// The tenant id is read from `company_id`, falling back to `companyId`
/// whenever the first is falsy (absent, null, `""`, `0`, `false`), and
/// coerced to an integer; a failed coercion is an error unless the role is
/// company-exempt, in which case the user simply has no tenant binding.
pub fn user_from_payload(user: &Value) -> Result<User> {
    let raw_company_id = user
        .get("company_id")
        .filter(|v| !is_falsy(v))
        .or_else(|| user.get("companyId"))
        .cloned()
        .unwrap_or(Value::Null);

    let company_id = coerce_int(&raw_company_id);
    let role = Role::from(coerce_string(user.get("role")));

    if company_id.is_none() && !role.is_company_exempt() {
        tracing::error!(raw = %raw_company_id, "Invalid company id in login response");
        return Err(AuthError::InvalidCompanyData);
    }

    Ok(User {
        id: coerce_string(user.get("id")),
        name: coerce_string(user.get("name")),
        email: coerce_string(user.get("email")),
        phone: coerce_string(user.get("phone")),
        role,
        company_id,
        company_name: user
            .get("companyName")
            .filter(|v| !is_falsy(v))
            .map(|v| coerce_string(Some(v)))
            .filter(|s| !s.is_empty()),
    })
}

/// Decode a company listing. Accepts a bare array or an object with a
/// `companies` array; anything else is `None` (caller keeps its state).
pub fn parse_companies(value: &Value) -> Option<Vec<Company>> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(map) => map.get("companies").filter(|v| v.is_array())?,
        _ => return None,
    };

    serde_json::from_value(list.clone()).ok()
}

/// Truthiness of a JSON value, JavaScript style: null, `false`, `0` and the
/// empty string are falsy, everything else is truthy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Stringify a scalar field that may arrive as a string, number or bool.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Integer coercion with `parseInt` semantics: optional sign, leading
/// digits, trailing garbage ignored. No leading digits means failure.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, s.strip_prefix('+').unwrap_or(s)),
            };
            let digits: &str = {
                let end = digits
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(digits.len());
                &digits[..end]
            };
            digits.parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}
