//! # Identity models
//!
//! The authenticated user as the dashboard sees it. These types are
//! `Serialize + Deserialize` with the backend's camelCase field names, so the
//! same struct is read from the login response and written to persisted storage.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserIdentity`] | The signed-in user: database `id`, human-assigned `work_id`, contact and name fields, and [`Role`]. |
//! | [`Role`] | The user's role. Known roles get their own variant; anything else is kept verbatim in [`Role::Other`]. |

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role of a dashboard user, serialised as the backend's lowercase string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    Employee,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            "employee" => Role::Employee,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Database-generated identifier.
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Human-assigned employee identifier.
    pub work_id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    /// Display name as sent by the backend; may be empty.
    #[serde(default)]
    pub name: String,
}

impl UserIdentity {
    /// Get display name, falling back to first/last name and then email.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Deserialize an identifier the backend may send as either a string or a number.
pub fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, first: &str, last: &str) -> UserIdentity {
        UserIdentity {
            id: "u-1".into(),
            work_id: "EMP1".into(),
            email: "a@b.com".into(),
            first_name: first.into(),
            last_name: last.into(),
            role: Role::Manager,
            name: name.into(),
        }
    }

    #[test]
    fn test_role_strings() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("manager"), Role::Manager);
        assert_eq!(Role::from("auditor"), Role::Other("auditor".into()));
        assert_eq!(String::from(Role::Other("auditor".into())), "auditor");
        assert_eq!(Role::Employee.to_string(), "employee");
    }

    #[test]
    fn test_user_from_backend_json() {
        let json = r#"{
            "id": "42",
            "workId": "EMP1",
            "email": "a@b.com",
            "firstName": "Ada",
            "lastName": "Obi",
            "role": "manager",
            "name": "Ada Obi"
        }"#;
        let user: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(user.work_id, "EMP1");
        assert_eq!(user.role, Role::Manager);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], "manager");
        assert_eq!(back["workId"], "EMP1");
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let user: UserIdentity = serde_json::from_str(
            r#"{"id":42,"workId":"EMP2","email":"b@c.com","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(user("Boss", "Ada", "Obi").display_name(), "Boss");
        assert_eq!(user("", "Ada", "Obi").display_name(), "Ada Obi");
        assert_eq!(user(" ", "", "").display_name(), "a@b.com");
    }
}
