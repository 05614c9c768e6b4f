use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(ModelError::Validation(format!("unknown role '{other}' (expected user|admin)"))),
        }
    }
}

/// Application account. The password is stored as given (plaintext).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self { username: username.into(), password: password.into(), role, extra: Map::new() }
    }
}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("username required".into()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.is_empty() {
        return Err(ModelError::Validation("password required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" user ".parse::<Role>(), Ok(Role::User));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() -> anyhow::Result<()> {
        let u = User::new("vipin", "admin123", Role::Admin);
        let v = serde_json::to_value(&u)?;
        assert_eq!(v["role"], "admin");
        let back: User = serde_json::from_value(v)?;
        assert_eq!(back, u);
        Ok(())
    }

    #[test]
    fn unknown_user_keys_are_kept() -> anyhow::Result<()> {
        let u: User = serde_json::from_str(r#"{"username":"a","password":"p","role":"user","email":"a@x.io"}"#)?;
        assert_eq!(u.extra["email"], "a@x.io");
        assert_eq!(serde_json::to_value(&u)?["email"], "a@x.io");
        Ok(())
    }

    #[test]
    fn blank_username_rejected() {
        assert!(validate_username("   ").is_err());
        assert!(validate_username("rahul").is_ok());
        assert!(validate_password("").is_err());
    }
}
