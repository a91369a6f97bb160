//! User domain entity and related types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Numeric user identifier, assigned by the repository.
pub type UserId = i32;

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn normalize_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    let len = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
        return Err(DomainError::validation(format!(
            "Name must be between {} and {} characters",
            MIN_NAME_LENGTH, MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

fn checked_email(email: &str) -> DomainResult<String> {
    let email = normalize_email(email);
    match email.split_once('@') {
        Some((local, host)) if !local.is_empty() && !host.is_empty() => Ok(email),
        _ => Err(DomainError::validation("Invalid email address")),
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a freshly created user. Both timestamps are set to `now`.
    pub fn from_new(id: UserId, new_user: NewUser, now: DateTime<Utc>) -> Self {
        let (email, name) = new_user.into_parts();
        Self {
            id,
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into this user and refresh `updated_at`.
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}

/// Payload for creating a user. Email is lowercase, name is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    email: String,
    name: String,
}

impl NewUser {
    /// Build a creation payload, normalizing and checking both fields.
    pub fn new(email: &str, name: &str) -> DomainResult<Self> {
        Ok(Self {
            email: checked_email(email)?,
            name: normalize_name(name)?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, String) {
        (self.email, self.name)
    }
}

/// Partial update of a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UserChanges {
    /// Build a change set, normalizing whichever fields are present.
    pub fn new(email: Option<&str>, name: Option<&str>) -> DomainResult<Self> {
        Ok(Self {
            email: email.map(checked_email).transpose()?,
            name: name.map(normalize_name).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier, rendered as a string
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Lowercase email address
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// ISO-8601 creation timestamp
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01T12:00:00.000Z"))]
    pub created_at: String,
    /// ISO-8601 last modification timestamp
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01T12:00:00.000Z"))]
    pub updated_at: String,
}

fn iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: iso8601(&user.created_at),
            updated_at: iso8601(&user.updated_at),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}
