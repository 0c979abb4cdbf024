// Canonical user model. Normalized from the upstream directory shape in
// `crate::convert`; the split first/last name, role, status, and
// timestamps are synthesized locally and do not exist upstream.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::{Entity, Matchable, Status};

/// User role. Upstream has no concept of roles; every normalized user
/// starts as [`UserRole::User`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Moderator,
}

impl UserRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Canonical user. The id is a string even though the upstream
/// directory uses numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub status: Status,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub company: Option<Company>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// "First Last", falling back to whichever half exists.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => self.email.clone(),
        }
    }

    /// Uppercase initials, e.g. "Jane Doe" -> "JD".
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Matchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ];
        if let Some(username) = &self.username {
            fields.push(username);
        }
        fields
    }

    fn facet(&self) -> Option<&str> {
        Some(self.role.as_str())
    }
}

/// Input for creating a user. The password is accepted for parity with
/// registration flows but is never sent to the public directory.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub password: Option<SecretString>,
}

/// Partial update; `None` fields are left unchanged upstream.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<Status>,
}

impl UpdateUserInput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: "1".into(),
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            role: UserRole::User,
            status: Status::Active,
            username: Some("jdoe".into()),
            phone: None,
            website: None,
            address: None,
            company: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_and_initials() {
        let user = sample_user();
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = sample_user();
        user.first_name.clear();
        user.last_name.clear();
        assert_eq!(user.display_name(), "jane@example.com");
        assert_eq!(user.initials(), "");
    }

    #[test]
    fn facet_is_role() {
        let user = sample_user();
        assert_eq!(user.facet(), Some("user"));
        assert!(user.search_fields().contains(&"jdoe"));
    }
}
