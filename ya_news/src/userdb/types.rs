use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered reader of the site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Login name, unique across the site
    pub username: String,
    /// PBKDF2 hash in `pbkdf2_sha256$<iterations>$<salt>$<hash>` form
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user is a site administrator
    ///
    /// Administrators get no extra rights over other people's comments.
    pub is_admin: bool,
    /// When the user account was created
    pub created_at: DateTime<Utc>,
    /// When the user account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            password_hash,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}
