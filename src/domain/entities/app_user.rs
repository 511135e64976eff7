//! Back-office user entity.

use super::audit::{Audit, BaseEntity};

/// A user allowed to sign in and manage content.
///
/// `password_hash` is a PBKDF2 PHC string produced by
/// [`crate::utils::password::hash_password`]; the plain password is never stored.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AppUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub image_path: Option<String>,
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl AppUser {
    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl BaseEntity for AppUser {
    const TABLE: &'static str = "app_users";

    fn id(&self) -> i64 {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }
}

/// Input data for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub image_path: Option<String>,
}

/// Partial update for an existing user.
///
/// `image_path: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppUserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub image_path: Option<Option<String>>,
}
