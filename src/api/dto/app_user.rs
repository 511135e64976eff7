//! User transfer objects. The password hash is never serialized.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::audit::AuditDto;
use super::trimmed;
use crate::application::services::{UserChanges, UserRegistration};
use crate::domain::entities::AppUser;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppUserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub user_name: String,
    pub email: String,
    pub image_path: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

impl From<AppUser> for AppUserDto {
    fn from(user: AppUser) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            user_name: user.user_name,
            email: user.email,
            image_path: user.image_path,
            audit: user.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAppUserRequest {
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 3, max = 50, message = "User name must be 3-50 characters"))]
    pub user_name: String,
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
    pub image_path: Option<String>,
}

impl From<CreateAppUserRequest> for UserRegistration {
    fn from(req: CreateAppUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            user_name: req.user_name,
            email: req.email,
            password: req.password,
            image_path: req.image_path,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAppUserRequest {
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 3, max = 50, message = "User name must be 3-50 characters"))]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub image_path: Option<Option<String>>,
}

impl From<UpdateAppUserRequest> for UserChanges {
    fn from(req: UpdateAppUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            user_name: req.user_name,
            email: req.email,
            password: req.password,
            image_path: req.image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Audit;
    use chrono::Utc;

    #[test]
    fn test_dto_omits_password_hash() {
        let dto = AppUserDto::from(AppUser {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$pbkdf2-sha256$i=600000,l=32$c2FsdA$aGFzaA".to_string(),
            image_path: None,
            audit: Audit::created(Utc::now()),
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value["full_name"], "Ada Lovelace");
    }

    #[test]
    fn test_create_request_rejects_bad_email_and_short_password() {
        let req = CreateAppUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            image_path: None,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_blank_names_fail_after_trimming() {
        let req: CreateAppUserRequest = serde_json::from_str(
            r#"{
                "first_name": " ",
                "last_name": "Lovelace",
                "user_name": "   ",
                "email": "  ada@example.com ",
                "password": "long-enough"
            }"#,
        )
        .unwrap();

        assert_eq!(req.email, "ada@example.com");
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("user_name"));
        assert!(fields.contains_key("first_name"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_padded_user_name_counts_trimmed_length() {
        let req: UpdateAppUserRequest = serde_json::from_str(r#"{"user_name": "  ab  "}"#).unwrap();

        assert_eq!(req.user_name.as_deref(), Some("ab"));
        assert!(req.validate().is_err());
    }
}
