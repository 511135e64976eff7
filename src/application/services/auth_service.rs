//! Authentication service: credential checks and HS256 access tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::config::AppSettings;
use crate::domain::entities::{AppUser, BaseEntity};
use crate::domain::repositories::AppUserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;

/// JWT payload carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// User name at issue time.
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity attached to a request after its bearer token has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub user_name: String,
}

/// Service for signing users in and validating their bearer tokens.
///
/// Tokens are HS256 JWTs signed with [`AppSettings::secret_key`]. A token is
/// only accepted while its user still exists and is not soft-deleted.
pub struct AuthService<R: AppUserRepository> {
    repository: Arc<R>,
    settings: AppSettings,
}

impl<R: AppUserRepository> AuthService<R> {
    pub fn new(repository: Arc<R>, settings: AppSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// `login` is matched against the e-mail address first, then the user name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the password
    /// does not match. Both cases produce the same message.
    pub async fn login(&self, login: &str, password: &str) -> Result<(AppUser, IssuedToken), AppError> {
        let login = login.trim();

        let user = match self.repository.find_by_email(login).await? {
            Some(user) => Some(user),
            None => self.repository.find_by_user_name(login).await?,
        };

        let user = match user {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                tracing::info!(login, "Rejected login attempt");
                return Err(invalid_credentials());
            }
        };

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = user.id, "User signed in");

        Ok((user, token))
    }

    /// Signs an access token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user: &AppUser) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.settings.token_ttl_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.user_name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.secret_key.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue token", json!({}))
        })?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Checks signature and expiry of `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged or expired tokens.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.secret_key.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid or expired token"}))
        })
    }

    /// Validates `token` and resolves it to a live user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or its user
    /// has been deleted.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.validate_token(token)?;

        let id: i64 = claims.sub.parse().map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid token subject"}))
        })?;

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .filter(|user| !user.is_deleted())
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({"reason": "User no longer exists"}))
            })?;

        Ok(AuthenticatedUser {
            id: user.id,
            user_name: user.user_name,
        })
    }

    /// Access token lifetime in minutes.
    pub fn token_ttl_minutes(&self) -> i64 {
        self.settings.token_ttl_minutes
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials", json!({}))
}
