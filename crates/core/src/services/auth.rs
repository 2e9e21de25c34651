//! Admin registration and login.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::LazyLock;

use chrono::Utc;
use menuboard_common::{AppError, AppResult};
use menuboard_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::token::TokenIssuer;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_EXISTS: &str = "This user already exists";

/// Hash verified against when the email is unknown. Every failed login runs
/// one Argon2 verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("menuboard-unknown-account").ok());

/// Email and password, as submitted to signup and login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialsInput {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub access_token: String,
}

/// Authentication service.
#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    tokens: TokenIssuer,
    registration_enabled: bool,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(
        user_repo: UserRepository,
        tokens: TokenIssuer,
        registration_enabled: bool,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            registration_enabled,
        }
    }

    /// Register a new admin account.
    pub async fn register(&self, input: CredentialsInput) -> AppResult<user::Model> {
        if !self.registration_enabled {
            return Err(AppError::Forbidden("Registration is disabled".to_string()));
        }

        input.validate()?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(USER_EXISTS.to_string()));
        }

        let password_hash = hash_password(&input.password)?;

        let model = user::ActiveModel {
            email: Set(input.email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let user = self.user_repo.create(model).await?;
        tracing::info!(user_id = user.id, "Registered user");

        Ok(user)
    }

    /// Check credentials and issue an access token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, input: CredentialsInput) -> AppResult<LoginOutput> {
        input.validate()?;

        let Some(user) = self.user_repo.find_by_email(&input.email).await? else {
            if let Some(hash) = DUMMY_HASH.as_deref() {
                verify_password(&input.password, hash)?;
            }
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let access_token = self.tokens.sign(user.id, &user.email)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginOutput { access_token })
    }

    /// Token issuer used by this service.
    #[must_use]
    pub const fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_user(id: i32, email: &str, password: &str) -> user::Model {
        user::Model {
            id,
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now().into(),
        }
    }

    fn credentials(email: &str, password: &str) -> CredentialsInput {
        CredentialsInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn service(db: MockDatabase, registration_enabled: bool) -> AuthService {
        AuthService::new(
            UserRepository::new(Arc::new(db.into_connection())),
            TokenIssuer::new("test-secret", 24),
            registration_enabled,
        )
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_register() {
        let created = create_test_user(1, "admin@example.com", "password123");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .append_query_results([[created.clone()]]);

        let user = service(db, true)
            .register(credentials("admin@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let existing = create_test_user(1, "admin@example.com", "password123");
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[existing]]);

        let result = service(db, true)
            .register(credentials("admin@example.com", "password123"))
            .await;

        match result {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "This user already exists"),
            other => panic!("Expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_validates_before_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let result = service(db, true)
            .register(credentials("not-an-email", "password123"))
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid email format"),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let result = service(db, true)
            .register(credentials("admin@example.com", "short"))
            .await;

        match result {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Password must be at least 8 characters");
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_disabled() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let result = service(db, false)
            .register(credentials("admin@example.com", "password123"))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let user = create_test_user(5, "admin@example.com", "password123");
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[user]]);
        let service = service(db, true);

        let output = service
            .login(credentials("admin@example.com", "password123"))
            .await
            .unwrap();

        let claims = service.tokens().verify(&output.access_token).unwrap();
        assert_eq!(claims.sub, 5);
        assert_eq!(claims.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let user = create_test_user(5, "admin@example.com", "password123");
        let wrong_password = service(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[user]]),
            true,
        )
        .login(credentials("admin@example.com", "password999"))
        .await
        .unwrap_err();

        let unknown_email = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()]),
            true,
        )
        .login(credentials("nobody@example.com", "password123"))
        .await
        .unwrap_err();

        assert_eq!(wrong_password.status_code(), unknown_email.status_code());
        assert_eq!(wrong_password.client_message(), unknown_email.client_message());
        assert_eq!(wrong_password.client_message(), "Invalid credentials");
    }

    #[test]
    fn test_unknown_email_hash_never_matches() {
        let hash = DUMMY_HASH.as_deref().unwrap();

        assert!(PasswordHash::new(hash).is_ok());
        assert!(!verify_password("password123", hash).unwrap());
        assert!(!verify_password("", hash).unwrap());
    }
}
