//! User repository.

use std::sync::Arc;

use crate::{
    entities::{User, user},
    error::classify,
};
use menuboard_common::AppResult;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify("User", e))
    }

    /// Create a new user.
    pub async fn create(&self, model: user::ActiveModel) -> AppResult<user::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify("User", e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    fn create_test_user(id: i32, email: &str) -> user::Model {
        user::Model {
            id,
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_found() {
        let user = create_test_user(1, "admin@example.com");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[user.clone()]])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.find_by_email("admin@example.com").await.unwrap();

        assert_eq!(result, Some(user));
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<user::Model>::new()])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let result = repo.find_by_email("nobody@example.com").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create() {
        let user = create_test_user(7, "new@example.com");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[user.clone()]])
                .into_connection(),
        );

        let repo = UserRepository::new(db);
        let created = repo
            .create(user::ActiveModel {
                email: Set(user.email.clone()),
                password_hash: Set(user.password_hash.clone()),
                created_at: Set(user.created_at),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.email, "new@example.com");
    }
}
