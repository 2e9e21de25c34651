//! Mapping of database errors onto application errors.

use menuboard_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Convert a database error for `entity` into an [`AppError`].
///
/// Unique violations become conflicts naming the offending field when the
/// index name reveals it. Foreign key violations and missing rows become
/// not-found errors. Everything else is an opaque database failure.
pub fn classify(entity: &str, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(entity, detail = %detail, "Unique constraint violated");
            AppError::Conflict(conflict_message(entity, &detail))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!(entity, detail = %detail, "Foreign key constraint violated");
            AppError::NotFound(format!("Referenced record for {entity} not found"))
        }
        _ => match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
                AppError::NotFound(format!("{entity} not found"))
            }
            other => AppError::Database(other.to_string()),
        },
    }
}

fn conflict_message(entity: &str, detail: &str) -> String {
    if detail.contains("position") {
        format!("{entity} with this position already exists")
    } else if detail.contains("title") {
        format!("{entity} with this title already exists")
    } else if detail.contains("email") {
        "This user already exists".to_string()
    } else {
        format!("{entity} already exists")
    }
}
