use atelier_application::error::{AppError, AppResult};
use std::{future::Future, time::Duration};
use tokio::time::timeout;

pub struct PostgresExecutor {
    timeout_secs: u64,
}

impl PostgresExecutor {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    pub async fn execute_with_timeout<T, F, Fut>(
        &self,
        operation: F,
        error_context: &str,
    ) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, sqlx::Error>>,
    {
        self.execute_with_timeout_map_err(operation, |e| AppError::DatabaseError {
            message: format!("{}: {}", error_context, e),
        })
        .await
    }

    /// Variant for callers that need to classify the sqlx error, e.g.
    /// turning a unique violation into a conflict.
    pub async fn execute_with_timeout_map_err<T, F, Fut, M>(
        &self,
        operation: F,
        map_err: M,
    ) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, sqlx::Error>>,
        M: FnOnce(sqlx::Error) -> AppError,
    {
        timeout(Duration::from_secs(self.timeout_secs), operation())
            .await
            .map_err(|_| AppError::DatabaseError {
                message: "DB timeout".to_string(),
            })?
            .map_err(map_err)
    }
}

pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(db_error) if db_error.is_unique_violation()
    )
}
