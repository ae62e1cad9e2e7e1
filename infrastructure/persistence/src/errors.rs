use business::domain::errors::RepositoryError;

/// Translates a sqlx failure into the repository port's error.
///
/// Driver details are logged here and never cross into business types.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::RowNotFound => RepositoryError::not_found(),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!("Unique constraint violated: {}", db.message());
            RepositoryError::duplicated()
        }
        other => {
            tracing::error!("Database error: {}", other);
            RepositoryError::database_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn should_hide_driver_failures() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }
}
