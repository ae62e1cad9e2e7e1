use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::diff::{FieldDiff, FieldValue};

/// Builds `UPDATE {table} SET <diff>, updated_at = NOW() WHERE {key} = $n AND deleted_at IS NULL`.
///
/// Column names come from the diff keys and must appear in `updatable`.
pub fn build_update(
    table: &str,
    key_column: &str,
    key: Uuid,
    diff: &FieldDiff,
    updatable: &[&str],
) -> Result<QueryBuilder<'static, Postgres>, RepositoryError> {
    if let Some(column) = diff.keys().find(|column| !updatable.contains(column)) {
        tracing::error!("Refusing to update unknown column {}.{}", table, column);
        return Err(RepositoryError::persistence());
    }

    let mut builder = QueryBuilder::new(format!("UPDATE {table} SET "));
    {
        let mut assignments = builder.separated(", ");
        for (column, value) in diff {
            assignments.push(format!("{column} = "));
            match value.clone() {
                FieldValue::Text(text) => assignments.push_bind_unseparated(text),
                FieldValue::NullableText(text) => assignments.push_bind_unseparated(text),
                FieldValue::Integer(number) => assignments.push_bind_unseparated(number),
                FieldValue::Timestamp(at) => assignments.push_bind_unseparated(at),
                FieldValue::Decimal(amount) => assignments.push_bind_unseparated(amount),
            };
        }
        assignments.push("updated_at = NOW()");
    }
    builder
        .push(format!(" WHERE {key_column} = "))
        .push_bind(key)
        .push(" AND deleted_at IS NULL");

    Ok(builder)
}
