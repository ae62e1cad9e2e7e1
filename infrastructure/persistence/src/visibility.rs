use business::domain::shared::value_objects::Visibility;

/// SQL predicate selecting the rows visible under `visibility`.
///
/// Both `products` and the Details tables share the `in_stock` and
/// `deleted_at` columns, so the same predicate applies to either.
pub fn visibility_filter(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Published => "deleted_at IS NULL AND in_stock",
        Visibility::IncludingUnpublished => "deleted_at IS NULL",
        Visibility::IncludingDeleted => "TRUE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hide_unpublished_rows_in_published_scope() {
        assert_eq!(
            visibility_filter(Visibility::Published),
            "deleted_at IS NULL AND in_stock"
        );
    }

    #[test]
    fn should_keep_soft_deleted_rows_only_when_asked() {
        assert!(visibility_filter(Visibility::IncludingUnpublished).contains("deleted_at IS NULL"));
        assert_eq!(visibility_filter(Visibility::IncludingDeleted), "TRUE");
    }
}
