use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ValidationError;

/// Parses an externally supplied identifier.
///
/// Runs before any transaction is opened; non-UUID input is an invalid argument.
pub fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError("common.invalid_id"))
}

/// Row visibility scope applied by repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// In stock and not soft-deleted.
    Published,
    /// Not soft-deleted, regardless of publication.
    IncludingUnpublished,
    /// Every row, soft-deleted ones included.
    IncludingDeleted,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Published => write!(f, "published"),
            Visibility::IncludingUnpublished => write!(f, "including_unpublished"),
            Visibility::IncludingDeleted => write!(f, "including_deleted"),
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(Visibility::Published),
            "including_unpublished" => Ok(Visibility::IncludingUnpublished),
            "including_deleted" => Ok(Visibility::IncludingDeleted),
            _ => Err(format!("Invalid visibility: {}", s)),
        }
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Limit/offset pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Result<Self, ValidationError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(ValidationError("common.invalid_page_limit"));
        }
        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Ok(id));
    }

    #[test]
    fn should_reject_non_uuid_identifier() {
        assert_eq!(
            parse_id("course-42"),
            Err(ValidationError("common.invalid_id"))
        );
    }

    #[test]
    fn should_default_page_window() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn should_reject_page_limit_out_of_bounds() {
        assert!(Page::new(Some(0), None).is_err());
        assert!(Page::new(Some(MAX_PAGE_LIMIT + 1), None).is_err());
    }

    #[test]
    fn should_round_trip_visibility_names() {
        for visibility in [
            Visibility::Published,
            Visibility::IncludingUnpublished,
            Visibility::IncludingDeleted,
        ] {
            assert_eq!(visibility.to_string().parse::<Visibility>(), Ok(visibility));
        }
    }
}
