use std::ops::RangeInclusive;

/// A payload or identifier rejected before any transaction is opened.
///
/// The wrapped value is a code-style identifier (e.g. `course.name_length`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    pub fn code(&self) -> &'static str {
        self.0
    }
}

pub const NAME_LENGTH: RangeInclusive<usize> = 1..=120;
pub const SHORT_DESCRIPTION_MAX: usize = 300;
pub const DESCRIPTION_MAX: usize = 5000;
pub const LOCATION_MAX: usize = 200;

/// Checks a display name: trimmed, non-empty, within [`NAME_LENGTH`] characters.
pub fn check_name(name: &str, code: &'static str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if !NAME_LENGTH.contains(&length) {
        return Err(ValidationError(code));
    }
    Ok(())
}

pub fn check_max_length(
    value: &str,
    max: usize,
    code: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError(code));
    }
    Ok(())
}

pub fn check_range(
    value: i32,
    range: RangeInclusive<i32>,
    code: &'static str,
) -> Result<(), ValidationError> {
    if !range.contains(&value) {
        return Err(ValidationError(code));
    }
    Ok(())
}

/// Empty or whitespace-only optional text is stored as `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_name_within_bounds() {
        assert!(check_name("Rust basics", "x.name").is_ok());
    }

    #[test]
    fn should_accept_single_character_name() {
        assert!(check_name(" X ", "x.name").is_ok());
    }

    #[test]
    fn should_reject_name_that_is_only_whitespace() {
        assert_eq!(check_name("     ", "x.name"), Err(ValidationError("x.name")));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let name = "é".repeat(120);
        assert!(check_name(&name, "x.name").is_ok());
        let too_long = "é".repeat(121);
        assert!(check_name(&too_long, "x.name").is_err());
    }

    #[test]
    fn should_reject_values_outside_range() {
        assert!(check_range(0, 1..=10, "x.range").is_err());
        assert!(check_range(11, 1..=10, "x.range").is_err());
        assert!(check_range(10, 1..=10, "x.range").is_ok());
    }

    #[test]
    fn should_normalize_blank_optional_text_to_none() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" Madrid ".to_string())),
            Some("Madrid".to_string())
        );
        assert_eq!(normalize_optional(None), None);
    }
}
