use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::media::model::MediaAttachments;
use crate::domain::media::owner::Owner;
use crate::domain::product::value_objects::DetailsType;
use crate::domain::shared::diff::{FieldDiff, record_change};
use crate::domain::shared::validation::{
    DESCRIPTION_MAX, LOCATION_MAX, ValidationError, check_max_length, check_name,
    normalize_optional,
};

/// Scheduled event with a fixed start and end.
#[derive(Debug, Clone, PartialEq)]
pub struct Seminar {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaAttachments,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewSeminar {
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SeminarPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

fn check_schedule(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<(), ValidationError> {
    if ends_at <= starts_at {
        return Err(ValidationError("seminar.ends_before_start"));
    }
    Ok(())
}

fn check_texts(
    name: Option<&str>,
    description: Option<&str>,
    location: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_name(name, "seminar.name_length")?;
    }
    if let Some(description) = description {
        check_max_length(description, DESCRIPTION_MAX, "seminar.description_length")?;
    }
    if let Some(location) = location {
        check_max_length(location, LOCATION_MAX, "seminar.location_length")?;
    }
    Ok(())
}

impl SellableDetails for Seminar {
    type Draft = NewSeminar;
    type Patch = SeminarPatch;

    const DETAILS_TYPE: DetailsType = DetailsType::Seminar;

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn in_stock(&self) -> bool {
        self.in_stock
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn from_draft(id: Uuid, draft: NewSeminar) -> Result<Self, ValidationError> {
        check_texts(
            Some(&draft.name),
            Some(&draft.description),
            draft.location.as_deref(),
        )?;
        check_schedule(draft.starts_at, draft.ends_at)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            location: normalize_optional(draft.location),
            in_stock: false,
            deleted_at: None,
            media: MediaAttachments::default(),
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_patch(patch: &SeminarPatch) -> Result<(), ValidationError> {
        check_texts(
            patch.name.as_deref(),
            patch.description.as_deref(),
            patch.location.as_deref(),
        )?;
        if let (Some(starts_at), Some(ends_at)) = (patch.starts_at, patch.ends_at) {
            check_schedule(starts_at, ends_at)?;
        }
        Ok(())
    }

    fn diff(&self, patch: &SeminarPatch) -> Result<FieldDiff, ValidationError> {
        // Only one bound may be patched, so check against the stored other bound.
        check_schedule(
            patch.starts_at.unwrap_or(self.starts_at),
            patch.ends_at.unwrap_or(self.ends_at),
        )?;

        let name = patch.name.as_ref().map(|n| n.trim().to_string());
        let location = patch.location.clone().map(|l| normalize_optional(Some(l)));

        let mut diff = FieldDiff::new();
        record_change(&mut diff, "name", &self.name, name.as_ref());
        record_change(
            &mut diff,
            "description",
            &self.description,
            patch.description.as_ref(),
        );
        record_change(&mut diff, "starts_at", &self.starts_at, patch.starts_at.as_ref());
        record_change(&mut diff, "ends_at", &self.ends_at, patch.ends_at.as_ref());
        record_change(&mut diff, "location", &self.location, location.as_ref());
        Ok(diff)
    }
}

impl Owner for Seminar {
    fn owner_id(&self) -> Uuid {
        self.id
    }

    fn media(&self) -> &MediaAttachments {
        &self.media
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn draft() -> NewSeminar {
        let starts_at = Utc::now() + Duration::days(30);
        NewSeminar {
            name: "Domain modelling".to_string(),
            description: "A day of aggregates.".to_string(),
            starts_at,
            ends_at: starts_at + Duration::hours(8),
            location: None,
        }
    }

    #[test]
    fn should_reject_seminar_ending_before_it_starts() {
        let draft = draft();
        let result = Seminar::from_draft(
            Uuid::new_v4(),
            NewSeminar {
                ends_at: draft.starts_at - Duration::hours(1),
                ..draft
            },
        );
        assert_eq!(result.unwrap_err(), ValidationError("seminar.ends_before_start"));
    }

    #[test]
    fn should_reject_patch_moving_start_past_stored_end() {
        let seminar = Seminar::from_draft(Uuid::new_v4(), draft()).unwrap();
        let patch = SeminarPatch {
            starts_at: Some(seminar.ends_at + Duration::hours(1)),
            ..SeminarPatch::default()
        };

        assert!(Seminar::validate_patch(&patch).is_ok());
        assert_eq!(
            seminar.diff(&patch).unwrap_err(),
            ValidationError("seminar.ends_before_start")
        );
    }

    #[test]
    fn should_diff_rescheduled_seminar() {
        let seminar = Seminar::from_draft(Uuid::new_v4(), draft()).unwrap();
        let new_end = seminar.ends_at + Duration::hours(2);
        let diff = seminar
            .diff(&SeminarPatch {
                ends_at: Some(new_end),
                ..SeminarPatch::default()
            })
            .unwrap();

        assert_eq!(diff.len(), 1);
        assert!(diff.contains_key("ends_at"));
    }
}
