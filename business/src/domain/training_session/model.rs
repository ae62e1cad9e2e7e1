use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::media::model::MediaAttachments;
use crate::domain::media::owner::Owner;
use crate::domain::product::value_objects::DetailsType;
use crate::domain::shared::diff::{FieldDiff, record_change};
use crate::domain::shared::validation::{
    DESCRIPTION_MAX, LOCATION_MAX, ValidationError, check_max_length, check_name, check_range,
    normalize_optional,
};

const DURATION_MINUTES: std::ops::RangeInclusive<i32> = 15..=600;

/// One-to-one or small group session, booked after purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    /// `None` for remote sessions.
    pub location: Option<String>,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaAttachments,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewTrainingSession {
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TrainingSessionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
}

fn check_fields(
    name: Option<&str>,
    description: Option<&str>,
    duration_minutes: Option<i32>,
    location: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_name(name, "training_session.name_length")?;
    }
    if let Some(description) = description {
        check_max_length(
            description,
            DESCRIPTION_MAX,
            "training_session.description_length",
        )?;
    }
    if let Some(minutes) = duration_minutes {
        check_range(minutes, DURATION_MINUTES, "training_session.duration_minutes")?;
    }
    if let Some(location) = location {
        check_max_length(location, LOCATION_MAX, "training_session.location_length")?;
    }
    Ok(())
}

impl SellableDetails for TrainingSession {
    type Draft = NewTrainingSession;
    type Patch = TrainingSessionPatch;

    const DETAILS_TYPE: DetailsType = DetailsType::TrainingSession;

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

    fn from_draft(id: Uuid, draft: NewTrainingSession) -> Result<Self, ValidationError> {
        check_fields(
            Some(&draft.name),
            Some(&draft.description),
            Some(draft.duration_minutes),
            draft.location.as_deref(),
        )?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            duration_minutes: draft.duration_minutes,
            location: normalize_optional(draft.location),
            in_stock: false,
            deleted_at: None,
            media: MediaAttachments::default(),
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_patch(patch: &TrainingSessionPatch) -> Result<(), ValidationError> {
        check_fields(
            patch.name.as_deref(),
            patch.description.as_deref(),
            patch.duration_minutes,
            patch.location.as_deref(),
        )
    }

    fn diff(&self, patch: &TrainingSessionPatch) -> Result<FieldDiff, ValidationError> {
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
        record_change(
            &mut diff,
            "duration_minutes",
            &self.duration_minutes,
            patch.duration_minutes.as_ref(),
        );
        record_change(&mut diff, "location", &self.location, location.as_ref());
        Ok(diff)
    }
}

impl Owner for TrainingSession {
    fn owner_id(&self) -> Uuid {
        self.id
    }

    fn media(&self) -> &MediaAttachments {
        &self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::diff::FieldValue;

    fn session() -> TrainingSession {
        TrainingSession::from_draft(
            Uuid::new_v4(),
            NewTrainingSession {
                name: "Kettlebell basics".to_string(),
                description: "Swing, clean and press.".to_string(),
                duration_minutes: 60,
                location: Some("Gym A".to_string()),
            },
        )
        .unwrap()
    }

    #[test]
    fn should_reject_session_shorter_than_fifteen_minutes() {
        let result = TrainingSession::from_draft(
            Uuid::new_v4(),
            NewTrainingSession {
                name: "Quick stretch".to_string(),
                description: String::new(),
                duration_minutes: 10,
                location: None,
            },
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError("training_session.duration_minutes")
        );
    }

    #[test]
    fn should_clear_location_with_blank_patch_value() {
        let diff = session()
            .diff(&TrainingSessionPatch {
                location: Some(String::new()),
                ..TrainingSessionPatch::default()
            })
            .unwrap();

        assert_eq!(diff.get("location"), Some(&FieldValue::NullableText(None)));
    }

    #[test]
    fn should_ignore_unchanged_location() {
        let diff = session()
            .diff(&TrainingSessionPatch {
                location: Some("Gym A".to_string()),
                ..TrainingSessionPatch::default()
            })
            .unwrap();

        assert!(diff.is_empty());
    }
}
