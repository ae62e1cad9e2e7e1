use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::catalog::details::SellableDetails;
use crate::domain::media::model::MediaAttachments;
use crate::domain::media::owner::Owner;
use crate::domain::product::value_objects::DetailsType;
use crate::domain::shared::diff::{FieldDiff, record_change};
use crate::domain::shared::validation::{
    DESCRIPTION_MAX, SHORT_DESCRIPTION_MAX, ValidationError, check_max_length, check_name,
    check_range, normalize_optional,
};

const DURATION_HOURS: std::ops::RangeInclusive<i32> = 1..=1000;
const ACCESS_DAYS: std::ops::RangeInclusive<i32> = 1..=3650;

/// Self-paced course; buyers get access for `access_days` after purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub duration_hours: i32,
    pub access_days: i32,
    pub in_stock: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaAttachments,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewCourse {
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub duration_hours: i32,
    pub access_days: i32,
}

/// Partial update; `short_description: Some("")` clears the field.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub duration_hours: Option<i32>,
    pub access_days: Option<i32>,
}

fn check_texts(
    name: Option<&str>,
    short_description: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_name(name, "course.name_length")?;
    }
    if let Some(short_description) = short_description {
        check_max_length(
            short_description,
            SHORT_DESCRIPTION_MAX,
            "course.short_description_length",
        )?;
    }
    if let Some(description) = description {
        check_max_length(description, DESCRIPTION_MAX, "course.description_length")?;
    }
    Ok(())
}

impl SellableDetails for Course {
    type Draft = NewCourse;
    type Patch = CoursePatch;

    const DETAILS_TYPE: DetailsType = DetailsType::Course;

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

    fn from_draft(id: Uuid, draft: NewCourse) -> Result<Self, ValidationError> {
        check_texts(
            Some(&draft.name),
            draft.short_description.as_deref(),
            Some(&draft.description),
        )?;
        check_range(draft.duration_hours, DURATION_HOURS, "course.duration_hours")?;
        check_range(draft.access_days, ACCESS_DAYS, "course.access_days")?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            short_description: normalize_optional(draft.short_description),
            description: draft.description,
            duration_hours: draft.duration_hours,
            access_days: draft.access_days,
            in_stock: false,
            deleted_at: None,
            media: MediaAttachments::default(),
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_patch(patch: &CoursePatch) -> Result<(), ValidationError> {
        check_texts(
            patch.name.as_deref(),
            patch.short_description.as_deref(),
            patch.description.as_deref(),
        )?;
        if let Some(hours) = patch.duration_hours {
            check_range(hours, DURATION_HOURS, "course.duration_hours")?;
        }
        if let Some(days) = patch.access_days {
            check_range(days, ACCESS_DAYS, "course.access_days")?;
        }
        Ok(())
    }

    fn diff(&self, patch: &CoursePatch) -> Result<FieldDiff, ValidationError> {
        let name = patch.name.as_ref().map(|n| n.trim().to_string());
        let short_description = patch
            .short_description
            .clone()
            .map(|s| normalize_optional(Some(s)));

        let mut diff = FieldDiff::new();
        record_change(&mut diff, "name", &self.name, name.as_ref());
        record_change(
            &mut diff,
            "short_description",
            &self.short_description,
            short_description.as_ref(),
        );
        record_change(
            &mut diff,
            "description",
            &self.description,
            patch.description.as_ref(),
        );
        record_change(
            &mut diff,
            "duration_hours",
            &self.duration_hours,
            patch.duration_hours.as_ref(),
        );
        record_change(
            &mut diff,
            "access_days",
            &self.access_days,
            patch.access_days.as_ref(),
        );
        Ok(diff)
    }
}

impl Owner for Course {
    fn owner_id(&self) -> Uuid {
        self.id
    }

    fn media(&self) -> &MediaAttachments {
        &self.media
    }
}
