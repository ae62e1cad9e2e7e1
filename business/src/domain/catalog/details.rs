use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::DetailsType;
use crate::domain::shared::diff::FieldDiff;
use crate::domain::shared::validation::ValidationError;

/// A Details family (course, training session, seminar) that can be sold
/// through a paired Product.
///
/// The family owns its create payload (`Draft`), its partial update payload
/// (`Patch`) and the rules validating both.
pub trait SellableDetails: Clone + Send + Sync + 'static {
    type Draft: Send + Sync + 'static;
    type Patch: Send + Sync + 'static;

    const DETAILS_TYPE: DetailsType;

    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn in_stock(&self) -> bool;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Validates a create payload and builds an unpublished record.
    fn from_draft(id: Uuid, draft: Self::Draft) -> Result<Self, ValidationError>;

    /// Field-level checks on a patch, run before any transaction is opened.
    fn validate_patch(patch: &Self::Patch) -> Result<(), ValidationError>;

    /// Columns whose value would change if `patch` were applied.
    ///
    /// Errors when the merged record breaks a cross-field rule.
    fn diff(&self, patch: &Self::Patch) -> Result<FieldDiff, ValidationError>;
}

/// A Details record together with its Product.
#[derive(Debug, Clone, PartialEq)]
pub struct Sellable<D> {
    pub details: D,
    pub product: Product,
}
