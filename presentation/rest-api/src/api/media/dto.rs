use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::value_objects::DetailsType;

#[derive(Debug, Clone, Object)]
pub struct UnlinkedOwnersResponse {
    /// Details family of the listed owners
    pub details_type: String,
    pub owner_ids: Vec<String>,
}

impl UnlinkedOwnersResponse {
    pub fn new(details_type: DetailsType, owner_ids: Vec<Uuid>) -> Self {
        Self {
            details_type: details_type.to_string(),
            owner_ids: owner_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UnlinkResponse {
    /// One entry per family, empty lists included
    pub unlinked: Vec<UnlinkedOwnersResponse>,
}
