use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::media::errors::AttachmentError;
use crate::domain::media::owner::{Owner, OwnerRepository};
use crate::domain::media::use_cases::attachments::{GetAttachmentsUseCase, OwnerAttachments};
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

pub struct AttachmentsQuery<T: TransactionManager, O: Owner> {
    pub transactions: Arc<T>,
    pub owners: Arc<dyn OwnerRepository<T::Tx, Owner = O>>,
    pub logger: Arc<dyn Logger>,
}

impl<T: TransactionManager, O: Owner> AttachmentsQuery<T, O> {
    pub fn new(
        transactions: Arc<T>,
        owners: Arc<dyn OwnerRepository<T::Tx, Owner = O>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            transactions,
            owners,
            logger,
        }
    }
}

#[async_trait]
impl<T, O> GetAttachmentsUseCase for AttachmentsQuery<T, O>
where
    T: TransactionManager,
    O: Owner,
{
    async fn execute(
        &self,
        owner_ids: Vec<String>,
    ) -> Result<Vec<OwnerAttachments>, AttachmentError> {
        let ids = owner_ids
            .iter()
            .map(|id| parse_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.transactions.begin().await?;
        let owners = self.owners.find_owners(&mut tx, &ids).await?;
        self.transactions.commit(tx).await?;

        self.logger.debug(&format!(
            "Loaded attachments for {}/{} {} owner(s)",
            owners.len(),
            ids.len(),
            self.owners.owner_type()
        ));
        Ok(owners
            .into_iter()
            .map(|owner| OwnerAttachments {
                owner_id: owner.owner_id(),
                images: owner.images().to_vec(),
                video: owner.video().cloned(),
            })
            .collect())
    }
}
