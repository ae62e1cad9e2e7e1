use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::media::errors::AttachmentError;
use crate::domain::media::model::{Image, check_media_identifier};
use crate::domain::media::owner::{Owner, OwnerRepository};
use crate::domain::media::use_cases::images::{
    AddImageParams, DeleteImageParams, ImageManagerUseCase,
};
use crate::domain::shared::validation::ValidationError;
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

/// Image attachment rules for any owner family.
///
/// Bound to one family's [`OwnerRepository`] at wiring time.
pub struct ImageManager<T: TransactionManager, O: Owner> {
    pub transactions: Arc<T>,
    pub owners: Arc<dyn OwnerRepository<T::Tx, Owner = O>>,
    pub logger: Arc<dyn Logger>,
}

impl<T: TransactionManager, O: Owner> ImageManager<T, O> {
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
impl<T, O> ImageManagerUseCase for ImageManager<T, O>
where
    T: TransactionManager,
    O: Owner,
{
    async fn add_image(&self, params: AddImageParams) -> Result<Image, AttachmentError> {
        let owner_id = parse_id(&params.owner_id)?;
        params.image.validate()?;

        let mut tx = self.transactions.begin().await?;
        let owner = self
            .owners
            .lock_owner(&mut tx, owner_id)
            .await
            .map_err(AttachmentError::from_owner_lookup)?;

        if owner.media().find_image(&params.image.media_id).is_some() {
            return Err(ValidationError("media.image_already_attached").into());
        }
        if !owner.media().has_image_capacity() {
            self.logger.warn(&format!(
                "Image limit reached on {} {}",
                self.owners.owner_type(),
                owner_id
            ));
            return Err(AttachmentError::ImageLimitExceeded);
        }

        let image = params.image.into_image(Utc::now());
        if self.owners.append_image(&mut tx, owner_id, &image).await? == 0 {
            return Err(AttachmentError::OwnerNotFound);
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Image {} attached to {} {}",
            image.media_id,
            self.owners.owner_type(),
            owner_id
        ));
        Ok(image)
    }

    async fn delete_image(&self, params: DeleteImageParams) -> Result<(), AttachmentError> {
        let owner_id = parse_id(&params.owner_id)?;
        check_media_identifier(&params.media_id, "media.invalid_media_id")?;

        let mut tx = self.transactions.begin().await?;
        let owner = self
            .owners
            .lock_owner(&mut tx, owner_id)
            .await
            .map_err(AttachmentError::from_owner_lookup)?;

        if owner.media().find_image(&params.media_id).is_none() {
            return Err(AttachmentError::ImageNotFoundOnOwner);
        }
        if self
            .owners
            .remove_image(&mut tx, owner_id, &params.media_id)
            .await?
            == 0
        {
            return Err(AttachmentError::ImageNotFoundOnOwner);
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Image {} removed from {} {}",
            params.media_id,
            self.owners.owner_type(),
            owner_id
        ));
        Ok(())
    }

    async fn unlink_image(&self, media_id: &str) -> Result<Vec<Uuid>, AttachmentError> {
        check_media_identifier(media_id, "media.invalid_media_id")?;

        let mut tx = self.transactions.begin().await?;
        let owner_ids = self
            .owners
            .find_owners_by_image(&mut tx, media_id)
            .await?
            .iter()
            .map(|owner| owner.owner_id())
            .collect::<Vec<_>>();

        if !owner_ids.is_empty() {
            self.owners
                .remove_image_from_owners(&mut tx, &owner_ids, media_id)
                .await?;
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Image {} unlinked from {} {} owner(s)",
            media_id,
            owner_ids.len(),
            self.owners.owner_type()
        ));
        Ok(owner_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::model::Course;
    use crate::domain::errors::RepositoryError;
    use crate::domain::media::model::{MAX_UPLOADED_IMAGES, NewImage};
    use crate::domain::product::value_objects::DetailsType;
    use crate::test_support::{
        MockCourseOwners, MockTransactions, committing_transactions, course_with_images,
        mock_logger, rolled_back_transactions, unused_transactions,
    };

    fn manager(
        transactions: MockTransactions,
        owners: MockCourseOwners,
    ) -> ImageManager<MockTransactions, Course> {
        ImageManager::new(Arc::new(transactions), Arc::new(owners), mock_logger())
    }

    fn owners() -> MockCourseOwners {
        let mut owners = MockCourseOwners::new();
        owners.expect_owner_type().return_const(DetailsType::Course);
        owners
    }

    fn new_image(media_id: &str) -> NewImage {
        NewImage {
            media_id: media_id.to_string(),
            url: format!("http://cdn.example.com/{media_id}.png"),
            secure_url: format!("https://cdn.example.com/{media_id}.png"),
            public_id: format!("catalog/{media_id}"),
        }
    }

    #[tokio::test]
    async fn should_attach_image_when_below_limit() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, id| Ok(course_with_images(id, &["a", "b"])));
        owners
            .expect_append_image()
            .times(1)
            .returning(|_, _, image| {
                assert_eq!(image.media_id, "c");
                Ok(1)
            });

        let service = manager(committing_transactions(), owners);

        let image = service
            .add_image(AddImageParams {
                owner_id: Uuid::new_v4().to_string(),
                image: new_image("c"),
            })
            .await
            .unwrap();

        assert_eq!(image.secure_url, "https://cdn.example.com/c.png");
    }

    #[tokio::test]
    async fn should_reject_sixth_image_without_writing() {
        let mut owners = owners();
        owners.expect_lock_owner().returning(|_, id| {
            let course = course_with_images(id, &["1", "2", "3", "4", "5"]);
            assert_eq!(course.media.uploaded_image_count, MAX_UPLOADED_IMAGES);
            Ok(course)
        });
        owners.expect_append_image().never();

        let service = manager(rolled_back_transactions(), owners);

        let result = service
            .add_image(AddImageParams {
                owner_id: Uuid::new_v4().to_string(),
                image: new_image("6"),
            })
            .await;

        assert!(matches!(result, Err(AttachmentError::ImageLimitExceeded)));
    }

    #[tokio::test]
    async fn should_reject_image_already_on_owner() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, id| Ok(course_with_images(id, &["a"])));
        owners.expect_append_image().never();

        let service = manager(rolled_back_transactions(), owners);

        let result = service
            .add_image(AddImageParams {
                owner_id: Uuid::new_v4().to_string(),
                image: new_image("a"),
            })
            .await;

        assert!(matches!(
            result,
            Err(AttachmentError::InvalidArgument(ValidationError(
                "media.image_already_attached"
            )))
        ));
    }

    #[tokio::test]
    async fn should_fail_owner_not_found_for_unknown_owner() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let service = manager(rolled_back_transactions(), owners);

        let result = service
            .add_image(AddImageParams {
                owner_id: Uuid::new_v4().to_string(),
                image: new_image("a"),
            })
            .await;

        assert!(matches!(result, Err(AttachmentError::OwnerNotFound)));
    }

    #[tokio::test]
    async fn should_reject_malformed_image_before_opening_transaction() {
        let service = manager(unused_transactions(), owners());

        let result = service
            .add_image(AddImageParams {
                owner_id: Uuid::new_v4().to_string(),
                image: NewImage {
                    url: "nope".to_string(),
                    ..new_image("a")
                },
            })
            .await;

        assert!(matches!(
            result,
            Err(AttachmentError::InvalidArgument(ValidationError("media.invalid_url")))
        ));
    }

    #[tokio::test]
    async fn should_remove_image_present_on_owner() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, id| Ok(course_with_images(id, &["a", "b"])));
        owners
            .expect_remove_image()
            .times(1)
            .returning(|_, _, media_id| {
                assert_eq!(media_id, "b");
                Ok(1)
            });

        let service = manager(committing_transactions(), owners);

        let result = service
            .delete_image(DeleteImageParams {
                owner_id: Uuid::new_v4().to_string(),
                media_id: "b".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_image_is_not_on_owner() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, id| Ok(course_with_images(id, &["a"])));
        owners.expect_remove_image().never();

        let service = manager(rolled_back_transactions(), owners);

        let result = service
            .delete_image(DeleteImageParams {
                owner_id: Uuid::new_v4().to_string(),
                media_id: "z".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AttachmentError::ImageNotFoundOnOwner)));
    }

    #[tokio::test]
    async fn should_unlink_image_from_every_referencing_owner() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut owners = owners();
        owners
            .expect_find_owners_by_image()
            .times(1)
            .returning(move |_, _| {
                Ok(vec![
                    course_with_images(first, &["shared"]),
                    course_with_images(second, &["shared", "other"]),
                ])
            });
        owners
            .expect_remove_image_from_owners()
            .times(1)
            .returning(move |_, ids, media_id| {
                assert_eq!(ids, &[first, second]);
                assert_eq!(media_id, "shared");
                Ok(2)
            });

        let service = manager(committing_transactions(), owners);

        let unlinked = service.unlink_image("shared").await.unwrap();

        assert_eq!(unlinked, vec![first, second]);
    }

    #[tokio::test]
    async fn should_treat_unreferenced_image_as_nothing_to_unlink() {
        let mut owners = owners();
        owners
            .expect_find_owners_by_image()
            .returning(|_, _| Ok(Vec::new()));
        owners.expect_remove_image_from_owners().never();

        let service = manager(committing_transactions(), owners);

        assert!(service.unlink_image("gone").await.unwrap().is_empty());
    }
}
