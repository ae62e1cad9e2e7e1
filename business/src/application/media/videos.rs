use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::media::errors::AttachmentError;
use crate::domain::media::model::VideoRef;
use crate::domain::media::owner::{Owner, OwnerRepository};
use crate::domain::media::services::MediaCatalog;
use crate::domain::media::use_cases::videos::{AttachVideoParams, VideoManagerUseCase};
use crate::domain::shared::value_objects::parse_id;
use crate::domain::transaction::TransactionManager;

/// Single-video attachment rules for any owner family.
pub struct VideoManager<T: TransactionManager, O: Owner> {
    pub transactions: Arc<T>,
    pub owners: Arc<dyn OwnerRepository<T::Tx, Owner = O>>,
    pub media: Arc<dyn MediaCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl<T: TransactionManager, O: Owner> VideoManager<T, O> {
    pub fn new(
        transactions: Arc<T>,
        owners: Arc<dyn OwnerRepository<T::Tx, Owner = O>>,
        media: Arc<dyn MediaCatalog>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            transactions,
            owners,
            media,
            logger,
        }
    }
}

#[async_trait]
impl<T, O> VideoManagerUseCase for VideoManager<T, O>
where
    T: TransactionManager,
    O: Owner,
{
    async fn add(&self, params: AttachVideoParams) -> Result<(), AttachmentError> {
        let owner_id = parse_id(&params.owner_id)?;
        let video = VideoRef::parse(params.video_id)?;

        // Asked before the row lock is taken so no lock is held across the HTTP call.
        if !self.media.video_exists(&video).await? {
            return Err(AttachmentError::VideoNotFound);
        }

        let mut tx = self.transactions.begin().await?;
        let owner = self
            .owners
            .lock_owner(&mut tx, owner_id)
            .await
            .map_err(AttachmentError::from_owner_lookup)?;

        if owner.video() == Some(&video) {
            return Err(AttachmentError::VideoInUse);
        }
        if let Some(previous) = owner.video() {
            self.logger.debug(&format!(
                "Replacing video {} on {} {}",
                previous,
                self.owners.owner_type(),
                owner_id
            ));
        }

        if self.owners.set_video(&mut tx, owner_id, &video).await? == 0 {
            return Err(AttachmentError::OwnerNotFound);
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Video {} attached to {} {}",
            video,
            self.owners.owner_type(),
            owner_id
        ));
        Ok(())
    }

    async fn remove(&self, owner_id: &str) -> Result<(), AttachmentError> {
        let owner_id = parse_id(owner_id)?;

        let mut tx = self.transactions.begin().await?;
        self.owners
            .lock_owner(&mut tx, owner_id)
            .await
            .map_err(AttachmentError::from_owner_lookup)?;
        if self.owners.clear_video(&mut tx, owner_id).await? == 0 {
            return Err(AttachmentError::OwnerNotFound);
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Video cleared on {} {}",
            self.owners.owner_type(),
            owner_id
        ));
        Ok(())
    }

    async fn unlink_video(&self, video_id: &str) -> Result<Vec<Uuid>, AttachmentError> {
        let video = VideoRef::parse(video_id)?;

        let mut tx = self.transactions.begin().await?;
        let owner_ids = self
            .owners
            .find_owners_by_video(&mut tx, &video)
            .await?
            .iter()
            .map(|owner| owner.owner_id())
            .collect::<Vec<_>>();

        if !owner_ids.is_empty() {
            self.owners
                .clear_video_from_owners(&mut tx, &owner_ids, &video)
                .await?;
        }
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "Video {} unlinked from {} {} owner(s)",
            video,
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
    use crate::domain::media::errors::MediaCatalogError;
    use crate::domain::media::model::MediaAttachments;
    use crate::domain::product::value_objects::DetailsType;
    use crate::test_support::{
        MockCourseOwners, MockMedia, MockTransactions, TestTx, committing_transactions, course,
        mock_logger, rolled_back_transactions, unused_transactions,
    };

    fn manager(
        transactions: MockTransactions,
        owners: MockCourseOwners,
        media: MockMedia,
    ) -> VideoManager<MockTransactions, Course> {
        VideoManager::new(
            Arc::new(transactions),
            Arc::new(owners),
            Arc::new(media),
            mock_logger(),
        )
    }

    fn owners() -> MockCourseOwners {
        let mut owners = MockCourseOwners::new();
        owners.expect_owner_type().return_const(DetailsType::Course);
        owners
    }

    fn known_videos() -> MockMedia {
        let mut media = MockMedia::new();
        media.expect_video_exists().returning(|_| Ok(true));
        media
    }

    fn course_with_video(id: Uuid, video_id: &str) -> Course {
        Course {
            media: MediaAttachments {
                video: Some(VideoRef::from_repository(video_id.to_string())),
                ..MediaAttachments::default()
            },
            ..course(id)
        }
    }

    fn attach(owner_id: Uuid, video_id: &str) -> AttachVideoParams {
        AttachVideoParams {
            owner_id: owner_id.to_string(),
            video_id: video_id.to_string(),
        }
    }

    #[tokio::test]
    async fn should_attach_video_to_owner_without_one() {
        let mut owners = owners();
        owners.expect_lock_owner().returning(|_, id| Ok(course(id)));
        owners
            .expect_set_video()
            .times(1)
            .returning(|_, _, video| {
                assert_eq!(video.as_str(), "vid_1");
                Ok(1)
            });

        let service = manager(committing_transactions(), owners, known_videos());

        assert!(service.add(attach(Uuid::new_v4(), "vid_1")).await.is_ok());
    }

    #[tokio::test]
    async fn should_overwrite_a_different_video() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, id| Ok(course_with_video(id, "vid_old")));
        owners.expect_set_video().times(1).returning(|_, _, _| Ok(1));

        let service = manager(committing_transactions(), owners, known_videos());

        assert!(service.add(attach(Uuid::new_v4(), "vid_new")).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_same_video_twice() {
        let mut transactions = MockTransactions::new();
        transactions.expect_begin().times(2).returning(|| Ok(TestTx));
        transactions.expect_commit().times(1).returning(|_| Ok(()));
        let mut owners = owners();
        let mut attached = false;
        owners.expect_lock_owner().times(2).returning(move |_, id| {
            let owner = if attached {
                course_with_video(id, "vid_1")
            } else {
                course(id)
            };
            attached = true;
            Ok(owner)
        });
        owners.expect_set_video().times(1).returning(|_, _, _| Ok(1));

        let service = manager(transactions, owners, known_videos());
        let owner_id = Uuid::new_v4();

        assert!(service.add(attach(owner_id, "vid_1")).await.is_ok());
        let second = service.add(attach(owner_id, "vid_1")).await;

        assert!(matches!(second, Err(AttachmentError::VideoInUse)));
    }

    #[tokio::test]
    async fn should_fail_not_found_for_unknown_video() {
        let mut media = MockMedia::new();
        media.expect_video_exists().returning(|_| Ok(false));

        let service = manager(unused_transactions(), owners(), media);

        let result = service.add(attach(Uuid::new_v4(), "vid_missing")).await;

        assert!(matches!(result, Err(AttachmentError::VideoNotFound)));
    }

    #[tokio::test]
    async fn should_report_media_service_outage_as_internal() {
        let mut media = MockMedia::new();
        media
            .expect_video_exists()
            .returning(|_| Err(MediaCatalogError::Unavailable));

        let service = manager(unused_transactions(), owners(), media);

        let result = service.add(attach(Uuid::new_v4(), "vid_1")).await;

        assert!(matches!(result, Err(AttachmentError::MediaService(_))));
    }

    #[tokio::test]
    async fn should_fail_owner_not_found_when_removing_from_unknown_owner() {
        let mut owners = owners();
        owners
            .expect_lock_owner()
            .returning(|_, _| Err(RepositoryError::NotFound));
        owners.expect_clear_video().never();

        let service = manager(rolled_back_transactions(), owners, MockMedia::new());

        let result = service.remove(&Uuid::new_v4().to_string()).await;

        assert!(matches!(result, Err(AttachmentError::OwnerNotFound)));
    }

    #[tokio::test]
    async fn should_clear_video_regardless_of_previous_value() {
        let mut owners = owners();
        owners.expect_lock_owner().returning(|_, id| Ok(course(id)));
        owners.expect_clear_video().times(1).returning(|_, _| Ok(1));

        let service = manager(committing_transactions(), owners, MockMedia::new());

        assert!(service.remove(&Uuid::new_v4().to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn should_unlink_video_from_referencing_owners() {
        let owner_id = Uuid::new_v4();
        let mut owners = owners();
        owners
            .expect_find_owners_by_video()
            .returning(move |_, _| Ok(vec![course_with_video(owner_id, "vid_1")]));
        owners
            .expect_clear_video_from_owners()
            .times(1)
            .returning(|_, ids, _| Ok(ids.len() as u64));

        let service = manager(committing_transactions(), owners, MockMedia::new());

        assert_eq!(service.unlink_video("vid_1").await.unwrap(), vec![owner_id]);
    }
}
