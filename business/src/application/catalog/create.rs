use async_trait::async_trait;
use uuid::Uuid;

use super::coordinator::LifecycleCoordinator;
use crate::domain::catalog::details::SellableDetails;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::create::{
    CreateSellableParams, CreateSellableUseCase, CreatedSellable,
};
use crate::domain::product::model::Product;
use crate::domain::transaction::TransactionManager;

#[async_trait]
impl<T, D> CreateSellableUseCase<D> for LifecycleCoordinator<T, D>
where
    T: TransactionManager,
    D: SellableDetails,
{
    async fn execute(
        &self,
        params: CreateSellableParams<D::Draft>,
    ) -> Result<CreatedSellable, CatalogError> {
        let details = D::from_draft(Uuid::new_v4(), params.details)?;
        let product = Product::new(details.id(), D::DETAILS_TYPE, params.price)?;

        self.logger.info(&format!(
            "Creating {}: {}",
            self.family(),
            details.name()
        ));

        let mut tx = self.transactions.begin().await?;
        self.details.create(&mut tx, &details).await?;
        self.products.create(&mut tx, &product).await?;
        self.transactions.commit(tx).await?;

        self.logger.info(&format!(
            "{} created with id: {} (product {})",
            self.family(),
            details.id(),
            product.id
        ));
        Ok(CreatedSellable {
            details_id: details.id(),
            product_id: product.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::course::model::{Course, NewCourse};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::DetailsType;
    use crate::domain::shared::validation::ValidationError;
    use crate::test_support::{
        MockCourseRepo, MockProductRepo, MockTransactions, committing_transactions, mock_logger,
        rolled_back_transactions, unused_transactions,
    };

    fn params(name: &str, price: i64) -> CreateSellableParams<NewCourse> {
        CreateSellableParams {
            price: BigDecimal::from(price),
            details: NewCourse {
                name: name.to_string(),
                short_description: None,
                description: "Futures, executors and pinning.".to_string(),
                duration_hours: 12,
                access_days: 365,
            },
        }
    }

    fn coordinator(
        transactions: MockTransactions,
        products: MockProductRepo,
        details: MockCourseRepo,
    ) -> LifecycleCoordinator<MockTransactions, Course> {
        LifecycleCoordinator::new(
            Arc::new(transactions),
            Arc::new(products),
            Arc::new(details),
            mock_logger(),
        )
    }

    #[tokio::test]
    async fn should_create_unpublished_pair_sharing_details_id() {
        let mut details = MockCourseRepo::new();
        details.expect_create().times(1).returning(|_, course| {
            assert!(!course.in_stock);
            assert_eq!(course.name, "X course");
            Ok(())
        });
        let mut products = MockProductRepo::new();
        products.expect_create().times(1).returning(|_, product| {
            assert!(!product.in_stock);
            assert_eq!(product.details_type, DetailsType::Course);
            assert_eq!(product.price, BigDecimal::from(50));
            Ok(())
        });

        let use_case = coordinator(committing_transactions(), products, details);

        let created = use_case.execute(params("X course", 50)).await.unwrap();

        assert_ne!(created.details_id, created.product_id);
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_before_opening_transaction() {
        let use_case = coordinator(
            unused_transactions(),
            MockProductRepo::new(),
            MockCourseRepo::new(),
        );

        let result = use_case.execute(params("X course", 0)).await;

        assert!(matches!(
            result,
            Err(CatalogError::InvalidArgument(ValidationError(
                "product.price_not_positive"
            )))
        ));
    }

    #[tokio::test]
    async fn should_roll_back_details_when_product_insert_fails() {
        let mut details = MockCourseRepo::new();
        details.expect_create().times(1).returning(|_, _| Ok(()));
        let mut products = MockProductRepo::new();
        products
            .expect_create()
            .times(1)
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = coordinator(rolled_back_transactions(), products, details);

        let result = use_case.execute(params("X course", 50)).await;

        assert!(matches!(result, Err(CatalogError::Repository(_))));
    }
}
