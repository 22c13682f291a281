use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::product_review::{NewProductReview, ProductReview};
use crate::models::product_review::ProductReview as DbProductReview;
use crate::repository::commerce_paths::REVIEWS;
use crate::repository::{
    ProductReviewReader, ProductReviewWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl ProductReviewReader for RestRepository {
    async fn list_product_reviews(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductReview>)> {
        fetch_list::<DbProductReview, ProductReview>(&self.commerce, REVIEWS, query).await
    }

    async fn get_product_review_by_id(&self, id: i32) -> RepositoryResult<Option<ProductReview>> {
        fetch_one::<DbProductReview, ProductReview>(&self.commerce, REVIEWS, id).await
    }
}

#[async_trait]
impl ProductReviewWriter for RestRepository {
    async fn create_product_review(
        &self,
        new_review: &NewProductReview,
    ) -> RepositoryResult<ProductReview> {
        insert::<_, DbProductReview, ProductReview>(
            &self.commerce,
            REVIEWS,
            &DbProductReview::from(new_review),
        )
        .await
    }

    async fn update_product_review(
        &self,
        review: &ProductReview,
    ) -> RepositoryResult<ProductReview> {
        replace::<_, DbProductReview, ProductReview>(
            &self.commerce,
            REVIEWS,
            review.id,
            &DbProductReview::from(review),
            review.clone(),
        )
        .await
    }
}
