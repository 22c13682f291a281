use chrono::Utc;

use crate::domain::product_review::ProductReview;
use crate::forms::EditPayload;
use crate::forms::product_reviews::{AddProductReviewForm, EditProductReviewForm};
use crate::repository::{ProductReviewReader, ProductReviewWriter};
use crate::services::{PageData, PageQuery, ServiceError, ServiceResult};

/// Loads the product review list page.
pub async fn load_product_reviews<R>(
    repo: &R,
    query: PageQuery,
) -> ServiceResult<PageData<ProductReview>>
where
    R: ProductReviewReader + ?Sized,
{
    let (total, items) = repo
        .list_product_reviews(query.to_list_query())
        .await
        .map_err(ServiceError::from)?;

    Ok(PageData::new(total, items, &query))
}

/// Creates a product review from the add dialog.
pub async fn create_product_review<R>(
    repo: &R,
    form: AddProductReviewForm,
) -> ServiceResult<ProductReview>
where
    R: ProductReviewWriter + ?Sized,
{
    let payload = form
        .into_new_product_review(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product_review(&payload)
        .await
        .map_err(ServiceError::from)
}

/// Applies the edit dialog to the stored product review.
pub async fn modify_product_review<R>(
    repo: &R,
    form: EditProductReviewForm,
) -> ServiceResult<ProductReview>
where
    R: ProductReviewReader + ProductReviewWriter + ?Sized,
{
    let EditPayload { id, update } = form
        .into_update_product_review()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let current = repo
        .get_product_review_by_id(id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_product_review(&update.apply_to(current))
        .await
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::RecordStatus;
    use crate::domain::product_review::NewProductReview;
    use crate::repository::mock::MockRepository;

    fn form(rating: &str) -> AddProductReviewForm {
        AddProductReviewForm {
            customer_id: 4,
            product_id: 8,
            rating: rating.to_string(),
            comment: "Muy bueno".to_string(),
            modified_by: "eva".to_string(),
        }
    }

    #[actix_web::test]
    async fn create_product_review_stamps_utc_time() {
        let before = Utc::now().naive_utc();
        let mut repo = MockRepository::new();
        repo.expect_create_product_review()
            .times(1)
            .withf(move |new: &NewProductReview| {
                new.reviewed_at >= before && new.rating == Decimal::new(45, 1)
            })
            .returning(|new| {
                Ok(ProductReview {
                    id: 6,
                    customer_id: new.customer_id,
                    product_id: new.product_id,
                    rating: new.rating,
                    comment: new.comment.clone(),
                    reviewed_at: new.reviewed_at,
                    status: RecordStatus::Active,
                    modified_by: new.modified_by.clone(),
                })
            });

        assert_eq!(create_product_review(&repo, form("4.5")).await.expect("review").id, 6);
    }

    #[actix_web::test]
    async fn rating_above_five_is_rejected() {
        let repo = MockRepository::new();

        assert!(matches!(
            create_product_review(&repo, form("6")).await,
            Err(ServiceError::Form(_))
        ));
    }
}
