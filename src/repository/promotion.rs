use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::promotion::{NewPromotion, Promotion};
use crate::models::promotion::{Promotion as DbPromotion, PromotionBody};
use crate::repository::catalog_paths::PROMOTIONS;
use crate::repository::{
    PromotionReader, PromotionWriter, RepositoryResult, RestRepository, fetch_list, fetch_one,
    insert, replace,
};

#[async_trait]
impl PromotionReader for RestRepository {
    async fn list_promotions(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Promotion>)> {
        fetch_list::<DbPromotion, Promotion>(&self.catalog, PROMOTIONS, query).await
    }

    async fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>> {
        fetch_one::<DbPromotion, Promotion>(&self.catalog, PROMOTIONS, id).await
    }
}

#[async_trait]
impl PromotionWriter for RestRepository {
    async fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion> {
        insert::<_, DbPromotion, Promotion>(
            &self.catalog,
            PROMOTIONS,
            &PromotionBody::from(new_promotion),
        )
        .await
    }

    async fn update_promotion(&self, promotion: &Promotion) -> RepositoryResult<Promotion> {
        replace::<_, DbPromotion, Promotion>(
            &self.catalog,
            PROMOTIONS,
            promotion.id,
            &PromotionBody::from(promotion),
            promotion.clone(),
        )
        .await
    }
}
