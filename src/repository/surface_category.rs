use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::surface_category::{NewSurfaceCategory, SurfaceCategory};
use crate::models::surface_category::{SurfaceCategory as DbSurfaceCategory, SurfaceCategoryBody};
use crate::repository::catalog_paths::SURFACES;
use crate::repository::{
    RepositoryResult, RestRepository, SurfaceCategoryReader, SurfaceCategoryWriter, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl SurfaceCategoryReader for RestRepository {
    async fn list_surface_categories(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<SurfaceCategory>)> {
        fetch_list::<DbSurfaceCategory, SurfaceCategory>(&self.catalog, SURFACES, query).await
    }

    async fn get_surface_category_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<SurfaceCategory>> {
        fetch_one::<DbSurfaceCategory, SurfaceCategory>(&self.catalog, SURFACES, id).await
    }
}

#[async_trait]
impl SurfaceCategoryWriter for RestRepository {
    async fn create_surface_category(
        &self,
        new_category: &NewSurfaceCategory,
    ) -> RepositoryResult<SurfaceCategory> {
        insert::<_, DbSurfaceCategory, SurfaceCategory>(
            &self.catalog,
            SURFACES,
            &SurfaceCategoryBody::from(new_category),
        )
        .await
    }

    async fn update_surface_category(
        &self,
        category: &SurfaceCategory,
    ) -> RepositoryResult<SurfaceCategory> {
        replace::<_, DbSurfaceCategory, SurfaceCategory>(
            &self.catalog,
            SURFACES,
            category.id,
            &SurfaceCategoryBody::from(category),
            category.clone(),
        )
        .await
    }
}
