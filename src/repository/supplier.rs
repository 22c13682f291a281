use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::supplier::{NewSupplier, Supplier};
use crate::models::supplier::{Supplier as DbSupplier, SupplierBody};
use crate::repository::catalog_paths::SUPPLIERS;
use crate::repository::{
    RepositoryResult, RestRepository, SupplierReader, SupplierWriter, fetch_list, fetch_one, insert,
    replace,
};

#[async_trait]
impl SupplierReader for RestRepository {
    async fn list_suppliers(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Supplier>)> {
        fetch_list::<DbSupplier, Supplier>(&self.catalog, SUPPLIERS, query).await
    }

    async fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>> {
        fetch_one::<DbSupplier, Supplier>(&self.catalog, SUPPLIERS, id).await
    }
}

#[async_trait]
impl SupplierWriter for RestRepository {
    async fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier> {
        insert::<_, DbSupplier, Supplier>(
            &self.catalog,
            SUPPLIERS,
            &SupplierBody::from(new_supplier),
        )
        .await
    }

    async fn update_supplier(&self, supplier: &Supplier) -> RepositoryResult<Supplier> {
        replace::<_, DbSupplier, Supplier>(
            &self.catalog,
            SUPPLIERS,
            supplier.id,
            &SupplierBody::from(supplier),
            supplier.clone(),
        )
        .await
    }
}
