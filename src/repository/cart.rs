use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::cart::{NewCart, Cart};
use crate::models::cart::Cart as DbCart;
use crate::repository::commerce_paths::CARTS;
use crate::repository::{
    CartReader, CartWriter, RepositoryResult, RestRepository, fetch_list, fetch_one, insert,
    replace,
};

#[async_trait]
impl CartReader for RestRepository {
    async fn list_carts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Cart>)> {
        fetch_list::<DbCart, Cart>(&self.commerce, CARTS, query).await
    }

    async fn get_cart_by_id(&self, id: i32) -> RepositoryResult<Option<Cart>> {
        fetch_one::<DbCart, Cart>(&self.commerce, CARTS, id).await
    }
}

#[async_trait]
impl CartWriter for RestRepository {
    async fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart> {
        insert::<_, DbCart, Cart>(&self.commerce, CARTS, &DbCart::from(new_cart)).await
    }

    async fn update_cart(&self, cart: &Cart) -> RepositoryResult<Cart> {
        replace::<_, DbCart, Cart>(
            &self.commerce,
            CARTS,
            cart.id,
            &DbCart::from(cart),
            cart.clone(),
        )
        .await
    }
}
