use async_trait::async_trait;

use crate::domain::ListQuery;
use crate::domain::payment_method::{NewPaymentMethod, PaymentMethod};
use crate::models::payment_method::PaymentMethod as DbPaymentMethod;
use crate::repository::commerce_paths::PAYMENT_METHODS;
use crate::repository::{
    PaymentMethodReader, PaymentMethodWriter, RepositoryResult, RestRepository, fetch_list,
    fetch_one, insert, replace,
};

#[async_trait]
impl PaymentMethodReader for RestRepository {
    async fn list_payment_methods(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PaymentMethod>)> {
        fetch_list::<DbPaymentMethod, PaymentMethod>(&self.commerce, PAYMENT_METHODS, query).await
    }

    async fn get_payment_method_by_id(&self, id: i32) -> RepositoryResult<Option<PaymentMethod>> {
        fetch_one::<DbPaymentMethod, PaymentMethod>(&self.commerce, PAYMENT_METHODS, id).await
    }
}

#[async_trait]
impl PaymentMethodWriter for RestRepository {
    async fn create_payment_method(
        &self,
        new_method: &NewPaymentMethod,
    ) -> RepositoryResult<PaymentMethod> {
        insert::<_, DbPaymentMethod, PaymentMethod>(
            &self.commerce,
            PAYMENT_METHODS,
            &DbPaymentMethod::from(new_method),
        )
        .await
    }

    async fn update_payment_method(
        &self,
        method: &PaymentMethod,
    ) -> RepositoryResult<PaymentMethod> {
        replace::<_, DbPaymentMethod, PaymentMethod>(
            &self.commerce,
            PAYMENT_METHODS,
            method.id,
            &DbPaymentMethod::from(method),
            method.clone(),
        )
        .await
    }
}
