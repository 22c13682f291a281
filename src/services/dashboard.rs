use crate::domain::ListQuery;
use crate::domain::OrderStage;
use crate::domain::dashboard::{DashboardSummary, StageCount};
use crate::repository::{CartReader, CustomerReader, OrderReader, RoleReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the dashboard counters.
///
/// The four lists are fetched concurrently; if any of them fails the whole
/// dashboard fails.
pub async fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardSummary>
where
    R: OrderReader + CartReader + RoleReader + CustomerReader + ?Sized,
{
    let ((orders_total, orders), (carts, _), (roles, _), (customers, _)) = futures::try_join!(
        repo.list_orders(ListQuery::new()),
        repo.list_carts(ListQuery::new()),
        repo.list_roles(ListQuery::new()),
        repo.list_customers(ListQuery::new()),
    )
    .map_err(ServiceError::from)?;

    let stages = OrderStage::ALL
        .iter()
        .map(|stage| StageCount {
            stage: *stage,
            count: orders.iter().filter(|order| order.stage == *stage).count(),
        })
        .collect();

    Ok(DashboardSummary {
        customers,
        carts,
        orders: orders_total,
        roles,
        stages,
    })
}
