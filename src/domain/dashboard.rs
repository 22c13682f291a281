use serde::Serialize;

use crate::domain::OrderStage;

/// Record counts shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub customers: usize,
    pub carts: usize,
    pub orders: usize,
    pub roles: usize,
    /// Orders per fulfilment stage, in [`OrderStage::ALL`] order.
    pub stages: Vec<StageCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: OrderStage,
    pub count: usize,
}
