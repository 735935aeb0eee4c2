//! Client for the billing API's `/plans` resource.

pub mod models {
    pub mod plan;
}

pub mod dtos {
    pub mod plan;
}

pub mod services {
    pub mod plan;
}

pub use dtos::plan::{MAX_LIST_LIMIT, PlanListParams, PlanParams};
pub use models::plan::{Currency, Plan, PlanInterval, PlanList};
pub use services::plan::PlanClient;
