use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::dashboard::DashboardStats;
use business::domain::cart::state::CartStore;

use crate::api::dashboard::dto::DashboardResponse;
use crate::api::tags::ApiTags;

pub struct DashboardApi {
    store: Arc<CartStore>,
}

impl DashboardApi {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl DashboardApi {
    /// Session dashboard
    ///
    /// Savings, green score, monthly goals and badges derived from the current cart.
    #[oai(path = "/dashboard", method = "get", tag = "ApiTags::Dashboard")]
    async fn get_dashboard(&self) -> Json<DashboardResponse> {
        let snapshot = self.store.snapshot();
        Json(DashboardStats::compute(&snapshot, Utc::now()).into())
    }
}

#[cfg(test)]
mod tests {
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use super::*;

    #[tokio::test]
    async fn should_list_all_badges_locked_for_empty_cart() {
        let api = DashboardApi::new(Arc::new(CartStore::new()));
        let client =
            TestClient::new(Route::new().nest("/", OpenApiService::new(api, "EcoCart", "test")));

        let response = client.get("/dashboard").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let dashboard = json.value().object();
        dashboard.get("badges_earned").assert_i64(0);
        dashboard.get("badges").array().assert_len(4);
        dashboard.get("goals").array().assert_len(3);
    }
}
