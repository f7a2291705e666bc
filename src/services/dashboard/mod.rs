use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::analytics;
use crate::models::ApiResponse;
use crate::records::RecordStore;

pub struct DashboardService {
    store: Option<Arc<RecordStore>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { store: None }
    }

    pub(crate) fn get_store(&self, request: &HttpRequest) -> Arc<RecordStore> {
        match &self.store {
            Some(store) => store.clone(),
            None => super::store_from_request(request),
        }
    }

    // 首页概览
    pub async fn get_overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let store = self.get_store(request);

        let students = store.list_students().await;
        let results = store.list_results().await;

        Ok(HttpResponse::Ok().json(ApiResponse::success(
            analytics::overview(&students, &results),
            "Dashboard overview retrieved successfully",
        )))
    }
}
