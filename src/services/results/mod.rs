pub mod import;
pub mod list;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::records::RecordStore;

pub struct ResultService {
    store: Option<Arc<RecordStore>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { store: None }
    }

    pub(crate) fn get_store(&self, request: &HttpRequest) -> Arc<RecordStore> {
        match &self.store {
            Some(store) => store.clone(),
            None => super::store_from_request(request),
        }
    }

    pub(crate) fn max_import_size(&self) -> usize {
        AppConfig::get().server.limits.max_import_size
    }

    // 全部成绩
    pub async fn list_results(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_results(self, request).await
    }

    // 导入成绩 CSV
    pub async fn import_results(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_results(self, payload, request).await
    }
}
