pub mod dashboard;
pub mod results;
pub mod students;
pub mod system;
mod upload;

pub use dashboard::DashboardService;
pub use results::ResultService;
pub use students::StudentService;
pub use system::SystemService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::records::RecordStore;

/// 从 app_data 取出记录库
pub(crate) fn store_from_request(request: &HttpRequest) -> Arc<RecordStore> {
    request
        .app_data::<web::Data<Arc<RecordStore>>>()
        .expect("RecordStore not found in app data")
        .get_ref()
        .clone()
}
