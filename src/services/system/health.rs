use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::system::responses::SystemHealthResponse;
use crate::models::{ApiResponse, AppStartTime};
use crate::services::store_from_request;

/// 系统名称、版本与运行时长
pub async fn get_health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let store = store_from_request(request);

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    let ai_configured = request
        .app_data::<web::Data<std::sync::Arc<crate::ai::ReportService>>>()
        .is_some_and(|reports| reports.is_configured());

    let response = SystemHealthResponse {
        system_name: config.app.system_name.clone(),
        school_name: config.school.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage_backend: store.backend_name().to_string(),
        ai_configured,
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System is healthy",
    )))
}
