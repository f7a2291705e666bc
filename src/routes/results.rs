use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ResultService;

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn list_results(req: HttpRequest) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_results(&req).await
}

pub async fn import_results(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.import_results(payload, &req).await
}

// 配置路由
pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .route("", web::get().to(list_results))
            .route("/import", web::post().to(import_results)),
    );
}
