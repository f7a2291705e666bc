//! AI 评语服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tokio_util::sync::CancellationToken;
use tracing::error;

use super::{StudentService, student_not_found};
use crate::models::students::responses::StudentReportResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn generate_report(
    service: &StudentService,
    reg_no: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);
    let reports = service.get_reports(request);

    let Some(profile) = store.full_profile(reg_no).await else {
        return Ok(student_not_found(reg_no));
    };

    // 服务关闭或客户端断开（handler future 被丢弃）时取消外部请求
    let cancel = request
        .app_data::<web::Data<CancellationToken>>()
        .map(|shutdown| shutdown.child_token())
        .unwrap_or_default();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let task = tokio::spawn(async move { reports.generate_report(&profile, &cancel).await });

    match task.await {
        Ok(Some(report)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentReportResponse {
                reg_no: reg_no.to_string(),
                report,
            },
            "Report generated",
        ))),
        Ok(None) => Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Report request cancelled",
        ))),
        Err(e) => {
            error!("Report task failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Report task failed",
            )))
        }
    }
}
