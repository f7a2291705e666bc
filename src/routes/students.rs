use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::StudentListParams;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn import_students(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.import_students(payload, &req).await
}

pub async fn export_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.export_students(query.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, reg_no: web::Path<String>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&reg_no, &req).await
}

pub async fn export_student_profile(
    req: HttpRequest,
    reg_no: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.export_student_profile(&reg_no, &req).await
}

pub async fn generate_report(
    req: HttpRequest,
    reg_no: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.generate_report(&reg_no, &req).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    // 固定路径需在 /{reg_no} 之前注册
    cfg.service(
        web::scope("/api/v1/students")
            .route("", web::get().to(list_students))
            .route("/import", web::post().to(import_students))
            .route("/export", web::get().to(export_students))
            .route("/{reg_no}", web::get().to(get_student))
            .route("/{reg_no}/export", web::get().to(export_student_profile))
            .route("/{reg_no}/report", web::post().to(generate_report)),
    );
}
