//! 学生导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{StudentService, student_not_found};
use crate::analytics::filter_students;
use crate::errors::RecordsError;
use crate::export::{
    STUDENT_LIST_FILE_NAME, XLSX_CONTENT_TYPE, profile_file_name, student_list_workbook,
    student_profile_workbook,
};
use crate::models::students::requests::StudentListParams;
use crate::models::ApiResponse;

/// 导出学生列表（与列表页使用相同的筛选条件）
pub async fn export_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    let students = store.list_students().await;
    let students = filter_students(&students, query.search.as_deref(), query.grade);

    match student_list_workbook(&students) {
        Ok(buffer) => Ok(xlsx_response(STUDENT_LIST_FILE_NAME, buffer)),
        Err(e) => Ok(export_failed(e)),
    }
}

/// 导出单个学生档案
pub async fn export_student_profile(
    service: &StudentService,
    reg_no: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    let Some(profile) = store.full_profile(reg_no).await else {
        return Ok(student_not_found(reg_no));
    };

    match student_profile_workbook(&profile) {
        Ok(buffer) => Ok(xlsx_response(&profile_file_name(&profile.student.name), buffer)),
        Err(e) => Ok(export_failed(e)),
    }
}

fn xlsx_response(file_name: &str, buffer: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(buffer)
}

fn export_failed(err: RecordsError) -> HttpResponse {
    error!("XLSX export failed: {}", err);
    HttpResponse::InternalServerError().json(ApiResponse::from_error(&err))
}
