use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::analytics::filter_students;
use crate::models::ApiResponse;
use crate::models::students::requests::StudentListParams;
use crate::models::students::responses::StudentListResponse;

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    let students = store.list_students().await;
    let items = filter_students(&students, query.search.as_deref(), query.grade);

    let response = StudentListResponse {
        total: items.len(),
        items,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student list retrieved successfully",
    )))
}
