use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, student_not_found};
use crate::analytics::average_percentage;
use crate::models::ApiResponse;
use crate::models::students::responses::StudentProfileResponse;

pub async fn get_student(
    service: &StudentService,
    reg_no: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    let Some(profile) = store.full_profile(reg_no).await else {
        return Ok(student_not_found(reg_no));
    };

    let response = StudentProfileResponse {
        average_percentage: average_percentage(&profile.results),
        passed_semesters: profile
            .results
            .iter()
            .filter(|r| r.is_passed())
            .map(|r| r.semester.number())
            .collect(),
        profile,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student profile retrieved successfully",
    )))
}
