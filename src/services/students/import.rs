//! 学生导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::import;
use crate::models::ApiResponse;
use crate::models::students::responses::ImportResponse;
use crate::services::upload::{import_error_response, read_text_upload};

pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);
    let photos = service.get_photos(request);

    let text = match read_text_upload(&mut payload, service.max_import_size()).await {
        Ok(text) => text,
        Err(e) => return Ok(e.into_response()),
    };

    match import::import_students(&store, &text, photos.as_ref()).await {
        Ok(imported) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ImportResponse { imported },
            format!("Successfully imported {imported} students."),
        ))),
        Err(e) => Ok(import_error_response(e)),
    }
}
