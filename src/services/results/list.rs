use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::ApiResponse;
use crate::models::results::responses::ResultListResponse;

pub async fn list_results(
    service: &ResultService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let store = service.get_store(request);

    let items = store.list_results().await;
    let response = ResultListResponse {
        total: items.len(),
        items,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Result list retrieved successfully",
    )))
}
