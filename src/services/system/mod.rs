pub mod health;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 健康检查
    pub async fn get_health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::get_health(self, request).await
    }
}
