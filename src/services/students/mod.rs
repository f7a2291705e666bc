pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod report;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::ai::ReportService;
use crate::config::AppConfig;
use crate::errors::RecordsError;
use crate::import::PhotoUrlStrategy;
use crate::models::ApiResponse;
use crate::models::students::requests::StudentListParams;
use crate::records::RecordStore;

pub struct StudentService {
    store: Option<Arc<RecordStore>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { store: None }
    }

    pub(crate) fn get_store(&self, request: &HttpRequest) -> Arc<RecordStore> {
        match &self.store {
            Some(store) => store.clone(),
            None => super::store_from_request(request),
        }
    }

    pub(crate) fn get_photos(&self, request: &HttpRequest) -> Arc<dyn PhotoUrlStrategy> {
        request
            .app_data::<web::Data<Arc<dyn PhotoUrlStrategy>>>()
            .expect("PhotoUrlStrategy not found in app data")
            .get_ref()
            .clone()
    }

    pub(crate) fn get_reports(&self, request: &HttpRequest) -> Arc<ReportService> {
        request
            .app_data::<web::Data<Arc<ReportService>>>()
            .expect("ReportService not found in app data")
            .get_ref()
            .clone()
    }

    pub(crate) fn max_import_size(&self) -> usize {
        AppConfig::get().server.limits.max_import_size
    }

    // 学生列表（支持关键字和年级筛选）
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    // 学生完整档案
    pub async fn get_student(&self, reg_no: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_student(self, reg_no, request).await
    }

    // 导入学生 CSV
    pub async fn import_students(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, payload, request).await
    }

    // 导出学生列表
    pub async fn export_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_students(self, query, request).await
    }

    // 导出单个学生档案
    pub async fn export_student_profile(
        &self,
        reg_no: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_student_profile(self, reg_no, request).await
    }

    // 生成 AI 评语
    pub async fn generate_report(
        &self,
        reg_no: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::generate_report(self, reg_no, request).await
    }
}

pub(crate) fn student_not_found(reg_no: &str) -> HttpResponse {
    let err = RecordsError::not_found(format!("Student {reg_no} not found"));
    HttpResponse::NotFound().json(ApiResponse::from_error(&err))
}
