use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use rust_student_records::ai::{REPORT_UNAVAILABLE, ReportService};
use rust_student_records::import::{PhotoUrlStrategy, TemplatePhotoUrl};
use rust_student_records::models::AppStartTime;
use rust_student_records::records::RecordStore;
use rust_student_records::routes;
use rust_student_records::storage::MemoryBackend;
use rust_student_records::utils::query_error_handler;

const BOUNDARY: &str = "records-test-boundary";

async fn seeded_store() -> Arc<RecordStore> {
    let store = Arc::new(RecordStore::new(Arc::new(MemoryBackend::new())));
    store.initialize().await.unwrap();
    store
}

macro_rules! app {
    ($store:expr) => {{
        let photos: Arc<dyn PhotoUrlStrategy> = Arc::new(TemplatePhotoUrl::default());
        let reports = Arc::new(ReportService::new(None, Duration::from_secs(1)));
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new($store.clone()))
                .app_data(web::Data::new(reports))
                .app_data(web::Data::new(photos))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_api_routes),
        )
        .await
    }};
}

fn csv_upload(uri: &str, csv: &str) -> test::TestRequest {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"upload.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    );
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn test_list_and_filter_students() {
    let store = seeded_store().await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/v1/students").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["items"][0]["regNo"], "REG-001");

    let req = test::TestRequest::get()
        .uri("/api/v1/students?search=fatima&grade=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Fatima Bibi");

    let req = test::TestRequest::get()
        .uri("/api/v1/students?grade=All")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 2);
}

#[actix_web::test]
async fn test_import_students_upserts_by_reg_no() {
    let store = seeded_store().await;
    let app = app!(store);

    let csv = "Name,FatherName,Contact,Grade,RegNo\n\
               Ahmed Khan,Sher Khan,0300-0000000,4,REG-001\n\
               Sara Noor,Noor Ali,0345-1111111,2,REG-003\n\
               Bad Row,Nobody,000,9,REG-004";
    let resp = test::call_service(&app, csv_upload("/api/v1/students/import", csv).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["imported"], 2);

    let students = store.list_students().await;
    assert_eq!(students.len(), 3);
    assert_eq!(students[0].grade.value(), 4);
    assert_eq!(students[2].reg_no, "REG-003");
}

#[actix_web::test]
async fn test_import_without_valid_rows() {
    let store = seeded_store().await;
    let app = app!(store);

    let resp = test::call_service(
        &app,
        csv_upload("/api/v1/students/import", "Name,FatherName,Contact,Grade,RegNo").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2011);
    assert_eq!(body["message"], "No valid student records found.");

    let resp = test::call_service(
        &app,
        csv_upload("/api/v1/results/import", "RegNo,Semester\nREG-001,1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No valid result records found.");

    assert_eq!(store.list_students().await.len(), 2);
    assert_eq!(store.list_results().await.len(), 1);
}

#[actix_web::test]
async fn test_import_results_and_profile() {
    let store = seeded_store().await;
    let app = app!(store);

    let csv = "RegNo,Semester,English,Urdu,Math,G.Science,Pashto,SocialStudy,Islamiyat,NaziraQuran,Drawing\n\
               REG-001,2,90,90,90,90,90,90,90,90,90";
    let resp = test::call_service(&app, csv_upload("/api/v1/results/import", csv).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/v1/results").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/students/REG-001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let profile = &body["data"]["profile"];
    assert_eq!(profile["regNo"], "REG-001");
    assert_eq!(profile["results"][0]["semester"], 1);
    assert_eq!(profile["results"][1]["semester"], 2);
    assert_eq!(profile["results"][1]["obtainedMarks"], 810.0);

    assert_eq!(body["data"]["passedSemesters"], serde_json::json!([1, 2]));

    let average = body["data"]["averagePercentage"].as_f64().unwrap();
    assert!((average - (776.0 / 900.0 * 100.0 + 90.0) / 2.0).abs() < 1e-9);
}

#[actix_web::test]
async fn test_unknown_student() {
    let store = seeded_store().await;
    let app = app!(store);

    for uri in ["/api/v1/students/REG-404", "/api/v1/students/REG-404/export"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3000);
    }
}

#[actix_web::test]
async fn test_dashboard_overview() {
    let store = seeded_store().await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let data = &body["data"];
    assert_eq!(data["totalStudents"], 2);
    assert_eq!(data["totalResults"], 1);
    assert_eq!(data["failingResults"], 0);
    assert_eq!(data["gradeDistribution"][4]["count"], 2);
    assert_eq!(data["topPerformers"][0]["name"], "Ahmed Khan");
}

#[actix_web::test]
async fn test_exports() {
    let store = seeded_store().await;
    let app = app!(store);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/students/export")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("Student_Profiles_GPS_Bazar.xlsx"));
    let bytes = test::read_body(resp).await;
    assert!(bytes.starts_with(b"PK"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/students/REG-002/export")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("Fatima_Bibi_Profile.xlsx"));
}

#[actix_web::test]
async fn test_report_without_api_key() {
    let store = seeded_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/v1/students/REG-001/report")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["regNo"], "REG-001");
    assert_eq!(body["data"]["report"], REPORT_UNAVAILABLE);
}

#[actix_web::test]
async fn test_health() {
    let store = seeded_store().await;
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["storageBackend"], "memory");
    assert_eq!(body["data"]["aiConfigured"], false);
}
