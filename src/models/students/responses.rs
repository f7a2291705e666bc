use serde::Serialize;
use ts_rs::TS;

use super::entities::{Student, StudentFullProfile};

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub total: usize,
}

// 学生档案响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentProfileResponse {
    pub profile: StudentFullProfile,
    pub average_percentage: Option<f64>,
    pub passed_semesters: Vec<u8>, // 达到及格线的学期
}

// AI 评语响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentReportResponse {
    pub reg_no: String,
    pub report: String,
}

// CSV 导入响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportResponse {
    pub imported: usize,
}
