use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::deserialize_optional_grade;

// 学生列表筛选参数（来自HTTP请求）
#[derive(Debug, Default, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_grade")]
    #[ts(optional)]
    pub grade: Option<u8>,
}
