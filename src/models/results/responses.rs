use serde::Serialize;
use ts_rs::TS;

use super::entities::SemesterResult;

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListResponse {
    pub items: Vec<SemesterResult>,
    pub total: usize,
}
