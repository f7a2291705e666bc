use serde::Serialize;
use ts_rs::TS;

// 系统健康检查响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemHealthResponse {
    pub system_name: String,
    pub school_name: String,
    pub version: String,
    pub storage_backend: String,
    pub ai_configured: bool,
    pub uptime_seconds: i64,
}
