use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，写入响应体 code 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,

    // 文件与导入
    FileUploadFailed = 2000,
    FileTooLarge = 2001,
    ImportFileParseFailed = 2010,
    ImportNoValidRecords = 2011,
    ExportFailed = 2020,

    // 学生
    StudentNotFound = 3000,

    InternalServerError = 5000,
}
