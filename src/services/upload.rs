//! 上传的 CSV 文件读取

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::StreamExt;
use tracing::error;

use crate::errors::RecordsError;
use crate::models::{ApiResponse, ErrorCode};

const UTF8_BOM: char = '\u{feff}';

/// 上传读取错误
#[derive(Debug)]
pub(crate) enum UploadError {
    Read(String),
    MissingFile,
    TooLarge(usize),
    NotUtf8,
}

impl UploadError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::TooLarge(_) => ErrorCode::FileTooLarge,
            Self::NotUtf8 => ErrorCode::ImportFileParseFailed,
            Self::Read(_) | Self::MissingFile => ErrorCode::FileUploadFailed,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Read(msg) => format!("Failed to read upload: {msg}"),
            Self::MissingFile => "No file field found in upload".to_string(),
            Self::TooLarge(limit) => format!("File exceeds the {limit} byte import limit"),
            Self::NotUtf8 => "File is not valid UTF-8 text".to_string(),
        }
    }

    pub(crate) fn into_response(self) -> HttpResponse {
        let body = ApiResponse::error_empty(self.error_code(), self.message());
        match self {
            Self::TooLarge(_) => HttpResponse::PayloadTooLarge().json(body),
            _ => HttpResponse::BadRequest().json(body),
        }
    }
}

/// 读取 multipart 中名为 `file` 的字段并解码为文本，去掉 UTF-8 BOM
pub(crate) async fn read_text_upload(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<String, UploadError> {
    let mut file_bytes = Vec::new();
    let mut found = false;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Read(e.to_string()))?;

        if field.name() != Some("file") {
            continue;
        }
        found = true;

        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| UploadError::Read(e.to_string()))?;
            if file_bytes.len() + data.len() > max_size {
                return Err(UploadError::TooLarge(max_size));
            }
            file_bytes.extend_from_slice(&data);
        }
    }

    if !found {
        return Err(UploadError::MissingFile);
    }

    let text = String::from_utf8(file_bytes).map_err(|_| UploadError::NotUtf8)?;
    Ok(text.strip_prefix(UTF8_BOM).map(str::to_string).unwrap_or(text))
}

/// 导入失败的响应：没有有效行是 400，其余是 500
pub(crate) fn import_error_response(err: RecordsError) -> HttpResponse {
    let body = ApiResponse::from_error(&err);
    match err {
        RecordsError::EmptyImport(_) => HttpResponse::BadRequest().json(body),
        other => {
            error!("Import failed: {}", other);
            HttpResponse::InternalServerError().json(body)
        }
    }
}
