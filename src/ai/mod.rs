//! AI 评语生成
//!
//! `NarrativeGenerator` 是外部模型的边界；`ReportService` 负责超时、取消和兜底文案。

mod gemini;
mod report;

pub use gemini::{GeminiGenerator, build_prompt};
pub use report::{
    ReportService, REPORT_COMMUNICATION_ERROR, REPORT_EMPTY, REPORT_UNAVAILABLE,
};

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::students::entities::StudentFullProfile;

/// 根据学生档案生成评语
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// 返回模型生成的文本，可能为空字符串
    async fn generate(&self, profile: &StudentFullProfile) -> Result<String>;
}
