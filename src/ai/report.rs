use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::NarrativeGenerator;
use crate::models::students::entities::StudentFullProfile;

pub const REPORT_UNAVAILABLE: &str = "AI service unavailable. Please check API Key configuration.";
pub const REPORT_EMPTY: &str = "Could not generate report.";
pub const REPORT_COMMUNICATION_ERROR: &str = "Error communicating with AI service.";

/// 评语服务：给生成器加上超时、取消和兜底文案
pub struct ReportService {
    generator: Option<Arc<dyn NarrativeGenerator>>,
    timeout: Duration,
}

impl ReportService {
    pub fn new(generator: Option<Arc<dyn NarrativeGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// 生成评语；只有在被取消时返回 None，其余情况都返回可展示的文本
    pub async fn generate_report(
        &self,
        profile: &StudentFullProfile,
        cancel: &CancellationToken,
    ) -> Option<String> {
        let Some(generator) = &self.generator else {
            warn!("AI API key not configured");
            return Some(REPORT_UNAVAILABLE.to_string());
        };

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            outcome = tokio::time::timeout(self.timeout, generator.generate(profile)) => Some(outcome),
        };

        let Some(outcome) = outcome else {
            info!(reg_no = %profile.student.reg_no, "AI report request cancelled");
            return None;
        };

        let report = match outcome {
            Ok(Ok(text)) if text.trim().is_empty() => REPORT_EMPTY.to_string(),
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Error generating report: {}", e);
                REPORT_COMMUNICATION_ERROR.to_string()
            }
            Err(_) => {
                warn!("AI report timed out after {:?}", self.timeout);
                REPORT_COMMUNICATION_ERROR.to_string()
            }
        };
        Some(report)
    }
}
