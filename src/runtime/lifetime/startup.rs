use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ai::{GeminiGenerator, NarrativeGenerator, ReportService};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::import::{PhotoUrlStrategy, TemplatePhotoUrl};
use crate::records::RecordStore;
use crate::storage::create_backend;

pub struct StartupContext {
    pub store: Arc<RecordStore>,
    pub reports: Arc<ReportService>,
    pub photos: Arc<dyn PhotoUrlStrategy>,
    pub shutdown: CancellationToken,
}

/// 创建 AI 评语服务，未配置 API Key 时只返回兜底文案
fn create_report_service(config: &AppConfig) -> Result<ReportService> {
    let generator = GeminiGenerator::from_config(&config.ai, &config.school)?
        .map(|g| Arc::new(g) as Arc<dyn NarrativeGenerator>);

    if generator.is_none() {
        warn!("AI API key not configured, reports will be unavailable");
    }

    Ok(ReportService::new(
        generator,
        Duration::from_secs(config.ai.timeout_secs),
    ))
}

/// 准备服务器启动的上下文
/// 包括存储后端、示例数据和 AI 客户端
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let backend = create_backend(&config.storage, &config.database).await?;
    warn!("Storage backend '{}' initialized", backend.name());

    let store = Arc::new(RecordStore::new(backend));
    store.initialize().await?;
    debug!("Record collections ready");

    let reports = Arc::new(create_report_service(config)?);

    let photos: Arc<dyn PhotoUrlStrategy> =
        Arc::new(TemplatePhotoUrl::new(config.school.photo_url_template.clone()));

    Ok(StartupContext {
        store,
        reports,
        photos,
        shutdown: CancellationToken::new(),
    })
}
