//! 数据存储层
//!
//! 记录库只依赖 `RecordBackend` 提供的两个命名集合的读写，
//! 具体后端（内存 / 数据库）在启动时按配置注入。

use std::sync::Arc;

use crate::config::{DatabaseConfig, StorageConfig};
use crate::errors::{RecordsError, Result};

pub mod memory;
pub mod sea_orm_storage;

pub use memory::MemoryBackend;
pub use sea_orm_storage::SeaOrmStorage;

/// 持久化的记录集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Results,
}

impl Collection {
    /// 存储键名
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Students => "gps_bazar_students",
            Collection::Results => "gps_bazar_results",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[async_trait::async_trait]
pub trait RecordBackend: Send + Sync {
    // 读取集合的序列化内容，不存在时返回 None
    async fn get(&self, collection: Collection) -> Result<Option<String>>;
    // 整体替换集合的序列化内容
    async fn put(&self, collection: Collection, blob: String) -> Result<()>;
    // 后端名称，用于日志与健康检查
    fn name(&self) -> &'static str;
}

/// 按配置创建存储后端
pub async fn create_backend(
    storage: &StorageConfig,
    database: &DatabaseConfig,
) -> Result<Arc<dyn RecordBackend>> {
    match storage.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryBackend::new())),
        "database" => {
            let backend = SeaOrmStorage::connect(database).await?;
            Ok(Arc::new(backend))
        }
        other => Err(RecordsError::storage_backend_not_found(format!(
            "未知的存储后端: {other}. 支持: memory, database"
        ))),
    }
}
