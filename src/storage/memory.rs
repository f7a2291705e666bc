//! 内存存储实现
//!
//! 进程内保存集合内容，进程退出即丢失。用于测试和临时运行。

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{Collection, RecordBackend};
use crate::errors::Result;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: DashMap<Collection, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置集合内容（可以是任意文本，包括损坏的数据）
    pub fn with_blob(self, collection: Collection, blob: impl Into<String>) -> Self {
        self.blobs.insert(collection, blob.into());
        self
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.blobs.contains_key(&collection)
    }
}

#[async_trait]
impl RecordBackend for MemoryBackend {
    async fn get(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.blobs.get(&collection).map(|v| v.value().clone()))
    }

    async fn put(&self, collection: Collection, blob: String) -> Result<()> {
        debug!("Memory backend write: {} ({} bytes)", collection, blob.len());
        self.blobs.insert(collection, blob);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_collection() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get(Collection::Students).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_blob() {
        let backend = MemoryBackend::new();
        backend
            .put(Collection::Results, "[1]".to_string())
            .await
            .unwrap();
        backend
            .put(Collection::Results, "[2]".to_string())
            .await
            .unwrap();
        assert_eq!(
            backend.get(Collection::Results).await.unwrap().as_deref(),
            Some("[2]")
        );
        assert!(!backend.contains(Collection::Students));
    }
}
