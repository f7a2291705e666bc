//! 记录集合存储实现

use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use tracing::debug;

use crate::entity::prelude::{RecordBlobActiveModel, RecordBlobs};
use crate::errors::{RecordsError, Result};
use crate::storage::Collection;

use super::SeaOrmStorage;

impl SeaOrmStorage {
    /// 读取集合
    pub(crate) async fn get_blob_impl(&self, collection: Collection) -> Result<Option<String>> {
        let blob = RecordBlobs::find_by_id(collection.key().to_string())
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("读取集合失败: {e}")))?;

        Ok(blob.map(|b| b.value))
    }

    /// 写入集合（存在则整体替换）
    pub(crate) async fn put_blob_impl(&self, collection: Collection, blob: String) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let existing = RecordBlobs::find_by_id(collection.key().to_string())
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("读取集合失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active_model: RecordBlobActiveModel = model.into();
                active_model.value = Set(blob);
                active_model.updated_at = Set(now);
                active_model
                    .update(&self.db)
                    .await
                    .map_err(|e| RecordsError::database_operation(format!("更新集合失败: {e}")))?;
            }
            None => {
                let active_model = RecordBlobActiveModel {
                    key: Set(collection.key().to_string()),
                    value: Set(blob),
                    updated_at: Set(now),
                };
                active_model
                    .insert(&self.db)
                    .await
                    .map_err(|e| RecordsError::database_operation(format!("写入集合失败: {e}")))?;
            }
        }

        debug!("Collection {} persisted", collection);
        Ok(())
    }
}
