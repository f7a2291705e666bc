//! 预导入模块，方便使用

pub use super::record_blobs::{
    ActiveModel as RecordBlobActiveModel, Entity as RecordBlobs, Model as RecordBlobModel,
};
