//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! 每个记录集合整体序列化后存为一行。

pub mod prelude;

pub mod record_blobs;
