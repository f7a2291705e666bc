//! 数据模型定义
//!
//! 业务实体、请求参数与响应结构，同时导出 TypeScript 类型给前端使用。

pub mod common;
pub mod dashboard;
pub mod results;
pub mod students;
pub mod system;

pub use common::{ApiResponse, ErrorCode};
pub use system::entities::AppStartTime;
