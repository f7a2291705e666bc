//! 学生档案与成绩管理服务
//!
//! 基于 Actix Web 构建的单校学生档案、学期成绩、CSV 导入与报表导出后端。
//!
//! # 架构
//! - `ai`: AI 评语生成（Gemini）
//! - `analytics`: 统计汇总与筛选
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `export`: XLSX 导出
//! - `import`: CSV 解析与导入
//! - `models`: 数据模型定义
//! - `records`: 学生与成绩记录库
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 存储后端（内存 / SeaORM）
//! - `utils`: 工具函数

pub mod ai;
pub mod analytics;
pub mod config;
pub mod entity;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod records;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
