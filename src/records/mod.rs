//! 记录库
//!
//! 学生与成绩两个集合的读写门面。集合整体序列化为 JSON 存入后端，
//! 读失败或内容损坏时按空集合处理，写操作串行执行。

mod seed;
mod store;

pub use seed::{seed_results, seed_students};
pub use store::RecordStore;
