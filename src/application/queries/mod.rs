//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：所有查询都是对当前快照的同步只读计算

mod commentary_queries;
mod library_queries;
mod scripture_queries;

pub mod handlers;

pub use commentary_queries::*;
pub use library_queries::*;
pub use scripture_queries::*;
