//! Persistence Layer - 数据读取
//!
//! 只读 JSON 文件数据源实现

pub mod json;

pub use self::json::JsonFileSource;
