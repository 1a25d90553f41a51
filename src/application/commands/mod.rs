//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：唯一的写操作是替换数据快照

mod library_commands;

pub mod handlers;

pub use library_commands::*;
