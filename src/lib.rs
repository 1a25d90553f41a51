//! Biblia - 经文语料与注释服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 正典目录、书卷别名与名称解析
//! - Corpus Context: 经文排序、检索、段落解析
//! - Reference Context: 复合引用展开
//! - Commentary Context: 主注释 / 补充注释合并
//!
//! 应用层 (application/):
//! - Ports: ScriptureSource 出站端口
//! - Snapshot: 只读数据快照，重载时整体替换
//! - Commands: 重载数据
//! - Queries: 目录、经文、注释、检索、引用
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Persistence: JSON 文件数据源

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
