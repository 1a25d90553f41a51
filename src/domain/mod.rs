//! Domain Layer - 领域层
//!
//! 包含四个限界上下文:
//! - Catalog Context: 正典目录与书卷名解析
//! - Corpus Context: 经文语料、排序、检索
//! - Reference Context: 经文引用解析
//! - Commentary Context: 注释来源与合并

pub mod catalog;
pub mod commentary;
pub mod corpus;
pub mod reference;
