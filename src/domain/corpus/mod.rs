//! Corpus Context - 经文语料限界上下文
//!
//! 职责:
//! - 语料聚合（书卷 / 章 / 节，正典顺序）
//! - 原始语料重排
//! - 全文检索与经文段落解析

mod aggregate;
mod entities;
mod errors;
mod orderer;
mod passage;
mod search;

pub use aggregate::Corpus;
pub use entities::{Book, Chapter, Verse};
pub use errors::{CorpusError, LookupError};
pub use orderer::{order_chapters_and_verses, order_keys, reorder};
pub use passage::{resolve_passage, resolve_reference, Passage, PassageLine, MAX_PASSAGE_VERSES};
pub use search::{find_verses_containing, SearchHit, DEFAULT_MAX_RESULTS};
