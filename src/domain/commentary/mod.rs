//! Commentary Context - 注释限界上下文
//!
//! 职责:
//! - 注释来源（主注释 / 补充注释）及其按章、按节（含区间）的条目
//! - 原始注释数据映射
//! - 多来源查找与合并

mod entities;
mod mapping;
mod merger;

pub use entities::{
    ChapterCommentary, CommentarySource, SourceKind, VerseAnnotation, VerseKey,
};
pub use mapping::{principal_from_documents, supplementary_from_map};
pub use merger::{
    AnnotatedVerse, AnnotationMerger, MergeLabels, SourceFlags, DEFAULT_SUPPLEMENTARY_LABEL,
    NO_COMMENTARY,
};
