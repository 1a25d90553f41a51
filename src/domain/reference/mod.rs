//! Reference Context - 经文引用上下文
//!
//! 职责:
//! - 复合引用字符串展开（隐式书卷承接）
//! - 单条引用解析为 书卷 / 章 / 节或节区间

mod errors;
mod parser;
mod value_objects;

pub use errors::ReferenceError;
pub use parser::{expand, expand_fragment, expand_reference_string};
pub use value_objects::{parse_range, ParsedReference, VerseSpec};
