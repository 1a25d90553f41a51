//! Catalog Context - 正典目录限界上下文
//!
//! 职责:
//! - 固定的 66 卷正典顺序（旧约 / 新约）
//! - 别名表
//! - 书卷名规范化

mod aliases;
mod books;
mod resolver;

pub use aliases::{aliases, lookup_alias};
pub use books::{canonical_books, is_canonical, Testament, NEW_TESTAMENT, OLD_TESTAMENT};
pub use resolver::{normalize, resolve, Resolution};
