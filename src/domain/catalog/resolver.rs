//! 书卷名解析器
//!
//! 规范化策略:
//! 1. 完整短语查别名表（"san pablo" 这类多词别名在此命中）
//! 2. 去掉一个尊称前缀（S. / San / Santa / Santo + 空白）后再查别名表
//! 3. 未命中时逐词首字母大写，作为尽力而为的结果

use lazy_static::lazy_static;
use regex::Regex;

use super::aliases::lookup_alias;
use super::books::is_canonical;

lazy_static! {
    static ref HONORIFIC_PREFIX: Regex =
        Regex::new(r"(?i)^(s\.|san|santa|santo)\s+").unwrap();
}

/// 解析结果：区分正典书卷与尽力而为的规范化形式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 目录中的书卷
    Canonical(String),
    /// 仅完成规范化，不在目录中
    Unverified(String),
}

impl Resolution {
    pub fn is_canonical(&self) -> bool {
        matches!(self, Resolution::Canonical(_))
    }

    pub fn into_name(self) -> String {
        match self {
            Resolution::Canonical(name) | Resolution::Unverified(name) => name,
        }
    }
}

/// 小写并压缩空白
fn fold_whitespace_lower(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// 规范化书卷名
///
/// 纯函数；对目录书卷名及其别名幂等。空输入返回空字符串。
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let full = fold_whitespace_lower(trimmed);
    if let Some(book) = lookup_alias(&full) {
        return book.to_string();
    }

    let stripped = HONORIFIC_PREFIX.replace(trimmed, "");
    let remainder = fold_whitespace_lower(&stripped);
    if let Some(book) = lookup_alias(&remainder) {
        return book.to_string();
    }

    remainder
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 解析书卷名并标注是否命中目录
pub fn resolve(raw: &str) -> Resolution {
    let name = normalize(raw);
    if is_canonical(&name) {
        Resolution::Canonical(name)
    } else {
        Resolution::Unverified(name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::catalog::books::canonical_books;
    use proptest::prelude::*;

    fn catalog_name() -> impl Strategy<Value = String> {
        let books: Vec<String> = canonical_books().map(str::to_string).collect();
        proptest::sample::select(books)
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_on_catalog_names(book in catalog_name()) {
            let once = normalize(&book);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert_eq!(once, book);
        }

        #[test]
        fn case_and_padding_do_not_matter(book in catalog_name(), pad in 0usize..4, upper in any::<bool>()) {
            let spaced = format!("{}{}{}", " ".repeat(pad), book, " ".repeat(pad));
            let cased = if upper { spaced.to_uppercase() } else { spaced.to_lowercase() };
            prop_assert_eq!(normalize(&cased), book);
        }
    }
}
