//! 语料排序器
//!
//! 将任意键序的 book -> chapter -> verse 原始结构整理为正典顺序:
//! 1. 按目录顺序放置正典书卷（精确键优先，其次规范化名称匹配）
//! 2. 目录外且未与已放置书卷重名的书卷追加在后
//! 3. 章、节键：数字键在前按数值升序，其余键按字典序

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::{Book, Chapter, Corpus, CorpusError, Verse};
use crate::domain::catalog::{canonical_books, normalize};

/// 非空且全部为 ASCII 数字
fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// 章/节键排序
///
/// 数字键按整数值升序（同值按原字符串），非数字键按字典序，数字键在前。
/// 数字键无法表示为整数时返回错误，由调用方决定保留原顺序。
pub fn order_keys<'a, I>(keys: I) -> Result<Vec<&'a str>, CorpusError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut numeric: Vec<(u64, &str)> = Vec::new();
    let mut other: Vec<&str> = Vec::new();

    for key in keys {
        if is_numeric_key(key) {
            let value = key
                .parse::<u64>()
                .map_err(|_| CorpusError::KeyOverflow(key.to_string()))?;
            numeric.push((value, key));
        } else {
            other.push(key);
        }
    }

    numeric.sort_unstable();
    other.sort_unstable();

    Ok(numeric
        .into_iter()
        .map(|(_, key)| key)
        .chain(other)
        .collect())
}

/// 排序失败时退回来源顺序
fn keys_or_source_order<'a>(map: &'a Map<String, Value>, book: &str, level: &str) -> Vec<&'a str> {
    order_keys(map.keys().map(String::as_str)).unwrap_or_else(|e| {
        tracing::warn!(book = %book, level = level, error = %e, "Key ordering failed, keeping source order");
        map.keys().map(String::as_str).collect()
    })
}

fn non_empty_object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object().filter(|map| !map.is_empty())
}

/// 经文值：字符串原样保留，数字/布尔转为字符串，其余视为畸形条目
fn verse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn order_verses(book: &str, chapter: &str, verses: &Map<String, Value>) -> Vec<Verse> {
    keys_or_source_order(verses, book, "verse")
        .into_iter()
        .filter_map(|key| match verses.get(key).and_then(verse_text) {
            Some(text) => Some(Verse::new(key, text)),
            None => {
                tracing::debug!(book = %book, chapter = %chapter, verse = %key, "Malformed verse skipped");
                None
            }
        })
        .collect()
}

/// 对一卷书的章和节排序
///
/// 非对象或空的章容器被跳过；没有有效经节的章被丢弃。
pub fn order_chapters_and_verses(book: &str, chapters: &Map<String, Value>) -> Vec<Chapter> {
    keys_or_source_order(chapters, book, "chapter")
        .into_iter()
        .filter_map(|key| {
            let Some(verses) = chapters.get(key).and_then(non_empty_object) else {
                tracing::debug!(book = %book, chapter = %key, "Malformed chapter skipped");
                return None;
            };
            let verses = order_verses(book, key, verses);
            (!verses.is_empty()).then(|| Chapter::new(key, verses))
        })
        .collect()
}

/// 构建一卷书；内容为空或畸形时返回 None
fn build_book(name: &str, content: &Value) -> Option<Book> {
    let chapters = order_chapters_and_verses(name, non_empty_object(content)?);
    (!chapters.is_empty()).then(|| Book::new(name, chapters))
}

/// 按正典顺序重排原始语料
pub fn reorder(raw: &Map<String, Value>) -> Corpus {
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut books: Vec<Book> = Vec::new();

    for canonical in canonical_books() {
        if let Some(book) = raw.get(canonical).and_then(|content| build_book(canonical, content)) {
            claimed.insert(canonical);
            books.push(book);
            tracing::debug!(book = %canonical, "Book matched exactly");
            continue;
        }

        let wanted = normalize(canonical);
        for (raw_key, content) in raw {
            if claimed.contains(raw_key.as_str()) || normalize(raw_key) != wanted {
                continue;
            }
            if let Some(book) = build_book(canonical, content) {
                claimed.insert(raw_key.as_str());
                books.push(book);
                tracing::info!(source = %raw_key, book = %canonical, "Book mapped");
                break;
            }
        }
    }

    for (raw_key, content) in raw {
        if claimed.contains(raw_key.as_str()) {
            continue;
        }

        let normalized = normalize(raw_key);
        if normalized.is_empty() {
            tracing::warn!(source = %raw_key, "Book with empty name dropped");
            continue;
        }
        if books.iter().any(|book| normalize(book.name()) == normalized) {
            tracing::debug!(source = %raw_key, book = %normalized, "Book already placed, skipped");
            continue;
        }

        match build_book(&normalized, content) {
            Some(book) => {
                claimed.insert(raw_key.as_str());
                books.push(book);
                tracing::info!(source = %raw_key, book = %normalized, "Non-catalog book appended");
            }
            None => {
                tracing::warn!(source = %raw_key, "Book dropped: empty or malformed content");
            }
        }
    }

    tracing::info!(
        source_books = raw.len(),
        ordered_books = books.len(),
        "Corpus ordering completed"
    );

    Corpus::new(books)
}
