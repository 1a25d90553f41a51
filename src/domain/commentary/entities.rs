//! Commentary Context - Entities

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::catalog::normalize;
use crate::domain::reference::parse_range;

/// 注释来源类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// 主注释
    Principal,
    /// 补充注释
    Supplementary,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Principal => "principal",
            SourceKind::Supplementary => "supplementary",
        }
    }
}

/// 注释条目的节键：单节 "16" 或闭区间 "3-5"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseKey(String);

impl VerseKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 含 '-' 且两端均为整数时返回区间
    pub fn range(&self) -> Option<(u32, u32)> {
        if !self.0.contains('-') {
            return None;
        }
        parse_range(&self.0)
    }

    /// 区间键按数值包含判断；其余情况要求字符串完全相等
    pub fn matches(&self, verse: &str) -> bool {
        if let (Some((start, end)), Ok(number)) = (self.range(), verse.trim().parse::<u32>()) {
            return start <= number && number <= end;
        }
        self.0 == verse
    }
}

impl std::fmt::Display for VerseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单条经节注释
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseAnnotation {
    pub key: VerseKey,
    pub commentary: String,
    /// 原始交叉引用字符串（未展开）
    pub references: Vec<String>,
}

impl VerseAnnotation {
    pub fn new(key: VerseKey, commentary: impl Into<String>, references: Vec<String>) -> Self {
        Self {
            key,
            commentary: commentary.into(),
            references,
        }
    }
}

/// 一章的注释记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCommentary {
    pub chapter: String,
    pub entries: Vec<VerseAnnotation>,
}

impl ChapterCommentary {
    pub fn new(chapter: impl Into<String>, entries: Vec<VerseAnnotation>) -> Self {
        Self {
            chapter: chapter.into(),
            entries,
        }
    }

    /// 第一个匹配的条目（先声明者优先）
    pub fn find_entry(&self, verse: &str) -> Option<&VerseAnnotation> {
        self.entries.iter().find(|entry| entry.key.matches(verse))
    }
}

/// 注释来源：规范化书卷名 -> 各章注释
#[derive(Debug, Clone)]
pub struct CommentarySource {
    kind: SourceKind,
    books: HashMap<String, Vec<ChapterCommentary>>,
}

impl CommentarySource {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            books: HashMap::new(),
        }
    }

    /// 写入一卷书的注释；同名书卷整体替换
    pub fn insert_book(&mut self, book: impl Into<String>, chapters: Vec<ChapterCommentary>) {
        let book = book.into();
        tracing::debug!(
            source = self.kind.as_str(),
            book = %book,
            chapters = chapters.len(),
            "Commentary book indexed"
        );
        self.books.insert(book, chapters);
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    /// 精确匹配书卷名，其次按规范化名称扫描
    pub fn chapters_for(&self, book: &str) -> Option<&[ChapterCommentary]> {
        if let Some(chapters) = self.books.get(book) {
            return Some(chapters);
        }
        let wanted = normalize(book);
        self.books
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, chapters)| chapters.as_slice())
    }

    /// 查找某节的注释
    pub fn lookup(&self, book: &str, chapter: &str, verse: &str) -> Option<&VerseAnnotation> {
        self.chapters_for(book)?
            .iter()
            .find(|record| record.chapter == chapter)?
            .find_entry(verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(key: &str, text: &str) -> VerseAnnotation {
        VerseAnnotation::new(VerseKey::new(key), text, Vec::new())
    }

    #[test]
    fn test_range_key_matching() {
        let key = VerseKey::new("3-5");
        assert!(key.matches("3"));
        assert!(key.matches("4"));
        assert!(key.matches("5"));
        assert!(!key.matches("6"));
        assert!(!key.matches("2"));
    }

    #[test]
    fn test_single_key_requires_exact_string() {
        let key = VerseKey::new("16");
        assert!(key.matches("16"));
        assert!(!key.matches("016"));
        assert!(key.range().is_none());
    }

    #[test]
    fn test_malformed_range_falls_back_to_exact() {
        let key = VerseKey::new("3-x");
        assert!(key.range().is_none());
        assert!(!key.matches("3"));
        assert!(key.matches("3-x"));
    }

    #[test]
    fn test_first_declared_entry_wins() {
        let chapter = ChapterCommentary::new(
            "5",
            vec![annotation("1-10", "amplio"), annotation("4-5", "estrecho"), annotation("4", "exacto")],
        );
        assert_eq!(chapter.find_entry("4").unwrap().commentary, "amplio");
        assert!(chapter.find_entry("11").is_none());
    }

    #[test]
    fn test_lookup_scans_normalized_book_names() {
        let mut source = CommentarySource::new(SourceKind::Principal);
        source.insert_book("Juan", vec![ChapterCommentary::new("3", vec![annotation("16", "amor")])]);
        assert!(source.lookup("s.juan", "3", "16").is_some());
        assert!(source.lookup("Juan", "3", "17").is_none());
        assert!(source.lookup("Juan", "4", "16").is_none());
        assert!(source.lookup("Mateo", "3", "16").is_none());
    }
}
