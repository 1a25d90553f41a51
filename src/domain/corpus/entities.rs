//! Corpus Context - Entities

use serde::Serialize;

/// 经节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    key: String,
    text: String,
}

impl Verse {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 章
///
/// 不变量:
/// - verses 已按数字键优先、数值升序排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    key: String,
    verses: Vec<Verse>,
}

impl Chapter {
    pub fn new(key: impl Into<String>, verses: Vec<Verse>) -> Self {
        Self {
            key: key.into(),
            verses,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn verse(&self, key: &str) -> Option<&Verse> {
        self.verses.iter().find(|verse| verse.key == key)
    }

    pub fn verse_keys(&self) -> impl Iterator<Item = &str> {
        self.verses.iter().map(Verse::key)
    }
}

/// 书卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    name: String,
    chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(name: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            name: name.into(),
            chapters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.key == key)
    }

    pub fn chapter_keys(&self) -> impl Iterator<Item = &str> {
        self.chapters.iter().map(Chapter::key)
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.verses.len()).sum()
    }
}
