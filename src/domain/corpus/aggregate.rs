//! Corpus Context - Aggregate Root

use serde::Serialize;
use std::collections::HashMap;

use super::Book;
use crate::domain::catalog::normalize;

/// 经文语料聚合根
///
/// 不变量:
/// - 书卷顺序：正典书卷按目录顺序在前，其余书卷按来源顺序在后
/// - 书卷名唯一
/// - 构建后只读
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    books: Vec<Book>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Corpus {
    /// 由已排序的书卷构建；重名书卷只保留第一个
    pub fn new(books: Vec<Book>) -> Self {
        let mut index = HashMap::with_capacity(books.len());
        let mut unique = Vec::with_capacity(books.len());
        for book in books {
            if index.contains_key(book.name()) {
                tracing::warn!(book = %book.name(), "Duplicate book ignored");
                continue;
            }
            index.insert(book.name().to_string(), unique.len());
            unique.push(book);
        }
        Self {
            books: unique,
            index,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(Book::name)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 精确书卷名查找
    pub fn get(&self, name: &str) -> Option<&Book> {
        self.index.get(name).map(|&i| &self.books[i])
    }

    /// 先精确匹配，再按规范化名称扫描
    pub fn find(&self, name: &str) -> Option<&Book> {
        if let Some(book) = self.get(name) {
            return Some(book);
        }
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.books
            .iter()
            .find(|book| normalize(book.name()) == wanted)
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(Book::verse_count).sum()
    }
}
