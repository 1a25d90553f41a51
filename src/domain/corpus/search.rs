//! 全文检索
//!
//! 唯一随语料规模线性增长的操作，结果数有上限。

use serde::Serialize;

use super::Corpus;

/// 默认结果上限
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// 检索命中
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub text: String,
}

/// 按语料顺序查找包含子串（不区分大小写）的经节，最多 max_results 条
pub fn find_verses_containing(corpus: &Corpus, query: &str, max_results: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || max_results == 0 {
        return Vec::new();
    }

    corpus
        .books()
        .iter()
        .flat_map(|book| {
            book.chapters().iter().flat_map(move |chapter| {
                chapter.verses().iter().map(move |verse| (book, chapter, verse))
            })
        })
        .filter(|(_, _, verse)| verse.text().to_lowercase().contains(&needle))
        .take(max_results)
        .map(|(book, chapter, verse)| SearchHit {
            book: book.name().to_string(),
            chapter: chapter.key().to_string(),
            verse: verse.key().to_string(),
            text: verse.text().to_string(),
        })
        .collect()
}
