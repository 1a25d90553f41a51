//! 单节 / 节区间经文解析

use serde::Serialize;

use super::{Corpus, LookupError};
use crate::domain::reference::{ParsedReference, VerseSpec};

/// 单次可展开的最大节数
pub const MAX_PASSAGE_VERSES: u32 = 200;

const MISSING_VERSE: &str = "[Versículo no encontrado]";

/// 区间中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassageLine {
    pub verse: u32,
    pub text: Option<String>,
}

impl std::fmt::Display for PassageLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.verse, self.text.as_deref().unwrap_or(MISSING_VERSE))
    }
}

/// 解析后的经文段落
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    pub book: String,
    pub chapter: String,
    pub verse: VerseSpec,
    /// 单节为经文本身；区间为逐行 "n. 经文"，以换行连接
    pub text: String,
    /// 区间的逐节内容；单节时为空
    pub lines: Vec<PassageLine>,
}

impl Passage {
    pub fn is_range(&self) -> bool {
        self.verse.is_range()
    }
}

/// 在语料中解析 书卷 / 章 / 节或区间
pub fn resolve_passage(
    corpus: &Corpus,
    book: &str,
    chapter: &str,
    verse: VerseSpec,
) -> Result<Passage, LookupError> {
    let found = corpus
        .find(book)
        .ok_or_else(|| LookupError::BookNotFound(book.to_string()))?;
    let chapter_entry = found
        .chapter(chapter)
        .ok_or_else(|| LookupError::ChapterNotFound {
            book: found.name().to_string(),
            chapter: chapter.to_string(),
        })?;

    match verse {
        VerseSpec::Single(number) => {
            let key = number.to_string();
            let entry = chapter_entry
                .verse(&key)
                .ok_or_else(|| LookupError::VerseNotFound {
                    book: found.name().to_string(),
                    chapter: chapter.to_string(),
                    verse: key.clone(),
                })?;
            Ok(Passage {
                book: found.name().to_string(),
                chapter: chapter.to_string(),
                verse,
                text: entry.text().to_string(),
                lines: Vec::new(),
            })
        }
        VerseSpec::Range { start, end } => {
            if start > end || end - start >= MAX_PASSAGE_VERSES {
                return Err(LookupError::InvalidReference(format!(
                    "{} {}:{}",
                    found.name(),
                    chapter,
                    verse
                )));
            }

            let lines: Vec<PassageLine> = (start..=end)
                .map(|number| PassageLine {
                    verse: number,
                    text: chapter_entry
                        .verse(&number.to_string())
                        .map(|entry| entry.text().to_string()),
                })
                .collect();
            let text = lines
                .iter()
                .map(PassageLine::to_string)
                .collect::<Vec<_>>()
                .join("\n");

            Ok(Passage {
                book: found.name().to_string(),
                chapter: chapter.to_string(),
                verse,
                text,
                lines,
            })
        }
    }
}

/// 解析引用字符串并取出经文
pub fn resolve_reference(corpus: &Corpus, reference: &str) -> Result<Passage, LookupError> {
    let parsed = ParsedReference::parse(reference)
        .map_err(|e| LookupError::InvalidReference(e.to_string()))?;
    resolve_passage(corpus, &parsed.book, &parsed.chapter, parsed.verse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::{Book, Chapter, Verse};

    fn corpus() -> Corpus {
        Corpus::new(vec![Book::new(
            "Mateo",
            vec![Chapter::new(
                "5",
                vec![
                    Verse::new("3", "Bienaventurados los pobres en espíritu"),
                    Verse::new("4", "Bienaventurados los que lloran"),
                    Verse::new("6", "Bienaventurados los que tienen hambre"),
                ],
            )],
        )])
    }

    #[test]
    fn test_single_verse() {
        let passage = resolve_reference(&corpus(), "S. Mateo 5:4").unwrap();
        assert_eq!(passage.book, "Mateo");
        assert_eq!(passage.text, "Bienaventurados los que lloran");
        assert!(!passage.is_range());
    }

    #[test]
    fn test_range_marks_missing_verses() {
        let passage = resolve_reference(&corpus(), "Mateo 5:3-5").unwrap();
        assert!(passage.is_range());
        assert_eq!(passage.lines.len(), 3);
        assert_eq!(
            passage.text,
            "3. Bienaventurados los pobres en espíritu\n4. Bienaventurados los que lloran\n5. [Versículo no encontrado]"
        );
    }

    #[test]
    fn test_not_found_errors() {
        assert_eq!(
            resolve_reference(&corpus(), "Enoc 1:1"),
            Err(LookupError::BookNotFound("Enoc".to_string()))
        );
        assert!(matches!(
            resolve_reference(&corpus(), "Mateo 6:1"),
            Err(LookupError::ChapterNotFound { .. })
        ));
        assert!(matches!(
            resolve_reference(&corpus(), "Mateo 5:5"),
            Err(LookupError::VerseNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_references() {
        assert!(matches!(
            resolve_reference(&corpus(), "Mateo"),
            Err(LookupError::InvalidReference(_))
        ));
        assert!(matches!(
            resolve_passage(&corpus(), "Mateo", "5", VerseSpec::Range { start: 6, end: 3 }),
            Err(LookupError::InvalidReference(_))
        ));
        assert!(matches!(
            resolve_passage(&corpus(), "Mateo", "5", VerseSpec::Range { start: 1, end: 5000 }),
            Err(LookupError::InvalidReference(_))
        ));
    }
}
