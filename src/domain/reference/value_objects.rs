//! Reference Context - Value Objects

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::str::FromStr;

use super::ReferenceError;
use crate::domain::catalog::normalize;

lazy_static! {
    static ref REFERENCE_PATTERN: Regex =
        Regex::new(r"(.+?)\s+(\d+):(\d+(?:-\d+)?)").unwrap();
}

/// 经节说明：单节或闭区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerseSpec {
    Single(u32),
    Range { start: u32, end: u32 },
}

impl VerseSpec {
    pub fn is_range(&self) -> bool {
        matches!(self, VerseSpec::Range { .. })
    }
}

/// 解析闭区间 "start-end"；不是合法区间时返回 None
pub fn parse_range(text: &str) -> Option<(u32, u32)> {
    let (start, end) = text.split_once('-')?;
    let start = start.trim().parse().ok()?;
    let end = end.trim().parse().ok()?;
    Some((start, end))
}

impl FromStr for VerseSpec {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('-') {
            return parse_range(s)
                .map(|(start, end)| VerseSpec::Range { start, end })
                .ok_or_else(|| ReferenceError::InvalidRange(s.to_string()));
        }
        s.parse()
            .map(VerseSpec::Single)
            .map_err(|_| ReferenceError::InvalidFormat(s.to_string()))
    }
}

impl std::fmt::Display for VerseSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerseSpec::Single(number) => write!(f, "{}", number),
            VerseSpec::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

impl Serialize for VerseSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 解析后的经文引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    pub book: String,
    pub chapter: String,
    pub verse: VerseSpec,
}

impl ParsedReference {
    /// 解析 "Libro capítulo:versículo[-versículo]"
    pub fn parse(reference: &str) -> Result<Self, ReferenceError> {
        let captures = REFERENCE_PATTERN
            .captures(reference.trim())
            .ok_or_else(|| ReferenceError::InvalidFormat(reference.to_string()))?;

        let book = normalize(&captures[1]);
        if book.is_empty() {
            return Err(ReferenceError::InvalidFormat(reference.to_string()));
        }

        Ok(Self {
            book,
            chapter: captures[2].to_string(),
            verse: captures[3].parse()?,
        })
    }
}

impl FromStr for ParsedReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_verse() {
        let reference = ParsedReference::parse("Juan 3:16").unwrap();
        assert_eq!(reference.book, "Juan");
        assert_eq!(reference.chapter, "3");
        assert_eq!(reference.verse, VerseSpec::Single(16));
    }

    #[test]
    fn test_parse_range_with_alias() {
        let reference = ParsedReference::parse("S. Mateo 5:3-5").unwrap();
        assert_eq!(reference.book, "Mateo");
        assert_eq!(reference.verse, VerseSpec::Range { start: 3, end: 5 });
        assert_eq!(reference.to_string(), "Mateo 5:3-5");
    }

    #[test]
    fn test_parse_numbered_book() {
        let reference = ParsedReference::parse("1 juan 4:8").unwrap();
        assert_eq!(reference.book, "1 Juan");
        assert_eq!(reference.chapter, "4");
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            ParsedReference::parse("Juan"),
            Err(ReferenceError::InvalidFormat(_))
        ));
        assert!(matches!(
            ParsedReference::parse("3:16"),
            Err(ReferenceError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_verse_spec_parse() {
        let range: VerseSpec = "3-5".parse().unwrap();
        assert_eq!(range, VerseSpec::Range { start: 3, end: 5 });
        assert_eq!("7".parse::<VerseSpec>().unwrap(), VerseSpec::Single(7));
        assert!("x-5".parse::<VerseSpec>().is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("3-5"), Some((3, 5)));
        assert_eq!(parse_range("3-x"), None);
        assert_eq!(parse_range("3"), None);
        assert_eq!(parse_range("1-2-3"), None);
    }
}
