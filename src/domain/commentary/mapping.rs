//! 原始注释数据 -> CommentarySource
//!
//! 主注释：每卷一个文档
//! `{ "libro": .., "comentarios": [ { "capitulo": .., "versiculos": [ { "versiculo": .., "comentario": .., "referencia": .. } ] } ] }`
//!
//! 补充注释：单个对象
//! `{ libro: { capitulo: { versiculo: { "comentarios": [..], "referencias_cruzadas": [..] } } } }`
//!
//! 畸形条目逐条跳过，不影响其余数据。

use serde_json::{Map, Value};

use super::{ChapterCommentary, CommentarySource, SourceKind, VerseAnnotation, VerseKey};
use crate::domain::catalog::normalize;

/// 标量值转字符串（章号、节键可能是数字）
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// 引用字段：字符串或字符串数组，忽略空白项
fn references_of(value: Option<&Value>) -> Vec<String> {
    let non_blank = |text: &str| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };
    match value {
        Some(Value::String(text)) => non_blank(text.as_str()).into_iter().collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().and_then(non_blank))
            .collect(),
        _ => Vec::new(),
    }
}

fn principal_entry(book: &str, chapter: &str, value: &Value) -> Option<VerseAnnotation> {
    let entry = value.as_object()?;
    let Some(key) = entry.get("versiculo").and_then(scalar_to_string) else {
        tracing::debug!(book = %book, chapter = %chapter, "Commentary entry without verse key skipped");
        return None;
    };
    let commentary = entry
        .get("comentario")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(VerseAnnotation::new(
        VerseKey::new(key),
        commentary,
        references_of(entry.get("referencia")),
    ))
}

fn principal_chapter(book: &str, value: &Value) -> Option<ChapterCommentary> {
    let record = value.as_object()?;
    let chapter = record.get("capitulo").and_then(scalar_to_string)?;
    let entries = record
        .get("versiculos")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| principal_entry(book, &chapter, item))
                .collect()
        })
        .unwrap_or_default();
    Some(ChapterCommentary::new(chapter, entries))
}

/// 由主注释文档构建来源
pub fn principal_from_documents(documents: &[Value]) -> CommentarySource {
    let mut source = CommentarySource::new(SourceKind::Principal);

    for document in documents {
        let Some(name) = document
            .get("libro")
            .and_then(Value::as_str)
            .map(normalize)
            .filter(|name| !name.is_empty())
        else {
            tracing::warn!("Commentary document without book name skipped");
            continue;
        };

        let chapters: Vec<ChapterCommentary> = document
            .get("comentarios")
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|record| {
                        let chapter = principal_chapter(&name, record);
                        if chapter.is_none() {
                            tracing::debug!(book = %name, "Malformed chapter commentary skipped");
                        }
                        chapter
                    })
                    .collect()
            })
            .unwrap_or_default();

        source.insert_book(name, chapters);
    }

    source
}

fn supplementary_entry(key: &str, value: &Value) -> Option<VerseAnnotation> {
    let entry = value.as_object()?;
    let commentary = entry
        .get("comentarios")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    Some(VerseAnnotation::new(
        VerseKey::new(key),
        commentary,
        references_of(entry.get("referencias_cruzadas")),
    ))
}

/// 由补充注释对象构建来源；章、节保持来源中的声明顺序
pub fn supplementary_from_map(raw: &Map<String, Value>) -> CommentarySource {
    let mut source = CommentarySource::new(SourceKind::Supplementary);

    for (book, chapters) in raw {
        let name = normalize(book);
        let Some(chapters) = chapters.as_object().filter(|_| !name.is_empty()) else {
            tracing::warn!(source = %book, "Supplementary commentary book skipped");
            continue;
        };

        let records: Vec<ChapterCommentary> = chapters
            .iter()
            .filter_map(|(chapter, verses)| {
                let verses = verses.as_object()?;
                let entries = verses
                    .iter()
                    .filter_map(|(key, value)| supplementary_entry(key, value))
                    .collect();
                Some(ChapterCommentary::new(chapter.clone(), entries))
            })
            .collect();

        source.insert_book(name, records);
    }

    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_principal_documents() {
        let documents = vec![
            json!({
                "libro": "S. Juan",
                "comentarios": [
                    {"capitulo": 3, "versiculos": [
                        {"versiculo": "16", "comentario": "El amor de Dios", "referencia": "Romanos 5:8; 1 Juan 4:9"},
                        {"versiculo": "17-18", "comentario": "No para condenar"},
                        {"comentario": "sin clave"},
                        "no es objeto"
                    ]},
                    {"versiculos": []}
                ]
            }),
            json!({"comentarios": []}),
        ];

        let source = principal_from_documents(&documents);
        assert_eq!(source.book_count(), 1);

        let entry = source.lookup("Juan", "3", "16").unwrap();
        assert_eq!(entry.commentary, "El amor de Dios");
        assert_eq!(entry.references, vec!["Romanos 5:8; 1 Juan 4:9"]);

        let ranged = source.lookup("Juan", "3", "18").unwrap();
        assert_eq!(ranged.key.as_str(), "17-18");
        assert!(ranged.references.is_empty());
    }

    #[test]
    fn test_principal_reference_list() {
        let documents = vec![json!({
            "libro": "Mateo",
            "comentarios": [{"capitulo": "5", "versiculos": [
                {"versiculo": 3, "comentario": "pobres", "referencia": ["Lucas 6:20", " ", "Isaías 57:15"]}
            ]}]
        })];
        let source = principal_from_documents(&documents);
        let entry = source.lookup("Mateo", "5", "3").unwrap();
        assert_eq!(entry.references, vec!["Lucas 6:20", "Isaías 57:15"]);
    }

    #[test]
    fn test_supplementary_map() {
        let raw = json!({
            "Juan": {
                "3": {
                    "16": {"comentarios": ["Porque de tal manera", "amó Dios"], "referencias_cruzadas": ["Juan 1:14", ""]},
                    "1-5": {"comentarios": ["Nicodemo"]},
                    "20": "no es objeto"
                },
                "4": "no es objeto"
            },
            "": {"1": {}}
        });
        let source = supplementary_from_map(raw.as_object().unwrap());
        assert_eq!(source.book_count(), 1);

        let entry = source.lookup("Juan", "3", "16").unwrap();
        assert_eq!(entry.commentary, "Porque de tal manera amó Dios");
        assert_eq!(entry.references, vec!["Juan 1:14"]);

        assert_eq!(source.lookup("Juan", "3", "2").unwrap().commentary, "Nicodemo");
        assert!(source.lookup("Juan", "3", "20").is_none());
        assert!(source.lookup("Juan", "4", "1").is_none());
    }
}
