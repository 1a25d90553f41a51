//! 注释合并器
//!
//! 主注释与补充注释分别独立查找，一个来源失败不影响另一个；
//! 合并后的引用列表去重并保持首次出现的顺序（主注释在前）。

use serde::Serialize;
use std::collections::HashSet;

use super::{CommentarySource, VerseAnnotation};
use crate::domain::catalog::normalize;
use crate::domain::reference::expand;

/// 默认补充注释标签
pub const DEFAULT_SUPPLEMENTARY_LABEL: &str = "CBA";

/// 没有任何注释时的返回文本
pub const NO_COMMENTARY: &str = "No hay comentario disponible para este versículo.";

/// 合并输出所用的标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeLabels {
    pub supplementary: String,
    pub empty_message: String,
}

impl Default for MergeLabels {
    fn default() -> Self {
        Self {
            supplementary: DEFAULT_SUPPLEMENTARY_LABEL.to_string(),
            empty_message: NO_COMMENTARY.to_string(),
        }
    }
}

/// 各来源是否提供了注释文本
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceFlags {
    pub principal: bool,
    pub supplementary: bool,
}

/// 合并后的经节注释
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedVerse {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub commentary: String,
    /// 主注释原始引用 + 补充注释展开后的引用，以 "; " 连接
    pub reference: String,
    /// 去重后的展开引用
    pub reference_list: Vec<String>,
    pub sources: SourceFlags,
}

/// 单个来源的命中结果
#[derive(Debug, Default)]
struct SourceMatch {
    commentary: Option<String>,
    raw_references: Vec<String>,
    expanded_references: Vec<String>,
}

impl SourceMatch {
    fn matched(entry: &VerseAnnotation) -> Self {
        Self {
            commentary: Some(entry.commentary.clone()),
            raw_references: entry.references.clone(),
            expanded_references: entry.references.iter().flat_map(|raw| expand(raw)).collect(),
        }
    }

    /// 主注释：命中即计入，文本原样保留（可能为空）
    fn principal(entry: Option<&VerseAnnotation>) -> Self {
        entry.map(Self::matched).unwrap_or_default()
    }

    /// 补充注释：文本为空白的条目视为未命中，其引用也不计入
    fn supplementary(entry: Option<&VerseAnnotation>) -> Self {
        entry
            .filter(|entry| !entry.commentary.trim().is_empty())
            .map(Self::matched)
            .unwrap_or_default()
    }

    fn contributed(&self) -> bool {
        self.commentary.is_some()
    }
}

/// 注释合并器
///
/// 只借用快照中的两个来源，本身不持有状态。
pub struct AnnotationMerger<'a> {
    principal: &'a CommentarySource,
    supplementary: &'a CommentarySource,
    labels: &'a MergeLabels,
}

impl<'a> AnnotationMerger<'a> {
    pub fn new(
        principal: &'a CommentarySource,
        supplementary: &'a CommentarySource,
        labels: &'a MergeLabels,
    ) -> Self {
        Self {
            principal,
            supplementary,
            labels,
        }
    }

    /// 查找并合并某节的注释
    pub fn lookup(&self, book: &str, chapter: &str, verse: &str) -> AnnotatedVerse {
        let book = normalize(book);
        let chapter = chapter.trim();
        let verse = verse.trim();

        let principal = SourceMatch::principal(self.principal.lookup(&book, chapter, verse));
        let supplementary =
            SourceMatch::supplementary(self.supplementary.lookup(&book, chapter, verse));

        let sources = SourceFlags {
            principal: principal.contributed(),
            supplementary: supplementary.contributed(),
        };

        let label = &self.labels.supplementary;
        let commentary = match (&principal.commentary, &supplementary.commentary) {
            (Some(main), Some(extra)) => format!("{}\n\n[{}]\n{}", main, label, extra),
            (Some(main), None) => main.clone(),
            (None, Some(extra)) => format!("[{}]\n{}", label, extra),
            (None, None) => self.labels.empty_message.clone(),
        };

        let mut seen = HashSet::new();
        let reference_list: Vec<String> = principal
            .expanded_references
            .iter()
            .chain(&supplementary.expanded_references)
            .filter(|reference| seen.insert(reference.as_str()))
            .cloned()
            .collect();

        let reference = principal
            .raw_references
            .iter()
            .chain(&supplementary.expanded_references)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        tracing::debug!(
            book = %book,
            chapter = %chapter,
            verse = %verse,
            principal = sources.principal,
            supplementary = sources.supplementary,
            references = reference_list.len(),
            "Commentary merged"
        );

        AnnotatedVerse {
            book,
            chapter: chapter.to_string(),
            verse: verse.to_string(),
            commentary,
            reference,
            reference_list,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commentary::{ChapterCommentary, SourceKind, VerseKey};

    fn source(kind: SourceKind, book: &str, chapter: &str, entries: Vec<VerseAnnotation>) -> CommentarySource {
        let mut source = CommentarySource::new(kind);
        source.insert_book(book, vec![ChapterCommentary::new(chapter, entries)]);
        source
    }

    fn entry(key: &str, text: &str, references: &[&str]) -> VerseAnnotation {
        VerseAnnotation::new(
            VerseKey::new(key),
            text,
            references.iter().map(|r| r.to_string()).collect(),
        )
    }

    #[test]
    fn test_both_sources_merged_with_provenance() {
        let principal = source(
            SourceKind::Principal,
            "Juan",
            "3",
            vec![entry("16", "El amor de Dios.", &["Romanos 5:8; 1 Juan 4:9"])],
        );
        let supplementary = source(
            SourceKind::Supplementary,
            "Juan",
            "3",
            vec![entry("14-16", "La serpiente de bronce.", &["Números 21:9", "Romanos 5:8"])],
        );
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("S. Juan", "3", "16");

        assert_eq!(merged.book, "Juan");
        assert_eq!(merged.commentary, "El amor de Dios.\n\n[CBA]\nLa serpiente de bronce.");
        assert_eq!(
            merged.reference_list,
            vec!["Romanos 5:8", "1 Juan 4:9", "Números 21:9"]
        );
        assert_eq!(
            merged.reference,
            "Romanos 5:8; 1 Juan 4:9; Números 21:9; Romanos 5:8"
        );
        assert_eq!(merged.sources, SourceFlags { principal: true, supplementary: true });
    }

    #[test]
    fn test_supplementary_only_is_labeled() {
        let principal = CommentarySource::new(SourceKind::Principal);
        let supplementary = source(
            SourceKind::Supplementary,
            "Mateo",
            "5",
            vec![entry("3-5", "Las bienaventuranzas.", &["Lucas 6:20; 6:21"])],
        );
        let labels = MergeLabels::default();
        let merger = AnnotationMerger::new(&principal, &supplementary, &labels);

        let merged = merger.lookup("Mateo", "5", "4");
        assert_eq!(merged.commentary, "[CBA]\nLas bienaventuranzas.");
        assert_eq!(merged.reference_list, vec!["Lucas 6:20", "Lucas 6:21"]);
        assert_eq!(merged.sources, SourceFlags { principal: false, supplementary: true });

        let outside = merger.lookup("Mateo", "5", "6");
        assert_eq!(outside.commentary, NO_COMMENTARY);
        assert!(outside.reference_list.is_empty());
        assert_eq!(outside.sources, SourceFlags::default());
    }

    #[test]
    fn test_principal_only() {
        let principal = source(SourceKind::Principal, "Génesis", "1", vec![entry("1", "La creación.", &[])]);
        let supplementary = CommentarySource::new(SourceKind::Supplementary);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("genesis", "1", "1");
        assert_eq!(merged.commentary, "La creación.");
        assert_eq!(merged.reference, "");
        assert!(merged.sources.principal);
    }

    #[test]
    fn test_malformed_entry_in_one_source_does_not_block_the_other() {
        let principal = source(
            SourceKind::Principal,
            "Juan",
            "1",
            vec![entry("1-x", "roto", &[]), entry("1", "En el principio.", &[])],
        );
        let supplementary = source(SourceKind::Supplementary, "Juan", "1", vec![entry("a-b", "roto", &[])]);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Juan", "1", "1");
        assert_eq!(merged.commentary, "En el principio.");
        assert_eq!(merged.sources, SourceFlags { principal: true, supplementary: false });
    }

    #[test]
    fn test_unknown_book_reports_no_commentary() {
        let principal = source(SourceKind::Principal, "Juan", "1", vec![entry("1", "texto", &[])]);
        let supplementary = CommentarySource::new(SourceKind::Supplementary);
        let labels = MergeLabels {
            supplementary: "Ampliado".to_string(),
            empty_message: "Sin comentario".to_string(),
        };
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Enoc", "1", "1");
        assert_eq!(merged.commentary, "Sin comentario");
        assert_eq!(merged.book, "Enoc");
    }

    #[test]
    fn test_duplicate_references_removed() {
        let principal = source(SourceKind::Principal, "Juan", "3", vec![entry("16", "a", &["Juan 1:14"])]);
        let supplementary = source(SourceKind::Supplementary, "Juan", "3", vec![entry("16", "b", &["Juan 1:14"])]);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Juan", "3", "16");
        assert_eq!(merged.reference_list, vec!["Juan 1:14"]);
    }

    #[test]
    fn test_principal_match_with_empty_text_still_counts() {
        let principal = source(SourceKind::Principal, "Juan", "3", vec![entry("16", "", &["Rom 5:8"])]);
        let supplementary = CommentarySource::new(SourceKind::Supplementary);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Juan", "3", "16");

        assert_eq!(merged.commentary, "");
        assert_eq!(merged.sources, SourceFlags { principal: true, supplementary: false });
        assert_eq!(merged.reference_list, vec!["Rom 5:8"]);
        assert_eq!(merged.reference, "Rom 5:8");
    }

    #[test]
    fn test_blank_supplementary_entry_contributes_nothing() {
        let principal = CommentarySource::new(SourceKind::Principal);
        let supplementary = source(SourceKind::Supplementary, "Juan", "3", vec![entry("16", "  ", &["Juan 1:14"])]);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Juan", "3", "16");

        assert_eq!(merged.commentary, NO_COMMENTARY);
        assert!(merged.reference_list.is_empty());
        assert_eq!(merged.reference, "");
        assert_eq!(merged.sources, SourceFlags::default());
    }

    #[test]
    fn test_commentary_text_passed_through_unchanged() {
        let principal = source(SourceKind::Principal, "Juan", "3", vec![entry("16", "  El amor.\n", &[])]);
        let supplementary = source(SourceKind::Supplementary, "Juan", "3", vec![entry("16", " Dio a su Hijo ", &[])]);
        let labels = MergeLabels::default();
        let merged = AnnotationMerger::new(&principal, &supplementary, &labels).lookup("Juan", "3", "16");

        assert_eq!(merged.commentary, "  El amor.\n\n\n[CBA]\n Dio a su Hijo ");
    }
}
