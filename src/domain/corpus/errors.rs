//! Corpus Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("数字键超出范围: {0}")]
    KeyOverflow(String),
}

/// 经文查找错误
///
/// 只作为"未找到 / 格式无效"结果返回给调用方，从不中断请求
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Libro \"{0}\" no encontrado")]
    BookNotFound(String),

    #[error("Capítulo {chapter} no encontrado en {book}")]
    ChapterNotFound { book: String, chapter: String },

    #[error("Versículo {verse} no encontrado en {book} {chapter}")]
    VerseNotFound {
        book: String,
        chapter: String,
        verse: String,
    },

    #[error("Referencia inválida: {0}")]
    InvalidReference(String),
}
