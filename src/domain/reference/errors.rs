//! Reference Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("Formato de referencia inválido. Use: \"Libro Capítulo:Versículo\" ({0})")]
    InvalidFormat(String),

    #[error("Rango de versículos inválido: {0}")]
    InvalidRange(String),
}
