//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::corpus::LookupError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{0}")]
    NotFound(String),

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),
}

impl From<LookupError> for ApplicationError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidReference(_) => Self::ValidationError(err.to_string()),
            _ => Self::NotFound(err.to_string()),
        }
    }
}
