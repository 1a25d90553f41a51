//! Library Commands

use serde::Serialize;

/// 重载触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadTrigger {
    Startup,
    Manual,
}

impl ReloadTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Manual => "manual",
        }
    }
}

/// 重新读取全部数据源并替换快照
#[derive(Debug, Clone)]
pub struct ReloadLibrary {
    pub trigger: ReloadTrigger,
}
