//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod commentary_handlers;
mod library_handlers;
mod scripture_handlers;

pub use commentary_handlers::*;
pub use library_handlers::*;
pub use scripture_handlers::*;
