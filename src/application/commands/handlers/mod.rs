//! Command Handlers 实现

mod library_handlers;

pub use library_handlers::*;
