//! HTTP Handlers

mod commentary;
mod library;
mod ping;
mod scripture;

pub use commentary::*;
pub use library::*;
pub use ping::*;
pub use scripture::*;
