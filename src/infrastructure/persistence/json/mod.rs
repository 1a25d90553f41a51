//! JSON 文件数据源

mod file_source;

pub use file_source::JsonFileSource;
