//! 复合引用解析
//!
//! "Juan 3:16; 3:17; 1:1" -> ["Juan 3:16", "Juan 3:17", "Juan 1:1"]
//!
//! 片段按 ';' 切分后从左到右折叠，累加器为最近一次显式出现的书卷名。

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::catalog::resolve;

lazy_static! {
    /// 书卷名 + 空白 + 章号数字
    static ref EXPLICIT_BOOK: Regex = Regex::new(
        r"^([a-zA-ZáéíóúüÁÉÍÓÚÜñÑ][a-zA-ZáéíóúüÁÉÍÓÚÜñÑ\s\.]*?)\s+(\d.*)$"
    )
    .unwrap();

    /// 带序号的书卷名（"1 Juan 4:8"）
    static ref NUMBERED_BOOK: Regex = Regex::new(
        r"^([1-3]\s*[a-zA-ZáéíóúüÁÉÍÓÚÜñÑ][a-zA-ZáéíóúüÁÉÍÓÚÜñÑ\s\.]*?)\s+(\d.*)$"
    )
    .unwrap();
}

/// 拆出显式书卷名（已规范化）与剩余部分
///
/// 以数字开头的片段只有在整体解析为正典书卷时才算显式书卷，
/// 否则（如 "3 y 4:5"）按省略书卷的片段处理。
fn split_explicit_book(fragment: &str) -> Option<(String, &str)> {
    if let Some(captures) = NUMBERED_BOOK.captures(fragment) {
        let book = resolve(captures.get(1)?.as_str());
        if !book.is_canonical() {
            return None;
        }
        return Some((book.into_name(), captures.get(2)?.as_str()));
    }

    let captures = EXPLICIT_BOOK.captures(fragment)?;
    let book = resolve(captures.get(1)?.as_str()).into_name();
    let rest = captures.get(2)?.as_str();
    Some((book, rest))
}

/// 折叠一步：展开单个片段并更新最近书卷
pub fn expand_fragment(last_book: &mut Option<String>, fragment: &str) -> String {
    if let Some((book, rest)) = split_explicit_book(fragment) {
        let expanded = format!("{} {}", book, rest);
        *last_book = Some(book);
        return expanded;
    }

    match last_book {
        Some(book) => format!("{} {}", book, fragment),
        None => fragment.to_string(),
    }
}

/// 惰性展开复合引用
///
/// 每个非空片段对应一个输出，顺序不变；迭代器可 clone 以重新遍历。
/// 首个片段没有书卷名时原样输出，调用方应视为可能无法解析。
pub fn expand(compound: &str) -> impl Iterator<Item = String> + Clone + '_ {
    compound
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .scan(None, |last_book: &mut Option<String>, fragment| {
            Some(expand_fragment(last_book, fragment))
        })
}

/// 展开复合引用为列表
pub fn expand_reference_string(compound: &str) -> Vec<String> {
    expand(compound).collect()
}
