// src/presenter/extract.rs

use crate::presenter::format::PLACEHOLDER;

const TITLE_SEPARATOR: &str = " - ";
const START_MARKER: &str = "?start=";

/// 从标题 "<名称> - <target>" 中取出第二段，没有分隔符时返回占位符
pub fn target_from_title(title: &str) -> String {
    title
        .split(TITLE_SEPARATOR)
        .nth(1)
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// 从 t.me 路径中取出 `?start=` 之后的全部内容
pub fn start_param(tme_path: &str) -> String {
    match tme_path.find(START_MARKER) {
        Some(pos) if pos + START_MARKER.len() < tme_path.len() => {
            tme_path[pos + START_MARKER.len()..].to_string()
        }
        _ => PLACEHOLDER.to_string(),
    }
}
