//! INI 文本解析器
//!
//! 先按行整理文本（续行、无值的键、节头检查），再交给 rust-ini 解析。
//! 加载时区分大小写，原始大小写保存在 [`IniDocument`] 中。

use crate::app::error::types::{IniError, Result};
use crate::core::ini::types::IniDocument;
use ini::{Ini, ParseOption};
use std::fs;
use std::path::Path;

/// INI 解析器
pub struct IniParser;

impl IniParser {
    /// 从文件解析文档
    pub fn from_file<P: AsRef<Path>>(
        file_path: P,
    ) -> Result<IniDocument> {
        let text = fs::read_to_string(&file_path)?;
        Self::parse_str(&text)
    }

    /// 从字符串解析文档
    pub fn parse_str(text: &str) -> Result<IniDocument> {
        let (normalized, line_map) = normalize(text)?;

        let ini = Ini::load_from_str_opt(&normalized, parse_option())
            .map_err(|e| {
                // rust-ini 的行号从 0 开始，且针对整理后的文本
                let line = line_map
                    .get(e.line)
                    .copied()
                    .unwrap_or(e.line + 1);
                IniError::syntax(line, e.msg.to_string())
            })?;

        Ok(Self::into_document(&ini))
    }

    fn into_document(ini: &Ini) -> IniDocument {
        let mut document = IniDocument::new();
        for (name, properties) in ini.iter() {
            // rust-ini 总是带一个全局节，空的不保留
            if name.is_none() && properties.iter().next().is_none() {
                continue;
            }
            let section =
                document.section_or_insert(name.unwrap_or(""));
            for (key, value) in properties.iter() {
                section.set(key, value);
            }
        }
        document
    }
}

fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: true,
        enabled_escape: true,
        ..ParseOption::default()
    }
}

/// 整理原始文本，返回新文本以及每一行对应的原始行号
///
/// - 以奇数个 `\` 结尾的行与下一行拼接
/// - 没有 `=` 或 `:` 的行视为值为空的键
fn normalize(text: &str) -> Result<(String, Vec<usize>)> {
    let text = text.trim_start_matches('\u{feff}');
    let mut out = String::with_capacity(text.len() + 16);
    let mut line_map = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, first)) = lines.next() {
        let line_num = index + 1;
        let mut line = first.trim().to_string();
        while ends_with_continuation(&line) {
            line.pop();
            match lines.next() {
                Some((_, next)) => line.push_str(next.trim()),
                None => break,
            }
        }

        if !(line.is_empty() || line.starts_with([';', '#'])) {
            if line.starts_with('[') {
                check_section_header(&line, line_num)?;
            } else if line.starts_with(['=', ':']) {
                return Err(IniError::syntax(line_num, "Empty key"));
            } else if !has_separator(&line) {
                line.push('=');
            }
        }

        out.push_str(&line);
        out.push('\n');
        line_map.push(line_num);
    }

    Ok((out, line_map))
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing =
        line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// 是否包含未转义的 `=` 或 `:`
fn has_separator(line: &str) -> bool {
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '=' | ':' => return true,
            _ => {}
        }
    }
    false
}

fn check_section_header(line: &str, line_num: usize) -> Result<()> {
    let end = line.find(']').ok_or_else(|| {
        IniError::syntax(
            line_num,
            format!("Unclosed section header: {}", line),
        )
    })?;
    if line[1..end].trim().is_empty() {
        return Err(IniError::syntax(line_num, "Empty section name"));
    }
    Ok(())
}
