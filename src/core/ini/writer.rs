//! INI 文本序列化
//!
//! 由 rust-ini 负责输出，节名、键名和值中的 `;` `#` `=` `:` `\` 及控制字符都会转义。
//! [`render_checked`] 会重新解析输出，无法原样读回的文档返回错误。

use crate::app::error::types::{IniError, Result};
use crate::core::ini::parser::IniParser;
use crate::core::ini::types::IniDocument;
use ini::{EscapePolicy, Ini, LineSeparator, Properties, WriteOption};
use std::fmt;
use std::io;

/// 转为 rust-ini 文档，全局节排在最前面
pub fn to_ini(document: &IniDocument) -> Ini {
    let mut ini = Ini::new();
    let ordered = document
        .sections()
        .filter(|s| s.is_global())
        .chain(document.sections().filter(|s| !s.is_global()));

    for section in ordered {
        let name = if section.is_global() {
            None
        } else {
            Some(section.name().to_string())
        };
        let properties =
            ini.entry(name).or_insert_with(Properties::new);
        for (key, value) in section.entries() {
            properties.insert(key, value);
        }
    }
    ini
}

/// 将文档渲染为 INI 文本
pub fn render(document: &IniDocument) -> io::Result<String> {
    let mut buf = Vec::new();
    to_ini(document).write_to_opt(
        &mut buf,
        WriteOption {
            escape_policy: EscapePolicy::Reserved,
            line_separator: LineSeparator::CR,
            ..Default::default()
        },
    )?;
    String::from_utf8(buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// 渲染并确认文本能原样读回
pub fn render_checked(document: &IniDocument) -> Result<String> {
    let text = render(document)?;
    let reparsed = IniParser::parse_str(&text).map_err(|e| {
        IniError::write(format!(
            "Written text cannot be read back: {}",
            e
        ))
    })?;

    match find_mismatch(document, &reparsed) {
        Some(what) => Err(IniError::write(format!(
            "Cannot represent {} in INI text",
            what
        ))),
        None => Ok(text),
    }
}

/// 找出第一个读回后不一致的节或键
fn find_mismatch(
    expected: &IniDocument,
    actual: &IniDocument,
) -> Option<String> {
    let mut expected_count = 0;
    for section in expected.sections() {
        if section.is_global() && section.is_empty() {
            continue;
        }
        expected_count += 1;

        let other = match actual.section(section.name()) {
            Some(other) if other.name() == section.name() => other,
            _ => return Some(format!("section {:?}", section.name())),
        };
        for (key, value) in section.entries() {
            let kept = other
                .entries()
                .any(|(k, v)| k == key && v == value);
            if !kept {
                return Some(format!(
                    "key {:?} in section {:?}",
                    key,
                    section.name()
                ));
            }
        }
        if other.len() != section.len() {
            return Some(format!("section {:?}", section.name()));
        }
    }

    let actual_count = actual
        .sections()
        .filter(|s| !(s.is_global() && s.is_empty()))
        .count();
    if actual_count != expected_count {
        return Some("the section layout".to_string());
    }
    None
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = render(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let mut doc = IniDocument::new();
        doc.set("sectionName", "key1", "value1");
        doc.set("sectionName", "key2", "value2");
        doc.set("sectionName2", "key3", "value3");

        let text = render(&doc).unwrap();
        assert!(text.contains("[sectionName]\nkey1=value1\nkey2=value2\n"));
        assert!(text.contains("[sectionName2]\nkey3=value3\n"));
    }

    #[test]
    fn test_global_section_first() {
        let mut doc = IniDocument::new();
        doc.set("main", "a", "1");
        doc.set("", "top", "yes");
        doc.section_or_insert("empty");

        let text = render_checked(&doc).unwrap();
        assert!(text.starts_with("top=yes\n"), "{}", text);
        assert_eq!(IniParser::parse_str(&text).unwrap().get("", "top"), Some("yes"));
    }

    #[test]
    fn test_reserved_characters_survive_reparse() {
        let mut doc = IniDocument::new();
        doc.set("a ;b", "x=y", "semi ; colon");
        doc.set("a ;b", ";k", "#hash");
        doc.set("c:d", "multi\nline", "back\\slash");
        doc.set("c:d", "empty", "");

        let text = render_checked(&doc).unwrap();
        assert_eq!(IniParser::parse_str(&text).unwrap(), doc);
    }

    #[test]
    fn test_unrepresentable_names_rejected() {
        let mut padded_key = IniDocument::new();
        padded_key.set("s", " k", "v");
        assert!(matches!(
            render_checked(&padded_key),
            Err(IniError::Write { .. })
        ));

        let mut blank_section = IniDocument::new();
        blank_section.set(" ", "k", "v");
        assert!(matches!(
            render_checked(&blank_section),
            Err(IniError::Write { .. })
        ));
    }
}
