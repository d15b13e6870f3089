//! INI 文档数据类型定义

use std::fmt;

/// 不区分大小写地比较两个名称
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// 一个节及其键值对
///
/// 键按首次出现的顺序保存，查找时不区分大小写。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// 创建空节
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// 节名（保留原始大小写）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 是否为全局节（第一个节头之前的键）
    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// 获取键对应的原始文本
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| names_match(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// 设置键值；已存在的键保留原有大小写
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let key = key.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| names_match(k, &key))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// 删除键，返回是否删除成功
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !names_match(k, key));
        self.entries.len() != before
    }

    /// 按文件顺序遍历键值对
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 键的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否没有任何键
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 解析后的 INI 文档
///
/// 不做地址校验，校验由 [`crate::IniFile`] 的访问器负责。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    /// 创建空文档
    pub fn new() -> Self {
        Self::default()
    }

    /// 按名称查找节
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| names_match(&s.name, name))
    }

    /// 按名称查找可变节
    pub fn section_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| names_match(&s.name, name))
    }

    /// 获取节，不存在时在末尾创建
    pub fn section_or_insert(
        &mut self,
        name: &str,
    ) -> &mut Section {
        let index = match self
            .sections
            .iter()
            .position(|s| names_match(&s.name, name))
        {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// 删除整个节
    pub fn remove_section(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| !names_match(&s.name, name));
        self.sections.len() != before
    }

    /// 读取 (节, 键) 的原始文本
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// 写入 (节, 键) 的文本，必要时创建节
    pub fn set(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.section_or_insert(section).set(key, value);
    }

    /// 按文档顺序遍历所有节（含全局节）
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

/// 可写入 INI 的值
///
/// 所有值都以文本形式存储，浮点数始终带小数部分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniValue(String);

impl IniValue {
    /// 取出文本
    pub fn into_string(self) -> String {
        self.0
    }

    /// 文本视图
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for IniValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

macro_rules! ini_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for IniValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

ini_value_from_display!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

// Debug 输出保留 ".0"，例如 1.0 写成 "1.0" 而不是 "1"
impl From<f32> for IniValue {
    fn from(value: f32) -> Self {
        Self(format!("{:?}", value))
    }
}

impl From<f64> for IniValue {
    fn from(value: f64) -> Self {
        Self(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Section1", "section1"));
        assert!(names_match("ÄRGER", "ärger"));
        assert!(!names_match("section1", "section2"));
        assert!(!names_match("key", "key "));
    }

    #[test]
    fn test_section_keeps_first_casing() {
        let mut section = Section::new("Main");
        section.set("Port", "80");
        section.set("PORT", "8080");

        let entries: Vec<_> = section.entries().collect();
        assert_eq!(entries, vec![("Port", "8080")]);
        assert_eq!(section.get("port"), Some("8080"));
    }

    #[test]
    fn test_document_merges_sections_by_name() {
        let mut doc = IniDocument::new();
        doc.set("Server", "host", "localhost");
        doc.set("server", "port", "80");

        assert_eq!(doc.sections().count(), 1);
        assert_eq!(doc.section("SERVER").unwrap().name(), "Server");
        assert!(doc.remove_section("server"));
        assert!(doc.section("Server").is_none());
        assert!(!doc.remove_section("server"));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(IniValue::from(1).as_str(), "1");
        assert_eq!(IniValue::from(1.0).as_str(), "1.0");
        assert_eq!(IniValue::from(0.25f32).as_str(), "0.25");
        assert_eq!(IniValue::from(true).as_str(), "true");
        assert_eq!(IniValue::from("value1").as_str(), "value1");
    }
}
