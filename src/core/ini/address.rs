//! (节, 键) 地址校验

use crate::app::error::types::{IniError, Result};

/// 组合 "节.键" 地址使用的分隔符
pub const ADDRESS_DELIMITER: char = '.';

/// 确保节名和键名都不包含分隔符
pub fn validate_address(section: &str, key: &str) -> Result<()> {
    if section.contains(ADDRESS_DELIMITER) {
        return Err(IniError::invalid_address("Section", section));
    }
    if key.contains(ADDRESS_DELIMITER) {
        return Err(IniError::invalid_address("Key", key));
    }
    Ok(())
}

/// 组合出 "节.键" 形式的地址
pub fn compose_address(section: &str, key: &str) -> String {
    format!("{section}{ADDRESS_DELIMITER}{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address() {
        assert!(validate_address("section1", "key1").is_ok());
        assert!(validate_address("", "key1").is_ok());
        assert!(matches!(
            validate_address("a.b", "key"),
            Err(IniError::InvalidAddress {
                component: "Section",
                ..
            })
        ));
        assert!(matches!(
            validate_address("a", "k.ey"),
            Err(IniError::InvalidAddress { component: "Key", .. })
        ));
    }

    #[test]
    fn test_compose_address() {
        assert_eq!(compose_address("main", "port"), "main.port");
    }
}
