//! 文本到类型的转换规则
//!
//! 布尔值接受 true/false、yes/no、on/off、y/n、t/f（不区分大小写）；
//! 整数接受十进制、`0x` 十六进制和 `0b` 二进制，可带负号。

/// 可以从 INI 文本转换得到的类型
pub trait FromIniText: Sized {
    /// 用于错误信息的类型名
    const TARGET: &'static str;

    /// 转换文本，失败时返回 `None`
    fn from_ini_text(text: &str) -> Option<Self>;
}

impl FromIniText for String {
    const TARGET: &'static str = "string";

    fn from_ini_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl FromIniText for bool {
    const TARGET: &'static str = "boolean";

    fn from_ini_text(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "y" | "t" => Some(true),
            "false" | "no" | "off" | "n" | "f" => Some(false),
            _ => None,
        }
    }
}

/// 解析带可选进制前缀的整数
fn parse_integer(text: &str) -> Option<i128> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = body
        .strip_prefix("0b")
        .or_else(|| body.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, body)
    };

    // from_str_radix 自身也接受符号，这里只允许一个
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

macro_rules! integer_from_ini_text {
    ($($ty:ty => $target:literal),*) => {
        $(
            impl FromIniText for $ty {
                const TARGET: &'static str = $target;

                fn from_ini_text(text: &str) -> Option<Self> {
                    parse_integer(text)
                        .and_then(|v| <$ty>::try_from(v).ok())
                }
            }
        )*
    };
}

integer_from_ini_text!(
    i8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long"
);

impl FromIniText for f32 {
    const TARGET: &'static str = "float";

    fn from_ini_text(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl FromIniText for f64 {
    const TARGET: &'static str = "double";

    fn from_ini_text(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_words() {
        assert_eq!(bool::from_ini_text("TRUE"), Some(true));
        assert_eq!(bool::from_ini_text(" yes "), Some(true));
        assert_eq!(bool::from_ini_text("On"), Some(true));
        assert_eq!(bool::from_ini_text("off"), Some(false));
        assert_eq!(bool::from_ini_text("n"), Some(false));
        assert_eq!(bool::from_ini_text("1"), None);
        assert_eq!(bool::from_ini_text("value1"), None);
    }

    #[test]
    fn test_integer_prefixes() {
        assert_eq!(i32::from_ini_text(" 42 "), Some(42));
        assert_eq!(i32::from_ini_text("-17"), Some(-17));
        assert_eq!(i32::from_ini_text("0xFF"), Some(255));
        assert_eq!(i32::from_ini_text("-0x10"), Some(-16));
        assert_eq!(i64::from_ini_text("0b101"), Some(5));
        assert_eq!(i32::from_ini_text("0x"), None);
        assert_eq!(i32::from_ini_text("--1"), None);
        assert_eq!(i32::from_ini_text("1.0"), None);
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(i8::from_ini_text("127"), Some(127));
        assert_eq!(i8::from_ini_text("128"), None);
        assert_eq!(i8::from_ini_text("-128"), Some(-128));
        assert_eq!(i16::from_ini_text("40000"), None);
        assert_eq!(
            i64::from_ini_text("9223372036854775807"),
            Some(i64::MAX)
        );
        assert_eq!(
            i64::from_ini_text("9223372036854775808"),
            None
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_ini_text("1.0"), Some(1.0));
        assert_eq!(f64::from_ini_text("1e3"), Some(1000.0));
        assert_eq!(f32::from_ini_text(" 0.5"), Some(0.5));
        assert_eq!(f64::from_ini_text("abc"), None);
    }
}
