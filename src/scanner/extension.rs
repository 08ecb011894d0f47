use regex::bytes::Regex;

use crate::scanner::ScanError;

/// 匹配最后一个 `.` 之后的全部内容，贪婪的 `.*` 保证取最后一段。
/// 关闭 Unicode 模式，使 `.` 也能匹配非 UTF-8 字节。
const EXTENSION_PATTERN: &str = r"(?-u).*\.(.*)";

/// 扩展名提取器，按文件名的原始字节匹配
#[derive(Debug, Clone)]
pub struct ExtensionExtractor {
    pattern: Regex,
}

impl ExtensionExtractor {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            pattern: Regex::new(EXTENSION_PATTERN)?,
        })
    }

    /// 从文件名中提取扩展名
    ///
    /// 没有 `.` 或以 `.` 结尾的文件名都返回空。
    /// `archive.tar.gz` 返回 `gz`，`.bashrc` 返回 `bashrc`。
    pub fn extract<'a>(&self, file_name: &'a [u8]) -> &'a [u8] {
        self.pattern
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_bytes())
            .unwrap_or(b"")
    }
}
