use std::borrow::Cow;
use std::collections::BTreeMap;

/// 没有扩展名的文件在输出中的显示名称
pub const NO_EXTENSION_LABEL: &str = "No Filename";

/// 单个扩展名的累计数据
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionRecord {
    /// 文件数量，出现在聚合表中的记录至少为 1
    pub count: u64,

    /// 文件总大小（字节）
    pub total_size: u64,
}

impl ExtensionRecord {
    /// 平均大小，整数除法向下取整
    pub fn average_size(&self) -> u64 {
        self.total_size / self.count.max(1)
    }
}

/// 扩展名聚合表：扩展名 -> (数量, 总大小)
///
/// 键为文件名中的原始字节，非 UTF-8 的扩展名不会被合并；空键代表没有扩展名的文件。
/// 使用 `BTreeMap` 保证遍历顺序稳定，排序时相同值的条目因此按扩展名字节顺序出现。
#[derive(Debug, Clone, Default)]
pub struct ExtensionStats {
    records: BTreeMap<Vec<u8>, ExtensionRecord>,
}

impl ExtensionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个文件
    pub fn record(&mut self, extension: impl AsRef<[u8]>, size: u64) {
        let record = self.records.entry(extension.as_ref().to_vec()).or_default();
        record.count += 1;
        record.total_size += size;
    }

    pub fn get(&self, extension: impl AsRef<[u8]>) -> Option<&ExtensionRecord> {
        self.records.get(extension.as_ref())
    }

    /// 不同扩展名的数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 已记录的文件总数
    pub fn total_files(&self) -> u64 {
        self.records.values().map(|r| r.count).sum()
    }

    /// 已记录的文件总大小
    pub fn total_size(&self) -> u64 {
        self.records.values().map(|r| r.total_size).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &ExtensionRecord)> {
        self.records.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// 转换为只读条目列表，供排序和输出使用
    pub fn into_entries(self) -> Vec<SortedEntry> {
        self.records
            .into_iter()
            .map(|(extension, record)| SortedEntry::new(extension, record))
            .collect()
    }
}

/// 聚合完成后用于排序和输出的只读条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedEntry {
    extension: Vec<u8>,
    record: ExtensionRecord,
}

impl SortedEntry {
    pub fn new(extension: impl Into<Vec<u8>>, record: ExtensionRecord) -> Self {
        Self {
            extension: extension.into(),
            record,
        }
    }

    /// 原始扩展名字节，没有扩展名时为空
    pub fn extension(&self) -> &[u8] {
        &self.extension
    }

    /// 按原始字节输出的显示名称，空扩展名为 "No Filename"
    pub fn display_bytes(&self) -> &[u8] {
        if self.extension.is_empty() {
            NO_EXTENSION_LABEL.as_bytes()
        } else {
            &self.extension
        }
    }

    /// 文本形式的显示名称，无效的 UTF-8 字节替换为 U+FFFD
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.display_bytes())
    }

    pub fn count(&self) -> u64 {
        self.record.count
    }

    pub fn total_size(&self) -> u64 {
        self.record.total_size
    }

    pub fn average_size(&self) -> u64 {
        self.record.average_size()
    }
}
