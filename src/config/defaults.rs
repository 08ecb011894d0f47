use std::path::PathBuf;

use crate::config::{OutputMode, SortField};

pub struct DefaultConfig;

impl DefaultConfig {
    /// 默认扫描的根目录（当前目录）
    pub fn default_root() -> PathBuf {
        PathBuf::from(".")
    }

    /// 默认排序字段
    pub fn default_order_by() -> SortField {
        SortField::Count
    }

    /// 默认输出格式
    pub fn default_output() -> OutputMode {
        OutputMode::Table
    }
}
