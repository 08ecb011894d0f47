use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::DefaultConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 扫描配置
    pub scan: ScanConfig,

    /// 报表配置
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 扫描的根目录
    pub root: PathBuf,

    /// 是否跟随符号链接
    pub follow_symlinks: bool,

    /// 最大扫描深度
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 排序字段
    pub order_by: SortField,

    /// 输出格式
    pub output: OutputMode,
}

/// 排序字段，均按降序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// 按文件数量
    Count,
    /// 按平均大小（整数除法）
    Average,
    /// 按总大小
    Total,
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// 表格格式
    Table,
    /// CSV 格式
    Csv,
    /// 仅列出扩展名
    Extension,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: DefaultConfig::default_root(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            order_by: DefaultConfig::default_order_by(),
            output: DefaultConfig::default_output(),
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件 {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置：给出路径时读取文件，否则使用默认配置
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// 用命令行显式给出的值覆盖配置
    pub fn with_overrides(
        mut self,
        root: Option<PathBuf>,
        order_by: Option<SortField>,
        output: Option<OutputMode>,
    ) -> Self {
        if let Some(root) = root {
            self.scan.root = root;
        }
        if let Some(order_by) = order_by {
            self.report.order_by = order_by;
        }
        if let Some(output) = output {
            self.report.output = output;
        }
        self
    }
}
