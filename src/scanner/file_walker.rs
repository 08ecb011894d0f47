use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::models::ExtensionStats;
use crate::scanner::{ExtensionExtractor, ScanError};

/// 文件遍历器 - 递归扫描目录并按扩展名聚合文件
#[derive(Debug, Clone)]
pub struct FileWalker {
    extractor: ExtensionExtractor,
    max_depth: Option<usize>,
    follow_symlinks: bool,
    show_progress: bool,
}

impl FileWalker {
    /// 创建新的文件遍历器
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        Ok(Self {
            extractor: ExtensionExtractor::new()?,
            max_depth: config.max_depth,
            follow_symlinks: config.follow_symlinks,
            show_progress: false,
        })
    }

    /// 扫描时在标准错误上显示进度（仅当其为终端时可见）
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 扫描指定目录，返回按扩展名聚合的结果
    ///
    /// 遇到第一个错误即停止，已收集的部分结果全部丢弃。
    pub fn scan(&self, root: &Path) -> Result<ExtensionStats, ScanError> {
        let progress = if self.show_progress && !cfg!(test) {
            self.create_progress_bar()
        } else {
            ProgressBar::hidden()
        };

        let result = self.walk(root, &progress);
        progress.finish_and_clear();

        match &result {
            Ok(stats) => tracing::info!(
                "扫描完成: {} 个文件, {} 种扩展名, 共 {} 字节",
                stats.total_files(),
                stats.len(),
                stats.total_size()
            ),
            Err(err) => tracing::error!("扫描 {} 时出错: {}", root.display(), err),
        }

        result
    }

    fn walk(&self, root: &Path, progress: &ProgressBar) -> Result<ExtensionStats, ScanError> {
        let mut stats = ExtensionStats::new();

        let mut walker = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        for entry in walker {
            let entry = entry?;

            if entry.file_type().is_dir() {
                continue;
            }

            let size = entry.metadata()?.len();
            let file_name = name_bytes(entry.file_name());
            let extension = self.extractor.extract(&file_name);

            tracing::debug!(
                "{} -> {:?} ({} 字节)",
                entry.path().display(),
                String::from_utf8_lossy(extension),
                size
            );
            stats.record(extension, size);
            progress.inc(1);
        }

        Ok(stats)
    }

    /// 创建进度条
    fn create_progress_bar(&self) -> ProgressBar {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] 已扫描 {pos} 个文件")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// 文件名的原始字节
#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
