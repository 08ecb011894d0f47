use std::path::PathBuf;

use thiserror::Error;

/// 扫描过程中的错误，任何一个都会终止本次扫描
#[derive(Debug, Error)]
pub enum ScanError {
    /// 遍历目录时出错（权限不足、路径不存在、符号链接循环等）
    #[error("{}", walk_message(.path, .source))]
    Walk {
        path: Option<PathBuf>,
        #[source]
        source: walkdir::Error,
    },

    /// 扩展名匹配模式无法编译
    #[error("invalid extension pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<walkdir::Error> for ScanError {
    fn from(source: walkdir::Error) -> Self {
        Self::Walk {
            path: source.path().map(|p| p.to_path_buf()),
            source,
        }
    }
}

fn walk_message(path: &Option<PathBuf>, source: &walkdir::Error) -> String {
    match (path, source.io_error()) {
        (Some(path), Some(io)) => format!("{}: {}", path.display(), io),
        _ => source.to_string(),
    }
}
