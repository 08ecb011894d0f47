pub mod config;
pub mod models;
pub mod report;
pub mod scanner;
pub mod utils;

// 重新导出常用模块
pub use config::{Config, OutputMode, SortField};
pub use models::{ExtensionStats, SortedEntry};
pub use scanner::{FileWalker, ScanError};
