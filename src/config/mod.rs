pub mod defaults;
pub mod settings;

pub use settings::{Config, OutputMode, ReportConfig, ScanConfig, SortField};
