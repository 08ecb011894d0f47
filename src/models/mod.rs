pub mod extension_stats;

pub use extension_stats::{ExtensionRecord, ExtensionStats, SortedEntry, NO_EXTENSION_LABEL};
