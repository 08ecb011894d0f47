pub mod error;
pub mod extension;
pub mod file_walker;

pub use error::ScanError;
pub use extension::ExtensionExtractor;
pub use file_walker::FileWalker;
