pub mod size_format;

pub use size_format::format_bytes;
