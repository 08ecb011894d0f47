pub mod csv;
pub mod sort;
pub mod table;

use std::io::Write;

use anyhow::Result;

use crate::config::{OutputMode, SortField};
use crate::models::{ExtensionStats, SortedEntry};

pub use self::csv::write_csv;
pub use sort::sort_entries;
pub use table::write_table;

/// 每行输出一个扩展名
pub fn write_extensions<W: Write>(entries: &[SortedEntry], out: &mut W) -> Result<()> {
    for entry in entries {
        out.write_all(entry.display_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// 按指定格式输出已排序的条目
pub fn render<W: Write>(entries: &[SortedEntry], mode: OutputMode, out: &mut W) -> Result<()> {
    match mode {
        OutputMode::Table => write_table(entries, out),
        OutputMode::Csv => write_csv(entries, out),
        OutputMode::Extension => write_extensions(entries, out),
    }
}

/// 排序并输出聚合结果
pub fn write_report<W: Write>(
    stats: ExtensionStats,
    order_by: SortField,
    mode: OutputMode,
    out: &mut W,
) -> Result<()> {
    let mut entries = stats.into_entries();
    sort_entries(&mut entries, order_by);
    render(&entries, mode, out)?;
    out.flush()?;
    Ok(())
}
