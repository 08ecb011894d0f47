use std::io::Write;

use anyhow::Result;
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table};

use crate::models::SortedEntry;
use crate::utils::format_bytes;

/// 表头和表尾使用同一行
const HEADER: [&str; 4] = ["File Extension", "Count", "Average Size", "Total Size"];

/// 以表格形式输出，大小使用易读单位
pub fn write_table<W: Write>(entries: &[SortedEntry], out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED).set_header(label_row());

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.display_name()),
            Cell::new(entry.count()),
            Cell::new(format_bytes(entry.average_size())),
            Cell::new(format_bytes(entry.total_size())),
        ]);
    }

    for index in 1..HEADER.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(label_row());

    writeln!(out, "{table}")?;
    Ok(())
}

/// 表头/表尾行，固定左对齐，不随数值列右对齐
fn label_row() -> Vec<Cell> {
    HEADER
        .iter()
        .map(|label| Cell::new(label).set_alignment(CellAlignment::Left))
        .collect()
}
