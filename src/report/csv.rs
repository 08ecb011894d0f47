use std::io::Write;

use anyhow::Result;

use crate::models::SortedEntry;

/// 以 CSV 形式输出：`扩展名,数量,平均大小,总大小`，大小为原始字节数，无表头。
/// 扩展名按原始字节写出。
pub fn write_csv<W: Write>(entries: &[SortedEntry], out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    for entry in entries {
        writer.write_record([
            entry.display_bytes(),
            entry.count().to_string().as_bytes(),
            entry.average_size().to_string().as_bytes(),
            entry.total_size().to_string().as_bytes(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
