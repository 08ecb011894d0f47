/// 十进制单位（1 kB = 1000 B）
const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
const BASE: u64 = 1000;

/// 将字节数格式化为易读的大小 (例如: "1.2 kB", "83 MB")
///
/// 小于 10 字节时原样输出；其余先四舍五入到一位小数，
/// 结果小于 10 时保留一位小数，否则不保留。
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut exponent = 0;
    let mut divisor = 1u64;
    while exponent + 1 < UNITS.len() && bytes / divisor >= BASE {
        divisor *= BASE;
        exponent += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{:.1} {}", value, UNITS[exponent])
    } else {
        format!("{:.0} {}", value, UNITS[exponent])
    }
}
