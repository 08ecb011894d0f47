use std::cmp::Reverse;

use crate::config::SortField;
use crate::models::SortedEntry;

/// 按指定字段降序排序
///
/// 排序是稳定的，相同值的条目保持输入顺序。
pub fn sort_entries(entries: &mut [SortedEntry], field: SortField) {
    match field {
        SortField::Count => entries.sort_by_key(|e| Reverse(e.count())),
        SortField::Average => entries.sort_by_key(|e| Reverse(e.average_size())),
        SortField::Total => entries.sort_by_key(|e| Reverse(e.total_size())),
    }
}
