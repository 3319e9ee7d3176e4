//! Free-text search across every field of a switch record

use crate::SwitchRecord;

/// Case-insensitive substring match of `query` against any field.
///
/// `query` must already be lowercase.
fn matches_lowered(record: &SwitchRecord, query: &str) -> bool {
    record
        .field_texts()
        .iter()
        .any(|text| text.to_lowercase().contains(query))
}

/// True when `query` is empty or found in any field, ignoring case
pub fn matches(record: &SwitchRecord, query: &str) -> bool {
    query.is_empty() || matches_lowered(record, &query.to_lowercase())
}

/// Records matching `query`, in collection order
pub fn filter_records<'a>(records: &'a [SwitchRecord], query: &str) -> Vec<&'a SwitchRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowered(record, &query))
        .collect()
}
