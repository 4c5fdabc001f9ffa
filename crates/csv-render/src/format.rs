//! Field formatting: `FieldValue` → CSV cell text.

use export_core::{ExportOptions, FieldValue, Record};

/// Format a single field value as CSV cell text.
///
/// Null and boolean values become their configured substitution literals,
/// emitted verbatim. String values are quoted via [`quote_cell`] when quoting
/// is enabled. Numbers pass through unquoted, using the JSON number's own
/// textual form.
pub fn format_value(value: &FieldValue, options: &ExportOptions) -> String {
    match value {
        FieldValue::Null => options.null_value.clone(),
        FieldValue::Bool(true) => options.true_value.clone(),
        FieldValue::Bool(false) => options.false_value.clone(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::String(s) if options.quote_strings => quote_cell(s),
        FieldValue::String(s) => s.clone(),
    }
}

/// Escape embedded double quotes by doubling them, then wrap the whole cell
/// in double quotes.
pub fn quote_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Format one record as a CSV line, without the line terminator.
///
/// Values are emitted in the record's own field order.
pub fn format_row(record: &Record, options: &ExportOptions) -> String {
    let cells: Vec<String> = record
        .values()
        .map(|value| format_value(value, options))
        .collect();
    cells.join(&options.field_separator)
}
