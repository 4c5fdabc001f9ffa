//! CSV document assembly and the caching exporter front end.

use crate::format::format_row;
use export_core::{
    normalize_file_name, ExportError, ExportOptions, ExportOptionsOverrides, Record, RecordInput,
};
use tracing::debug;

/// Render a full CSV document from records and resolved options.
///
/// The output is the optional byte-order mark, the label line, then one line
/// per record, every line terminated by the configured terminator. Values are
/// emitted in each record's own field order and are not matched by name
/// against the label list, so records with inconsistent key ordering will
/// misalign silently. Deterministic: identical inputs yield identical text.
pub fn render_document(records: &[Record], options: &ExportOptions) -> String {
    let mut out = String::new();

    if let Some(bom) = &options.bom {
        out.push_str(bom);
    }

    out.push_str(&options.labels.join(&options.field_separator));
    out.push_str(&options.eol);

    for record in records {
        out.push_str(&format_row(record, options));
        out.push_str(&options.eol);
    }

    out
}

/// Serializes a dataset into CSV text and remembers the result.
///
/// Construction resolves the input and options, normalizes the file name,
/// and generates the document eagerly; [`CsvExporter::csv_data`] returns the
/// cached text and [`CsvExporter::generate`] recomputes it on demand.
///
/// # Example
///
/// ```ignore
/// let exporter = CsvExporter::new(
///     r#"[{"id": 1, "name": "Test 1"}]"#,
///     "users",
///     ExportOptionsOverrides::default(),
/// )?;
/// sink.save(exporter.csv_data().as_bytes(), exporter.file_name())?;
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    records: Vec<Record>,
    options: ExportOptions,
    file_name: String,
    csv_data: String,
}

impl CsvExporter {
    /// Build an exporter from input, a base file name, and option overrides.
    ///
    /// Encoded input is parsed here and fails with
    /// [`ExportError::MalformedInput`] when it is not a JSON array of flat
    /// records.
    pub fn new(
        input: impl Into<RecordInput>,
        base_name: &str,
        overrides: ExportOptionsOverrides,
    ) -> Result<Self, ExportError> {
        let records = input.into().into_records()?;
        let options = overrides.resolve(&records);
        let file_name = normalize_file_name(base_name, &options.file_name_separator);

        debug!(
            records = records.len(),
            labels = options.labels.len(),
            file_name = %file_name,
            "resolved export"
        );

        let csv_data = render_document(&records, &options);

        Ok(Self {
            records,
            options,
            file_name,
            csv_data,
        })
    }

    /// Regenerate the document, replace the cached text, and return it.
    ///
    /// Callable repeatedly; without intervening mutation the output is
    /// byte-identical each time.
    pub fn generate(&mut self) -> &str {
        self.csv_data = render_document(&self.records, &self.options);
        &self.csv_data
    }

    /// The most recently generated document.
    pub fn csv_data(&self) -> &str {
        &self.csv_data
    }

    /// The normalized download file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The resolved options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// The resolved records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
