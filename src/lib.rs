//! csv-export library
//!
//! A toolkit for converting record data (mappings from field name to a
//! null, boolean, string, or number value) into CSV text and delivering it
//! as a named file download.
//!
//! # Features
//!
//! - Deterministic CSV generation: configurable separator, line terminator,
//!   byte-order mark, quoting, and null/boolean substitution literals
//! - Header labels derived from the first record or supplied explicitly
//! - Input as in-memory records or a JSON-encoded payload
//! - Pluggable download sinks: local directory with capability-checked
//!   discovery, or stdout for previews
//!
//! # Workspace Crates
//!
//! - `export-core` - record/value model, options, file-name normalization
//! - `csv-render` - value formatting and document assembly
//! - `export-sink` - sink trait plus directory/stdout sinks
//!
//! # CLI Usage
//!
//! ```bash
//! # Export records from a JSON file to the download directory
//! csv-export export users.json --name "user report"
//!
//! # Pipe records in and preview the document on stdout
//! cat users.json | csv-export preview - --eol lf --no-bom
//!
//! # Semicolon-separated, custom labels, explicit target directory
//! csv-export export users.json --name users \
//!   --field-separator ";" --label ID --label Name --out-dir /tmp
//! ```

use clap::{Args, ValueEnum};

// Re-export workspace crates for convenience
pub use csv_render::{render_document, CsvExporter};
pub use export_core::{
    normalize_file_name, ExportError, ExportOptions, ExportOptionsOverrides, FieldValue, Record,
    RecordInput,
};
pub use export_sink::{DirectorySink, ExportSink, SinkError, StdoutSink};

/// Line terminator choices exposed on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LineEnding {
    /// Carriage return + line feed (`\r\n`)
    Crlf,
    /// Line feed only (`\n`)
    Lf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// CSV formatting flags shared by the CLI subcommands.
///
/// Every flag is optional; anything left unset keeps its documented default.
#[derive(Args, Clone, Debug)]
pub struct FormatOpts {
    /// Column delimiter (default: ',')
    #[arg(long)]
    pub field_separator: Option<String>,

    /// Line terminator between rows (default: crlf)
    #[arg(long, value_enum)]
    pub eol: Option<LineEnding>,

    /// Omit the UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Do not quote string values
    #[arg(long)]
    pub no_quote: bool,

    /// Substitution text for null values (default: empty)
    #[arg(long)]
    pub null_value: Option<String>,

    /// Substitution text for boolean true (default: "Yes")
    #[arg(long)]
    pub true_value: Option<String>,

    /// Substitution text for boolean false (default: "No")
    #[arg(long)]
    pub false_value: Option<String>,

    /// Header label, repeatable; defaults to the first record's field names
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Replacement for spaces in the download file name (default: '_')
    #[arg(long)]
    pub file_name_separator: Option<String>,
}

/// Deliver an exporter's most recently generated document through a sink.
///
/// The serializer itself never depends on a sink; this facade pairs the
/// cached document and normalized file name with whatever destination the
/// caller selected.
pub fn download(exporter: &CsvExporter, sink: &dyn ExportSink) -> Result<(), SinkError> {
    sink.save(exporter.csv_data().as_bytes(), exporter.file_name())
}

// CLI flags → option overrides
impl From<&FormatOpts> for ExportOptionsOverrides {
    fn from(opts: &FormatOpts) -> Self {
        Self {
            file_name_separator: opts.file_name_separator.clone(),
            eol: opts.eol.map(|eol| eol.as_str().to_string()),
            bom: opts.no_bom.then(String::new),
            quote_strings: opts.no_quote.then_some(false),
            field_separator: opts.field_separator.clone(),
            null_value: opts.null_value.clone(),
            true_value: opts.true_value.clone(),
            false_value: opts.false_value.clone(),
            labels: (!opts.labels.is_empty()).then(|| opts.labels.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_format_opts() -> FormatOpts {
        FormatOpts {
            field_separator: None,
            eol: None,
            no_bom: false,
            no_quote: false,
            null_value: None,
            true_value: None,
            false_value: None,
            labels: Vec::new(),
            file_name_separator: None,
        }
    }

    #[test]
    fn test_default_flags_produce_empty_overrides() {
        let overrides = ExportOptionsOverrides::from(&default_format_opts());
        assert!(overrides.field_separator.is_none());
        assert!(overrides.eol.is_none());
        assert!(overrides.bom.is_none());
        assert!(overrides.quote_strings.is_none());
        assert!(overrides.labels.is_none());
    }

    #[test]
    fn test_no_bom_maps_to_empty_bom_override() {
        let opts = FormatOpts {
            no_bom: true,
            ..default_format_opts()
        };
        let overrides = ExportOptionsOverrides::from(&opts);
        assert_eq!(overrides.bom.as_deref(), Some(""));
    }

    #[test]
    fn test_eol_flag_maps_to_terminator() {
        let opts = FormatOpts {
            eol: Some(LineEnding::Lf),
            ..default_format_opts()
        };
        let overrides = ExportOptionsOverrides::from(&opts);
        assert_eq!(overrides.eol.as_deref(), Some("\n"));
    }

    #[test]
    fn test_labels_collected_in_order() {
        let opts = FormatOpts {
            labels: vec!["ID".to_string(), "Name".to_string()],
            ..default_format_opts()
        };
        let overrides = ExportOptionsOverrides::from(&opts);
        assert_eq!(
            overrides.labels,
            Some(vec!["ID".to_string(), "Name".to_string()])
        );
    }
}
