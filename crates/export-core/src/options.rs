//! Export configuration: documented defaults, caller overrides, and the
//! per-field merge that resolves them.

use crate::values::Record;
use serde::Deserialize;

/// Resolved CSV formatting options.
///
/// Built once via [`ExportOptionsOverrides::resolve`] and not changed
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Replaces spaces in the download file name.
    pub file_name_separator: String,

    /// Line terminator between CSV rows.
    pub eol: String,

    /// Byte-order mark written before the header row. `None` omits it.
    pub bom: Option<String>,

    /// Wrap string values in double quotes, doubling embedded quotes.
    pub quote_strings: bool,

    /// Column delimiter.
    pub field_separator: String,

    /// Substitution text for null values.
    pub null_value: String,

    /// Substitution text for boolean true.
    pub true_value: String,

    /// Substitution text for boolean false.
    pub false_value: String,

    /// Header row contents, positionally aligned to emitted field order.
    pub labels: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_name_separator: "_".to_string(),
            eol: "\r\n".to_string(),
            bom: Some("\u{feff}".to_string()),
            quote_strings: true,
            field_separator: ",".to_string(),
            null_value: String::new(),
            true_value: "Yes".to_string(),
            false_value: "No".to_string(),
            labels: Vec::new(),
        }
    }
}

/// Caller-supplied partial options.
///
/// Every field is optional; absent fields fall back to the documented
/// default during resolution, so supplying one option never blanks out the
/// others. An empty `bom` string resolves to no byte-order mark.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptionsOverrides {
    pub file_name_separator: Option<String>,
    pub eol: Option<String>,
    pub bom: Option<String>,
    pub quote_strings: Option<bool>,
    pub field_separator: Option<String>,
    pub null_value: Option<String>,
    pub true_value: Option<String>,
    pub false_value: Option<String>,
    pub labels: Option<Vec<String>>,
}

impl ExportOptionsOverrides {
    /// Resolve these overrides against the documented defaults.
    ///
    /// Label derivation runs first: when no labels are supplied they are
    /// taken from the first record's field names in that record's own order.
    /// An empty dataset leaves the label list empty.
    pub fn resolve(self, records: &[Record]) -> ExportOptions {
        let defaults = ExportOptions::default();

        let labels = match self.labels {
            Some(labels) => labels,
            None => records
                .first()
                .map(|record| record.keys().map(str::to_string).collect())
                .unwrap_or_default(),
        };

        ExportOptions {
            file_name_separator: self
                .file_name_separator
                .unwrap_or(defaults.file_name_separator),
            eol: self.eol.unwrap_or(defaults.eol),
            bom: match self.bom {
                Some(bom) if bom.is_empty() => None,
                Some(bom) => Some(bom),
                None => defaults.bom,
            },
            quote_strings: self.quote_strings.unwrap_or(defaults.quote_strings),
            field_separator: self.field_separator.unwrap_or(defaults.field_separator),
            null_value: self.null_value.unwrap_or(defaults.null_value),
            true_value: self.true_value.unwrap_or(defaults.true_value),
            false_value: self.false_value.unwrap_or(defaults.false_value),
            labels,
        }
    }
}
