//! Record-to-CSV rendering.
//!
//! This crate turns export-core records plus resolved options into CSV text.
//!
//! # Modules
//!
//! - [`format`] - `FieldValue` → CSV cell text conversion
//! - [`exporter`] - document assembly and the caching [`CsvExporter`] front end
//!
//! # Example
//!
//! ```ignore
//! use csv_render::CsvExporter;
//! use export_core::ExportOptionsOverrides;
//!
//! let exporter = CsvExporter::new(
//!     r#"[{"id": 1, "name": "Test 1"}, {"id": 2, "name": "Test 2"}]"#,
//!     "users",
//!     ExportOptionsOverrides::default(),
//! )?;
//! let csv = exporter.csv_data();
//! ```

pub mod exporter;
pub mod format;

pub use exporter::{render_document, CsvExporter};
pub use format::{format_row, format_value, quote_cell};
