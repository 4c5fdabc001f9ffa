//! Core types for the csv-export toolkit.
//!
//! This crate provides the foundational types used across the export
//! pipeline, including:
//!
//! - [`FieldValue`] - Scalar value representation for record fields
//! - [`Record`] - Ordered field-name-to-value mapping for one exportable row
//! - [`RecordInput`] - Dataset input union (in-memory records or encoded JSON)
//! - [`ExportOptions`] - Resolved CSV formatting configuration
//! - [`ExportOptionsOverrides`] - Caller-supplied partial configuration
//!
//! # Architecture
//!
//! export-core sits at the foundation of the workspace:
//!
//! ```text
//! export-core (this crate)
//!    │
//!    ├─── csv-render   (formats FieldValues and assembles documents)
//!    │
//!    └─── csv-export   (CLI; builds overrides from flags)
//! ```
//!
//! # Example
//!
//! ```rust
//! use export_core::{ExportOptionsOverrides, FieldValue, Record};
//!
//! let record: Record = [
//!     ("id".to_string(), FieldValue::from(1)),
//!     ("name".to_string(), FieldValue::from("Test 1")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let options = ExportOptionsOverrides::default().resolve(&[record]);
//! assert_eq!(options.labels, vec!["id", "name"]);
//! ```

pub mod filename;
pub mod input;
pub mod options;
pub mod values;

// Re-exports for convenience
pub use filename::normalize_file_name;
pub use input::{ExportError, RecordInput};
pub use options::{ExportOptions, ExportOptionsOverrides};
pub use values::{FieldValue, Record};
