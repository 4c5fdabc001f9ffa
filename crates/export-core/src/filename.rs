//! Download file-name normalization.

/// Derive the download file name from a caller-supplied base name.
///
/// Every space is replaced with `separator` and a literal `.csv` suffix is
/// appended. No other sanitization happens here; callers are responsible for
/// avoiding path separators, reserved characters, and over-long names.
pub fn normalize_file_name(base: &str, separator: &str) -> String {
    format!("{}.csv", base.replace(' ', separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_replaced_and_suffix_appended() {
        assert_eq!(normalize_file_name("my report", "_"), "my_report.csv");
    }

    #[test]
    fn test_no_spaces_only_suffix() {
        assert_eq!(normalize_file_name("users", "_"), "users.csv");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(normalize_file_name("a b c", "-"), "a-b-c.csv");
    }

    #[test]
    fn test_no_further_sanitization() {
        assert_eq!(normalize_file_name("a/b", "_"), "a/b.csv");
    }
}
