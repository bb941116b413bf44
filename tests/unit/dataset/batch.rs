//! Tests for the extension filter and run counters

#[cfg(test)]
mod tests {
    use lithoprep::dataset::{WalkSummary, is_supported_image};
    use std::path::Path;

    // Tests the three supported extensions are accepted in any case
    // Verified by removing the case-insensitive comparison
    #[test]
    fn test_supported_extensions_any_case() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("b.JPEG")));
        assert!(is_supported_image(Path::new("c.Png")));
    }

    // Tests everything else is rejected
    #[test]
    fn test_unsupported_paths_rejected() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("archive.zip")));
        assert!(!is_supported_image(Path::new("no_extension")));
        assert!(!is_supported_image(Path::new(".png")));
    }

    // Tests counters start from zero
    #[test]
    fn test_summary_default_is_zero() {
        let summary = WalkSummary::default();
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.errors, 0);
    }
}
