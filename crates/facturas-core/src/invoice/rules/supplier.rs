//! Supplier heuristic: the opening characters of the document.

/// Number of characters kept by default.
pub const DEFAULT_SUPPLIER_WIDTH: usize = 50;

/// Take the first `width` characters of the trimmed text.
///
/// Counts Unicode scalar values, so accented names are never split.
pub fn extract_supplier(text: &str, width: usize) -> String {
    text.trim().chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_then_truncates() {
        let text = "   Distribuciones Pérez S.L. CIF B12345678 Calle Mayor 1, Madrid   ";
        let supplier = extract_supplier(text, DEFAULT_SUPPLIER_WIDTH);
        assert_eq!(supplier.chars().count(), 50);
        assert_eq!(supplier, "Distribuciones Pérez S.L. CIF B12345678 Calle Mayo");
    }

    #[test]
    fn test_short_text() {
        assert_eq!(extract_supplier(" ACME ", 50), "ACME");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_supplier("", 50), "");
        assert_eq!(extract_supplier("   ", 50), "");
    }
}
