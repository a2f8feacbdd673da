//! Total amount extraction.

use super::patterns::LABELED_AMOUNT;
use super::{ExtractionMatch, FieldRule};

/// Amount field rule.
///
/// Reports the last labeled amount in the document: grand totals tend to
/// come after the subtotals.
pub struct AmountRule;

impl AmountRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for AmountRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.extract_all(text).pop()
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        LABELED_AMOUNT
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let number = caps.get(2)?;
                Some(
                    ExtractionMatch::new(normalize_amount(number.as_str()), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the last labeled amount, normalized.
pub fn extract_amount(text: &str) -> Option<String> {
    AmountRule::new().extract(text).map(|m| m.value)
}

/// Normalize a captured amount: commas become dots, whitespace is dropped.
///
/// Lossy on purpose: `1.234,56` becomes `1.234.56` and `1,234.56` becomes
/// `1.234.56`; the thousands separator is not told apart from the decimal one.
pub fn normalize_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}
