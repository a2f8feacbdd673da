//! Date extraction.
//!
//! Dates stay as the text that was matched. `99/99/9999` is a date here.

use super::patterns::LOOSE_DATE;
use super::{ExtractionMatch, FieldRule};

/// Date field rule. Reports the first date-shaped token in the document.
pub struct DateRule;

impl DateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for DateRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        LOOSE_DATE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first loose date in the text.
pub fn extract_date(text: &str) -> Option<String> {
    DateRule::new().extract(text).map(|m| m.value)
}
