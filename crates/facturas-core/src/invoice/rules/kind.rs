//! Income / expense classification.

use super::patterns::INCOME_KEYWORDS;
use crate::models::record::TransactionType;

/// Classify a document by keyword: any income keyword anywhere in the
/// lowercased text makes it income, everything else is an expense.
pub fn classify(text: &str) -> TransactionType {
    let lower = text.to_lowercase();
    if INCOME_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}
