//! Token normalization for fair word comparison.
//!
//! Reference words and live recognizer tokens go through the same
//! normalization, so two surface forms count as the same word exactly when
//! their normalized forms are equal.

/// Normalize a raw token for comparison.
///
/// Removes every character that is not a letter, digit, or whitespace and
/// folds case. Pure and total: empty input yields empty output, and the
/// function is idempotent.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
