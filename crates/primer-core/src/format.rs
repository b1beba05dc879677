// Display formatting shared by the view builders.

use chrono::NaiveDate;

/// Thousands-separated naira amount without the currency sign. Zero renders
/// as `0`.
pub fn naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1 property`, `3 properties`.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

pub fn added_on(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
