/// Strip invisible characters and collapse runs of whitespace.
pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a money or measurement cell, tolerating currency symbols and digit
/// grouping, e.g. `₪1,450,000` or ` 75 `.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, '₪' | ',' | '\u{feff}' | '\u{200b}') && !ch.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
pub(crate) fn clean_text_for_tests(value: &str) -> String {
    clean_text(value)
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(value: &str) -> Option<f64> {
    parse_amount(value)
}
