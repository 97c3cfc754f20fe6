use serde::{Deserialize, Serialize};

/// Currency symbol and digit grouping applied when rendering reports.
///
/// Defaults match the shekel listings the service was built around; swap the
/// symbol and separator to report in another market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleProfile {
    pub currency_symbol: String,
    pub thousands_separator: char,
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self {
            currency_symbol: "₪".to_string(),
            thousands_separator: ',',
        }
    }
}

impl LocaleProfile {
    /// Round to whole units and group the digits, e.g. `1040000.0` to
    /// `1,040,000`. Amounts past the integer range keep every digit.
    pub fn format_amount(&self, value: f64) -> String {
        let rounded = value.round();
        if rounded == 0.0 {
            return "0".to_string();
        }
        group_digits(&format!("{rounded:.0}"), self.thousands_separator)
    }

    /// Grouped whole-unit amount with the currency symbol in front.
    pub fn format_currency(&self, value: f64) -> String {
        format!("{}{}", self.currency_symbol, self.format_amount(value))
    }

    /// Percentage points with at most two decimals, trailing zeros trimmed.
    ///
    /// `8.65625` renders as `8.66` and `10.0` as `10`, so a flat figure never
    /// carries a spurious `.00`.
    pub fn format_percent(&self, points: f64) -> String {
        let fixed = format!("{points:.2}");
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let offset = digits.len() % 3;

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in digits.char_indices() {
        if index != 0 && index % 3 == offset {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
pub(crate) fn group_digits_for_tests(digits: &str, separator: char) -> String {
    group_digits(digits, separator)
}
