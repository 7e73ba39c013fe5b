//! Display Formatting
//!
//! Pure helpers for table cells.

use chrono::NaiveDate;

/// Whole-dollar amount with thousands separators, e.g. `$12,500`
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short calendar date, e.g. `Mar 15, 2024`
pub fn date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Optional date, "-" when absent
pub fn optional_date(value: Option<NaiveDate>) -> String {
    value.map(date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(999), "$999");
        assert_eq!(currency(1000), "$1,000");
        assert_eq!(currency(25000), "$25,000");
        assert_eq!(currency(1234567), "$1,234,567");
    }

    #[test]
    fn test_currency_beyond_u32() {
        assert_eq!(currency(5_000_000_000), "$5,000,000,000");
        assert_eq!(currency(u64::from(u32::MAX) * 2), "$8,589,934,590");
    }

    #[test]
    fn test_date_formats() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date(d), "Mar 5, 2024");
        assert_eq!(optional_date(Some(d)), "Mar 5, 2024");
        assert_eq!(optional_date(None), "-");
    }
}
