// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Player clock, `m:ss`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// RFC 3339 timestamps and plain `YYYY-MM-DD` dates as `Jan 15, 2024`.
/// Anything else is shown as sent.
pub fn format_payout_date(raw: &str) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(raw)
        .map(|datetime| datetime.date_naive())
        .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `0x1234567890abcdef` -> `0x12345678...`
pub fn shorten_hash(hash: &str, keep: usize) -> String {
    if hash.chars().count() <= keep {
        hash.to_string()
    } else {
        let prefix: String = hash.chars().take(keep).collect();
        format!("{prefix}...")
    }
}

pub fn parse_positive(amount: &str) -> Option<f64> {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_dates_are_readable() {
        assert_eq!(format_payout_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_payout_date("2024-01-15T23:30:00+00:00"), "Jan 15, 2024");
        assert_eq!(format_payout_date("2024-01-03"), "Jan 3, 2024");
        assert_eq!(format_payout_date("never"), "never");
    }

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(145200), "145,200");
        assert_eq!(format_number(1000000), "1,000,000");
    }

    #[test]
    fn time_is_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(754.0), "12:34");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn hashes_are_shortened() {
        assert_eq!(shorten_hash("0xabcdef", 20), "0xabcdef");
        assert_eq!(shorten_hash("0x0123456789abcdef", 6), "0x0123...");
    }

    #[test]
    fn positive_amounts_only() {
        assert_eq!(parse_positive(" 0.05 "), Some(0.05));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive("abc"), None);
        assert_eq!(parse_positive(""), None);
    }
}
