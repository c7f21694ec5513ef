/// Thousands separator (non-breaking space) for integer values.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Currency amount for the cards: separated thousands, two decimals only
/// when the amount has a fractional part. Rounds to whole cents first so a
/// fraction like .999 carries into the integer part.
pub fn format_money(val: f64) -> String {
    let cents = (val.abs() * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = cents % 100;
    let sign = if val < 0.0 && cents > 0 { "-" } else { "" };
    let s = format_thousands(int_part);
    if frac == 0 {
        format!("${}{}", sign, s)
    } else {
        format!("${}{},{:02}", sign, s, frac)
    }
}

/// Progress percentage rounded for display.
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(p) => format!("{}%", p.round() as i64),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1\u{00a0}000");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-4200), "-4\u{00a0}200");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50000.0), "$50\u{00a0}000");
        assert_eq!(format_money(1234.5), "$1\u{00a0}234,50");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_money_rounds_cents_into_integer_part() {
        assert_eq!(format_money(1234.999), "$1\u{00a0}235");
        assert_eq!(format_money(999.995), "$1\u{00a0}000");
        assert_eq!(format_money(0.004), "$0");
        assert_eq!(format_money(-1234.999), "$-1\u{00a0}235");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(85.4)), "85%");
        assert_eq!(format_percent(Some(120.0)), "120%");
        assert_eq!(format_percent(None), "—");
    }
}
