//! Number formatting helpers shared by the snapshot generator, table and export.

/// Format an integer with `,` thousands separators, e.g. `124592` -> `124,592`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a dollar amount with thousands separators, e.g. `$5,420`.
pub fn format_currency(value: u64) -> String {
    format!("${}", format_thousands(value))
}

/// Format a revenue axis tick the way the trend chart labels it, e.g. `$85k`.
pub fn format_kilo_dollars(value: f64) -> String {
    let thousands = value / 1000.0;
    if thousands.fract() == 0.0 {
        format!("${}k", thousands as i64)
    } else {
        format!("${:.1}k", thousands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(124_592), "124,592");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5_420), "$5,420");
        assert_eq!(format_currency(150_000), "$150,000");
    }

    #[test]
    fn test_format_kilo_dollars() {
        assert_eq!(format_kilo_dollars(85_000.0), "$85k");
        assert_eq!(format_kilo_dollars(124_592.0), "$124.6k");
        assert_eq!(format_kilo_dollars(0.0), "$0k");
    }
}
