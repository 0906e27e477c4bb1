//! Money parsing and formatting using rust_decimal for precision
//!
//! Catalog prices arrive as display text ("220", "₹1,250", "180.50") and are
//! parsed leniently: formatting characters are stripped and unparseable text
//! yields zero rather than an error. All arithmetic on totals is done with
//! `Decimal`; text is produced only at the display boundary.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse display price text into an exact decimal.
///
/// Keeps digits and the first decimal point, stops at a second point
/// (so "12.34.56" parses as 12.34), ignores everything else. Returns
/// zero when nothing numeric remains.
pub fn parse_price(text: &str) -> Decimal {
    let mut cleaned = String::with_capacity(text.len());
    let mut seen_point = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => cleaned.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                cleaned.push(ch);
            }
            '.' => break,
            _ => {}
        }
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Format an amount with Indian digit grouping (1,23,456.5).
///
/// Matches the display convention of the customer-facing views: the last
/// three integer digits form one group, the rest are grouped in pairs.
/// Trailing fractional zeros are dropped.
pub fn format_grouped(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    if digits.len() <= 3 {
        grouped.extend(&digits);
    } else {
        let head = &digits[..digits.len() - 3];
        let tail = &digits[digits.len() - 3..];
        // Pairs from the right within the head
        let first = head.len() % 2;
        if first > 0 {
            grouped.extend(&head[..first]);
        }
        for pair in head[first..].chunks(2) {
            if !grouped.is_empty() {
                grouped.push(',');
            }
            grouped.extend(pair);
        }
        grouped.push(',');
        grouped.extend(tail);
    }

    let mut out = String::new();
    if normalized.is_sign_negative() && !normalized.is_zero() {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_price("220"), Decimal::from(220));
        assert_eq!(parse_price("180.50"), Decimal::from_str("180.50").unwrap());
    }

    #[test]
    fn strips_currency_symbols_and_grouping() {
        assert_eq!(parse_price("₹1,250"), Decimal::from(1250));
        assert_eq!(parse_price(" 99 /- "), Decimal::from(99));
    }

    #[test]
    fn second_decimal_point_ends_the_number() {
        assert_eq!(parse_price("12.34.56"), Decimal::from_str("12.34").unwrap());
    }

    #[test]
    fn malformed_text_parses_as_zero() {
        assert_eq!(parse_price("market price"), Decimal::ZERO);
        assert_eq!(parse_price(""), Decimal::ZERO);
        assert_eq!(parse_price("."), Decimal::ZERO);
    }

    #[test]
    fn groups_digits_indian_style() {
        assert_eq!(format_grouped(Decimal::from(440)), "440");
        assert_eq!(format_grouped(Decimal::from(1234)), "1,234");
        assert_eq!(format_grouped(Decimal::from(123456)), "1,23,456");
        assert_eq!(format_grouped(Decimal::from(12345678)), "1,23,45,678");
    }

    #[test]
    fn keeps_fraction_and_sign() {
        assert_eq!(
            format_grouped(Decimal::from_str("1234.5").unwrap()),
            "1,234.5"
        );
        assert_eq!(
            format_grouped(Decimal::from_str("180.50").unwrap()),
            "180.5"
        );
        assert_eq!(format_grouped(Decimal::from(-123456)), "-1,23,456");
    }
}
