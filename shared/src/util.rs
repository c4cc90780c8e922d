use rust_decimal::Decimal;
use std::str::FromStr;

/// 当前 UTC 时间 (RFC 3339, `createdAt` 格式)
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Parse plain decimal form text (`12`, `-3`, `12.50`).
///
/// Only an optional sign, ASCII digits and one decimal point are accepted.
/// Digit separators (`1_000`, `1,000`), exponents and surrounding
/// whitespace are rejected.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let mut digits = 0usize;
    let mut points = 0usize;
    for byte in unsigned.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    Decimal::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_rfc3339_parses() {
        let stamp = now_rfc3339();
        assert!(stamp.ends_with('Z'));
        let parsed = chrono::DateTime::parse_from_rfc3339(&stamp).unwrap();
        let drift = chrono::Utc::now().timestamp_millis() - parsed.timestamp_millis();
        assert!(drift.abs() < 60_000);
    }

    #[test]
    fn test_parse_decimal_plain_text() {
        assert_eq!(parse_decimal("12"), Some(Decimal::from(12)));
        assert_eq!(parse_decimal("12.50"), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_decimal("-3"), Some(Decimal::from(-3)));
        assert_eq!(parse_decimal("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_decimal_rejects_separators() {
        for raw in ["1_000", "1_0", "12,5", "1,000.00", "1e3", "1.2.3", "", "-", ".", " 1", "abc"] {
            assert_eq!(parse_decimal(raw), None, "{raw:?} should be rejected");
        }
    }
}
