use crate::error::{Error, Result};

const NANOTONS_PER_TON: u64 = 1_000_000_000;
const MAX_FRACTIONAL_DIGITS: usize = 9;

/// Parses a whole-unit token amount typed by a user. Empty and non-numeric
/// input are rejected outright; "0" is a valid zero, nothing is coerced.
pub fn parse_token_amount(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "amount cannot be empty".to_string(),
        ));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| Error::InvalidArgument(format!("invalid token amount '{}'", trimmed)))
}

/// Converts a decimal TON string ("1.5") to nanotons. At most nine
/// fractional digits are representable.
pub fn to_nano(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "amount cannot be empty".to_string(),
        ));
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if frac.len() > MAX_FRACTIONAL_DIGITS {
        return Err(Error::InvalidArgument(format!(
            "'{}' has more than {} fractional digits",
            trimmed, MAX_FRACTIONAL_DIGITS
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("invalid TON amount '{}'", trimmed)))?
    };

    let frac: u64 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = MAX_FRACTIONAL_DIGITS);
        padded
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("invalid TON amount '{}'", trimmed)))?
    };

    whole
        .checked_mul(NANOTONS_PER_TON)
        .and_then(|nano| nano.checked_add(frac))
        .ok_or_else(|| Error::InvalidArgument(format!("TON amount '{}' overflows", trimmed)))
}

/// Formats nanotons as a decimal TON string, trimming trailing zeros.
pub fn from_nano(nano: u64) -> String {
    let whole = nano / NANOTONS_PER_TON;
    let frac = nano % NANOTONS_PER_TON;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:09}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_amount() {
        assert_eq!(parse_token_amount("2").unwrap(), 2);
        assert_eq!(parse_token_amount(" 42 ").unwrap(), 42);
        assert_eq!(parse_token_amount("0").unwrap(), 0);
    }

    #[test]
    fn test_empty_amount_is_rejected_not_coerced() {
        assert!(matches!(
            parse_token_amount(""),
            Err(crate::error::Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_token_amount("   "),
            Err(crate::error::Error::InvalidArgument(_))
        ));
        assert!(parse_token_amount("abc").is_err());
        assert!(parse_token_amount("-1").is_err());
        assert!(parse_token_amount("1.5").is_err());
    }

    #[test]
    fn test_to_nano() {
        assert_eq!(to_nano("1").unwrap(), 1_000_000_000);
        assert_eq!(to_nano("1.5").unwrap(), 1_500_000_000);
        assert_eq!(to_nano("0.02").unwrap(), 20_000_000);
        assert_eq!(to_nano(".5").unwrap(), 500_000_000);
        assert_eq!(to_nano("0.000000001").unwrap(), 1);
    }

    #[test]
    fn test_to_nano_rejects_bad_input() {
        assert!(to_nano("").is_err());
        assert!(to_nano("1.0000000001").is_err());
        assert!(to_nano("one").is_err());
        assert!(to_nano("1.2.3").is_err());
    }

    #[test]
    fn test_from_nano() {
        assert_eq!(from_nano(1_000_000_000), "1");
        assert_eq!(from_nano(1_500_000_000), "1.5");
        assert_eq!(from_nano(20_000_000), "0.02");
        assert_eq!(from_nano(0), "0");
        assert_eq!(from_nano(1), "0.000000001");
    }

    #[test]
    fn test_nano_round_trip_on_cost_display() {
        // fromNano(cost) is what the frontend shows next to the buy button.
        assert_eq!(from_nano(to_nano("8.000001").unwrap()), "8.000001");
    }
}
