//! String to value conversions used by the typed getters.
//!
//! Accepted syntax follows what command-line users of these tools already
//! type: `true`/`1`/`T` style booleans and `1h30m` style durations.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static DURATION_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+$").unwrap()
});

static DURATION_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]*)(?:\.([0-9]*))?(ns|us|µs|μs|ms|s|m|h)").unwrap()
});

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parse a boolean literal.
///
/// Recognizes `1 t T TRUE true True` as true and `0 f F FALSE false False`
/// as false. Anything else is rejected.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean literal '{value}'")),
    }
}

/// Parse a duration such as `300ms`, `1.5s` or `2h45m`.
///
/// Each component is `[0-9]+(.[0-9]*)?` or `.[0-9]+` followed by a unit:
/// `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m`, `h`. Only ASCII digits are
/// accepted. A bare `0` is zero. Negative values are rejected.
///
/// ```
/// use cmdutil::parse::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
/// assert!(parse_duration("१s").is_err());
/// ```
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let (negative, body) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(format!("invalid duration '{value}'"));
    }
    if !DURATION_FORMAT.is_match(body) {
        return Err(format!("invalid duration '{value}'"));
    }

    let mut total: u128 = 0;
    for part in DURATION_PART.captures_iter(body) {
        let whole = part.get(1).map_or("", |m| m.as_str());
        let frac = part.get(2).map_or("", |m| m.as_str());
        let unit = unit_nanos(&part[3]);

        let mut nanos = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u128>()
                .map_err(|_| format!("invalid duration '{value}'"))?
                .checked_mul(unit)
                .ok_or_else(|| format!("duration '{value}' overflows"))?
        };

        // ASCII digits only, so the byte slice lands on a char boundary.
        // Digits beyond nanosecond precision of an hour cannot change the result.
        let frac = &frac[..frac.len().min(20)];
        if !frac.is_empty() {
            let digits = frac
                .parse::<u128>()
                .map_err(|_| format!("invalid duration '{value}'"))?;
            nanos += digits * unit / 10u128.pow(frac.len() as u32);
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| format!("duration '{value}' overflows"))?;
    }

    if negative && total != 0 {
        return Err(format!("negative duration '{value}' is not supported"));
    }

    let secs = u64::try_from(total / NANOS_PER_SEC)
        .map_err(|_| format!("duration '{value}' overflows"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

fn unit_nanos(unit: &str) -> u128 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        _ => 3_600 * NANOS_PER_SEC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_literals() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Ok(true), "Failed for value: {}", value);
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Ok(false), "Failed for value: {}", value);
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        for value in ["notBool", "yes", "on", "tRuE", " true", ""] {
            assert!(parse_bool(value).is_err(), "Accepted value: {}", value);
        }
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("10ns").unwrap(), Duration::from_nanos(10));
        assert_eq!(parse_duration("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("10µs").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("10μs").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("10ms").unwrap(), Duration::from_millis(10));
        assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("10m").unwrap(), Duration::from_secs(600));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7_200));
    }

    #[test]
    fn test_parse_duration_compound_and_fraction() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5_400));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1_500));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("1.s").unwrap(), Duration::from_secs(1));
        assert_eq!(
            parse_duration("2m3.25s").unwrap(),
            Duration::from_millis(123_250)
        );
        assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_duration_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_duration_invalid() {
        for value in ["", "5", "s", ".s", "1d", "not-an-int", "1h 30m", "-", "1.2.3s"] {
            assert!(parse_duration(value).is_err(), "Accepted value: {}", value);
        }
    }

    #[test]
    fn test_parse_duration_non_ascii_digits() {
        // Devanagari digits are Unicode decimal digits but not valid here.
        let long_fraction = format!("1.{}s", "\u{966}".repeat(7));
        for value in [long_fraction.as_str(), "१s", "1.०s", "٣m"] {
            assert!(parse_duration(value).is_err(), "Accepted value: {}", value);
        }
    }

    #[test]
    fn test_parse_duration_negative_rejected() {
        let err = parse_duration("-5s").unwrap_err();
        assert!(err.contains("negative"));
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("99999999999999999999999h").is_err());
    }
}
