//! Duration strings used by the loop timing fields.
//!
//! A duration is an optional sign followed by one or more `<number><unit>`
//! terms, such as `300ms`, `1.5h`, `2h45m` or `1m2s`. Valid units are `ns`,
//! `us` (or `µs`), `ms`, `s`, `m` and `h`. The bare string `0` is accepted.
//!
//! Durations here are never negative: `-0s` is zero, any other negative
//! value is rejected. The upper bound is [`MAX_NANOS`], the largest
//! nanosecond count a signed 64-bit integer holds.

use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Longest accepted duration, in nanoseconds (about 2562047h47m).
pub const MAX_NANOS: u64 = i64::MAX.unsigned_abs();

/// Number of nanoseconds in one `unit`, or `None` for an unknown unit.
fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a duration string.
///
/// # Errors
///
/// Returns a human-readable reason if the string is empty, has a term
/// without a number or unit, uses an unknown unit, is negative, or
/// overflows.
///
/// # Examples
///
/// ```
/// use clientconf::config::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1m2s").unwrap(), Duration::from_secs(62));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("bad").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let mut rest = input;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(format!("invalid duration {input:?}"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(format!("invalid duration {input:?}"));
        }

        // Integer part
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_digits, after_int) = rest.split_at(int_len);
        rest = after_int;

        // Fractional part
        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            frac_digits = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(format!("invalid duration {input:?}"));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(format!("missing unit in duration {input:?}"));
        }
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;

        let nanos = unit_nanos(unit)
            .ok_or_else(|| format!("unknown unit {unit:?} in duration {input:?}"))?;

        total = term_nanos(int_digits, frac_digits, nanos)
            .and_then(|term| total.checked_add(term))
            .ok_or_else(|| format!("invalid duration {input:?}: value out of range"))?;
        if total > u128::from(MAX_NANOS) {
            return Err(format!("invalid duration {input:?}: value out of range"));
        }
    }

    if negative && total != 0 {
        return Err(format!("invalid duration {input:?}: negative durations are not allowed"));
    }

    let nanos = u64::try_from(total)
        .map_err(|_| format!("invalid duration {input:?}: value out of range"))?;
    Ok(Duration::from_nanos(nanos))
}

/// Nanoseconds for a single `<int>.<frac><unit>` term, truncated.
fn term_nanos(int_digits: &str, frac_digits: &str, unit: u64) -> Option<u128> {
    let unit = u128::from(unit);

    let whole: u128 = if int_digits.is_empty() {
        0
    } else {
        int_digits.parse().ok()?
    };
    let mut nanos = whole.checked_mul(unit)?;

    // Past 18 digits the fraction is below a nanosecond for every unit.
    let frac_digits = &frac_digits[..frac_digits.len().min(18)];
    if !frac_digits.is_empty() {
        let numerator: u128 = frac_digits.parse().ok()?;
        let denominator = 10u128.checked_pow(u32::try_from(frac_digits.len()).ok()?)?;
        nanos = nanos.checked_add(numerator.checked_mul(unit)? / denominator)?;
    }

    Some(nanos)
}

/// Format a duration in the same grammar [`parse_duration`] accepts.
///
/// # Examples
///
/// ```
/// use clientconf::config::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(62)), "1m2s");
/// assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_nanos();
    if total == 0 {
        return "0s".to_string();
    }

    if total < u128::from(NANOS_PER_SECOND) {
        let (divisor, unit) = if total < u128::from(NANOS_PER_MICRO) {
            (1, "ns")
        } else if total < u128::from(NANOS_PER_MILLI) {
            (u128::from(NANOS_PER_MICRO), "µs")
        } else {
            (u128::from(NANOS_PER_MILLI), "ms")
        };
        return format!("{}{unit}", fixed_point(total, divisor));
    }

    let hours = total / u128::from(NANOS_PER_HOUR);
    let minutes = (total % u128::from(NANOS_PER_HOUR)) / u128::from(NANOS_PER_MINUTE);
    let seconds = fixed_point(total % u128::from(NANOS_PER_MINUTE), u128::from(NANOS_PER_SECOND));

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Render `value / divisor` with a trimmed decimal fraction.
fn fixed_point(value: u128, divisor: u128) -> String {
    let whole = value / divisor;
    let remainder = value % divisor;
    if remainder == 0 {
        return whole.to_string();
    }

    let width = divisor.to_string().len() - 1;
    let frac = format!("{remainder:0width$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
