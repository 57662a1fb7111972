//! Lenient numeric reading of snapshot text.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest negative exponent that can still leave a non-zero decimal.
const MIN_EXPONENT: i64 = -60;

/// Reads the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. The prefix is an optional sign, digits with
/// an optional fraction (`.5` and `5.` are both accepted) and an optional
/// exponent. Anything after the prefix is ignored, so `"12.5kg"` reads as
/// `12.5`. Returns `None` when there is no prefix or the value does not fit
/// in a `Decimal`.
#[must_use]
pub fn parse_float(text: &str) -> Option<Decimal> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_start = end;
    end = skip_digits(bytes, end);
    let int_digits = &s[int_start..end];

    let mut frac_digits = "";
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        frac_digits = &s[end + 1..frac_end];
        end = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = 0i64;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_end = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = skip_digits(bytes, sign_end);
        if exp_end > sign_end {
            exponent = s[end + 1..exp_end].parse().ok()?;
        }
    }

    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let sign = if negative { "-" } else { "" };
    let mantissa = if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    };

    let value = Decimal::from_str(&mantissa).ok()?;
    scale_by_power_of_ten(value, exponent)
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}

fn scale_by_power_of_ten(value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }

    match exponent.cmp(&0) {
        Ordering::Equal => Some(value),
        Ordering::Greater => (0..exponent).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN)),
        Ordering::Less => {
            let steps = exponent.max(MIN_EXPONENT).unsigned_abs();
            (0..steps).try_fold(value, |acc, _| acc.checked_div(Decimal::TEN))
        }
    }
}
