// crates/cityinfo-core/src/text.rs

//! Low-level text helpers: the field tokenizer, bounded string copies and the
//! lenient numeric parsers used for record columns.

use crate::common::{DEFAULT_MAX_FIELDS, MAX_STR_LEN};

/// Split `row` into at most `max_fields` fields separated by `separator`.
///
/// Fields are borrowed slices of `row`; the input is left untouched. Scanning
/// stops as soon as the field budget is spent, so whatever follows the last
/// budgeted separator is dropped rather than merged into the final field. It
/// also stops at the end of the row, so a row with fewer separators yields
/// fewer fields. `None` selects [`DEFAULT_MAX_FIELDS`].
///
/// # Examples
///
/// ```rust
/// use cityinfo_core::text::split_fields;
///
/// assert_eq!(split_fields("a|b|c", '|', Some(2)), vec!["a", "b"]);
/// assert_eq!(split_fields("a|b", '|', Some(5)), vec!["a", "b"]);
/// ```
pub fn split_fields(row: &str, separator: char, max_fields: Option<usize>) -> Vec<&str> {
    let max_fields = max_fields.unwrap_or(DEFAULT_MAX_FIELDS);
    let mut fields = Vec::with_capacity(max_fields);
    let mut rest = row;

    while fields.len() < max_fields {
        match rest.find(separator) {
            Some(end) => {
                fields.push(&rest[..end]);
                // move to the start of the next field
                rest = &rest[end + separator.len_utf8()..];
            }
            None => {
                // end of the row
                fields.push(rest);
                break;
            }
        }
    }

    fields
}

/// Copy `s`, keeping at most [`MAX_STR_LEN`] bytes.
///
/// Truncation never splits a UTF-8 character, so the result may be a few
/// bytes shorter than the limit.
pub fn bounded(s: &str) -> String {
    if s.len() <= MAX_STR_LEN {
        return s.to_owned();
    }
    let mut end = MAX_STR_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_owned()
}

/// Strip leading and trailing ASCII whitespace.
pub fn strip(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Parse the longest floating point prefix of `s`.
///
/// Leading whitespace is skipped. Text without a numeric prefix yields `0.0`
/// instead of an error; trailing garbage after the number is ignored.
pub fn parse_f64_lenient(s: &str) -> f64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return parse_special(&s[int_start..])
            .map(|v| if s.starts_with('-') { -v } else { v })
            .unwrap_or(0.0);
    }

    // optional exponent, only taken if it carries at least one digit
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(0.0)
}

fn parse_special(s: &str) -> Option<f64> {
    let lower = s.get(..8.min(s.len()))?.to_ascii_lowercase();
    if lower.starts_with("inf") {
        Some(f64::INFINITY)
    } else if lower.starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Parse the longest base-10 integer prefix of `s`.
///
/// Leading whitespace and an optional sign are accepted. Text without digits
/// yields `0`; values outside the `i32` range saturate.
pub fn parse_i32_lenient(s: &str) -> i32 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        value = -value;
    }

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
