//! Numeric parsing and locale-invariant number formatting.

/// Parses a decimal string, falling back to `0.0` when the input is not a
/// number. The failure is logged, not surfaced; callers that need to
/// distinguish "zero" from "unparseable" should use `str::parse` directly.
pub fn parse_float(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(input = s, %err, "could not parse float, using 0.0");
            0.0
        }
    }
}

/// Formats an integer with comma thousands separators.
///
/// # Examples
///
/// ```
/// use satchel::num::comma_i64;
///
/// assert_eq!(comma_i64(1_234_567), "1,234,567");
/// assert_eq!(comma_i64(-1_000), "-1,000");
/// ```
pub fn comma_i64(n: i64) -> String {
    let s = n.to_string();
    match s.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&s),
    }
}

/// Formats a float with comma thousands separators, keeping the shortest
/// decimal representation of the fractional part.
///
/// Non-finite values are returned as-is (`"NaN"`, `"inf"`).
///
/// # Examples
///
/// ```
/// use satchel::num::comma_f64;
///
/// assert_eq!(comma_f64(1_234_567.89), "1,234,567.89");
/// ```
pub fn comma_f64(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let s = v.to_string();
    let (number, fraction) = match s.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (s.as_str(), None),
    };
    let grouped = match number.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(number),
    };
    match fraction {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Formats a float with exactly two decimal places.
pub fn fixed2(v: f64) -> String {
    format!("{v:.2}")
}

/// Converts an integer to its decimal string representation by filling a
/// byte buffer from the right. Widens to i64 before negating so `i32::MIN`
/// comes out correct.
pub fn int_to_string(n: i32) -> String {
    // "-2147483648" is 11 bytes
    let mut buf = [0u8; 12];
    let mut pos = buf.len();
    let mut v = i64::from(n);
    let negative = v < 0;
    if negative {
        v = -v;
    }
    loop {
        pos -= 1;
        buf[pos] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }
    String::from_utf8_lossy(&buf[pos..]).into_owned()
}

/// Joins integers with a delimiter, no trailing delimiter.
pub fn join_ints(values: &[i64], delim: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(delim)
}
