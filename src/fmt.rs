//! Number formatting matching Go/C `%g`.
//!
//! Every `Display` impl in this crate goes through [`fmt_g`] so that the text
//! form of a value is stable across platforms and matches fixtures produced by
//! `printf`-style formatters.

/// Significant digits used by the `%.6g` formats of points, sizes and rects.
pub(crate) const DEFAULT_PRECISION: usize = 6;

/// Exponent threshold when no precision is given (`%g` shortest form).
const SHORTEST_EXP_THRESHOLD: i32 = 6;

/// Format a number like `%.Ng` (`Some(N)`) or `%g` (`None`).
///
/// - `Some(n)` rounds to `n` significant figures.
/// - `None` keeps the shortest digits that round-trip.
///
/// Trailing zeros are always trimmed. Exponent form is used when the decimal
/// exponent is below -4 or at least the precision, and the exponent is written
/// with a sign and two digits minimum (`1e+06`).
pub fn fmt_g(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Let the std formatter do the (correctly rounded) digit generation
    let sci = match precision {
        Some(p) => format!("{:.*e}", p.max(1) - 1, value),
        None => format!("{:e}", value),
    };
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let eprec = match precision {
        Some(p) => p.max(1) as i32,
        None => SHORTEST_EXP_THRESHOLD,
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if exp < -4 || exp >= eprec {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }

    out
}

/// `%.6g`
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_g(value, Some(DEFAULT_PRECISION))
}
