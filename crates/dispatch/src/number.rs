//! Deterministic dispatch-number derivation.
//!
//! `prefix + ddmmyy + suffix`, where the suffix is carved out of the first
//! and last selected serials. Pure function of its inputs: callers re-derive
//! on every selection/date/prefix change to drive a live preview, and may
//! override the final submitted value.

/// Derive a human-readable dispatch number from the ordered selection, a
/// `YYYY-MM-DD` date string, and an operator prefix.
///
/// A date that does not decompose into three hyphen-separated parts
/// contributes an empty `ddmmyy` rather than an error; everything else
/// degrades through bounded slices and fixed fallbacks, never panics.
pub fn derive_dispatch_number<S: AsRef<str>>(serials: &[S], date: &str, prefix: &str) -> String {
    let ddmmyy = date_compact(date);

    let suffix = match serials {
        [] => "0001".to_string(),
        [only] => {
            let cleaned = alnum(only.as_ref());
            if cleaned.is_empty() {
                "0001".to_string()
            } else {
                tail(&cleaned, 4)
            }
        }
        [first, .., last] => {
            let head_src = alnum(first.as_ref());
            let tail_src = alnum(last.as_ref());
            let head_part = if head_src.is_empty() {
                "001".to_string()
            } else {
                head(&head_src, 3)
            };
            let tail_part = if tail_src.is_empty() {
                "999".to_string()
            } else {
                tail(&tail_src, 3)
            };
            format!("{head_part}{tail_part}")
        }
    };

    format!("{prefix}{ddmmyy}{suffix}")
}

/// `day + month + last-two-of-year`, or empty for a date string that is not
/// three hyphen-separated parts.
fn date_compact(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}{month}{}", tail(year, 2)),
        _ => String::new(),
    }
}

/// Strip every character that is not an ASCII letter or digit.
fn alnum(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// At most the first `n` characters of `s`.
fn head(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// At most the last `n` characters of `s`.
fn tail(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}
