//! Numeric Normalizer
//!
//! Parses locale-ambiguous quantity strings from source tables. The same
//! spreadsheets arrive with `1,234.5` (US), `1.234,5` (EU), or bare `1234`,
//! with no locale hint, so separator roles are inferred from position.

/// Parses a quantity string into a positive number.
///
/// Rules:
/// - spaces, non-breaking spaces, and apostrophes are stripped as digit
///   grouping;
/// - when both `.` and `,` appear, the later-occurring separator is the
///   decimal point and the other is grouping;
/// - a separator occurring more than once is always grouping;
/// - a single separator followed by exactly three digits reads as grouping
///   (`"1.234"` -> 1234), unless the integer part is empty or `0`, which
///   forces a decimal reading (`"0,500"` -> 0.5);
/// - anything else with a single separator is a decimal point.
///
/// Returns `None` for empty input, stray characters, or any value that is
/// not finite and strictly positive.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{00a0}' | '\''))
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) => {
            let decimal = if dot > comma { '.' } else { ',' };
            strip_grouping(&cleaned, decimal)
        }
        (Some(_), None) => normalize_single(&cleaned, '.'),
        (None, Some(_)) => normalize_single(&cleaned, ','),
        (None, None) => cleaned,
    };

    let value: f64 = normalized.parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Drops every separator except `decimal`, which becomes `.`.
fn strip_grouping(s: &str, decimal: char) -> String {
    s.chars()
        .filter_map(|c| match c {
            c if c == decimal => Some('.'),
            '.' | ',' => None,
            c => Some(c),
        })
        .collect()
}

/// Resolves the role of the only separator kind present.
fn normalize_single(s: &str, sep: char) -> String {
    if s.matches(sep).count() > 1 {
        // Repeated separators can only be grouping: "1.234.567".
        return s.chars().filter(|&c| c != sep).collect();
    }

    let idx = s.find(sep).expect("separator present by construction");
    let (int_part, frac) = (&s[..idx], &s[idx + 1..]);

    if frac.len() == 3 && !int_part.is_empty() && int_part != "0" {
        // "1,234" is a thousand, not 1.234 of a part.
        s.chars().filter(|&c| c != sep).collect()
    } else {
        s.replace(sep, ".")
    }
}
