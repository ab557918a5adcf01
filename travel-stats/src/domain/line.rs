//! Line-name primitives.
//!
//! Public line labels look like `"RE 30"`, `"Bus 50"`, `"S 7"` or `"FLX"`.
//! The leading token is the category prefix, the last token is usually the
//! line number.

/// Returns the category prefix of a line label.
///
/// This is everything before the first space, or the whole label when it
/// contains no space.
///
/// # Examples
///
/// ```
/// use travel_stats::domain::leading_token;
///
/// assert_eq!(leading_token("RE 30"), "RE");
/// assert_eq!(leading_token("RB 24 Nord"), "RB");
/// assert_eq!(leading_token("FLX"), "FLX");
/// ```
pub fn leading_token(line: &str) -> &str {
    line.split_once(' ').map_or(line, |(head, _)| head)
}

/// Returns true if the category prefix of `line` is one of `types`.
pub fn matches_types(line: &str, types: &[&str]) -> bool {
    types.contains(&leading_token(line))
}

/// Parses the last whitespace-separated token of a line label as a number.
///
/// Returns `None` for labels without a numeric suffix (e.g. `"Bus N5"`).
/// Callers decide which default an unparseable suffix maps to.
///
/// # Examples
///
/// ```
/// use travel_stats::domain::trailing_number;
///
/// assert_eq!(trailing_number("Bus 166"), Some(166));
/// assert_eq!(trailing_number("STR E"), None);
/// ```
pub fn trailing_number(line: &str) -> Option<u32> {
    line.split_whitespace().last()?.parse().ok()
}

/// Parses labels of exactly the form `"<prefix> <digits>"`.
///
/// Anything with more or fewer tokens, or with a non-digit suffix, yields
/// `None`.
pub fn simple_line_number(line: &str) -> Option<u32> {
    let mut parts = line.split(' ');
    let _prefix = parts.next()?;
    let number = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The leading token never contains a space
        #[test]
        fn leading_token_has_no_space(s in "[A-Za-z0-9 ]{0,20}") {
            prop_assert!(!leading_token(&s).contains(' '));
        }

        /// A label built from a prefix and a number yields that number back
        #[test]
        fn numbered_labels_parse(prefix in "[A-Za-z]{1,4}", n in 0u32..100_000) {
            let line = format!("{prefix} {n}");
            prop_assert_eq!(trailing_number(&line), Some(n));
            prop_assert_eq!(simple_line_number(&line), Some(n));
            prop_assert!(matches_types(&line, &[prefix.as_str()]));
        }
    }
}
