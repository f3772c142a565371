//! Lexical scans over a raw `box-shadow` value.
//!
//! Two passes, neither of them a CSS tokenizer:
//! 1. Count color indicators (`rgb` substrings and `#` characters)
//! 2. Pull out the numeric lengths that precede `px` or whitespace
//!
//! Numbers nested inside a function call such as `rgba(0 0 0 / 50%)` are
//! skipped, as are digits glued to a preceding identifier or hex color.

use std::sync::OnceLock;

use regex::Regex;

/// Optional sign, then an integer or decimal, then `px` or one whitespace char.
const NUMERIC_TOKEN_PATTERN: &str = r"(-?(?:\d+(?:\.\d*)?|\.\d+))(?:px|\s)";

fn numeric_token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(NUMERIC_TOKEN_PATTERN).expect("numeric token pattern is valid"))
}

/// Count occurrences of `rgb` and `#` in the declaration.
///
/// One color token usually accompanies each shadow layer, so a count above
/// one is taken to mean the value lists several layers.
pub fn count_color_indicators(shadow: &str) -> usize {
    shadow.matches("rgb").count() + shadow.matches('#').count()
}

/// Extract numeric tokens in order of appearance.
///
/// # Arguments
/// * `shadow` - Raw `box-shadow` value, e.g. `"2px 4px 6px 1px #000"`
///
/// # Returns
/// Every qualifying number parsed as `f64`. Text the pattern accepts but
/// `f64` parsing rejects becomes NaN.
///
/// # Signs
/// A leading `-` is kept, so `"0 -2px 4px"` yields `[0.0, -2.0, 4.0]` and a
/// negative offset moves the shadow up or left as in CSS. Earlier
/// digit-only extraction dropped the sign and read every value as a
/// magnitude; that reading is intentionally not preserved.
pub fn extract_numeric_tokens(shadow: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut cursor = 0usize;

    for caps in numeric_token_regex().captures_iter(shadow) {
        let Some(number) = caps.get(1) else {
            continue;
        };

        depth = nesting_depth(depth, &shadow[cursor..number.start()]);
        cursor = number.start();

        if depth > 0 || !starts_token(shadow, number.start()) {
            continue;
        }

        tokens.push(number.as_str().parse::<f64>().unwrap_or(f64::NAN));
    }

    tokens
}

/// Parenthesis depth after walking `segment`, starting from `depth`.
fn nesting_depth(depth: usize, segment: &str) -> usize {
    segment.chars().fold(depth, |d, c| match c {
        '(' => d + 1,
        ')' => d.saturating_sub(1),
        _ => d,
    })
}

/// A number starts a token at the beginning of input, after whitespace,
/// or after a layer-separating comma.
fn starts_token(shadow: &str, start: usize) -> bool {
    shadow[..start]
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Color Indicator Tests
    // ========================================================================

    #[test]
    fn test_count_single_rgba() {
        assert_eq!(count_color_indicators("2px 4px 6px 1px rgba(0,0,0,0.5)"), 1);
    }

    #[test]
    fn test_count_hex_and_rgb() {
        assert_eq!(count_color_indicators("1px 1px #fff, 2px 2px rgb(0,0,0)"), 2);
    }

    #[test]
    fn test_count_named_color() {
        assert_eq!(count_color_indicators("1px 1px red, 2px 2px blue"), 0);
    }

    #[test]
    fn test_count_is_case_sensitive() {
        assert_eq!(count_color_indicators("1px 1px RGB(0,0,0)"), 0);
    }

    // ========================================================================
    // Numeric Extraction Tests
    // ========================================================================

    #[test]
    fn test_extract_four_lengths() {
        let tokens = extract_numeric_tokens("2px 4px 6px 1px rgba(0,0,0,0.5)");
        assert_eq!(tokens, vec![2.0, 4.0, 6.0, 1.0]);
    }

    #[test]
    fn test_extract_multi_digit_and_decimal() {
        let tokens = extract_numeric_tokens("12px 0.5px .25px 10px #333");
        assert_eq!(tokens, vec![12.0, 0.5, 0.25, 10.0]);
    }

    #[test]
    fn test_extract_negative_offsets() {
        let tokens = extract_numeric_tokens("-3px -5px 2px #000");
        assert_eq!(tokens, vec![-3.0, -5.0, 2.0]);
    }

    #[test]
    fn test_extract_unitless_zero_followed_by_space() {
        let tokens = extract_numeric_tokens("0 0 4px black");
        assert_eq!(tokens, vec![0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_extract_skips_hex_digits() {
        let tokens = extract_numeric_tokens("#000 3px 5px");
        assert_eq!(tokens, vec![3.0, 5.0]);

        let tokens = extract_numeric_tokens("#1a2b33 7px 9px");
        assert_eq!(tokens, vec![7.0, 9.0]);
    }

    #[test]
    fn test_extract_skips_function_arguments() {
        let tokens = extract_numeric_tokens("rgb(0 0 0 / 50%) 1px 2px 3px");
        assert_eq!(tokens, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_extract_requires_unit_or_whitespace() {
        // Trailing number with nothing after it does not qualify
        assert_eq!(extract_numeric_tokens("1px 2"), vec![1.0]);
        assert!(extract_numeric_tokens("3em 4em").is_empty());
    }

    #[test]
    fn test_extract_keeps_sign_of_offsets() {
        let tokens = extract_numeric_tokens("0 -2px 4px #000");
        assert_eq!(tokens, vec![0.0, -2.0, 4.0]);
    }

    #[test]
    fn test_extract_after_comma_without_space() {
        let tokens = extract_numeric_tokens("1px 1px red,2px 2px blue");
        assert_eq!(tokens, vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_extract_none_and_empty() {
        assert!(extract_numeric_tokens("none").is_empty());
        assert!(extract_numeric_tokens("").is_empty());
    }

    #[test]
    fn test_extract_inset_keyword() {
        let tokens = extract_numeric_tokens("inset 0px 2px 4px rgba(0,0,0,0.2)");
        assert_eq!(tokens, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_nesting_depth_never_underflows() {
        assert_eq!(nesting_depth(0, "))("), 1);
        assert_eq!(nesting_depth(2, ")"), 1);
    }
}
