//! Per-cell cleaning rules.
//!
//! Each rule maps one raw cell (or its absence) to a typed value. Blank
//! cells and the `-` placeholder are treated as missing throughout.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder the source data uses for "no value".
const PLACEHOLDER: &str = "-";

/// A standalone four-digit year.
static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})\b").expect("Invalid year regex"));

/// A number directly followed by a gram unit, e.g. `169 g` or `87.5g`.
static GRAMS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*g").expect("Invalid grams regex"));

/// The first integer or decimal number anywhere in the text.
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)").expect("Invalid number regex"));

/// Text consisting of a single number and nothing else.
static NUMERIC_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("Invalid numeric regex"));

/// `Released <year>` inside a launch status, any case.
static RELEASED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)released\s+([0-9]{4})").expect("Invalid release year regex")
});

fn first_capture<'a>(regex: &Regex, input: &'a str) -> Option<&'a str> {
    regex
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Trims the value, mapping blank text and the `-` placeholder to `None`.
///
/// # Examples
///
/// ```
/// use phonespec_normalization::clean_text;
///
/// assert_eq!(clean_text(Some("  AMOLED ")), Some("AMOLED".to_string()));
/// assert_eq!(clean_text(Some("-")), None);
/// assert_eq!(clean_text(Some("   ")), None);
/// assert_eq!(clean_text(None), None);
/// ```
pub fn clean_text(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        return None;
    }
    Some(trimmed.to_string())
}

/// Extracts the first standalone four-digit year.
pub fn extract_year(input: Option<&str>) -> Option<i32> {
    first_capture(&YEAR_REGEX, input?)?.parse().ok()
}

/// Extracts a weight expressed in grams.
pub fn extract_weight_grams(input: Option<&str>) -> Option<f64> {
    first_capture(&GRAMS_REGEX, input?)?.parse().ok()
}

/// Extracts the first number in the text as a screen size in inches.
pub fn extract_size_inches(input: Option<&str>) -> Option<f64> {
    first_capture(&NUMBER_REGEX, input?)?.parse().ok()
}

/// Cleans a SIM cell. Bare `yes`/`no` answers carry no SIM type and are dropped.
pub fn clean_sim(input: Option<&str>) -> Option<String> {
    let value = input?;
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("yes") || trimmed.eq_ignore_ascii_case("no") {
        return None;
    }
    clean_text(Some(value))
}

/// Cleans a sensor cell. A purely numeric value is a shifted column, not a sensor list.
pub fn clean_sensor(input: Option<&str>) -> Option<String> {
    let value = input?;
    if NUMERIC_ONLY_REGEX.is_match(value.trim()) {
        return None;
    }
    clean_text(Some(value))
}

/// Keeps the operating system name, dropping version details after `,` or `(`.
///
/// The result must contain at least one ASCII letter; purely numeric or
/// symbolic leftovers are rejected.
///
/// # Examples
///
/// ```
/// use phonespec_normalization::extract_platform_name;
///
/// assert_eq!(
///     extract_platform_name(Some("Android 11, v2")),
///     Some("Android 11".to_string())
/// );
/// assert_eq!(
///     extract_platform_name(Some("iOS 14.1 (up to iOS 16)")),
///     Some("iOS 14.1".to_string())
/// );
/// assert_eq!(extract_platform_name(Some("4.5")), None);
/// ```
pub fn extract_platform_name(input: Option<&str>) -> Option<String> {
    let head = input?.split([',', '(']).next()?.trim();
    if !head.chars().any(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(head.to_string())
}

/// Extracts the year following `Released` in a launch status.
pub fn extract_release_year(launch_status: Option<&str>) -> Option<i32> {
    first_capture(&RELEASED_REGEX, launch_status?)?.parse().ok()
}
