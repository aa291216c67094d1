//! Display formatting for nutrient values and long text

/// Unit used when a nutrient has no explicit unit
pub const DEFAULT_NUTRIENT_UNIT: &str = "g";

/// Default character limit for [`truncate_text`]
pub const DEFAULT_TRUNCATE_LEN: usize = 100;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Format a nutrient amount with its unit
///
/// Unknown measurements render as `N/A`. The value is printed as-is, with
/// no rounding or localization.
///
/// # Examples
/// ```
/// use foodfinder::format::format_nutrient;
///
/// assert_eq!(format_nutrient(Some(5.0), "kcal"), "5 kcal");
/// assert_eq!(format_nutrient(None, "g"), "N/A");
/// ```
#[must_use]
pub fn format_nutrient(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v} {unit}"),
        None => "N/A".to_string(),
    }
}

/// Format a nutrient amount in grams
#[must_use]
pub fn format_grams(value: Option<f64>) -> String {
    format_nutrient(value, DEFAULT_NUTRIENT_UNIT)
}

/// Shorten text to at most `max_len` characters plus an ellipsis
///
/// Missing text renders as an empty string. Lengths are counted in
/// characters, never bytes, so multi-byte text is never split mid-character.
#[must_use]
pub fn truncate_text(text: Option<&str>, max_len: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}
