//! Hex color parsing with a defined fallback.
//!
//! Color specs arrive as user-supplied strings (`"#43e97b"`, `"43e97b"`)
//! and must never abort a render: anything that is not exactly six hex
//! digits after stripping the leading `#` resolves to black.

/// An RGB color as three channel values, each in `0..=255`.
pub type ColorTriple = [u8; 3];

/// Fallback for any malformed color spec.
pub const BLACK: ColorTriple = [0, 0, 0];

/// Default background color.
pub const WHITE: ColorTriple = [255, 255, 255];

/// Resolves a hex color spec into an RGB triple.
///
/// Accepts six hex digits with or without a leading `#`. Case is
/// ignored. Every malformed input (empty, wrong length, non-hex
/// characters) resolves to [`BLACK`]; this function never fails.
///
/// # Arguments
///
/// * `spec` - The color spec to resolve, e.g. `"#ff8800"` or `"ff8800"`.
///
/// # Returns
///
/// The matching [`ColorTriple`], or [`BLACK`] for malformed input.
///
/// # Example
///
/// ```rust
/// use qrbrand::color::resolve_color;
///
/// assert_eq!(resolve_color("#43e97b"), [67, 233, 123]);
/// assert_eq!(resolve_color("not-a-color"), [0, 0, 0]);
/// ```
pub fn resolve_color(spec: &str) -> ColorTriple {
    if spec.is_empty() {
        return BLACK;
    }

    let hex = spec.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return BLACK;
    }

    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => [r, g, b],
        _ => BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_hash_prefix() {
        assert_eq!(resolve_color("#43e97b"), [67, 233, 123]);
        assert_eq!(resolve_color("#ffffff"), [255, 255, 255]);
        assert_eq!(resolve_color("#000000"), [0, 0, 0]);
    }

    #[test]
    fn test_resolve_without_hash_prefix() {
        assert_eq!(resolve_color("43e97b"), [67, 233, 123]);
        assert_eq!(resolve_color("000000"), [0, 0, 0]);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_color("#FFAABB"), [255, 170, 187]);
        assert_eq!(resolve_color("fFaAbB"), [255, 170, 187]);
    }

    #[test]
    fn test_repeated_hash_prefix_is_stripped() {
        assert_eq!(resolve_color("##43e97b"), [67, 233, 123]);
    }

    #[test]
    fn test_malformed_specs_fall_back_to_black() {
        assert_eq!(resolve_color(""), BLACK);
        assert_eq!(resolve_color("#"), BLACK);
        assert_eq!(resolve_color("#fff"), BLACK);
        assert_eq!(resolve_color("#fffffff"), BLACK);
        assert_eq!(resolve_color("ZZZZZZ"), BLACK);
        assert_eq!(resolve_color("#43e97g"), BLACK);
        assert_eq!(resolve_color("43 97b"), BLACK);
        assert_eq!(resolve_color("#43e97b "), BLACK);
    }

    #[test]
    fn test_non_ascii_spec_falls_back_to_black() {
        assert_eq!(resolve_color("ффффф"), BLACK);
        assert_eq!(resolve_color("#ffffé"), BLACK);
    }
}
