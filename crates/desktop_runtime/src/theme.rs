//! Desktop background palette and color helpers.

/// Background color applied before any preference is loaded.
pub const DEFAULT_THEME_COLOR: &str = "#008080";

/// Selectable background colors as `(hex, display name)`.
pub const PALETTE: [(&str, &str); 8] = [
    ("#008080", "Windows 95 Teal"),
    ("#000080", "Classic Blue"),
    ("#800080", "Purple"),
    ("#008000", "Green"),
    ("#800000", "Maroon"),
    ("#808000", "Olive"),
    ("#000000", "Black"),
    ("#808080", "Gray"),
];

/// Display name for `hex`; colors outside the palette display as themselves.
pub fn color_name(hex: &str) -> &str {
    PALETTE
        .iter()
        .find(|(value, _)| value.eq_ignore_ascii_case(hex))
        .map(|(_, name)| *name)
        .unwrap_or(hex)
}

/// Returns `true` for `#RRGGBB`.
pub fn is_valid_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn channels(hex: &str) -> Option<[u8; 3]> {
    if !is_valid_hex(hex) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(1..3)?, channel(3..5)?, channel(5..7)?])
}

/// Lightens each channel by `round(2.55 * percent)`, clamped to `0..=255`.
///
/// Invalid input is returned unchanged.
pub fn lighten(hex: &str, percent: i32) -> String {
    let Some(rgb) = channels(hex) else {
        return hex.to_string();
    };
    let amount = (2.55 * f64::from(percent)).round() as i32;
    let [r, g, b] = rgb.map(|c| (i32::from(c) + amount).clamp(0, 255));
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_names_resolve_case_insensitively() {
        assert_eq!(color_name("#008080"), "Windows 95 Teal");
        assert_eq!(color_name("#80800A"), "#80800A");
        assert_eq!(color_name("#800080"), "Purple");
    }

    #[test]
    fn only_six_digit_hex_is_valid() {
        assert!(is_valid_hex("#00ff7A"));
        assert!(!is_valid_hex("008080"));
        assert!(!is_valid_hex("#0080"));
        assert!(!is_valid_hex("#00808g"));
    }

    #[test]
    fn lighten_adds_and_clamps_each_channel() {
        assert_eq!(lighten("#008080", 20), "#33b3b3");
        assert_eq!(lighten("#f0f0f0", 20), "#ffffff");
        assert_eq!(lighten("#808080", -100), "#000000");
        assert_eq!(lighten("teal", 20), "teal");
    }
}
