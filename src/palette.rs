//! Colors used when painting a tree

use image::Rgba;

/// The color type we're using
pub type Color = Rgba<u8>;

/// Creates a color from the provided RGBA integer
///
/// See also: [`rgb`].
///
/// ## Examples
///
/// ```
/// let transparent = rgba(0x00000000);
/// let red_tint = rgba(0xff000077);
/// let teal = rgba(0x00ffffff);
/// ```
pub fn rgba(int: u32) -> Color {
    let r = ((int >> 24) & 0xff) as u8;
    let g = ((int >> 16) & 0xff) as u8;
    let b = ((int >> 8) & 0xff) as u8;
    let a = (int & 0xff) as u8;

    Rgba([r, g, b, a])
}

/// Creates a fully opaque color from the provided RGB integer
///
/// Anything above `0xffffff` is masked off, so every `u32` gives some color.
pub fn rgb(int: u32) -> Color {
    rgba(((int & 0xffffff) << 8) | 0xff)
}

/// Parses a color written as `#rrggbb` or `#rrggbbaa`
///
/// The leading `#` is optional. Returns `None` if the string isn't six or eight hex digits.
pub fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let int = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some(rgb(int)),
        8 => Some(rgba(int)),
        _ => None,
    }
}

/// Formats the color as `#rrggbb`, dropping the alpha channel
pub fn to_hex(color: Color) -> String {
    let Rgba([r, g, b, _]) = color;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// The fixed colors of a tree painting
///
/// Blossoms aren't in here: each one gets a freshly sampled color as it's generated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub trunk: Color,
    pub branch: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: rgb(0x000000),
            // brown
            trunk: rgb(0x663300),
            // green
            branch: rgb(0x006600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(rgb(0x663300), Rgba([0x66, 0x33, 0x00, 0xff]));
        assert_eq!(rgba(0xff000077), Rgba([0xff, 0x00, 0x00, 0x77]));
    }

    #[test]
    fn hex_strings() {
        assert_eq!(parse_hex("#006600"), Some(rgb(0x006600)));
        assert_eq!(parse_hex("ff000080"), Some(rgba(0xff000080)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#+12345"), None);
        assert_eq!(parse_hex("#gg0000"), None);

        assert_eq!(to_hex(rgb(0x663300)), "#663300");
    }
}
