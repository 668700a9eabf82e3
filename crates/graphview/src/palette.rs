use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fill of the hovered node
pub const HIGHLIGHT: Color = Color::rgb(98, 255, 0);

/// The ten-color categorical scheme used for node groups
pub const CATEGORY10: [Color; 10] = [
    Color::hex(0x1f77b4),
    Color::hex(0xff7f0e),
    Color::hex(0x2ca02c),
    Color::hex(0xd62728),
    Color::hex(0x9467bd),
    Color::hex(0x8c564b),
    Color::hex(0xe377c2),
    Color::hex(0x7f7f7f),
    Color::hex(0xbcbd22),
    Color::hex(0x17becf),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Ordinal scale: groups get colors in the order they are first seen, cycling
/// through the scheme.
#[derive(Debug, Clone)]
pub struct OrdinalPalette {
    scheme: Vec<Color>,
    assigned: HashMap<u32, Color>,
}

impl OrdinalPalette {
    pub fn new(scheme: &[Color]) -> Self {
        let scheme = if scheme.is_empty() { &CATEGORY10[..] } else { scheme };
        Self {
            scheme: scheme.to_vec(),
            assigned: HashMap::new(),
        }
    }

    /// Color for `group`, assigning the next scheme color on first use
    pub fn color(&mut self, group: u32) -> Color {
        let next = self.scheme[self.assigned.len() % self.scheme.len()];
        *self.assigned.entry(group).or_insert(next)
    }

    /// Color for an already assigned group
    pub fn get(&self, group: u32) -> Option<Color> {
        self.assigned.get(&group).copied()
    }
}

impl Default for OrdinalPalette {
    fn default() -> Self {
        Self::new(&CATEGORY10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_formats_as_css() {
        assert_eq!(HIGHLIGHT.to_string(), "rgb(98, 255, 0)");
        assert_eq!(CATEGORY10[0].to_string(), "rgb(31, 119, 180)");
    }

    #[test]
    fn test_first_seen_order() {
        let mut palette = OrdinalPalette::default();
        assert_eq!(palette.color(2), CATEGORY10[0]);
        assert_eq!(palette.color(1), CATEGORY10[1]);
        assert_eq!(palette.color(2), CATEGORY10[0]);
        assert_eq!(palette.get(1), Some(CATEGORY10[1]));
        assert_eq!(palette.get(9), None);
    }
}
