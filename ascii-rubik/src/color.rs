use core::fmt;

use crate::math::Face;

/// The color of one sticker on a [`Cubelet`](crate::cubelet::Cubelet) face.
///
/// The palette follows the usual cube coloring, except that the back is magenta
/// instead of orange, because the basic 8-color terminal palette has no orange.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[allow(missing_docs)]
pub enum StickerColor {
    Red,
    Magenta,
    Yellow,
    White,
    Green,
    Blue,
}

impl StickerColor {
    /// Returns the sticker color assigned at construction to the given face of every
    /// cubelet.
    #[inline]
    pub const fn for_face(face: Face) -> Self {
        match face {
            Face::Front => Self::Red,
            Face::Back => Self::Magenta,
            Face::Left => Self::Yellow,
            Face::Right => Self::White,
            Face::Top => Self::Green,
            Face::Bottom => Self::Blue,
        }
    }

    /// Index of this color in the standard 8/16-color ANSI terminal palette.
    pub const fn ansi_index(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::White => 7,
        }
    }

    /// sRGB value, for terminals which support more than the basic palette.
    pub const fn to_srgb8(self) -> [u8; 3] {
        match self {
            Self::Red => [0xC4, 0x1E, 0x3A],
            Self::Magenta => [0xC0, 0x3C, 0xC0],
            Self::Yellow => [0xFF, 0xD5, 0x00],
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Green => [0x00, 0x9E, 0x60],
            Self::Blue => [0x00, 0x51, 0xBA],
        }
    }
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Green => "green",
            Self::Blue => "blue",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhaust::Exhaust as _;
    use std::collections::HashSet;

    #[test]
    fn every_face_has_its_own_color() {
        let colors: HashSet<StickerColor> =
            Face::ALL.into_iter().map(StickerColor::for_face).collect();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors, StickerColor::exhaust().collect());
    }

    #[test]
    fn palette_entries_distinct() {
        let ansi: HashSet<u8> = StickerColor::exhaust().map(|c| c.ansi_index()).collect();
        assert_eq!(ansi.len(), 6);
        let rgb: HashSet<[u8; 3]> = StickerColor::exhaust().map(|c| c.to_srgb8()).collect();
        assert_eq!(rgb.len(), 6);
    }
}
