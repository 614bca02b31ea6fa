// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// Default fill colors for the first nine segments.
pub const COURSE_COLORS: [Color; 9] = [
    Color::from_rgb8(0x00, 0x88, 0xf0),
    Color::from_rgb8(0x14, 0xc5, 0xd0),
    Color::from_rgb8(0x50, 0xe3, 0xc2),
    Color::from_rgb8(0xf5, 0xa6, 0x23),
    Color::from_rgb8(0xfb, 0x9e, 0x45),
    Color::from_rgb8(0xfd, 0x75, 0x91),
    Color::from_rgb8(0xe9, 0x68, 0xf8),
    Color::from_rgb8(0xb2, 0x64, 0xed),
    Color::from_rgb8(0xc7, 0xcf, 0xd6),
];

/// Color of the first label line (the duration).
pub const DURATION_TEXT_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// Color of the second label line (the category).
pub const CATEGORY_TEXT_COLOR: Color = Color::from_rgb8(0x99, 0x99, 0x99);

/// An opaque color reference carried by a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRef {
    /// An index into the chart [`Palette`]. Indices wrap around the palette length.
    Palette(usize),
    /// A literal color.
    Solid(Color),
}

impl ColorRef {
    /// Resolves this reference against `palette`.
    ///
    /// An empty palette resolves every index to black.
    pub fn resolve(self, palette: &Palette) -> Color {
        match self {
            Self::Palette(i) => palette.get(i).unwrap_or(css::BLACK),
            Self::Solid(c) => c,
        }
    }
}

impl From<Color> for ColorRef {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// An ordered list of segment colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from explicit colors.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Returns the color for `index`, wrapping around the palette length.
    pub fn get(&self, index: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        self.colors.get(index % self.colors.len()).copied()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(COURSE_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indices_wrap() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.get(9), palette.get(0));
        assert_eq!(ColorRef::Palette(10).resolve(&palette), COURSE_COLORS[1]);
    }

    #[test]
    fn empty_palette_falls_back_to_black() {
        let palette = Palette::new([]);
        assert!(palette.is_empty());
        assert_eq!(ColorRef::Palette(3).resolve(&palette), css::BLACK);
        assert_eq!(ColorRef::Solid(css::RED).resolve(&palette), css::RED);
    }
}
