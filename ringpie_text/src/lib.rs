// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for ring pie labels.
//!
//! Leader-line labels in `ringpie` have to fit between the ring and the edge of
//! the drawing surface, so the renderer needs two things from a text backend:
//! the advance width of a line, and how much of a line fits in a given width.
//! Shaping and glyph rasterization stay downstream; this crate only describes
//! the measurement interface.
//!
//! This crate is:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic, so a canvas, a shaping engine or a test double can all
//!   implement the same trait.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used for label fitting.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the byte length of the longest prefix of `text` whose advance
    /// width does not exceed `max_width`.
    ///
    /// The returned length always falls on a `char` boundary. A non-positive
    /// `max_width` yields `0`.
    ///
    /// The default implementation binary-searches over char boundaries and
    /// assumes advance width never shrinks as characters are appended.
    fn break_text(&self, text: &str, style: &TextStyle, max_width: f64) -> usize {
        if max_width <= 0.0 || text.is_empty() {
            return 0;
        }
        if self.measure(text, style).advance_width <= max_width {
            return text.len();
        }

        let chars = text.chars().count();
        // Invariant: a prefix of `lo` chars fits, a prefix of `hi` chars does not.
        let (mut lo, mut hi) = (0_usize, chars);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            let end = byte_offset(text, mid);
            if self.measure(&text[..end], style).advance_width <= max_width {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        byte_offset(text, lo)
    }
}

/// Byte offset of the `n`th char of `text` (or `text.len()` past the end).
pub fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface coordinates (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Noto Sans SC"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of the measured glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of the measured glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Offset from the baseline to the vertical middle of the glyph box.
    ///
    /// Adding this to a y coordinate used as a baseline centers the line on
    /// that coordinate.
    #[must_use]
    pub fn baseline_to_middle(&self) -> f64 {
        ((self.ascent - self.descent) * 0.5).abs()
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// Wide (CJK, full-width) characters advance by 1em, everything else by ~0.6em.
/// The baseline sits at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    /// Advance of a single char, in ems.
    fn char_advance(c: char) -> f64 {
        if is_wide(c) { 1.0 } else { 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let ems: f64 = text.chars().map(Self::char_advance).sum();
        TextMetrics {
            advance_width: ems * style.font_size,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }

    fn break_text(&self, text: &str, style: &TextStyle, max_width: f64) -> usize {
        if max_width <= 0.0 {
            return 0;
        }
        let mut width = 0.0;
        for (i, c) in text.char_indices() {
            width += Self::char_advance(c) * style.font_size;
            if width > max_width {
                return i;
            }
        }
        text.len()
    }
}

/// Rough East Asian Wide / Fullwidth classification.
fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}
