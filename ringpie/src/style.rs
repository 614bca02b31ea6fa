// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing parameters for a ring pie.

use peniko::Color;
use peniko::color::palette::css;
use ringpie_text::TextStyle;

use crate::palette::{CATEGORY_TEXT_COLOR, DURATION_TEXT_COLOR};

/// Sizes and colors used by the layout engine and the renderer.
///
/// Lengths are in surface units. The defaults are density-independent values; use
/// [`PieStyle::scaled`] to convert them for a device density.
#[derive(Clone, Debug, PartialEq)]
pub struct PieStyle {
    /// Gap between the ring and the start of each leader line.
    pub outer_margin: f64,
    /// Length of the leader segment from start to turn point.
    pub leader_length: f64,
    /// Inset of leader end points from the surface's left/right edges.
    pub edge_margin: f64,
    /// Minimum vertical spacing between two drawn labels.
    pub min_label_spacing: f64,
    /// Vertical distance between the two lines of a label.
    pub text_line_height: f64,
    /// Radius of the dot at the start of each leader line.
    pub dot_radius: f64,
    /// Stroke width of leader lines.
    pub leader_width: f64,
    /// Stroke width of the radial dividers.
    pub divider_width: f64,
    /// Label text style.
    pub text: TextStyle,
    /// Hole and divider color (normally the host background).
    pub background: Color,
    /// Color of the first label line.
    pub duration_color: Color,
    /// Color of the second label line.
    pub category_color: Color,
    /// Appended to labels that had to be shortened.
    pub ellipsis: &'static str,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            outer_margin: 10.0,
            leader_length: 10.0,
            edge_margin: 0.0,
            min_label_spacing: 34.0,
            text_line_height: 20.0,
            dot_radius: 3.0,
            leader_width: 1.0,
            divider_width: 2.0,
            text: TextStyle::new(12.0),
            background: css::WHITE,
            duration_color: DURATION_TEXT_COLOR,
            category_color: CATEGORY_TEXT_COLOR,
            ellipsis: "...",
        }
    }
}

impl PieStyle {
    /// Returns a copy with every length multiplied by `density`.
    #[must_use]
    pub fn scaled(&self, density: f64) -> Self {
        let mut text = self.text.clone();
        text.font_size *= density;
        Self {
            outer_margin: self.outer_margin * density,
            leader_length: self.leader_length * density,
            edge_margin: self.edge_margin * density,
            min_label_spacing: self.min_label_spacing * density,
            text_line_height: self.text_line_height * density,
            dot_radius: self.dot_radius * density,
            leader_width: self.leader_width * density,
            divider_width: self.divider_width * density,
            text,
            ..self.clone()
        }
    }

    /// Sets the hole/divider color.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the leader length.
    #[must_use]
    pub fn with_leader_length(mut self, leader_length: f64) -> Self {
        self.leader_length = leader_length;
        self
    }

    /// Sets the edge margin.
    #[must_use]
    pub fn with_edge_margin(mut self, edge_margin: f64) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    /// Sets the minimum spacing between drawn labels.
    #[must_use]
    pub fn with_min_label_spacing(mut self, min_label_spacing: f64) -> Self {
        self.min_label_spacing = min_label_spacing;
        self
    }

    /// Sets the label text style.
    #[must_use]
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Sets the ellipsis marker.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: &'static str) -> Self {
        self.ellipsis = ellipsis;
        self
    }
}
