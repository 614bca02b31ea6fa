// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-line segment labels placed at the end of a leader line.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Color;
use ringpie_text::TextMeasurer;

use crate::geometry::Quadrant;
use crate::leader::LeaderLine;
use crate::segment::ArcSpan;
use crate::style::PieStyle;
use crate::text_fit::fit_text;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The anchor is the left edge of the text.
    Left,
    /// The anchor is the horizontal middle of the text.
    Center,
    /// The anchor is the right edge of the text.
    Right,
}

impl TextAlign {
    /// Alignment for a label anchored in `quadrant`.
    pub fn for_quadrant(quadrant: Quadrant) -> Self {
        match quadrant {
            Quadrant::Left => Self::Left,
            Quadrant::Right => Self::Right,
            Quadrant::MiddleTop | Quadrant::MiddleBottom => Self::Center,
        }
    }
}

/// A placed, styled label: duration on the first line, category on the second.
///
/// Positions are text baselines.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// First line (possibly shortened).
    pub duration: String,
    /// Second line (possibly shortened).
    pub category: String,
    /// Baseline anchor of the first line.
    pub duration_pos: Point,
    /// Baseline anchor of the second line.
    pub category_pos: Point,
    /// Alignment of both lines.
    pub align: TextAlign,
    /// Color of the first line.
    pub duration_color: Color,
    /// Color of the second line.
    pub category_color: Color,
    /// Opacity applied to both lines.
    pub alpha: u8,
}

impl TextBlock {
    /// Lays out the label of `span` at the end of `line`.
    ///
    /// Both lines are shortened to the leader line's available width. Labels left or right
    /// of the center straddle the leader; labels on the vertical center line stack above
    /// (top) or below (bottom) its end point.
    pub fn place(
        measurer: &(impl TextMeasurer + ?Sized),
        span: &ArcSpan,
        line: &LeaderLine,
        quadrant: Quadrant,
        style: &PieStyle,
        alpha: u8,
    ) -> Self {
        let available = line.available_width();
        let duration = fit_text(
            measurer,
            &span.duration_text,
            &style.text,
            available,
            style.ellipsis,
        );
        let category = fit_text(
            measurer,
            &span.category_label,
            &style.text,
            available,
            style.ellipsis,
        );

        let to_baseline = measurer
            .measure(&duration, &style.text)
            .baseline_to_middle();
        let h = style.text_line_height;
        let y = line.end.y;
        // Vertical middles of the two lines.
        let (mid1, mid2) = match quadrant {
            Quadrant::Left | Quadrant::Right => (y - h * 0.5, y + h * 0.5),
            Quadrant::MiddleTop => (y - h * 1.5, y - h * 0.5),
            Quadrant::MiddleBottom => (y + h * 0.5, y + h * 1.5),
        };

        Self {
            duration: duration.into_owned(),
            category: category.into_owned(),
            duration_pos: Point::new(line.end.x, mid1 + to_baseline),
            category_pos: Point::new(line.end.x, mid2 + to_baseline),
            align: TextAlign::for_quadrant(quadrant),
            duration_color: style.duration_color,
            category_color: style.category_color,
            alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use ringpie_text::HeuristicTextMeasurer;

    use super::*;

    fn span() -> ArcSpan {
        ArcSpan {
            index: 0,
            start_angle: -90.0,
            end_angle: -18.0,
            sweep_angle: 72.0,
            color: css::RED,
            duration_text: "3h".into(),
            category_label: "数学".into(),
        }
    }

    fn line(end_x: f64) -> LeaderLine {
        LeaderLine {
            start: Point::new(150.0, 60.0),
            turn: Point::new(160.0, 55.0),
            end: Point::new(end_x, 55.0),
            color: css::RED,
            gap_to_previous: 0.0,
            eligible: true,
        }
    }

    #[test]
    fn right_side_labels_straddle_the_leader() {
        let style = PieStyle::default();
        let block = TextBlock::place(
            &HeuristicTextMeasurer,
            &span(),
            &line(300.0),
            Quadrant::Right,
            &style,
            128,
        );
        assert_eq!(block.align, TextAlign::Right);
        assert_eq!(block.duration, "3h");
        assert_eq!(block.category, "数学");
        assert_eq!(block.duration_pos.x, 300.0);
        // 12px text: baseline offset (9.6 - 2.4) / 2 = 3.6.
        assert!((block.duration_pos.y - (55.0 - 10.0 + 3.6)).abs() < 1e-9);
        assert!((block.category_pos.y - (55.0 + 10.0 + 3.6)).abs() < 1e-9);
        assert_eq!(block.alpha, 128);
    }

    #[test]
    fn middle_labels_are_centered_and_stacked() {
        let style = PieStyle::default();
        let top = TextBlock::place(
            &HeuristicTextMeasurer,
            &span(),
            &line(300.0),
            Quadrant::MiddleTop,
            &style,
            255,
        );
        assert_eq!(top.align, TextAlign::Center);
        assert!(top.category_pos.y < 55.0);
        assert!(top.duration_pos.y < top.category_pos.y);

        let bottom = TextBlock::place(
            &HeuristicTextMeasurer,
            &span(),
            &line(300.0),
            Quadrant::MiddleBottom,
            &style,
            255,
        );
        assert!(bottom.duration_pos.y > 55.0);
        assert!(bottom.category_pos.y > bottom.duration_pos.y);
    }

    #[test]
    fn narrow_room_shortens_both_lines() {
        let style = PieStyle::default();
        // Available width is |150 - 130| = 20: room for "..." (21.6) is missing entirely
        // for the category, while "3h" (14.4) still fits.
        let block = TextBlock::place(
            &HeuristicTextMeasurer,
            &span(),
            &line(130.0),
            Quadrant::Left,
            &style,
            0,
        );
        assert_eq!(block.duration, "3h");
        assert_eq!(block.category, "");
        assert_eq!(block.align, TextAlign::Left);
    }
}
