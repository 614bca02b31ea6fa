// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leader lines and label decimation.
//!
//! A leader line leaves the ring at a segment's mid-angle, bends at a turn point a short
//! distance further out, then runs horizontally to the left or right edge of the surface
//! where the segment's label sits.

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::geometry::{PieGeometry, Quadrant};
use crate::segment::ArcSpan;

/// A leader line from a segment to its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderLine {
    /// Point just outside the ring, at the segment's mid-angle.
    pub start: Point,
    /// Bend point, further out along the mid-angle.
    pub turn: Point,
    /// Label anchor on the left or right edge, level with `turn`.
    pub end: Point,
    /// Segment color.
    pub color: Color,
    /// Vertical distance between this turn point and the previous line's.
    pub gap_to_previous: f64,
    /// Whether this line (and its label) is drawn at all.
    pub eligible: bool,
}

impl LeaderLine {
    /// The three-point path `start -> turn -> end`.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.start);
        p.line_to(self.turn);
        p.line_to(self.end);
        p
    }

    /// Horizontal room for the label: the distance between the start and end x coordinates.
    pub fn available_width(&self) -> f64 {
        (self.start.x - self.end.x).abs()
    }
}

/// Edge and length inputs for leader-line placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderSpec {
    /// Gap between the ring and the leader's start point.
    pub outer_margin: f64,
    /// Distance from the start point to the turn point.
    pub length: f64,
    /// Inset of the end point from the surface's left/right edge.
    pub edge_margin: f64,
    /// Width of the drawing surface.
    pub surface_width: f64,
}

impl LeaderSpec {
    /// Builds the leader line for `span`. `previous` is the line of the span before it.
    ///
    /// The returned line is not yet decimated (`eligible` is `false`).
    pub fn line_for(
        &self,
        geometry: &PieGeometry,
        span: &ArcSpan,
        previous: Option<&LeaderLine>,
    ) -> LeaderLine {
        let angle = span.mid_angle();
        let start_radius = geometry.radius + self.outer_margin;
        let start = geometry.polar(angle, start_radius);
        let turn = geometry.polar(angle, start_radius + self.length);

        let end_x = match geometry.locate(turn) {
            Quadrant::Right => self.surface_width - self.edge_margin,
            Quadrant::Left | Quadrant::MiddleTop | Quadrant::MiddleBottom => self.edge_margin,
        };

        LeaderLine {
            start,
            turn,
            end: Point::new(end_x, turn.y),
            color: span.color,
            gap_to_previous: previous.map_or(0.0, |p| (turn.y - p.turn.y).abs()),
            eligible: false,
        }
    }
}

/// Returns `true` if the turn points of `previous` and `line` sit on opposite sides of the
/// vertical line `x = center_x`.
pub fn crosses_center(previous: &LeaderLine, line: &LeaderLine, center_x: f64) -> bool {
    let into_right = previous.turn.x <= center_x && line.turn.x > center_x;
    let into_left = previous.turn.x >= center_x && line.turn.x < center_x;
    into_right || into_left
}

/// Marks which lines are drawn so labels do not pile on top of each other.
///
/// The first line is always kept. Gaps of skipped lines accumulate; a later line is kept once
/// its own gap plus the pending gap reaches `min_spacing`, or when it crosses from one side of
/// the ring to the other. Keeping a line resets the pending gap.
pub fn decimate(lines: &mut [LeaderLine], center_x: f64, min_spacing: f64) {
    let mut pending = 0.0;
    for i in 0..lines.len() {
        let keep = if i == 0 {
            true
        } else {
            lines[i].gap_to_previous + pending >= min_spacing
                || crosses_center(&lines[i - 1], &lines[i], center_x)
        };
        lines[i].eligible = keep;
        if keep {
            pending = 0.0;
        } else {
            pending += lines[i].gap_to_previous;
        }
    }
}
