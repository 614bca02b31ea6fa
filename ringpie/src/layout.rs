// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: segment spans, leader lines and radial dividers.
//!
//! Everything here is pure geometry. Spans depend only on the input data; leader lines and
//! dividers also depend on the ring geometry and surface width, so they are rebuilt whenever
//! any of those change.

use kurbo::Point;
use smallvec::SmallVec;

use crate::geometry::{PieGeometry, Quadrant};
use crate::leader::{LeaderLine, LeaderSpec, decimate};
use crate::palette::Palette;
use crate::segment::{ArcSpan, SegmentSpec, arc_spans};
use crate::style::PieStyle;

/// Inline capacity for per-segment collections.
const INLINE_SEGMENTS: usize = 12;

/// Leader placement inputs remembered so lines can be rebuilt after a data or geometry change.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LineInputs {
    leader: LeaderSpec,
    min_label_spacing: f64,
}

/// Computed layout for one ring pie.
#[derive(Clone, Debug, Default)]
pub struct PieLayout {
    palette: Palette,
    geometry: Option<PieGeometry>,
    line_inputs: Option<LineInputs>,
    spans: SmallVec<[ArcSpan; INLINE_SEGMENTS]>,
    lines: SmallVec<[LeaderLine; INLINE_SEGMENTS]>,
    dividers: SmallVec<[Point; INLINE_SEGMENTS]>,
}

impl PieLayout {
    /// Creates an empty layout using the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layout resolving palette colors through `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Replaces the chart data.
    ///
    /// Spans are rebuilt in input order. If geometry and leader inputs are already known the
    /// leader lines are rebuilt too; otherwise the layout stays not ready until
    /// [`compute_lines`](Self::compute_lines) runs.
    pub fn set_data(&mut self, items: &[SegmentSpec]) {
        self.spans.clear();
        self.spans.extend(arc_spans(items, &self.palette));
        log::debug!(
            "ring pie data: {} segments, {:.1}% total",
            self.spans.len(),
            items.iter().map(SegmentSpec::percent).sum::<f64>()
        );
        self.rebuild_lines();
    }

    /// Sets the ring geometry, rebuilding leader lines if they were computed before.
    pub fn set_geometry(&mut self, geometry: PieGeometry) {
        if self.geometry == Some(geometry) {
            return;
        }
        self.geometry = Some(geometry);
        self.rebuild_lines();
    }

    /// Computes leader lines and radial dividers for the current data and geometry.
    ///
    /// Uses the style's outer margin, leader length, edge margin and minimum label spacing.
    /// Does nothing (beyond remembering the inputs) until geometry is set.
    pub fn compute_lines(&mut self, style: &PieStyle, surface_width: f64) {
        self.line_inputs = Some(LineInputs {
            leader: LeaderSpec {
                outer_margin: style.outer_margin,
                length: style.leader_length,
                edge_margin: style.edge_margin,
                surface_width,
            },
            min_label_spacing: style.min_label_spacing,
        });
        self.rebuild_lines();
    }

    fn rebuild_lines(&mut self) {
        self.lines.clear();
        self.dividers.clear();
        let (Some(geometry), Some(inputs)) = (self.geometry, self.line_inputs) else {
            return;
        };

        for span in &self.spans {
            self.dividers
                .push(geometry.polar(span.start_angle, geometry.radius));
            let line = inputs.leader.line_for(&geometry, span, self.lines.last());
            self.lines.push(line);
        }
        decimate(&mut self.lines, geometry.center.x, inputs.min_label_spacing);

        log::debug!(
            "ring pie lines: {} of {} labels eligible",
            self.lines.iter().filter(|l| l.eligible).count(),
            self.lines.len()
        );
    }

    /// Returns `true` once there is data and leader lines have been computed for it.
    pub fn is_ready(&self) -> bool {
        !self.spans.is_empty() && !self.lines.is_empty()
    }

    /// Returns the span whose `[start_angle, end_angle)` contains `angle`.
    pub fn find_active_segment(&self, angle: f64) -> Option<&ArcSpan> {
        self.spans.iter().find(|s| s.contains(angle))
    }

    /// Quadrant of `point` relative to the ring center, if geometry is set.
    pub fn locate_quadrant(&self, point: Point) -> Option<Quadrant> {
        self.geometry.map(|g| Quadrant::locate(point, g.center))
    }

    /// Current ring geometry.
    pub fn geometry(&self) -> Option<&PieGeometry> {
        self.geometry.as_ref()
    }

    /// Palette used to resolve segment colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Segment spans in input order.
    pub fn spans(&self) -> &[ArcSpan] {
        &self.spans
    }

    /// Leader lines, one per span, once computed.
    pub fn lines(&self) -> &[LeaderLine] {
        &self.lines
    }

    /// Outer end points of the radial dividers, one per span boundary.
    pub fn dividers(&self) -> &[Point] {
        &self.dividers
    }

    /// Span at `index`.
    pub fn span(&self, index: usize) -> Option<&ArcSpan> {
        self.spans.get(index)
    }

    /// Leader line at `index`.
    pub fn line(&self, index: usize) -> Option<&LeaderLine> {
        self.lines.get(index)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::palette::ColorRef;
    use crate::segment::START_ANGLE;

    fn items(percents: &[f64]) -> Vec<SegmentSpec> {
        percents
            .iter()
            .enumerate()
            .map(|(i, &p)| SegmentSpec::new("1h", "c", p, ColorRef::Palette(i)).unwrap())
            .collect()
    }

    fn ready_layout(percents: &[f64]) -> PieLayout {
        let mut layout = PieLayout::new();
        layout.set_data(&items(percents));
        layout.set_geometry(PieGeometry::for_view_width(400.0));
        layout.compute_lines(&PieStyle::default(), 400.0);
        layout
    }

    #[test]
    fn not_ready_without_geometry_or_lines() {
        let mut layout = PieLayout::new();
        layout.set_data(&items(&[50.0, 50.0]));
        assert!(!layout.is_ready());
        layout.compute_lines(&PieStyle::default(), 400.0);
        assert!(!layout.is_ready(), "no geometry yet");
        layout.set_geometry(PieGeometry::for_view_width(400.0));
        assert!(layout.is_ready());
    }

    #[test]
    fn empty_data_is_never_ready() {
        let mut layout = ready_layout(&[]);
        assert!(!layout.is_ready());
        layout.compute_lines(&PieStyle::default(), 400.0);
        assert!(!layout.is_ready());
    }

    #[test]
    fn recomputing_lines_does_not_duplicate() {
        let mut layout = ready_layout(&[20.0, 30.0, 50.0]);
        layout.compute_lines(&PieStyle::default(), 400.0);
        layout.compute_lines(&PieStyle::default(), 400.0);
        assert_eq!(layout.lines().len(), 3);
        assert_eq!(layout.dividers().len(), 3);
    }

    #[test]
    fn new_data_rebuilds_lines() {
        let mut layout = ready_layout(&[20.0, 30.0, 50.0]);
        layout.set_data(&items(&[10.0, 90.0]));
        assert!(layout.is_ready());
        assert_eq!(layout.lines().len(), 2);
        assert_eq!(layout.spans()[1].start_angle, START_ANGLE + 36.0);
    }

    #[test]
    fn first_divider_points_to_twelve_o_clock() {
        let layout = ready_layout(&[25.0, 75.0]);
        let g = layout.geometry().copied().unwrap();
        let top = layout.dividers()[0];
        assert!((top.x - g.center.x).abs() < 1e-9);
        assert!((top.y - (g.center.y - g.radius)).abs() < 1e-9);
    }

    #[test]
    fn custom_palette_resolves_segment_colors() {
        let palette = Palette::new([css::RED, css::BLUE]);
        let mut layout = PieLayout::with_palette(palette.clone());
        layout.set_data(&items(&[20.0, 30.0, 50.0]));
        assert_eq!(layout.palette(), &palette);
        let colors: Vec<_> = layout.spans().iter().map(|s| s.color).collect();
        assert_eq!(colors, [css::RED, css::BLUE, css::RED]);
    }

    #[test]
    fn active_segment_lookup() {
        let layout = ready_layout(&[20.0, 15.0]);
        assert_eq!(layout.find_active_segment(-90.0).map(|s| s.index), Some(0));
        assert_eq!(layout.find_active_segment(-18.0).map(|s| s.index), Some(1));
        assert_eq!(layout.find_active_segment(36.0), None);
        assert_eq!(layout.find_active_segment(-91.0), None);
    }

    #[test]
    fn decimation_keeps_first_and_respects_spacing() {
        let style = PieStyle::default();
        let layout = ready_layout(&[20.0, 15.0, 13.0, 12.0, 10.0, 10.0, 8.0, 7.0, 5.0]);
        let g = layout.geometry().copied().unwrap();
        let lines = layout.lines();
        assert!(lines[0].eligible);

        let mut last_kept = 0;
        for i in 1..lines.len() {
            if !lines[i].eligible {
                continue;
            }
            let gap = (lines[i].turn.y - lines[last_kept].turn.y).abs();
            let crossed = crate::leader::crosses_center(&lines[i - 1], &lines[i], g.center.x);
            // Accumulated gaps are sums of per-line vertical gaps, so they bound the direct gap
            // only when lines do not reverse direction; check the policy input instead.
            let accumulated: f64 = lines[last_kept + 1..=i]
                .iter()
                .map(|l| l.gap_to_previous)
                .sum();
            assert!(
                crossed || accumulated >= style.min_label_spacing,
                "line {i} kept with gap {gap} / accumulated {accumulated}"
            );
            last_kept = i;
        }
    }
}
