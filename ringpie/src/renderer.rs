// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental renderer.
//!
//! Each frame first records what the current [`RenderState`] adds (the active arc, and the
//! active leader line and label if they pass decimation) into the [`FrameCache`], then paints
//! the whole cache followed by the static decorations. Finished segments are therefore never
//! recomputed; only the active one is.

use kurbo::{Circle, Line};
use peniko::Color;
use ringpie_text::TextMeasurer;

use crate::cache::{ArcCacheEntry, CachedLeader, FrameCache};
use crate::geometry::PieGeometry;
use crate::label::TextBlock;
use crate::layout::PieLayout;
use crate::state::{FULL_PROGRESS, RenderState};
use crate::style::PieStyle;
use crate::surface::Surface;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Fully opaque alpha.
const MAX_ALPHA: u8 = u8::MAX;

/// Opacity for a reveal progress in `0..=100`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "progress is clamped, so the value is within 0..=255"
)]
pub fn alpha_for_progress(progress: f64) -> u8 {
    let progress = progress.clamp(0.0, FULL_PROGRESS);
    (progress * f64::from(MAX_ALPHA) / FULL_PROGRESS).floor() as u8
}

fn with_alpha(color: Color, alpha: u8) -> Color {
    color.with_alpha(f32::from(alpha) / f32::from(MAX_ALPHA))
}

/// Draws a [`PieLayout`] frame by frame, caching finished work.
#[derive(Clone, Debug, Default)]
pub struct PieRenderer {
    style: PieStyle,
    cache: FrameCache,
    last_state: Option<RenderState>,
}

impl PieRenderer {
    /// Creates a renderer with the given style.
    pub fn new(style: PieStyle) -> Self {
        Self {
            style,
            cache: FrameCache::default(),
            last_state: None,
        }
    }

    /// The drawing style.
    pub fn style(&self) -> &PieStyle {
        &self.style
    }

    /// The render caches.
    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    /// Clears all caches.
    ///
    /// Call this whenever the surface size changes; cached coordinates are absolute.
    pub fn release(&mut self) {
        log::debug!(
            "ring pie release: dropping {} cached arcs, {} leaders, {} labels",
            self.cache.arcs().len(),
            self.cache.leaders().len(),
            self.cache.labels().len()
        );
        self.cache.clear();
        self.last_state = None;
    }

    /// Draws one frame for `state`.
    ///
    /// Does nothing if `layout` is not ready. Rendering the same state twice paints the same
    /// frame without recording anything new.
    pub fn render_frame<S>(&mut self, surface: &mut S, layout: &PieLayout, state: &RenderState)
    where
        S: Surface + ?Sized,
    {
        if !layout.is_ready() {
            return;
        }
        let Some(geometry) = layout.geometry().copied() else {
            return;
        };

        if self.last_state.as_ref() != Some(state) {
            self.record(&*surface, layout, &geometry, state);
            self.last_state = Some(*state);
        }
        self.paint(surface, layout, &geometry);
    }

    fn record<M>(
        &mut self,
        measurer: &M,
        layout: &PieLayout,
        geometry: &PieGeometry,
        state: &RenderState,
    ) where
        M: TextMeasurer + ?Sized,
    {
        let Some(active) = state.active() else {
            return;
        };
        // Segment changes are detected against the last drawn state; states derived in
        // between may never reach the renderer.
        let from = match self.last_state {
            Some(last) => Some(last.drawing_index()).filter(|&i| i != active.index),
            None => active.entered_from,
        };
        if let Some(from) = from {
            log::trace!("ring pie segment {from} -> {}", active.index);
            self.catch_up(measurer, layout, geometry, from, active.index);
        }
        let Some(span) = layout.span(active.index) else {
            return;
        };

        self.cache.push_arc(ArcCacheEntry {
            oval: geometry.oval(),
            start_angle: active.start_angle,
            sweep_angle: active.swept_angle,
            color: span.color,
        });
        let alpha = alpha_for_progress(active.progress);
        self.record_label(measurer, layout, geometry, active.index, alpha);
    }

    /// Completes everything before segment `to` after the animation jumped there from `from`.
    ///
    /// The last cached arc of `from` is stretched to the segment's end and its label is made
    /// opaque. Segments skipped in between are recorded whole. A backwards jump rebuilds the
    /// cache from scratch.
    fn catch_up<M>(
        &mut self,
        measurer: &M,
        layout: &PieLayout,
        geometry: &PieGeometry,
        from: usize,
        to: usize,
    ) where
        M: TextMeasurer + ?Sized,
    {
        let first_whole = if to < from {
            self.cache.clear();
            0
        } else {
            if let Some(span) = layout.span(from) {
                if !self.cache.close_last_arc(span.start_angle, span.end_angle) {
                    self.push_whole_arc(layout, geometry, from);
                }
                self.record_label(measurer, layout, geometry, from, MAX_ALPHA);
            }
            from + 1
        };
        for index in first_whole..to {
            self.push_whole_arc(layout, geometry, index);
            self.record_label(measurer, layout, geometry, index, MAX_ALPHA);
        }
    }

    fn push_whole_arc(&mut self, layout: &PieLayout, geometry: &PieGeometry, index: usize) {
        if let Some(span) = layout.span(index) {
            self.cache.push_arc(ArcCacheEntry {
                oval: geometry.oval(),
                start_angle: span.start_angle,
                sweep_angle: span.sweep_angle,
                color: span.color,
            });
        }
    }

    /// Caches the leader line and label of segment `index`, if it passed decimation.
    fn record_label<M>(
        &mut self,
        measurer: &M,
        layout: &PieLayout,
        geometry: &PieGeometry,
        index: usize,
        alpha: u8,
    ) where
        M: TextMeasurer + ?Sized,
    {
        let (Some(span), Some(line)) = (layout.span(index), layout.line(index)) else {
            return;
        };
        if !line.eligible {
            return;
        }
        self.cache.put_leader(index, CachedLeader { line: *line, alpha });
        let quadrant = geometry.locate(line.end);
        let label = TextBlock::place(measurer, span, line, quadrant, &self.style, alpha);
        self.cache.put_label(index, label);
    }

    fn paint<S>(&self, surface: &mut S, layout: &PieLayout, geometry: &PieGeometry)
    where
        S: Surface + ?Sized,
    {
        let style = &self.style;

        for arc in self.cache.arcs() {
            surface.fill_pie(arc.oval, arc.start_angle, arc.sweep_angle, arc.color);
        }

        for cached in self.cache.leaders().values() {
            let color = with_alpha(cached.line.color, cached.alpha);
            surface.stroke_path(&cached.line.path(), style.leader_width, color);
            surface.fill_circle(Circle::new(cached.line.start, style.dot_radius), color);
        }

        for label in self.cache.labels().values() {
            surface.draw_text(
                &label.duration,
                label.duration_pos,
                label.align,
                &style.text,
                with_alpha(label.duration_color, label.alpha),
            );
            surface.draw_text(
                &label.category,
                label.category_pos,
                label.align,
                &style.text,
                with_alpha(label.category_color, label.alpha),
            );
        }

        // Static decorations: the hole, then the dividers over the ring.
        surface.fill_oval(geometry.hole_oval(), style.background);
        for &end in layout.dividers() {
            surface.stroke_line(
                Line::new(geometry.center, end),
                style.divider_width,
                style.background,
            );
        }
    }
}
