// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caches of already-drawn geometry, replayed every frame.
//!
//! All cached coordinates are absolute surface coordinates, so the whole cache becomes
//! invalid when the surface size changes.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use crate::label::TextBlock;
use crate::leader::LeaderLine;
use crate::segment::ANGLE_EPSILON;

/// A pie slice that has been drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCacheEntry {
    /// Bounding oval of the ring.
    pub oval: Rect,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Sweep in degrees.
    pub sweep_angle: f64,
    /// Fill color.
    pub color: Color,
}

/// A leader line snapshot with the opacity it was drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CachedLeader {
    /// The line geometry.
    pub line: LeaderLine,
    /// Opacity, `0..=255`.
    pub alpha: u8,
}

/// The three render caches: arcs, leader lines, and labels.
///
/// Arcs are appended once per drawn frame. Leader lines and labels are keyed by segment
/// index, so later frames of a segment overwrite its entry.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    arcs: Vec<ArcCacheEntry>,
    leaders: BTreeMap<usize, CachedLeader>,
    labels: BTreeMap<usize, TextBlock>,
}

impl FrameCache {
    /// Cached arcs in paint order.
    pub fn arcs(&self) -> &[ArcCacheEntry] {
        &self.arcs
    }

    /// Cached leader lines by segment index.
    pub fn leaders(&self) -> &BTreeMap<usize, CachedLeader> {
        &self.leaders
    }

    /// Cached labels by segment index.
    pub fn labels(&self) -> &BTreeMap<usize, TextBlock> {
        &self.labels
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty() && self.leaders.is_empty() && self.labels.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.arcs.clear();
        self.leaders.clear();
        self.labels.clear();
    }

    pub(crate) fn push_arc(&mut self, arc: ArcCacheEntry) {
        self.arcs.push(arc);
    }

    /// Stretches the most recent arc so it ends at `end_angle`, if it starts at
    /// `start_angle`. Returns `false` if there is no such arc.
    pub(crate) fn close_last_arc(&mut self, start_angle: f64, end_angle: f64) -> bool {
        match self.arcs.last_mut() {
            Some(last) if (last.start_angle - start_angle).abs() <= ANGLE_EPSILON => {
                last.sweep_angle = end_angle - last.start_angle;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn put_leader(&mut self, index: usize, leader: CachedLeader) {
        self.leaders.insert(index, leader);
    }

    pub(crate) fn put_label(&mut self, index: usize, label: TextBlock) {
        self.labels.insert(index, label);
    }
}
