// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation progress as an immutable snapshot.
//!
//! The driving clock produces an angle; [`RenderState::advance`] turns it into "which segment
//! is being drawn, from where, how far" without touching any renderer state.

use crate::layout::PieLayout;
use crate::segment::{ANGLE_EPSILON, FULL_TURN, START_ANGLE};

/// Full progress of a segment.
pub const FULL_PROGRESS: f64 = 100.0;

/// The segment being swept in the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSegment {
    /// Segment index.
    pub index: usize,
    /// Start angle of the segment (degrees).
    pub start_angle: f64,
    /// How far the segment has been swept so far (degrees).
    pub swept_angle: f64,
    /// Reveal progress, `0..=100`.
    pub progress: f64,
    /// Set on the first frame of this segment: the index that was being drawn before.
    pub entered_from: Option<usize>,
    /// The driving angle has reached the end of the last segment.
    pub finished: bool,
}

/// Animation progress for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    angle: f64,
    drawing_index: usize,
    active: Option<ActiveSegment>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::initial()
    }
}

impl RenderState {
    /// The state before the first frame: index 0, no progress, at [`START_ANGLE`].
    pub fn initial() -> Self {
        Self {
            angle: START_ANGLE,
            drawing_index: 0,
            active: None,
        }
    }

    /// Derives the state for driving angle `angle`.
    ///
    /// Moving into a new segment forces that frame's progress to 0 and records where the
    /// animation came from in [`ActiveSegment::entered_from`]. Reaching the end of the last
    /// segment (within a small tolerance) or a full turn past [`START_ANGLE`] reports the last
    /// segment fully swept with progress 100. Angles before the first segment have no active
    /// segment.
    #[must_use]
    pub fn advance(&self, layout: &PieLayout, angle: f64) -> Self {
        let last = layout.spans().last();
        let (span, finished) = match last {
            // Accumulated spans may end a hair past a full turn.
            Some(last)
                if angle >= last.end_angle - ANGLE_EPSILON
                    || angle >= START_ANGLE + FULL_TURN =>
            {
                (last, true)
            }
            _ => match layout.find_active_segment(angle) {
                Some(span) => (span, false),
                None => {
                    return Self {
                        angle,
                        drawing_index: self.drawing_index,
                        active: None,
                    };
                }
            },
        };

        let entered = span.index != self.drawing_index;
        let (swept_angle, progress) = if finished {
            (span.sweep_angle, FULL_PROGRESS)
        } else {
            let swept = angle - span.start_angle;
            let progress = if entered {
                0.0
            } else {
                swept / span.sweep_angle * FULL_PROGRESS
            };
            (swept, progress)
        };

        Self {
            angle,
            drawing_index: span.index,
            active: Some(ActiveSegment {
                index: span.index,
                start_angle: span.start_angle,
                swept_angle,
                progress,
                entered_from: entered.then_some(self.drawing_index),
                finished,
            }),
        }
    }

    /// The driving angle this state was derived from.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Index of the segment being drawn (or last drawn, if none is active).
    pub fn drawing_index(&self) -> usize {
        self.drawing_index
    }

    /// Progress of the active segment, or 0 if there is none.
    pub fn progress(&self) -> f64 {
        self.active.map_or(0.0, |a| a.progress)
    }

    /// The active segment, if the angle falls on one.
    pub fn active(&self) -> Option<&ActiveSegment> {
        self.active.as_ref()
    }

    /// Returns `true` once the whole chart has been swept.
    pub fn is_finished(&self) -> bool {
        self.active.is_some_and(|a| a.finished)
    }
}
