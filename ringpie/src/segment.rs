// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment input data and the angle spans derived from it.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock in surface coordinates
//! (y grows downward). [`START_ANGLE`] (`-90`) is 12 o'clock.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use peniko::Color;

use crate::palette::{ColorRef, Palette};

/// Angle at which the first segment starts (12 o'clock).
pub const START_ANGLE: f64 = -90.0;

/// Degrees in a full revolution.
pub const FULL_TURN: f64 = 360.0;

/// Percent value of a whole chart.
pub const FULL_PERCENT: f64 = 100.0;

/// Tolerance when comparing accumulated angles.
pub(crate) const ANGLE_EPSILON: f64 = 1e-6;

/// Errors returned when building a [`SegmentSpec`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentError {
    /// The percentage is not finite, not positive, or above 100.
    PercentOutOfRange(f64),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentOutOfRange(p) => {
                write!(f, "segment percentage {p} is outside (0, 100]")
            }
        }
    }
}

impl core::error::Error for SegmentError {}

/// One labeled, proportional input item.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentSpec {
    duration_text: String,
    category_label: String,
    percent: f64,
    color: ColorRef,
}

impl SegmentSpec {
    /// Creates a segment spec.
    ///
    /// Percentages of a chart are not required to sum to 100; only each individual value is
    /// checked.
    pub fn new(
        duration_text: impl Into<String>,
        category_label: impl Into<String>,
        percent: f64,
        color: impl Into<ColorRef>,
    ) -> Result<Self, SegmentError> {
        if !percent.is_finite() || percent <= 0.0 || percent > FULL_PERCENT {
            return Err(SegmentError::PercentOutOfRange(percent));
        }
        Ok(Self {
            duration_text: duration_text.into(),
            category_label: category_label.into(),
            percent,
            color: color.into(),
        })
    }

    /// First label line (e.g. `"3h"`).
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Second label line (e.g. a course name).
    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    /// Share of the whole chart, in percent.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Color reference.
    pub fn color(&self) -> ColorRef {
        self.color
    }
}

/// The angular extent of one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSpan {
    /// Position in input order.
    pub index: usize,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees (`start_angle + sweep_angle`).
    pub end_angle: f64,
    /// Angular width in degrees.
    pub sweep_angle: f64,
    /// Resolved fill color.
    pub color: Color,
    /// First label line.
    pub duration_text: String,
    /// Second label line.
    pub category_label: String,
}

impl ArcSpan {
    /// Angle halfway through the span.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle * 0.5
    }

    /// Returns `true` if `angle` lies in `[start_angle, end_angle)`.
    pub fn contains(&self, angle: f64) -> bool {
        self.start_angle <= angle && angle < self.end_angle
    }
}

/// Sweep angle for a percentage.
pub fn sweep_for_percent(percent: f64) -> f64 {
    FULL_TURN * percent / FULL_PERCENT
}

/// Builds contiguous spans for `items`, starting at [`START_ANGLE`].
pub(crate) fn arc_spans<'a>(
    items: &'a [SegmentSpec],
    palette: &'a Palette,
) -> impl Iterator<Item = ArcSpan> + 'a {
    let mut start_angle = START_ANGLE;
    items.iter().enumerate().map(move |(index, item)| {
        let sweep_angle = sweep_for_percent(item.percent);
        let end_angle = start_angle + sweep_angle;
        let span = ArcSpan {
            index,
            start_angle,
            end_angle,
            sweep_angle,
            color: item.color.resolve(palette),
            duration_text: item.duration_text.clone(),
            category_label: item.category_label.clone(),
        };
        start_angle = end_angle;
        span
    })
}
