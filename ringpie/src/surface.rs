// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface the renderer paints on.
//!
//! Hosts implement [`Surface`] on top of whatever 2D API they have (a canvas, a vector
//! scene, an SVG writer). [`RecordingSurface`] keeps a list of [`DrawCommand`]s instead of
//! painting, which is handy for tests and for replaying frames later.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, CircleSegment, Line, Point, Rect, Shape};
use peniko::Color;
use ringpie_text::{TextMeasurer, TextMetrics, TextStyle};

use crate::label::TextAlign;

/// A 2D surface with the primitives a ring pie needs.
///
/// Angles are in degrees, clockwise from 3 o'clock, as everywhere else in this crate.
pub trait Surface: TextMeasurer {
    /// Fills the pie slice of the ellipse inscribed in `oval`, from `start_angle` through
    /// `sweep_angle`, including the center.
    fn fill_pie(&mut self, oval: Rect, start_angle: f64, sweep_angle: f64, color: Color);

    /// Strokes a straight line.
    fn stroke_line(&mut self, line: Line, width: f64, color: Color);

    /// Fills the ellipse inscribed in `oval`.
    fn fill_oval(&mut self, oval: Rect, color: Color);

    /// Strokes an open poly-line path.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color);

    /// Draws one line of text with its baseline at `pos`.
    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        align: TextAlign,
        style: &TextStyle,
        color: Color,
    );

    /// Fills a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.fill_oval(circle.bounding_box(), color);
    }
}

/// Builds the outline of a pie slice inscribed in a square `oval`.
///
/// Non-square ovals use the smaller half-extent as the radius.
pub fn pie_slice_path(oval: Rect, start_angle: f64, sweep_angle: f64, tolerance: f64) -> BezPath {
    let radius = 0.5 * oval.width().min(oval.height());
    let segment = CircleSegment::new(
        oval.center(),
        radius,
        0.0,
        start_angle.to_radians(),
        sweep_angle.to_radians(),
    );
    segment.path_elements(tolerance).collect()
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::fill_pie`].
    Pie {
        /// Bounding oval.
        oval: Rect,
        /// Start angle in degrees.
        start_angle: f64,
        /// Sweep in degrees.
        sweep_angle: f64,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_line`].
    Line {
        /// The line.
        line: Line,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// [`Surface::fill_oval`] (and [`Surface::fill_circle`]).
    Oval {
        /// Bounding rectangle.
        oval: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_path`].
    Path {
        /// The path.
        path: BezPath,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// [`Surface::draw_text`].
    Text {
        /// Text content.
        text: String,
        /// Baseline anchor.
        pos: Point,
        /// Horizontal alignment.
        align: TextAlign,
        /// Font size, family, weight and style.
        style: TextStyle,
        /// Fill color.
        color: Color,
    },
}

/// A [`Surface`] that records commands, measuring text with `M`.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface<M> {
    measurer: M,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasurer> RecordingSurface<M> {
    /// Creates an empty recording.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingSurface<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }

    fn break_text(&self, text: &str, style: &TextStyle, max_width: f64) -> usize {
        self.measurer.break_text(text, style, max_width)
    }
}

impl<M: TextMeasurer> Surface for RecordingSurface<M> {
    fn fill_pie(&mut self, oval: Rect, start_angle: f64, sweep_angle: f64, color: Color) {
        self.commands.push(DrawCommand::Pie {
            oval,
            start_angle,
            sweep_angle,
            color,
        });
    }

    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line { line, width, color });
    }

    fn fill_oval(&mut self, oval: Rect, color: Color) {
        self.commands.push(DrawCommand::Oval { oval, color });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            width,
            color,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        align: TextAlign,
        style: &TextStyle,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            align,
            style: style.clone(),
            color,
        });
    }
}
