// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring geometry and screen quadrants.

use kurbo::{Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Center and radii of the ring, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieGeometry {
    /// Ring center.
    pub center: Point,
    /// Outer radius of the ring.
    pub radius: f64,
    /// Radius of the inner disc that forms the hole.
    pub hole_radius: f64,
}

impl PieGeometry {
    /// Creates ring geometry from explicit values.
    pub fn new(center: Point, radius: f64, hole_radius: f64) -> Self {
        Self {
            center,
            radius,
            hole_radius,
        }
    }

    /// Height of a host view for the given width (a fixed 111:89 aspect ratio).
    pub fn view_height(width: f64) -> f64 {
        width * 89.0 / 111.0
    }

    /// Derives geometry for a host view of the given width.
    ///
    /// The view is centered, the ring diameter is 8/17 of the width, and the hole radius is
    /// 9/16 of the ring radius.
    pub fn for_view_width(width: f64) -> Self {
        let height = Self::view_height(width);
        let radius = width * 8.0 / 17.0 / 2.0;
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius,
            hole_radius: radius * 9.0 / 16.0,
        }
    }

    /// Bounding square of the outer ring.
    pub fn oval(&self) -> Rect {
        Rect::from_center_size(self.center, (2.0 * self.radius, 2.0 * self.radius))
    }

    /// Bounding square of the hole.
    pub fn hole_oval(&self) -> Rect {
        Rect::from_center_size(self.center, (2.0 * self.hole_radius, 2.0 * self.hole_radius))
    }

    /// The point at `distance` from the center along `angle` (degrees).
    pub fn polar(&self, angle: f64, distance: f64) -> Point {
        polar(self.center, angle, distance)
    }

    /// Quadrant of `point` relative to the ring center.
    pub fn locate(&self, point: Point) -> Quadrant {
        Quadrant::locate(point, self.center)
    }
}

/// Where a point falls relative to the ring center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left of the vertical center line.
    Left,
    /// Right of the vertical center line.
    Right,
    /// On the vertical center line, above the center.
    MiddleTop,
    /// On the vertical center line, at or below the center.
    MiddleBottom,
}

impl Quadrant {
    /// Locates `point` relative to `center`.
    ///
    /// The horizontal comparison wins; only a point exactly on the vertical center line is
    /// split by its y coordinate.
    pub fn locate(point: Point, center: Point) -> Self {
        if point.x < center.x {
            Self::Left
        } else if point.x > center.x {
            Self::Right
        } else if point.y < center.y {
            Self::MiddleTop
        } else {
            Self::MiddleBottom
        }
    }
}

/// The point at `distance` from `center` along `angle` (degrees, clockwise from 3 o'clock).
pub fn polar(center: Point, angle: f64, distance: f64) -> Point {
    let rad = angle.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * distance
}
