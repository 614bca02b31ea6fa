// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An animated ring pie chart with leader-line labels.
//!
//! The crate has two layers:
//! - **Layout** ([`PieLayout`]) turns ordered `(percent, label)` segments into contiguous
//!   angle spans, leader lines that run from each segment to the left or right edge, and
//!   decides which labels are drawn at all so they do not collide.
//! - **Rendering** ([`PieRenderer`]) draws one frame at a time onto any [`Surface`]. Finished
//!   segments are replayed from caches; only the segment currently sweeping into view is
//!   recomputed.
//!
//! A host drives the animation with a [`SweepClock`], turning each angle into an immutable
//! [`RenderState`]:
//!
//! ```
//! use core::time::Duration;
//! use ringpie::{
//!     ColorRef, PieGeometry, PieLayout, PieRenderer, PieStyle, RecordingSurface, RenderState,
//!     SegmentSpec, SweepClock,
//! };
//! use ringpie_text::HeuristicTextMeasurer;
//!
//! let items = [
//!     SegmentSpec::new("3h", "Math", 60.0, ColorRef::Palette(0)).unwrap(),
//!     SegmentSpec::new("2h", "Art", 40.0, ColorRef::Palette(1)).unwrap(),
//! ];
//! let style = PieStyle::default();
//! let mut layout = PieLayout::new();
//! layout.set_data(&items);
//! layout.set_geometry(PieGeometry::for_view_width(360.0));
//! layout.compute_lines(&style, 360.0);
//!
//! let mut renderer = PieRenderer::new(style);
//! let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
//! let mut clock = SweepClock::new();
//! let mut state = RenderState::initial();
//! clock.start();
//! while clock.is_running() {
//!     let angle = clock.tick(Duration::from_millis(16));
//!     state = state.advance(&layout, angle);
//!     surface.clear();
//!     renderer.render_frame(&mut surface, &layout, &state);
//! }
//! assert!(state.is_finished());
//! ```
//!
//! Text shaping is out of scope; labels are measured through [`ringpie_text::TextMeasurer`].

#![no_std]

extern crate alloc;

mod cache;
mod clock;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod label;
mod layout;
mod leader;
mod palette;
mod renderer;
#[cfg(test)]
mod scenario_tests;
mod segment;
mod state;
mod style;
mod surface;
mod text_fit;

pub use cache::{ArcCacheEntry, CachedLeader, FrameCache};
pub use clock::{Easing, SweepClock};
pub use geometry::{PieGeometry, Quadrant, polar};
pub use label::{TextAlign, TextBlock};
pub use layout::PieLayout;
pub use leader::{LeaderLine, LeaderSpec, crosses_center, decimate};
pub use palette::{CATEGORY_TEXT_COLOR, COURSE_COLORS, ColorRef, DURATION_TEXT_COLOR, Palette};
pub use renderer::{PieRenderer, alpha_for_progress};
pub use segment::{
    ArcSpan, FULL_PERCENT, FULL_TURN, START_ANGLE, SegmentError, SegmentSpec, sweep_for_percent,
};
pub use state::{ActiveSegment, FULL_PROGRESS, RenderState};
pub use style::PieStyle;
pub use surface::{DrawCommand, RecordingSurface, Surface, pie_slice_path};
pub use text_fit::fit_text;
