// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plays the ringpie sweep animation headlessly and dumps frames as SVG.
//!
//! Set `RUST_LOG=ringpie=trace` to follow segment transitions.
mod svg;

use std::time::Duration;

use kurbo::Rect;
use ringpie::{
    ColorRef, PieGeometry, PieLayout, PieRenderer, PieStyle, RecordingSurface, RenderState,
    SegmentError, SegmentSpec, SweepClock,
};
use ringpie_text::{FontFamily, HeuristicTextMeasurer, TextStyle};
use tracing_subscriber::EnvFilter;

const VIEW_WIDTH: f64 = 540.0;
const FRAME: Duration = Duration::from_millis(16);
const PAUSE_AFTER_FRAMES: usize = 40;

fn courses() -> Result<Vec<SegmentSpec>, SegmentError> {
    [
        ("3h", "数学", 20.0),
        ("12h", "英语", 15.0),
        ("6h", "计算机", 13.0),
        ("12h", "日语", 12.0),
        ("3h", "人工智能", 10.0),
        ("3h", "人工智障", 10.0),
        ("1h", "解刨产品", 8.0),
        ("1h", "分解UI", 7.0),
        ("1h", "其他", 5.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (duration, category, percent))| {
        SegmentSpec::new(duration, category, percent, ColorRef::Palette(i))
    })
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let items = courses()?;
    let style = PieStyle::default().with_text(
        TextStyle::new(12.0).with_family(FontFamily::Named("Noto Sans SC, sans-serif".into())),
    );
    let view = Rect::new(0.0, 0.0, VIEW_WIDTH, PieGeometry::view_height(VIEW_WIDTH));

    let mut layout = PieLayout::new();
    layout.set_data(&items);
    layout.set_geometry(PieGeometry::for_view_width(VIEW_WIDTH));
    layout.compute_lines(&style, VIEW_WIDTH);

    let mut renderer = PieRenderer::new(style);
    let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
    let mut clock = SweepClock::new();
    let mut state = RenderState::initial();

    if !clock.start_if(layout.is_ready()) {
        log::warn!("nothing to animate");
        return Ok(());
    }

    let mut frames = 0_usize;
    while clock.is_running() {
        state = state.advance(&layout, clock.tick(FRAME));
        surface.clear();
        renderer.render_frame(&mut surface, &layout, &state);
        frames += 1;

        if frames == PAUSE_AFTER_FRAMES {
            clock.pause();
            let path = "ringpie_mid.svg";
            std::fs::write(path, svg::to_svg_string(view, surface.commands()))?;
            log::info!(
                "paused at {:.1} degrees (segment {}), wrote {path}",
                state.angle(),
                state.drawing_index()
            );
            clock.resume();
        }
    }

    let path = "ringpie.svg";
    std::fs::write(path, svg::to_svg_string(view, surface.commands()))?;
    log::info!(
        "{frames} frames, {} cached arcs, {} labels; wrote {path}",
        renderer.cache().arcs().len(),
        renderer.cache().labels().len()
    );
    Ok(())
}
