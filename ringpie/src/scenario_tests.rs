// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;
use core::time::Duration;

use peniko::color::palette::css;
use ringpie_text::{HeuristicTextMeasurer, TextMeasurer};

use crate::{
    COURSE_COLORS, ColorRef, DrawCommand, PieGeometry, PieLayout, PieRenderer, PieStyle,
    RecordingSurface, RenderState, START_ANGLE, SegmentSpec, SweepClock, TextAlign,
};

const WIDTH: f64 = 1080.0;

fn courses() -> Vec<SegmentSpec> {
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
    .map(|(i, (d, c, p))| SegmentSpec::new(d, c, p, ColorRef::Palette(i)).unwrap())
    .collect()
}

fn ready(items: &[SegmentSpec], style: &PieStyle) -> PieLayout {
    let mut layout = PieLayout::new();
    layout.set_data(items);
    layout.set_geometry(PieGeometry::for_view_width(WIDTH));
    layout.compute_lines(style, WIDTH);
    layout
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn two_courses_produce_the_expected_spans() {
    let items = [
        SegmentSpec::new("3h", "数学", 20.0, ColorRef::Palette(0)).unwrap(),
        SegmentSpec::new("12h", "英语", 15.0, ColorRef::Palette(1)).unwrap(),
    ];
    let layout = ready(&items, &PieStyle::default());
    let spans = layout.spans();

    assert_close(spans[0].start_angle, -90.0);
    assert_close(spans[0].end_angle, -18.0);
    assert_close(spans[0].sweep_angle, 72.0);
    assert_close(spans[1].start_angle, -18.0);
    assert_close(spans[1].end_angle, 36.0);
    assert_close(spans[1].sweep_angle, 54.0);
    assert_eq!(spans[0].color, COURSE_COLORS[0]);
    assert_eq!(spans[1].duration_text, "12h");
}

#[test]
fn crossing_a_span_boundary_resets_progress() {
    let layout = ready(&courses(), &PieStyle::default());

    let start = RenderState::initial().advance(&layout, START_ANGLE);
    assert_eq!(start.drawing_index(), 0);
    assert_eq!(start.progress(), 0.0);

    let late = start.advance(&layout, -20.0);
    assert!(late.progress() > 95.0);

    let boundary = late.advance(&layout, layout.spans()[0].end_angle);
    assert_eq!(boundary.drawing_index(), 1);
    assert_eq!(boundary.progress(), 0.0);
}

#[test]
fn pause_and_resume_reproduce_the_same_frame_state() {
    let layout = ready(&courses(), &PieStyle::default());
    let mut clock = SweepClock::new();
    let mut state = RenderState::initial();
    clock.start();
    for _ in 0..40 {
        state = state.advance(&layout, clock.tick(Duration::from_millis(16)));
    }
    clock.pause();
    let paused = state;

    clock.tick(Duration::from_millis(500));
    clock.resume();
    let resumed = state.advance(&layout, clock.angle());
    assert_eq!(resumed.drawing_index(), paused.drawing_index());
    assert_eq!(resumed.progress(), paused.progress());
    assert_eq!(resumed.angle(), paused.angle());
}

#[test]
fn full_animation_covers_the_ring_and_keeps_the_first_label() {
    let style = PieStyle::default();
    let layout = ready(&courses(), &style);
    let mut renderer = PieRenderer::new(style);
    let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
    let mut clock = SweepClock::new();
    let mut state = RenderState::initial();

    clock.start();
    while clock.is_running() {
        state = state.advance(&layout, clock.tick(Duration::from_millis(16)));
        surface.clear();
        renderer.render_frame(&mut surface, &layout, &state);
    }
    assert!(state.is_finished());

    // Every span is covered by a cached arc that ends exactly at its end angle.
    let arcs = renderer.cache().arcs();
    for span in layout.spans() {
        assert!(
            arcs.iter().any(|a| a.color == span.color
                && (a.start_angle - span.start_angle).abs() < 1e-9
                && (a.start_angle + a.sweep_angle - span.end_angle).abs() < 1e-9),
            "span {} not completed",
            span.index
        );
    }

    // Exactly the eligible labels are cached, all fully opaque.
    let eligible: Vec<usize> = layout
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, l)| l.eligible)
        .map(|(i, _)| i)
        .collect();
    let cached: Vec<usize> = renderer.cache().labels().keys().copied().collect();
    assert_eq!(cached, eligible);
    assert!(cached.contains(&0));
    assert!(renderer.cache().labels().values().all(|l| l.alpha == 255));
    assert!(renderer.cache().leaders().values().all(|l| l.alpha == 255));

    // Two text draws per cached label.
    let texts = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .count();
    assert_eq!(texts, 2 * eligible.len());
}

#[test]
fn labels_fit_their_leader_lines() {
    let style = PieStyle::default().with_min_label_spacing(0.0);
    let layout = ready(&courses(), &style);
    let mut renderer = PieRenderer::new(style.clone());
    let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
    let mut state = RenderState::initial();
    state = state.advance(&layout, START_ANGLE + 360.0);
    renderer.render_frame(&mut surface, &layout, &state);

    for (index, label) in renderer.cache().labels() {
        let line = layout.line(*index).unwrap();
        let available = line.available_width();
        for text in [&label.duration, &label.category] {
            let width = HeuristicTextMeasurer.measure(text, &style.text).advance_width;
            assert!(width <= available + 1e-9, "{text:?} overflows {available}");
        }
        let expected = match layout.locate_quadrant(line.end).unwrap() {
            crate::Quadrant::Left => TextAlign::Left,
            crate::Quadrant::Right => TextAlign::Right,
            _ => TextAlign::Center,
        };
        assert_eq!(label.align, expected);
    }
}

#[test]
fn resize_releases_stale_geometry() {
    let style = PieStyle::default();
    let mut layout = ready(&courses(), &style);
    let mut renderer = PieRenderer::new(style.clone());
    let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
    let mut state = RenderState::initial();
    for angle in [-90.0, -40.0, 10.0, 60.0] {
        state = state.advance(&layout, angle);
        renderer.render_frame(&mut surface, &layout, &state);
    }
    let old_oval = PieGeometry::for_view_width(WIDTH).oval();

    // The host resizes: new geometry, new lines, caches released.
    let width = WIDTH / 2.0;
    layout.set_geometry(PieGeometry::for_view_width(width));
    layout.compute_lines(&style, width);
    renderer.release();
    assert!(renderer.cache().is_empty());

    surface.clear();
    state = state.advance(&layout, 70.0);
    renderer.render_frame(&mut surface, &layout, &state);
    for cmd in surface.commands() {
        if let DrawCommand::Pie { oval, .. } = cmd {
            assert_ne!(*oval, old_oval, "stale arc replayed after release");
        }
    }
}

#[test]
fn short_percentages_finish_without_overdraw() {
    let items = [
        SegmentSpec::new("1h", "a", 30.0, css::RED).unwrap(),
        SegmentSpec::new("1h", "b", 30.0, css::BLUE).unwrap(),
    ];
    let layout = ready(&items, &PieStyle::default());
    let mut renderer = PieRenderer::default();
    let mut surface = RecordingSurface::new(HeuristicTextMeasurer);
    let mut state = RenderState::initial();
    for angle in [-90.0, 0.0, 100.0, 200.0, 270.0] {
        state = state.advance(&layout, angle);
        renderer.render_frame(&mut surface, &layout, &state);
    }
    assert!(state.is_finished());
    let last_end = layout.spans()[1].end_angle;
    for arc in renderer.cache().arcs() {
        assert!(arc.start_angle + arc.sweep_angle <= last_end + 1e-9);
    }
}
