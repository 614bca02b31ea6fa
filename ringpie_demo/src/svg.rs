// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of recorded ring pie frames.

use kurbo::Rect;
use peniko::Color;
use ringpie::{DrawCommand, TextAlign, pie_slice_path};
use ringpie_text::FontStyle;

const TOLERANCE: f64 = 0.1;

/// Serializes one frame of `commands` as an SVG document sized to `view`.
pub(crate) fn to_svg_string(view: Rect, commands: &[DrawCommand]) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    for command in commands {
        match command {
            DrawCommand::Pie {
                oval,
                start_angle,
                sweep_angle,
                color,
            } => {
                let d = pie_slice_path(*oval, *start_angle, *sweep_angle, TOLERANCE).to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", *color);
                out.push_str("/>\n");
            }
            DrawCommand::Line { line, width, color } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{width}""#,
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                ));
                write_paint_attr(&mut out, "stroke", *color);
                out.push_str("/>\n");
            }
            DrawCommand::Oval { oval, color } => {
                let center = oval.center();
                out.push_str(&format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                    center.x,
                    center.y,
                    0.5 * oval.width(),
                    0.5 * oval.height()
                ));
                write_paint_attr(&mut out, "fill", *color);
                out.push_str("/>\n");
            }
            DrawCommand::Path { path, width, color } => {
                out.push_str(&format!(
                    r#"<path d="{}" fill="none" stroke-width="{width}""#,
                    path.to_svg()
                ));
                write_paint_attr(&mut out, "stroke", *color);
                out.push_str("/>\n");
            }
            DrawCommand::Text {
                text,
                pos,
                align,
                style,
                color,
            } => {
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}""#,
                    pos.x,
                    pos.y,
                    style.font_size,
                    escape_xml(style.font_family.as_css_family()),
                    style.font_weight.0
                ));
                out.push_str(match style.font_style {
                    FontStyle::Normal => "",
                    FontStyle::Italic => r#" font-style="italic""#,
                    FontStyle::Oblique => r#" font-style="oblique""#,
                });
                out.push_str(match align {
                    TextAlign::Left => r#" text-anchor="start""#,
                    TextAlign::Center => r#" text-anchor="middle""#,
                    TextAlign::Right => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", *color);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
