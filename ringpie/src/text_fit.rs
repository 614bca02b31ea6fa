// Copyright 2025 the ringpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortening label text to fit beside a leader line.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;

use ringpie_text::{TextMeasurer, TextStyle};

/// Fits `text` into `available` width.
///
/// Text that already fits is returned unchanged. Otherwise the longest prefix for which
/// `prefix + ellipsis` still fits is returned with `ellipsis` appended. If not even the
/// ellipsis fits, the result is empty.
pub fn fit_text<'a>(
    measurer: &(impl TextMeasurer + ?Sized),
    text: &'a str,
    style: &TextStyle,
    available: f64,
    ellipsis: &str,
) -> Cow<'a, str> {
    if measurer.measure(text, style).advance_width <= available {
        return Cow::Borrowed(text);
    }

    let room = available - measurer.measure(ellipsis, style).advance_width;
    if room < 0.0 {
        return Cow::Borrowed("");
    }
    let end = measurer.break_text(text, style, room);
    let mut out = String::with_capacity(end + ellipsis.len());
    out.push_str(&text[..end]);
    out.push_str(ellipsis);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use ringpie_text::HeuristicTextMeasurer;

    use super::*;

    fn width(text: &str, style: &TextStyle) -> f64 {
        HeuristicTextMeasurer.measure(text, style).advance_width
    }

    #[test]
    fn short_text_is_unchanged() {
        let style = TextStyle::new(10.0);
        let out = fit_text(&HeuristicTextMeasurer, "3h", &style, 100.0, "...");
        assert!(matches!(out, Cow::Borrowed("3h")));
    }

    #[test]
    fn long_text_fits_with_ellipsis() {
        let style = TextStyle::new(10.0);
        let text = "人工智能与机器学习";
        for available in [25.0, 38.0, 40.0, 61.0, 79.0] {
            let out = fit_text(&HeuristicTextMeasurer, text, &style, available, "...");
            assert!(out.ends_with("...") || out.is_empty(), "{out:?}");
            assert!(
                width(&out, &style) <= available + 1e-9,
                "{out:?} wider than {available}"
            );
        }
        let out = fit_text(&HeuristicTextMeasurer, text, &style, 38.0, "...");
        // Ellipsis is 18 wide; two 10-wide chars fit in the remaining 20.
        assert_eq!(out, "人工...");
    }

    #[test]
    fn degenerate_widths_give_empty_text() {
        let style = TextStyle::new(10.0);
        for available in [-5.0, 0.0, 10.0] {
            let out = fit_text(&HeuristicTextMeasurer, "英语", &style, available, "...");
            assert_eq!(out, "");
        }
    }
}
