// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    Addressing, Alignment, StyleDeclaration, StyleKey, StyleProperty, TextLayout, TextOptions,
    TextStyle,
};

use super::utils::{assert_close, visual_lines, TestEnv, TestMeasurer, CHAR_WIDTH, LINE_HEIGHT};

fn aligned(env: &mut TestEnv, text: &str, width: f32, alignment: Alignment) -> TextLayout<u32> {
    env.layout(
        text,
        TextOptions {
            width,
            alignment,
            ..TextOptions::default()
        },
    )
}

#[test]
fn kerning_pulls_the_next_glyph_in() {
    let mut env = TestEnv::with_measurer(TestMeasurer::new().with_kerning('A', 'V', -0.125));
    let layout = env.wrapped("AVA", 1000.0);
    let line = layout.measure_line(0).unwrap();
    let lefts: Vec<f32> = line.boxes.iter().map(|b| b.left).collect();
    assert_eq!(line.len(), 3);
    assert_eq!(lefts, [0.0, 5.0, 15.0, 25.0]);
    assert_close(line.boxes[1].width, CHAR_WIDTH, "plain width");
    assert_close(line.boxes[1].kerned_width, 5.0, "kerned width");
    assert_close(line.width, 25.0, "line width sums kerned widths");
}

#[test]
fn left_offsets_never_decrease() {
    let measurer = TestMeasurer::new()
        .with_kerning('A', 'V', -0.125)
        .with_kerning('T', 'o', -0.1)
        .with_advance('W', 0.9)
        .with_advance('i', 0.1);
    let mut env = TestEnv::with_measurer(measurer);
    let mut layout = env.wrapped("AVATAR Wiki To\tWoo  AV", 120.0);
    let big = StyleDeclaration::new().with(StyleProperty::FontSize(64.0));
    layout.set_style_range(&mut env.cx, 3, 9, &big);
    for line in 0..layout.line_count(Addressing::Visual) {
        let boxes = &layout.measure_line(line).unwrap().boxes;
        for pair in boxes.windows(2) {
            assert!(pair[0].left <= pair[1].left, "line {line}: {pair:?}");
        }
    }
}

#[test]
fn end_of_line_box_follows_the_last_grapheme() {
    let mut env = TestEnv::new();
    let layout = env.wrapped("ab", 1000.0);
    let line = layout.measure_line(0).unwrap();
    assert_eq!(line.boxes.len(), 3);
    let end = line.boxes[2];
    assert_close(end.left, 2.0 * CHAR_WIDTH, "end box left");
    assert_eq!(end.width, 0.0);
    assert_eq!(end.kerned_width, 0.0);
    assert!(layout.measure_line(1).is_none());
}

#[test]
fn letter_spacing_widens_boxes() {
    let mut env = TestEnv::new();
    let mut style = TextStyle::default();
    style.letter_spacing = 250.0;
    let options = TextOptions {
        width: 1000.0,
        ..TextOptions::default()
    };
    let layout = TextLayout::<u32>::new(&mut env.cx, "ab", style, options);
    let line = layout.measure_line(0).unwrap();
    assert_close(line.boxes[0].width, 20.0, "spaced width");
    assert_close(line.boxes[1].left, 20.0, "spaced left");
    assert_close(line.width, 40.0, "spaced line");
}

#[test]
fn line_heights_follow_the_tallest_glyph() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("ab\ncd", 1000.0);
    assert_close(layout.line_height(0), LINE_HEIGHT, "default line");
    assert_close(
        layout.total_height(),
        LINE_HEIGHT + LINE_HEIGHT / 1.16,
        "last line drops its leading",
    );

    let big = StyleDeclaration::new().with(StyleProperty::FontSize(80.0));
    layout.set_style_range(&mut env.cx, 4, 5, &big);
    assert_close(layout.line_height(0), LINE_HEIGHT, "untouched line");
    assert_close(layout.line_height(1), 2.0 * LINE_HEIGHT, "line with a big glyph");
    assert_close(layout.line_top(1), LINE_HEIGHT, "second line top");
}

#[test]
fn empty_lines_take_the_height_of_their_style() {
    let mut env = TestEnv::new();
    let layout = env.wrapped("", 100.0);
    assert_eq!(layout.line_count(Addressing::Visual), 1);
    assert_close(layout.line_height(0), LINE_HEIGHT, "empty text still has a line");
    assert_close(layout.total_height(), LINE_HEIGHT / 1.16, "total height");
}

#[test]
fn justify_fills_the_container() {
    let mut env = TestEnv::new();
    let layout = aligned(&mut env, "ab cd ef", 100.0, Alignment::Justify);
    let line = layout.measure_line(0).unwrap();
    let total: f32 = line.graphemes().iter().map(|b| b.kerned_width).sum();
    assert_close(total, 100.0, "stretched to the container");
    assert_close(line.width, 100.0, "line width");
    assert_close(line.boxes[2].width, 20.0, "each space takes half the slack");
    assert_close(line.boxes[3].left, 40.0, "graphemes after a space shift");
    assert_eq!(layout.line_left_offset(0), 0.0);
}

#[test]
fn justify_variants_skip_paragraph_ends() {
    let mut env = TestEnv::new();
    let layout = aligned(&mut env, "ab cd ef gh\nij", 65.0, Alignment::JustifyLeft);
    assert_eq!(visual_lines(&layout), ["ab cd", "ef gh", "ij"]);
    assert_close(layout.line_width(0), 65.0, "wrapped line is stretched");
    assert_close(layout.line_width(1), 50.0, "paragraph end is not");
    assert_close(layout.line_width(2), 20.0, "last line is not");

    let layout = aligned(&mut env, "ab cd ef gh", 65.0, Alignment::JustifyRight);
    assert_eq!(layout.line_left_offset(0), 0.0);
    assert_close(layout.line_left_offset(1), 15.0, "paragraph end is right aligned");

    let layout = aligned(&mut env, "ab cd ef gh", 65.0, Alignment::JustifyCenter);
    assert_close(layout.line_left_offset(1), 7.5, "paragraph end is centred");
}

#[test]
fn justify_without_spaces_leaves_the_line() {
    let mut env = TestEnv::new();
    let layout = aligned(&mut env, "abcdef", 100.0, Alignment::Justify);
    assert_close(layout.line_width(0), 60.0, "no joiner to stretch");
    assert_eq!(layout.line_left_offset(0), 0.0);
}

#[test]
fn alignment_offsets() {
    let mut env = TestEnv::new();
    let layout = aligned(&mut env, "ab", 100.0, Alignment::Center);
    assert_close(layout.line_left_offset(0), 40.0, "centre");
    let layout = aligned(&mut env, "ab", 100.0, Alignment::Right);
    assert_close(layout.line_left_offset(0), 80.0, "right");
    let mut layout = aligned(&mut env, "ab", 100.0, Alignment::Left);
    assert_eq!(layout.line_left_offset(0), 0.0);
    layout.set_alignment(&mut env.cx, Alignment::Right);
    assert_close(layout.line_left_offset(0), 80.0, "after set_alignment");

    let options = TextOptions {
        width: 200.0,
        alignment: Alignment::Center,
        ..layout.options().clone()
    };
    layout.set_options(&mut env.cx, options);
    assert_close(layout.width(), 200.0, "after set_options");
    assert_close(layout.line_left_offset(0), 90.0, "centred in the wider container");
}

#[test]
fn styles_resolve_through_the_style_map() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("ab cd", 25.0);
    let red = StyleDeclaration::new().with(StyleProperty::Fill(0xff0000));
    layout.set_style_range(&mut env.cx, 3, 4, &red);

    // 'c' starts the second visual line but is logical offset 3.
    assert_eq!(layout.style_at(1, 0).fill, 0xff0000);
    assert_eq!(layout.style_at(1, 1).fill, 0);
    assert_eq!(layout.styles().declaration_at(0, 3), Some(&red));
    assert!(layout.has_overlay_for(StyleKey::Fill, Some(1)));
    assert!(layout.has_overlay_for(StyleKey::Fill, Some(0)));
    assert!(layout.has_overlay_for(StyleKey::Fill, None));
    assert!(!layout.has_overlay_for(StyleKey::FontSize, None));

    // Rewrapping moves the visual address, not the style.
    layout.set_width(&mut env.cx, 1000.0);
    assert_eq!(layout.style_at(0, 3).fill, 0xff0000);
}
