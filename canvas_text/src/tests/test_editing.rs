// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    Addressing, ErrorKind, StyleDeclaration, StyleKey, StyleProperty, TextLayout, TextOptions,
    TextStyle,
};

use super::utils::{assert_close, visual_lines, TestEnv};

fn fill(color: u32) -> StyleDeclaration<u32> {
    StyleDeclaration::new().with(StyleProperty::Fill(color))
}

fn fills(layout: &TextLayout<u32>) -> Vec<Option<u32>> {
    layout
        .styles_in_range(0, layout.grapheme_count())
        .into_iter()
        .map(|declaration| declaration.fill)
        .collect()
}

#[test]
fn style_ranges_skip_line_breaks() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("a\nb", 1000.0);
    layout.set_style_range(&mut env.cx, 0, 3, &fill(1));
    assert_eq!(layout.styles().iter().count(), 2);
    assert_eq!(fills(&layout), [Some(1), None, Some(1)]);
    assert!(layout.styles_in_range(5, 9).is_empty());
}

#[test]
fn inserted_text_shifts_styles() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("abcd", 1000.0);
    layout.set_style_range(&mut env.cx, 2, 3, &fill(7));
    layout.insert_text(&mut env.cx, 1, 1, "XY");
    assert_eq!(layout.text(), "aXYbcd");
    assert_eq!(fills(&layout), [None, None, None, None, Some(7), None]);
}

#[test]
fn inserted_text_copies_the_previous_style() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("ab", 1000.0);
    layout.set_style_range(&mut env.cx, 0, 1, &fill(3));
    layout.insert_text(&mut env.cx, 1, 1, "ZZ");
    assert_eq!(fills(&layout), [Some(3), Some(3), Some(3), None]);

    // Nothing to inherit at the start of a line.
    layout.insert_text(&mut env.cx, 0, 0, "Q");
    assert_eq!(fills(&layout)[0], None);
}

#[test]
fn inserted_breaks_move_styles_to_new_lines() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("abcd", 1000.0);
    layout.set_style_range(&mut env.cx, 3, 4, &fill(5));
    layout.insert_text(&mut env.cx, 2, 2, "\n");
    assert_eq!(layout.text(), "ab\ncd");
    assert_eq!(layout.line_count(Addressing::Logical), 2);
    assert_eq!(layout.styles().declaration_at(1, 1), Some(&fill(5)));
    assert_eq!(layout.styles().iter().count(), 1);

    // Joining the lines again brings the style back.
    layout.insert_text(&mut env.cx, 2, 3, "");
    assert_eq!(layout.text(), "abcd");
    assert_eq!(layout.styles().declaration_at(0, 3), Some(&fill(5)));
}

#[test]
fn deleting_a_range_drops_its_styles() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("abcd", 1000.0);
    layout.set_style_range(&mut env.cx, 1, 2, &fill(2));
    layout.set_style_range(&mut env.cx, 3, 4, &fill(4));
    layout.insert_text(&mut env.cx, 1, 3, "");
    assert_eq!(layout.text(), "ad");
    assert_eq!(fills(&layout), [None, Some(4)]);
}

#[test]
fn inserting_rewraps() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("ab", 25.0);
    assert_eq!(visual_lines(&layout), ["ab"]);
    layout.insert_text(&mut env.cx, 2, 2, " cd");
    assert_eq!(visual_lines(&layout), ["ab", "cd"]);
}

#[test]
fn superscript_and_subscript() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("abc", 1000.0);
    layout.set_superscript(&mut env.cx, 1, 2);
    layout.set_subscript(&mut env.cx, 2, 3);

    let b = layout.style_at(0, 1);
    assert_close(b.font_size, 24.0, "superscript size");
    assert_close(b.delta_y, -14.0, "superscript shift");
    let c = layout.style_at(0, 2);
    assert_close(c.font_size, 24.0, "subscript size");
    assert_close(c.delta_y, 4.4, "subscript shift");
    assert_eq!(layout.style_at(0, 0).font_size, 40.0);

    let boxes = &layout.measure_line(0).unwrap().boxes;
    assert_close(boxes[1].delta_y, -14.0, "box shift");
    assert_close(boxes[1].height, 24.0, "box height");
}

#[test]
fn removing_a_style_keeps_the_others() {
    let mut env = TestEnv::new();
    let mut layout = env.wrapped("abc", 1000.0);
    layout.set_superscript(&mut env.cx, 0, 3);
    layout.set_style_range(&mut env.cx, 0, 1, &fill(9));

    layout.remove_style(&mut env.cx, StyleKey::FontSize);
    assert!(!layout.has_overlay_for(StyleKey::FontSize, None));
    assert_close(layout.style_at(0, 1).delta_y, -14.0, "shift survives");

    layout.remove_style(&mut env.cx, StyleKey::DeltaY);
    assert_eq!(fills(&layout), [Some(9), None, None]);
    assert_eq!(layout.styles().iter().count(), 1);
}

#[test]
fn utf16_input() {
    let mut env = TestEnv::new();
    let units: Vec<u16> = "a\u{1F600}b".encode_utf16().collect();
    let mut layout = TextLayout::<u32>::from_utf16(
        &mut env.cx,
        &units,
        TextStyle::default(),
        TextOptions::default(),
    )
    .unwrap();
    assert_eq!(layout.grapheme_count(), 3);

    let err = layout
        .set_text_utf16(&mut env.cx, &[0x61, 0xDC00])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnpairedLowSurrogate);
    assert_eq!(err.index(), 1);
    assert_eq!(layout.text(), "a\u{1F600}b", "failed input leaves the text alone");
}
