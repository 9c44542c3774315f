// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod env;

pub(crate) use asserts::{assert_close, assert_close_rect};
pub(crate) use env::{visual_lines, TestEnv, TestMeasurer, CHAR_WIDTH, LINE_HEIGHT};
