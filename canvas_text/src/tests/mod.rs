// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_editing;
mod test_layout;
mod utils;
