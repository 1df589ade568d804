//! Shared helpers: lay out a capture root the way the store expects it.

use std::fs;
use std::path::Path;

use chsess_core::session::CAPTURE_SUBDIR;

pub const CART_FIXTURE: &str = include_str!("../fixtures/cart.chlsj");

/// Writes `contents` to `{root}/charles/ios/{name}`.
pub fn write_capture(root: &Path, name: &str, contents: &str) {
    let dir = root.join(CAPTURE_SUBDIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}
