//! Common helpers for renderer implementations.
//!
//! These are renderer focused and not meant as general purpose building blocks.

use crate::outcome::Status;

pub mod color;

pub const INDENT: &str = "  ";

pub mod glyphs {
    pub const PASSED: &str = "✔";
    pub const FAILED: &str = "✗";
    pub const SKIPPED: &str = "-";
    pub const ERROR: &str = "↳";
}

pub fn glyph(status: Status) -> &'static str {
    match status {
        Status::Passed => glyphs::PASSED,
        Status::Failed => glyphs::FAILED,
        Status::Skipped => glyphs::SKIPPED,
    }
}
