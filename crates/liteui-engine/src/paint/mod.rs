//! Paint model shared between the theme and the stylesheet generator.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - parsing from and printing to CSS hex notation

pub mod color;

pub use color::{Color, ParseColorError};
