//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (host event
//! loop) and higher layers (UI, studio). The runtime never sees the UI model;
//! it only asks the app for a document and hands it events.

mod app;

pub use app::{App, AppControl};
