//! monoui - focus-driven widget trees for small monochrome displays
//!
//! Modules:
//! - core: tokens and the error type shared by every layer
//! - ui: bitmaps, widgets, containers, display backends and the host runtime
//! - settings: JSON settings (display size, key bindings, logging)
//! - logging: process-wide `tracing` setup with file, stream, UDP and syslog handlers
//! - tui: terminal host glue (feature `tui`)

pub mod core;
pub mod logging;
pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
