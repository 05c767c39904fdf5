//! Display backends.
//!
//! The tree only ever produces a [`Rendered`] frame; a backend decides how
//! the pixels reach a device. The headless backend keeps them in memory for
//! tests, the terminal backend mirrors them with half-block characters.

use crate::ui::core::geom::Size;
use crate::ui::core::widget::Rendered;
use std::io;

pub trait Backend {
    /// Pixel size of the display surface.
    fn size(&self) -> Size;

    /// Shows a full frame. The frame's offset is honored and anything past
    /// the display edge is clipped.
    fn present(&mut self, frame: &Rendered) -> io::Result<()>;
}

// Callers name it `terminal`; only this file knows it is ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
