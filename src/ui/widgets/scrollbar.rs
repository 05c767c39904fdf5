use crate::core::{Result, Token};
use crate::ui::core::bitmap::{Bitmap, Pixel};
use crate::ui::core::geom::{Insets, Pos, Rect, Size};
use crate::ui::core::widget::{Rendered, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Scroll position indicator over `0..=max`.
///
/// `L` steps toward the start and `R` toward the end, whatever the
/// orientation: `U`/`D` usually belong to the enclosing container.
pub struct ScrollBar {
    rect: Rect,
    orientation: Orientation,
    value: u16,
    max: u16,
}

impl ScrollBar {
    pub fn new(rect: Rect, orientation: Orientation, max: u16) -> Self {
        Self {
            rect,
            orientation,
            value: 0,
            max,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn set_value(&mut self, value: u16) {
        self.value = value.min(self.max);
    }

    /// Thumb span `(start, len)` along the track, in pixels from the start
    /// of the inner track.
    pub fn thumb(&self, track_len: u16) -> (u16, u16) {
        if track_len == 0 {
            return (0, 0);
        }
        let steps = self.max as u32 + 1;
        let len = ((track_len as u32) / steps).max(1) as u16;
        let free = track_len.saturating_sub(len) as u32;
        let start = match self.max {
            0 => 0,
            max => (free * self.value as u32 / max as u32) as u16,
        };
        (start, len)
    }
}

impl Widget for ScrollBar {
    fn render(&self, focused: bool) -> Result<Rendered> {
        let mut bmp = Bitmap::new(Size::new(self.rect.w, self.rect.h));
        if focused {
            bmp.outline(bmp.rect(), Pixel::On);
        }

        let track = bmp.rect().inset(Insets::all(1));
        let thumb = match self.orientation {
            Orientation::Vertical => {
                let (start, len) = self.thumb(track.h);
                Rect::new(track.x, track.y + start, track.w, len)
            }
            Orientation::Horizontal => {
                let (start, len) = self.thumb(track.w);
                Rect::new(track.x + start, track.y, len, track.h)
            }
        };
        bmp.fill_rect(thumb, Pixel::On);

        Ok(Rendered::new(bmp, Pos::new(self.rect.x, self.rect.y)))
    }

    fn handle_input(&mut self, token: &Token) -> Result<bool> {
        let next = match token.as_str() {
            Token::LEFT => self.value.saturating_sub(1),
            Token::RIGHT => self.value.saturating_add(1).min(self.max),
            _ => return Ok(false),
        };
        if next != self.value {
            tracing::trace!(from = self.value, to = next, "scrollbar moved");
        }
        self.value = next;
        Ok(true)
    }

    fn kind(&self) -> &'static str {
        "scrollbar"
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/scrollbar.rs"]
mod tests;
