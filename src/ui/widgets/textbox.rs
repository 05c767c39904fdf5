use crate::core::{Result, Token};
use crate::ui::core::bitmap::{Bitmap, Pixel};
use crate::ui::core::geom::{Insets, Pos, Rect, Size};
use crate::ui::core::widget::{Rendered, Widget};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Pixel width of one character cell.
pub const CELL_W: u16 = 6;

/// Single-line text entry.
///
/// Character tokens append, `BACK` removes the last grapheme. Glyphs are not
/// drawn; each occupied cell gets a baseline mark and the caret shows while
/// focused.
pub struct TextBox {
    rect: Rect,
    text: String,
}

impl TextBox {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        for ch in text.chars() {
            if !self.insert(ch) {
                break;
            }
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of character cells that fit inside the frame.
    pub fn capacity(&self) -> usize {
        let inner = self.rect.w.saturating_sub(2);
        // Leave one pixel column for the caret.
        (inner.saturating_sub(1) / CELL_W) as usize
    }

    pub fn cells_used(&self) -> usize {
        self.text.width()
    }

    fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let mut buf = [0u8; 4];
        let w = ch.encode_utf8(&mut buf).width();
        // Zero-width marks combine with the previous character.
        if w == 0 && self.text.is_empty() {
            return false;
        }
        if self.cells_used() + w > self.capacity() {
            return false;
        }
        self.text.push(ch);
        true
    }

    fn backspace(&mut self) -> bool {
        let Some((idx, _)) = self.text.grapheme_indices(true).next_back() else {
            return false;
        };
        self.text.truncate(idx);
        true
    }
}

impl Widget for TextBox {
    fn render(&self, focused: bool) -> Result<Rendered> {
        let mut bmp = Bitmap::new(Size::new(self.rect.w, self.rect.h));
        bmp.outline(bmp.rect(), Pixel::On);

        let inner = bmp.rect().inset(Insets::all(1));
        if !inner.is_empty() {
            let baseline = inner.bottom() - 1;
            for cell in 0..self.cells_used() as u16 {
                let x = inner.x + cell * CELL_W;
                bmp.hline(Pos::new(x, baseline), CELL_W - 1, Pixel::On);
            }
            if focused {
                let caret_x = inner.x + self.cells_used() as u16 * CELL_W;
                bmp.vline(Pos::new(caret_x, inner.y), inner.h, Pixel::On);
            }
        }

        Ok(Rendered::new(bmp, Pos::new(self.rect.x, self.rect.y)))
    }

    fn handle_input(&mut self, token: &Token) -> Result<bool> {
        if token.is(Token::BACK) {
            return Ok(self.backspace());
        }
        match token.as_char() {
            Some(ch) => Ok(self.insert(ch)),
            None => Ok(false),
        }
    }

    fn kind(&self) -> &'static str {
        "textbox"
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/textbox.rs"]
mod tests;
