use crate::core::{Result, Token};
use crate::ui::core::bitmap::{Bitmap, Pixel};
use crate::ui::core::geom::{Insets, Pos, Rect, Size};
use crate::ui::core::widget::{Rendered, Widget};

/// Framed push button. `ENTER` presses it; focus inverts the face.
pub struct Button {
    rect: Rect,
    icon: Option<Bitmap>,
    presses: u32,
    on_press: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            icon: None,
            presses: 0,
            on_press: None,
        }
    }

    /// Image drawn centered on the face.
    pub fn with_icon(mut self, icon: Bitmap) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn press(&mut self) {
        self.presses = self.presses.saturating_add(1);
        if let Some(f) = self.on_press.as_mut() {
            f();
        }
        tracing::debug!(presses = self.presses, "button pressed");
    }
}

impl Widget for Button {
    fn render(&self, focused: bool) -> Result<Rendered> {
        let size = Size::new(self.rect.w, self.rect.h);
        let mut bmp = Bitmap::new(size);
        bmp.outline(bmp.rect(), Pixel::On);

        let face = bmp.rect().inset(Insets::all(1));
        if let Some(icon) = &self.icon {
            let x = face.x + face.w.saturating_sub(icon.width()) / 2;
            let y = face.y + face.h.saturating_sub(icon.height()) / 2;
            let clipped = icon.crop(Rect::new(0, 0, face.w, face.h));
            bmp.paste(&clipped, Pos::new(x, y));
        }
        if focused {
            bmp.invert_rect(face);
        }

        Ok(Rendered::new(bmp, Pos::new(self.rect.x, self.rect.y)))
    }

    fn handle_input(&mut self, token: &Token) -> Result<bool> {
        if token.is(Token::ENTER) {
            self.press();
            return Ok(true);
        }
        Ok(false)
    }

    fn kind(&self) -> &'static str {
        "button"
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
