use crate::core::{Result, Token};
use crate::ui::core::bitmap::Bitmap;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::widget::{Rendered, Widget};

/// Static picture. Never takes focus or input.
pub struct Label {
    rect: Rect,
    image: Option<Bitmap>,
}

impl Label {
    pub fn new(rect: Rect) -> Self {
        Self { rect, image: None }
    }

    /// Label sized to `image`, placed at `at`.
    pub fn from_image(image: Bitmap, at: Pos) -> Self {
        let rect = Rect::from_pos_size(at, image.size());
        Self {
            rect,
            image: Some(image),
        }
    }

    pub fn set_image(&mut self, image: Bitmap) {
        self.image = Some(image);
    }
}

impl Widget for Label {
    fn render(&self, _focused: bool) -> Result<Rendered> {
        let mut bmp = Bitmap::new(Size::new(self.rect.w, self.rect.h));
        if let Some(image) = &self.image {
            bmp.paste(image, Pos::ORIGIN);
        }
        Ok(Rendered::new(bmp, Pos::new(self.rect.x, self.rect.y)))
    }

    fn handle_input(&mut self, _token: &Token) -> Result<bool> {
        Ok(false)
    }

    fn focusable(&self) -> bool {
        false
    }

    fn kind(&self) -> &'static str {
        "label"
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/label.rs"]
mod tests;
