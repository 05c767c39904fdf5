use super::bitmap::Bitmap;
use super::geom::Pos;
use crate::core::{Result, Token};

/// Output of a render pass: the widget's own bitmap and where the parent
/// should place it on its canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub bitmap: Bitmap,
    pub offset: Pos,
}

impl Rendered {
    pub fn new(bitmap: Bitmap, offset: Pos) -> Self {
        Self { bitmap, offset }
    }
}

/// Anything that can draw itself as a monochrome bitmap and consume one
/// input token at a time. Containers hold `Box<dyn Widget>` and never look
/// at the concrete type.
pub trait Widget {
    fn render(&self, focused: bool) -> Result<Rendered>;

    /// Returns `Ok(true)` when the token was consumed.
    fn handle_input(&mut self, token: &Token) -> Result<bool>;

    /// Whether the focus cursor may rest on this widget.
    fn focusable(&self) -> bool {
        true
    }

    /// Short label used in log records.
    fn kind(&self) -> &'static str {
        "widget"
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn render(&self, focused: bool) -> Result<Rendered> {
        (**self).render(focused)
    }

    fn handle_input(&mut self, token: &Token) -> Result<bool> {
        (**self).handle_input(token)
    }

    fn focusable(&self) -> bool {
        (**self).focusable()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
