use crate::ui::backend::Backend;
use crate::ui::core::bitmap::Bitmap;
use crate::ui::core::geom::Size;
use crate::ui::core::widget::Rendered;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// Mirrors a monochrome display in the terminal. Every character cell shows
/// one pixel column and two pixel rows.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    size: Size,
    screen: Bitmap,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout, size: Size) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            size,
            screen: Bitmap::new(size),
        })
    }
}

impl Backend for RatatuiTerminal {
    fn size(&self) -> Size {
        self.size
    }

    fn present(&mut self, frame: &Rendered) -> io::Result<()> {
        self.screen.clear();
        self.screen.paste(&frame.bitmap, frame.offset);

        let screen = &self.screen;
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(BitmapWidget { bitmap: screen }, area);
        })?;
        Ok(())
    }
}

pub(crate) struct BitmapWidget<'a> {
    pub(crate) bitmap: &'a Bitmap,
}

impl Widget for BitmapWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let rows = self.bitmap.height().div_ceil(2).min(area.height);
        let cols = self.bitmap.width().min(area.width);
        for row in 0..rows {
            for x in 0..cols {
                let top = self.bitmap.is_on(x, row * 2);
                let bottom = self.bitmap.is_on(x, row * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + row)) {
                    cell.set_char(half_block(top, bottom));
                }
            }
        }
    }
}

pub(crate) fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
