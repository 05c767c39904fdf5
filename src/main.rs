//! Terminal mirror of a 1-bit display running a small demo tree.
//!
//! Usage: `monoui [settings.json]`

use monoui::core::Token;
use monoui::logging::Logger;
use monoui::settings::{load_settings, Settings};
use monoui::tui::crossterm::{into_host_event, HostEvent};
use monoui::tui::terminal_guard::TerminalGuard;
use monoui::ui::backend::terminal::RatatuiTerminal;
use monoui::ui::core::{Bindings, Bitmap, Container, NavAction, Pos, Rect, Size};
use monoui::ui::runtime::Runtime;
use monoui::ui::widgets::{Button, Label, Orientation, ScrollBar, TextBox};
use std::error::Error;
use std::io;
use std::path::Path;

const TITLE: [&str; 5] = [
    "#...#..##..#..#..##.",
    "##.##.#..#.##.#.#..#",
    "#.#.#.#..#.#.##.#..#",
    "#...#.#..#.#..#.#..#",
    "#...#..##..#..#..##.",
];

const ICONS: [[&str; 3]; 3] = [
    ["..#..", ".###.", "#####"],
    ["#...#", ".#.#.", "..#.."],
    ["##.##", "##.##", "##.##"],
];

fn main() -> Result<(), Box<dyn Error>> {
    let settings = match std::env::args_os().nth(1) {
        Some(path) => load_settings(Path::new(&path))?,
        None => Settings::default(),
    };

    let mut logger = Logger::from_settings(&settings.logging)?;
    let _log_guard = logger.set_config()?;

    let size = Size::new(settings.display.width, settings.display.height);
    let root = demo_tree(size, settings.bindings()?);

    let guard = TerminalGuard::new()?;
    let backend = RatatuiTerminal::new(io::stdout(), size)?;
    let mut runtime = Runtime::new(root, backend);
    let result = run(&mut runtime);
    drop(guard);

    if let Err(e) = &result {
        tracing::error!(error = %e, "host loop stopped");
    }
    result
}

fn run(runtime: &mut Runtime<RatatuiTerminal>) -> Result<(), Box<dyn Error>> {
    runtime.redraw()?;
    loop {
        match into_host_event(crossterm::event::read()?) {
            HostEvent::Quit => {
                tracing::info!("quit requested");
                return Ok(());
            }
            HostEvent::Input(token) => {
                runtime.feed(&token)?;
            }
            HostEvent::Resize(..) => runtime.redraw()?,
            HostEvent::Ignore => {}
        }
    }
}

/// Title, a column of three buttons and a side panel with its own focus
/// (ENTER moves between the text box and the scroll bar).
fn demo_tree(size: Size, bindings: Bindings) -> Container {
    let (w, h) = (size.w, size.h);
    let column_w = (w / 3).max(5);
    let top = 8;
    let button_h = (h.saturating_sub(top + 2) / 3).max(3);

    let mut root = Container::with_bindings(size, Pos::ORIGIN, bindings)
        .with_child(Label::from_image(Bitmap::from_ascii(&TITLE), Pos::new(2, 1)));
    for (i, icon) in ICONS.iter().enumerate() {
        let y = top + i as u16 * button_h;
        let button = Button::new(Rect::new(2, y, column_w, button_h.saturating_sub(1)))
            .with_icon(Bitmap::from_ascii(icon))
            .on_press(move || tracing::info!(button = i, "pressed"));
        root.push(button);
    }

    let panel_x = 2 + column_w + 2;
    let panel_w = w.saturating_sub(panel_x + 2).max(4);
    let panel_h = h.saturating_sub(top + 2).max(4);
    let text_h = (panel_h / 2).clamp(3, 14);
    let panel = Container::with_bindings(
        Size::new(panel_w, panel_h),
        Pos::new(panel_x, top),
        Bindings::empty(),
    )
    .with_binding(Token::enter(), NavAction::Next)
    .with_child(TextBox::new(Rect::new(0, 0, panel_w, text_h)))
    .with_child(ScrollBar::new(
        Rect::new(0, text_h + 2, panel_w, 6),
        Orientation::Horizontal,
        10,
    ));
    root.push(panel);
    root
}
