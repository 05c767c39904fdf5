use crate::core::Token;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the host loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Input(Token),
    Resize(u16, u16),
    Quit,
    Ignore,
}

pub fn into_host_event(event: Event) -> HostEvent {
    match event {
        Event::Key(key) => key_event(key),
        Event::Resize(w, h) => HostEvent::Resize(w, h),
        _ => HostEvent::Ignore,
    }
}

fn key_event(key: KeyEvent) -> HostEvent {
    if key.kind == KeyEventKind::Release {
        return HostEvent::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') if !ctrl => HostEvent::Quit,
        KeyCode::Char('c') if ctrl => HostEvent::Quit,
        _ => match key_token(key.code) {
            Some(token) if !ctrl => HostEvent::Input(token),
            _ => HostEvent::Ignore,
        },
    }
}

/// Arrow keys, Enter and Backspace map to the named tokens; printable
/// characters become single-character tokens.
pub fn key_token(code: KeyCode) -> Option<Token> {
    match code {
        KeyCode::Up => Some(Token::up()),
        KeyCode::Down => Some(Token::down()),
        KeyCode::Left => Some(Token::left()),
        KeyCode::Right => Some(Token::right()),
        KeyCode::Enter => Some(Token::enter()),
        KeyCode::Backspace => Some(Token::back()),
        KeyCode::Char(ch) if !ch.is_control() => Some(Token::from(ch)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
