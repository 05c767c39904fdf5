use super::*;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn arrows_and_editing_keys_become_named_tokens() {
    assert_eq!(into_host_event(press(KeyCode::Up)), HostEvent::Input(Token::up()));
    assert_eq!(into_host_event(press(KeyCode::Down)), HostEvent::Input(Token::down()));
    assert_eq!(into_host_event(press(KeyCode::Left)), HostEvent::Input(Token::left()));
    assert_eq!(into_host_event(press(KeyCode::Right)), HostEvent::Input(Token::right()));
    assert_eq!(into_host_event(press(KeyCode::Enter)), HostEvent::Input(Token::enter()));
    assert_eq!(
        into_host_event(press(KeyCode::Backspace)),
        HostEvent::Input(Token::back())
    );
}

#[test]
fn characters_pass_through() {
    assert_eq!(
        into_host_event(press(KeyCode::Char('a'))),
        HostEvent::Input(Token::from('a'))
    );
    assert_eq!(
        into_host_event(press(KeyCode::Char('é'))),
        HostEvent::Input(Token::from('é'))
    );
}

#[test]
fn quit_keys() {
    assert_eq!(into_host_event(press(KeyCode::Char('q'))), HostEvent::Quit);
    assert_eq!(into_host_event(press(KeyCode::Esc)), HostEvent::Quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(into_host_event(ctrl_c), HostEvent::Quit);
}

#[test]
fn releases_chords_and_other_events_are_ignored() {
    let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(into_host_event(Event::Key(release)), HostEvent::Ignore);

    let ctrl_a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    assert_eq!(into_host_event(ctrl_a), HostEvent::Ignore);
    assert_eq!(into_host_event(press(KeyCode::F(2))), HostEvent::Ignore);
    assert_eq!(into_host_event(Event::FocusGained), HostEvent::Ignore);
    assert_eq!(into_host_event(Event::Resize(80, 24)), HostEvent::Resize(80, 24));
}
