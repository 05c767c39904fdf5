use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::widgets::Button;

fn menu() -> Runtime<TestBackend> {
    let root = Container::new(Size::new(5, 9), Pos::ORIGIN)
        .with_child(Button::new(Rect::new(0, 0, 5, 3)))
        .with_child(Button::new(Rect::new(0, 3, 5, 3)))
        .with_child(Button::new(Rect::new(0, 6, 5, 3)));
    Runtime::new(root, TestBackend::new(5, 9))
}

#[test]
fn redraw_shows_focus_on_first_button() {
    let mut rt = menu();
    rt.redraw().unwrap();
    assert_eq!(
        rt.backend().dump(),
        vec![
            "#####", "#####", "#####", // focused: face inverted
            "#####", "#...#", "#####",
            "#####", "#...#", "#####",
        ]
    );
}

#[test]
fn feed_moves_focus_and_redraws() {
    let mut rt = menu();
    assert!(rt.feed(&Token::down()).unwrap());
    assert_eq!(rt.backend().frames(), 1);
    assert_eq!(rt.backend().dump()[1], "#...#");
    assert_eq!(rt.backend().dump()[4], "#####");
}

#[test]
fn ignored_token_does_not_redraw() {
    let mut rt = menu();
    assert!(!rt.feed(&Token::from('z')).unwrap());
    assert_eq!(rt.backend().frames(), 0);
}

#[test]
fn play_counts_consumed_tokens() {
    let mut rt = menu();
    let consumed = rt
        .play([Token::down(), Token::from('z'), Token::down(), Token::enter()])
        .unwrap();
    assert_eq!(consumed, 3);
    assert_eq!(rt.root().cursor_index().unwrap(), 2);
}

#[test]
fn empty_root_surfaces_ui_error() {
    let mut rt = Runtime::new(
        Container::new(Size::new(2, 2), Pos::ORIGIN),
        TestBackend::new(2, 2),
    );
    assert!(matches!(
        rt.feed(&Token::down()),
        Err(RuntimeError::Ui(UiError::EmptyContainer))
    ));
    // An empty tree still renders a blank frame.
    rt.redraw().unwrap();
    assert!(rt.backend().screen().is_blank());
}
