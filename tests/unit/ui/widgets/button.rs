use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn enter_presses_and_fires_callback() {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let mut button = Button::new(Rect::new(0, 0, 6, 4)).on_press(move || {
        counter.set(counter.get() + 1);
    });

    assert!(button.handle_input(&Token::enter()).unwrap());
    assert!(button.handle_input(&Token::enter()).unwrap());
    assert_eq!(button.presses(), 2);
    assert_eq!(fired.get(), 2);
}

#[test]
fn other_tokens_are_ignored() {
    let mut button = Button::new(Rect::new(0, 0, 6, 4));
    assert!(!button.handle_input(&Token::left()).unwrap());
    assert!(!button.handle_input(&Token::from('a')).unwrap());
    assert_eq!(button.presses(), 0);
}

#[test]
fn unfocused_button_is_a_frame() {
    let button = Button::new(Rect::new(3, 5, 4, 3));
    let rendered = button.render(false).unwrap();
    assert_eq!(rendered.offset, Pos::new(3, 5));
    assert_eq!(
        rendered.bitmap,
        Bitmap::from_ascii(&["####", "#..#", "####"])
    );
}

#[test]
fn focus_inverts_the_face() {
    let icon = Bitmap::from_ascii(&["#"]);
    let button = Button::new(Rect::new(0, 0, 5, 3)).with_icon(icon);

    let plain = button.render(false).unwrap().bitmap;
    assert_eq!(plain, Bitmap::from_ascii(&["#####", "#.#.#", "#####"]));

    let focused = button.render(true).unwrap().bitmap;
    assert_eq!(focused, Bitmap::from_ascii(&["#####", "##.##", "#####"]));
}

#[test]
fn oversized_icon_is_clipped_to_the_face() {
    let icon = Bitmap::filled(Size::new(10, 10), Pixel::On);
    let button = Button::new(Rect::new(0, 0, 4, 4)).with_icon(icon);
    let bmp = button.render(false).unwrap().bitmap;
    assert_eq!(bmp.count_on(), 16);
}
