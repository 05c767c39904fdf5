use super::*;

#[test]
fn left_and_right_step_within_bounds() {
    let mut bar = ScrollBar::new(Rect::new(0, 0, 3, 12), Orientation::Vertical, 2);
    assert!(bar.handle_input(&Token::left()).unwrap());
    assert_eq!(bar.value(), 0);

    bar.handle_input(&Token::right()).unwrap();
    bar.handle_input(&Token::right()).unwrap();
    bar.handle_input(&Token::right()).unwrap();
    assert_eq!(bar.value(), 2);

    assert!(!bar.handle_input(&Token::up()).unwrap());
    assert!(!bar.handle_input(&Token::enter()).unwrap());
}

#[test]
fn set_value_clamps_to_max() {
    let mut bar = ScrollBar::new(Rect::new(0, 0, 3, 12), Orientation::Vertical, 4);
    bar.set_value(99);
    assert_eq!(bar.value(), 4);
}

#[test]
fn thumb_spans_track_proportionally() {
    let mut bar = ScrollBar::new(Rect::new(0, 0, 3, 12), Orientation::Vertical, 4);
    assert_eq!(bar.thumb(10), (0, 2));
    bar.set_value(4);
    assert_eq!(bar.thumb(10), (8, 2));
    bar.set_value(2);
    assert_eq!(bar.thumb(10), (4, 2));
    assert_eq!(bar.thumb(0), (0, 0));
}

#[test]
fn thumb_is_at_least_one_pixel() {
    let bar = ScrollBar::new(Rect::new(0, 0, 3, 12), Orientation::Vertical, 100);
    assert_eq!(bar.thumb(10).1, 1);
}

#[test]
fn vertical_render_places_thumb_and_focus_frame() {
    let mut bar = ScrollBar::new(Rect::new(1, 2, 3, 6), Orientation::Vertical, 1);
    bar.set_value(1);

    let unfocused = bar.render(false).unwrap();
    assert_eq!(unfocused.offset, Pos::new(1, 2));
    assert_eq!(
        unfocused.bitmap,
        Bitmap::from_ascii(&["...", "...", "...", ".#.", ".#.", "..."])
    );

    let focused = bar.render(true).unwrap().bitmap;
    assert_eq!(
        focused,
        Bitmap::from_ascii(&["###", "#.#", "#.#", "###", "###", "###"])
    );
}

#[test]
fn horizontal_render_moves_along_x() {
    let bar = ScrollBar::new(Rect::new(0, 0, 6, 3), Orientation::Horizontal, 1);
    let bmp = bar.render(false).unwrap().bitmap;
    assert_eq!(bmp, Bitmap::from_ascii(&["......", ".##...", "......"]));
}
