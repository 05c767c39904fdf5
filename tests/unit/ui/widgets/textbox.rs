use super::*;

// 1px frame + 3 cells + 1px caret column.
fn three_cell_box() -> TextBox {
    TextBox::new(Rect::new(0, 0, 2 + 3 * CELL_W + 1, 5))
}

#[test]
fn capacity_counts_whole_cells() {
    assert_eq!(three_cell_box().capacity(), 3);
    assert_eq!(TextBox::new(Rect::new(0, 0, 2, 5)).capacity(), 0);
}

#[test]
fn characters_append_until_full() {
    let mut tb = three_cell_box();
    for ch in ['a', 'b', 'c'] {
        assert!(tb.handle_input(&Token::from(ch)).unwrap());
    }
    assert!(!tb.handle_input(&Token::from('d')).unwrap());
    assert_eq!(tb.text(), "abc");
}

#[test]
fn keypad_tokens_are_not_text() {
    let mut tb = three_cell_box();
    assert!(!tb.handle_input(&Token::up()).unwrap());
    assert!(!tb.handle_input(&Token::enter()).unwrap());
    assert_eq!(tb.text(), "");
}

#[test]
fn back_removes_last_grapheme() {
    let mut tb = three_cell_box().with_text("ae\u{301}");
    assert_eq!(tb.text(), "ae\u{301}");
    assert!(tb.handle_input(&Token::back()).unwrap());
    assert_eq!(tb.text(), "a");
    assert!(tb.handle_input(&Token::back()).unwrap());
    assert!(!tb.handle_input(&Token::back()).unwrap());
}

#[test]
fn control_characters_and_leading_marks_are_rejected() {
    let mut tb = three_cell_box();
    assert!(!tb.handle_input(&Token::from('\t')).unwrap());
    assert!(!tb.handle_input(&Token::from('\u{301}')).unwrap());
    assert_eq!(tb.text(), "");
}

#[test]
fn wide_characters_take_two_cells() {
    let mut tb = three_cell_box();
    assert!(tb.handle_input(&Token::from('漢')).unwrap());
    assert_eq!(tb.cells_used(), 2);
    assert!(!tb.handle_input(&Token::from('字')).unwrap());
    assert!(tb.handle_input(&Token::from('x')).unwrap());
}

#[test]
fn caret_only_shows_when_focused() {
    let tb = three_cell_box().with_text("a");
    let plain = tb.render(false).unwrap().bitmap;
    let focused = tb.render(true).unwrap().bitmap;

    let caret_x = 1 + CELL_W;
    assert!(!plain.is_on(caret_x, 1));
    for y in 1..4 {
        assert!(focused.is_on(caret_x, y));
    }
}

#[test]
fn each_cell_gets_a_baseline_mark() {
    let tb = three_cell_box().with_text("ab");
    let bmp = tb.render(false).unwrap().bitmap;
    let baseline = 3;
    let marked = (1..bmp.width() - 1)
        .filter(|&x| bmp.is_on(x, baseline))
        .count();
    assert_eq!(marked, 2 * (CELL_W as usize - 1));
}
