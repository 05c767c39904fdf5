use super::*;

#[test]
fn new_bitmap_is_blank_and_sized() {
    let bmp = Bitmap::new(Size::new(10, 3));
    assert_eq!(bmp.size(), Size::new(10, 3));
    assert_eq!(bmp.stride(), 2);
    assert_eq!(bmp.as_bytes().len(), 6);
    assert!(bmp.is_blank());
}

#[test]
fn set_and_get_use_msb_first_packing() {
    let mut bmp = Bitmap::new(Size::new(9, 1));
    bmp.set(0, 0, Pixel::On);
    bmp.set(8, 0, Pixel::On);
    assert_eq!(bmp.as_bytes(), &[0x80, 0x80]);
    assert_eq!(bmp.get(0, 0), Some(Pixel::On));
    assert_eq!(bmp.get(1, 0), Some(Pixel::Off));
    assert_eq!(bmp.get(9, 0), None);
}

#[test]
fn out_of_bounds_set_is_ignored() {
    let mut bmp = Bitmap::new(Size::new(2, 2));
    bmp.set(5, 5, Pixel::On);
    assert!(bmp.is_blank());
}

#[test]
fn paste_overwrites_without_blending() {
    let mut canvas = Bitmap::filled(Size::new(4, 4), Pixel::On);
    let hole = Bitmap::new(Size::new(2, 2));
    let written = canvas.paste(&hole, Pos::new(1, 1));
    assert_eq!(written, Rect::new(1, 1, 2, 2));
    assert_eq!(canvas.count_on(), 12);
    assert!(!canvas.is_on(1, 1));
    assert!(!canvas.is_on(2, 2));
    assert!(canvas.is_on(3, 3));
}

#[test]
fn paste_clips_to_canvas() {
    let mut canvas = Bitmap::new(Size::new(4, 4));
    let block = Bitmap::filled(Size::new(3, 3), Pixel::On);
    let written = canvas.paste(&block, Pos::new(2, 2));
    assert_eq!(written, Rect::new(2, 2, 2, 2));
    assert_eq!(canvas.count_on(), 4);
}

#[test]
fn outline_draws_only_the_edge() {
    let mut bmp = Bitmap::new(Size::new(4, 3));
    bmp.outline(bmp.rect(), Pixel::On);
    let expected = Bitmap::from_ascii(&["####", "#..#", "####"]);
    assert_eq!(bmp, expected);
}

#[test]
fn invert_rect_flips_pixels() {
    let mut bmp = Bitmap::from_ascii(&["#.", ".#"]);
    bmp.invert_rect(bmp.rect());
    assert_eq!(bmp, Bitmap::from_ascii(&[".#", "#."]));
}

#[test]
fn from_packed_rejects_wrong_length_and_masks_padding() {
    assert!(Bitmap::from_packed(Size::new(9, 1), vec![0xff]).is_none());

    let bmp = Bitmap::from_packed(Size::new(4, 1), vec![0xff]).unwrap();
    assert_eq!(bmp.as_bytes(), &[0xf0]);
    assert_eq!(bmp.count_on(), 4);
}

#[test]
fn crop_copies_region() {
    let bmp = Bitmap::from_ascii(&["....", ".##.", ".##.", "...."]);
    let inner = bmp.crop(Rect::new(1, 1, 2, 2));
    assert_eq!(inner, Bitmap::filled(Size::new(2, 2), Pixel::On));
}
