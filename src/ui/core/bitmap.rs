//! 1-bit-per-pixel image used for every render in the tree.
//!
//! Rows are packed MSB-first, `stride = ceil(w / 8)` bytes per row, which is
//! the layout most monochrome display controllers expect.

use super::geom::{Pos, Rect, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pixel {
    #[default]
    Off = 0,
    On = 1,
}

impl Pixel {
    pub fn is_on(self) -> bool {
        self == Pixel::On
    }

    pub fn inverted(self) -> Self {
        match self {
            Pixel::Off => Pixel::On,
            Pixel::On => Pixel::Off,
        }
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on {
            Pixel::On
        } else {
            Pixel::Off
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    stride: usize,
    bits: Vec<u8>,
}

impl Bitmap {
    /// A canvas of `size` with every pixel OFF.
    pub fn new(size: Size) -> Self {
        let stride = (size.w as usize).div_ceil(8);
        Self {
            size,
            stride,
            bits: vec![0; stride * size.h as usize],
        }
    }

    pub fn filled(size: Size, pixel: Pixel) -> Self {
        let mut bmp = Self::new(size);
        bmp.fill_rect(bmp.rect(), pixel);
        bmp
    }

    /// Builds a bitmap from already packed rows. Returns `None` when `bytes`
    /// does not hold exactly `ceil(w / 8) * h` bytes.
    pub fn from_packed(size: Size, bytes: Vec<u8>) -> Option<Self> {
        let stride = (size.w as usize).div_ceil(8);
        if bytes.len() != stride * size.h as usize {
            return None;
        }
        let mut bmp = Self {
            size,
            stride,
            bits: bytes,
        };
        bmp.clear_padding();
        Some(bmp)
    }

    /// Parses an ASCII picture: `#` is ON, anything else is OFF. Width is the
    /// longest row; short rows are padded with OFF.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let w = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let size = Size::new(
            w.min(u16::MAX as usize) as u16,
            rows.len().min(u16::MAX as usize) as u16,
        );
        let mut bmp = Self::new(size);
        for (y, row) in rows.iter().enumerate().take(size.h as usize) {
            for (x, ch) in row.chars().enumerate().take(size.w as usize) {
                if ch == '#' {
                    bmp.set(x as u16, y as u16, Pixel::On);
                }
            }
        }
        bmp
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.w
    }

    pub fn height(&self) -> u16 {
        self.size.h
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(Pos::ORIGIN, self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Packed row data, `stride()` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Pixel> {
        let (idx, mask) = self.locate(x, y)?;
        Some(Pixel::from(self.bits[idx] & mask != 0))
    }

    pub fn is_on(&self, x: u16, y: u16) -> bool {
        self.get(x, y).is_some_and(Pixel::is_on)
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, pixel: Pixel) {
        let Some((idx, mask)) = self.locate(x, y) else {
            return;
        };
        match pixel {
            Pixel::On => self.bits[idx] |= mask,
            Pixel::Off => self.bits[idx] &= !mask,
        }
    }

    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    pub fn fill_rect(&mut self, rect: Rect, pixel: Pixel) {
        let clip = rect.intersect(self.rect());
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.set(x, y, pixel);
            }
        }
    }

    pub fn invert_rect(&mut self, rect: Rect) {
        let clip = rect.intersect(self.rect());
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                if let Some(p) = self.get(x, y) {
                    self.set(x, y, p.inverted());
                }
            }
        }
    }

    pub fn hline(&mut self, pos: Pos, len: u16, pixel: Pixel) {
        self.fill_rect(Rect::new(pos.x, pos.y, len, 1), pixel);
    }

    pub fn vline(&mut self, pos: Pos, len: u16, pixel: Pixel) {
        self.fill_rect(Rect::new(pos.x, pos.y, 1, len), pixel);
    }

    /// One pixel wide border along the inside edge of `rect`.
    pub fn outline(&mut self, rect: Rect, pixel: Pixel) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right().saturating_sub(1);
        let bottom = rect.bottom().saturating_sub(1);
        self.hline(Pos::new(rect.x, rect.y), rect.w, pixel);
        self.hline(Pos::new(rect.x, bottom), rect.w, pixel);
        self.vline(Pos::new(rect.x, rect.y), rect.h, pixel);
        self.vline(Pos::new(right, rect.y), rect.h, pixel);
    }

    /// Overwrites the region of `self` under `src` placed at `at`, clipped to
    /// the canvas. No blending: OFF pixels of `src` clear the canvas too.
    /// Returns the canvas region that was written.
    pub fn paste(&mut self, src: &Bitmap, at: Pos) -> Rect {
        let target = Rect::from_pos_size(at, src.size).intersect(self.rect());
        for y in target.y..target.bottom() {
            for x in target.x..target.right() {
                let p = src.get(x - at.x, y - at.y).unwrap_or_default();
                self.set(x, y, p);
            }
        }
        target
    }

    pub fn count_on(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Copy of the region `rect` (clipped) as a new bitmap.
    pub fn crop(&self, rect: Rect) -> Bitmap {
        let clip = rect.intersect(self.rect());
        let mut out = Bitmap::new(Size::new(clip.w, clip.h));
        for y in 0..clip.h {
            for x in 0..clip.w {
                if self.is_on(clip.x + x, clip.y + y) {
                    out.set(x, y, Pixel::On);
                }
            }
        }
        out
    }

    fn locate(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.size.w || y >= self.size.h {
            return None;
        }
        let idx = y as usize * self.stride + (x as usize >> 3);
        let mask = 0x80u8 >> (x & 7);
        Some((idx, mask))
    }

    fn clear_padding(&mut self) {
        let used = self.size.w as usize % 8;
        if used == 0 || self.stride == 0 {
            return;
        }
        let keep = !(0xffu8 >> used);
        for row in self.bits.chunks_mut(self.stride) {
            if let Some(last) = row.last_mut() {
                *last &= keep;
            }
        }
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitmap {}x{}", self.size.w, self.size.h)?;
        for y in 0..self.size.h {
            for x in 0..self.size.w {
                f.write_str(if self.is_on(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/bitmap.rs"]
mod tests;
