//! Terminal cell rasterizer
//!
//! The logical surface is mapped onto a grid of terminal cells. Each cell is
//! split into two square-ish sub-pixels drawn with an upper-half-block glyph:
//! foreground is the top sub-pixel, background the bottom one. Text replaces
//! whole cells, one character per cell.
//!
//! A sub-pixel is lit when its center sample falls inside the shape. Shapes
//! smaller than a sub-pixel light the one containing their center so the ball
//! never disappears between samples.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use glam::IVec2;

use crate::renderer::Color;
use crate::sim::Rect;

/// Preferred sub-pixel size in logical pixels
pub const PIXEL_PITCH: i32 = 10;

const HALF_BLOCK: char = '▀';

/// Off-screen frame buffer in terminal cells
#[derive(Debug, Clone)]
pub struct CellGrid {
    /// Logical surface size the grid was fitted to
    surface: IVec2,
    /// Logical pixels per sub-pixel
    pitch: IVec2,
    cols: u16,
    rows: u16,
    /// `cols` x `rows * 2` sub-pixels, row-major
    pixels: Vec<Color>,
    /// Text overlay, `cols` x `rows`
    glyphs: Vec<Option<(char, Color)>>,
}

impl CellGrid {
    /// Grid for a `width` x `height` surface using at most `max_cols` x `max_rows`
    /// cells. Sub-pixels grow past `PIXEL_PITCH` only when the terminal is too small.
    pub fn fit(width: i32, height: i32, max_cols: u16, max_rows: u16) -> Self {
        let max_cols = i32::from(max_cols.max(1));
        let max_sub_rows = i32::from(max_rows.max(1)) * 2;
        let pitch = IVec2::new(
            PIXEL_PITCH.max(div_ceil(width, max_cols)),
            PIXEL_PITCH.max(div_ceil(height, max_sub_rows)),
        );
        let cols = div_ceil(width, pitch.x).max(1) as u16;
        let rows = div_ceil(div_ceil(height, pitch.y), 2).max(1) as u16;
        let cells = usize::from(cols) * usize::from(rows);

        Self {
            surface: IVec2::new(width, height),
            pitch,
            cols,
            rows,
            pixels: vec![Color::rgb(0, 0, 0); cells * 2],
            glyphs: vec![None; cells],
        }
    }

    /// Refit the same surface into a terminal of `max_cols` x `max_rows` cells.
    /// Drawn content is discarded.
    pub fn resize(&mut self, max_cols: u16, max_rows: u16) {
        *self = Self::fit(self.surface.x, self.surface.y, max_cols, max_rows);
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Logical pixels covered by one sub-pixel
    pub fn pitch(&self) -> IVec2 {
        self.pitch
    }

    fn sub_rows(&self) -> i32 {
        i32::from(self.rows) * 2
    }

    /// Color of sub-pixel (`x`, `y`)
    #[cfg(test)]
    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.pixel_index(x, y).map(|i| self.pixels[i])
    }

    /// Text glyph over cell (`col`, `row`)
    pub fn glyph(&self, col: u16, row: u16) -> Option<(char, Color)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.glyphs[usize::from(row) * usize::from(self.cols) + usize::from(col)]
    }

    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.cols) || y >= self.sub_rows() {
            return None;
        }
        Some(y as usize * usize::from(self.cols) + x as usize)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.pixel_index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        self.glyphs.fill(None);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_shape(rect, color, |_| true);
    }

    /// Fill the ellipse inscribed in `bounds`, widened by half a sub-pixel
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let center = bounds.pos.as_vec2() + bounds.size.as_vec2() / 2.0;
        let radii = (bounds.size.as_vec2() + self.pitch.as_vec2()) / 2.0;
        self.fill_shape(bounds, color, |sample| {
            let d = (sample - center) / radii;
            d.length_squared() <= 1.0
        });
    }

    fn fill_shape(&mut self, bounds: Rect, color: Color, inside: impl Fn(glam::Vec2) -> bool) {
        if bounds.width() <= 0 || bounds.height() <= 0 {
            return;
        }

        let xs = sample_range(bounds.left(), bounds.right(), self.pitch.x, i32::from(self.cols));
        let ys = sample_range(bounds.top(), bounds.bottom(), self.pitch.y, self.sub_rows());
        let mut lit = false;
        for y in ys.clone() {
            for x in xs.clone() {
                let sample = (IVec2::new(x, y) * self.pitch + self.pitch / 2).as_vec2();
                if inside(sample) {
                    self.set_pixel(x, y, color);
                    lit = true;
                }
            }
        }

        if !lit {
            let center = bounds.center();
            self.set_pixel(
                center.x.div_euclid(self.pitch.x),
                center.y.div_euclid(self.pitch.y),
                color,
            );
        }
    }

    /// Width in logical pixels of `text` drawn one glyph per cell
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.pitch.x
    }

    /// Place `text` starting at the cell containing `pos`; clipped at the edges
    pub fn draw_text(&mut self, text: &str, pos: IVec2, color: Color) {
        let row = pos.y.div_euclid(self.pitch.y * 2);
        if row < 0 || row >= i32::from(self.rows) {
            return;
        }
        let start = pos.x.div_euclid(self.pitch.x);
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i32;
            if col < 0 {
                continue;
            }
            if col >= i32::from(self.cols) {
                break;
            }
            let index = row as usize * usize::from(self.cols) + col as usize;
            self.glyphs[index] = Some((ch, color));
        }
    }

    /// Emit the whole frame as terminal commands, anchored at the top-left cell
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut current: Option<(Color, Color)> = None;

        for row in 0..self.rows {
            queue!(out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let top = self.pixels[self.pixel_offset(col, row * 2)];
                let bottom = self.pixels[self.pixel_offset(col, row * 2 + 1)];
                let (ch, fg, bg) = match self.glyph(col, row) {
                    Some((ch, fg)) => (ch, fg, top),
                    None => (HALF_BLOCK, top, bottom),
                };

                if current != Some((fg, bg)) {
                    queue!(
                        out,
                        SetForegroundColor(term_color(fg)),
                        SetBackgroundColor(term_color(bg))
                    )?;
                    current = Some((fg, bg));
                }
                queue!(out, Print(ch))?;
            }
        }

        queue!(out, ResetColor)
    }

    fn pixel_offset(&self, col: u16, sub_row: u16) -> usize {
        usize::from(sub_row) * usize::from(self.cols) + usize::from(col)
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Ceiling division that also rounds toward positive infinity for negatives
fn div_ceil(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}

/// Indices of sub-pixels whose center sample lies in `lo..hi`, clipped to `0..count`
fn sample_range(lo: i32, hi: i32, pitch: i32, count: i32) -> std::ops::Range<i32> {
    let half = pitch / 2;
    let start = div_ceil(lo - half, pitch).clamp(0, count);
    let end = div_ceil(hi - half, pitch).clamp(0, count);
    start..end.max(start)
}
