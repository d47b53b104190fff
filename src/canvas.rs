use crate::render::Color;
use crate::render::Rect;
use crate::render::BACKGROUND;

/// Side length of a dot, in surface pixels. A dot is the smallest thing the canvas can show.
pub const DOT: u32 = 8;

/// Shades from darkest to brightest
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Strokes thinner than this many dots per side are not drawn
const MIN_STROKE_DOTS: usize = 3;

/// Rasterises surface pixel rectangles into a grid of dots, one text character each.
pub struct Canvas {
    /// The dot buffer
    cb: Vec<Color>,

    /// The frame buffer
    fb: String,

    /// Width in dots
    w: usize,

    /// Height in dots
    h: usize,
}

impl Canvas {
    /// A canvas covering `width` by `height` surface pixels
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width.div_ceil(DOT) as usize, height.div_ceil(DOT) as usize);

        // Shade characters are at most 3 bytes, plus one newline per line
        let fb = String::with_capacity(3 * w * h + h);

        Self {
            cb: vec![BACKGROUND; w * h],
            fb,
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn reset(&mut self, color: Color) {
        self.cb.fill(color);
    }

    pub fn dot(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.w && y < self.h).then(|| self.cb[self.xy_from(x, y)])
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.dot_span(rect) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let i = self.xy_from(x, y);
                self.cb[i] = color;
            }
        }
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.dot_span(rect) else {
            return;
        };

        if x1 - x0 + 1 < MIN_STROKE_DOTS || y1 - y0 + 1 < MIN_STROKE_DOTS {
            return;
        }

        for x in x0..=x1 {
            let i = self.xy_from(x, y0);
            let j = self.xy_from(x, y1);

            self.cb[i] = color;
            self.cb[j] = color;
        }

        for y in y0..=y1 {
            let i = self.xy_from(x0, y);
            let j = self.xy_from(x1, y);

            self.cb[i] = color;
            self.cb[j] = color;
        }
    }

    /// Turn the dot buffer into text, one line per row of dots
    pub fn render(&mut self) -> &str {
        self.fb.clear();

        for (n, &color) in self.cb.iter().enumerate() {
            if n > 0 && n % self.w == 0 {
                self.fb.push('\n');
            }

            self.fb.push(Self::shade(color));
        }
        self.fb.push('\n');

        &self.fb
    }

    /// Inclusive range of dots touched by `rect`, clipped to the canvas
    fn dot_span(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        if rect.w == 0 || rect.h == 0 || self.w == 0 || self.h == 0 {
            return None;
        }

        let x0 = (rect.x / DOT) as usize;
        let y0 = (rect.y / DOT) as usize;

        if x0 >= self.w || y0 >= self.h {
            return None;
        }

        let x1 = ((rect.x.saturating_add(rect.w - 1) / DOT) as usize).min(self.w - 1);
        let y1 = ((rect.y.saturating_add(rect.h - 1) / DOT) as usize).min(self.h - 1);

        Some((x0, y0, x1, y1))
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn shade(color: Color) -> char {
        let luma = (299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32) / 1000;

        // round to the closest of the 5 shades
        SHADES[((luma * 4 + 127) / 255) as usize]
    }
}
