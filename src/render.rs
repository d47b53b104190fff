use std::io;

use thiserror::Error;

use crate::grid::Grid;
use crate::zoom::ZoomLevel;

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const LIVE_CELL: Color = Color::rgb(255, 255, 255);
pub const CELL_BORDER: Color = Color::rgb(83, 83, 83);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis aligned rectangle in surface pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn square(x: u32, y: u32, s: u32) -> Self {
        Self::new(x, y, s, s)
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Drawing surface the simulation is displayed on. Creating the surface is left to the
/// implementor's constructor.
pub trait Renderer {
    fn set_title(&mut self, title: &str) -> RenderResult<()>;

    fn clear(&mut self, color: Color) -> RenderResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    /// Outline `rect` with a 1 pixel wide border
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> RenderResult<()>;

    /// Tear down the surface. Nothing may be drawn afterwards.
    fn destroy(&mut self) -> RenderResult<()>;
}

/// Draws the part of `grid` visible at `zoom` as one frame
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    grid: &Grid,
    zoom: ZoomLevel,
) -> RenderResult<()> {
    let s = zoom.scale();

    renderer.clear(BACKGROUND)?;

    for (row, col, alive) in grid.visible_subgrid(zoom).iter() {
        let rect = Rect::square(s * col as u32, s * row as u32, s);

        if alive {
            renderer.fill_rect(rect, LIVE_CELL)?;
        }

        renderer.stroke_rect(rect, CELL_BORDER)?;
    }

    renderer.present()
}
