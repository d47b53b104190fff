pub mod app;
pub mod canvas;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod render;
pub mod rule_set;
pub mod term;
pub mod zoom;

/// Width of the drawing surface, in pixels
pub const SURFACE_WIDTH: u32 = 1024;

/// Height of the drawing surface, in pixels
pub const SURFACE_HEIGHT: u32 = 512;
