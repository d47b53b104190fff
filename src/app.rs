use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::config::PauseBehavior;
use crate::events::InputEvent;
use crate::events::InputSource;
use crate::events::Key;
use crate::events::Poll;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::render;
use crate::render::RenderError;
use crate::render::Renderer;
use crate::zoom::ZoomLevel;

pub const TITLE: &str = "John Conway's Game Of Life!";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid grid access: {0}")]
    Grid(#[from] GridError),

    #[error("Renderer failed: {0}")]
    Render(#[from] RenderError),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Clicking toggles cells, confirming starts the simulation
    Edit,

    Running,

    Paused,
}

/// Why [`App::run`] returned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user closed the application. The surface has been destroyed.
    Quit,

    /// The user left the run loop. The surface is still up.
    Escaped,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Quit | Outcome::Escaped => 0,
        }
    }
}

/// Drives editing and simulation of a [`Grid`] on a backend that both draws and produces input.
pub struct App<B> {
    backend: B,
    grid: Grid,
    zoom: ZoomLevel,
    mode: Mode,
    pause: PauseBehavior,
    tick: Duration,

    /// Events polled but not handled yet
    pending: VecDeque<InputEvent>,
}

impl<B: Renderer + InputSource> App<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        Self::with_grid(backend, Grid::new(), config)
    }

    /// Start from an existing grid instead of an empty one
    pub fn with_grid(backend: B, grid: Grid, config: &Config) -> Self {
        Self {
            backend,
            grid,
            zoom: config.zoom,
            mode: Mode::Edit,
            pause: config.pause,
            tick: config.tick,
            pending: VecDeque::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Edit the grid until confirmed, then simulate until the user quits or escapes
    pub fn run(&mut self) -> AppResult<Outcome> {
        self.backend.set_title(TITLE)?;
        self.redraw()?;

        if let Some(outcome) = self.edit_pass()? {
            return Ok(outcome);
        }

        self.set_mode(Mode::Running);

        loop {
            let poll = match self.mode {
                Mode::Paused => Poll::Wait,
                _ => Poll::Drain,
            };

            let events = self.backend.poll(poll)?;
            self.pending.extend(events);

            while let Some(event) = self.pending.pop_front() {
                if let Some(outcome) = self.handle_run_event(event)? {
                    return Ok(outcome);
                }
            }

            match (self.mode, self.pause) {
                (Mode::Running, _) => {
                    self.grid.step_generation();
                    self.redraw()?;

                    if !self.tick.is_zero() {
                        thread::sleep(self.tick);
                    }
                }
                (Mode::Paused, PauseBehavior::ResumeAfterEdit) => {
                    if let Some(outcome) = self.edit_pass()? {
                        return Ok(outcome);
                    }

                    self.set_mode(Mode::Running);
                }
                _ => {}
            }
        }
    }

    /// Handle events until the edit is confirmed. Returns an outcome if the user quit instead.
    fn edit_pass(&mut self) -> AppResult<Option<Outcome>> {
        loop {
            if self.pending.is_empty() {
                let events = self.backend.poll(Poll::Wait)?;
                self.pending.extend(events);
            }

            let Some(event) = self.pending.pop_front() else {
                continue;
            };

            match event {
                InputEvent::Quit => return self.quit().map(Some),
                InputEvent::PointerDown { x, y } => self.click(x, y)?,
                InputEvent::KeyDown(Key::Confirm) => return Ok(None),
                InputEvent::KeyDown(_) => {}
            }
        }
    }

    fn handle_run_event(&mut self, event: InputEvent) -> AppResult<Option<Outcome>> {
        match event {
            InputEvent::Quit => return self.quit().map(Some),
            InputEvent::KeyDown(Key::Escape) => {
                info!(generation = self.grid.generation(), "Leaving the run loop");
                return Ok(Some(Outcome::Escaped));
            }
            InputEvent::KeyDown(Key::Space) => match self.mode {
                Mode::Paused => self.set_mode(Mode::Running),
                _ => self.set_mode(Mode::Paused),
            },
            InputEvent::KeyDown(Key::Up) => self.set_zoom(self.zoom.zoom_in())?,
            InputEvent::KeyDown(Key::Down) => self.set_zoom(self.zoom.zoom_out())?,
            InputEvent::PointerDown { x, y }
                if self.mode == Mode::Paused && self.pause == PauseBehavior::Hold =>
            {
                self.click(x, y)?
            }
            InputEvent::PointerDown { .. } | InputEvent::KeyDown(_) => {}
        }

        Ok(None)
    }

    /// Toggle the cell drawn under surface pixel `(x, y)`
    fn click(&mut self, x: u32, y: u32) -> AppResult<()> {
        let Some((row, col)) = self.zoom.cell_at(x, y) else {
            debug!(x, y, zoom = self.zoom.index(), "Click outside the visible cells");
            return Ok(());
        };

        self.grid.toggle(row, col)?;
        debug!(row, col, "Toggled cell");

        self.redraw()
    }

    fn set_zoom(&mut self, zoom: ZoomLevel) -> AppResult<()> {
        if zoom == self.zoom {
            return Ok(());
        }

        debug!(from = self.zoom.index(), to = zoom.index(), "Zoom changed");
        self.zoom = zoom;

        self.redraw()
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(from = ?self.mode, to = ?mode, generation = self.grid.generation(), "Mode changed");
            self.mode = mode;
        }
    }

    fn quit(&mut self) -> AppResult<Outcome> {
        info!(generation = self.grid.generation(), "Quit requested");
        self.backend.destroy()?;

        Ok(Outcome::Quit)
    }

    fn redraw(&mut self) -> AppResult<()> {
        render::draw_frame(&mut self.backend, &self.grid, self.zoom)?;

        Ok(())
    }
}
