use crate::render::RenderResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the application, from any mode
    Quit,

    KeyDown(Key),

    /// Primary pointer button pressed at `(x, y)` surface pixels
    PointerDown { x: u32, y: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Leave edit mode and start the simulation
    Confirm,

    /// Pause toggle
    Space,

    /// Leave the run loop
    Escape,

    /// Zoom in
    Up,

    /// Zoom out
    Down,

    Other,
}

/// How long [`InputSource::poll`] may block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    /// Block until at least one event is available
    Wait,

    /// Return whatever is pending, possibly nothing
    Drain,
}

pub trait InputSource {
    fn poll(&mut self, mode: Poll) -> RenderResult<Vec<InputEvent>>;
}
