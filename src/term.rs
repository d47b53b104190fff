use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use tracing::debug;
use tracing::warn;

use crate::canvas::Canvas;
use crate::events::InputEvent;
use crate::events::InputSource;
use crate::events::Poll;
use crate::io::convert_event;
use crate::render::Color;
use crate::render::Rect;
use crate::render::RenderResult;
use crate::render::Renderer;

/// How often a blocking poll wakes up while waiting for input
const WAIT_SLICE: Duration = Duration::from_millis(250);

/// Renderer and input source backed by the terminal. Each character cell shows one
/// [`DOT`](crate::canvas::DOT) of the surface.
pub struct Terminal<W: Write = Stdout> {
    out: W,
    canvas: Canvas,

    /// Whether the terminal is in raw mode on the alternate screen
    active: bool,
}

impl Terminal {
    /// Create a surface of `width` by `height` pixels and take over the terminal
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Self::with_writer(io::stdout(), width, height)
    }
}

impl<W: Write> Terminal<W> {
    /// Like [`Terminal::new`], drawing to `out` instead of stdout
    pub fn with_writer(out: W, width: u32, height: u32) -> RenderResult<Self> {
        let canvas = Canvas::new(width, height);

        match terminal::size() {
            Ok((cols, rows)) if (cols as usize) < canvas.width() || (rows as usize) < canvas.height() => {
                warn!(
                    cols,
                    rows,
                    need_cols = canvas.width(),
                    need_rows = canvas.height(),
                    "Terminal is smaller than the surface, the frame will be cut off"
                );
            }
            Ok(_) => {}
            Err(e) => warn!("Could not read the terminal size: {e}"),
        }

        let mut term = Self {
            out,
            canvas,
            active: false,
        };

        terminal::enable_raw_mode()?;

        // from here on, dropping `term` on an early return leaves raw mode again
        term.active = true;

        execute!(
            term.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        debug!(width, height, "Terminal surface created");

        Ok(term)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        self.active = false;

        let screen = execute!(
            self.out,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );

        terminal::disable_raw_mode().and(screen)
    }
}

impl<W: Write> Renderer for Terminal<W> {
    fn set_title(&mut self, title: &str) -> RenderResult<()> {
        execute!(self.out, terminal::SetTitle(title))?;

        Ok(())
    }

    fn clear(&mut self, color: Color) -> RenderResult<()> {
        self.canvas.reset(color);

        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.canvas.fill_rect(rect, color);

        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.canvas.stroke_rect(rect, color);

        Ok(())
    }

    fn present(&mut self) -> RenderResult<()> {
        let frame = self.canvas.render();

        queue!(self.out, cursor::MoveTo(0, 0))?;

        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()?;

        Ok(())
    }

    fn destroy(&mut self) -> RenderResult<()> {
        self.restore()?;

        Ok(())
    }
}

impl<W: Write> InputSource for Terminal<W> {
    fn poll(&mut self, mode: Poll) -> RenderResult<Vec<InputEvent>> {
        let mut events = Vec::new();

        if mode == Poll::Wait {
            while events.is_empty() {
                if event::poll(WAIT_SLICE)? {
                    events.extend(convert_event(event::read()?));
                }
            }
        }

        while event::poll(Duration::ZERO)? {
            events.extend(convert_event(event::read()?));
        }

        Ok(events)
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;

    use crossterm::terminal;

    use super::Terminal;

    /// A writer whose every write fails
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_setup_leaves_raw_mode() {
        // without a tty this already fails at enable_raw_mode, with one it fails on the first write
        assert!(Terminal::with_writer(Broken, 64, 64).is_err());
        assert!(!terminal::is_raw_mode_enabled().unwrap());
    }
}
