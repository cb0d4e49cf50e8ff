use {
    crate::{screen::Cell, severity::Severity},
    crossterm::{
        QueueableCommand, cursor,
        style::{Color, Print, PrintStyledContent, Stylize},
        terminal::{self, ClearType},
    },
    std::{
        cell::RefCell,
        io::{self, Stdout, Write},
        rc::Rc,
    },
};


/// something that text can be drawn onto.
pub trait Surface {
    /// writes styled text at the given coordinate.
    ///
    /// nothing written becomes visible until [`Surface::commit()`] is called.
    fn write(&mut self, text: &str, column: u16, row: u16, severity: Severity) -> io::Result<()>;
    /// shows every pending write as one frame.
    fn commit(&mut self) -> io::Result<()>;
}

/// the terminal, in raw mode on the alternate screen.
///
/// the terminal is restored when this is dropped.
pub struct Terminal<W: Write = Stdout> {
    /// commands queued since the last commit.
    frame: Vec<u8>,
    out: W,
}

/// a mock surface, which records frames for inspection.
#[allow(dead_code, reason = "this is a testing utility.")]
pub struct MockSurface {
    screen: Rc<RefCell<MockScreen>>,
    fail_after: Option<usize>,
    cancel_after: Option<(usize, crate::cancel::Cancel)>,
}

/// what a [`MockSurface`] has been shown.
#[derive(Debug, Default)]
#[allow(dead_code, reason = "this is a testing utility.")]
pub struct MockScreen {
    /// writes not yet committed.
    pub pending: Vec<Cell>,
    /// committed frames, oldest first.
    pub frames: Vec<Vec<Cell>>,
    /// whether the surface has been released.
    pub released: bool,
}

/// maps a severity to its foreground and background colors. neutral text is unstyled.
pub fn palette(severity: Severity) -> Option<(Color, Color)> {
    match severity {
        Severity::Critical => Some((Color::White, Color::DarkRed)),
        Severity::Warning => Some((Color::White, Color::DarkYellow)),
        Severity::Good => Some((Color::White, Color::DarkGreen)),
        Severity::Info => Some((Color::White, Color::DarkBlue)),
        Severity::Neutral => None,
    }
}

/// leaves the alternate screen and raw mode.
///
/// this is safe to call more than once, and is also used by the panic hook.
pub fn restore(out: &mut impl Write) -> io::Result<()> {
    out.queue(cursor::Show)?
        .queue(terminal::LeaveAlternateScreen)?
        .flush()?;
    terminal::disable_raw_mode()
}

// === impl Terminal ===

impl Terminal {
    /// takes over the terminal.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on, dropping `terminal` restores it.
        let mut terminal = Self {
            frame: Vec::new(),
            out: io::stdout(),
        };
        terminal
            .out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::Clear(ClearType::All))?
            .flush()?;

        log::debug!("acquired terminal");
        Ok(terminal)
    }
}

impl<W: Write> Terminal<W> {
    /// a terminal drawing to `out`, which is assumed to already be set up.
    #[cfg(test)]
    pub(crate) fn with_output(out: W) -> Self {
        Self {
            frame: Vec::new(),
            out,
        }
    }
}

impl<W: Write> Surface for Terminal<W> {
    fn write(&mut self, text: &str, column: u16, row: u16, severity: Severity) -> io::Result<()> {
        let Self { frame, .. } = self;

        frame.queue(cursor::MoveTo(column, row))?;
        match palette(severity) {
            Some((fg, bg)) => frame.queue(PrintStyledContent(text.with(fg).on(bg)))?,
            None => frame.queue(Print(text))?,
        };
        // erase whatever a longer value left behind.
        frame.queue(terminal::Clear(ClearType::UntilNewLine))?;

        Ok(())
    }

    /// the whole frame reaches the terminal in one write, however large it is.
    fn commit(&mut self) -> io::Result<()> {
        let Self { frame, out } = self;
        out.write_all(&std::mem::take(frame))?;
        out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let Self { out, .. } = self;
        match restore(out) {
            Ok(()) => log::debug!("released terminal"),
            Err(error) => log::error!("failed to restore terminal: {error}"),
        }
    }
}

// === impl MockSurface ===

#[allow(dead_code, reason = "this is a testing utility.")]
impl MockSurface {
    /// returns a surface, and a handle to what it has been shown.
    pub fn new() -> (Self, Rc<RefCell<MockScreen>>) {
        let screen = Rc::new(RefCell::new(MockScreen::default()));
        let surface = Self {
            screen: screen.clone(),
            fail_after: None,
            cancel_after: None,
        };
        (surface, screen)
    }

    /// fails every write once this many frames have been committed.
    pub fn fail_after(mut self, frames: usize) -> Self {
        self.fail_after = Some(frames);
        self
    }

    /// cancels the token as the given frame is committed.
    pub fn cancel_after(mut self, frames: usize, cancel: crate::cancel::Cancel) -> Self {
        self.cancel_after = Some((frames, cancel));
        self
    }
}

impl Surface for MockSurface {
    fn write(&mut self, text: &str, column: u16, row: u16, severity: Severity) -> io::Result<()> {
        let Self {
            screen, fail_after, ..
        } = self;
        let mut screen = screen.borrow_mut();

        if fail_after.is_some_and(|frames| screen.frames.len() >= frames) {
            return Err(io::Error::other("mock surface write failure"));
        }

        screen.pending.push(Cell {
            text: text.to_owned(),
            column,
            row,
            severity,
        });
        Ok(())
    }

    fn commit(&mut self) -> io::Result<()> {
        let Self {
            screen,
            cancel_after,
            ..
        } = self;
        let mut screen = screen.borrow_mut();

        let frame = std::mem::take(&mut screen.pending);
        screen.frames.push(frame);

        if let Some((frames, cancel)) = cancel_after {
            if screen.frames.len() == *frames {
                cancel.cancel();
            }
        }
        Ok(())
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        self.screen.borrow_mut().released = true;
    }
}
