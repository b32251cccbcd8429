use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell};
use crate::types::{Rgb, Weight};

/// Raw-mode terminal that redraws only the cells that changed.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        self.current.size()
    }

    /// Wait for events. `None` blocks until one arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw a frame and write the cells that differ from the last one.
    pub fn render(&mut self, draw: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.current.size() {
            // New size: start from a blank screen, every cell gets rewritten
            self.current = Buffer::new(size.0, size.1);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.reset();
        draw(&mut self.current);

        self.flush()?;
        self.previous.clone_from(&self.current);
        Ok(())
    }

    /// Queue the changed cells and flush them in one write.
    fn flush(&mut self) -> io::Result<()> {
        let mut pen = Pen::reset(&mut self.stdout)?;
        // Where the cursor lands after the last print
        let mut cursor_at: Option<(u16, u16)> = None;

        for (x, y, cell) in self.current.changes(&self.previous) {
            // The wide char to the left already drew over this cell
            if cell.continuation {
                continue;
            }

            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            pen.apply(&mut self.stdout, cell)?;
            queue!(self.stdout, Print(cell.ch))?;

            let advance = cell.ch.width().unwrap_or(1).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// Colors and weight currently set on the terminal, so unchanged
/// attributes are not re-sent for every cell.
struct Pen {
    fg: Rgb,
    bg: Rgb,
    weight: Weight,
}

impl Pen {
    /// Put the terminal into a known state matching a blank cell.
    fn reset(out: &mut impl Write) -> io::Result<Self> {
        let blank = Cell::default();
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_ct(blank.fg)),
            SetBackgroundColor(to_ct(blank.bg))
        )?;
        Ok(Self {
            fg: blank.fg,
            bg: blank.bg,
            weight: Weight::Normal,
        })
    }

    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(to_ct(cell.fg)))?;
            self.fg = cell.fg;
        }

        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(to_ct(cell.bg)))?;
            self.bg = cell.bg;
        }

        if cell.weight != self.weight {
            // Bold and dim share one reset, so always go through normal
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            match cell.weight {
                Weight::Normal => {}
                Weight::Bold => queue!(out, SetAttribute(Attribute::Bold))?,
                Weight::Dim => queue!(out, SetAttribute(Attribute::Dim))?,
            }
            self.weight = cell.weight;
        }

        Ok(())
    }
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
