//! Terminal setup, teardown and diffed drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::buffer::Buffer;
use super::style::{Rgb, TextStyle};
use super::text::char_width;

/// Raw-mode alternate screen that restores the terminal on drop and on panic.
pub struct Terminal {
    stdout: Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        // No Terminal exists yet to restore on drop
        let (width, height) = undo_on_error(
            execute!(stdout, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)
                .and_then(|()| terminal::size()),
            || {
                let _ = restore_terminal();
            },
        )?;
        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Write the cells of `frame` that changed since the last draw, then place the cursor.
    pub fn draw(&mut self, frame: &Buffer, cursor_at: Option<(u16, u16)>) -> io::Result<()> {
        if frame.width() != self.previous.width() || frame.height() != self.previous.height() {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            self.previous = Buffer::new(frame.width(), frame.height());
            // Force every cell out after a resize
            self.previous.fill(
                super::Rect::new(0, 0, frame.width(), frame.height()),
                super::Paint::new(Rgb::new(1, 2, 3), Rgb::new(3, 2, 1)),
            );
        }

        self.flush_diff(frame)?;

        match cursor_at {
            Some((x, y)) => queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => queue!(self.stdout, cursor::Hide)?,
        }
        self.stdout.flush()?;

        self.previous = frame.clone();
        Ok(())
    }

    fn flush_diff(&mut self, frame: &Buffer) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in frame.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                // Bold and dim share one reset, so re-apply the whole style
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Run `undo` if `result` is an error, then pass `result` through.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        cursor::Show,
        LeaveAlternateScreen
    )?;
    Ok(())
}
