//! Drawing the file list during a reorder session
//!
//! Rendering state is passed per line as a [`StyleHint`]; the terminal
//! implementation resets its colors after every line.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::error::Result;
use crate::order::OrderedFileList;
use crate::session::{Mode, ReorderSession};

/// Instructions shown above the list
pub const INSTRUCTIONS: [&str; 5] = [
    "Specify the order of the files:",
    "     1. Navigate with up/down arrows",
    "     2. Select/unselect file with right-arrow",
    "     3. Move selected file up/down with up/down arrows",
    "     4. Press enter to confirm current selection.",
];

/// How a line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    Normal,
    /// Selected entry while navigating
    Selected,
    /// Selected entry while relocating
    Relocating,
}

impl StyleHint {
    /// Highlight used for the selected entry in `mode`
    pub fn for_selection(mode: Mode) -> Self {
        match mode {
            Mode::Navigating => StyleHint::Selected,
            Mode::Relocating => StyleHint::Relocating,
        }
    }

    fn color(self) -> Color {
        match self {
            StyleHint::Normal => Color::White,
            StyleHint::Selected => Color::Green,
            StyleHint::Relocating => Color::Red,
        }
    }
}

/// Output surface for one full redraw of the list
pub trait Renderer {
    /// Start a new frame, discarding the previous one
    fn begin_frame(&mut self) -> Result<()>;
    fn line(&mut self, text: &str, style: StyleHint) -> Result<()>;
    fn end_frame(&mut self) -> Result<()>;
}

/// Draw the instructions and numbered list, highlighting the selection
pub fn draw<R>(renderer: &mut R, list: &OrderedFileList, session: &ReorderSession) -> Result<()>
where
    R: Renderer + ?Sized,
{
    renderer.begin_frame()?;
    for text in INSTRUCTIONS {
        renderer.line(text, StyleHint::Normal)?;
    }
    renderer.line("", StyleHint::Normal)?;

    let highlight = StyleHint::for_selection(session.mode());
    for (number, (id, entry)) in list.iter().enumerate() {
        let style = if id == session.selected() {
            highlight
        } else {
            StyleHint::Normal
        };
        renderer.line(&format!("{}. {}", number + 1, entry.display_name()), style)?;
    }
    renderer.end_frame()
}

/// Crossterm renderer writing colored lines to any writer
///
/// Lines end in `\r\n` because the terminal is in raw mode while drawing.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin_frame(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn line(&mut self, text: &str, style: StyleHint) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(style.color()),
            Print(text),
            ResetColor,
            Print("\r\n")
        )?;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
