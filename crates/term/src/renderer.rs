//! TerminalRenderer: flushes a rendered grid to a real terminal.
//!
//! This module intentionally keeps the drawing API small. It can start with full
//! redraws and later evolve into diff/dirty-rect rendering.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, QueueableCommand,
};

use crate::camera::PixelSink;
use crate::grid::Grid;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Grid>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a grid at the terminal origin.
    ///
    /// Redraws only the rows that changed since the previous draw of the same
    /// dimensions; dimension changes force a full redraw.
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        let needs_full = self
            .last
            .as_ref()
            .map(|prev| prev.width() != grid.width() || prev.height() != grid.height())
            .unwrap_or(true);

        for y in 0..grid.height() {
            if !needs_full {
                let prev = self.last.as_ref().unwrap();
                if prev.row_string(y) == grid.row_string(y) {
                    continue;
                }
            }
            if let Some(row) = grid.row_string(y) {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                self.stdout.queue(Print(row))?;
            }
        }

        self.stdout.flush()?;
        self.last = Some(grid.clone());
        Ok(())
    }

    /// Flush cells queued through the `PixelSink` path.
    pub fn flush_queued(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort per-cell output for `Camera::push`.
///
/// Queues one cursor move and one glyph per cell; callers flush by drawing or
/// by `flush_queued`. I/O errors here are swallowed: the sink contract is
/// fire-and-forget.
impl PixelSink for TerminalRenderer {
    fn set_pixel(&mut self, column: u16, row: u16, glyph: char) {
        let _ = self
            .stdout
            .queue(cursor::MoveTo(column, row))
            .and_then(|out| out.queue(Print(glyph)));
    }
}
