//! TerminalRenderer: pushes framebuffers to the real terminal.
//!
//! A frame is compared with the previous one cell by cell and only the
//! changed runs are written. Flipping a card touches a handful of cells,
//! so most frames are a few dozen bytes. The first frame, and any frame
//! after a resize or [`TerminalRenderer::invalidate`], repaints everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// A run of changed cells on one row, `x0..x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: u16,
    pub x0: u16,
    pub x1: u16,
}

/// What the last [`TerminalRenderer::draw`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub full: bool,
    pub spans: usize,
    pub bytes: usize,
}

pub struct TerminalRenderer {
    out: io::Stdout,
    prev: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        TerminalRenderer {
            out: io::stdout(),
            prev: None,
            scratch: Vec::with_capacity(8 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    ///
    /// If the setup sequence cannot be written, raw mode is turned back off
    /// before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let setup = encode_enter_into(&mut self.scratch).and_then(|()| self.flush());
        if setup.is_err() {
            let _ = terminal::disable_raw_mode();
        }
        setup
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<DrawStats> {
        self.scratch.clear();
        let same_size = self
            .prev
            .as_ref()
            .is_some_and(|p| (p.width(), p.height()) == (fb.width(), fb.height()));

        let mut stats = DrawStats::default();
        match &self.prev {
            Some(prev) if same_size => {
                let spans = changed_spans(prev, fb);
                stats.spans = spans.len();
                encode_spans_into(fb, &spans, &mut self.scratch)?;
            }
            _ => {
                stats.full = true;
                encode_full_into(fb, &mut self.scratch)?;
            }
        }
        stats.bytes = self.scratch.len();
        self.flush()?;

        match &mut self.prev {
            Some(prev) => prev.clone_from(fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(stats)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Changed runs between two same-sized frames, top to bottom, left to right.
pub fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Span> {
    let mut spans = Vec::new();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        let mut run: Option<u16> = None;
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            let x = x as u16;
            match (a != b, run) {
                (true, None) => run = Some(x),
                (false, Some(x0)) => {
                    spans.push(Span { y, x0, x1: x });
                    run = None;
                }
                _ => {}
            }
        }
        if let Some(x0) = run {
            spans.push(Span {
                y,
                x0,
                x1: new.len() as u16,
            });
        }
    }
    spans
}

/// Alternate screen, hidden cursor, no line wrap.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.clear();
    out.queue(terminal::EnterAlternateScreen)?
        .queue(cursor::Hide)?
        .queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Clear the screen and write every row.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_cells(fb.row(y), &mut pen, out)?;
    }
    finish(out)
}

/// Write only the given spans of `fb`.
pub fn encode_spans_into(fb: &FrameBuffer, spans: &[Span], out: &mut Vec<u8>) -> Result<()> {
    if spans.is_empty() {
        return Ok(());
    }
    let mut pen = None;
    for span in spans {
        let row = fb.row(span.y);
        out.queue(cursor::MoveTo(span.x0, span.y))?;
        encode_cells(&row[usize::from(span.x0)..usize::from(span.x1)], &mut pen, out)?;
    }
    finish(out)
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_cells(cells: &[Cell], pen: &mut Option<CellStyle>, out: &mut Vec<u8>) -> Result<()> {
    for cell in cells {
        if *pen != Some(cell.style) {
            set_style(out, cell.style)?;
            *pen = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}
