//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Commands are queued into an in-memory byte buffer and written to stdout
//! in one syscall per frame. After the first frame only changed cell runs
//! are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    queue: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    /// Enter raw mode on the alternate screen with mouse reporting on.
    ///
    /// Mouse capture is what turns drags into swipe input.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.queue.queue(EnableMouseCapture)?;
        self.flush_queue()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(DisableMouseCapture)?;
        self.queue.queue(ResetColor)?;
        self.queue.queue(SetAttribute(Attribute::Reset))?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Flush a frame, diffing against the previously presented one.
    ///
    /// The caller keeps one framebuffer and passes it in every frame; the
    /// renderer swaps it with the retained previous frame so neither side
    /// clones.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.queue.clear();
        match &self.prev {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_delta(prev, fb, &mut self.queue)?;
            }
            _ => {
                encode_frame(fb, &mut self.queue)?;
            }
        }
        self.flush_queue()?;

        match self.prev.as_mut() {
            Some(prev) => std::mem::swap(prev, fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw.
fn encode_frame(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cell runs that differ between two equal-sized frames.
fn encode_delta(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            out.queue(cursor::MoveTo(x, y))?;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                let cell = next.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn full_frame_encoding_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        for (i, ch) in ['A', 'B', 'C', 'D'].into_iter().enumerate() {
            fb.set(
                (i % 2) as u16,
                (i / 2) as u16,
                Cell {
                    ch,
                    style: CellStyle::default(),
                },
            );
        }

        let mut out = Vec::new();
        encode_frame(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for ch in ['A', 'B', 'C', 'D'] {
            assert!(text.contains(ch), "missing {ch}");
        }
    }

    #[test]
    fn delta_encoding_skips_unchanged_cells() {
        let prev = FrameBuffer::new(8, 1);
        let mut next = FrameBuffer::new(8, 1);
        next.put_str(2, 0, "XY", CellStyle::default());

        let mut out = Vec::new();
        encode_delta(&prev, &next, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("XY"));
        // Untouched blanks around the run are not re-emitted.
        assert!(!text.contains("   "));
    }

    #[test]
    fn identical_frames_emit_no_cell_output() {
        let fb = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_delta(&fb, &fb, &mut out).unwrap();
        // Only the trailing reset remains.
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(' '));
    }

    #[test]
    fn color_conversion_is_lossless() {
        let rgb = Rgb::new(18, 19, 21);
        assert_eq!(
            to_color(rgb),
            Color::Rgb {
                r: 18,
                g: 19,
                b: 21
            }
        );
    }
}
