//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so everything here is unit-testable by inspecting cells.

use crate::core::{GameSnapshot, CELL_BODY, CELL_FOOD, CELL_HEAD};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the playfield, side panel, and phase overlays.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(18, 19, 21);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers reuse one framebuffer across
    /// frames and it only resizes when the terminal does.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = GRID_SIZE as u16 * self.cell_w;
        let grid_px_h = GRID_SIZE as u16 * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: if snap.wrap {
                // Wrap mode dims the border since the walls are not real.
                Rgb::new(95, 95, 105)
            } else {
                Rgb::new(200, 200, 200)
            },
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: snap.wrap,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..GRID_SIZE as u16 {
            for x in 0..GRID_SIZE as u16 {
                let (ch, style) = cell_appearance(snap.grid[y as usize][x as usize]);
                self.fill_cell(fb, start_x, start_y, x, y, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Idle => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "SNAKE", 0);
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "SPACE TO START", 2);
            }
            Phase::Paused => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", 0);
            }
            Phase::GameOver => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", 0);
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "SPACE TO RESTART", 2);
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.tick_ms, value);
        fb.put_str(panel_x + 4, y, "MS", hint);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WRAP", label);
        fb.put_str(panel_x + 6, y, on_off(snap.wrap), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "SOUND", label);
        fb.put_str(panel_x + 6, y, on_off(snap.sound), value);
        y = y.saturating_add(2);

        for line in [
            "ARROWS/HJKL TURN",
            "DRAG TO SWIPE",
            "P PAUSE  R RESTART",
            "W WRAP   S SOUND",
            "Q QUIT",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
        dy: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(dy);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn on_off(v: bool) -> &'static str {
    if v {
        "ON"
    } else {
        "OFF"
    }
}

fn cell_appearance(marker: u8) -> (char, CellStyle) {
    match marker {
        CELL_HEAD => (
            '█',
            CellStyle {
                fg: Rgb::new(245, 241, 230),
                bg: PLAYFIELD_BG,
                bold: true,
                dim: false,
            },
        ),
        CELL_BODY => (
            '█',
            CellStyle {
                fg: Rgb::new(201, 195, 182),
                bg: PLAYFIELD_BG,
                bold: false,
                dim: false,
            },
        ),
        CELL_FOOD => (
            '●',
            CellStyle {
                fg: Rgb::new(127, 219, 167),
                bg: PLAYFIELD_BG,
                bold: true,
                dim: false,
            },
        ),
        _ => (
            '·',
            CellStyle {
                fg: Rgb::new(60, 62, 66),
                bg: PLAYFIELD_BG,
                bold: false,
                dim: true,
            },
        ),
    }
}
