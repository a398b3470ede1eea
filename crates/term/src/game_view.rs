//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Lays out the field, side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered field in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 * self.cell_w + 2,
            FIELD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), FIELD_BG).dim();
        for y in 0..FIELD_HEIGHT as u16 {
            for x in 0..FIELD_WIDTH as u16 {
                match snap.cell(x as usize, y as usize) {
                    Some(kind) => self.fill_cell(fb, start_x, start_y, x, y, '█', block_style(kind)),
                    None => self.fill_cell(fb, start_x, start_y, x, y, '·', empty),
                }
            }
        }

        if let (Some(active), Some(landing)) = (snap.active, snap.landing) {
            let ghost = CellStyle::plain(Rgb::new(140, 140, 140), FIELD_BG).dim();
            for &(x, y) in landing.iter() {
                if !active.cells.contains(&(x, y)) {
                    self.fill_field_cell(fb, start_x, start_y, x, y, '░', ghost);
                }
            }
        }

        if let Some(active) = snap.active {
            let style = block_style(active.kind);
            for &(x, y) in active.cells.iter() {
                self.fill_field_cell(fb, start_x, start_y, x, y, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Ready => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ANY KEY")
            }
            Phase::LevelIntro { level, .. } => {
                let style = overlay_style();
                let mid_y = start_y.saturating_add(frame_h / 2);
                // "LEVEL " plus the digits, centered.
                let text_w = 6 + digit_count(level);
                let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
                fb.put_str(x, mid_y, "LEVEL ", style);
                fb.put_u32(x + 6, mid_y, level, style);
            }
            Phase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Falling => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    /// Like [`Self::fill_cell`] but takes signed field coordinates and skips
    /// anything off the field.
    #[allow(clippy::too_many_arguments)]
    fn fill_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if (0..FIELD_WIDTH as i8).contains(&x) && (0..FIELD_HEIGHT as i8).contains(&y) {
            self.fill_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
        }
    }

    #[allow(clippy::too_many_arguments)]
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
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        if let Some(active) = snap.active {
            fb.put_str(panel_x, y, "PIECE", label);
            fb.put_str(panel_x, y.saturating_add(1), active.kind.as_str(), value);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, overlay_style());
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold()
}

fn block_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
    };
    CellStyle::plain(fg, FIELD_BG).bold()
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_handles_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn frame_size_scales_with_cell_size() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }
}
