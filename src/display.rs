//! Terminal rendering layer: all terminal I/O lives here.
//!
//! The simulation draws in canvas pixels. `TerminalSurface` rasterises those
//! calls onto a grid of character cells (one cell covers `scale_x * scale_y`
//! pixels) and `present` flushes the grid with crossterm.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_defender::entities;
use space_defender::geometry::Rect;
use space_defender::render::{Align, Font, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HINT: Color = Color::DarkGrey;
const C_CLEAR: Rgb = (0, 0, 0);

type Rgb = (u8, u8, u8);

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: (0xFF, 0xFF, 0xFF),
        bg: C_CLEAR,
    };
}

fn blend(under: Rgb, over: entities::Color) -> Rgb {
    let a = over.a.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| (u as f32 * (1.0 - a) + o as f32 * a).round() as u8;
    (mix(under.0, over.r), mix(under.1, over.g), mix(under.2, over.b))
}

fn to_term(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
    canvas_width: f32,
    canvas_height: f32,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    /// A grid of `cols x rows` cells showing a `canvas_width x canvas_height` canvas.
    pub fn new(cols: u16, rows: u16, canvas_width: f32, canvas_height: f32) -> Self {
        let mut surface = Self {
            cols: 0,
            rows: 0,
            scale_x: 1.0,
            scale_y: 1.0,
            canvas_width,
            canvas_height,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.scale_x = self.canvas_width / self.cols as f32;
        self.scale_y = self.canvas_height / self.rows as f32;
        self.cells = vec![Cell::BLANK; self.cols as usize * self.rows as usize];
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    /// Write the grid to `out` and reset it for the next frame.
    pub fn present<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if last != Some((cell.fg, cell.bg)) {
                    out.queue(style::SetForegroundColor(to_term(cell.fg)))?;
                    out.queue(style::SetBackgroundColor(to_term(cell.bg)))?;
                    last = Some((cell.fg, cell.bg));
                }
                out.queue(Print(cell.ch))?;
            }
        }
        self.cells.fill(Cell::BLANK);

        draw_controls_hint(out, self.rows)?;

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows))?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn fill_rect(&mut self, rect: Rect, color: entities::Color) {
        let (sx, sy) = (self.scale_x, self.scale_y);
        let c0 = (rect.x / sx).floor() as i32;
        let r0 = (rect.y / sy).floor() as i32;
        let c1 = ((rect.right() / sx).ceil() as i32).max(c0 + 1);
        let r1 = ((rect.bottom() / sy).ceil() as i32).max(r0 + 1);

        // Sub-cell shapes become glyphs so stars and bullets stay visible
        // without painting whole cells.
        let glyph = match (rect.width < sx, rect.height < sy) {
            (true, true) => Some('.'),
            (true, false) => Some('|'),
            (false, true) => Some('-'),
            (false, false) => None,
        };

        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    match glyph {
                        Some(ch) => {
                            cell.ch = ch;
                            cell.fg = (color.r, color.g, color.b);
                        }
                        None => {
                            cell.ch = ' ';
                            cell.bg = blend(cell.bg, color);
                        }
                    }
                }
            }
        }
    }

    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, color: entities::Color) {
        let (sx, sy) = (self.scale_x, self.scale_y);
        let c0 = ((cx - radius) / sx).floor() as i32;
        let c1 = ((cx + radius) / sx).ceil() as i32;
        let r0 = ((cy - radius) / sy).floor() as i32;
        let r1 = ((cy + radius) / sy).ceil() as i32;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let px = (col as f32 + 0.5) * sx - cx;
                let py = (row as f32 + 0.5) * sy - cy;
                if px * px + py * py > radius * radius {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.bg = blend(cell.bg, color);
                }
            }
        }
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        _font: Font,
        align: Align,
        color: entities::Color,
    ) {
        let len = text.chars().count() as i32;
        let anchor = (x / self.scale_x).round() as i32;
        let start = match align {
            Align::Left => anchor,
            Align::Center => anchor - len / 2,
            Align::Right => anchor - len,
        };
        // Baseline sits at the bottom of the text row.
        let row = ((y / self.scale_y).ceil() as i32 - 1).max(0);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.fg = (color.r, color.g, color.b);
            }
        }
    }
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Shoot   P : Pause   R : Restart   Q : Quit",
    ))?;
    Ok(())
}
