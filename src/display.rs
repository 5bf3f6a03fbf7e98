/// Presentation layer: every byte written to the terminal goes through here.
///
/// The rasterizer draws into a `Surface`; this module copies it to the
/// terminal.  Each cell shows two pixels stacked vertically using the upper
/// half-block glyph: the foreground colour is the top pixel, the background
/// the bottom one.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use zombies::entities::GameState;
use zombies::graphics::{Color as Rgba, Surface};

const C_HINT: Color = Color::DarkGrey;
const C_STATUS: Color = Color::Yellow;

const HINT: &str = "WASD move  SHIFT fast  MOUSE aim/fire  P ai  C/V spin  ESC quit";

/// Rows at the bottom of the terminal reserved for text.
pub const TEXT_ROWS: u16 = 1;

/// Surface size (in pixels) that fits a terminal of `width` × `height` cells.
pub fn surface_size(width: u16, height: u16) -> (usize, usize) {
    let rows = height.saturating_sub(TEXT_ROWS).max(1);
    (width.max(1) as usize, rows as usize * 2)
}

fn term_color(c: Rgba) -> Color {
    let (r, g, b) = c.to_rgb8();
    Color::Rgb { r, g, b }
}

/// Render one complete frame.
pub fn present<W: Write>(out: &mut W, surface: &Surface, state: &GameState) -> std::io::Result<()> {
    let rows = surface.height() / 2;
    let mut last: Option<(Color, Color)> = None;

    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        for x in 0..surface.width() {
            let top = surface.pixel(x, row * 2).map(term_color).unwrap_or(Color::Black);
            let bottom = surface
                .pixel(x, row * 2 + 1)
                .map(term_color)
                .unwrap_or(Color::Black);
            // Only switch colours when the cell differs from its neighbour.
            if last != Some((top, bottom)) {
                out.queue(style::SetForegroundColor(top))?;
                out.queue(style::SetBackgroundColor(bottom))?;
                last = Some((top, bottom));
            }
            out.queue(Print('▀'))?;
        }
    }

    draw_status(out, rows as u16, surface.width(), state)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Status line (last row) ────────────────────────────────────────────────────

fn draw_status<W: Write>(
    out: &mut W,
    row: u16,
    width: usize,
    state: &GameState,
) -> std::io::Result<()> {
    let status = format!(
        "AI:{:<3} kills:{:>2} bullets:{:>2} ",
        if state.ai_enabled { "on" } else { "off" },
        state.kills,
        state.bullets.active_count(),
    );
    // Never touch the last column, or the terminal scrolls.
    let room = width.saturating_sub(1);
    let status: String = status.chars().take(room).collect();
    let hint: String = HINT.chars().take(room - status.chars().count()).collect();

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(status))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
