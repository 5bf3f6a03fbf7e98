/// World-space draw helpers.
///
/// Everything here maps world coordinates through the view matrix and hands
/// the result to the rasterizer.  No game logic is performed.

use glam::Vec2;

use crate::collision::rotation_matrix;
use crate::config::Tuning;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::{Entity, GameState, Quad};
use crate::graphics::{Color, Graphics};
use crate::view_matrix;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_TILE_ODD: Color = Color::rgb(1.0, 0.0, 0.0);
pub const C_TILE_EVEN: Color = Color::rgb(0.0, 0.0, 1.0);
pub const C_QUAD: Color = Color::rgb(0.0, 1.0, 0.0);
pub const C_PLAYER: Color = Color::rgb(0.0, 1.0, 0.0);
pub const C_ENEMY: Color = Color::rgb(1.0, 0.0, 0.3);
pub const C_BULLET: Color = Color::rgb(1.0, 1.0, 0.0);
pub const C_LINE: Color = Color::rgb(1.0, 0.0, 1.0);
pub const C_LINE_END: Color = Color::rgb(1.0, 1.0, 0.2);

#[inline]
pub fn world_to_screen(p: Vec2) -> Vec2 {
    view_matrix().transform_point2(p)
}

/// Axis-aligned rectangle with its lower-left corner at `(x, y)`.
pub fn render_rect(gfx: &mut Graphics, x: f32, y: f32, width: f32, height: f32, color: Color) {
    let start = world_to_screen(Vec2::new(x, y));
    let end = world_to_screen(Vec2::new(x + width, y + height));
    gfx.draw_rect_relative(start, end, color);
}

/// Line with a small marker on each endpoint.
pub fn draw_line(gfx: &mut Graphics, p0: Vec2, p1: Vec2) {
    render_rect(gfx, p0.x - 0.1, p0.y - 0.1, 0.2, 0.2, C_LINE_END);
    render_rect(gfx, p1.x - 0.1, p1.y - 0.1, 0.2, 0.2, C_LINE_END);
    gfx.draw_line_relative(world_to_screen(p0), world_to_screen(p1), C_LINE);
}

pub fn draw_triangle(gfx: &mut Graphics, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    gfx.draw_triangle_relative(
        world_to_screen(p0),
        world_to_screen(p1),
        world_to_screen(p2),
        color,
    );
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Checkerboard of columns: odd columns red, even columns blue.
pub fn draw_tiles(gfx: &mut Graphics, tile_size: f32) {
    for y in 0..WORLD_HEIGHT {
        for x in 0..WORLD_WIDTH {
            let color = if x % 2 == 1 { C_TILE_ODD } else { C_TILE_EVEN };
            render_rect(
                gfx,
                x as f32 * tile_size,
                y as f32 * tile_size,
                tile_size,
                tile_size,
                color,
            );
        }
    }
}

/// The quad's corners after rotation.
pub fn quad_corners(quad: &Quad) -> [Vec2; 4] {
    let rotation = rotation_matrix(quad.angle);
    quad.corners.map(|c| rotation.transform_point2(c))
}

pub fn draw_quad(gfx: &mut Graphics, quad: &Quad, outline: bool) {
    let [a, b, c, d] = quad_corners(quad);
    draw_triangle(gfx, a, b, c, C_QUAD);
    draw_triangle(gfx, c, d, a, C_QUAD);
    if outline {
        draw_line(gfx, a, b);
        draw_line(gfx, b, c);
        draw_line(gfx, c, d);
        draw_line(gfx, d, a);
    }
}

fn draw_entity(gfx: &mut Graphics, entity: &Entity, radius: f32, color: Color) {
    render_rect(
        gfx,
        entity.pos.x - radius,
        entity.pos.y - radius,
        radius * 2.0,
        radius * 2.0,
        color,
    );
}

/// Render one complete frame into the current target.
pub fn draw_frame(gfx: &mut Graphics, state: &GameState, tuning: &Tuning, outline_quad: bool) {
    gfx.clear_target();

    draw_tiles(gfx, tuning.tile_size);
    draw_quad(gfx, &state.quad, outline_quad);

    let r = tuning.draw_radius;
    draw_entity(gfx, &state.player, r, C_PLAYER);
    for enemy in state.enemies.iter().filter(|e| e.alive) {
        draw_entity(gfx, enemy, r, C_ENEMY);
    }
    for bullet in state.bullets.active() {
        draw_entity(gfx, &bullet.current_frame, r, C_BULLET);
    }
}
