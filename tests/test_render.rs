mod support;

use glam::Vec2;
use zombies::config::Tuning;
use zombies::entities::{Entity, Quad};
use zombies::graphics::{Color, Graphics, Surface};
use zombies::render::*;

use support::make_state;

// 64x36 pixels: one world unit is 2 px across and 2 px down.
fn gfx() -> Graphics {
    let mut g = Graphics::new();
    g.push_target(Surface::new(64, 36));
    g
}

fn at(g: &Graphics, x: usize, y: usize) -> Color {
    g.target().and_then(|s| s.pixel(x, y)).unwrap()
}

#[test]
fn world_to_screen_divides_by_aspect() {
    let corner = world_to_screen(Vec2::new(16.0, -9.0));
    assert!((corner - Vec2::new(1.0, -1.0)).length() < 1e-6);
    let mid = world_to_screen(Vec2::new(8.0, 4.5));
    assert!((mid - Vec2::new(0.5, 0.5)).length() < 1e-6);
}

#[test]
fn render_rect_respects_height() {
    let mut g = gfx();
    // 1 wide, 3 tall, lower-left at (-10, -6).
    render_rect(&mut g, -10.0, -6.0, 1.0, 3.0, Color::WHITE);
    // World (-9.5, -3.5) → px (13, 25); inside the tall rect.
    assert_eq!(at(&g, 13, 25), Color::WHITE);
    // One unit above the top edge stays black.
    assert_eq!(at(&g, 13, 21), Color::BLACK);
}

#[test]
fn quad_corners_rotate_with_angle() {
    let quad = Quad {
        angle: std::f32::consts::FRAC_PI_2,
        ..Quad::default()
    };
    let [a, ..] = quad_corners(&quad);
    // (-2, -2) turned a quarter counter-clockwise is (2, -2).
    assert!((a - Vec2::new(2.0, -2.0)).length() < 1e-5);
}

#[test]
fn frame_draws_tiles_with_column_parity() {
    let mut g = gfx();
    draw_frame(&mut g, &make_state(), &Tuning::default(), false);
    // Column 5 spans x 3.0..3.6 (odd → red), column 6 spans 3.6..4.2 (even → blue).
    assert_eq!(at(&g, 38, 17), C_TILE_ODD);
    assert_eq!(at(&g, 39, 17), C_TILE_EVEN);
}

#[test]
fn frame_draws_quad_over_tiles() {
    let mut g = gfx();
    draw_frame(&mut g, &make_state(), &Tuning::default(), false);
    // World (1.2, -1.2) is inside the unrotated quad and away from the player.
    assert_eq!(at(&g, 34, 20), C_QUAD);
}

#[test]
fn dead_enemies_are_not_drawn() {
    let tuning = Tuning::default();
    let mut alive = make_state();
    alive.enemies[0] = Entity::new(Vec2::new(-10.0, -5.0));
    let mut dead = alive.clone();
    dead.enemies[0].alive = false;

    let mut g = gfx();
    draw_frame(&mut g, &alive, &tuning, false);
    assert_eq!(at(&g, 12, 28), C_ENEMY);

    draw_frame(&mut g, &dead, &tuning, false);
    assert_eq!(at(&g, 12, 28), Color::BLACK);
}

#[test]
fn only_bullets_in_motion_are_drawn() {
    let tuning = Tuning::default();
    let mut state = make_state();
    {
        let slots = state.bullets.slots_mut();
        slots[0].in_motion = true;
        slots[0].current_frame.pos = Vec2::new(-10.0, 5.0);
        slots[1].current_frame.pos = Vec2::new(10.0, 5.0);
    }

    let mut g = gfx();
    draw_frame(&mut g, &state, &tuning, false);
    // World (-10, 5) → px (12, 8); (10, 5) → px (52, 8).
    assert_eq!(at(&g, 12, 8), C_BULLET);
    assert_eq!(at(&g, 52, 8), Color::BLACK);
}

#[test]
fn outline_adds_edges_to_the_quad() {
    let tuning = Tuning::default();
    let state = make_state();
    let mut plain = gfx();
    let mut outlined = gfx();
    draw_frame(&mut plain, &state, &tuning, false);
    draw_frame(&mut outlined, &state, &tuning, true);
    assert_ne!(plain.target(), outlined.target());
}
