use glam::Vec2;
use zombies::graphics::*;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);

fn gfx(width: usize, height: usize) -> Graphics {
    let mut g = Graphics::new();
    g.push_target(Surface::new(width, height));
    g
}

fn at(g: &Graphics, x: usize, y: usize) -> Color {
    g.target().and_then(|s| s.pixel(x, y)).unwrap()
}

// ── Colour ────────────────────────────────────────────────────────────────────

#[test]
fn opaque_colour_replaces_destination() {
    assert_eq!(RED.over(Color::WHITE), RED);
}

#[test]
fn half_alpha_blends_evenly() {
    let c = Color::rgba(1.0, 1.0, 1.0, 0.5).over(Color::BLACK);
    assert!((c.r - 0.5).abs() < 1e-6);
    assert_eq!(c.to_rgb8(), (128, 128, 128));
}

#[test]
fn zero_alpha_is_invisible() {
    assert_eq!(Color::rgba(1.0, 0.0, 0.0, 0.0).over(Color::BLACK), Color::BLACK);
}

// ── Primitives ────────────────────────────────────────────────────────────────

#[test]
fn full_screen_rect_covers_every_pixel() {
    let mut g = gfx(10, 10);
    g.draw_rect_relative(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), RED);
    assert_eq!(at(&g, 0, 0), RED);
    assert_eq!(at(&g, 9, 9), RED);
}

#[test]
fn left_half_rect_stops_at_centre() {
    let mut g = gfx(10, 10);
    g.draw_rect_relative(Vec2::new(-1.0, -1.0), Vec2::new(0.0, 1.0), RED);
    assert_eq!(at(&g, 4, 5), RED);
    assert_eq!(at(&g, 5, 5), Color::BLACK);
}

#[test]
fn rect_corners_may_come_in_any_order() {
    let mut g = gfx(10, 10);
    g.draw_rect_relative(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0), RED);
    // +y is up: the top-right quadrant is rows 0..5, columns 5..10.
    assert_eq!(at(&g, 7, 2), RED);
    assert_eq!(at(&g, 2, 7), Color::BLACK);
}

#[test]
fn offscreen_rect_is_clipped() {
    let mut g = gfx(4, 4);
    g.draw_rect_relative(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0), RED);
    assert_eq!(at(&g, 3, 3), RED);
}

#[test]
fn triangle_fills_its_half() {
    let mut g = gfx(10, 10);
    // Lower-left half of the surface.
    g.draw_triangle_relative(
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        RED,
    );
    assert_eq!(at(&g, 1, 8), RED);
    assert_eq!(at(&g, 8, 1), Color::BLACK);
}

#[test]
fn triangle_winding_does_not_matter() {
    let mut a = gfx(10, 10);
    let mut b = gfx(10, 10);
    let (p0, p1, p2) = (Vec2::new(-0.8, -0.8), Vec2::new(0.8, -0.8), Vec2::new(0.0, 0.8));
    a.draw_triangle_relative(p0, p1, p2, RED);
    b.draw_triangle_relative(p2, p1, p0, RED);
    assert_eq!(a.target(), b.target());
    assert_eq!(at(&a, 5, 5), RED);
}

#[test]
fn degenerate_triangle_draws_nothing() {
    let mut g = gfx(10, 10);
    let p = Vec2::new(0.1, 0.1);
    g.draw_triangle_relative(p, p, Vec2::new(0.5, 0.5), RED);
    assert_eq!(g.target(), Some(&Surface::new(10, 10)));
}

#[test]
fn horizontal_line_through_middle() {
    let mut g = gfx(10, 10);
    g.draw_line_relative(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), RED);
    for x in 0..10 {
        assert_eq!(at(&g, x, 5), RED, "column {x}");
    }
    assert_eq!(at(&g, 4, 4), Color::BLACK);
}

// ── Target stack ──────────────────────────────────────────────────────────────

#[test]
fn clear_resets_target_to_black() {
    let mut g = gfx(4, 4);
    g.draw_rect_relative(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), RED);
    g.clear_target();
    assert_eq!(g.target(), Some(&Surface::new(4, 4)));
}

#[test]
fn draws_go_to_the_top_target() {
    let mut g = gfx(4, 4);
    g.push_target(Surface::new(2, 2));
    g.draw_rect_relative(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), RED);

    let top = g.pop_target().unwrap();
    assert_eq!(top.pixel(1, 1), Some(RED));
    assert_eq!(at(&g, 0, 0), Color::BLACK);
}

#[test]
fn drawing_without_a_target_is_a_no_op() {
    let mut g = Graphics::new();
    g.clear_target();
    g.draw_line_relative(Vec2::ZERO, Vec2::ONE, RED);
    assert!(g.target().is_none());
    assert!(g.pop_target().is_none());
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let s = Surface::new(3, 2);
    assert_eq!(s.pixel(3, 0), None);
    assert_eq!(s.pixel(0, 2), None);
    assert_eq!((s.width(), s.height()), (3, 2));
}
