//! Frame drawing against an injected surface.
//!
//! The core never touches pixels; it only issues fill/arc/text calls with
//! explicit geometry and colour. How a surface rasterises them is its own
//! business (the terminal frontend maps them onto character cells).

use rand::Rng;

use crate::entities::{Color, GameState, GameStatus};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A font request; only the pixel size matters to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub size_px: u16,
}

impl Font {
    pub const HUD: Font = Font { size_px: 20 };
    pub const BANNER: Font = Font { size_px: 40 };
}

/// Drawing primitives a frontend must provide.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    /// `y` is the text baseline; `x` is interpreted according to `align`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: Align, color: Color);
}

const HEART_SIZE: f32 = 20.0;
const HUD_PADDING: f32 = 10.0;

/// Draw one complete frame for `state`. `rng` drives the gas-cloud flicker.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    state: &GameState,
    high_score: u32,
    rng: &mut impl Rng,
) {
    match state.status {
        GameStatus::GameOver => draw_game_over(surface, state),
        GameStatus::Paused => draw_paused(surface, state),
        GameStatus::Running => {
            draw_background(surface, state, rng);
            draw_entities(surface, state);
            draw_hud(surface, state, high_score);
        }
    }
}

fn draw_background<S: Surface>(surface: &mut S, state: &GameState, rng: &mut impl Rng) {
    surface.fill_rect(
        Rect::new(0.0, 0.0, state.width(), state.height()),
        Color::DEEP_SPACE,
    );

    let bg = &state.background;
    for cloud in &bg.clouds {
        let alpha = rng.gen::<f32>() * 0.2;
        surface.fill_arc(cloud.x, cloud.y, cloud.radius, Color::WHITE.with_alpha(alpha));
    }
    for planet in &bg.planets {
        surface.fill_arc(planet.x, planet.y, planet.radius, planet.color);
    }
    for star in &bg.stars {
        surface.fill_rect(Rect::new(star.x, star.y, star.size, star.size), Color::WHITE);
    }
}

fn draw_entities<S: Surface>(surface: &mut S, state: &GameState) {
    let player = &state.store.player;
    surface.fill_rect(player.rect(), Color::WHITE);

    for bullet in state.store.bullets() {
        surface.fill_rect(bullet.rect(), Color::YELLOW);
    }
    for enemy in state.store.enemies() {
        surface.fill_rect(enemy.rect(), enemy.color);
    }
}

/// A heart built from two lobes and a tapering body, `size` px tall.
fn draw_heart<S: Surface>(surface: &mut S, x: f32, y: f32, size: f32) {
    let lobe = size / 4.0;
    let top = y + size * 0.3;
    surface.fill_arc(x - lobe, top, lobe, Color::PINK);
    surface.fill_arc(x + lobe, top, lobe, Color::PINK);
    let rows = 4;
    let body_top = top;
    let body_height = y + size - body_top;
    for i in 0..rows {
        let frac = i as f32 / rows as f32;
        let half = size / 2.0 * (1.0 - frac);
        surface.fill_rect(
            Rect::new(
                x - half,
                body_top + body_height * frac,
                half * 2.0,
                body_height / rows as f32,
            ),
            Color::PINK,
        );
    }
}

fn draw_hud<S: Surface>(surface: &mut S, state: &GameState, high_score: u32) {
    for i in 0..state.store.player.lives {
        let x = HUD_PADDING + i as f32 * (HEART_SIZE + HUD_PADDING);
        draw_heart(surface, x, HUD_PADDING, HEART_SIZE);
    }

    let right = state.width() - HUD_PADDING;
    surface.fill_text(
        &format!("Score: {}", state.score),
        right,
        30.0,
        Font::HUD,
        Align::Right,
        Color::WHITE,
    );
    surface.fill_text(
        &format!("High Score: {high_score}"),
        right,
        60.0,
        Font::HUD,
        Align::Right,
        Color::WHITE,
    );
}

fn draw_paused<S: Surface>(surface: &mut S, state: &GameState) {
    surface.fill_text(
        "Paused",
        state.width() / 2.0,
        state.height() / 2.0,
        Font::BANNER,
        Align::Center,
        Color::WHITE,
    );
}

fn draw_game_over<S: Surface>(surface: &mut S, state: &GameState) {
    let (cx, cy) = (state.width() / 2.0, state.height() / 2.0);
    surface.fill_text("GAME OVER", cx, cy, Font::BANNER, Align::Center, Color::WHITE);
    surface.fill_text(
        "Press 'R' to restart",
        cx,
        cy + 40.0,
        Font::HUD,
        Align::Center,
        Color::WHITE,
    );
}
