//! Per-tick movement: player, bullets, enemies and the scrolling backdrop.

use crate::entities::{Background, GameState};

/// Apply held movement intents, keeping the ship inside `[0, width]`.
/// There is no vertical movement.
pub fn move_player(state: &mut GameState) {
    let width = state.width();
    let intent = state.intent;
    let player = &mut state.store.player;

    let mut x = player.x;
    if intent.left {
        x -= player.speed;
    }
    if intent.right {
        x += player.speed;
    }
    let max_x = (width - player.width).max(0.0);
    player.x = x.clamp(0.0, max_x);
}

/// Move bullets up and drop the ones that left through the top.
/// Returns the number of bullets removed.
pub fn advance_bullets(state: &mut GameState) -> usize {
    for bullet in state.store.bullets_mut() {
        bullet.y -= bullet.speed;
    }
    state.store.prune_bullets(|b| b.y >= 0.0)
}

/// Move enemies down and drop the ones that escaped past the bottom.
/// Escaping costs the player nothing. Returns the number removed.
pub fn advance_enemies(state: &mut GameState) -> usize {
    let height = state.height();
    for enemy in state.store.enemies_mut() {
        enemy.y += enemy.speed;
    }
    let escaped = state.store.prune_enemies(|e| e.y <= height);
    if escaped > 0 {
        log::debug!("{escaped} enemies escaped");
    }
    escaped
}

/// Scroll the scenery down, wrapping anything that falls off the bottom back
/// above the top edge.
pub fn scroll_background(background: &mut Background, speed: f32, canvas_height: f32) {
    for star in &mut background.stars {
        star.y += speed;
        if star.y > canvas_height {
            star.y = 0.0;
        }
    }

    // Round bodies wrap once their whole disc is off-screen.
    for cloud in &mut background.clouds {
        cloud.y += speed;
        if cloud.y - cloud.radius > canvas_height {
            cloud.y = -cloud.radius;
        }
    }
    for planet in &mut background.planets {
        planet.y += speed;
        if planet.y - planet.radius > canvas_height {
            planet.y = -planet.radius;
        }
    }
}
