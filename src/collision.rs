//! Collision resolution.
//!
//! Two passes, always in this order:
//! 1. bullets vs enemies: each enemy absorbs at most one bullet per tick
//!    (the first intersecting bullet in firing order). A hit scores 1 and
//!    costs the enemy 1 health; a kill landing on a score that is a multiple
//!    of 10 grants a bonus life.
//! 2. player vs enemies: contact destroys the enemy and costs one life.
//!    Losing the last life ends the game and stops the pass.

use crate::entities::{GameState, GameStatus};
use crate::geometry::intersects;

/// Score multiple that grants a bonus life on a kill.
pub const BONUS_LIFE_EVERY: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: u32,
    pub kills: u32,
    pub bonus_lives: u32,
    pub player_hits: u32,
    pub game_over: bool,
}

/// Pass 1. Updates `report` in place.
pub fn resolve_bullet_hits(state: &mut GameState, report: &mut CollisionReport) {
    let mut e = 0;
    while e < state.store.enemies().len() {
        let enemy_rect = state.store.enemies()[e].rect();
        let hit = state
            .store
            .bullets()
            .iter()
            .position(|b| intersects(&b.rect(), &enemy_rect));

        let Some(b) = hit else {
            e += 1;
            continue;
        };

        state.store.remove_bullet(b);
        state.score += 1;
        report.hits += 1;

        let enemy = &mut state.store.enemies_mut()[e];
        enemy.health = enemy.health.saturating_sub(1);
        if enemy.health > 0 {
            e += 1;
            continue;
        }

        let killed = state.store.remove_enemy(e);
        report.kills += 1;
        log::debug!("{} destroyed, score {}", killed.kind.as_str(), state.score);

        if state.score % BONUS_LIFE_EVERY == 0 {
            state.store.player.lives += 1;
            report.bonus_lives += 1;
            log::info!(
                "bonus life at score {} (lives {})",
                state.score,
                state.store.player.lives
            );
        }
        // `e` now holds the enemy swapped in from the end; visit it next.
    }
}

/// Pass 2. Updates `report` in place and may set `GameStatus::GameOver`.
pub fn resolve_player_hits(state: &mut GameState, report: &mut CollisionReport) {
    let player_rect = state.store.player.rect();
    let mut e = 0;
    while e < state.store.enemies().len() {
        if !intersects(&player_rect, &state.store.enemies()[e].rect()) {
            e += 1;
            continue;
        }

        let rammed = state.store.remove_enemy(e);
        let player = &mut state.store.player;
        player.lives = player.lives.saturating_sub(1);
        report.player_hits += 1;
        log::debug!(
            "player rammed by {}, lives {}",
            rammed.kind.as_str(),
            player.lives
        );

        if player.lives == 0 {
            state.status = GameStatus::GameOver;
            report.game_over = true;
            log::info!("game over, final score {}", state.score);
            return;
        }
    }
}

/// Both passes in order.
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_bullet_hits(state, &mut report);
    resolve_player_hits(state, &mut report);
    report
}
