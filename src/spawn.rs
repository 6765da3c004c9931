//! Enemy spawn planning.
//!
//! Every tick bumps the spawn counter. Once it reaches the threshold a random
//! candidate is rolled above the top edge and checked against every live
//! enemy with a predictive test. A rejected candidate leaves the counter
//! alone, so the attempt repeats next tick.
//!
//! The prediction assumes fixed horizontal positions and compares arrival
//! times at the bottom edge only. It is a declutter heuristic: enemies of
//! very different speeds can still cross paths mid-screen.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Counter below threshold; no attempt made.
    Waiting,
    /// Candidate committed, counter reset.
    Spawned,
    /// Candidate rejected by the overlap prediction; retry next tick.
    Deferred,
}

/// Ticks `enemy` needs to fall from its current y to the bottom edge.
#[inline]
fn time_to_bottom(enemy: &Enemy, canvas_height: f32) -> f32 {
    (canvas_height - enemy.y) / enemy.speed
}

/// Whether two enemies are predicted to share a column band at the same time.
///
/// True iff their x positions differ by less than the wider of the two, and
/// their bottom-arrival times differ by less than the taller height divided by
/// the slower speed.
pub fn will_overlap(a: &Enemy, b: &Enemy, canvas_height: f32) -> bool {
    let dx = (a.x - b.x).abs();
    let dt = (time_to_bottom(a, canvas_height) - time_to_bottom(b, canvas_height)).abs();
    let time_tolerance = a.height.max(b.height) / a.speed.min(b.speed);
    dx < a.width.max(b.width) && dt < time_tolerance
}

/// Roll a uniformly random kind at a uniformly random column, fully above the canvas.
pub fn roll_candidate(rng: &mut impl Rng, canvas_width: f32) -> Enemy {
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let span = (canvas_width - kind.template().width).max(0.0);
    let x = rng.gen::<f32>() * span;
    Enemy::new(kind, x, -kind.template().height)
}

/// Commit `candidate` unless it is predicted to overlap a live enemy.
pub fn offer_candidate(state: &mut GameState, candidate: Enemy) -> SpawnOutcome {
    let height = state.height();
    if let Some(blocker) = state
        .store
        .enemies()
        .iter()
        .find(|existing| will_overlap(&candidate, existing, height))
    {
        log::debug!(
            "spawn deferred: {} at x={:.1} would overlap {} at ({:.1}, {:.1})",
            candidate.kind.as_str(),
            candidate.x,
            blocker.kind.as_str(),
            blocker.x,
            blocker.y
        );
        return SpawnOutcome::Deferred;
    }

    log::debug!(
        "spawned {} at x={:.1} (frame {})",
        candidate.kind.as_str(),
        candidate.x,
        state.frame
    );
    state.store.add_enemy(candidate);
    state.spawn_counter = 0;
    SpawnOutcome::Spawned
}

/// One spawn-planner step; call exactly once per running tick.
pub fn spawn_step(state: &mut GameState, rng: &mut impl Rng) -> SpawnOutcome {
    state.spawn_counter = state.spawn_counter.saturating_add(1);
    if state.spawn_counter < state.config.spawn_threshold {
        return SpawnOutcome::Waiting;
    }
    let candidate = roll_candidate(rng, state.width());
    offer_candidate(state, candidate)
}
