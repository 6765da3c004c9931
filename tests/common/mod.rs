#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_defender::compute::init_state;
use space_defender::entities::{Bullet, Enemy, GameState};
use space_defender::GameConfig;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Default 800x600 game with no scenery.
pub fn make_state() -> GameState {
    let config = GameConfig {
        star_count: 0,
        cloud_count: 0,
        ..GameConfig::default()
    };
    init_state(config, &mut seeded_rng())
}

/// Default game where the spawn planner never fires.
pub fn quiet_state() -> GameState {
    let mut s = make_state();
    s.config.spawn_threshold = u32::MAX;
    s
}

/// A bullet sitting on top of `enemy`'s rectangle.
pub fn bullet_on(enemy: &Enemy) -> Bullet {
    Bullet::new(enemy.x + 1.0, enemy.y + 1.0)
}
