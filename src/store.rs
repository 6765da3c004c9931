//! Entity collections: the player (with its bullets) and the live enemies.
//!
//! Enemy removal is `swap_remove`, so enemy order is not stable. Callers that
//! remove while walking forward must not advance the index after a removal;
//! the element swapped into the hole has not been visited yet.

use crate::entities::{Bullet, Enemy, Player};

#[derive(Clone, Debug)]
pub struct EntityStore {
    pub player: Player,
    enemies: Vec<Enemy>,
}

impl EntityStore {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            enemies: Vec::new(),
        }
    }

    // ── Bullets ───────────────────────────────────────────────────────────────

    pub fn bullets(&self) -> &[Bullet] {
        &self.player.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut [Bullet] {
        &mut self.player.bullets
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.player.bullets.push(bullet);
    }

    /// Firing order of the remaining bullets is preserved.
    pub fn remove_bullet(&mut self, index: usize) -> Bullet {
        self.player.bullets.remove(index)
    }

    /// Keep only bullets for which `keep` returns true. Returns how many were dropped.
    pub fn prune_bullets(&mut self, keep: impl FnMut(&Bullet) -> bool) -> usize {
        let before = self.player.bullets.len();
        self.player.bullets.retain(keep);
        before - self.player.bullets.len()
    }

    // ── Enemies ───────────────────────────────────────────────────────────────

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// O(1); the last enemy moves into `index`.
    pub fn remove_enemy(&mut self, index: usize) -> Enemy {
        self.enemies.swap_remove(index)
    }

    pub fn prune_enemies(&mut self, keep: impl FnMut(&Enemy) -> bool) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(keep);
        before - self.enemies.len()
    }

    /// Drop every bullet and enemy. The player record itself is untouched.
    pub fn clear(&mut self) {
        self.player.bullets.clear();
        self.enemies.clear();
    }
}
