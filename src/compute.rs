//! Game-state machine and per-tick orchestration.
//!
//! States are Running, Paused and GameOver. Only Running ticks mutate the
//! simulation; all randomness comes through the injected RNG so callers
//! control determinism (tests use a seeded RNG).

use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::config::GameConfig;
use crate::entities::{Background, Bullet, GameState, GameStatus, MoveIntent, Player};
use crate::motion;
use crate::spawn::{self, SpawnOutcome};
use crate::store::EntityStore;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh, running game for `config`.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let player = Player::spawn(config.width, config.height, config.starting_lives);
    GameState {
        store: EntityStore::new(player),
        background: Background::generate(&config, rng),
        score: 0,
        status: GameStatus::Running,
        spawn_counter: 0,
        frame: 0,
        intent: MoveIntent::default(),
        config,
    }
}

/// Reset in place: score, lives, entities and counters are wiped and the game
/// resumes. The scenery and held movement keys carry over.
pub fn restart(state: &mut GameState) {
    let config = &state.config;
    state.store.player = Player::spawn(config.width, config.height, config.starting_lives);
    state.store.clear();
    state.score = 0;
    state.spawn_counter = 0;
    state.frame = 0;
    state.status = GameStatus::Running;
    log::info!("game restarted");
}

// ── Input-driven transitions ────────────────────────────────────────────────

/// The logical inputs the core understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Start (`true`) or stop (`false`) moving left.
    MoveLeft(bool),
    MoveRight(bool),
    Fire,
    TogglePause,
    /// Honored only while Paused or GameOver.
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    Ignored,
    /// The game was reset; the frame driver should drop its pending frame.
    Restarted,
}

/// Fire one bullet from the player's nose.
pub fn player_shoot(state: &mut GameState) {
    let bullet = Bullet::fired_from(&state.store.player);
    state.store.add_bullet(bullet);
}

/// Running <-> Paused. Has no effect once the game is over.
pub fn toggle_pause(state: &mut GameState) -> bool {
    state.status = match state.status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        GameStatus::GameOver => return false,
    };
    log::info!("{:?}", state.status);
    true
}

pub fn handle_intent(state: &mut GameState, intent: Intent) -> IntentOutcome {
    match intent {
        Intent::MoveLeft(held) => {
            state.intent.left = held;
            IntentOutcome::Applied
        }
        Intent::MoveRight(held) => {
            state.intent.right = held;
            IntentOutcome::Applied
        }
        Intent::Fire if state.status == GameStatus::Running => {
            player_shoot(state);
            IntentOutcome::Applied
        }
        Intent::Fire => IntentOutcome::Ignored,
        Intent::TogglePause => {
            if toggle_pause(state) {
                IntentOutcome::Applied
            } else {
                IntentOutcome::Ignored
            }
        }
        Intent::Restart => match state.status {
            GameStatus::Paused | GameStatus::GameOver => {
                restart(state);
                IntentOutcome::Restarted
            }
            GameStatus::Running => IntentOutcome::Ignored,
        },
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// What happened during one tick; empty when the game is not running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub spawn: Option<SpawnOutcome>,
    pub bullets_expired: usize,
    pub enemies_escaped: usize,
    pub collisions: CollisionReport,
}

/// Advance the simulation by one frame.
pub fn tick(state: &mut GameState, rng: &mut impl Rng) -> TickReport {
    if state.status != GameStatus::Running {
        return TickReport::default();
    }
    state.frame += 1;

    // ── 1. Scenery and player ────────────────────────────────────────────────
    let (scroll, height) = (state.config.scroll_speed, state.height());
    motion::scroll_background(&mut state.background, scroll, height);
    motion::move_player(state);

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    let spawn = spawn::spawn_step(state, rng);

    // ── 3. Enemies and bullets ───────────────────────────────────────────────
    let enemies_escaped = motion::advance_enemies(state);
    let bullets_expired = motion::advance_bullets(state);

    // ── 4. Collisions (may end the game) ─────────────────────────────────────
    let collisions = collision::resolve(state);

    TickReport {
        spawn: Some(spawn),
        bullets_expired,
        enemies_escaped,
        collisions,
    }
}
