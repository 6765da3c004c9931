//! All game entity types - pure data, no logic.

use rand::Rng;

use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::store::EntityStore;

// ── Colours ───────────────────────────────────────────────────────────────────

/// An RGBA colour; `a` is opacity in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
    pub const PINK: Color = Color::rgb(0xFF, 0xC0, 0xCB);
    pub const DEEP_SPACE: Color = Color::rgb(0x0B, 0x3D, 0x91);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

// ── Enemy templates ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Standard,
    Fast,
    Tank,
}

/// Fixed per-kind stats copied into every enemy at spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyTemplate {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
    pub health: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Standard, EnemyKind::Fast, EnemyKind::Tank];

    pub const fn template(self) -> EnemyTemplate {
        match self {
            EnemyKind::Standard => EnemyTemplate {
                width: 40.0,
                height: 25.0,
                speed: 2.0,
                color: Color::rgb(0xFF, 0x00, 0x00),
                health: 1,
            },
            EnemyKind::Fast => EnemyTemplate {
                width: 30.0,
                height: 20.0,
                speed: 5.0,
                color: Color::rgb(0xFF, 0xA5, 0x00),
                health: 1,
            },
            EnemyKind::Tank => EnemyTemplate {
                width: 50.0,
                height: 35.0,
                speed: 1.0,
                color: Color::rgb(0x80, 0x00, 0x00),
                health: 3,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Standard => "standard",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 7.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Upward pixels per tick.
    pub speed: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed: BULLET_SPEED,
        }
    }

    /// A bullet leaving the player's nose (left edge at the ship's centre line).
    pub fn fired_from(player: &Player) -> Self {
        Self::new(player.x + player.width / 2.0, player.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Live bullets in firing order.
    pub bullets: Vec<Bullet>,
    pub lives: u32,
}

impl Player {
    /// Player centred horizontally, 50px above the bottom edge.
    pub fn spawn(canvas_width: f32, canvas_height: f32, lives: u32) -> Self {
        Self {
            x: canvas_width / 2.0 - PLAYER_WIDTH / 2.0,
            y: canvas_height - 50.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            bullets: Vec::new(),
            lives,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Downward pixels per tick.
    pub speed: f32,
    pub color: Color,
    pub health: u32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        let t = kind.template();
        Self {
            x,
            y,
            width: t.width,
            height: t.height,
            speed: t.speed,
            color: t.color,
            health: t.health,
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Background decoration ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GasCloud {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

const PLANET_COLORS: [Color; 4] = [
    Color::rgb(0xC1, 0x44, 0x0E),
    Color::rgb(0x4F, 0x9D, 0xA6),
    Color::rgb(0xD8, 0xCA, 0x9D),
    Color::rgb(0x8E, 0x7C, 0xC3),
];

/// Purely cosmetic scenery; never collides with anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Background {
    pub stars: Vec<Star>,
    pub clouds: Vec<GasCloud>,
    pub planets: Vec<Planet>,
}

impl Background {
    pub fn generate(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (w, h) = (config.width, config.height);
        let stars = (0..config.star_count)
            .map(|_| Star {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                size: rng.gen::<f32>() * 2.0,
            })
            .collect();
        let clouds = (0..config.cloud_count)
            .map(|_| GasCloud {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                radius: rng.gen::<f32>() * w / 5.0,
            })
            .collect();
        let planets = (0..config.planet_count)
            .map(|i| Planet {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                radius: 10.0 + rng.gen::<f32>() * w / 10.0,
                color: PLANET_COLORS[i % PLANET_COLORS.len()],
            })
            .collect();
        Self { stars, clouds, planets }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Held movement keys. Both may be held at once; they cancel out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

/// The entire simulation state, owned by one session and mutated in place.
#[derive(Clone, Debug)]
pub struct GameState {
    pub store: EntityStore,
    pub background: Background,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks since the last successful spawn.
    pub spawn_counter: u32,
    pub frame: u64,
    pub intent: MoveIntent,
    pub config: GameConfig,
}

impl GameState {
    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }
}
