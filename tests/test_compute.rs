mod common;

use common::{bullet_on, make_state, quiet_state, seeded_rng};
use space_defender::compute::*;
use space_defender::entities::{Enemy, EnemyKind, GameStatus};
use space_defender::spawn::SpawnOutcome;
use space_defender::GameConfig;

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_is_running_and_empty() {
    let s = init_state(GameConfig::default(), &mut seeded_rng());
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.score, 0);
    assert_eq!(s.frame, 0);
    assert_eq!(s.spawn_counter, 0);
    assert_eq!(s.store.player.lives, 3);
    assert!(s.store.bullets().is_empty());
    assert!(s.store.enemies().is_empty());
}

#[test]
fn init_state_generates_scenery_inside_canvas() {
    let s = init_state(GameConfig::default(), &mut seeded_rng());
    assert_eq!(s.background.stars.len(), 100);
    assert_eq!(s.background.clouds.len(), 5);
    assert!(s.background.planets.is_empty());
    for star in &s.background.stars {
        assert!(star.x >= 0.0 && star.x < 800.0);
        assert!(star.y >= 0.0 && star.y < 600.0);
        assert!(star.size >= 0.0 && star.size < 2.0);
    }
    for cloud in &s.background.clouds {
        assert!(cloud.radius >= 0.0 && cloud.radius < 160.0);
    }
}

#[test]
fn init_state_uses_configured_lives() {
    let config = GameConfig {
        starting_lives: 5,
        ..GameConfig::default()
    };
    let s = init_state(config, &mut seeded_rng());
    assert_eq!(s.store.player.lives, 5);
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame_while_running() {
    let mut s = make_state();
    tick(&mut s, &mut seeded_rng());
    assert_eq!(s.frame, 1);
}

#[test]
fn tick_is_frozen_while_paused() {
    let mut s = make_state();
    s.store.add_enemy(Enemy::new(EnemyKind::Standard, 10.0, 10.0));
    s.intent.right = true;
    s.status = GameStatus::Paused;

    let report = tick(&mut s, &mut seeded_rng());
    assert_eq!(report, TickReport::default());
    assert_eq!(s.frame, 0);
    assert_eq!(s.spawn_counter, 0);
    assert_eq!(s.store.enemies()[0].y, 10.0);
    assert_eq!(s.store.player.x, 375.0);
}

#[test]
fn tick_is_frozen_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    for _ in 0..200 {
        tick(&mut s, &mut seeded_rng());
    }
    assert_eq!(s.frame, 0);
    assert!(s.store.enemies().is_empty());
}

#[test]
fn tick_spawns_on_eightieth_frame() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..79 {
        let report = tick(&mut s, &mut rng);
        assert_eq!(report.spawn, Some(SpawnOutcome::Waiting));
    }
    let report = tick(&mut s, &mut rng);
    assert_eq!(report.spawn, Some(SpawnOutcome::Spawned));
    assert_eq!(s.store.enemies().len(), 1);
    // Spawned at -height, then advanced once in the same tick
    let e = &s.store.enemies()[0];
    assert_eq!(e.y, -e.height + e.speed);
}

#[test]
fn ram_through_tick_ends_game_and_freezes_it() {
    let mut s = quiet_state();
    s.store.player.lives = 1;
    let p = s.store.player.clone();
    s.store.add_enemy(Enemy::new(EnemyKind::Tank, p.x, p.y));

    let report = tick(&mut s, &mut seeded_rng());
    assert!(report.collisions.game_over);
    assert_eq!(s.status, GameStatus::GameOver);
    let frame = s.frame;
    tick(&mut s, &mut seeded_rng());
    assert_eq!(s.frame, frame);
}

#[test]
fn score_never_decreases_while_running() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    let mut last = 0;
    for i in 0..2_000u32 {
        if i % 5 == 0 {
            player_shoot(&mut s);
        }
        s.intent.left = (i / 100) % 2 == 0;
        s.intent.right = !s.intent.left;
        tick(&mut s, &mut rng);
        assert!(s.score >= last);
        last = s.score;
        for enemy in s.store.enemies() {
            assert!(enemy.health > 0);
        }
        for bullet in s.store.bullets() {
            assert!(bullet.y >= 0.0);
        }
        if s.status == GameStatus::GameOver {
            break;
        }
    }
}

// ── End-to-end ────────────────────────────────────────────────────────────────

#[test]
fn bullet_travels_up_and_kills_enemy_in_its_path() {
    let mut s = quiet_state();
    let mut rng = seeded_rng();

    player_shoot(&mut s);
    let bullet_x = s.store.bullets()[0].x;
    s.store
        .add_enemy(Enemy::new(EnemyKind::Standard, bullet_x - 10.0, 100.0));

    let mut hit_ticks = 0;
    for _ in 0..200 {
        let report = tick(&mut s, &mut rng);
        if report.collisions.hits > 0 {
            hit_ticks += 1;
            assert_eq!(report.collisions.kills, 1);
            break;
        }
        assert_eq!(s.store.enemies().len(), 1);
        assert_eq!(s.store.bullets().len(), 1);
    }
    assert_eq!(hit_ticks, 1);
    assert!(s.store.enemies().is_empty());
    assert!(s.store.bullets().is_empty());
    assert_eq!(s.score, 1);
}

// ── pause / restart ───────────────────────────────────────────────────────────

#[test]
fn toggle_pause_round_trips() {
    let mut s = make_state();
    assert_eq!(handle_intent(&mut s, Intent::TogglePause), IntentOutcome::Applied);
    assert_eq!(s.status, GameStatus::Paused);
    assert_eq!(handle_intent(&mut s, Intent::TogglePause), IntentOutcome::Applied);
    assert_eq!(s.status, GameStatus::Running);
}

#[test]
fn toggle_pause_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    assert_eq!(handle_intent(&mut s, Intent::TogglePause), IntentOutcome::Ignored);
    assert_eq!(s.status, GameStatus::GameOver);
}

#[test]
fn restart_ignored_while_running() {
    let mut s = make_state();
    s.score = 7;
    assert_eq!(handle_intent(&mut s, Intent::Restart), IntentOutcome::Ignored);
    assert_eq!(s.score, 7);
}

#[test]
fn restart_honored_from_pause() {
    let mut s = make_state();
    s.score = 7;
    s.status = GameStatus::Paused;
    assert_eq!(handle_intent(&mut s, Intent::Restart), IntentOutcome::Restarted);
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.score, 0);
}

#[test]
fn restart_from_game_over_always_yields_fresh_game() {
    for seed_ticks in [0u32, 50, 400] {
        let mut s = make_state();
        let mut rng = seeded_rng();
        for _ in 0..seed_ticks {
            player_shoot(&mut s);
            tick(&mut s, &mut rng);
        }
        let enemy = Enemy::new(EnemyKind::Standard, 0.0, 0.0);
        s.store.add_bullet(bullet_on(&enemy));
        s.store.add_enemy(enemy);
        s.score = 42;
        s.store.player.lives = 0;
        s.store.player.x = 3.0;
        s.spawn_counter = 55;
        s.status = GameStatus::GameOver;

        assert_eq!(handle_intent(&mut s, Intent::Restart), IntentOutcome::Restarted);
        assert_eq!(s.score, 0);
        assert_eq!(s.store.player.lives, 3);
        assert!(s.store.bullets().is_empty());
        assert!(s.store.enemies().is_empty());
        assert_eq!(s.status, GameStatus::Running);
        assert_eq!(s.spawn_counter, 0);
        assert_eq!(s.frame, 0);
        assert_eq!(s.store.player.x, 375.0);
    }
}

#[test]
fn restart_keeps_held_movement() {
    let mut s = make_state();
    handle_intent(&mut s, Intent::MoveLeft(true));
    s.status = GameStatus::GameOver;
    handle_intent(&mut s, Intent::Restart);
    assert!(s.intent.left);
}

// ── movement / fire intents ───────────────────────────────────────────────────

#[test]
fn movement_intents_set_and_clear_flags() {
    let mut s = make_state();
    handle_intent(&mut s, Intent::MoveLeft(true));
    handle_intent(&mut s, Intent::MoveRight(true));
    assert!(s.intent.left && s.intent.right);
    handle_intent(&mut s, Intent::MoveLeft(false));
    assert!(!s.intent.left && s.intent.right);
}

#[test]
fn fire_adds_bullet_only_while_running() {
    let mut s = make_state();
    assert_eq!(handle_intent(&mut s, Intent::Fire), IntentOutcome::Applied);
    assert_eq!(s.store.bullets().len(), 1);

    s.status = GameStatus::Paused;
    assert_eq!(handle_intent(&mut s, Intent::Fire), IntentOutcome::Ignored);
    s.status = GameStatus::GameOver;
    assert_eq!(handle_intent(&mut s, Intent::Fire), IntentOutcome::Ignored);
    assert_eq!(s.store.bullets().len(), 1);
}

#[test]
fn fire_has_no_bullet_cap() {
    let mut s = make_state();
    for _ in 0..20 {
        handle_intent(&mut s, Intent::Fire);
    }
    assert_eq!(s.store.bullets().len(), 20);
}
