use space_defender::entities::{Bullet, Enemy, EnemyKind, Player};
use space_defender::store::EntityStore;

fn make_store() -> EntityStore {
    EntityStore::new(Player::spawn(800.0, 600.0, 3))
}

#[test]
fn new_store_is_empty() {
    let store = make_store();
    assert!(store.bullets().is_empty());
    assert!(store.enemies().is_empty());
    assert_eq!(store.player.lives, 3);
}

#[test]
fn bullets_keep_firing_order_on_removal() {
    let mut store = make_store();
    for y in [100.0, 200.0, 300.0] {
        store.add_bullet(Bullet::new(10.0, y));
    }
    let removed = store.remove_bullet(0);
    assert_eq!(removed.y, 100.0);
    let ys: Vec<f32> = store.bullets().iter().map(|b| b.y).collect();
    assert_eq!(ys, vec![200.0, 300.0]);
}

#[test]
fn enemy_removal_swaps_last_into_hole() {
    let mut store = make_store();
    for x in [0.0, 100.0, 200.0] {
        store.add_enemy(Enemy::new(EnemyKind::Standard, x, 0.0));
    }
    let removed = store.remove_enemy(0);
    assert_eq!(removed.x, 0.0);
    assert_eq!(store.enemies().len(), 2);
    assert_eq!(store.enemies()[0].x, 200.0); // last moved into slot 0
    assert_eq!(store.enemies()[1].x, 100.0);
}

#[test]
fn prune_reports_dropped_count() {
    let mut store = make_store();
    store.add_bullet(Bullet::new(0.0, -1.0));
    store.add_bullet(Bullet::new(0.0, 5.0));
    store.add_enemy(Enemy::new(EnemyKind::Fast, 0.0, 700.0));
    store.add_enemy(Enemy::new(EnemyKind::Tank, 0.0, 10.0));

    assert_eq!(store.prune_bullets(|b| b.y >= 0.0), 1);
    assert_eq!(store.prune_enemies(|e| e.y <= 600.0), 1);
    assert_eq!(store.bullets().len(), 1);
    assert_eq!(store.enemies()[0].kind, EnemyKind::Tank);
}

#[test]
fn clear_wipes_entities_but_keeps_player() {
    let mut store = make_store();
    store.player.x = 123.0;
    store.add_bullet(Bullet::new(0.0, 0.0));
    store.add_enemy(Enemy::new(EnemyKind::Standard, 0.0, 0.0));
    store.clear();
    assert!(store.bullets().is_empty());
    assert!(store.enemies().is_empty());
    assert_eq!(store.player.x, 123.0);
}

#[test]
fn enemy_takes_template_values() {
    let tank = Enemy::new(EnemyKind::Tank, 5.0, -35.0);
    assert_eq!((tank.width, tank.height), (50.0, 35.0));
    assert_eq!(tank.speed, 1.0);
    assert_eq!(tank.health, 3);

    let fast = Enemy::new(EnemyKind::Fast, 0.0, 0.0);
    assert_eq!((fast.width, fast.height, fast.speed, fast.health), (30.0, 20.0, 5.0, 1));

    let standard = Enemy::new(EnemyKind::Standard, 0.0, 0.0);
    assert_eq!(
        (standard.width, standard.height, standard.speed, standard.health),
        (40.0, 25.0, 2.0, 1)
    );
}
