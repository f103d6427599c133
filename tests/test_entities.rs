use glam::Vec2;
use side_scroller::entities::*;
use side_scroller::tuning::*;
use side_scroller::ArenaError;

fn make_player() -> Player {
    Player::spawn(&Arena::default())
}

// ── Arena ─────────────────────────────────────────────────────────────────────

#[test]
fn arena_default_matches_tuning() {
    let arena = Arena::default();
    assert_eq!(arena.width, ARENA_WIDTH);
    assert_eq!(arena.height, ARENA_HEIGHT);
    assert_eq!(arena.ground(), ARENA_HEIGHT);
}

#[test]
fn arena_rejects_tiny_dimensions() {
    let err = Arena::new(100.0, 600.0).unwrap_err();
    assert!(matches!(err, ArenaError::TooSmall { .. }));
}

#[test]
fn arena_rejects_non_finite_dimensions() {
    let err = Arena::new(f32::NAN, 600.0).unwrap_err();
    assert!(matches!(err, ArenaError::NotFinite { .. }));
    assert!(Arena::new(800.0, f32::INFINITY).is_err());
}

#[test]
fn arena_accepts_reasonable_dimensions() {
    let arena = Arena::new(1024.0, 480.0).unwrap();
    assert_eq!(arena.width, 1024.0);
}

// ── Body ──────────────────────────────────────────────────────────────────────

#[test]
fn bodies_overlap_when_intersecting() {
    let a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    let b = Body::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    let right = Body::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    let below = Body::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
}

#[test]
fn body_edges_and_center() {
    let b = Body::new(Vec2::new(10.0, 20.0), Vec2::new(40.0, 50.0), Vec2::ZERO);
    assert_eq!(b.left(), 10.0);
    assert_eq!(b.right(), 50.0);
    assert_eq!(b.top(), 20.0);
    assert_eq!(b.bottom(), 70.0);
    assert_eq!(b.center(), Vec2::new(30.0, 45.0));
}

// ── Player spawn ──────────────────────────────────────────────────────────────

#[test]
fn player_spawns_standing_on_ground() {
    let p = make_player();
    assert_eq!(p.body.pos, Vec2::new(PLAYER_START_X, ARENA_HEIGHT - PLAYER_SIZE.y));
    assert_eq!(p.body.bottom(), ARENA_HEIGHT);
    assert!(p.grounded);
    assert_eq!(p.health, MAX_HEALTH);
    assert_eq!(p.lives, START_LIVES);
}

// ── Player damage ─────────────────────────────────────────────────────────────

#[test]
fn damage_reduces_health() {
    let mut p = make_player();
    let dead = p.apply_damage(20);
    assert!(!dead);
    assert_eq!(p.health, 80);
    assert_eq!(p.lives, 3);
}

#[test]
fn damage_to_exactly_zero_costs_a_life() {
    let mut p = make_player();
    p.health = 20;
    p.apply_damage(20);
    assert_eq!(p.health, 100);
    assert_eq!(p.lives, 2);
}

#[test]
fn last_life_lost_signals_defeat() {
    let mut p = make_player();
    p.lives = 1;
    p.health = 20;
    assert!(p.apply_damage(20));
    assert_eq!(p.lives, 0);
    assert!(p.is_out_of_lives());
}

#[test]
fn health_and_lives_stay_in_range_for_any_damage() {
    for start in 1..=MAX_HEALTH {
        for amount in 0..=250 {
            let mut p = make_player();
            p.health = start;
            p.apply_damage(amount);
            assert!((0..=MAX_HEALTH).contains(&p.health), "health {}", p.health);
            if start - amount <= 0 {
                assert_eq!(p.health, MAX_HEALTH);
                assert_eq!(p.lives, START_LIVES - 1, "exactly one life per hit");
            } else {
                assert_eq!(p.health, start - amount);
                assert_eq!(p.lives, START_LIVES);
            }
        }
    }
}

#[test]
fn lives_never_underflow() {
    let mut p = make_player();
    p.lives = 0;
    p.health = 10;
    assert!(p.apply_damage(50));
    assert_eq!(p.lives, 0);
}

// ── Healing & extra lives ─────────────────────────────────────────────────────

#[test]
fn heal_is_capped_at_max_health() {
    let mut p = make_player();
    p.health = 90;
    p.heal(HEALTH_PICKUP_HEAL);
    assert_eq!(p.health, 100);
}

#[test]
fn heal_below_cap_adds_fully() {
    let mut p = make_player();
    p.health = 40;
    p.heal(HEALTH_PICKUP_HEAL);
    assert_eq!(p.health, 70);
}

#[test]
fn gain_life_adds_one() {
    let mut p = make_player();
    p.gain_life();
    assert_eq!(p.lives, START_LIVES + 1);
}

// ── Other entities ────────────────────────────────────────────────────────────

#[test]
fn enemy_stands_on_ground_moving_left() {
    let arena = Arena::default();
    let e = Enemy::new(&arena, 500.0, 3.0, 25);
    assert_eq!(e.body.bottom(), arena.ground());
    assert_eq!(e.body.vel, Vec2::new(-3.0, 0.0));
    assert_eq!(e.health, 25);
}

#[test]
fn boss_enters_from_right_edge() {
    let arena = Arena::default();
    let b = Boss::new(&arena);
    assert_eq!(b.body.left(), arena.width);
    assert_eq!(b.body.bottom(), arena.ground());
    assert_eq!(b.health, BOSS_HEALTH);
    assert_eq!(b.max_health, BOSS_HEALTH);
    assert!(b.body.vel.x < 0.0);
}

#[test]
fn projectile_fires_from_player_right_edge() {
    let p = make_player();
    let shot = Projectile::fired_by(&p);
    assert_eq!(shot.body.left(), p.body.right());
    assert_eq!(shot.body.center().y, p.body.center().y);
    assert_eq!(shot.body.vel, Vec2::new(PROJECTILE_SPEED, 0.0));
    assert_eq!(shot.damage, PROJECTILE_DAMAGE);
    assert_eq!(shot.owner, Owner::Player);
}

#[test]
fn entity_reports_its_category() {
    let arena = Arena::default();
    let enemy = Entity::Enemy(Enemy::new(&arena, 0.0, 1.0, 1));
    let pickup = Entity::Collectible(Collectible::new(0.0, 0.0, CollectibleKind::Life));
    assert_eq!(enemy.category(), Category::Enemy);
    assert_eq!(pickup.category(), Category::Collectible);
    assert_eq!(Entity::Boss(Boss::new(&arena)).category(), Category::Boss);
    assert_eq!(Entity::Player(make_player()).category(), Category::Player);
    assert_eq!(pickup.body().size, COLLECTIBLE_SIZE);
}
