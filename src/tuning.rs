//! Hard-coded gameplay constants and per-level difficulty tables.
//!
//! Distances are world units, speeds are world units per tick and the
//! simulation assumes `TICK_RATE` ticks per second.

use std::time::Duration;

use glam::Vec2;

pub const TICK_RATE: u32 = 60;

// ── Arena ─────────────────────────────────────────────────────────────────────

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Smallest arena that still fits the player beside the boss.
pub const MIN_ARENA_WIDTH: f32 = 200.0;
pub const MIN_ARENA_HEIGHT: f32 = 200.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 60.0);
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_RUN_SPEED: f32 = 5.0;
/// Negative is up.
pub const PLAYER_JUMP_VELOCITY: f32 = -15.0;
pub const GRAVITY: f32 = 1.0;

pub const MAX_HEALTH: i32 = 100;
pub const START_LIVES: u32 = 3;

pub const CONTACT_DAMAGE: i32 = 20;
pub const HEALTH_PICKUP_HEAL: i32 = 30;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SIZE: Vec2 = Vec2::new(10.0, 5.0);
pub const PROJECTILE_SPEED: f32 = 10.0;
pub const PROJECTILE_DAMAGE: i32 = 25;

// ── Enemies, boss & collectibles ──────────────────────────────────────────────

pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 50.0);
/// Spawned enemies land somewhere in `[width, width + ENEMY_SPAWN_SPREAD)`.
pub const ENEMY_SPAWN_SPREAD: f32 = 100.0;

pub const BOSS_SIZE: Vec2 = Vec2::new(120.0, 150.0);
pub const BOSS_SPEED: f32 = 1.0;
pub const BOSS_HEALTH: i32 = 200;

pub const COLLECTIBLE_SIZE: Vec2 = Vec2::new(20.0, 20.0);
pub const COLLECTIBLE_DRIFT: f32 = 2.0;
/// Highest a collectible floats above the ground; stays within jump reach.
pub const COLLECTIBLE_MAX_LIFT: f32 = 100.0;

// ── Scoring & levels ──────────────────────────────────────────────────────────

pub const KILL_SCORE: u32 = 1;
pub const MAX_LEVEL: u32 = 3;
/// Score at which the boss enters, once on `MAX_LEVEL`.
pub const FINAL_THRESHOLD: u32 = 30;
pub const LEVEL_ANNOUNCE_DURATION: Duration = Duration::from_secs(2);

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Score needed to leave `level` for the next one.
pub fn level_threshold(level: u32) -> u32 {
    match level {
        1 => 5,
        2 => 15,
        _ => unreachable!("no threshold past level {level}"),
    }
}

pub fn enemy_speed(level: u32) -> f32 {
    match level {
        1 => 2.0,
        2 => 3.0,
        3 => 4.0,
        _ => unreachable!("no enemy speed for level {level}"),
    }
}

pub fn enemy_health(level: u32) -> i32 {
    match level {
        1 | 2 => PROJECTILE_DAMAGE,
        3 => PROJECTILE_DAMAGE * 2,
        _ => unreachable!("no enemy health for level {level}"),
    }
}

/// Shorter on level 2; longer again on level 3 where enemies take two hits.
pub fn enemy_spawn_interval(level: u32) -> Duration {
    match level {
        1 => Duration::from_millis(2000),
        2 => Duration::from_millis(1200),
        3 => Duration::from_millis(1800),
        _ => unreachable!("no enemy spawn interval for level {level}"),
    }
}

pub fn collectible_spawn_interval(level: u32) -> Duration {
    match level {
        1 | 2 => Duration::from_secs(8),
        3 => Duration::from_secs(6),
        _ => unreachable!("no collectible spawn interval for level {level}"),
    }
}

/// Maximum number of simultaneously live enemies, if the level has one.
pub fn enemy_cap(level: u32) -> Option<usize> {
    match level {
        1 | 2 => None,
        3 => Some(3),
        _ => unreachable!("no enemy cap for level {level}"),
    }
}
