//! Elapsed-time spawn scheduling.
//!
//! Timers are plain deadlines compared against the session clock each tick.
//! A timer that comes due while spawning is suspended (or the enemy cap is
//! reached) simply re-arms; missed spawns are never queued up.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::entities::{Arena, Boss, Category, Collectible, CollectibleKind, Enemy, Entity};
use crate::registry::Registry;
use crate::tuning::{
    collectible_spawn_interval, enemy_cap, enemy_health, enemy_spawn_interval, enemy_speed,
    COLLECTIBLE_MAX_LIFT, COLLECTIBLE_SIZE, ENEMY_SPAWN_SPREAD,
};

// ── Timer ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnTimer {
    interval: Duration,
    next_due: Duration,
}

impl SpawnTimer {
    /// First fires one `interval` after `now`.
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// Swap in a new interval, counting from `now`.
    pub fn reconfigure(&mut self, interval: Duration, now: Duration) {
        *self = Self::new(interval, now);
    }

    /// `true` when the deadline has passed; the timer then re-arms from `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// What a scheduler update put into the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub enemies: u32,
    pub collectibles: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spawner {
    level: u32,
    enemy_timer: SpawnTimer,
    collectible_timer: SpawnTimer,
    enemies_enabled: bool,
}

impl Spawner {
    pub fn new(level: u32, now: Duration) -> Self {
        Self {
            level,
            enemy_timer: SpawnTimer::new(enemy_spawn_interval(level), now),
            collectible_timer: SpawnTimer::new(collectible_spawn_interval(level), now),
            enemies_enabled: true,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn enemy_timer(&self) -> &SpawnTimer {
        &self.enemy_timer
    }

    pub fn collectible_timer(&self) -> &SpawnTimer {
        &self.collectible_timer
    }

    pub fn enemies_enabled(&self) -> bool {
        self.enemies_enabled
    }

    /// Adopt the rates of a newly reached level.
    pub fn set_level(&mut self, level: u32, now: Duration) {
        self.level = level;
        self.enemy_timer.reconfigure(enemy_spawn_interval(level), now);
        self.collectible_timer
            .reconfigure(collectible_spawn_interval(level), now);
        debug!(
            level,
            enemy_interval_ms = self.enemy_timer.interval().as_millis() as u64,
            "spawn rates reconfigured"
        );
    }

    /// Stop regular enemy spawns for the rest of the session.
    pub fn disable_enemies(&mut self) {
        self.enemies_enabled = false;
    }

    /// Run both timers. Enemy spawns are skipped while `announcing`, after
    /// `disable_enemies` and while the level's enemy cap is reached.
    pub fn update(
        &mut self,
        registry: &mut Registry,
        now: Duration,
        announcing: bool,
        rng: &mut impl Rng,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();
        let arena = *registry.arena();

        if self.enemy_timer.poll(now) && self.enemies_enabled && !announcing {
            let at_cap = enemy_cap(self.level)
                .is_some_and(|cap| registry.count(Category::Enemy) >= cap);
            if at_cap {
                debug!(level = self.level, "enemy spawn skipped at cap");
            } else {
                registry.add(Entity::Enemy(spawn_enemy(&arena, self.level, rng)));
                report.enemies += 1;
            }
        }

        if self.collectible_timer.poll(now) {
            registry.add(Entity::Collectible(spawn_collectible(&arena, rng)));
            report.collectibles += 1;
        }

        report
    }
}

// ── Factories ─────────────────────────────────────────────────────────────────

/// A level-scaled enemy placed just past the right edge.
pub fn spawn_enemy(arena: &Arena, level: u32, rng: &mut impl Rng) -> Enemy {
    let x = arena.width + rng.gen_range(0.0..ENEMY_SPAWN_SPREAD);
    Enemy::new(arena, x, enemy_speed(level), enemy_health(level))
}

/// A random pickup drifting in from the right at jumpable height.
pub fn spawn_collectible(arena: &Arena, rng: &mut impl Rng) -> Collectible {
    let x = arena.width + rng.gen_range(0.0..ENEMY_SPAWN_SPREAD);
    let lift = rng.gen_range(0.0..=COLLECTIBLE_MAX_LIFT);
    let y = arena.ground() - COLLECTIBLE_SIZE.y - lift;
    let kind = if rng.gen_bool(0.5) {
        CollectibleKind::Health
    } else {
        CollectibleKind::Life
    };
    Collectible::new(x, y, kind)
}

/// Bring in the boss. A no-op returning `false` while one is alive.
pub fn spawn_boss(registry: &mut Registry) -> bool {
    let boss = Boss::new(registry.arena());
    let added = registry.add(Entity::Boss(boss));
    if added {
        info!("boss spawned");
    }
    added
}
