//! One game session: owns the registry and drives every component once per
//! tick in a fixed order.
//!
//! shoot event → motion → collisions → progression & spawns → outcome

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::collision;
use crate::entities::{Arena, Entity, Projectile};
use crate::input::Input;
use crate::motion;
use crate::progression::{Phase, Progression, Transition};
use crate::registry::Registry;
use crate::spawn::{self, Spawner};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Overlay the presentation layer should show this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Level(u32),
    BossFight,
    Victory,
    Defeat,
}

/// Numbers for the heads-up display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub health: i32,
    /// `(health, max_health)` while a boss is alive.
    pub boss: Option<(i32, i32)>,
    pub banner: Option<Banner>,
}

#[derive(Clone, Debug)]
pub struct Session {
    registry: Registry,
    progression: Progression,
    spawner: Spawner,
    score: u32,
    ticks: u64,
}

impl Session {
    /// A fresh session whose clock starts at zero.
    pub fn new(arena: Arena) -> Self {
        let progression = Progression::new(Duration::ZERO);
        let spawner = Spawner::new(progression.level(), Duration::ZERO);
        Self {
            registry: Registry::new(arena),
            progression,
            spawner,
            score: 0,
            ticks: 0,
        }
    }

    /// Throw away the current game and start over from level 1. The caller
    /// restarts its clock at zero.
    pub fn restart(&mut self) {
        self.registry.clear_all();
        self.progression = Progression::new(Duration::ZERO);
        self.spawner = Spawner::new(self.progression.level(), Duration::ZERO);
        self.score = 0;
        self.ticks = 0;
        debug!("session restarted");
    }

    /// Advance one tick. `now` is the time elapsed since the session started.
    ///
    /// Returns the outcome on the tick it is reached and `None` otherwise;
    /// once an outcome exists, further ticks change nothing.
    pub fn tick(&mut self, input: &Input, now: Duration, rng: &mut impl Rng) -> Option<Outcome> {
        if self.progression.outcome().is_some() {
            return None;
        }
        self.ticks += 1;

        if input.shoot_pressed {
            let projectile = Projectile::fired_by(self.registry.player());
            self.registry.add(Entity::Projectile(projectile));
        }

        motion::integrate(&mut self.registry, &input.held);

        let collisions = collision::resolve(&mut self.registry);
        self.score += collisions.score;

        for transition in self.progression.update(now, self.score) {
            match transition {
                Transition::AnnouncementEnded => {}
                Transition::LevelAdvanced(level) => self.spawner.set_level(level, now),
                Transition::BossTriggered => {
                    self.spawner.disable_enemies();
                    spawn::spawn_boss(&mut self.registry);
                }
            }
        }
        self.spawner.update(
            &mut self.registry,
            now,
            self.progression.is_announcing(),
            rng,
        );

        let outcome = collisions.outcome?;
        self.progression.finish(outcome).then_some(outcome)
    }

    // ── Read access for the presentation layer ────────────────────────────────

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> Phase {
        self.progression.phase()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.progression.outcome()
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn hud(&self) -> Hud {
        let player = self.registry.player();
        let banner = match self.phase() {
            Phase::Victory => Some(Banner::Victory),
            Phase::Defeat => Some(Banner::Defeat),
            _ if self.progression.is_announcing() => Some(Banner::Level(self.level())),
            Phase::BossFight => Some(Banner::BossFight),
            _ => None,
        };
        Hud {
            score: self.score,
            level: self.level(),
            lives: player.lives,
            health: player.health,
            boss: self.registry.boss().map(|b| (b.health, b.max_health)),
            banner,
        }
    }

    /// Mutable registry access, for staging scenarios by hand.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Overwrite the score, for staging scenarios by hand.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
