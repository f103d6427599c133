//! Collision resolution between entity categories.
//!
//! Pairs are checked in a fixed order so that simultaneous hits always score
//! the same way:
//!
//! 1. projectiles ↔ enemies
//! 2. projectiles ↔ boss
//! 3. player ↔ enemies
//! 4. player ↔ collectibles
//! 5. player ↔ boss
//!
//! The player resolves at most one enemy and one collectible per tick.

use tracing::{debug, info};

use crate::entities::{CollectibleKind, Positioned};
use crate::registry::Registry;
use crate::session::Outcome;
use crate::tuning::{CONTACT_DAMAGE, HEALTH_PICKUP_HEAL, KILL_SCORE};

/// What one resolution pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub score: u32,
    pub kills: u32,
    pub projectile_hits: u32,
    pub contact_hits: u32,
    pub pickups: u32,
    /// First terminal outcome produced during the pass.
    pub outcome: Option<Outcome>,
}

impl CollisionReport {
    fn finish(&mut self, outcome: Outcome) {
        self.outcome.get_or_insert(outcome);
    }
}

pub fn resolve(registry: &mut Registry) -> CollisionReport {
    let mut report = CollisionReport::default();

    projectiles_vs_enemies(registry, &mut report);
    projectiles_vs_boss(registry, &mut report);
    player_vs_enemies(registry, &mut report);
    player_vs_collectibles(registry, &mut report);
    player_vs_boss(registry, &mut report);

    report
}

// ── Projectiles ───────────────────────────────────────────────────────────────

fn projectiles_vs_enemies(registry: &mut Registry, report: &mut CollisionReport) {
    let (_, projectiles, enemies, _, _) = registry.parts_mut();

    projectiles.retain(|projectile| {
        let Some(ei) = enemies.iter().position(|e| projectile.overlaps(e)) else {
            return true;
        };
        report.projectile_hits += 1;
        enemies[ei].health -= projectile.damage;
        if enemies[ei].health <= 0 {
            enemies.remove(ei);
            report.kills += 1;
            report.score += KILL_SCORE;
            debug!(score_gain = KILL_SCORE, "enemy destroyed");
        }
        false
    });
}

fn projectiles_vs_boss(registry: &mut Registry, report: &mut CollisionReport) {
    let (_, projectiles, _, _, boss_slot) = registry.parts_mut();

    projectiles.retain(|projectile| {
        let Some(boss) = boss_slot.as_mut() else {
            return true;
        };
        if !projectile.overlaps(boss) {
            return true;
        }
        report.projectile_hits += 1;
        boss.health -= projectile.damage;
        debug!(health = boss.health, "boss hit");
        if boss.health <= 0 {
            *boss_slot = None;
            info!("boss destroyed");
            report.finish(Outcome::Victory);
        }
        false
    });
}

// ── Player ────────────────────────────────────────────────────────────────────

fn player_vs_enemies(registry: &mut Registry, report: &mut CollisionReport) {
    let (player, _, enemies, _, _) = registry.parts_mut();

    // Contact always kills the enemy; the player only takes damage.
    if let Some(ei) = enemies.iter().position(|e| player.overlaps(e)) {
        enemies.remove(ei);
        report.contact_hits += 1;
        if player.apply_damage(CONTACT_DAMAGE) {
            info!("player out of lives");
            report.finish(Outcome::Defeat);
        }
    }
}

fn player_vs_collectibles(registry: &mut Registry, report: &mut CollisionReport) {
    let (player, _, _, collectibles, _) = registry.parts_mut();

    if let Some(ci) = collectibles.iter().position(|c| player.overlaps(c)) {
        let collectible = collectibles.remove(ci);
        match collectible.kind {
            CollectibleKind::Health => player.heal(HEALTH_PICKUP_HEAL),
            CollectibleKind::Life => player.gain_life(),
        }
        report.pickups += 1;
        debug!(kind = ?collectible.kind, health = player.health, lives = player.lives, "pickup");
    }
}

fn player_vs_boss(registry: &mut Registry, report: &mut CollisionReport) {
    let (player, _, _, _, boss) = registry.parts_mut();

    if boss.as_ref().is_some_and(|b| player.overlaps(b)) {
        info!("player touched the boss");
        report.finish(Outcome::Defeat);
    }
}
