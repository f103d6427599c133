//! Per-tick movement rules. Integration never fails; it only clamps.

use crate::entities::{Arena, Category, Player};
use crate::input::HeldKeys;
use crate::registry::Registry;
use crate::tuning::{GRAVITY, PLAYER_JUMP_VELOCITY, PLAYER_RUN_SPEED};

/// Move everything one tick: the player first, then the other categories,
/// dropping whatever has fully left the screen.
pub fn integrate(registry: &mut Registry, held: &HeldKeys) {
    let arena = *registry.arena();
    move_player(registry.player_mut(), held, &arena);
    move_others(registry);
    despawn_off_screen(registry, &arena);
}

pub fn move_player(player: &mut Player, held: &HeldKeys, arena: &Arena) {
    let body = &mut player.body;

    body.vel.x = match (held.left, held.right) {
        (true, false) => -PLAYER_RUN_SPEED,
        (false, true) => PLAYER_RUN_SPEED,
        _ => 0.0,
    };

    if held.jump && player.grounded {
        body.vel.y = PLAYER_JUMP_VELOCITY;
        player.grounded = false;
    }

    body.vel.y += GRAVITY;
    body.pos += body.vel;

    body.pos.x = body.pos.x.clamp(0.0, arena.width - body.size.x);

    let ground_y = arena.ground() - body.size.y;
    if body.pos.y >= ground_y {
        body.pos.y = ground_y;
        body.vel.y = 0.0;
        player.grounded = true;
    }
}

fn move_others(registry: &mut Registry) {
    for enemy in registry.enemies_mut() {
        enemy.body.pos += enemy.body.vel;
    }
    if let Some(boss) = registry.boss_mut() {
        boss.body.pos += boss.body.vel;
    }
    for collectible in registry.collectibles_mut() {
        collectible.body.pos += collectible.body.vel;
    }
    for projectile in registry.projectiles_mut() {
        projectile.body.pos += projectile.body.vel;
    }
}

fn despawn_off_screen(registry: &mut Registry, arena: &Arena) {
    let width = arena.width;
    registry.remove_all(Category::Enemy, |b| b.right() < 0.0);
    registry.remove_all(Category::Boss, |b| b.right() < 0.0);
    registry.remove_all(Category::Collectible, |b| b.right() < 0.0);
    registry.remove_all(Category::Projectile, |b| b.left() > width);
}
