//! All game entity types — plain data plus the few rules that belong to a
//! single entity (player damage and healing).

use glam::Vec2;
use tracing::debug;

use crate::error::ArenaError;
use crate::tuning::{
    ARENA_HEIGHT, ARENA_WIDTH, BOSS_HEALTH, BOSS_SIZE, BOSS_SPEED, COLLECTIBLE_DRIFT,
    COLLECTIBLE_SIZE, ENEMY_SIZE, MAX_HEALTH, MIN_ARENA_HEIGHT, MIN_ARENA_WIDTH, PLAYER_SIZE,
    PLAYER_START_X, PROJECTILE_DAMAGE, PROJECTILE_SIZE, PROJECTILE_SPEED, START_LIVES,
};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The play area. `x` grows rightward, `y` grows downward and the ground
/// line sits at `y == height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ArenaError::NotFinite { width, height });
        }
        if width < MIN_ARENA_WIDTH || height < MIN_ARENA_HEIGHT {
            return Err(ArenaError::TooSmall {
                width,
                height,
                min_width: MIN_ARENA_WIDTH,
                min_height: MIN_ARENA_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    pub fn ground(&self) -> f32 {
        self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// Position (top-left corner), bounds and velocity shared by every entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything with a body. Lets the resolver and registry treat every
/// category alike without a shared base type.
pub trait Positioned {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn overlaps<T: Positioned>(&self, other: &T) -> bool
    where
        Self: Sized,
    {
        self.body().overlaps(other.body())
    }
}

macro_rules! impl_positioned {
    ($($ty:ty),*) => {
        $(impl Positioned for $ty {
            fn body(&self) -> &Body {
                &self.body
            }
            fn body_mut(&mut self) -> &mut Body {
                &mut self.body
            }
        })*
    };
}

impl_positioned!(Player, Enemy, Boss, Projectile, Collectible);

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub grounded: bool,
    pub health: i32,
    pub lives: u32,
}

impl Player {
    /// A fresh player standing on the ground at the start column.
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            body: Body::new(
                Vec2::new(PLAYER_START_X, arena.ground() - PLAYER_SIZE.y),
                PLAYER_SIZE,
                Vec2::ZERO,
            ),
            grounded: true,
            health: MAX_HEALTH,
            lives: START_LIVES,
        }
    }

    /// The only path by which the player loses health or lives.
    ///
    /// Health that would drop to zero or below costs one life and refills
    /// to `MAX_HEALTH`. Returns `true` once no lives remain.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        if self.health <= 0 {
            self.lives = self.lives.saturating_sub(1);
            self.health = MAX_HEALTH;
            debug!(lives = self.lives, "player lost a life");
        }
        self.health = self.health.min(MAX_HEALTH);
        self.is_out_of_lives()
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, MAX_HEALTH);
    }

    pub fn gain_life(&mut self) {
        self.lives += 1;
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}

// ── Enemy & boss ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub health: i32,
}

impl Enemy {
    /// An enemy standing on the ground at `x`, walking left at `speed`.
    pub fn new(arena: &Arena, x: f32, speed: f32, health: i32) -> Self {
        Self {
            body: Body::new(
                Vec2::new(x, arena.ground() - ENEMY_SIZE.y),
                ENEMY_SIZE,
                Vec2::new(-speed, 0.0),
            ),
            health,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub body: Body,
    pub health: i32,
    pub max_health: i32,
}

impl Boss {
    /// The boss enters just past the right edge, on the ground.
    pub fn new(arena: &Arena) -> Self {
        Self {
            body: Body::new(
                Vec2::new(arena.width, arena.ground() - BOSS_SIZE.y),
                BOSS_SIZE,
                Vec2::new(-BOSS_SPEED, 0.0),
            ),
            health: BOSS_HEALTH,
            max_health: BOSS_HEALTH,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub damage: i32,
    pub owner: Owner,
}

impl Projectile {
    /// Fired from the player's right edge at mid height.
    pub fn fired_by(player: &Player) -> Self {
        let origin = Vec2::new(
            player.body.right(),
            player.body.center().y - PROJECTILE_SIZE.y * 0.5,
        );
        Self {
            body: Body::new(origin, PROJECTILE_SIZE, Vec2::new(PROJECTILE_SPEED, 0.0)),
            damage: PROJECTILE_DAMAGE,
            owner: Owner::Player,
        }
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectibleKind {
    /// Restores `HEALTH_PICKUP_HEAL` health, capped at the maximum.
    Health,
    /// Grants one extra life.
    Life,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub body: Body,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            body: Body::new(
                Vec2::new(x, y),
                COLLECTIBLE_SIZE,
                Vec2::new(-COLLECTIBLE_DRIFT, 0.0),
            ),
            kind,
        }
    }
}

// ── Tagged entity ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    Enemy,
    Boss,
    Projectile,
    Collectible,
}

/// One entity of any category, used when handing ownership to the registry.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    Boss(Boss),
    Projectile(Projectile),
    Collectible(Collectible),
}

impl Entity {
    pub fn category(&self) -> Category {
        match self {
            Entity::Player(_) => Category::Player,
            Entity::Enemy(_) => Category::Enemy,
            Entity::Boss(_) => Category::Boss,
            Entity::Projectile(_) => Category::Projectile,
            Entity::Collectible(_) => Category::Collectible,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(e) => e.body(),
            Entity::Enemy(e) => e.body(),
            Entity::Boss(e) => e.body(),
            Entity::Projectile(e) => e.body(),
            Entity::Collectible(e) => e.body(),
        }
    }
}
