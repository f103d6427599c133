//! Owner of every live entity, one container per category.

use crate::entities::{
    Arena, Body, Boss, Category, Collectible, Enemy, Entity, Player, Positioned, Projectile,
};

const ENEMY_CAPACITY: usize = 16;
const PROJECTILE_CAPACITY: usize = 32;
const COLLECTIBLE_CAPACITY: usize = 8;

#[derive(Clone, Debug)]
pub struct Registry {
    arena: Arena,
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    collectibles: Vec<Collectible>,
    boss: Option<Boss>,
}

impl Registry {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            player: Player::spawn(&arena),
            enemies: Vec::with_capacity(ENEMY_CAPACITY),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            collectibles: Vec::with_capacity(COLLECTIBLE_CAPACITY),
            boss: None,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Take ownership of `entity`. A player replaces the current one; a boss
    /// is refused (returns `false`) while another boss is alive.
    pub fn add(&mut self, entity: Entity) -> bool {
        match entity {
            Entity::Player(player) => self.player = player,
            Entity::Enemy(enemy) => self.enemies.push(enemy),
            Entity::Projectile(projectile) => self.projectiles.push(projectile),
            Entity::Collectible(collectible) => self.collectibles.push(collectible),
            Entity::Boss(boss) => {
                if self.boss.is_some() {
                    return false;
                }
                self.boss = Some(boss);
            }
        }
        true
    }

    /// Remove every entity of `category` whose body matches `pred` and return
    /// how many went. The player singleton is never removed.
    pub fn remove_all(&mut self, category: Category, mut pred: impl FnMut(&Body) -> bool) -> usize {
        fn sweep<T: Positioned>(items: &mut Vec<T>, pred: &mut impl FnMut(&Body) -> bool) -> usize {
            let before = items.len();
            items.retain(|item| !pred(item.body()));
            before - items.len()
        }

        match category {
            Category::Player => 0,
            Category::Enemy => sweep(&mut self.enemies, &mut pred),
            Category::Projectile => sweep(&mut self.projectiles, &mut pred),
            Category::Collectible => sweep(&mut self.collectibles, &mut pred),
            Category::Boss => {
                if self.boss.as_ref().is_some_and(|boss| pred(boss.body())) {
                    self.boss = None;
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Visit the body of every live entity in `category`, in insertion order.
    pub fn for_each(&self, category: Category, mut f: impl FnMut(&Body)) {
        match category {
            Category::Player => f(self.player.body()),
            Category::Enemy => self.enemies.iter().for_each(|e| f(e.body())),
            Category::Projectile => self.projectiles.iter().for_each(|p| f(p.body())),
            Category::Collectible => self.collectibles.iter().for_each(|c| f(c.body())),
            Category::Boss => self.boss.iter().for_each(|b| f(b.body())),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Player => 1,
            Category::Enemy => self.enemies.len(),
            Category::Projectile => self.projectiles.len(),
            Category::Collectible => self.collectibles.len(),
            Category::Boss => usize::from(self.boss.is_some()),
        }
    }

    /// Empty every category and stand a brand-new player on the ground.
    /// Only used when a session restarts.
    pub fn clear_all(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
        self.collectibles.clear();
        self.boss = None;
        self.player = Player::spawn(&self.arena);
    }

    // ── Typed access ──────────────────────────────────────────────────────────

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub(crate) fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub(crate) fn projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.projectiles
    }

    pub(crate) fn collectibles_mut(&mut self) -> &mut Vec<Collectible> {
        &mut self.collectibles
    }

    pub(crate) fn boss_mut(&mut self) -> &mut Option<Boss> {
        &mut self.boss
    }

    /// Split borrow used by the resolver: the player alongside the
    /// projectiles, enemies, collectibles and boss it is tested against.
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (
        &mut Player,
        &mut Vec<Projectile>,
        &mut Vec<Enemy>,
        &mut Vec<Collectible>,
        &mut Option<Boss>,
    ) {
        (
            &mut self.player,
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.collectibles,
            &mut self.boss,
        )
    }
}
