//! Entity roster
//!
//! Owns every entity's collider and health, answers raycasts, and applies
//! damage. Destroying an entity removes both, so later shots pass through
//! the space it occupied.
//!
//! Destruction requested through the [`Roster`] is deferred until
//! [`World::flush_destroyed`], the way engine object destruction lands at the
//! end of the frame. This lets a weapon borrow the collision scene and the
//! roster at the same time.

use std::collections::HashMap;

use glam::Vec3;

use crate::combat::{DamageOutcome, DamageSink, HealthComponent};
use crate::error::{ConfigError, require_positive};
use crate::physics::{Aabb, CollisionScene, EntityId, LayerMask, PhysicsPort, Ray, RaycastHit};

/// Health of every damageable entity plus pending destruction requests.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    health: HashMap<EntityId, HealthComponent>,
    pending: Vec<EntityId>,
}

impl Roster {
    pub fn get(&self, entity: EntityId) -> Option<&HealthComponent> {
        self.health.get(&entity)
    }

    pub fn len(&self) -> usize {
        self.health.len()
    }

    pub fn is_empty(&self) -> bool {
        self.health.is_empty()
    }

    /// Entities waiting to be destroyed.
    pub fn pending(&self) -> &[EntityId] {
        &self.pending
    }
}

impl DamageSink for Roster {
    fn deliver_damage(&mut self, target: EntityId, amount: f32) -> DamageOutcome {
        let Some(health) = self.health.get_mut(&target) else {
            return DamageOutcome::Ignored;
        };

        let outcome = health.take_damage(amount);
        if outcome.is_destroyed() {
            self.pending.push(target);
        }
        outcome
    }
}

/// Minimal host world: a collision scene plus health for damageable entities.
#[derive(Debug, Clone, Default)]
pub struct World {
    scene: CollisionScene,
    roster: Roster,
    destroyed: Vec<EntityId>,
    next_id: u32,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    /// Spawn static level geometry on the `WORLD` layer.
    pub fn spawn_wall(&mut self, bounds: Aabb) -> EntityId {
        let id = self.allocate();
        self.scene.insert(id, bounds, LayerMask::WORLD);
        log::debug!("Spawned wall {id} at {:?}", bounds.center());
        id
    }

    /// Spawn a damageable enemy on the `ENEMY` layer.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `max_health` is not a positive number.
    pub fn spawn_enemy(
        &mut self,
        name: &str,
        center: Vec3,
        half_extents: Vec3,
        max_health: f32,
    ) -> Result<EntityId, ConfigError> {
        require_positive("max_health", max_health)?;

        let id = self.allocate();
        self.scene
            .insert(id, Aabb::from_center(center, half_extents), LayerMask::ENEMY);
        self.roster
            .health
            .insert(id, HealthComponent::new(max_health).with_name(name));
        log::debug!("Spawned {name} as {id} with {max_health} HP");
        Ok(id)
    }

    /// Remove an entity's collider and health. Returns false if it was unknown.
    pub fn destroy(&mut self, entity: EntityId) -> bool {
        let had_collider = self.scene.remove_entity(entity) > 0;
        let had_health = self.roster.health.remove(&entity).is_some();
        let existed = had_collider || had_health;
        if existed {
            self.destroyed.push(entity);
            log::debug!("Destroyed {entity}");
        }
        existed
    }

    /// Carry out destruction requested through the roster.
    /// Returns the number of entities removed.
    pub fn flush_destroyed(&mut self) -> usize {
        let pending = std::mem::take(&mut self.roster.pending);
        pending
            .into_iter()
            .filter(|&entity| self.destroy(entity))
            .count()
    }

    /// Borrow the collision scene and the roster together, e.g. to fire a
    /// weapon whose ray query and damage delivery both touch the world.
    pub fn split_mut(&mut self) -> (&CollisionScene, &mut Roster) {
        (&self.scene, &mut self.roster)
    }

    /// Whether the entity exists and has not been destroyed.
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.scene.contains(entity) || self.roster.health.contains_key(&entity)
    }

    /// Health of a damageable entity.
    pub fn health(&self, entity: EntityId) -> Option<&HealthComponent> {
        self.roster.get(entity)
    }

    /// Damageable entities still present.
    pub fn enemy_count(&self) -> usize {
        self.roster.len()
    }

    /// Entities destroyed so far, in order.
    pub fn destroyed(&self) -> &[EntityId] {
        &self.destroyed
    }

    pub fn scene(&self) -> &CollisionScene {
        &self.scene
    }
}

impl PhysicsPort for World {
    fn raycast(&self, ray: Ray, max_distance: f32, mask: LayerMask) -> Option<RaycastHit> {
        self.scene.raycast(ray, max_distance, mask)
    }
}

/// Targets killed through the world itself are removed immediately.
impl DamageSink for World {
    fn deliver_damage(&mut self, target: EntityId, amount: f32) -> DamageOutcome {
        let outcome = self.roster.deliver_damage(target, amount);
        self.flush_destroyed();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_enemy() -> (World, EntityId) {
        let mut world = World::new();
        let id = world
            .spawn_enemy("Target", Vec3::new(0.0, 1.0, -10.0), Vec3::splat(0.5), 100.0)
            .unwrap();
        (world, id)
    }

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut world = World::new();
        let wall = world.spawn_wall(Aabb::new(Vec3::ZERO, Vec3::ONE));
        let enemy = world
            .spawn_enemy("Grunt", Vec3::new(5.0, 0.0, 0.0), Vec3::splat(0.5), 50.0)
            .unwrap();
        assert_ne!(wall, enemy);
        assert!(world.is_alive(wall));
        assert!(world.health(wall).is_none());
        assert_eq!(world.enemy_count(), 1);
    }

    #[test]
    fn test_spawn_rejects_non_positive_health() {
        let mut world = World::new();
        assert!(world.spawn_enemy("Ghost", Vec3::ZERO, Vec3::ONE, 0.0).is_err());
        assert_eq!(world.enemy_count(), 0);
    }

    #[test]
    fn test_lethal_damage_destroys_once() {
        let (mut world, id) = world_with_enemy();

        assert_eq!(
            world.deliver_damage(id, 60.0),
            DamageOutcome::Applied { remaining: 40.0 }
        );
        assert_eq!(
            world.deliver_damage(id, 60.0),
            DamageOutcome::Destroyed { remaining: -20.0 }
        );
        assert!(!world.is_alive(id));
        assert_eq!(world.destroyed(), &[id]);

        assert_eq!(world.deliver_damage(id, 60.0), DamageOutcome::Ignored);
        assert_eq!(world.destroyed().len(), 1);
    }

    #[test]
    fn test_destroyed_enemy_no_longer_blocks_rays() {
        let (mut world, id) = world_with_enemy();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z);
        assert!(world.raycast(ray, 50.0, LayerMask::ENEMY).is_some());

        world.destroy(id);
        assert!(world.raycast(ray, 50.0, LayerMask::ENEMY).is_none());
        assert!(!world.destroy(id));
    }

    #[test]
    fn test_roster_defers_destruction_until_flush() {
        let (mut world, id) = world_with_enemy();
        {
            let (_, roster) = world.split_mut();
            assert!(roster.deliver_damage(id, 150.0).is_destroyed());
            assert_eq!(roster.deliver_damage(id, 1.0), DamageOutcome::Ignored);
            assert_eq!(roster.pending(), &[id]);
        }
        assert!(world.is_alive(id));

        assert_eq!(world.flush_destroyed(), 1);
        assert!(!world.is_alive(id));
        assert_eq!(world.flush_destroyed(), 0);
    }

    #[test]
    fn test_damage_to_wall_is_ignored() {
        let mut world = World::new();
        let wall = world.spawn_wall(Aabb::new(Vec3::ZERO, Vec3::ONE));
        assert_eq!(world.deliver_damage(wall, 10.0), DamageOutcome::Ignored);
        assert!(world.is_alive(wall));
    }
}
