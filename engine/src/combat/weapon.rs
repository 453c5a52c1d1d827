//! Hitscan Weapon
//!
//! A single-shot weapon resolved with one raycast. Damage falls off linearly
//! from `max_damage` at the muzzle to `min_damage` at `max_range`; nothing
//! beyond `max_range` is hit.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallrun_engine::combat::{WeaponComponent, WeaponConfig};
//! use wallrun_engine::physics::Ray;
//!
//! let mut weapon = WeaponComponent::new(WeaponConfig::default())?;
//!
//! // Each frame:
//! let muzzle = Ray::new(camera_position, controller.view_direction());
//! if let Some(shot) = weapon.update(&input, muzzle, &world, &mut roster) {
//!     log::info!("shot: {:?}", shot.outcome);
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, require_finite, require_positive};
use crate::input::{InputAction, InputSnapshot};
use crate::physics::{EntityId, LayerMask, PhysicsPort, Ray, RaycastHit};

use super::health::DamageOutcome;

/// Routes damage to the health of an entity.
///
/// Implemented by whatever owns the entity roster.
pub trait DamageSink {
    /// Apply `amount` damage to `target`.
    ///
    /// Unknown or already destroyed targets yield [`DamageOutcome::Ignored`].
    fn deliver_damage(&mut self, target: EntityId, amount: f32) -> DamageOutcome;
}

/// Visual/audio cue played every time the weapon fires (muzzle flash).
pub trait FireCue {
    fn play(&mut self);
}

/// Immutable weapon tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Damage at `max_range`
    pub min_damage: f32,
    /// Damage at point blank
    pub max_damage: f32,
    /// Ray length in meters
    pub max_range: f32,
    /// Layers the ray can hit
    pub target_layers: LayerMask,
}

static_assertions::assert_impl_all!(WeaponConfig: Copy, Send, Sync);

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            min_damage: 1.0,
            max_damage: 80.0,
            max_range: 50.0,
            target_layers: LayerMask::ENEMY,
        }
    }
}

impl WeaponConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("min_damage", self.min_damage)?;
        require_finite("max_damage", self.max_damage)?;
        require_positive("max_range", self.max_range)?;
        Ok(())
    }
}

/// Outcome of one trigger pull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotReport {
    /// What the ray hit, if anything
    pub hit: Option<RaycastHit>,
    /// Damage computed for the hit
    pub damage: Option<f32>,
    /// What the damage sink did with it
    pub outcome: Option<DamageOutcome>,
}

impl ShotReport {
    const MISS: ShotReport = ShotReport {
        hit: None,
        damage: None,
        outcome: None,
    };

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// Hitscan weapon with linear damage falloff.
pub struct WeaponComponent {
    config: WeaponConfig,
    fire_cue: Option<Box<dyn FireCue>>,
    shots_fired: u32,
}

impl fmt::Debug for WeaponComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeaponComponent")
            .field("config", &self.config)
            .field("fire_cue", &self.fire_cue.is_some())
            .field("shots_fired", &self.shots_fired)
            .finish()
    }
}

impl WeaponComponent {
    /// # Errors
    /// Returns [`ConfigError`] for a non-positive range or non-finite damage.
    pub fn new(config: WeaponConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            fire_cue: None,
            shots_fired: 0,
        })
    }

    /// Attach a cue played on every shot.
    pub fn with_fire_cue(mut self, cue: Box<dyn FireCue>) -> Self {
        self.fire_cue = Some(cue);
        self
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    /// Number of times the weapon has fired.
    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Damage dealt at `distance` meters.
    ///
    /// `lerp(max_damage, min_damage, distance / max_range)` with the factor
    /// clamped to `[0, 1]`.
    pub fn falloff_damage(&self, distance: f32) -> f32 {
        let t = (distance / self.config.max_range).clamp(0.0, 1.0);
        self.config.max_damage + (self.config.min_damage - self.config.max_damage) * t
    }

    /// Fire once if the fire button went down this tick.
    pub fn update<P, S>(
        &mut self,
        input: &InputSnapshot,
        muzzle: Ray,
        physics: &P,
        sink: &mut S,
    ) -> Option<ShotReport>
    where
        P: PhysicsPort + ?Sized,
        S: DamageSink + ?Sized,
    {
        input
            .pressed(InputAction::Fire)
            .then(|| self.on_fire_triggered(muzzle, physics, sink))
    }

    /// Fire one shot along `muzzle`.
    pub fn on_fire_triggered<P, S>(&mut self, muzzle: Ray, physics: &P, sink: &mut S) -> ShotReport
    where
        P: PhysicsPort + ?Sized,
        S: DamageSink + ?Sized,
    {
        self.shots_fired += 1;
        if let Some(cue) = self.fire_cue.as_mut() {
            cue.play();
        }

        let Some(hit) = physics.raycast(muzzle, self.config.max_range, self.config.target_layers)
        else {
            return ShotReport::MISS;
        };

        let damage = self.falloff_damage(hit.distance);
        let outcome = sink.deliver_damage(hit.entity, damage);
        log::debug!(
            "Hit {} at {:.2}m for {damage:.2} damage",
            hit.entity,
            hit.distance
        );

        ShotReport {
            hit: Some(hit),
            damage: Some(damage),
            outcome: Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Aabb, CollisionScene, Vec3};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        hits: HashMap<EntityId, Vec<f32>>,
    }

    impl DamageSink for RecordingSink {
        fn deliver_damage(&mut self, target: EntityId, amount: f32) -> DamageOutcome {
            self.hits.entry(target).or_default().push(amount);
            DamageOutcome::Applied { remaining: 0.0 }
        }
    }

    struct CountingCue(Rc<Cell<u32>>);

    impl FireCue for CountingCue {
        fn play(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn target_at(distance: f32, layers: LayerMask) -> CollisionScene {
        let mut scene = CollisionScene::new();
        // Front face exactly `distance` down -Z
        scene.insert(
            EntityId(1),
            Aabb::new(Vec3::new(-0.5, -0.5, -distance - 1.0), Vec3::new(0.5, 0.5, -distance)),
            layers,
        );
        scene
    }

    fn muzzle() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn test_falloff_endpoints_and_midpoint() {
        let weapon = WeaponComponent::new(WeaponConfig::default()).unwrap();
        assert_eq!(weapon.falloff_damage(0.0), 80.0);
        assert_eq!(weapon.falloff_damage(50.0), 1.0);
        assert!((weapon.falloff_damage(25.0) - 40.5).abs() < 1e-4);
    }

    #[test]
    fn test_falloff_is_monotone() {
        let weapon = WeaponComponent::new(WeaponConfig::default()).unwrap();
        let mut previous = weapon.falloff_damage(0.0);
        for step in 1..=100 {
            let damage = weapon.falloff_damage(step as f32 * 0.5);
            assert!(damage <= previous);
            previous = damage;
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let config = WeaponConfig {
            max_range: 0.0,
            ..Default::default()
        };
        assert!(WeaponComponent::new(config).is_err());
    }

    #[test]
    fn test_hit_delivers_falloff_damage() {
        let mut weapon = WeaponComponent::new(WeaponConfig::default()).unwrap();
        let scene = target_at(25.0, LayerMask::ENEMY);
        let mut sink = RecordingSink::default();

        let shot = weapon.on_fire_triggered(muzzle(), &scene, &mut sink);
        assert!(shot.is_hit());
        let dealt = sink.hits[&EntityId(1)][0];
        assert!((dealt - 40.5).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_and_wrong_layer_never_damage() {
        let mut weapon = WeaponComponent::new(WeaponConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        let far = target_at(50.5, LayerMask::ENEMY);
        assert!(!weapon.on_fire_triggered(muzzle(), &far, &mut sink).is_hit());

        let wall = target_at(10.0, LayerMask::WORLD);
        assert!(!weapon.on_fire_triggered(muzzle(), &wall, &mut sink).is_hit());

        assert!(sink.hits.is_empty());
        assert_eq!(weapon.shots_fired(), 2);
    }

    #[test]
    fn test_update_fires_on_press_edge_only() {
        let mut weapon = WeaponComponent::new(WeaponConfig::default()).unwrap();
        let scene = CollisionScene::new();
        let mut sink = RecordingSink::default();

        let held = InputSnapshot::new().holding(InputAction::Fire);
        assert!(weapon.update(&held, muzzle(), &scene, &mut sink).is_none());

        let pressed = InputSnapshot::new().pressing(InputAction::Fire);
        assert!(weapon.update(&pressed, muzzle(), &scene, &mut sink).is_some());
        assert_eq!(weapon.shots_fired(), 1);
    }

    #[test]
    fn test_fire_cue_plays_on_miss() {
        let plays = Rc::new(Cell::new(0));
        let mut weapon = WeaponComponent::new(WeaponConfig::default())
            .unwrap()
            .with_fire_cue(Box::new(CountingCue(plays.clone())));
        let mut sink = RecordingSink::default();

        weapon.on_fire_triggered(muzzle(), &CollisionScene::new(), &mut sink);
        assert_eq!(plays.get(), 1);
    }
}
