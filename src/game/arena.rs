//! Arena
//!
//! Headless host loop wiring the engine components together: the input
//! sampler, the locomotion controller, the weapon and the reference world.
//!
//! Each step:
//! 1. Sample input into an immutable snapshot
//! 2. Tick locomotion against the world
//! 3. Fire the weapon from the eye along the view direction
//! 4. Remove entities destroyed this step

use glam::Vec3;

use crate::combat::{FireCue, ShotReport, WeaponComponent};
use crate::error::ConfigError;
use crate::input::{InputSampler, InputSnapshot};
use crate::physics::{Aabb, EntityId, Ray};
use crate::player::{LocomotionController, LocomotionReport};
use crate::world::{KinematicBody, SimCamera, World};

use super::config::GameConfig;

/// Half extents of a spawned enemy's box.
pub const ENEMY_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 1.0, 0.5);

/// Muzzle flash stand-in that only logs.
#[derive(Debug, Default)]
pub struct LoggedMuzzleFlash;

impl FireCue for LoggedMuzzleFlash {
    fn play(&mut self) {
        log::trace!("Muzzle flash");
    }
}

/// What one arena step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub locomotion: LocomotionReport,
    /// Present when the weapon fired this step
    pub shot: Option<ShotReport>,
    /// Entities removed at the end of the step
    pub destroyed: usize,
}

/// A player in a small arena of walls and enemies.
#[derive(Debug)]
pub struct Arena {
    world: World,
    body: KinematicBody,
    camera: SimCamera,
    sampler: InputSampler,
    player: LocomotionController,
    weapon: WeaponComponent,
    enemy_health: f32,
    ticks: u64,
}

impl Arena {
    /// Build an empty arena with the player standing at the origin.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if any part of the config is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut camera = SimCamera::default();
        let player = LocomotionController::new(config.locomotion, &mut camera)?;
        let weapon =
            WeaponComponent::new(config.weapon)?.with_fire_cue(Box::new(LoggedMuzzleFlash));
        let body = KinematicBody::standing_at(Vec3::ZERO, config.locomotion.standing_height, 0.0);

        Ok(Self {
            world: World::new(),
            body,
            camera,
            sampler: InputSampler::with_bindings(config.bindings),
            player,
            weapon,
            enemy_health: config.enemy_health,
            ticks: 0,
        })
    }

    /// Spawn an enemy standing on the floor at `spot`.
    pub fn spawn_enemy(&mut self, name: &str, spot: Vec3) -> Result<EntityId, ConfigError> {
        let center = Vec3::new(spot.x, ENEMY_HALF_EXTENTS.y, spot.z);
        self.world
            .spawn_enemy(name, center, ENEMY_HALF_EXTENTS, self.enemy_health)
    }

    /// Spawn a wall.
    pub fn spawn_wall(&mut self, bounds: Aabb) -> EntityId {
        self.world.spawn_wall(bounds)
    }

    /// Raw input goes here between steps.
    pub fn sampler_mut(&mut self) -> &mut InputSampler {
        &mut self.sampler
    }

    /// Advance one tick using the sampled input.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let input = self.sampler.snapshot();
        self.step_with(dt, &input)
    }

    /// Advance one tick with an explicit snapshot.
    pub fn step_with(&mut self, dt: f32, input: &InputSnapshot) -> StepReport {
        self.ticks += 1;

        let locomotion = self
            .player
            .tick(dt, input, &mut self.body, &mut self.camera, &self.world);

        let muzzle = self.muzzle();
        let (scene, roster) = self.world.split_mut();
        let shot = self.weapon.update(input, muzzle, scene, roster);
        if let Some(shot) = &shot {
            log::debug!("Tick {}: fired, outcome {:?}", self.ticks, shot.outcome);
        }

        let destroyed = self.world.flush_destroyed();

        StepReport {
            locomotion,
            shot,
            destroyed,
        }
    }

    /// Ray from the eye along the view direction.
    pub fn muzzle(&self) -> Ray {
        Ray::new(self.body.eye_position(), self.player.view_direction())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn camera(&self) -> &SimCamera {
        &self.camera
    }

    pub fn player(&self) -> &LocomotionController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut LocomotionController {
        &mut self.player
    }

    pub fn weapon(&self) -> &WeaponComponent {
        &self.weapon
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
