//! Combat Tests - Falloff, Hitscan and Health
//!
//! Tests the weapon against the reference world and the health rules.

use std::collections::HashMap;

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use wallrun_engine::combat::{
    DamageOutcome, DamageSink, HealthComponent, WeaponComponent, WeaponConfig,
};
use wallrun_engine::input::{InputAction, InputSnapshot};
use wallrun_engine::physics::{Aabb, EntityId, LayerMask, Ray};
use wallrun_engine::world::World;

/// Sink that only records what it was asked to do.
#[derive(Default)]
struct CountingSink {
    calls: HashMap<EntityId, u32>,
}

impl DamageSink for CountingSink {
    fn deliver_damage(&mut self, target: EntityId, _amount: f32) -> DamageOutcome {
        *self.calls.entry(target).or_default() += 1;
        DamageOutcome::Ignored
    }
}

fn weapon() -> WeaponComponent {
    WeaponComponent::new(WeaponConfig::default()).unwrap()
}

fn forward_from_origin() -> Ray {
    Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z)
}

/// Enemy whose front face is `distance` meters down -Z from the origin.
fn enemy_at(world: &mut World, distance: f32, max_health: f32) -> EntityId {
    world
        .spawn_enemy(
            "Target",
            Vec3::new(0.0, 1.0, -distance - 0.5),
            Vec3::splat(0.5),
            max_health,
        )
        .unwrap()
}

// ============================================================================
// Falloff
// ============================================================================

#[rstest]
#[case(0.0, 80.0)]
#[case(12.5, 60.25)]
#[case(25.0, 40.5)]
#[case(37.5, 20.75)]
#[case(50.0, 1.0)]
fn test_falloff_is_linear(#[case] distance: f32, #[case] expected: f32) {
    assert_relative_eq!(weapon().falloff_damage(distance), expected, epsilon = 1e-4);
}

#[test]
fn test_falloff_monotone_non_increasing() {
    let weapon = weapon();
    let samples: Vec<f32> = (0..=500).map(|i| weapon.falloff_damage(i as f32 * 0.1)).collect();
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn test_custom_tuning_endpoints() {
    let weapon = WeaponComponent::new(WeaponConfig {
        min_damage: 10.0,
        max_damage: 30.0,
        max_range: 20.0,
        target_layers: LayerMask::ENEMY,
    })
    .unwrap();
    assert_eq!(weapon.falloff_damage(0.0), 30.0);
    assert_eq!(weapon.falloff_damage(20.0), 10.0);
    assert_relative_eq!(weapon.falloff_damage(5.0), 25.0, epsilon = 1e-5);
}

// ============================================================================
// Hitscan against the world
// ============================================================================

#[test]
fn test_shot_at_25m_deals_40_5() {
    let mut world = World::new();
    let enemy = enemy_at(&mut world, 25.0, 100.0);
    let mut weapon = weapon();

    let (scene, roster) = world.split_mut();
    let shot = weapon.on_fire_triggered(forward_from_origin(), scene, roster);

    assert_relative_eq!(shot.damage.unwrap(), 40.5, epsilon = 1e-3);
    world.flush_destroyed();
    assert_relative_eq!(world.health(enemy).unwrap().current(), 59.5, epsilon = 1e-3);
}

#[rstest]
#[case::beyond_range(LayerMask::ENEMY, 50.5)]
#[case::wrong_layer(LayerMask::WORLD, 10.0)]
fn test_shot_never_damages(#[case] layers: LayerMask, #[case] distance: f32) {
    let mut world = World::new();
    let target = if layers == LayerMask::ENEMY {
        enemy_at(&mut world, distance, 100.0)
    } else {
        world.spawn_wall(Aabb::from_center(
            Vec3::new(0.0, 1.0, -distance - 0.5),
            Vec3::splat(0.5),
        ))
    };

    let mut sink = CountingSink::default();
    let shot = weapon().on_fire_triggered(forward_from_origin(), &world, &mut sink);

    assert!(!shot.is_hit());
    assert!(sink.calls.is_empty());
    assert!(world.is_alive(target));
}

#[test]
fn test_miss_into_empty_world() {
    let world = World::new();
    let mut sink = CountingSink::default();
    let mut weapon = weapon();

    let shot = weapon.on_fire_triggered(forward_from_origin(), &world, &mut sink);
    assert_eq!(shot.hit, None);
    assert_eq!(shot.damage, None);
    assert_eq!(weapon.shots_fired(), 1);
}

#[test]
fn test_walls_do_not_occlude_enemy_layer_shots() {
    let mut world = World::new();
    world.spawn_wall(Aabb::from_center(Vec3::new(0.0, 1.0, -5.0), Vec3::new(2.0, 2.0, 0.1)));
    let enemy = enemy_at(&mut world, 10.0, 100.0);
    let mut sink = CountingSink::default();

    let shot = weapon().on_fire_triggered(forward_from_origin(), &world, &mut sink);
    assert_eq!(shot.hit.map(|hit| hit.entity), Some(enemy));
    assert_eq!(sink.calls.get(&enemy), Some(&1));
}

#[test]
fn test_nearest_enemy_takes_the_hit() {
    let mut world = World::new();
    let far = enemy_at(&mut world, 20.0, 100.0);
    let near = enemy_at(&mut world, 5.0, 100.0);

    let (scene, roster) = world.split_mut();
    weapon().on_fire_triggered(forward_from_origin(), scene, roster);

    assert!(world.health(near).unwrap().current() < 100.0);
    assert_eq!(world.health(far).unwrap().current(), 100.0);
}

#[test]
fn test_update_fires_only_on_press_edge() {
    let mut world = World::new();
    let enemy = enemy_at(&mut world, 5.0, 1000.0);
    let mut weapon = weapon();

    let held = InputSnapshot::new().holding(InputAction::Fire);
    let pressed = InputSnapshot::new().pressing(InputAction::Fire);

    for input in [pressed, held, held, pressed] {
        let (scene, roster) = world.split_mut();
        weapon.update(&input, forward_from_origin(), scene, roster);
    }

    assert_eq!(weapon.shots_fired(), 2);
    let dealt = 1000.0 - world.health(enemy).unwrap().current();
    assert_relative_eq!(dealt, 2.0 * weapon.falloff_damage(5.0), epsilon = 1e-3);
}

// ============================================================================
// Health
// ============================================================================

#[test]
fn test_two_hits_of_sixty_destroy_at_minus_twenty() {
    let mut health = HealthComponent::new(100.0);

    assert_eq!(health.take_damage(60.0), DamageOutcome::Applied { remaining: 40.0 });
    assert!(health.is_alive());

    assert_eq!(health.take_damage(60.0), DamageOutcome::Destroyed { remaining: -20.0 });
    assert!(health.is_destroyed());
    assert_eq!(health.current(), -20.0);
}

#[rstest]
#[case(100.0, 0.0, 100.0)]
#[case(100.0, 30.0, 70.0)]
#[case(100.0, 99.5, 0.5)]
#[case(50.0, 12.25, 37.75)]
fn test_non_lethal_damage_subtracts(#[case] max: f32, #[case] amount: f32, #[case] remaining: f32) {
    let mut health = HealthComponent::new(max);
    assert_eq!(health.take_damage(amount), DamageOutcome::Applied { remaining });
}

#[test]
fn test_destruction_requested_exactly_once_through_world() {
    let mut world = World::new();
    let enemy = enemy_at(&mut world, 3.0, 100.0);

    let outcomes: Vec<DamageOutcome> = (0..4).map(|_| world.deliver_damage(enemy, 60.0)).collect();

    assert_eq!(outcomes.iter().filter(|o| o.is_destroyed()).count(), 1);
    assert_eq!(outcomes[2], DamageOutcome::Ignored);
    assert_eq!(world.destroyed(), &[enemy]);
    assert_eq!(world.enemy_count(), 0);
}

#[test]
fn test_healing_is_not_clamped() {
    let mut health = HealthComponent::new(100.0);
    health.take_damage(-50.0);
    assert_eq!(health.current(), 150.0);
    assert_eq!(health.max(), 100.0);
}
