//! Hit points for damageable entities.

use std::fmt;

/// Result of applying damage to a [`HealthComponent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Damage was applied and the entity survives.
    Applied { remaining: f32 },
    /// Damage was applied and brought the entity to zero or below.
    /// Reported once per entity; the host should destroy it.
    Destroyed { remaining: f32 },
    /// The target was already destroyed or does not exist.
    Ignored,
}

impl DamageOutcome {
    /// Whether this outcome asks for destruction.
    pub fn is_destroyed(&self) -> bool {
        matches!(self, DamageOutcome::Destroyed { .. })
    }
}

/// Current and maximum hit points of one entity.
///
/// Health is not clamped: negative damage heals, and may push `current`
/// above `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthComponent {
    name: String,
    current: f32,
    max: f32,
    destroyed: bool,
}

impl HealthComponent {
    /// Full health at `max`.
    pub fn new(max: f32) -> Self {
        Self {
            name: String::from("enemy"),
            current: max,
            max,
            destroyed: false,
        }
    }

    /// Set the name used in log messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Subtract `amount` hit points.
    ///
    /// The first call that leaves `current <= 0` returns
    /// [`DamageOutcome::Destroyed`]; every call after that is ignored.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.destroyed {
            return DamageOutcome::Ignored;
        }

        self.current -= amount;
        log::debug!(
            "{} took {amount} damage! Current HP: {}",
            self.name,
            self.current
        );

        if self.current <= 0.0 {
            self.destroyed = true;
            log::info!("{} has been destroyed!", self.name);
            DamageOutcome::Destroyed {
                remaining: self.current,
            }
        } else {
            DamageOutcome::Applied {
                remaining: self.current,
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fraction of max health remaining (0.0 to 1.0 for unhealed entities).
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl fmt::Display for HealthComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{} HP)", self.name, self.current, self.max)
    }
}
