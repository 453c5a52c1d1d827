//! Error types shared across the engine.

use thiserror::Error;

/// Errors raised while validating or loading tuning configuration.
///
/// Every component constructor runs `validate()` first.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// A value that must be zero or greater was negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// A value was NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// Crouching would make the collider taller than standing.
    #[error("crouch height {crouch} exceeds standing height {standing}")]
    CrouchTallerThanStanding { crouch: f32, standing: f32 },

    /// A field of view outside the open interval (0, 180) degrees.
    #[error("`{field}` must be within (0, 180) degrees, got {value}")]
    FovOutOfRange { field: &'static str, value: f32 },

    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for the expected schema.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

/// Check that `value` is finite and zero or greater.
pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

/// Check that `value` is neither NaN nor infinite.
pub(crate) fn require_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    Ok(())
}

/// Check that a field of view in degrees lies strictly between 0 and 180.
pub(crate) fn require_fov(field: &'static str, value: f32) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value <= 0.0 || value >= 180.0 {
        return Err(ConfigError::FovOutOfRange { field, value });
    }
    Ok(())
}
