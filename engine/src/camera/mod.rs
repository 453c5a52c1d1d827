//! Camera Module
//!
//! First-person look and field-of-view handling.
//! This module is window-system agnostic - it only deals with camera state and math;
//! the host owns the actual camera through the [`CameraRig`] port.

pub mod fov;
pub mod fps_controller;

pub use fov::{CameraRig, FovTween, lerp_clamped};
pub use fps_controller::{DEFAULT_PITCH_LIMIT, FpsLook};
