//! Animation preset registry
//!
//! A fixed catalog mapping a preset identifier to easing and duration
//! coefficients. Read-only at runtime; the selected id is persisted in user
//! settings and swapping it only affects future-computed intents.

use serde::{Deserialize, Serialize};

use super::easing::EasingCurve;

/// Duration and easing parameters for animated alignment
///
/// Animated durations are computed as
/// `clamp(duration_base_ms + duration_k * |delta_px|, duration_min_ms, duration_max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPreset {
    pub easing: EasingCurve,
    pub duration_base_ms: f32,
    /// Extra milliseconds per pixel of travel
    pub duration_k: f32,
    pub duration_min_ms: f32,
    pub duration_max_ms: f32,
}

/// User-selectable animation preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPresetId {
    /// Balanced default: snappy single-line advances, deliberate long jumps
    #[default]
    Smooth,
    /// Short durations, sharp deceleration
    Snappy,
    /// Long, floaty transitions
    Glide,
}

impl AnimationPresetId {
    /// All presets, in display order
    pub fn all() -> [Self; 3] {
        [Self::Smooth, Self::Snappy, Self::Glide]
    }

    /// Display name for settings UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Smooth => "Smooth",
            Self::Snappy => "Snappy",
            Self::Glide => "Glide",
        }
    }

    /// Resolve the parameter set for this preset
    pub fn params(&self) -> AnimationPreset {
        match self {
            Self::Smooth => AnimationPreset {
                easing: EasingCurve::EaseInOut,
                duration_base_ms: 350.0,
                duration_k: 1.0,
                duration_min_ms: 450.0,
                duration_max_ms: 1000.0,
            },
            Self::Snappy => AnimationPreset {
                easing: EasingCurve::EaseOut,
                duration_base_ms: 200.0,
                duration_k: 0.8,
                duration_min_ms: 250.0,
                duration_max_ms: 600.0,
            },
            Self::Glide => AnimationPreset {
                easing: EasingCurve::EaseOutQuint,
                duration_base_ms: 500.0,
                duration_k: 1.2,
                duration_min_ms: 600.0,
                duration_max_ms: 1400.0,
            },
        }
    }
}

impl std::fmt::Display for AnimationPresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
