//! Transition classification
//!
//! Decides whether an index change is rendered as an instant snap or an eased
//! animation, and derives the animation duration from travel distance. The
//! distance-adaptive duration is the core visual-quality decision: a one-line
//! advance should feel snappy, a multi-line jump deliberate without feeling
//! slow.

use super::presets::AnimationPreset;
use super::types::{AnimationIntent, ChangeTrigger, IntentKind};

/// Below this travel distance an animation would stutter rather than read as
/// motion, so sequential advances snap instead.
pub const MIN_DELTA_NO_ANIM_PX: f32 = 30.0;

/// Classify an index change into an animation intent.
///
/// `Seek` and `LayoutInvalidated` always snap: a discontinuous jump or a
/// re-alignment to the same line must not sweep the surface across unrelated
/// content. `SequentialAdvance` animates unless the travel distance is below
/// [`MIN_DELTA_NO_ANIM_PX`].
pub fn classify(
    trigger: ChangeTrigger,
    target_offset_px: f32,
    delta_px: f32,
    preset: &AnimationPreset,
) -> AnimationIntent {
    match trigger {
        ChangeTrigger::Seek | ChangeTrigger::LayoutInvalidated => {
            AnimationIntent::instant(target_offset_px)
        }
        ChangeTrigger::SequentialAdvance => {
            if delta_px.abs() < MIN_DELTA_NO_ANIM_PX {
                AnimationIntent::instant(target_offset_px)
            } else {
                AnimationIntent {
                    target_offset_px,
                    kind: IntentKind::Animated,
                    duration_ms: duration_for_distance(delta_px, preset),
                    easing: preset.easing,
                }
            }
        }
    }
}

/// Distance-adaptive duration: `clamp(base + k * |delta|, min, max)`
pub fn duration_for_distance(delta_px: f32, preset: &AnimationPreset) -> u64 {
    let raw = preset.duration_base_ms + preset.duration_k * delta_px.abs();
    raw.clamp(preset.duration_min_ms, preset.duration_max_ms)
        .round() as u64
}
