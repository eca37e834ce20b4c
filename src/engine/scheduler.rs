//! Single-writer animation scheduler
//!
//! The serialization point for all offset writes: every alignment flows
//! through [`AnimationScheduler::dispatch`], and nothing else mutates the
//! scroll surface's offset. Dispatching a new intent is itself the
//! cancellation mechanism for any in-flight transition; there is no separate
//! cancellation token.
//!
//! Time is injected as `Instant` arguments rather than read internally, so
//! transitions are deterministic under test.

use std::time::{Duration, Instant};

use super::easing::EasingCurve;
use super::types::{AnimationIntent, EngineState, IntentKind};

/// An in-flight eased transition
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: EasingCurve,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn sample(&self, now: Instant) -> f32 {
        let eased = self.easing.sample(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Sole writer of the scroll surface's visual offset
///
/// Invariants:
/// - at most one transition is active at any instant;
/// - the committed offset always tracks the most recently dispatched intent
///   that has not been superseded.
#[derive(Debug)]
pub struct AnimationScheduler {
    state: EngineState,
    /// Last offset written to the surface
    offset_px: f32,
    active: Option<Transition>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            offset_px: 0.0,
            active: None,
        }
    }

    /// Dispatch an alignment intent, superseding any in-flight transition.
    ///
    /// An interrupted transition's current sampled position becomes the new
    /// transition's start point, so motion resumes from wherever it was cut
    /// off instead of resetting to the original start.
    pub fn dispatch(&mut self, intent: AnimationIntent, now: Instant) {
        let start = self.current_offset(now);
        self.active = None;

        match intent.kind {
            IntentKind::Instant => {
                self.state = EngineState::AligningInstant;
                self.offset_px = intent.target_offset_px;
                // No asynchronous completion to await
                self.state = EngineState::Idle;
            }
            IntentKind::Animated => {
                if intent.duration_ms == 0 || (intent.target_offset_px - start).abs() < f32::EPSILON
                {
                    self.offset_px = intent.target_offset_px;
                    self.state = EngineState::Idle;
                    return;
                }
                self.offset_px = start;
                self.active = Some(Transition {
                    from: start,
                    to: intent.target_offset_px,
                    started: now,
                    duration: Duration::from_millis(intent.duration_ms),
                    easing: intent.easing,
                });
                self.state = EngineState::AligningAnimated;
            }
        }
    }

    /// Advance the active transition and commit the resulting offset.
    ///
    /// Call once per animation frame. Returns the committed offset.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let Some(transition) = self.active {
            self.offset_px = transition.sample(now);
            if transition.is_complete(now) {
                self.offset_px = transition.to;
                self.active = None;
                self.state = EngineState::Idle;
            }
        }
        self.offset_px
    }

    /// The offset the surface would show right now, including mid-transition
    /// positions that have not been committed by `tick` yet
    pub fn current_offset(&self, now: Instant) -> f32 {
        match self.active {
            Some(transition) => transition.sample(now),
            None => self.offset_px,
        }
    }

    /// Last committed offset
    pub fn offset(&self) -> f32 {
        self.offset_px
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any in-flight transition and return to `Idle` without moving the
    /// surface. Used on track change, before the first intent of the new
    /// track arrives.
    pub fn reset(&mut self) {
        self.active = None;
        self.state = EngineState::Idle;
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
