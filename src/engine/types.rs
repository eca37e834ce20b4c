//! Core data types for the sync engine
//!
//! - `LyricLine` / `ParsedLyrics` - immutable timed line data, replaced wholesale on track change
//! - `LineGeometry` - per-line measured layout, recomputed on reflow
//! - `AnimationIntent` - the unit of work handed to the scheduler
//! - `EngineState` - scheduler state machine
//! - `LineChange` / `ChangeTrigger` - discrete index-change events from the sampler

use std::collections::HashMap;

use super::easing::EasingCurve;

/// A single timed lyric line
///
/// Produced by an external lyric loader; the engine never mutates lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// Start timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Display text
    pub text: String,
}

impl LyricLine {
    pub fn new(timestamp_ms: u64, text: impl Into<String>) -> Self {
        Self {
            timestamp_ms,
            text: text.into(),
        }
    }
}

/// A full set of parsed lyrics for one track
///
/// Contract: `lines` is sorted non-decreasing by `timestamp_ms`. Sortedness is
/// the loader's responsibility; the resolver assumes it and degrades gracefully
/// (returns "not started") only for *empty* input.
#[derive(Debug, Clone, Default)]
pub struct ParsedLyrics {
    pub lines: Vec<LyricLine>,
    pub metadata: HashMap<String, String>,
}

impl ParsedLyrics {
    pub fn new(lines: Vec<LyricLine>) -> Self {
        Self {
            lines,
            metadata: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check the sortedness contract (debug aid for loaders, not enforced at runtime)
    pub fn is_sorted(&self) -> bool {
        self.lines
            .windows(2)
            .all(|w| w[0].timestamp_ms <= w[1].timestamp_ms)
    }
}

/// Measured geometry for one rendered line
///
/// Ephemeral: recomputed whenever the line set, viewport, or font sizes change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    /// Vertical center of the line relative to the top of the scrollable content
    pub center_offset_px: f32,
}

/// How a dispatched alignment is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    /// Apply the target offset immediately
    Instant,
    /// Eased transition over `duration_ms`
    Animated,
}

/// The unit of work handed to the animation scheduler
///
/// Created fresh for every resolved index change or layout invalidation.
/// Superseded intents are discarded, never queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationIntent {
    pub target_offset_px: f32,
    pub kind: IntentKind,
    /// Zero when `kind` is `Instant`
    pub duration_ms: u64,
    pub easing: EasingCurve,
}

impl AnimationIntent {
    /// An instant snap to `target_offset_px`
    pub fn instant(target_offset_px: f32) -> Self {
        Self {
            target_offset_px,
            kind: IntentKind::Instant,
            duration_ms: 0,
            easing: EasingCurve::Linear,
        }
    }
}

/// Scheduler state machine, tracked per scroll surface
///
/// `Idle -> AligningInstant -> Idle` completes within one dispatch;
/// `Idle -> AligningAnimated -> Idle` completes when the transition finishes
/// or is superseded. Only the scheduler transitions this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    AligningInstant,
    AligningAnimated,
}

/// What caused a line-index change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTrigger {
    /// Playback crossed into the next line naturally
    SequentialAdvance,
    /// Discontinuous position change (user-initiated jump)
    Seek,
    /// Viewport/font/content change forcing re-alignment to the same index
    LayoutInvalidated,
}

/// A discrete index-change event emitted by the position sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    /// Newly resolved index, `None` before the first line starts
    pub index: Option<usize>,
    /// Index resolved on the previous frame
    pub previous: Option<usize>,
    pub trigger: ChangeTrigger,
}
