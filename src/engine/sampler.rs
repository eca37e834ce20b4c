//! Position sampling and seek detection
//!
//! The sampler runs once per animation frame on a pull accessor: it never
//! subscribes to position updates, because promoting a value that changes
//! many times per second into reactive state would force a re-render on every
//! sample. Downstream work is triggered only when the resolved line index
//! actually differs from the previous frame's.

use std::time::Instant;

use super::resolver;
use super::types::{ChangeTrigger, LineChange, LyricLine};

/// Forward position motion may exceed elapsed wall time by this much and
/// still count as normal playback (timer jitter, frame drops, small rate
/// differences). Anything beyond it is a seek.
pub const DEFAULT_SEEK_SLACK_MS: f64 = 1000.0;

/// Per-frame position sampler
#[derive(Debug)]
pub struct PositionSampler {
    last_index: Option<usize>,
    last_position_ms: Option<f64>,
    last_sample_at: Option<Instant>,
    seek_slack_ms: f64,
}

impl PositionSampler {
    pub fn new(seek_slack_ms: f64) -> Self {
        Self {
            last_index: None,
            last_position_ms: None,
            last_sample_at: None,
            seek_slack_ms,
        }
    }

    /// Feed one frame's position sample.
    ///
    /// Returns a [`LineChange`] only when the resolved index differs from the
    /// previous frame's; otherwise the frame costs a binary search and
    /// nothing else.
    pub fn sample(
        &mut self,
        position_ms: f64,
        lines: &[LyricLine],
        now: Instant,
    ) -> Option<LineChange> {
        let index = resolver::resolve(position_ms, lines);
        let trigger = self.classify(position_ms, now);

        let previous = self.last_index;
        self.last_position_ms = Some(position_ms);
        self.last_sample_at = Some(now);

        if index == previous {
            return None;
        }
        self.last_index = index;

        Some(LineChange {
            index,
            previous,
            trigger,
        })
    }

    /// Distinguish natural forward playback from a jump, using the implied
    /// position delta between consecutive samples.
    fn classify(&self, position_ms: f64, now: Instant) -> ChangeTrigger {
        let (Some(last_pos), Some(last_at)) = (self.last_position_ms, self.last_sample_at) else {
            // First sample after a reset: align instantly, as on track start
            return ChangeTrigger::Seek;
        };

        let position_delta = position_ms - last_pos;
        if position_delta < 0.0 {
            return ChangeTrigger::Seek;
        }

        let elapsed_ms = now.saturating_duration_since(last_at).as_secs_f64() * 1000.0;
        if position_delta > elapsed_ms + self.seek_slack_ms {
            ChangeTrigger::Seek
        } else {
            ChangeTrigger::SequentialAdvance
        }
    }

    /// Index resolved on the most recent frame
    pub fn current_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Clear all history; the next sample classifies as a seek
    pub fn reset(&mut self) {
        self.last_index = None;
        self.last_position_ms = None;
        self.last_sample_at = None;
    }
}

impl Default for PositionSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEEK_SLACK_MS)
    }
}
