//! Lyric playback synchronization and scroll engine
//!
//! Given a pull-based playback position source and a sorted list of timestamped
//! lyric lines, the engine continuously determines which line is current,
//! computes the scroll offset that centers it, and applies a transition whose
//! kind and duration depend on the nature of the change.
//!
//! ## Key components
//!
//! - `resolver`: binary search from position to line index
//! - `geometry`: responsive font/layout profile + resize debouncing
//! - `target`: per-line measurement and centered scroll targets
//! - `classifier`: instant vs. animated, distance-adaptive durations
//! - `presets`: the fixed animation preset catalog
//! - `scheduler`: the single writer of the surface offset
//! - `sampler`: per-frame position polling with seek detection
//!
//! ## Hot path vs. cold path
//!
//! The playback position changes many times per second, so it is read through
//! a pull accessor on every animation frame and never stored in reactive
//! state. Only discrete index changes propagate outward, via
//! [`LyricSyncEngine::current_line`] after a tick. The per-frame cost of an
//! unchanged index is one binary search.

pub mod classifier;
pub mod easing;
pub mod geometry;
pub mod presets;
pub mod resolver;
pub mod sampler;
pub mod scheduler;
pub mod target;
pub mod types;

pub use classifier::MIN_DELTA_NO_ANIM_PX;
pub use easing::EasingCurve;
pub use geometry::{ResizeDebouncer, ResponsiveFontProfile, SizeTier, Viewport};
pub use presets::{AnimationPreset, AnimationPresetId};
pub use sampler::PositionSampler;
pub use scheduler::AnimationScheduler;
pub use types::{
    AnimationIntent, ChangeTrigger, EngineState, IntentKind, LineChange, LineGeometry, LyricLine,
    ParsedLyrics,
};

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::player::PositionSource;

/// Engine configuration
///
/// Distances are logical pixels, times are milliseconds unless noted.
#[derive(Debug, Clone)]
pub struct SyncEngineConfig {
    /// Animation preset applied to future-computed intents
    pub preset: AnimationPresetId,
    /// Forward position slack tolerated before a change counts as a seek
    pub seek_slack_ms: f64,
    /// Quiet period before a resize stream is considered settled
    pub resize_settle: Duration,
}

impl Default for SyncEngineConfig {
    fn default() -> Self {
        Self {
            preset: AnimationPresetId::default(),
            seek_slack_ms: sampler::DEFAULT_SEEK_SLACK_MS,
            resize_settle: Duration::from_millis(120),
        }
    }
}

/// The full synchronization engine for one scroll surface
///
/// Owns the per-frame flow: settle pending resizes, sample the playback
/// position, resolve and classify index changes, and dispatch alignment
/// intents to the single-writer scheduler. `tick` is driven by the host's
/// animation-frame callback (~60 Hz, best-effort, skippable under load).
pub struct LyricSyncEngine {
    config: SyncEngineConfig,
    preset: AnimationPresetId,
    lyrics: Arc<ParsedLyrics>,
    sampler: PositionSampler,
    scheduler: AnimationScheduler,
    debouncer: ResizeDebouncer,
    viewport: Option<Viewport>,
    profile: Option<ResponsiveFontProfile>,
    /// Host-measured per-line heights; absent, heights fall back to the
    /// profile's uniform line height
    measured_heights: Option<Vec<f32>>,
    centers: Vec<LineGeometry>,
    previous_index: Option<usize>,
    /// Set when an alignment could not be applied because geometry was
    /// unmeasurable; retried every frame until it sticks
    pending_realign: bool,
}

impl LyricSyncEngine {
    pub fn new(config: SyncEngineConfig) -> Self {
        Self {
            preset: config.preset,
            sampler: PositionSampler::new(config.seek_slack_ms),
            scheduler: AnimationScheduler::new(),
            debouncer: ResizeDebouncer::new(config.resize_settle),
            config,
            lyrics: Arc::new(ParsedLyrics::default()),
            viewport: None,
            profile: None,
            measured_heights: None,
            centers: Vec::new(),
            previous_index: None,
            pending_realign: false,
        }
    }

    /// Replace the lyric set wholesale (track change).
    ///
    /// Resets the sampler and scheduler to `Idle` and clears the resolved
    /// index, per the track-change contract.
    pub fn set_lyrics(&mut self, lyrics: Arc<ParsedLyrics>) {
        if !lyrics.is_sorted() {
            // Contract violation by the loader; the resolver degrades rather
            // than raising, but it is worth a trace.
            tracing::warn!(lines = lyrics.len(), "lyrics are not sorted by timestamp");
        }
        tracing::info!(lines = lyrics.len(), "lyrics replaced");

        self.lyrics = lyrics;
        self.measured_heights = None;
        self.previous_index = None;
        self.pending_realign = false;
        self.sampler.reset();
        self.scheduler.reset();
        self.rebuild_geometry();
    }

    /// Record a viewport resize; the profile recomputes once movement settles
    pub fn handle_resize(&mut self, viewport: Viewport, now: Instant) {
        self.debouncer.push(viewport, now);
    }

    /// Apply a settled viewport immediately, bypassing the debounce window.
    /// Used for the initial layout, where there is no movement to wait out.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.apply_viewport(viewport);
    }

    /// Feed real measured line heights from the host's layout pass.
    ///
    /// Forces a re-alignment to the current index on the next tick.
    pub fn set_measured_heights(&mut self, heights: Vec<f32>) {
        self.measured_heights = Some(heights);
        self.rebuild_geometry();
        self.pending_realign = true;
    }

    /// Swap the animation preset. In-flight transitions are unaffected; only
    /// future-computed intents use the new parameters.
    pub fn set_preset(&mut self, preset: AnimationPresetId) {
        if self.preset != preset {
            tracing::debug!(%preset, "animation preset changed");
            self.preset = preset;
        }
    }

    /// Run one animation frame. Returns the committed scroll offset.
    pub fn tick(&mut self, position: &dyn PositionSource, now: Instant) -> f32 {
        if let Some(viewport) = self.debouncer.settled(now) {
            self.apply_viewport(viewport);
        }

        let change = self
            .sampler
            .sample(position.position_ms(), &self.lyrics.lines, now);

        if let Some(change) = change {
            self.previous_index = change.previous;
            if change.trigger == ChangeTrigger::Seek {
                tracing::debug!(from = ?change.previous, to = ?change.index, "seek detected");
            }
            match change.index {
                Some(index) => self.align_to(index, change.trigger, now),
                // Seeked back before the first line: nothing to center until
                // a line starts
                None => self.pending_realign = false,
            }
        } else if self.pending_realign {
            if let Some(index) = self.sampler.current_index() {
                self.align_to(index, ChangeTrigger::LayoutInvalidated, now);
            } else {
                self.pending_realign = false;
            }
        }

        self.scheduler.tick(now)
    }

    /// Compute and dispatch an alignment for `index`, or mark it for retry
    /// when the surface is not measurable yet.
    fn align_to(&mut self, index: usize, trigger: ChangeTrigger, now: Instant) {
        let viewport_height = self.viewport.map(|v| v.height).unwrap_or(0.0);
        match target::scroll_target(index, &self.centers, viewport_height) {
            Some(target_offset) => {
                let delta = target_offset - self.scheduler.current_offset(now);
                let intent = classifier::classify(
                    trigger,
                    target_offset,
                    delta,
                    &self.preset.params(),
                );
                self.scheduler.dispatch(intent, now);
                self.pending_realign = false;
            }
            None => self.pending_realign = true,
        }
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        let profile = ResponsiveFontProfile::compute(viewport);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            current_px = profile.current_px,
            "viewport settled, profile recomputed"
        );
        self.viewport = Some(viewport);
        self.profile = Some(profile);
        // Real measurements predate this layout; drop them
        self.measured_heights = None;
        self.rebuild_geometry();
        self.pending_realign = true;
    }

    fn rebuild_geometry(&mut self) {
        let Some(profile) = self.profile else {
            self.centers.clear();
            return;
        };
        let centers = match &self.measured_heights {
            Some(heights) => target::measure_line_centers(heights, profile.line_spacing_px),
            None => {
                let uniform = vec![profile.line_height_px; self.lyrics.len()];
                target::measure_line_centers(&uniform, profile.line_spacing_px)
            }
        };
        self.centers = centers;
    }

    // ============ View layer accessors ============

    /// Current and previous resolved indices, for styling current, near and
    /// distant lines differently
    pub fn current_line(&self) -> Option<usize> {
        self.sampler.current_index()
    }

    pub fn previous_line(&self) -> Option<usize> {
        self.previous_index
    }

    /// Timestamp for a line click, to be routed to the player's seek command
    pub fn line_timestamp(&self, index: usize) -> Option<u64> {
        self.lyrics.lines.get(index).map(|line| line.timestamp_ms)
    }

    /// Last committed scroll offset
    pub fn offset_px(&self) -> f32 {
        self.scheduler.offset()
    }

    pub fn state(&self) -> EngineState {
        self.scheduler.state()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    pub fn profile(&self) -> Option<&ResponsiveFontProfile> {
        self.profile.as_ref()
    }

    pub fn preset(&self) -> AnimationPresetId {
        self.preset
    }

    pub fn config(&self) -> &SyncEngineConfig {
        &self.config
    }

    pub fn lyrics(&self) -> &Arc<ParsedLyrics> {
        &self.lyrics
    }
}

impl Default for LyricSyncEngine {
    fn default() -> Self {
        Self::new(SyncEngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakePosition(Cell<f64>);

    impl FakePosition {
        fn new(ms: f64) -> Self {
            Self(Cell::new(ms))
        }

        fn set(&self, ms: f64) {
            self.0.set(ms);
        }
    }

    impl PositionSource for FakePosition {
        fn position_ms(&self) -> f64 {
            self.0.get()
        }
    }

    fn lyrics() -> Arc<ParsedLyrics> {
        Arc::new(ParsedLyrics::new(vec![
            LyricLine::new(0, "a"),
            LyricLine::new(2000, "b"),
            LyricLine::new(5000, "c"),
        ]))
    }

    fn engine_with_viewport() -> LyricSyncEngine {
        let mut engine = LyricSyncEngine::default();
        engine.set_viewport(Viewport::new(1280.0, 800.0, 1.0));
        engine.set_lyrics(lyrics());
        engine
    }

    fn expected_target(engine: &LyricSyncEngine, index: usize) -> f32 {
        let height = engine.viewport.unwrap().height;
        target::scroll_target(index, &engine.centers, height).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(0.0);

        // Track start: first sample is a seek, alignment is instant
        let offset = engine.tick(&position, t0);
        assert_eq!(engine.current_line(), Some(0));
        assert_eq!(offset, expected_target(&engine, 0));
        assert_eq!(engine.state(), EngineState::Idle);

        // Still inside line 0: nothing changes
        position.set(1999.0);
        let t1 = t0 + Duration::from_secs(2);
        let offset = engine.tick(&position, t1);
        assert_eq!(engine.current_line(), Some(0));
        assert_eq!(offset, expected_target(&engine, 0));

        // Natural advance into line 1: animated
        position.set(2001.0);
        let t2 = t1 + Duration::from_millis(16);
        engine.tick(&position, t2);
        assert_eq!(engine.current_line(), Some(1));
        assert_eq!(engine.state(), EngineState::AligningAnimated);

        // After the transition completes the offset has settled on line 1
        position.set(2200.0);
        let t3 = t2 + Duration::from_secs(2);
        let offset = engine.tick(&position, t3);
        assert_eq!(offset, expected_target(&engine, 1));
        assert_eq!(engine.state(), EngineState::Idle);

        // Far jump: classified as seek, instant regardless of distance
        position.set(30000.0);
        let t4 = t3 + Duration::from_millis(16);
        let offset = engine.tick(&position, t4);
        assert_eq!(engine.current_line(), Some(2));
        assert_eq!(engine.previous_line(), Some(1));
        assert_eq!(offset, expected_target(&engine, 2));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_resize_realigns_same_index_instantly() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(2500.0);

        engine.tick(&position, t0);
        assert_eq!(engine.current_line(), Some(1));
        let before = engine.offset_px();

        // Resize; index is unchanged but the target moves
        engine.handle_resize(Viewport::new(700.0, 600.0, 1.0), t0 + Duration::from_millis(20));
        let t1 = t0 + Duration::from_millis(200);
        let offset = engine.tick(&position, t1);

        assert_eq!(engine.current_line(), Some(1));
        assert_eq!(offset, expected_target(&engine, 1));
        assert_ne!(offset, before);
        // Re-alignment never animates
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_unmeasurable_geometry_retries_until_layout_arrives() {
        let t0 = Instant::now();
        let mut engine = LyricSyncEngine::default();
        engine.set_lyrics(lyrics());
        let position = FakePosition::new(2500.0);

        // No viewport yet: the index resolves but nothing can be applied
        let offset = engine.tick(&position, t0);
        assert_eq!(engine.current_line(), Some(1));
        assert_eq!(offset, 0.0);

        // Layout arrives; the pending alignment applies on the next frame
        engine.set_viewport(Viewport::new(1280.0, 800.0, 1.0));
        let t1 = t0 + Duration::from_millis(16);
        let offset = engine.tick(&position, t1);
        assert_eq!(offset, expected_target(&engine, 1));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_track_change_resets_engine() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(6000.0);
        engine.tick(&position, t0);
        assert_eq!(engine.current_line(), Some(2));

        engine.set_lyrics(Arc::new(ParsedLyrics::new(vec![
            LyricLine::new(1000, "x"),
            LyricLine::new(4000, "y"),
        ])));
        assert_eq!(engine.current_line(), None);
        assert_eq!(engine.previous_line(), None);
        assert_eq!(engine.state(), EngineState::Idle);

        // First sample of the new track aligns instantly
        position.set(1200.0);
        let offset = engine.tick(&position, t0 + Duration::from_millis(16));
        assert_eq!(engine.current_line(), Some(0));
        assert_eq!(offset, expected_target(&engine, 0));
    }

    #[test]
    fn test_position_before_first_line_keeps_not_started() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        engine.set_lyrics(Arc::new(ParsedLyrics::new(vec![
            LyricLine::new(3000, "late"),
        ])));

        let position = FakePosition::new(500.0);
        engine.tick(&position, t0);
        assert_eq!(engine.current_line(), None);
        assert_eq!(engine.line_timestamp(0), Some(3000));
    }

    #[test]
    fn test_measured_heights_trigger_realign() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(2500.0);
        engine.tick(&position, t0);
        let before = engine.offset_px();

        // Wrapped lines made line 0 much taller; the target for line 1 moves
        engine.set_measured_heights(vec![200.0, 70.0, 70.0]);
        let offset = engine.tick(&position, t0 + Duration::from_millis(16));
        assert_ne!(offset, before);
        assert_eq!(offset, expected_target(&engine, 1));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_unsorted_lyrics_warn_and_degrade_gracefully() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        // Loader contract violation: out-of-order timestamps. Replacing the
        // set logs a warning but must not panic or wedge the engine.
        engine.set_lyrics(Arc::new(ParsedLyrics::new(vec![
            LyricLine::new(5000, "late"),
            LyricLine::new(0, "early"),
        ])));

        let position = FakePosition::new(6000.0);
        let offset = engine.tick(&position, t0);
        assert!(offset.is_finite());
        assert_eq!(engine.state(), EngineState::Idle);

        // A subsequent well-formed set fully recovers
        engine.set_lyrics(lyrics());
        position.set(2500.0);
        engine.tick(&position, t0 + Duration::from_millis(16));
        assert_eq!(engine.current_line(), Some(1));
    }

    #[tokio::test]
    async fn test_track_change_event_resets_engine() {
        use crate::player::{PlayerEvent, player_event_channel};

        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(6000.0);
        engine.tick(&position, t0);
        assert_eq!(engine.current_line(), Some(2));

        // Backend announces a new track; the UI side reacts by loading that
        // track's lyrics and replacing the set wholesale
        let (event_tx, mut event_rx) = player_event_channel();
        event_tx
            .send(PlayerEvent::TrackChanged {
                track_id: 7,
                duration_ms: 180_000,
            })
            .unwrap();

        let event = event_rx.recv().await.unwrap();
        let PlayerEvent::TrackChanged { track_id, .. } = event else {
            panic!("expected TrackChanged, got {event:?}");
        };
        assert_eq!(track_id, 7);
        engine.set_lyrics(Arc::new(ParsedLyrics::new(vec![
            LyricLine::new(500, "opening"),
            LyricLine::new(9000, "chorus"),
        ])));

        // Track change resets to Idle with a cleared index
        assert_eq!(engine.current_line(), None);
        assert_eq!(engine.previous_line(), None);
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(!engine.is_animating());

        // First sample of the new track aligns instantly to its line
        position.set(700.0);
        let offset = engine.tick(&position, t0 + Duration::from_millis(16));
        assert_eq!(engine.current_line(), Some(0));
        assert_eq!(offset, expected_target(&engine, 0));
        assert_eq!(engine.line_timestamp(1), Some(9000));
    }

    #[tokio::test]
    async fn test_click_to_seek_round_trip() {
        use crate::player::{PlayerCommand, PlayerHandle, SharedPlaybackState,
            player_command_channel};

        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let (tx, mut rx) = player_command_channel();
        let state = SharedPlaybackState::new();
        let player = PlayerHandle::new(tx, state.clone());

        state.set_position_ms(100.0);
        engine.tick(&player, t0);
        assert_eq!(engine.current_line(), Some(0));

        // User clicks the last line; the click routes its timestamp to seek
        let ts = engine.line_timestamp(2).unwrap();
        player.seek(ts);
        assert_eq!(
            rx.recv().await,
            Some(PlayerCommand::Seek { position_ms: 5000 })
        );

        // The backend applies the seek; the next frame classifies the jump
        // and snaps, regardless of pixel distance
        state.set_position_ms(ts as f64);
        let offset = engine.tick(&player, t0 + Duration::from_millis(16));
        assert_eq!(engine.current_line(), Some(2));
        assert_eq!(offset, expected_target(&engine, 2));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_preset_change_affects_future_intents_only() {
        let t0 = Instant::now();
        let mut engine = engine_with_viewport();
        let position = FakePosition::new(100.0);
        engine.tick(&position, t0);

        // Start an animated advance
        position.set(2100.0);
        let t1 = t0 + Duration::from_secs(2);
        engine.tick(&position, t1);
        assert_eq!(engine.state(), EngineState::AligningAnimated);

        // Swapping presets mid-flight leaves the transition running
        engine.set_preset(AnimationPresetId::Snappy);
        assert!(engine.is_animating());
        assert_eq!(engine.preset(), AnimationPresetId::Snappy);
    }
}
