//! Player thread communication types
//!
//! ## Architecture
//! ```text
//! UI thread (PlayerHandle) --[PlayerCommand]--> player backend
//! UI thread               <--[PlayerEvent]---- player backend
//! UI thread               <--[SharedState]---- player backend (non-blocking reads)
//! ```
//!
//! Commands are processed asynchronously: senders return immediately and
//! results come back as events. Position is *not* an event: it changes too
//! often, so it is published into `SharedPlaybackState` and read on demand.

use std::sync::Arc;

use parking_lot::RwLock;

// ============ Commands (UI -> player backend) ============

/// Commands sent to the player backend
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    /// Seek to an absolute position
    Seek { position_ms: u64 },
    Stop,
}

// ============ Events (player backend -> UI) ============

/// Events emitted by the player backend
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// A new track started; lyric loading and engine reset hang off this
    TrackChanged {
        track_id: u64,
        duration_ms: u64,
    },
    Started,
    Paused {
        position_ms: u64,
    },
    Resumed,
    Stopped,
    /// A seek requested earlier has been applied
    SeekCompleted {
        position_ms: u64,
    },
}

// ============ Shared state (non-blocking reads) ============

#[derive(Debug, Default)]
struct PlaybackStateInner {
    position_ms: f64,
    duration_ms: u64,
    is_playing: bool,
}

/// Thread-safe playback state for pull reads from the UI thread
///
/// The backend writes it from its own loop; readers never block on the
/// backend being busy. Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct SharedPlaybackState {
    inner: Arc<RwLock<PlaybackStateInner>>,
}

impl std::fmt::Debug for SharedPlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SharedPlaybackState")
            .field("position_ms", &inner.position_ms)
            .field("duration_ms", &inner.duration_ms)
            .field("is_playing", &inner.is_playing)
            .finish()
    }
}

impl SharedPlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position_ms(&self) -> f64 {
        self.inner.read().position_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.inner.read().duration_ms
    }

    pub fn is_playing(&self) -> bool {
        self.inner.read().is_playing
    }

    /// Backend-side: publish the current position
    pub fn set_position_ms(&self, position_ms: f64) {
        self.inner.write().position_ms = position_ms;
    }

    /// Backend-side: publish track duration on track change
    pub fn set_duration_ms(&self, duration_ms: u64) {
        self.inner.write().duration_ms = duration_ms;
    }

    /// Backend-side: publish play/pause state
    pub fn set_playing(&self, is_playing: bool) {
        self.inner.write().is_playing = is_playing;
    }
}

// ============ Channels ============

/// Sender for player commands (held by UI thread)
pub type PlayerCommandSender = tokio::sync::mpsc::UnboundedSender<PlayerCommand>;

/// Receiver for player commands (held by the backend)
pub type PlayerCommandReceiver = tokio::sync::mpsc::UnboundedReceiver<PlayerCommand>;

/// Sender for player events (held by the backend)
pub type PlayerEventSender = tokio::sync::mpsc::UnboundedSender<PlayerEvent>;

/// Receiver for player events (held by the UI thread)
pub type PlayerEventReceiver = tokio::sync::mpsc::UnboundedReceiver<PlayerEvent>;

/// Create a new player command channel
pub fn player_command_channel() -> (PlayerCommandSender, PlayerCommandReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// Create a new player event channel
pub fn player_event_channel() -> (PlayerEventSender, PlayerEventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
