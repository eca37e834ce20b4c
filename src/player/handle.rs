//! Player handle for non-blocking control from the UI thread
//!
//! All methods send a command to the backend and return immediately; results
//! come back as `PlayerEvent`s. Position queries read from shared state
//! without blocking, which makes the handle usable as the sampler's
//! `PositionSource`.

use super::PositionSource;
use super::events::{PlayerCommand, PlayerCommandSender, SharedPlaybackState};

/// Handle for controlling playback from the UI thread
#[derive(Clone)]
pub struct PlayerHandle {
    command_tx: PlayerCommandSender,
    state: SharedPlaybackState,
}

impl std::fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("state", &self.state)
            .finish()
    }
}

impl PlayerHandle {
    pub fn new(command_tx: PlayerCommandSender, state: SharedPlaybackState) -> Self {
        Self { command_tx, state }
    }

    // ============ Playback control ============

    pub fn play(&self) {
        let _ = self.command_tx.send(PlayerCommand::Play);
    }

    pub fn pause(&self) {
        let _ = self.command_tx.send(PlayerCommand::Pause);
    }

    pub fn stop(&self) {
        let _ = self.command_tx.send(PlayerCommand::Stop);
    }

    /// Seek to an absolute position.
    ///
    /// This is the affordance behind clicking a lyric line: the engine maps
    /// the click to the line's timestamp and routes it here, and the sampler
    /// later classifies the resulting position jump as a seek.
    pub fn seek(&self, position_ms: u64) {
        let _ = self.command_tx.send(PlayerCommand::Seek { position_ms });
    }

    // ============ State queries ============

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn duration_ms(&self) -> u64 {
        self.state.duration_ms()
    }

    /// Shared state, for handing to a backend that publishes into it
    pub fn state(&self) -> &SharedPlaybackState {
        &self.state
    }
}

impl PositionSource for PlayerHandle {
    fn position_ms(&self) -> f64 {
        self.state.position_ms()
    }
}

impl PositionSource for SharedPlaybackState {
    fn position_ms(&self) -> f64 {
        SharedPlaybackState::position_ms(self)
    }
}
