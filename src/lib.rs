//! lyricsync - playback-synchronized lyric scrolling
//!
//! The engine behind a music player's lyrics page: it follows a
//! high-frequency, pull-based playback position, resolves the current lyric
//! line, and keeps that line centered on the scroll surface with transitions
//! that adapt to how the change happened - natural advances ease over a
//! distance-dependent duration, seeks and layout changes snap.
//!
//! ## Integration sketch
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Instant;
//! use lyricsync::engine::{LyricLine, LyricSyncEngine, ParsedLyrics, SyncEngineConfig, Viewport};
//! use lyricsync::player::{PlayerHandle, SharedPlaybackState, player_command_channel};
//! use lyricsync::settings::Settings;
//!
//! let settings = Settings::load();
//! let (command_tx, _command_rx) = player_command_channel();
//! let player = PlayerHandle::new(command_tx, SharedPlaybackState::new());
//!
//! let mut engine = LyricSyncEngine::new(SyncEngineConfig {
//!     preset: settings.animation_preset,
//!     ..Default::default()
//! });
//! engine.set_viewport(Viewport::new(1280.0, 800.0, 1.0));
//!
//! // On track change:
//! engine.set_lyrics(Arc::new(ParsedLyrics::new(vec![
//!     LyricLine::new(0, "first line"),
//!     LyricLine::new(2000, "second line"),
//! ])));
//!
//! // Every animation frame:
//! let offset_px = engine.tick(&player, Instant::now());
//!
//! // On a lyric line click:
//! if let Some(ts) = engine.line_timestamp(1) {
//!     player.seek(ts);
//! }
//! ```

pub mod engine;
pub mod player;
pub mod settings;

pub use engine::{LyricSyncEngine, SyncEngineConfig};
pub use player::{PlayerHandle, PositionSource};
pub use settings::Settings;
