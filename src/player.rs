//! Playback boundary
//!
//! The native playback engine lives behind an asynchronous command/event
//! boundary; this module is the narrow interface the sync engine consumes:
//! - `PlayerCommand` / `PlayerEvent` - commands out, events in
//! - `SharedPlaybackState` - lock-guarded state for non-blocking pull reads
//! - `PlayerHandle` - cloneable, non-blocking control surface
//! - `PositionSource` - the pull accessor the position sampler reads from

mod events;
mod handle;

pub use events::{
    PlayerCommand, PlayerCommandReceiver, PlayerCommandSender, PlayerEvent, PlayerEventReceiver,
    PlayerEventSender, SharedPlaybackState, player_command_channel, player_event_channel,
};
pub use handle::PlayerHandle;

/// Pull accessor for the current playback position.
///
/// The position sampler reads this once per animation frame. A pull model is
/// deliberate: pushing every position sample through reactive state would
/// force a re-render many times per second.
pub trait PositionSource {
    /// Current playback position in milliseconds
    fn position_ms(&self) -> f64;
}
