//! Line index resolution
//!
//! Maps a playback position to the lyric line it falls in: the greatest index
//! whose `timestamp_ms <= position_ms`. Pure, O(log n), no failure modes
//! beyond returning `None` ("not started").

use super::types::LyricLine;

/// Resolve the current line index for a playback position.
///
/// Requires `lines` sorted non-decreasing by `timestamp_ms`. Returns `None`
/// when the position precedes the first line, or when `lines` is empty.
/// Duplicate timestamps resolve deterministically to the highest matching
/// index.
pub fn resolve(position_ms: f64, lines: &[LyricLine]) -> Option<usize> {
    let started = lines.partition_point(|line| line.timestamp_ms as f64 <= position_ms);
    started.checked_sub(1)
}
