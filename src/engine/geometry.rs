//! Responsive geometry calculation
//!
//! Derives font sizes, line spacing and the maximum visible line count from
//! viewport dimensions and pixel density. Pure functions of the viewport;
//! recomputed on resize, debounced so intermediate resize frames are skipped.

use std::time::{Duration, Instant};

/// Logical viewport dimensions plus pixel density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Device pixel ratio (1.0 = standard density)
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }
}

/// Viewport size classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeTier {
    /// Classify a viewport by fixed width/height breakpoints
    pub fn classify(viewport: Viewport) -> Self {
        if viewport.width < 600.0 || viewport.height < 500.0 {
            Self::Small
        } else if viewport.width < 900.0 || viewport.height < 700.0 {
            Self::Medium
        } else if viewport.width < 1400.0 || viewport.height < 900.0 {
            Self::Large
        } else {
            Self::ExtraLarge
        }
    }

    /// Font size as a ratio of viewport width
    fn ratio(self) -> f32 {
        match self {
            Self::Small => 0.046,
            Self::Medium => 0.040,
            Self::Large => 0.034,
            Self::ExtraLarge => 0.030,
        }
    }

    /// Clamp bounds for the current-line font size, in logical pixels
    fn clamp_px(self) -> (f32, f32) {
        match self {
            Self::Small => (20.0, 30.0),
            Self::Medium => (24.0, 40.0),
            Self::Large => (28.0, 52.0),
            Self::ExtraLarge => (32.0, 64.0),
        }
    }
}

/// Derived font and layout metrics for the lyric surface
///
/// Treated as an immutable snapshot: replaced wholesale on recompute, never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveFontProfile {
    /// Distant lines
    pub normal_px: f32,
    /// Lines adjacent to the current one
    pub near_px: f32,
    /// The current line
    pub current_px: f32,
    pub max_visible_lines: usize,
    pub line_height_px: f32,
    pub line_spacing_px: f32,
}

impl ResponsiveFontProfile {
    /// Compute the profile for a viewport.
    ///
    /// Higher density screens get a slightly smaller ratio so text keeps a
    /// comparable physical size instead of ballooning.
    pub fn compute(viewport: Viewport) -> Self {
        let tier = SizeTier::classify(viewport);

        let density_adjust = if viewport.scale_factor > 2.5 {
            0.85
        } else if viewport.scale_factor > 1.5 {
            0.92
        } else {
            1.0
        };

        let (min_px, max_px) = tier.clamp_px();
        let current_px = (viewport.width * tier.ratio() * density_adjust).clamp(min_px, max_px);
        let near_px = (current_px * 0.78).max(12.0);
        let normal_px = (current_px * 0.62).max(12.0);

        let line_height_px = current_px * 1.6;
        let line_spacing_px = (current_px * 0.6).max(16.0);

        let usable_height = (viewport.height - line_height_px).max(0.0);
        let max_visible_lines =
            ((usable_height / (line_height_px + line_spacing_px)) as usize).clamp(3, 9);

        Self {
            normal_px,
            near_px,
            current_px,
            max_visible_lines,
            line_height_px,
            line_spacing_px,
        }
    }
}

/// Debouncer for viewport resize events
///
/// Resize streams arrive once per intermediate frame while the user drags the
/// window edge. The profile only recomputes after movement has settled for
/// `settle_after`.
#[derive(Debug)]
pub struct ResizeDebouncer {
    pending: Option<Viewport>,
    last_event: Option<Instant>,
    settle_after: Duration,
}

impl ResizeDebouncer {
    pub fn new(settle_after: Duration) -> Self {
        Self {
            pending: None,
            last_event: None,
            settle_after,
        }
    }

    /// Record a resize event; supersedes any pending one
    pub fn push(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some(viewport);
        self.last_event = Some(now);
    }

    /// Take the settled viewport, if movement has been quiet long enough
    pub fn settled(&mut self, now: Instant) -> Option<Viewport> {
        let last = self.last_event?;
        if now.duration_since(last) >= self.settle_after {
            self.last_event = None;
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(120))
    }
}
