//! Playback state controller.
//!
//! Owns the current track, the play/pause flag and a progress percentage.
//! Three states: idle (no track), loaded-paused and loaded-playing.
//! Progress comes from one of two sources: a real media position reported
//! by whoever decodes the preview audio, or a fixed-interval synthetic
//! tick when the track has no preview. Both sources auto-advance to the
//! next listed track at end-of-track; the controller never distinguishes
//! the two paths once a track completes.

use crate::types::Track;

/// Cadence of the synthetic progress tick.
pub const SIMULATED_TICK_MS: u64 = 500;

/// Percentage points added per synthetic tick.
pub const SIMULATED_STEP: f64 = 0.2;

/// Assumed duration when the media source does not report one. Catalog
/// previews are 30-second clips.
pub const DEFAULT_PREVIEW_SECS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Default)]
pub struct Player {
    current: Option<Track>,
    playing: bool,
    progress: f64, // percent, 0-100
}

impl Player {
    pub fn new() -> Self {
        Player::default()
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Progress through the current track as a percentage.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Loads a track and starts playing it from the beginning.
    ///
    /// Selecting a track always implies immediate playback intent, even
    /// when the controller was paused.
    pub fn select_track(&mut self, track: Track) {
        self.current = Some(track);
        self.playing = true;
        self.progress = 0.0;
    }

    /// Toggles between playing and paused. No-op while idle.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_some() {
            self.playing = !self.playing;
        }
    }

    /// Moves one position through `tracks` with wraparound and selects the
    /// result.
    ///
    /// The current track is looked up by id in the listed set; moving past
    /// either end wraps modulo the list length. No-op when the list is
    /// empty or the controller is idle. A current track that is no longer
    /// in the list behaves like the position just before the start.
    pub fn advance(&mut self, direction: Direction, tracks: &[Track]) {
        if tracks.is_empty() {
            return;
        }
        let Some(current) = &self.current else {
            return;
        };

        let len = tracks.len() as i64;
        let index = tracks
            .iter()
            .position(|t| t.id == current.id)
            .map(|i| i as i64)
            .unwrap_or(-1);

        let target = match direction {
            Direction::Next => (index + 1).rem_euclid(len),
            Direction::Prev => (index - 1).rem_euclid(len),
        };

        self.select_track(tracks[target as usize].clone());
    }

    /// Feeds a real media position into the progress signal.
    ///
    /// `duration_secs` falls back to [`DEFAULT_PREVIEW_SECS`] when the
    /// source reports none. Reaching or passing the duration auto-advances
    /// to the next track in `tracks`.
    pub fn tick_media(&mut self, position_secs: f64, duration_secs: Option<f64>, tracks: &[Track]) {
        if self.current.is_none() || !self.playing {
            return;
        }

        let duration = duration_secs
            .filter(|d| *d > 0.0)
            .unwrap_or(DEFAULT_PREVIEW_SECS);
        self.progress = (position_secs / duration * 100.0).min(100.0);

        if position_secs >= duration {
            self.advance(Direction::Next, tracks);
        }
    }

    /// Advances the synthetic progress signal by one tick.
    ///
    /// Used when the current track has no real audio source. Call once per
    /// [`SIMULATED_TICK_MS`] while playing; paused or idle controllers
    /// ignore the tick. On reaching 100% the controller auto-advances,
    /// mirroring the end-of-track behavior of real playback (with an empty
    /// track list the counter just wraps to zero).
    pub fn tick_simulated(&mut self, tracks: &[Track]) {
        if self.current.is_none() || !self.playing {
            return;
        }

        self.progress += SIMULATED_STEP;
        if self.progress >= 100.0 {
            self.progress = 0.0;
            self.advance(Direction::Next, tracks);
        }
    }
}
