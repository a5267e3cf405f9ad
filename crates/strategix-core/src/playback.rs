//! Playback transport seam and a wall-clock media clock.

use std::time::Instant;
use tracing::debug;

/// What the synchronisation engine needs from a player.
pub trait PlaybackTransport {
    /// Current position in seconds.
    fn position(&self) -> f64;
    /// Total length in seconds; `None` until media metadata is known.
    fn duration(&self) -> Option<f64>;
    fn seek(&mut self, secs: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
}

/// Transport driven by the system clock instead of a decoder.
///
/// The position is derived from an anchor (position at the last state
/// change) plus the time elapsed since, clamped to the duration once known.
#[derive(Debug, Clone)]
pub struct MediaClock {
    duration: Option<f64>,
    anchor_position: f64,
    playing_since: Option<Instant>,
}

impl Default for MediaClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock {
    pub fn new() -> Self {
        Self {
            duration: None,
            anchor_position: 0.0,
            playing_since: None,
        }
    }

    /// Record the media length. Non-positive or non-finite values are ignored.
    pub fn set_duration(&mut self, duration: f64) {
        if duration.is_finite() && duration > 0.0 {
            self.duration = Some(duration);
            self.anchor_position = self.anchor_position.min(duration);
        }
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        let raw = match self.playing_since {
            Some(since) => {
                self.anchor_position + now.saturating_duration_since(since).as_secs_f64()
            }
            None => self.anchor_position,
        };
        self.clamp(raw)
    }

    pub fn seek_at(&mut self, secs: f64, now: Instant) {
        let target = self.clamp(secs);
        debug!(target, "Seek");
        self.anchor_position = target;
        if self.playing_since.is_some() {
            self.playing_since = Some(now);
        }
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.playing_since.is_none() {
            if self.reached_end() {
                self.anchor_position = 0.0;
            }
            self.playing_since = Some(now);
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.playing_since.is_some() {
            self.anchor_position = self.position_at(now);
            self.playing_since = None;
        }
    }

    /// Advance to `now`, pausing automatically at the end. Returns the position.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let position = self.position_at(now);
        if self.playing_since.is_some()
            && self.duration.is_some_and(|duration| position >= duration)
        {
            self.anchor_position = position;
            self.playing_since = None;
            debug!(position, "Reached end of media");
        }
        position
    }

    fn reached_end(&self) -> bool {
        self.duration
            .is_some_and(|duration| self.anchor_position >= duration)
    }

    fn clamp(&self, secs: f64) -> f64 {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        match self.duration {
            Some(duration) => secs.min(duration),
            None => secs,
        }
    }
}

impl PlaybackTransport for MediaClock {
    fn position(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn seek(&mut self, secs: f64) {
        self.seek_at(secs, Instant::now());
    }

    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn paused_clock_stays_put() {
        let start = Instant::now();
        let clock = MediaClock::new();
        assert_eq!(clock.position_at(start + Duration::from_secs(5)), 0.0);
        assert!(!clock.is_playing());
        assert_eq!(clock.duration(), None);
    }

    #[test]
    fn advances_while_playing() {
        let start = Instant::now();
        let mut clock = MediaClock::new();
        clock.set_duration(140.0);
        clock.play_at(start);
        assert_eq!(clock.position_at(start + Duration::from_millis(2500)), 2.5);
        clock.pause_at(start + Duration::from_secs(3));
        assert_eq!(clock.position_at(start + Duration::from_secs(30)), 3.0);
    }

    #[test]
    fn seek_clamps_into_range() {
        let start = Instant::now();
        let mut clock = MediaClock::new();
        clock.set_duration(100.0);
        clock.seek_at(250.0, start);
        assert_eq!(clock.position_at(start), 100.0);
        clock.seek_at(-3.0, start);
        assert_eq!(clock.position_at(start), 0.0);
    }

    #[test]
    fn seek_while_playing_restarts_from_target() {
        let start = Instant::now();
        let mut clock = MediaClock::new();
        clock.set_duration(100.0);
        clock.play_at(start);
        clock.seek_at(60.0, start + Duration::from_secs(10));
        assert_eq!(clock.position_at(start + Duration::from_secs(12)), 62.0);
    }

    #[test]
    fn tick_pauses_at_end() {
        let start = Instant::now();
        let mut clock = MediaClock::new();
        clock.set_duration(10.0);
        clock.play_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_secs(15)), 10.0);
        assert!(!clock.is_playing());
        // Playing again from the end restarts at zero.
        clock.play_at(start + Duration::from_secs(20));
        assert_eq!(clock.position_at(start + Duration::from_secs(21)), 1.0);
    }

    #[test]
    fn invalid_duration_is_ignored() {
        let mut clock = MediaClock::new();
        clock.set_duration(0.0);
        clock.set_duration(f64::INFINITY);
        assert_eq!(clock.duration(), None);
    }
}
