use super::super::state::App;
use super::Effect;
use std::time::{Duration, Instant};
use strategix_core::{PlaybackTransport, VideoManifest, segment_chapters, select_active};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_manifest_loaded(
        &mut self,
        manifest: VideoManifest,
        effects: &mut Vec<Effect>,
    ) {
        info!(
            title = %manifest.title,
            chapters = manifest.chapters.len(),
            annotations = manifest.qa.len(),
            "Manifest loaded"
        );
        let duration = manifest.duration_secs;
        self.video.manifest = Some(manifest);
        self.video.load_error = None;
        self.video.segments.clear();
        self.video.hovered_chapter = None;
        self.refresh_active_annotation(Instant::now());
        effects.push(Effect::ResolveDuration(duration));
    }

    pub(super) fn handle_manifest_load_failed(&mut self, error: String) {
        warn!("Manifest unavailable: {error}");
        self.video.manifest = None;
        self.video.segments.clear();
        self.video.active = None;
        self.video.load_error = Some(error);
    }

    /// Chapters are only laid out once the media length is known.
    pub(super) fn handle_duration_resolved(&mut self, duration: Option<f64>) {
        let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) else {
            debug!(?duration, "Duration unknown; chapter bar stays empty");
            self.video.segments.clear();
            return;
        };
        self.video.clock.set_duration(duration);
        let chapters = self
            .video
            .manifest
            .as_ref()
            .map(|manifest| manifest.chapters.as_slice())
            .unwrap_or(&[]);
        self.video.segments = segment_chapters(chapters, Some(duration));
        debug!(duration, segments = self.video.segments.len(), "Duration resolved");
    }

    pub(super) fn handle_toggle_play_pause(&mut self) {
        let now = Instant::now();
        if self.video.clock.is_playing() {
            self.video.clock.pause_at(now);
        } else {
            self.video.clock.play_at(now);
        }
        self.refresh_active_annotation(now);
    }

    pub(super) fn handle_seek(&mut self, secs: f64, play: bool) {
        let now = Instant::now();
        self.video.clock.seek_at(secs, now);
        if play {
            self.video.clock.play_at(now);
        }
        self.refresh_active_annotation(now);
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        self.video.clock.tick_at(now);
        self.refresh_active_annotation(now);
    }

    /// Re-derive position and the visible annotation after any time update.
    pub(super) fn refresh_active_annotation(&mut self, now: Instant) {
        let position = self.video.clock.position_at(now);
        self.video.position = position;
        let active = select_active(position, self.video.annotations()).cloned();
        let key = active.as_ref().map(|annotation| annotation.key());
        if self.video.overlay.update(key, now) {
            debug!(position, ?key, "Active annotation changed");
        }
        self.video.active = active;
    }

    pub(in crate::app) fn needs_ticks(&self, now: Instant) -> bool {
        self.video.clock.is_playing() || self.video.overlay.is_fading(now, self.fade_duration())
    }

    pub(in crate::app) fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.config.annotation_fade_ms)
    }

    pub(in crate::app) fn stop_playback(&mut self) {
        if self.video.clock.is_playing() {
            self.video.clock.pause_at(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use super::*;
    use crate::config::AppConfig;
    use strategix_core::{Annotation, ChapterBreakpoint};

    fn manifest() -> VideoManifest {
        VideoManifest {
            title: "Demo".into(),
            video_src: "demo.mp4".into(),
            poster: None,
            duration_secs: Some(140.0),
            chapters: vec![
                ChapterBreakpoint::new(0.0, "Intro"),
                ChapterBreakpoint::new(25.0, "Setup"),
                ChapterBreakpoint::new(60.0, "Demo"),
                ChapterBreakpoint::new(95.0, "Security"),
                ChapterBreakpoint::new(115.0, "Costs"),
                ChapterBreakpoint::new(125.0, "Outro"),
            ],
            qa: vec![
                Annotation::new(12.0, "Was ist das?", "Ein Chatbot."),
                Annotation::new(40.0, "Lokal?", "Ja, **lokal**."),
            ],
        }
    }

    fn loaded_app() -> App {
        let mut app = test_app(AppConfig::default());
        let effects = app.reduce(Message::ManifestLoaded(manifest()));
        assert_eq!(effects, vec![Effect::ResolveDuration(Some(140.0))]);
        app
    }

    #[test]
    fn segments_wait_for_duration() {
        let mut app = loaded_app();
        assert!(app.video.segments.is_empty());
        app.reduce(Message::DurationResolved(Some(140.0)));
        let widths: Vec<f64> = app
            .video
            .segments
            .iter()
            .map(|segment| (segment.width_percent * 100.0).round() / 100.0)
            .collect();
        assert_eq!(widths, vec![17.86, 25.0, 25.0, 14.29, 7.14, 10.71]);
    }

    #[test]
    fn unknown_duration_leaves_bar_empty() {
        let mut app = loaded_app();
        app.reduce(Message::DurationResolved(None));
        assert!(app.video.segments.is_empty());
        app.reduce(Message::DurationResolved(Some(0.0)));
        assert!(app.video.segments.is_empty());
    }

    #[test]
    fn seek_selects_annotation_in_window() {
        let mut app = loaded_app();
        app.reduce(Message::DurationResolved(Some(140.0)));
        app.reduce(Message::SeekTo(20.0));
        assert_eq!(app.video.active.as_ref().map(|a| a.time), Some(12.0));
        app.reduce(Message::SeekTo(30.0));
        assert!(app.video.active.is_none());
        app.reduce(Message::SeekTo(41.0));
        assert_eq!(app.video.active.as_ref().map(|a| a.time), Some(40.0));
    }

    #[test]
    fn seek_and_play_starts_clock() {
        let mut app = loaded_app();
        app.reduce(Message::SeekAndPlay(40.0));
        assert!(app.video.clock.is_playing());
        assert!(app.needs_ticks(Instant::now()));
        app.stop_playback();
        assert!(!app.video.clock.is_playing());
    }

    #[test]
    fn toggle_play_pause_flips_state() {
        let mut app = loaded_app();
        app.reduce(Message::TogglePlayPause);
        assert!(app.video.clock.is_playing());
        app.reduce(Message::TogglePlayPause);
        assert!(!app.video.clock.is_playing());
    }

    #[test]
    fn failed_manifest_clears_video() {
        let mut app = loaded_app();
        app.reduce(Message::ManifestLoadFailed("missing".into()));
        assert!(app.video.manifest.is_none());
        assert!(app.video.annotations().is_empty());
        assert_eq!(app.video.load_error.as_deref(), Some("missing"));
    }
}
