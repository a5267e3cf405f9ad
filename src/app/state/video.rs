use std::time::{Duration, Instant};
use strategix_core::{ActiveKey, Annotation, ChapterSegment, MediaClock, VideoManifest};

/// Video screen model: manifest, transport and derived selections.
pub struct VideoState {
    pub(in crate::app) manifest: Option<VideoManifest>,
    pub(in crate::app) load_error: Option<String>,
    pub(in crate::app) clock: MediaClock,
    pub(in crate::app) position: f64,
    pub(in crate::app) active: Option<Annotation>,
    pub(in crate::app) overlay: OverlayTransition,
    pub(in crate::app) segments: Vec<ChapterSegment>,
    pub(in crate::app) hovered_chapter: Option<usize>,
}

impl VideoState {
    pub(in crate::app) fn new() -> Self {
        Self {
            manifest: None,
            load_error: None,
            clock: MediaClock::new(),
            position: 0.0,
            active: None,
            overlay: OverlayTransition::default(),
            segments: Vec::new(),
            hovered_chapter: None,
        }
    }

    pub(in crate::app) fn annotations(&self) -> &[Annotation] {
        self.manifest
            .as_ref()
            .map(|manifest| manifest.qa.as_slice())
            .unwrap_or(&[])
    }
}

/// Fade bookkeeping for the annotation callout, keyed on the active annotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayTransition {
    pub(in crate::app) key: Option<ActiveKey>,
    pub(in crate::app) changed_at: Option<Instant>,
}

impl OverlayTransition {
    /// Record a new key. Returns `true` when the key actually changed.
    pub(in crate::app) fn update(&mut self, key: Option<ActiveKey>, now: Instant) -> bool {
        if self.key == key {
            return false;
        }
        self.key = key;
        self.changed_at = Some(now);
        true
    }

    /// Opacity of the entering callout in `[0, 1]`.
    pub(in crate::app) fn opacity(&self, now: Instant, fade: Duration) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return 1.0;
        };
        if fade.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(changed_at).as_secs_f32();
        (elapsed / fade.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub(in crate::app) fn is_fading(&self, now: Instant, fade: Duration) -> bool {
        self.opacity(now, fade) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_key_does_not_restart_fade() {
        let now = Instant::now();
        let mut overlay = OverlayTransition::default();
        assert!(overlay.update(Some(ActiveKey::from_time(12.0)), now));
        assert!(!overlay.update(Some(ActiveKey::from_time(12.0)), now + Duration::from_secs(1)));
        assert_eq!(overlay.changed_at, Some(now));
    }

    #[test]
    fn opacity_ramps_over_fade() {
        let now = Instant::now();
        let mut overlay = OverlayTransition::default();
        overlay.update(Some(ActiveKey::from_time(1.0)), now);
        let fade = Duration::from_millis(200);
        assert_eq!(overlay.opacity(now, fade), 0.0);
        assert!((overlay.opacity(now + Duration::from_millis(100), fade) - 0.5).abs() < 1e-6);
        assert_eq!(overlay.opacity(now + Duration::from_millis(500), fade), 1.0);
        assert!(!overlay.is_fading(now + Duration::from_millis(500), fade));
    }

    #[test]
    fn zero_fade_is_fully_visible() {
        let now = Instant::now();
        let mut overlay = OverlayTransition::default();
        overlay.update(None, now);
        assert_eq!(overlay.opacity(now, Duration::ZERO), 1.0);
    }
}
