use std::time::Duration;

/// Seek granularity of the position slider, in seconds.
pub(crate) const SEEK_SLIDER_STEP: f64 = 0.1;
/// How often the Ctrl+C flag is polled.
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub(crate) const CHAPTER_BAR_HEIGHT_PX: f32 = 32.0;
pub(crate) const CHAPTER_LABEL_SIZE_PX: f32 = 11.0;
pub(crate) const BADGE_TEXT_SIZE_PX: f32 = 12.0;
pub(crate) const SIDEBAR_WIDTH_PX: f32 = 360.0;
/// Question and answer sizes relative to the configured text size.
pub(crate) const QUESTION_SCALE: f32 = 1.3;
pub(crate) const ANSWER_SCALE: f32 = 1.0;
pub(crate) const TITLE_SCALE: f32 = 1.6;
