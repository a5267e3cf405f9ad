//! Time-stamped question/answer callouts and the active-callout selector.

use serde::{Deserialize, Serialize};

/// An annotation stays eligible this many seconds after its timestamp.
pub const VISIBILITY_WINDOW_SECS: f64 = 12.0;

/// A question/answer pair pinned to a playback time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub time: f64,
    #[serde(alias = "q")]
    pub question: String,
    /// May contain `**bold**`, `` `code` `` and line breaks.
    #[serde(alias = "a")]
    pub answer: String,
}

impl Annotation {
    pub fn new(time: f64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            time,
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn key(&self) -> ActiveKey {
        ActiveKey::from_time(self.time)
    }
}

/// Identity of the selected annotation, derived from its timestamp.
///
/// Presenters compare keys between ticks to decide when to run enter/exit
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveKey(u64);

impl ActiveKey {
    pub fn from_time(time: f64) -> Self {
        ActiveKey(time.to_bits())
    }

    pub fn time(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Whether `annotation` may be shown at `position` (inclusive on both ends).
pub fn is_candidate(position: f64, annotation: &Annotation) -> bool {
    position >= annotation.time && position - annotation.time <= VISIBILITY_WINDOW_SECS
}

/// Pick the annotation to show at `position`.
///
/// Linear scan over an unordered slice; the candidate with the largest
/// `time` wins. Among candidates sharing the same `time` the first one in
/// slice order is returned, which callers must not rely on.
pub fn select_active(position: f64, annotations: &[Annotation]) -> Option<&Annotation> {
    let mut best: Option<&Annotation> = None;
    for annotation in annotations {
        if !is_candidate(position, annotation) {
            continue;
        }
        match best {
            Some(current) if current.time >= annotation.time => {}
            _ => best = Some(annotation),
        }
    }
    best
}
