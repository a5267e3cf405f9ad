//! Chapter breakpoints and proportional segment geometry.

use serde::{Deserialize, Serialize};

/// Start of a labelled section of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterBreakpoint {
    pub time: f64,
    pub label: String,
}

impl ChapterBreakpoint {
    pub fn new(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            label: label.into(),
        }
    }
}

/// A renderable chapter span; `width_percent` is relative to the full duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterSegment {
    pub start: f64,
    pub end: f64,
    pub label: String,
    pub width_percent: f64,
}

/// Turn ascending breakpoints into segments spanning `[t_i, t_{i+1})`, the
/// last one ending at `duration`.
///
/// Returns an empty list while the duration is unknown (or not positive) and
/// when there are no breakpoints. Breakpoints must already be sorted; unsorted
/// input yields negative widths rather than being corrected here.
pub fn segment_chapters(
    breakpoints: &[ChapterBreakpoint],
    duration: Option<f64>,
) -> Vec<ChapterSegment> {
    let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) else {
        return Vec::new();
    };

    breakpoints
        .iter()
        .enumerate()
        .map(|(idx, chapter)| {
            let start = chapter.time;
            let end = breakpoints
                .get(idx + 1)
                .map(|next| next.time)
                .unwrap_or(duration);
            ChapterSegment {
                start,
                end,
                label: chapter.label.clone(),
                width_percent: (end - start) / duration * 100.0,
            }
        })
        .collect()
}

/// True when times are non-decreasing. Used for diagnostics only.
pub fn breakpoints_sorted(breakpoints: &[ChapterBreakpoint]) -> bool {
    breakpoints.windows(2).all(|pair| pair[0].time <= pair[1].time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Vec<ChapterBreakpoint> {
        [0.0, 25.0, 60.0, 95.0, 115.0, 125.0]
            .into_iter()
            .enumerate()
            .map(|(i, t)| ChapterBreakpoint::new(t, format!("ch{i}")))
            .collect()
    }

    fn rounded(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[test]
    fn widths_match_reference_layout() {
        let segments = segment_chapters(&demo(), Some(140.0));
        let widths: Vec<f64> = segments.iter().map(|s| rounded(s.width_percent)).collect();
        assert_eq!(widths, vec![17.86, 25.0, 25.0, 14.29, 7.14, 10.71]);
        let total: f64 = segments.iter().map(|s| s.width_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn last_segment_runs_to_duration() {
        let segments = segment_chapters(&demo(), Some(140.0));
        let last = segments.last().unwrap();
        assert_eq!((last.start, last.end), (125.0, 140.0));
        assert_eq!(segments[1].start, 25.0);
        assert_eq!(segments[1].end, 60.0);
    }

    #[test]
    fn unknown_duration_yields_nothing() {
        assert!(segment_chapters(&demo(), None).is_empty());
        assert!(segment_chapters(&demo(), Some(0.0)).is_empty());
        assert!(segment_chapters(&demo(), Some(f64::NAN)).is_empty());
    }

    #[test]
    fn empty_breakpoints_yield_nothing() {
        assert!(segment_chapters(&[], Some(140.0)).is_empty());
    }

    #[test]
    fn unsorted_input_is_not_corrected() {
        let chapters = vec![
            ChapterBreakpoint::new(60.0, "late"),
            ChapterBreakpoint::new(10.0, "early"),
        ];
        assert!(!breakpoints_sorted(&chapters));
        let segments = segment_chapters(&chapters, Some(100.0));
        assert!(segments[0].width_percent < 0.0);
        assert_eq!(segments[0].label, "late");
    }

    #[test]
    fn sorted_check_accepts_ties() {
        let chapters = vec![
            ChapterBreakpoint::new(0.0, "a"),
            ChapterBreakpoint::new(0.0, "b"),
            ChapterBreakpoint::new(3.0, "c"),
        ];
        assert!(breakpoints_sorted(&chapters));
    }
}
