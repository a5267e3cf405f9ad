//! Playback-synchronised annotations and flashcard navigation.
//!
//! Everything in this crate is pure computation over in-memory data; the
//! desktop shell owns rendering, timers and the clipboard.

pub mod annotation;
pub mod chapters;
pub mod dataset;
pub mod deck;
pub mod keys;
pub mod markup;
pub mod navigation;
pub mod playback;
pub mod timefmt;

pub use annotation::{ActiveKey, Annotation, VISIBILITY_WINDOW_SECS, is_candidate, select_active};
pub use chapters::{ChapterBreakpoint, ChapterSegment, breakpoints_sorted, segment_chapters};
pub use dataset::{
    VideoManifest, load_manifest, load_question_dataset, load_question_dataset_or_default,
    load_response_table,
};
pub use deck::{CardDeck, DeckCard, QuestionDataset, ResponseTable};
pub use keys::{KeyInput, KeyName, dispatch};
pub use markup::{MarkupSpan, parse_markup};
pub use navigation::{MAX_ZOOM, MIN_ZOOM, NavCommand, NavigationState, Navigator, SideEffect};
pub use playback::{MediaClock, PlaybackTransport};
pub use timefmt::format_time;
