use crate::config::Screen;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;
use strategix_core::{NavCommand, QuestionDataset, VideoManifest};

/// Which flashcard deck a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckId {
    Questions,
    Responses,
}

impl DeckId {
    pub fn for_screen(screen: Screen) -> Option<DeckId> {
        match screen {
            Screen::Questions => Some(DeckId::Questions),
            Screen::Responses => Some(DeckId::Responses),
            Screen::Video => None,
        }
    }
}

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ShowScreen(Screen),
    ToggleTheme,
    ManifestLoaded(VideoManifest),
    ManifestLoadFailed(String),
    DurationResolved(Option<f64>),
    TogglePlayPause,
    SeekTo(f64),
    SeekAndPlay(f64),
    ChapterHovered(Option<usize>),
    QuestionsLoaded(QuestionDataset),
    Navigate(DeckId, NavCommand),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
    PollSystemSignals,
    SafeQuit,
}
