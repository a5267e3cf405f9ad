//! Flashcard navigation: current card, answer visibility and zoom.

use crate::deck::{CardDeck, DeckCard};
use tracing::debug;

pub const MIN_ZOOM: f32 = 0.8;
pub const MAX_ZOOM: f32 = 1.6;
pub const DEFAULT_ZOOM: f32 = 1.0;
const ZOOM_STEP: f32 = 0.1;

/// Commands accepted by [`Navigator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    JumpTo(usize),
    ToggleAnswer,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    CopyAnswer,
}

/// Work the host must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Best-effort clipboard write; failures are ignored by the host.
    CopyToClipboard(String),
}

/// Per-view navigation model. `current_index` is `None` only for an empty deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub current_index: Option<usize>,
    pub answer_visible: bool,
    pub zoom_scale: f32,
}

impl NavigationState {
    pub fn for_deck_len(len: usize) -> Self {
        Self {
            current_index: if len == 0 { None } else { Some(0) },
            answer_visible: false,
            zoom_scale: DEFAULT_ZOOM,
        }
    }
}

/// Navigation state machine bound to one immutable deck.
#[derive(Debug, Clone)]
pub struct Navigator<D: CardDeck> {
    deck: D,
    state: NavigationState,
}

impl<D: CardDeck> Navigator<D> {
    pub fn new(deck: D) -> Self {
        let state = NavigationState::for_deck_len(deck.len());
        Self { deck, state }
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_card(&self) -> Option<&DeckCard> {
        self.state.current_index.and_then(|idx| self.deck.card(idx))
    }

    /// `"3 / 12"`, or `"0 / 0"` for an empty deck.
    pub fn position_label(&self) -> String {
        match self.state.current_index {
            Some(idx) => format!("{} / {}", idx + 1, self.deck.len()),
            None => "0 / 0".to_string(),
        }
    }

    pub fn apply(&mut self, command: NavCommand) -> Option<SideEffect> {
        debug!(?command, "Navigation command");
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::JumpTo(idx) => self.jump_to(idx),
            NavCommand::ToggleAnswer => self.toggle_answer(),
            NavCommand::ZoomIn => self.zoom_in(),
            NavCommand::ZoomOut => self.zoom_out(),
            NavCommand::ZoomReset => self.zoom_reset(),
            NavCommand::CopyAnswer => return self.copy_answer().map(SideEffect::CopyToClipboard),
        }
        None
    }

    pub fn next(&mut self) {
        let len = self.deck.len();
        if let Some(idx) = self.state.current_index.filter(|_| len > 0) {
            self.show_card((idx + 1) % len);
        }
    }

    pub fn previous(&mut self) {
        let len = self.deck.len();
        if let Some(idx) = self.state.current_index.filter(|_| len > 0) {
            self.show_card((idx + len - 1) % len);
        }
    }

    /// Select a card directly; out-of-range indices are ignored.
    pub fn jump_to(&mut self, idx: usize) {
        if idx < self.deck.len() {
            self.show_card(idx);
        }
    }

    pub fn toggle_answer(&mut self) {
        self.state.answer_visible = !self.state.answer_visible;
    }

    pub fn zoom_in(&mut self) {
        self.state.zoom_scale = round_hundredths(self.state.zoom_scale + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.state.zoom_scale = round_hundredths(self.state.zoom_scale - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn zoom_reset(&mut self) {
        self.state.zoom_scale = DEFAULT_ZOOM;
    }

    /// Answer text of the current card, if any.
    pub fn copy_answer(&self) -> Option<String> {
        self.current_card().map(|card| card.answer.clone())
    }

    fn show_card(&mut self, idx: usize) {
        self.state.current_index = Some(idx);
        self.state.answer_visible = false;
    }
}

fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
