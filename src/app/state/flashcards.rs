use strategix_core::{CardDeck, NavCommand, Navigator, SideEffect};

/// One flashcard screen. `None` while its deck is still loading.
pub struct FlashcardState<D: CardDeck> {
    pub(in crate::app) navigator: Option<Navigator<D>>,
}

impl<D: CardDeck> FlashcardState<D> {
    pub(in crate::app) fn loading() -> Self {
        Self { navigator: None }
    }

    pub(in crate::app) fn ready(deck: D) -> Self {
        Self {
            navigator: Some(Navigator::new(deck)),
        }
    }

    pub(in crate::app) fn apply(&mut self, command: NavCommand) -> Option<SideEffect> {
        self.navigator.as_mut()?.apply(command)
    }
}
