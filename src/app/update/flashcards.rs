use super::super::messages::DeckId;
use super::super::state::{App, FlashcardState};
use super::Effect;
use strategix_core::{CardDeck, NavCommand, QuestionDataset, SideEffect};
use tracing::info;

impl App {
    pub(super) fn handle_questions_loaded(&mut self, dataset: QuestionDataset) {
        info!(title = %dataset.title(), cards = dataset.len(), "Questions loaded");
        self.questions = FlashcardState::ready(dataset);
    }

    pub(super) fn handle_navigate(
        &mut self,
        deck: DeckId,
        command: NavCommand,
        effects: &mut Vec<Effect>,
    ) {
        let side_effect = match deck {
            DeckId::Questions => self.questions.apply(command),
            DeckId::Responses => self.responses.apply(command),
        };
        if let Some(SideEffect::CopyToClipboard(text)) = side_effect {
            effects.push(Effect::CopyToClipboard(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn questions_arrive_after_loading() {
        let mut app = test_app(AppConfig::default());
        assert!(app.questions.navigator.is_none());
        app.reduce(Message::QuestionsLoaded(QuestionDataset::empty()));
        let nav = app.questions.navigator.as_ref().unwrap();
        assert_eq!(nav.position_label(), "0 / 0");
    }

    #[test]
    fn copy_from_builtin_responses() {
        let mut app = test_app(AppConfig::default());
        let effects = app.reduce(Message::Navigate(DeckId::Responses, NavCommand::CopyAnswer));
        let expected = app
            .responses
            .navigator
            .as_ref()
            .and_then(|nav| nav.current_card())
            .map(|card| card.answer.clone())
            .unwrap();
        assert_eq!(effects, vec![Effect::CopyToClipboard(expected)]);
    }

    #[test]
    fn zoom_is_tracked_per_deck() {
        let mut app = test_app(AppConfig::default());
        app.reduce(Message::QuestionsLoaded(QuestionDataset::new(
            "t",
            vec![("q".into(), "a".into())],
        )));
        app.reduce(Message::Navigate(DeckId::Responses, NavCommand::ZoomIn));
        let responses = app.responses.navigator.as_ref().unwrap().state();
        let questions = app.questions.navigator.as_ref().unwrap().state();
        assert!((responses.zoom_scale - 1.1).abs() < 1e-6);
        assert!((questions.zoom_scale - 1.0).abs() < 1e-6);
    }
}
