use super::super::super::messages::{DeckId, Message};
use super::super::super::state::App;
use super::super::Effect;
use strategix_core::dispatch;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ShowScreen(screen) => self.handle_show_screen(screen),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::ManifestLoaded(manifest) => {
                self.handle_manifest_loaded(manifest, &mut effects)
            }
            Message::ManifestLoadFailed(error) => self.handle_manifest_load_failed(error),
            Message::DurationResolved(duration) => self.handle_duration_resolved(duration),
            Message::TogglePlayPause => self.handle_toggle_play_pause(),
            Message::SeekTo(secs) => self.handle_seek(secs, false),
            Message::SeekAndPlay(secs) => self.handle_seek(secs, true),
            Message::ChapterHovered(idx) => self.video.hovered_chapter = idx,
            Message::QuestionsLoaded(dataset) => self.handle_questions_loaded(dataset),
            Message::Navigate(deck, command) => self.handle_navigate(deck, command, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                let Some(deck) = DeckId::for_screen(self.screen) else {
                    return effects;
                };
                let input = super::shortcuts::key_input(&key, modifiers);
                if let Some(command) = dispatch(&input) {
                    effects.extend(self.reduce(Message::Navigate(deck, command)));
                } else {
                    debug!(?input, "Key passed through");
                }
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::PollSystemSignals => {
                if crate::take_sigint_requested() {
                    info!("Ctrl+C received; quitting");
                    effects.push(Effect::QuitSafely);
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::test_app;
    use super::*;
    use crate::config::{AppConfig, Screen};
    use iced::keyboard::{Key, Modifiers, key};
    use strategix_core::{CardDeck, NavCommand, QuestionDataset};

    fn flashcard_app() -> App {
        let config = AppConfig {
            start_screen: Screen::Questions,
            ..AppConfig::default()
        };
        let mut app = test_app(config);
        app.reduce(Message::QuestionsLoaded(QuestionDataset::new(
            "Guests",
            vec![
                ("Wifi?".into(), "SSID Borgo".into()),
                ("Pets?".into(), "Dogs welcome".into()),
            ],
        )));
        app
    }

    fn press(app: &mut App, key: Key, modifiers: Modifiers) -> Vec<Effect> {
        app.reduce(Message::KeyPressed { key, modifiers })
    }

    fn questions_index(app: &App) -> Option<usize> {
        app.questions
            .navigator
            .as_ref()
            .and_then(|nav| nav.state().current_index)
    }

    #[test]
    fn arrow_right_advances_and_hides_answer() {
        let mut app = flashcard_app();
        press(&mut app, Key::Character("a".into()), Modifiers::empty());
        press(&mut app, Key::Named(key::Named::ArrowRight), Modifiers::empty());
        let nav = app.questions.navigator.as_ref().unwrap();
        assert_eq!(nav.state().current_index, Some(1));
        assert!(!nav.state().answer_visible);
    }

    #[test]
    fn ctrl_c_emits_clipboard_effect() {
        let mut app = flashcard_app();
        let effects = press(&mut app, Key::Character("c".into()), Modifiers::CTRL);
        assert_eq!(effects, vec![Effect::CopyToClipboard("SSID Borgo".into())]);
        assert!(!app.questions.navigator.as_ref().unwrap().state().answer_visible);
    }

    #[test]
    fn keys_on_video_screen_do_not_touch_decks() {
        let mut app = flashcard_app();
        app.reduce(Message::ShowScreen(Screen::Video));
        press(&mut app, Key::Character("n".into()), Modifiers::empty());
        assert_eq!(questions_index(&app), Some(0));
    }

    #[test]
    fn keys_target_the_visible_deck() {
        let mut app = flashcard_app();
        app.reduce(Message::ShowScreen(Screen::Responses));
        press(&mut app, Key::Character("p".into()), Modifiers::empty());
        let responses = app.responses.navigator.as_ref().unwrap();
        assert_eq!(
            responses.state().current_index,
            Some(responses.deck().len() - 1)
        );
        assert_eq!(questions_index(&app), Some(0));
    }

    #[test]
    fn list_pick_resets_answer() {
        let mut app = flashcard_app();
        app.reduce(Message::Navigate(DeckId::Questions, NavCommand::ToggleAnswer));
        app.reduce(Message::Navigate(DeckId::Questions, NavCommand::JumpTo(1)));
        let nav = app.questions.navigator.as_ref().unwrap();
        assert_eq!(nav.state().current_index, Some(1));
        assert!(!nav.state().answer_visible);
    }

    #[test]
    fn empty_dataset_copy_is_silent() {
        let mut app = test_app(AppConfig {
            start_screen: Screen::Questions,
            ..AppConfig::default()
        });
        app.reduce(Message::QuestionsLoaded(QuestionDataset::empty()));
        let effects = press(&mut app, Key::Character("c".into()), Modifiers::CTRL);
        assert!(effects.is_empty());
        assert!(press(&mut app, Key::Character("n".into()), Modifiers::empty()).is_empty());
        assert_eq!(questions_index(&app), None);
    }

    #[test]
    fn unbound_keys_produce_no_effects() {
        let mut app = flashcard_app();
        assert!(press(&mut app, Key::Character("x".into()), Modifiers::empty()).is_empty());
        assert_eq!(questions_index(&app), Some(0));
    }
}
