use super::super::state::App;
use crate::config::{Screen, ThemeMode};
use tracing::debug;

impl App {
    pub(super) fn handle_show_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!(from = %self.screen, to = %screen, "Switching screen");
            self.screen = screen;
        }
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        debug!(theme = ?self.config.theme, "Theme toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn theme_toggles_back_and_forth() {
        let mut app = test_app(AppConfig::default());
        let start = app.config.theme;
        app.reduce(Message::ToggleTheme);
        assert_ne!(app.config.theme, start);
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, start);
    }

    #[test]
    fn screen_switch_keeps_deck_state() {
        let mut app = test_app(AppConfig::default());
        app.reduce(Message::ShowScreen(Screen::Responses));
        app.reduce(Message::KeyPressed {
            key: iced::keyboard::Key::Character("n".into()),
            modifiers: iced::keyboard::Modifiers::empty(),
        });
        app.reduce(Message::ShowScreen(Screen::Video));
        app.reduce(Message::ShowScreen(Screen::Responses));
        let state = app.responses.navigator.as_ref().unwrap().state();
        assert_eq!(state.current_index, Some(1));
        assert_eq!(app.screen, Screen::Responses);
    }
}
