mod flashcards;
mod markup;
mod video;

use super::messages::{DeckId, Message};
use super::state::App;
use crate::config::{Screen, ThemeMode};
use iced::alignment::Vertical;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.screen {
            Screen::Video => self.video_view(),
            Screen::Questions => {
                self.flashcard_view(DeckId::Questions, self.questions.navigator.as_ref())
            }
            Screen::Responses => {
                self.flashcard_view(DeckId::Responses, self.responses.navigator.as_ref())
            }
        };

        column![self.top_bar(), container(body).height(Length::Fill)]
            .padding(16)
            .spacing(12)
            .into()
    }

    fn top_bar(&self) -> Element<'_, Message> {
        let mut tabs = row![].spacing(8).align_y(Vertical::Center);
        for screen in Screen::ALL {
            let tab = if screen == self.screen {
                button(text(screen.to_string())).style(button::primary)
            } else {
                button(text(screen.to_string()))
                    .style(button::secondary)
                    .on_press(Message::ShowScreen(screen))
            };
            tabs = tabs.push(tab);
        }

        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        row![
            tabs,
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
            button("Quit").on_press(Message::SafeQuit),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }
}
