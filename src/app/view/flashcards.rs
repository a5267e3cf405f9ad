use super::super::messages::{DeckId, Message};
use super::super::state::{ANSWER_SCALE, App, QUESTION_SCALE, SIDEBAR_WIDTH_PX, TITLE_SCALE};
use super::markup::rich_markup;
use iced::alignment::Vertical;
use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};
use strategix_core::{CardDeck, NavCommand, Navigator};

const ZOOM_HINT: &str =
    "Pfeiltasten / N / P: blättern · A / Leertaste: Antwort · +/-/0: Zoom · Strg+C: kopieren";

impl App {
    pub(super) fn flashcard_view<'a, D: CardDeck>(
        &'a self,
        deck_id: DeckId,
        navigator: Option<&'a Navigator<D>>,
    ) -> Element<'a, Message> {
        let Some(navigator) = navigator else {
            return container(text("Q&A wird geladen…"))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };
        let deck = navigator.deck();
        let state = navigator.state();
        let title = text(deck.title()).size(self.scaled_size(state.zoom_scale, TITLE_SCALE));

        let Some(card) = navigator.current_card() else {
            return column![title, text("Keine Fragen gefunden.")]
                .spacing(12)
                .into();
        };

        let zoom = state.zoom_scale;
        let question = text(card.question.as_str())
            .size(self.scaled_size(zoom, QUESTION_SCALE))
            .wrapping(Wrapping::WordOrGlyph);

        let answer: Element<'a, Message> = if state.answer_visible {
            rich_markup(&card.answer, self.scaled_size(zoom, ANSWER_SCALE), None)
                .wrapping(Wrapping::WordOrGlyph)
                .width(Length::Fill)
                .into()
        } else {
            text("Antwort verborgen")
                .size(self.scaled_size(zoom, ANSWER_SCALE))
                .style(text::secondary)
                .into()
        };

        let navigate = move |command: NavCommand| Message::Navigate(deck_id, command);
        let toggle_label = if state.answer_visible {
            "Antwort verbergen"
        } else {
            "Antwort zeigen"
        };
        let controls = row![
            button("Zurück").on_press(navigate(NavCommand::Previous)),
            button(toggle_label).on_press(navigate(NavCommand::ToggleAnswer)),
            button("Weiter").on_press(navigate(NavCommand::Next)),
            button("Kopieren").on_press(navigate(NavCommand::CopyAnswer)),
            horizontal_space(),
            button("−").on_press(navigate(NavCommand::ZoomOut)),
            text(format!("{:.0}%", zoom * 100.0)),
            button("+").on_press(navigate(NavCommand::ZoomIn)),
            button("Reset").on_press(navigate(NavCommand::ZoomReset)),
            text(navigator.position_label()),
        ]
        .spacing(8)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let card_view = container(column![question, answer].spacing(16))
            .padding(16)
            .width(Length::Fill)
            .style(container::rounded_box);

        let main = column![
            title,
            controls,
            scrollable(card_view).height(Length::Fill),
            text(ZOOM_HINT).size(self.scaled_size(zoom, 0.6)).style(text::secondary),
        ]
        .spacing(12)
        .width(Length::Fill);

        let selected = state.current_index;
        let entries = deck.cards().enumerate().map(|(idx, listed)| {
            let style = if selected == Some(idx) {
                button::primary
            } else {
                button::text
            };
            button(text(listed.question.as_str()).wrapping(Wrapping::WordOrGlyph))
                .width(Length::Fill)
                .style(style)
                .on_press(navigate(NavCommand::JumpTo(idx)))
                .into()
        });
        let list: Column<'a, Message> = Column::with_children(entries).spacing(4);

        row![
            main,
            container(scrollable(list))
                .width(Length::Fixed(SIDEBAR_WIDTH_PX))
                .height(Length::Fill)
                .padding(8)
                .style(container::bordered_box),
        ]
        .spacing(16)
        .into()
    }
}
