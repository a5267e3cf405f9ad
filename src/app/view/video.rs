use super::super::messages::Message;
use super::super::state::{
    App, BADGE_TEXT_SIZE_PX, CHAPTER_BAR_HEIGHT_PX, CHAPTER_LABEL_SIZE_PX, SEEK_SLIDER_STEP,
    SIDEBAR_WIDTH_PX,
};
use super::markup::rich_markup;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, image, mouse_area, row, scrollable,
    slider, text, tooltip,
};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::path::Path;
use std::time::Instant;
use strategix_core::{ChapterSegment, PlaybackTransport, format_time};

impl App {
    pub(super) fn video_view(&self) -> Element<'_, Message> {
        let Some(manifest) = self.video.manifest.as_ref() else {
            let status = match self.video.load_error.as_deref() {
                Some(error) => format!("Video konnte nicht geladen werden: {error}"),
                None => "Video wird geladen…".to_string(),
            };
            return container(text(status))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let title = text(manifest.title.as_str()).size(self.config.text_size as f32 * 1.4);

        let stage = column![self.poster(), self.annotation_callout()]
            .spacing(12)
            .width(Length::Fill);

        let main = column![
            title,
            container(stage).height(Length::Fill),
            self.transport_controls(),
            self.chapter_bar(),
        ]
        .spacing(12)
        .width(Length::Fill);

        row![main, self.annotation_sidebar()]
            .spacing(16)
            .height(Length::Fill)
            .into()
    }

    fn poster(&self) -> Element<'_, Message> {
        let poster = self
            .video
            .manifest
            .as_ref()
            .and_then(|manifest| manifest.poster.as_deref())
            .filter(|path| Path::new(path).exists());

        match poster {
            Some(path) => image(image::Handle::from_path(path))
                .width(Length::Fill)
                .into(),
            None => container(text("▶").size(64.0))
                .center_x(Length::Fill)
                .height(Length::FillPortion(3))
                .style(container::rounded_box)
                .into(),
        }
    }

    fn transport_controls(&self) -> Element<'_, Message> {
        let playing = self.video.clock.is_playing();
        let position = self.video.position;
        let duration = self.video.clock.duration();

        let play_label = if playing { "Pause" } else { "Play" };
        let time_label = match duration {
            Some(duration) => format!("{} / {}", format_time(position), format_time(duration)),
            None => format!("{} / --:--", format_time(position)),
        };

        let upper = duration.unwrap_or(position.max(1.0));
        let seek = slider(0.0..=upper, position.min(upper), Message::SeekTo)
            .step(SEEK_SLIDER_STEP)
            .width(Length::Fill);

        row![
            button(play_label).on_press(Message::TogglePlayPause),
            seek,
            text(time_label),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn annotation_callout(&self) -> Element<'_, Message> {
        let Some(active) = self.video.active.as_ref() else {
            return horizontal_space().into();
        };
        let opacity = self
            .video
            .overlay
            .opacity(Instant::now(), self.fade_duration());

        let size = self.config.text_size as f32;
        let body = column![
            text(format!("{} · {}", format_time(active.time), active.question))
                .size(BADGE_TEXT_SIZE_PX),
            rich_markup(&active.answer, size, None)
                .wrapping(Wrapping::WordOrGlyph)
                .width(Length::Fill),
        ]
        .spacing(6);

        container(body)
            .padding(12)
            .width(Length::Fill)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(fade(palette.background.base.text, opacity)),
                    background: Some(Background::Color(fade(
                        palette.background.weak.color,
                        opacity,
                    ))),
                    border: Border {
                        color: fade(palette.primary.base.color, opacity),
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..container::Style::default()
                }
            })
            .into()
    }

    fn chapter_bar(&self) -> Element<'_, Message> {
        if self.video.segments.is_empty() {
            return container(text("Kapitel werden geladen…").size(CHAPTER_LABEL_SIZE_PX))
                .center_x(Length::Fill)
                .height(Length::Fixed(CHAPTER_BAR_HEIGHT_PX))
                .style(container::bordered_box)
                .into();
        }

        let bar = Row::with_children(
            self.video
                .segments
                .iter()
                .enumerate()
                .map(|(idx, segment)| self.chapter_segment(idx, segment)),
        )
        .spacing(2)
        .height(Length::Fixed(CHAPTER_BAR_HEIGHT_PX))
        .width(Length::Fill);

        bar.into()
    }

    fn chapter_segment<'a>(
        &'a self,
        idx: usize,
        segment: &'a ChapterSegment,
    ) -> Element<'a, Message> {
        let hovered = self.video.hovered_chapter == Some(idx);
        let current = self.video.position >= segment.start && self.video.position < segment.end;
        let portion = (segment.width_percent * 100.0).round().max(1.0) as u16;

        let label = text(segment.label.as_str())
            .size(CHAPTER_LABEL_SIZE_PX)
            .wrapping(Wrapping::None)
            .align_x(Horizontal::Center);

        let cell = container(label)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let pair = if current {
                    palette.primary.base
                } else if hovered {
                    palette.primary.weak
                } else {
                    palette.background.strong
                };
                container::Style {
                    text_color: Some(pair.text),
                    background: Some(Background::Color(pair.color)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }
            });

        let hint = container(text(format!("{} · {}", format_time(segment.start), segment.label)))
            .padding(6)
            .style(container::rounded_box);

        let target = mouse_area(cell)
            .on_enter(Message::ChapterHovered(Some(idx)))
            .on_exit(Message::ChapterHovered(None))
            .on_press(Message::SeekAndPlay(segment.start));

        container(tooltip(target, hint, tooltip::Position::Top))
            .width(Length::FillPortion(portion))
            .into()
    }

    fn annotation_sidebar(&self) -> Element<'_, Message> {
        let active_time = self.video.active.as_ref().map(|active| active.time);
        let entries = self.video.annotations().iter().map(|annotation| {
            let label = text(format!(
                "{}  {}",
                format_time(annotation.time),
                annotation.question
            ))
            .wrapping(Wrapping::WordOrGlyph);
            let style = if active_time == Some(annotation.time) {
                button::primary
            } else {
                button::text
            };
            button(label)
                .width(Length::Fill)
                .style(style)
                .on_press(Message::SeekAndPlay(annotation.time))
                .into()
        });

        let list: Column<'_, Message> = Column::with_children(entries).spacing(4);
        let heading = text("Fragen im Video").size(BADGE_TEXT_SIZE_PX + 4.0);

        container(column![heading, scrollable(list)].spacing(8))
            .width(Length::Fixed(SIDEBAR_WIDTH_PX))
            .height(Length::Fill)
            .padding(8)
            .style(container::bordered_box)
            .into()
    }
}

fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}
