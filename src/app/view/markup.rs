use super::super::messages::Message;
use iced::widget::text::{Rich, Span};
use iced::{Color, Font, font};
use strategix_core::{MarkupSpan, parse_markup};

/// Render answer markup as rich text. `color` overrides the theme text color.
pub(super) fn rich_markup(
    source: &str,
    size: f32,
    color: Option<Color>,
) -> Rich<'static, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let spans: Vec<Span<'static, Message>> = parse_markup(source)
        .into_iter()
        .map(|span| {
            let styled = match span {
                MarkupSpan::Text(content) => Span::new(content),
                MarkupSpan::Bold(content) => Span::new(content).font(bold),
                MarkupSpan::Code(content) => Span::new(content).font(Font::MONOSPACE),
                MarkupSpan::LineBreak => Span::new("\n"),
            };
            let styled = styled.size(size);
            match color {
                Some(color) => styled.color(color),
                None => styled,
            }
        })
        .collect();

    Rich::with_spans(spans)
}
