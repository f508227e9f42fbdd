use crate::theme::{kind_style, BASE_STYLE, HEADING_STYLE, MUTED_STYLE};
use churchcal::Event;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use time::Date;

const POPUP_WIDTH: u16 = 60;

/// Popup showing everything known about the events on one day
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Details<'a> {
    pub(crate) date: Date,
    pub(crate) events: Vec<&'a Event>,
}

impl Widget for Details<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(self.lines());
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = POPUP_WIDTH.min(area.width);
        let [popup_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(popup_area);
        let outer_area = Rect {
            x: popup_area.x.saturating_sub(1),
            y: popup_area.y,
            width: popup_area.width.saturating_add(2),
            height: popup_area.height,
        }
        .intersection(area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(format!(
                        " {} {} {} ",
                        self.date.day(),
                        self.date.month(),
                        self.date.year()
                    ))
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .render(popup_area, buf);
    }
}

impl<'a> Details<'a> {
    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if self.events.is_empty() {
            lines.push(Line::styled("Nothing scheduled for this day.", MUTED_STYLE));
        }
        for (i, &ev) in self.events.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let mut heading = vec![Span::styled(ev.title.as_str(), HEADING_STYLE)];
            if ev.is_highlighted {
                heading.push(Span::styled(" ★", HEADING_STYLE));
            }
            lines.push(Line::from(heading));
            lines.push(Line::styled(ev.kind.label(), kind_style(ev.kind)));
            lines.push(field(
                "When",
                if ev.time.trim().is_empty() {
                    ev.date.clone()
                } else {
                    format!("{} at {}", ev.date, ev.time)
                },
            ));
            if !ev.location.trim().is_empty() {
                lines.push(field("Where", ev.location.clone()));
            }
            if !ev.description.trim().is_empty() {
                lines.push(Line::styled(ev.description.as_str(), BASE_STYLE));
            }
            if let Some(contact) = &ev.contact {
                let mut who = contact.name.clone();
                for extra in [&contact.phone, &contact.email].into_iter().flatten() {
                    who.push_str(", ");
                    who.push_str(extra);
                }
                lines.push(field("Contact", who));
            }
            if let Some(link) = ev.registration() {
                lines.push(field("Register", link.to_owned()));
            }
        }
        lines
    }
}

fn field(name: &'static str, value: String) -> Line<'static> {
    Line::from_iter([
        Span::styled(format!("{name}: "), MUTED_STYLE),
        Span::styled(value, BASE_STYLE),
    ])
}
