use crate::calendar::MonthView;
use crate::theme::{kind_style, BASE_STYLE, HEADING_STYLE, MUTED_STYLE, TITLE_STYLE};
use churchcal::{services_on, Event};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use time::Date;

const UPCOMING_LIMIT: usize = 6;
const FEATURED_LIMIT: usize = 3;
const HIGHLIGHT_MARK: &str = " ★";

/// Side panel listing what is on for the selected day and what is coming up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Agenda<'a>(pub(crate) &'a MonthView);

impl Widget for Agenda<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.0;
        let selected = view.selected();
        let mut lines = Vec::new();

        lines.push(Line::styled("Events", HEADING_STYLE));
        let events = view.selected_events();
        if events.is_empty() {
            lines.push(Line::styled("No events scheduled", MUTED_STYLE));
        }
        for ev in events {
            lines.push(event_line(clock(ev), ev));
            if !ev.location.trim().is_empty() {
                lines.push(Line::styled(format!("       @ {}", ev.location), MUTED_STYLE));
            }
        }

        lines.push(Line::default());
        lines.push(Line::styled("Regular services", HEADING_STYLE));
        let mut any_service = false;
        for svc in services_on(selected.weekday()) {
            any_service = true;
            lines.push(Line::from_iter([
                Span::styled(format!("{:<7}", svc.time), BASE_STYLE),
                Span::styled(svc.title, kind_style(svc.kind)),
            ]));
        }
        if !any_service {
            lines.push(Line::styled("No regular services", MUTED_STYLE));
        }

        lines.push(Line::default());
        lines.push(Line::styled("Featured", HEADING_STYLE));
        let featured = view.highlighted(FEATURED_LIMIT);
        if featured.is_empty() {
            lines.push(Line::styled("Nothing featured", MUTED_STYLE));
        }
        for ev in featured {
            lines.push(event_line(short_date(ev), ev));
        }

        lines.push(Line::default());
        lines.push(Line::styled("Upcoming", HEADING_STYLE));
        let upcoming = view.upcoming(UPCOMING_LIMIT);
        if upcoming.is_empty() {
            lines.push(Line::styled("No upcoming events", MUTED_STYLE));
        }
        for ev in upcoming {
            lines.push(event_line(format!("{} {}", short_date(ev), clock(ev)), ev));
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(Span::styled(day_title(selected), TITLE_STYLE))
                    .style(BASE_STYLE),
            )
            .render(area, buf);
    }
}

fn event_line(prefix: String, ev: &Event) -> Line<'_> {
    let mut spans = vec![
        Span::styled(format!("{prefix} "), BASE_STYLE),
        Span::styled(ev.title.as_str(), BASE_STYLE),
        Span::styled(format!(" · {}", ev.kind), kind_style(ev.kind)),
    ];
    if ev.is_highlighted {
        spans.push(Span::styled(HIGHLIGHT_MARK, HEADING_STYLE));
    }
    Line::from(spans)
}

/// "HH:MM", or blanks of the same width for events without a usable time
fn clock(ev: &Event) -> String {
    match ev.start_time() {
        Some(t) => format!("{:02}:{:02} ", t.hour(), t.minute()),
        None => String::from("  --  "),
    }
}

/// "Sat 10 Feb"
fn short_date(ev: &Event) -> String {
    match ev.calendar_date() {
        Some(d) => format!(
            "{} {:2} {}",
            abbrev(&d.weekday().to_string()),
            d.day(),
            abbrev(&d.month().to_string())
        ),
        None => ev.date.clone(),
    }
}

fn day_title(date: Date) -> String {
    format!(
        " {}, {} {} {} ",
        date.weekday(),
        date.day(),
        date.month(),
        date.year()
    )
}

fn abbrev(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use churchcal::EventKind;
    use time::macros::date;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_render_day() {
        let mut special = Event::new("2", "Retiro", "2024-02-10")
            .at("09:30")
            .of_kind(EventKind::Special)
            .highlighted();
        special.location = String::from("Campamento");
        let events = vec![
            Event::new("1", "Ensayo", "2024-02-09").at("20:00"),
            special,
            Event::new("3", "Bautismos", "2024-03-03").of_kind(EventKind::Service),
        ];
        let view = MonthView::new(date!(2024 - 02 - 09), events).start_date(date!(2024 - 02 - 10));
        let area = Rect::new(0, 0, 60, 22);
        let mut buf = Buffer::empty(area);
        Agenda(&view).render(area, &mut buf);
        let rows = rows(&buf);
        assert!(rows[0].contains(" Saturday, 10 February 2024 "));
        assert_eq!(rows[1].trim_matches(['│', ' ']), "Events");
        assert!(rows[2].contains("09:30  Retiro · Special Event ★"));
        assert!(rows[3].contains("@ Campamento"));
        assert_eq!(rows[5].trim_matches(['│', ' ']), "Regular services");
        assert!(rows[6].contains("18:00  Youth"));
        assert_eq!(rows[8].trim_matches(['│', ' ']), "Featured");
        assert!(rows[9].contains("Sat 10 Feb Retiro"));
        assert_eq!(rows[11].trim_matches(['│', ' ']), "Upcoming");
        assert!(rows[12].contains("Fri  9 Feb 20:00  Ensayo · Event"));
        assert!(rows[13].contains("Sat 10 Feb 09:30  Retiro"));
        assert!(rows[14].contains("Sun  3 Mar   --   Bautismos · Service"));
    }

    #[test]
    fn test_render_empty() {
        let view = MonthView::new(date!(2024 - 02 - 07), Vec::new());
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        Agenda(&view).render(area, &mut buf);
        let rows = rows(&buf);
        assert!(rows[2].contains("No events scheduled"));
        assert!(rows[5].contains("No regular services"));
        assert!(rows[8].contains("Nothing featured"));
        assert!(rows[11].contains("No upcoming events"));
    }
}
