use churchcal::EventKind;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// Days belonging to the months before and after the displayed one
pub(crate) const OUTSIDE_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const HEADING_STYLE: Style = BASE_STYLE.fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub(crate) const MUTED_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const fn kind_style(kind: EventKind) -> Style {
    match kind {
        EventKind::Service => BASE_STYLE.fg(Color::Yellow),
        EventKind::BibleStudy => BASE_STYLE.fg(Color::LightBlue),
        EventKind::Youth => BASE_STYLE.fg(Color::Green),
        EventKind::Prayer => BASE_STYLE.fg(Color::Magenta),
        EventKind::Special => BASE_STYLE.fg(Color::Red),
        EventKind::Other => BASE_STYLE.fg(Color::Gray),
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
