use super::view::MonthView;
use crate::theme::{kind_style, BASE_STYLE, OUTSIDE_STYLE, TITLE_STYLE, WEEKDAY_STYLE};
use churchcal::{DayCell, MonthGrid};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Paragraph, Widget},
};
use std::iter::zip;

/// Width of the calendar grid in columns
const MAIN_WIDTH: u16 = 46;

/// Width reserved for the calendar, including padding on either side
pub(crate) const CALENDAR_WIDTH: u16 = MAIN_WIDTH + 4;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week of the calendar: one for the day
/// numbers and one for the event markers beneath them
const WEEK_LINES: u16 = 2;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Days with more events than this get a `+` marker instead of a count
const MAX_MARKER_COUNT: usize = 9;

const ACS_HLINE: char = '─';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthCalendar<'a>(pub(crate) &'a MonthView);

impl Widget for MonthCalendar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([MAIN_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let view = self.0;
        let mut canvas = BufferCanvas::new(area, buf);
        match view.grid() {
            Ok(grid) => {
                canvas.draw_title(&grid.cursor().to_string());
                canvas.draw_header(&grid);
                for (i, week) in zip(0u16.., grid.weeks()) {
                    for (col, cell) in zip(0u16.., week) {
                        canvas.draw_day(i, col, cell, cell.date == view.selected());
                        canvas.draw_marker(i, col, cell);
                    }
                }
            }
            Err(e) => {
                canvas.draw_title(&view.cursor().to_string());
                canvas.mvprint(HEADER_LINES, 0, e.to_string(), Some(OUTSIDE_STYLE));
            }
        }
    }
}

fn day_style(cell: &DayCell<'_>, selected: bool) -> Style {
    let mut style = if cell.in_month {
        BASE_STYLE
    } else {
        OUTSIDE_STYLE
    };
    if cell.is_today {
        style = style.add_modifier(Modifier::BOLD);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, title: &str) {
        let width = u16::try_from(Text::raw(title).width()).unwrap_or(u16::MAX);
        self.mvprint(
            0,
            MAIN_WIDTH.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
    }

    fn draw_header(&mut self, grid: &MonthGrid<'_>) {
        for (col, wd) in zip(0u16.., grid.weekdays()) {
            let name = wd.to_string();
            let abbrev = name.get(..2).unwrap_or(&name);
            self.mvprint(
                1,
                DAY_WIDTH * col,
                format!(" {abbrev} "),
                Some(WEEKDAY_STYLE),
            );
        }
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, col: u16, cell: &DayCell<'_>, selected: bool) {
        let s = if cell.is_today {
            format!("[{:2}]", cell.date.day())
        } else {
            format!(" {:2} ", cell.date.day())
        };
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            DAY_WIDTH * col,
            s,
            Some(day_style(cell, selected)),
        );
    }

    fn draw_marker(&mut self, week_no: u16, col: u16, cell: &DayCell<'_>) {
        let Some(first) = cell.events.first() else {
            return;
        };
        let marker = if !cell.has_many_events() {
            String::from(" •")
        } else if cell.events.len() <= MAX_MARKER_COUNT {
            format!(" •{}", cell.events.len())
        } else {
            String::from(" •+")
        };
        let mut style = kind_style(first.kind);
        if cell.has_highlighted() {
            style = style.add_modifier(Modifier::BOLD);
        }
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES + 1,
            DAY_WIDTH * col,
            marker,
            Some(style),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
