use crate::event::Event;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::successors;
use std::slice::ChunksExact;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday};

pub const DAYS_IN_WEEK: usize = 7;

trait WeekdayExt {
    /// Number of days from `start` forwards to `self`, in `0..7`
    fn days_since(self, start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn days_since(self, start: Weekday) -> u8 {
        (self.number_days_from_monday() + 7 - start.number_days_from_monday()) % 7
    }
}

/// The month currently being displayed
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
// Invariant: The wrapped date is always the first of its month
pub struct MonthCursor(Date);

impl MonthCursor {
    pub fn new(year: i32, month: u8) -> Result<MonthCursor, CalendarError> {
        let invalid = CalendarError::InvalidCursor { year, month };
        let month = Month::try_from(month).map_err(|_| invalid)?;
        Date::from_calendar_date(year, month, 1)
            .map(MonthCursor)
            .map_err(|_| invalid)
    }

    pub fn containing(date: Date) -> MonthCursor {
        // Every representable date's month has a representable first day
        MonthCursor(date.replace_day(1).unwrap_or(date))
    }

    pub fn first_day(self) -> Date {
        self.0
    }

    pub fn last_day(self) -> Date {
        successors(Some(self.0), |&d| d.next_day())
            .take_while(|d| d.month() == self.0.month())
            .last()
            .unwrap_or(self.0)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        self.0.month()
    }

    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Returns the given day of this month, or the month's last day if the
    /// month is too short
    pub fn day_clamped(self, day: u8) -> Date {
        self.0
            .replace_day(day.max(1))
            .unwrap_or_else(|_| self.last_day())
    }

    pub fn navigate(self, direction: Direction) -> Result<MonthCursor, CalendarError> {
        navigate_month(self, direction)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

impl FromStr for MonthCursor {
    type Err = ParseCursorError;

    /// Parses a `YYYY-MM` string
    fn from_str(s: &str) -> Result<MonthCursor, ParseCursorError> {
        let err = || ParseCursorError(s.to_owned());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(err)?;
        let year = year.parse::<i32>().map_err(|_| err())?;
        if month.len() != 2 {
            return Err(err());
        }
        let month = month.parse::<u8>().map_err(|_| err())?;
        MonthCursor::new(year, month).map_err(|_| err())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Previous,
    Next,
}

/// How events falling on the same day are ordered within a [`DayCell`]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DayOrder {
    /// Keep the order of the input collection
    #[default]
    Input,
    /// Stable sort by start time; events without a parseable time come first
    Time,
}

/// One day of a month grid and the events falling on it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayCell<'a> {
    pub date: Date,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    pub fn has_many_events(&self) -> bool {
        self.events.len() > 1
    }

    pub fn has_highlighted(&self) -> bool {
        self.events.iter().any(|ev| ev.is_highlighted)
    }
}

/// A whole number of weeks covering a month, in row-major order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid<'a> {
    cursor: MonthCursor,
    week_start: Weekday,
    // Invariant: `cells.len()` is a nonzero multiple of 7, and the dates are
    // consecutive
    cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn cells(&self) -> &[DayCell<'a>] {
        &self.cells
    }

    pub fn weeks(&self) -> ChunksExact<'_, DayCell<'a>> {
        self.cells.chunks_exact(DAYS_IN_WEEK)
    }

    /// The days of the week in column order
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        successors(Some(self.week_start), |wd| Some(wd.next())).take(DAYS_IN_WEEK)
    }

    pub fn cell(&self, date: Date) -> Option<&DayCell<'a>> {
        let start = self.cells.first()?.date;
        let i = usize::try_from((date - start).whole_days()).ok()?;
        self.cells.get(i)
    }
}

/// Configuration for building month grids
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridBuilder {
    week_start: Weekday,
    order: DayOrder,
}

impl GridBuilder {
    pub fn new() -> GridBuilder {
        GridBuilder::default()
    }

    pub fn week_start(mut self, week_start: Weekday) -> GridBuilder {
        self.week_start = week_start;
        self
    }

    pub fn order(mut self, order: DayOrder) -> GridBuilder {
        self.order = order;
        self
    }

    /// Lay out the month `cursor` as whole weeks and bind each event with a
    /// parseable date to the cell for that date.
    ///
    /// Events whose dates can't be parsed are left out of the grid.  The
    /// input collection is only borrowed; cells refer back into it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if padding the month out to whole
    /// weeks would require a date outside the supported range.
    pub fn build<'a>(
        &self,
        cursor: MonthCursor,
        events: &'a [Event],
        today: Date,
    ) -> Result<MonthGrid<'a>, CalendarError> {
        let first = cursor.first_day();
        let last = cursor.last_day();
        let lead = first.weekday().days_since(self.week_start);
        let trail = 6 - last.weekday().days_since(self.week_start);
        let start = first
            .checked_sub(Duration::days(lead.into()))
            .ok_or(CalendarError::OutOfTime)?;
        let end = last
            .checked_add(Duration::days(trail.into()))
            .ok_or(CalendarError::OutOfTime)?;
        let mut by_day = bind_events(events, start, end);
        if self.order == DayOrder::Time {
            for day_events in by_day.values_mut() {
                day_events.sort_by_key(|ev| ev.start_time());
            }
        }
        let cells = successors(Some(start), |&d| d.next_day())
            .take_while(|&d| d <= end)
            .map(|date| DayCell {
                date,
                in_month: cursor.contains(date),
                is_today: date == today,
                events: by_day.remove(&date).unwrap_or_default(),
            })
            .collect::<Vec<_>>();
        debug_assert!(
            !cells.is_empty() && cells.len() % DAYS_IN_WEEK == 0,
            "month grid should consist of whole weeks"
        );
        Ok(MonthGrid {
            cursor,
            week_start: self.week_start,
            cells,
        })
    }
}

impl Default for GridBuilder {
    fn default() -> GridBuilder {
        GridBuilder {
            week_start: Weekday::Monday,
            order: DayOrder::Input,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum CalendarError {
    #[error("invalid month cursor: year {year}, month {month}")]
    InvalidCursor { year: i32, month: u8 },
    #[error("reached the end of time")]
    OutOfTime,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid month {0:?}; expected YYYY-MM")]
pub struct ParseCursorError(String);

/// Build the grid for `cursor` with weeks starting on Monday and same-day
/// events in input order
pub fn build_month_grid(
    cursor: MonthCursor,
    events: &[Event],
    today: Date,
) -> Result<MonthGrid<'_>, CalendarError> {
    GridBuilder::default().build(cursor, events, today)
}

/// Move `cursor` one month forwards or backwards
pub fn navigate_month(
    cursor: MonthCursor,
    direction: Direction,
) -> Result<MonthCursor, CalendarError> {
    let year = cursor.year();
    let month = cursor.month();
    let (year, month) = match direction {
        Direction::Previous if month == Month::January => (
            year.checked_sub(1).ok_or(CalendarError::OutOfTime)?,
            Month::December,
        ),
        Direction::Previous => (year, month.previous()),
        Direction::Next if month == Month::December => (
            year.checked_add(1).ok_or(CalendarError::OutOfTime)?,
            Month::January,
        ),
        Direction::Next => (year, month.next()),
    };
    Date::from_calendar_date(year, month, 1)
        .map(MonthCursor)
        .map_err(|_| CalendarError::OutOfTime)
}

/// Events on or after `today`, soonest first, at most `limit` of them.
///
/// Events are ordered by date and then start time; ties keep their input
/// order.
pub fn upcoming_events(events: &[Event], today: Date, limit: usize) -> Vec<&Event> {
    let mut upcoming = dated(events)
        .filter(|&(date, _)| date >= today)
        .collect::<Vec<_>>();
    upcoming.sort_by_key(|&(date, ev)| (date, ev.start_time()));
    upcoming.into_iter().map(|(_, ev)| ev).take(limit).collect()
}

/// Upcoming events that are marked as highlighted
pub fn highlighted_events(events: &[Event], today: Date, limit: usize) -> Vec<&Event> {
    upcoming_events(events, today, usize::MAX)
        .into_iter()
        .filter(|ev| ev.is_highlighted)
        .take(limit)
        .collect()
}

fn dated(events: &[Event]) -> impl Iterator<Item = (Date, &Event)> {
    events
        .iter()
        .filter_map(|ev| ev.calendar_date().map(|date| (date, ev)))
}

fn bind_events(events: &[Event], start: Date, end: Date) -> BTreeMap<Date, Vec<&Event>> {
    let mut by_day = BTreeMap::<Date, Vec<&Event>>::new();
    for ev in events {
        match ev.calendar_date() {
            Some(date) if (start..=end).contains(&date) => by_day.entry(date).or_default().push(ev),
            Some(_) => (),
            None => tracing::debug!(
                id = %ev.id,
                date = %ev.date,
                "Leaving event with unparseable date off the calendar"
            ),
        }
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use std::collections::HashSet;
    use time::macros::date;

    fn cursor(year: i32, month: u8) -> MonthCursor {
        MonthCursor::new(year, month).unwrap()
    }

    #[test]
    fn test_leap_february() {
        let grid = build_month_grid(cursor(2024, 2), &[], date!(2024 - 02 - 10)).unwrap();
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.cells().iter().filter(|c| c.in_month).count(), 29);
        assert_eq!(grid.cells()[0].date, date!(2024 - 01 - 29));
        assert!(!grid.cells()[0].in_month);
        assert_eq!(grid.cells()[3].date, date!(2024 - 02 - 01));
        assert!(grid.cells()[3].in_month);
        assert_eq!(grid.cells()[34].date, date!(2024 - 03 - 03));
        for week in grid.weeks() {
            assert_eq!(week[0].date.weekday(), Weekday::Monday);
            assert_eq!(week[6].date.weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn test_four_week_month() {
        // February 2021 starts on a Monday and has 28 days
        let grid = build_month_grid(cursor(2021, 2), &[], date!(2021 - 02 - 01)).unwrap();
        assert_eq!(grid.cells().len(), 28);
        assert!(grid.cells().iter().all(|c| c.in_month));
    }

    #[test]
    fn test_six_week_month() {
        // September 2024 starts on a Sunday and ends on a Monday
        let grid = build_month_grid(cursor(2024, 9), &[], date!(2024 - 09 - 15)).unwrap();
        assert_eq!(grid.cells().len(), 42);
        assert_eq!(grid.cells()[6].date, date!(2024 - 09 - 01));
        assert_eq!(grid.cells()[35].date, date!(2024 - 09 - 30));
        assert_eq!(grid.cells()[41].date, date!(2024 - 10 - 06));
    }

    #[test]
    fn test_sunday_week_start() {
        let grid = GridBuilder::new()
            .week_start(Weekday::Sunday)
            .build(cursor(2024, 9), &[], date!(2024 - 09 - 15))
            .unwrap();
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.cells()[0].date, date!(2024 - 09 - 01));
        assert_eq!(grid.cells()[34].date, date!(2024 - 10 - 05));
        assert_eq!(
            grid.weekdays().collect::<Vec<_>>(),
            [
                Weekday::Sunday,
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Saturday,
            ]
        );
    }

    #[test]
    fn test_whole_weeks_and_unique_dates() {
        for week_start in [Weekday::Monday, Weekday::Sunday, Weekday::Wednesday] {
            let builder = GridBuilder::new().week_start(week_start);
            for year in [1999, 2000, 2023, 2024] {
                for month in 1..=12 {
                    let grid = builder
                        .build(cursor(year, month), &[], date!(2024 - 01 - 01))
                        .unwrap();
                    let cells = grid.cells();
                    assert_eq!(cells.len() % 7, 0);
                    assert!(cells.len() >= 28);
                    assert!(cells.len() <= 42);
                    let dates = cells.iter().map(|c| c.date).collect::<HashSet<_>>();
                    assert_eq!(dates.len(), cells.len());
                    assert!(cells.windows(2).all(|w| w[0].date.next_day() == Some(w[1].date)));
                    assert_eq!(cells[0].date.weekday(), week_start);
                    let in_month = cells.iter().filter(|c| c.in_month).count();
                    assert_eq!(
                        in_month,
                        usize::from(cursor(year, month).last_day().day())
                    );
                }
            }
        }
    }

    #[test]
    fn test_bad_dates_are_dropped() {
        let events = [
            Event::new("1", "Retiro", "2024-02-10"),
            Event::new("2", "Broken", "not-a-date"),
        ];
        let grid = build_month_grid(cursor(2024, 2), &events, date!(2024 - 02 - 01)).unwrap();
        let cell = grid.cell(date!(2024 - 02 - 10)).unwrap();
        assert_eq!(cell.events.len(), 1);
        assert_eq!(cell.events[0].id, "1");
        assert!(grid
            .cells()
            .iter()
            .flat_map(|c| &c.events)
            .all(|ev| ev.id != "2"));
    }

    #[test]
    fn test_every_event_bound_once() {
        let events = [
            Event::new("a", "Leading", "2024-01-29"),
            Event::new("b", "First", "2024-02-01"),
            Event::new("c", "Leap", "2024-02-29"),
            Event::new("d", "Trailing", "2024-03-03"),
            Event::new("e", "Same day", "2024-02-29T10:00"),
            Event::new("f", "Outside", "2024-03-04"),
            Event::new("g", "Way outside", "2023-02-10"),
        ];
        let grid = build_month_grid(cursor(2024, 2), &events, date!(2024 - 02 - 01)).unwrap();
        for ev in &events {
            let date = ev.calendar_date().unwrap();
            let holders = grid
                .cells()
                .iter()
                .filter(|c| c.events.iter().any(|e| e.id == ev.id))
                .collect::<Vec<_>>();
            if grid.cell(date).is_some() {
                assert_eq!(holders.len(), 1, "event {} bound wrongly", ev.id);
                assert_eq!(holders[0].date, date);
            } else {
                assert!(holders.is_empty(), "event {} should be absent", ev.id);
            }
        }
        let leap = grid.cell(date!(2024 - 02 - 29)).unwrap();
        assert!(leap.has_many_events());
        assert_eq!(
            leap.events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["c", "e"]
        );
    }

    #[test]
    fn test_same_day_ordering() {
        let events = [
            Event::new("late", "Evening", "2024-02-10").at("19:30"),
            Event::new("untimed", "All day", "2024-02-10"),
            Event::new("early", "Morning", "2024-02-10").at("09:00"),
            Event::new("early2", "Also morning", "2024-02-10").at("9:00"),
        ];
        let today = date!(2024 - 02 - 01);
        let grid = build_month_grid(cursor(2024, 2), &events, today).unwrap();
        let ids = |grid: &MonthGrid<'_>| {
            grid.cell(date!(2024 - 02 - 10))
                .unwrap()
                .events
                .iter()
                .map(|e| e.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&grid), ["late", "untimed", "early", "early2"]);
        let grid = GridBuilder::new()
            .order(DayOrder::Time)
            .build(cursor(2024, 2), &events, today)
            .unwrap();
        assert_eq!(ids(&grid), ["untimed", "early", "early2", "late"]);
    }

    #[test]
    fn test_today_flag() {
        let grid = build_month_grid(cursor(2024, 2), &[], date!(2024 - 02 - 10)).unwrap();
        let todays = grid.cells().iter().filter(|c| c.is_today).collect::<Vec<_>>();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, date!(2024 - 02 - 10));
        let grid = build_month_grid(cursor(2024, 5), &[], date!(2024 - 02 - 10)).unwrap();
        assert!(grid.cells().iter().all(|c| !c.is_today));
        // Today in the leading days of the next month's grid
        let grid = build_month_grid(cursor(2024, 3), &[], date!(2024 - 02 - 27)).unwrap();
        let cell = grid.cell(date!(2024 - 02 - 27)).unwrap();
        assert!(cell.is_today);
        assert!(!cell.in_month);
    }

    #[test]
    fn test_cell_lookup() {
        let grid = build_month_grid(cursor(2024, 2), &[], date!(2024 - 02 - 10)).unwrap();
        assert_eq!(
            grid.cell(date!(2024 - 01 - 29)).map(|c| c.date),
            Some(date!(2024 - 01 - 29))
        );
        assert_eq!(
            grid.cell(date!(2024 - 03 - 03)).map(|c| c.date),
            Some(date!(2024 - 03 - 03))
        );
        assert!(grid.cell(date!(2024 - 03 - 04)).is_none());
        assert!(grid.cell(date!(2024 - 01 - 28)).is_none());
    }

    #[test]
    fn test_grid_at_end_of_time() {
        // 9999-12-31 is a Friday, so the last week runs past the maximum date
        assert_eq!(
            build_month_grid(cursor(9999, 12), &[], date!(2024 - 01 - 01)),
            Err(CalendarError::OutOfTime)
        );
        let grid = GridBuilder::new()
            .week_start(Weekday::Saturday)
            .build(cursor(9999, 12), &[], date!(2024 - 01 - 01))
            .unwrap();
        assert_eq!(grid.cells().last().unwrap().date, date!(9999 - 12 - 31));
    }

    #[test]
    fn test_invalid_cursor() {
        assert_eq!(
            MonthCursor::new(2024, 13),
            Err(CalendarError::InvalidCursor {
                year: 2024,
                month: 13
            })
        );
        assert!(MonthCursor::new(2024, 0).is_err());
        assert!(MonthCursor::new(100_000, 1).is_err());
    }

    #[test]
    fn test_parse_cursor() {
        assert_eq!("2024-02".parse::<MonthCursor>(), Ok(cursor(2024, 2)));
        assert_eq!("-0044-03".parse::<MonthCursor>(), Ok(cursor(-44, 3)));
        assert!("2024-13".parse::<MonthCursor>().is_err());
        assert!("2024-2".parse::<MonthCursor>().is_err());
        assert!("February".parse::<MonthCursor>().is_err());
        assert!("".parse::<MonthCursor>().is_err());
    }

    #[test]
    fn test_cursor_helpers() {
        let c = MonthCursor::containing(date!(2024 - 01 - 31));
        assert_eq!(c.first_day(), date!(2024 - 01 - 01));
        assert_eq!(c.last_day(), date!(2024 - 01 - 31));
        assert_eq!(cursor(2023, 2).last_day(), date!(2023 - 02 - 28));
        assert_eq!(cursor(2024, 2).day_clamped(31), date!(2024 - 02 - 29));
        assert_eq!(cursor(2024, 2).day_clamped(0), date!(2024 - 02 - 01));
        assert_eq!(cursor(2024, 2).to_string(), "February 2024");
    }

    #[test]
    fn test_navigate_month() {
        let jan = MonthCursor::containing(date!(2024 - 01 - 31));
        assert_eq!(
            navigate_month(jan, Direction::Next).unwrap().first_day(),
            date!(2024 - 02 - 01)
        );
        assert_eq!(
            navigate_month(cursor(2024, 12), Direction::Next).unwrap(),
            cursor(2025, 1)
        );
        assert_eq!(
            navigate_month(cursor(2024, 1), Direction::Previous).unwrap(),
            cursor(2023, 12)
        );
        assert_eq!(
            navigate_month(cursor(2024, 3), Direction::Previous).unwrap(),
            cursor(2024, 2)
        );
    }

    #[test]
    fn test_navigate_month_inverse() {
        for date in [
            date!(2024 - 01 - 31),
            date!(2024 - 02 - 29),
            date!(2023 - 12 - 31),
            date!(2024 - 03 - 31),
            date!(2024 - 08 - 15),
        ] {
            let c = MonthCursor::containing(date);
            let there = navigate_month(c, Direction::Next).unwrap();
            assert_eq!(navigate_month(there, Direction::Previous).unwrap(), c);
            let back = navigate_month(c, Direction::Previous).unwrap();
            assert_eq!(back.navigate(Direction::Next).unwrap(), c);
        }
    }

    #[test]
    fn test_navigate_twelve_times() {
        let mut c = cursor(2024, 1);
        for _ in 0..12 {
            c = c.navigate(Direction::Next).unwrap();
        }
        assert_eq!(c, cursor(2025, 1));
    }

    #[test]
    fn test_navigate_out_of_time() {
        assert_eq!(
            navigate_month(cursor(9999, 12), Direction::Next),
            Err(CalendarError::OutOfTime)
        );
        assert_eq!(
            navigate_month(cursor(-9999, 1), Direction::Previous),
            Err(CalendarError::OutOfTime)
        );
    }

    #[test]
    fn test_upcoming_events() {
        let events = [
            Event::new("past", "Yesterday", "2024-02-09"),
            Event::new("soon", "Next week", "2024-02-15"),
        ];
        let upcoming = upcoming_events(&events, date!(2024 - 02 - 10), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "soon");
    }

    #[test]
    fn test_upcoming_events_ordering() {
        let events = [
            Event::new("c", "Later", "2024-03-01").at("08:00"),
            Event::new("bad", "Broken", "someday"),
            Event::new("b2", "Evening", "2024-02-10").at("19:00"),
            Event::new("today", "Today", "2024-02-10").at("07:00"),
            Event::new("b3", "Evening too", "2024-02-10").at("19:00"),
            Event::new("allday", "All day", "2024-02-10"),
            Event::new("old", "Last year", "2023-02-10"),
        ];
        let upcoming = upcoming_events(&events, date!(2024 - 02 - 10), 10);
        assert_eq!(
            upcoming.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["allday", "today", "b2", "b3", "c"]
        );
        for pair in upcoming.windows(2) {
            let a = (pair[0].calendar_date(), pair[0].start_time());
            let b = (pair[1].calendar_date(), pair[1].start_time());
            assert!(a <= b);
        }
        assert!(upcoming_events(&events, date!(2024 - 02 - 10), 0).is_empty());
        assert!(upcoming_events(&[], date!(2024 - 02 - 10), 6).is_empty());
    }

    #[test]
    fn test_highlighted_events() {
        let events = [
            Event::new("1", "Old highlight", "2024-01-01").highlighted(),
            Event::new("2", "Plain", "2024-02-11"),
            Event::new("3", "Conference", "2024-03-01")
                .of_kind(EventKind::Special)
                .highlighted(),
            Event::new("4", "Retreat", "2024-02-20").highlighted(),
        ];
        let highlighted = highlighted_events(&events, date!(2024 - 02 - 10), 3);
        assert_eq!(
            highlighted.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["4", "3"]
        );
    }

    #[test]
    fn test_grid_borrows_without_mutating() {
        let events = vec![
            Event::new("1", "a", "2024-02-10"),
            Event::new("2", "b", "2024-02-10"),
        ];
        let before = events.clone();
        let grid = build_month_grid(cursor(2024, 2), &events, date!(2024 - 02 - 10)).unwrap();
        let cell = grid.cell(date!(2024 - 02 - 10)).unwrap();
        assert!(std::ptr::eq(cell.events[0], &events[0]));
        drop(grid);
        assert_eq!(events, before);
    }
}
