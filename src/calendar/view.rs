use churchcal::{
    highlighted_events, upcoming_events, CalendarError, Direction, Event, GridBuilder,
    MonthCursor, MonthGrid,
};
use time::{Date, Duration};

/// The displayed month, the selected day, and the events being shown
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    today: Date,
    // Invariant: `cursor` contains `selected`
    cursor: MonthCursor,
    selected: Date,
    builder: GridBuilder,
    events: Vec<Event>,
}

impl MonthView {
    pub(crate) fn new(today: Date, events: Vec<Event>) -> Self {
        MonthView {
            today,
            cursor: MonthCursor::containing(today),
            selected: today,
            builder: GridBuilder::default(),
            events,
        }
    }

    pub(crate) fn builder(mut self, builder: GridBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.select(date);
        self
    }

    pub(crate) fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    pub(crate) fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub(crate) fn grid(&self) -> Result<MonthGrid<'_>, CalendarError> {
        self.builder.build(self.cursor, &self.events, self.today)
    }

    /// The selected day's events, in the same order as on the grid
    pub(crate) fn selected_events(&self) -> Vec<&Event> {
        self.grid()
            .ok()
            .and_then(|grid| grid.cell(self.selected).map(|cell| cell.events.clone()))
            .unwrap_or_default()
    }

    pub(crate) fn upcoming(&self, limit: usize) -> Vec<&Event> {
        upcoming_events(&self.events, self.today, limit)
    }

    pub(crate) fn highlighted(&self, limit: usize) -> Vec<&Event> {
        highlighted_events(&self.events, self.today, limit)
    }

    /// Move the selection by `days` days, following it into the next or
    /// previous month if need be
    pub(crate) fn move_days(&mut self, days: i64) -> Result<(), CalendarError> {
        let date = self
            .selected
            .checked_add(Duration::days(days))
            .ok_or(CalendarError::OutOfTime)?;
        self.select(date);
        Ok(())
    }

    pub(crate) fn next_month(&mut self) -> Result<(), CalendarError> {
        self.shift_month(Direction::Next)
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), CalendarError> {
        self.shift_month(Direction::Previous)
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.select(self.today);
    }

    pub(crate) fn jump_to_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
        self.selected = if cursor.contains(self.today) {
            self.today
        } else {
            cursor.first_day()
        };
    }

    fn shift_month(&mut self, direction: Direction) -> Result<(), CalendarError> {
        let cursor = self.cursor.navigate(direction)?;
        self.cursor = cursor;
        self.selected = cursor.day_clamped(self.selected.day());
        Ok(())
    }

    fn select(&mut self, date: Date) {
        self.selected = date;
        self.cursor = MonthCursor::containing(date);
    }
}
