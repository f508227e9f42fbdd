//! Month calendar of a church's events.
//!
//! The core of the crate is [`build_month_grid`], which lays out a month as
//! whole weeks of [`DayCell`]s and binds each stored [`Event`] to the day it
//! falls on.  Everything here is pure: the event collection, the current
//! date, and the displayed month are all passed in by the caller.
pub mod event;
pub mod grid;
pub mod services;
pub mod store;
pub use crate::event::{Contact, Event, EventKind};
pub use crate::grid::{
    build_month_grid, highlighted_events, navigate_month, upcoming_events, CalendarError, DayCell,
    DayOrder, Direction, GridBuilder, MonthCursor, MonthGrid, ParseCursorError,
};
pub use crate::services::{services_on, WeeklyService, WEEKLY_SERVICES};
pub use crate::store::{EventStore, LocalStore, StoreError, EVENTS_KEY};
