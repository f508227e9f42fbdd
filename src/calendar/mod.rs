mod view;
mod widget;
pub(crate) use self::view::MonthView;
pub(crate) use self::widget::{MonthCalendar, CALENDAR_WIDTH};
