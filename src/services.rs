use crate::event::EventKind;
use time::Weekday;

/// A regular gathering held every week.  This is fixed reference data and is
/// not part of the stored event collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeeklyService {
    pub day: Weekday,
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: EventKind,
}

pub static WEEKLY_SERVICES: &[WeeklyService] = &[
    WeeklyService {
        day: Weekday::Tuesday,
        time: "19:00",
        title: "Prayer & Teaching Service",
        description: "Time of communal prayer and study of the Word",
        kind: EventKind::Prayer,
    },
    WeeklyService {
        day: Weekday::Friday,
        time: "19:30",
        title: "Worship Service",
        description: "Service of worship and praise",
        kind: EventKind::Service,
    },
    WeeklyService {
        day: Weekday::Saturday,
        time: "18:00",
        title: "Youth Service",
        description: "Special gathering for youth and teenagers",
        kind: EventKind::Youth,
    },
    WeeklyService {
        day: Weekday::Sunday,
        time: "11:00",
        title: "Sunday School & Main Service",
        description: "Sunday school followed by the main service",
        kind: EventKind::Service,
    },
];

pub fn services_on(day: Weekday) -> impl Iterator<Item = &'static WeeklyService> {
    WEEKLY_SERVICES.iter().filter(move |s| s.day == day)
}
