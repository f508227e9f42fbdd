use serde::{Deserialize, Serialize};
use std::fmt;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Time};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A dated calendar entry as written by the admin panel.
///
/// `date` and `time` are kept exactly as stored so that a record with a
/// malformed date can still be loaded, displayed in listings that don't care
/// about dates, and saved back untouched.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::kind")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_highlighted: bool,
    #[serde(
        default,
        deserialize_with = "lenient::contact",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<Contact>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_link: Option<String>,
}

impl Event {
    pub fn new<I, T, D>(id: I, title: T, date: D) -> Event
    where
        I: Into<String>,
        T: Into<String>,
        D: Into<String>,
    {
        Event {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            ..Event::default()
        }
    }

    pub fn at<S: Into<String>>(mut self, time: S) -> Event {
        self.time = time.into();
        self
    }

    pub fn of_kind(mut self, kind: EventKind) -> Event {
        self.kind = kind;
        self
    }

    pub fn highlighted(mut self) -> Event {
        self.is_highlighted = true;
        self
    }

    /// Returns the calendar day the event falls on, or `None` if the stored
    /// date can't be parsed.
    ///
    /// Both plain `YYYY-MM-DD` dates and ISO datetimes are accepted; in the
    /// latter case only the date part is considered.
    pub fn calendar_date(&self) -> Option<Date> {
        parse_date(&self.date)
    }

    /// Returns the wall-clock start time, if the stored time is of the form
    /// `H:MM`, `HH:MM`, or `HH:MM:SS`
    pub fn start_time(&self) -> Option<Time> {
        parse_time(&self.time)
    }

    /// Registration link, treating a blank string as absent
    pub fn registration(&self) -> Option<&str> {
        self.registration_link
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The kind of gathering an event is.
///
/// Stored as the lowercase Spanish tag used by the admin panel.  Tags that
/// aren't recognized all map to `Other`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Service,
    BibleStudy,
    Youth,
    Prayer,
    Special,
    #[default]
    Other,
}

impl EventKind {
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Service => "culto",
            EventKind::BibleStudy => "estudio",
            EventKind::Youth => "jovenes",
            EventKind::Prayer => "oracion",
            EventKind::Special => "especial",
            EventKind::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Service => "Service",
            EventKind::BibleStudy => "Bible Study",
            EventKind::Youth => "Youth",
            EventKind::Prayer => "Prayer",
            EventKind::Special => "Special Event",
            EventKind::Other => "Event",
        }
    }

    fn from_tag(tag: &str) -> EventKind {
        match tag.trim().to_ascii_lowercase().as_str() {
            "culto" => EventKind::Service,
            "estudio" => EventKind::BibleStudy,
            "jovenes" => EventKind::Youth,
            "oracion" => EventKind::Prayer,
            "especial" => EventKind::Special,
            _ => EventKind::Other,
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> EventKind {
        EventKind::from_tag(&tag)
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> String {
        kind.tag().to_owned()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field readers that accept a value of the wrong JSON type instead of
/// failing the whole collection
#[allow(single_use_lifetimes)]
mod lenient {
    use super::{Contact, EventKind};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<String, D::Error> {
        Ok(optional_string(deserializer)?.unwrap_or_default())
    }

    pub(super) fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub(super) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
    }

    pub(super) fn kind<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<EventKind, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(tag) => EventKind::from(tag),
            _ => EventKind::Other,
        })
    }

    pub(super) fn contact<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Contact>, D::Error> {
        Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
    }
}

fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();
    let day = s.split_once(|c| c == 'T' || c == ' ').map_or(s, |(d, _)| d);
    Date::parse(day, YMD_FMT).ok()
}

fn parse_time(s: &str) -> Option<Time> {
    let mut parts = s.trim().splitn(3, ':');
    let hour = parts.next()?.parse::<u8>().ok()?;
    let minute = parts.next()?.parse::<u8>().ok()?;
    let second = match parts.next() {
        Some(sec) => sec.parse::<u8>().ok()?,
        None => 0,
    };
    Time::from_hms(hour, minute, second).ok()
}
