mod agenda;
mod app;
mod calendar;
mod details;
mod help;
mod jumpto;
mod theme;
use crate::app::App;
use crate::calendar::MonthView;
use anyhow::Context;
use churchcal::{DayOrder, EventStore, GridBuilder, LocalStore, MonthCursor};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
    Weekday,
};
use tracing_subscriber::EnvFilter;

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_FILTER: &str = "churchcal=info";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Where the calendar opens
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StartAt {
    Day(Date),
    Month(MonthCursor),
}

impl StartAt {
    fn parse(value: String) -> Result<StartAt, lexopt::Error> {
        if let Ok(d) = Date::parse(&value, &YMD_FMT) {
            Ok(StartAt::Day(d))
        } else {
            match value.parse::<MonthCursor>() {
                Ok(cursor) => Ok(StartAt::Month(cursor)),
                Err(e) => Err(lexopt::Error::ParsingFailed {
                    value,
                    error: Box::new(e),
                }),
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    start: Option<StartAt>,
    data_dir: Option<PathBuf>,
    week_start: Option<Weekday>,
    sort_by_time: bool,
    log_file: Option<PathBuf>,
}

impl RunOptions {
    fn grid_builder(&self) -> GridBuilder {
        let mut builder = GridBuilder::new();
        if let Some(wd) = self.week_start {
            builder = builder.week_start(wd);
        }
        if self.sort_by_time {
            builder = builder.order(DayOrder::Time);
        }
        builder
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('d') | Arg::Long("data-dir") => {
                    opts.data_dir = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('w') | Arg::Long("week-start") => {
                    opts.week_start = Some(parser.value()?.parse_with(parse_weekday)?);
                }
                Arg::Long("sort-by-time") => opts.sort_by_time = true,
                Arg::Long("log-file") => opts.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if opts.start.is_none() => {
                    opts.start = Some(StartAt::parse(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                // The local offset must be looked up before any other threads
                // exist.
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                if let Some(path) = &opts.log_file {
                    init_logging(path)?;
                }
                let data_dir = match opts.data_dir.clone() {
                    Some(dir) => dir,
                    None => dirs::data_dir()
                        .context("failed to determine data directory")?
                        .join(env!("CARGO_PKG_NAME")),
                };
                let store = LocalStore::new(data_dir);
                let events = store.load().with_context(|| {
                    format!("failed to load events from {}", store.dir().display())
                })?;
                let mut view = MonthView::new(today, events).builder(opts.grid_builder());
                match opts.start {
                    Some(StartAt::Day(date)) => view = view.start_date(date),
                    Some(StartAt::Month(cursor)) => view.jump_to_month(cursor),
                    None => (),
                }
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(view, store).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: churchcal [options] [YYYY-MM-DD | YYYY-MM]");
                println!();
                println!("Browse a church's calendar of events month by month");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <DIR>    Read events from DIR/events.json");
                println!("  -w, --week-start <DAY>  Start weeks on DAY [default: monday]");
                println!("      --sort-by-time      List each day's events by time of day");
                println!("      --log-file <FILE>   Append log messages to FILE");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

fn parse_weekday(s: &str) -> Result<Weekday, UnknownWeekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(UnknownWeekday(s.to_owned())),
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown weekday {0:?}")]
struct UnknownWeekday(String);

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(RunOptions::default()));
        assert_eq!(
            RunOptions::default().grid_builder(),
            GridBuilder::new().week_start(Weekday::Monday)
        );
    }

    #[test]
    fn test_all_options() {
        let cmd = parse(&[
            "-w",
            "Sun",
            "--sort-by-time",
            "--data-dir",
            "/srv/church",
            "--log-file=cal.log",
            "2024-02-10",
        ])
        .unwrap();
        let Command::Run(opts) = cmd else {
            panic!("expected a run command, got {cmd:?}");
        };
        assert_eq!(opts.start, Some(StartAt::Day(date!(2024 - 02 - 10))));
        assert_eq!(opts.data_dir, Some(PathBuf::from("/srv/church")));
        assert_eq!(opts.log_file, Some(PathBuf::from("cal.log")));
        assert_eq!(
            opts.grid_builder(),
            GridBuilder::new()
                .week_start(Weekday::Sunday)
                .order(DayOrder::Time)
        );
    }

    #[test]
    fn test_start_month() {
        let Command::Run(opts) = parse(&["2025-06"]).unwrap() else {
            panic!("expected a run command");
        };
        assert_eq!(
            opts.start,
            Some(StartAt::Month(MonthCursor::new(2025, 6).unwrap()))
        );
        assert!(parse(&["2025-6"]).is_err());
        assert!(parse(&["2025-13"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V", "2024-02-10"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["2024-13-01"]).is_err());
        assert!(parse(&["2024-02-10", "2024-02-11"]).is_err());
        assert!(parse(&["-w", "someday"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("saturday"), Ok(Weekday::Saturday));
        assert_eq!(parse_weekday("WED"), Ok(Weekday::Wednesday));
        assert_eq!(
            parse_weekday("Sabbath"),
            Err(UnknownWeekday(String::from("Sabbath")))
        );
    }
}
