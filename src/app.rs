use crate::agenda::Agenda;
use crate::calendar::{MonthCalendar, MonthView, CALENDAR_WIDTH};
use crate::details::Details;
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use churchcal::EventStore;
use crossterm::event::{read, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug)]
pub(crate) struct App<S> {
    view: MonthView,
    store: S,
    state: AppState,
}

impl<S: EventStore> App<S> {
    pub(crate) fn new(view: MonthView, store: S) -> App<S> {
        App {
            view,
            store,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let TermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.move_days(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.view.move_days(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.view.move_days(-7).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.view.move_days(7).is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.view.previous_month().is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.view.next_month().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('r') => self.reload(),
                KeyCode::Enter => {
                    self.state = AppState::Details;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping | AppState::Details => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c) => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(cursor) => {
                            self.state = AppState::Calendar;
                            self.view.jump_to_month(cursor);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn reload(&mut self) -> bool {
        match self.store.load() {
            Ok(events) => {
                tracing::info!(count = events.len(), "Reloaded events");
                self.view.set_events(events);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to reload events; keeping the current ones");
                false
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<S: EventStore> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [calendar_area, agenda_area] =
            Layout::horizontal([Constraint::Length(CALENDAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        MonthCalendar(&self.view).render(calendar_area, buf);
        Agenda(&self.view).render(agenda_area, buf);
        match &mut self.state {
            AppState::Helping => Help(BASE_STYLE).render(area, buf),
            AppState::Jumping(state) => JumpTo.render(area, buf, state),
            AppState::Details => Details {
                date: self.view.selected(),
                events: self.view.selected_events(),
            }
            .render(area, buf),
            AppState::Calendar | AppState::Quitting => (),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Details,
    Quitting,
}
