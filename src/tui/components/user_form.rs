//! # User Form Component
//!
//! Overlay for creating or editing a user. One single-line text field per
//! string attribute; nothing is validated client-side.
//!
//! ## Keys
//!
//! - Tab / ↓ next field, Shift+Tab / ↑ previous field (both wrap)
//! - Enter submits, Esc cancels

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::api::{Address, Company, Geo, User, UserDetails, UserId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const LABELS: [&str; 14] = [
    "Name",
    "Username",
    "Email",
    "Phone",
    "Website",
    "Street",
    "Suite",
    "City",
    "Zipcode",
    "Latitude",
    "Longitude",
    "Company",
    "Catch phrase",
    "BS",
];

const LABEL_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(UserId),
}

/// Events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Create(UserDetails),
    Update(User),
    Cancel,
}

pub struct UserForm {
    pub mode: FormMode,
    pub values: [String; 14],
    pub focused: usize,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: Default::default(),
            focused: 0,
        }
    }

    pub fn edit(user: &User) -> Self {
        let d = &user.details;
        Self {
            mode: FormMode::Edit(user.id),
            values: [
                d.name.clone(),
                d.username.clone(),
                d.email.clone(),
                d.phone.clone(),
                d.website.clone(),
                d.address.street.clone(),
                d.address.suite.clone(),
                d.address.city.clone(),
                d.address.zipcode.clone(),
                d.address.geo.lat.clone(),
                d.address.geo.lng.clone(),
                d.company.name.clone(),
                d.company.catch_phrase.clone(),
                d.company.bs.clone(),
            ],
            focused: 0,
        }
    }

    pub fn details(&self) -> UserDetails {
        let [
            name,
            username,
            email,
            phone,
            website,
            street,
            suite,
            city,
            zipcode,
            lat,
            lng,
            company,
            catch_phrase,
            bs,
        ] = self.values.clone();
        UserDetails {
            name,
            username,
            email,
            address: Address {
                street,
                suite,
                city,
                zipcode,
                geo: Geo { lat, lng },
            },
            phone,
            website,
            company: Company {
                name: company,
                catch_phrase,
                bs,
            },
        }
    }

    fn submit(&self) -> FormEvent {
        match self.mode {
            FormMode::Create => FormEvent::Create(self.details()),
            FormMode::Edit(id) => FormEvent::Update(User::new(id, self.details())),
        }
    }

    fn title(&self) -> String {
        match self.mode {
            FormMode::Create => " New user ".to_string(),
            FormMode::Edit(id) => format!(" Edit user #{id} "),
        }
    }
}

impl EventHandler for UserForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.values[self.focused].push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                // Single-line fields
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.values[self.focused].push_str(&line);
                None
            }
            TuiEvent::Backspace => {
                self.values[self.focused].pop();
                None
            }
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % LABELS.len();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focused = (self.focused + LABELS.len() - 1) % LABELS.len();
                None
            }
            TuiEvent::Submit => Some(self.submit()),
            TuiEvent::Escape => Some(FormEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for UserForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Fields + blank line + borders + vertical padding
        let height = (LABELS.len() as u16 + 4).min(area.height);
        let width = 70u16.min(area.width);
        let overlay = centered_rect(width, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(self.title())
            .title_bottom(Line::from(" Tab Next  Enter Save  Esc Cancel ").centered())
            .padding(Padding::new(1, 1, 1, 0));
        let inner = block.inner(overlay);

        let lines: Vec<Line> = LABELS
            .iter()
            .zip(self.values.iter())
            .enumerate()
            .map(|(i, (label, value))| {
                let label_style = if i == self.focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(vec![
                    Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), overlay);

        if let Some(position) = self.cursor_position(inner) {
            frame.set_cursor_position(position);
        }
    }
}

impl UserForm {
    /// Cursor cell at the end of the focused value, or None once it runs
    /// past the overlay.
    fn cursor_position(&self, inner: Rect) -> Option<Position> {
        let offset = LABEL_WIDTH.checked_add(self.values[self.focused].width())?;
        let x = usize::from(inner.x).checked_add(offset)?;
        let y = usize::from(inner.y).checked_add(self.focused)?;
        if x >= usize::from(inner.right()) || y >= usize::from(inner.bottom()) {
            return None;
        }
        Some(Position::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }
}

/// Center a fixed-size rect inside `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
