//! # User List Component
//!
//! Table of the cached user records with keyboard selection.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `UserListState` lives in `TuiState`
//! - `UserList` is created each frame with borrowed state and the users as props
//!
//! Deleting takes two presses of `d` on the same user. Any other key, or the
//! list changing under the selection, disarms it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::api::{User, UserId};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the user table.
#[derive(Default)]
pub struct UserListState {
    pub table_state: TableState,
    /// User armed by the first `d` press.
    pub confirm_delete: Option<UserId>,
}

/// Events emitted by the user list.
#[derive(Debug, Clone, PartialEq)]
pub enum UserListEvent {
    Reload,
    Refresh(UserId),
    Create,
    Edit(User),
    Delete(UserId),
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn selected_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        self.selected().and_then(|i| users.get(i))
    }

    /// Keep the selection inside the list after it grows or shrinks.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    /// Clamp the selection and drop a pending delete whose user is no
    /// longer the selected one (a fetch may have replaced the list).
    pub fn sync(&mut self, users: &[User]) {
        self.clamp(users.len());
        let selected_id = self.selected_user(users).map(|user| user.id);
        if self.confirm_delete.is_some() && self.confirm_delete != selected_id {
            self.confirm_delete = None;
        }
    }

    /// Handle a key event, returning a UserListEvent if the store should act.
    pub fn handle_event(&mut self, event: &TuiEvent, users: &[User]) -> Option<UserListEvent> {
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = None;
        }

        match event {
            TuiEvent::CursorUp => {
                if !users.is_empty() {
                    let i = self.selected().unwrap_or(0).saturating_sub(1);
                    self.table_state.select(Some(i));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !users.is_empty() {
                    let i = self
                        .selected()
                        .map(|i| (i + 1).min(users.len() - 1))
                        .unwrap_or(0);
                    self.table_state.select(Some(i));
                }
                None
            }
            TuiEvent::InputChar('r') => Some(UserListEvent::Reload),
            TuiEvent::InputChar('n') => Some(UserListEvent::Create),
            TuiEvent::InputChar('u') => self
                .selected_user(users)
                .map(|user| UserListEvent::Refresh(user.id)),
            TuiEvent::InputChar('e') | TuiEvent::Submit => self
                .selected_user(users)
                .map(|user| UserListEvent::Edit(user.clone())),
            TuiEvent::InputChar('d') => {
                let Some(id) = self.selected_user(users).map(|user| user.id) else {
                    self.confirm_delete = None;
                    return None;
                };
                if self.confirm_delete.take() == Some(id) {
                    Some(UserListEvent::Delete(id))
                } else {
                    // First press, or the armed user moved away: arm this one.
                    self.confirm_delete = Some(id);
                    None
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the user table.
pub struct UserList<'a> {
    pub state: &'a mut UserListState,
    pub users: &'a [User],
    pub is_loading: bool,
}

impl Component for UserList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.users);

        let help = if self.state.confirm_delete.is_some() {
            " Press d again to confirm delete "
        } else {
            " n New  e Edit  d Delete  u Refresh  r Reload "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Users ({}) ", self.users.len()))
            .title_bottom(Line::from(help).centered());

        if self.users.is_empty() {
            let message = if self.is_loading {
                "Loading users..."
            } else {
                "No users. Press n to add one."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["ID", "Name", "Username", "Email", "City", "Company"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.users.iter().map(|user| {
            let d = &user.details;
            Row::new([
                user.id.to_string(),
                d.name.clone(),
                d.username.clone(),
                d.email.clone(),
                d.address.city.clone(),
                d.company.name.clone(),
            ])
        });

        let highlight = if self.state.confirm_delete.is_some() {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let widths = [
            Constraint::Length(5),
            Constraint::Percentage(22),
            Constraint::Percentage(14),
            Constraint::Percentage(26),
            Constraint::Percentage(15),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight);

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
