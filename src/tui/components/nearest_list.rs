//! # Nearest List Component
//!
//! One row per hotel with the user the backend matched to it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::api::{Hotel, NearestUserResult};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct NearestListState {
    pub table_state: TableState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NearestListEvent {
    Requery,
}

impl NearestListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<NearestListEvent> {
        match event {
            TuiEvent::CursorUp if len > 0 => {
                let i = self.table_state.selected().unwrap_or(0).saturating_sub(1);
                self.table_state.select(Some(i));
                None
            }
            TuiEvent::CursorDown if len > 0 => {
                let i = self
                    .table_state
                    .selected()
                    .map(|i| (i + 1).min(len - 1))
                    .unwrap_or(0);
                self.table_state.select(Some(i));
                None
            }
            TuiEvent::InputChar('r') => Some(NearestListEvent::Requery),
            _ => None,
        }
    }
}

fn coordinates(hotel: &Hotel) -> String {
    format!("{:.4}, {:.4}", hotel.latitude, hotel.longitude)
}

pub struct NearestList<'a> {
    pub state: &'a mut NearestListState,
    pub results: &'a [NearestUserResult],
    pub hotel_count: usize,
    pub is_loading: bool,
}

impl Component for NearestList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Nearest users to {} hotels ", self.hotel_count))
            .title_bottom(Line::from(" r Re-query ").centered());

        if self.results.is_empty() {
            let message = if self.is_loading {
                "Asking the server..."
            } else {
                "No results. Press r to query."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Hotel", "Coordinates", "Nearest user", "Email", "Distance"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.results.iter().map(|r| {
            Row::new([
                r.hotel.name.clone(),
                coordinates(&r.hotel),
                format!("{} (#{})", r.nearest_user.details.name, r.nearest_user.id),
                r.nearest_user.details.email.clone(),
                format!("{:.2}", r.distance),
            ])
        });

        let widths = [
            Constraint::Percentage(16),
            Constraint::Percentage(22),
            Constraint::Percentage(26),
            Constraint::Percentage(24),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_hotels;
    use crate::test_support::sample_user;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn results() -> Vec<NearestUserResult> {
        default_hotels()
            .into_iter()
            .enumerate()
            .map(|(i, hotel)| NearestUserResult {
                hotel,
                nearest_user: sample_user(i as i64 + 1, "Ann"),
                distance: 1234.5678,
            })
            .collect()
    }

    fn render(results: &[NearestUserResult], is_loading: bool) -> String {
        let mut state = NearestListState::new();
        let backend = TestBackend::new(110, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                NearestList {
                    state: &mut state,
                    results,
                    hotel_count: 4,
                    is_loading,
                }
                .render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_coordinates_format() {
        assert_eq!(coordinates(&default_hotels()[1]), "40.7128, -74.0060");
    }

    #[test]
    fn test_render_rows() {
        let text = render(&results(), false);
        assert!(text.contains("Hotel A"));
        assert!(text.contains("Hotel D"));
        assert!(text.contains("1234.57"));
    }

    #[test]
    fn test_render_empty_while_loading() {
        let text = render(&[], true);
        assert!(text.contains("Asking the server..."));
    }

    #[test]
    fn test_requery_and_cursor() {
        let mut state = NearestListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('r'), 0),
            Some(NearestListEvent::Requery)
        );
        state.handle_event(&TuiEvent::CursorDown, 4);
        state.handle_event(&TuiEvent::CursorDown, 4);
        assert_eq!(state.table_state.selected(), Some(1));
        state.handle_event(&TuiEvent::CursorDown, 0);
        assert_eq!(state.table_state.selected(), Some(1));
    }
}
