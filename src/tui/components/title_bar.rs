//! # TitleBar Component
//!
//! Top status bar: which view is showing, where requests go, what the last
//! action did, and a spinner while a request is in flight.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Roster · Users (/) | Fetching users... ⠙"`
//! 2. **Idle**: `"Roster · Users (/) | Loaded 10 users | synced 14:02:11"`
//!
//! The API base URL is right-aligned and dropped first when the terminal
//! is too narrow.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::route::Route;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Props for the title bar. Built fresh every frame.
pub struct TitleBar {
    pub route: Route,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
    /// Pre-formatted sync time (e.g. "14:02:11"), None before the first load.
    pub last_synced: Option<String>,
    pub base_url: String,
}

impl TitleBar {
    pub fn text(&self) -> String {
        let mut text = format!(
            "Roster · {} ({}) | {}",
            self.route.title(),
            self.route.path(),
            self.status_message
        );
        if self.is_loading {
            text.push(' ');
            text.push_str(SPINNER[self.spinner_frame % SPINNER.len()]);
        } else if let Some(ref synced) = self.last_synced {
            text.push_str(&format!(" | synced {synced}"));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text();
        let url = format!("api: {}", self.base_url);

        // Only show the URL when both fit side by side.
        let needed = text.width() + url.width() + 2;
        let [left, right] = if (area.width as usize) >= needed {
            Layout::horizontal([Constraint::Min(0), Constraint::Length(url.width() as u16)])
                .areas(area)
        } else {
            [area, Rect::default()]
        };

        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        frame.render_widget(Line::from(Span::styled(text, style)), left);
        if right.width > 0 {
            frame.render_widget(
                Line::from(Span::styled(url, Style::default().fg(Color::DarkGray))),
                right,
            );
        }
    }
}
