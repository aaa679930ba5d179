//! # User Detail Component
//!
//! Scrollable pane with every field of the selected user. PageUp/PageDown
//! scroll it; the offset resets when the selection changes.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{User, UserId};
use crate::tui::component::Component;

/// Scroll position, kept per selected user.
#[derive(Default)]
pub struct UserDetailState {
    pub scroll_state: ScrollViewState,
    shown: Option<UserId>,
}

impl UserDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the scroll offset when a different user is shown.
    fn follow(&mut self, id: Option<UserId>) {
        if self.shown != id {
            self.shown = id;
            self.scroll_state.scroll_to_top();
        }
    }
}

pub struct UserDetail<'a> {
    pub state: &'a mut UserDetailState,
    pub user: Option<&'a User>,
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<13}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

/// All lines of the detail view for one user.
pub fn detail_lines(user: &User) -> Vec<Line<'_>> {
    let d = &user.details;
    vec![
        heading("User"),
        Line::from(vec![
            Span::styled(format!("{:<13}", "ID"), Style::default().fg(Color::DarkGray)),
            Span::raw(user.id.to_string()),
        ]),
        field("Name", &d.name),
        field("Username", &d.username),
        field("Email", &d.email),
        field("Phone", &d.phone),
        field("Website", &d.website),
        Line::default(),
        heading("Address"),
        field("Street", &d.address.street),
        field("Suite", &d.address.suite),
        field("City", &d.address.city),
        field("Zipcode", &d.address.zipcode),
        field("Latitude", &d.address.geo.lat),
        field("Longitude", &d.address.geo.lng),
        Line::default(),
        heading("Company"),
        field("Name", &d.company.name),
        field("Catch phrase", &d.company.catch_phrase),
        field("BS", &d.company.bs),
    ]
}

impl Component for UserDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.follow(self.user.map(|u| u.id));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(user) = self.user else {
            let empty = Paragraph::new("No user selected.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, inner);
            return;
        };

        let lines = detail_lines(user);
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
