use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NearestList, TitleBar, UserDetail, UserList};
use crate::tui::route::Route;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar {
        route: tui.route,
        status_message: app.status_message.clone(),
        is_loading: app.is_loading,
        spinner_frame,
        last_synced: app.last_synced.map(|t| t.format("%H:%M:%S").to_string()),
        base_url: app.api.base_url().to_string(),
    }
    .render(frame, title_area);

    match tui.route {
        Route::Users => draw_users(frame, main_area, app, tui),
        Route::NearestUsers => NearestList {
            state: &mut tui.nearest_list,
            results: &app.nearest_users,
            hotel_count: app.hotels.len(),
            is_loading: app.is_loading,
        }
        .render(frame, main_area),
    }

    draw_footer(frame, footer_area, app.error.as_deref());

    if let Some(form) = tui.form.as_mut() {
        let area = frame.area();
        form.render(frame, area);
    }
}

fn draw_users(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(area);

    UserList {
        state: &mut tui.user_list,
        users: &app.users,
        is_loading: app.is_loading,
    }
    .render(frame, list_area);

    // Selection was clamped by the list render above.
    let selected = tui.user_list.selected_user(&app.users);
    UserDetail {
        state: &mut tui.user_detail,
        user: selected,
    }
    .render(frame, detail_area);
}

/// The last error stays visible until the next action clears it.
fn draw_footer(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let line = match error {
        Some(message) => Line::from(vec![
            Span::styled(
                " ERROR ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {message}"), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            " Tab Switch view  ↑↓ Select  PgUp/PgDn Scroll  q Quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(line, area);
}
