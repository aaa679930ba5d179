//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the two views,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! ```text
//! key ──handle_event()──► Action ──update()──► Effect::Request
//!                                                   │ tokio::spawn
//!                                                   ▼
//!            mpsc ◄── completion Action ◄── request::perform(api)
//!             │
//!             └──► update() on the next loop turn
//! ```
//!
//! Requests are never queued or cancelled. Starting a second action while
//! one is in flight is allowed; completions apply in arrival order.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or completions.

mod component;
mod components;
mod event;
pub mod route;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{HttpUserApi, UserApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::request::{Request, perform};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FormEvent, NearestListEvent, NearestListState, UserDetailState, UserForm, UserListEvent,
    UserListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::route::Route;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub route: Route,
    pub user_list: UserListState,
    pub user_detail: UserDetailState,
    pub nearest_list: NearestListState,
    /// Create/edit overlay (None = hidden)
    pub form: Option<UserForm>,
}

impl TuiState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            user_list: UserListState::new(),
            user_detail: UserDetailState::new(),
            nearest_list: NearestListState::new(),
            form: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the HTTP client from a resolved config.
pub fn build_api(config: &ResolvedConfig) -> std::io::Result<Arc<dyn UserApi>> {
    let api = HttpUserApi::new(config.base_url.clone())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(Arc::new(api))
}

/// Translate one terminal event into at most one store action.
///
/// Focus order: Ctrl+C, then the form overlay if open, then global keys,
/// then the current view.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if let Some(form) = tui.form.as_mut() {
        let form_event = form.handle_event(event)?;
        tui.form = None;
        return match form_event {
            FormEvent::Create(details) => Some(Action::AddUser(details)),
            FormEvent::Update(user) => Some(Action::UpdateUser(user.id, user)),
            FormEvent::Cancel => None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::NextField | TuiEvent::PrevField => {
            tui.route = tui.route.next();
            info!("Switched to {}", tui.route.path());
            return Some(tui.route.on_enter());
        }
        _ => {}
    }

    match tui.route {
        Route::Users => {
            match event {
                TuiEvent::ScrollPageUp => {
                    tui.user_detail.scroll_state.scroll_page_up();
                    return None;
                }
                TuiEvent::ScrollPageDown => {
                    tui.user_detail.scroll_state.scroll_page_down();
                    return None;
                }
                _ => {}
            }
            match tui.user_list.handle_event(event, &app.users)? {
                UserListEvent::Reload => Some(Action::FetchUsers),
                UserListEvent::Refresh(id) => Some(Action::RefreshUser(id)),
                UserListEvent::Create => {
                    tui.form = Some(UserForm::create());
                    None
                }
                UserListEvent::Edit(user) => {
                    tui.form = Some(UserForm::edit(&user));
                    None
                }
                UserListEvent::Delete(id) => Some(Action::DeleteUser(id)),
            }
        }
        Route::NearestUsers => {
            match tui
                .nearest_list
                .handle_event(event, app.nearest_users.len())?
            {
                NearestListEvent::Requery => Some(Action::FindNearestUsers),
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api = build_api(&config)?;
    let mut app = App::from_config(api, &config);
    let route = Route::from_path(&config.initial_view).unwrap_or_else(|| {
        warn!(
            "Unknown view '{}', falling back to {}",
            config.initial_view,
            Route::default().path()
        );
        Route::default()
    });
    let mut tui = TuiState::new(route);

    // Channel for completions from background requests
    let (tx, rx) = mpsc::channel();

    // The first view loads its data on entry, like any later switch.
    apply(&mut app, route.on_enter(), &tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_millis() / 80) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(&app, &mut tui, &event)
                && apply(&mut app, action, &tx) == Effect::Quit
            {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Completions from background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, action, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs `update()` and spawns whatever request it asks for.
fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    match update(app, action) {
        Effect::Request(request) => {
            spawn_request(app, request, tx.clone());
            Effect::None
        }
        effect => effect,
    }
}

fn spawn_request(app: &App, request: Request, tx: mpsc::Sender<Action>) {
    debug!("Spawning request: {:?}", request);
    let api = Arc::clone(&app.api);
    tokio::spawn(async move {
        let completion = perform(api.as_ref(), request).await;
        if tx.send(completion).is_err() {
            warn!("Failed to send request completion: receiver dropped");
        }
    });
}
