//! # Store Actions
//!
//! Inline versions of each action: start, await the request, apply the
//! completion. The TUI does the same three steps but spawns the middle one
//! so the event loop keeps drawing.
//!
//! None of these return an error. A failure ends up in `app.error`.

use std::sync::Arc;

use crate::api::{User, UserDetails, UserId};
use crate::core::action::{Action, Effect, update};
use crate::core::request::perform;
use crate::core::state::App;

/// Runs one start action to completion.
pub async fn dispatch(app: &mut App, action: Action) -> Effect {
    match update(app, action) {
        Effect::Request(request) => {
            let api = Arc::clone(&app.api);
            let completion = perform(api.as_ref(), request).await;
            update(app, completion)
        }
        effect => effect,
    }
}

impl App {
    pub async fn fetch_users(&mut self) {
        dispatch(self, Action::FetchUsers).await;
    }

    pub async fn add_user(&mut self, details: UserDetails) {
        dispatch(self, Action::AddUser(details)).await;
    }

    pub async fn update_user(&mut self, id: UserId, user: User) {
        dispatch(self, Action::UpdateUser(id, user)).await;
    }

    pub async fn delete_user(&mut self, id: UserId) {
        dispatch(self, Action::DeleteUser(id)).await;
    }

    pub async fn refresh_user(&mut self, id: UserId) {
        dispatch(self, Action::RefreshUser(id)).await;
    }

    pub async fn find_nearest_users(&mut self) {
        dispatch(self, Action::FindNearestUsers).await;
    }
}
