//! # Actions
//!
//! Everything that can happen in Roster becomes an `Action`.
//! User presses `r`? That's `Action::FetchUsers`.
//! API responds? That's `Action::UsersFetched(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the caller what I/O to do next.
//! No I/O happens here.
//!
//! ```text
//! FetchUsers ──update()──► loading, error cleared ──► Effect::Request(ListUsers)
//!                                                            │
//!                                          request::perform()│
//!                                                            ▼
//! UsersFetched(result) ──update()──► users replaced | error set ──► idle
//! ```
//!
//! Actions are not serialized. Two in-flight requests complete in whatever
//! order the network delivers them; each completion resets `is_loading`.

use chrono::Local;
use log::{debug, error, info};

use crate::api::{ApiError, NearestUserResult, User, UserDetails, UserId};
use crate::core::request::Request;
use crate::core::state::App;

pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";
pub const FETCH_USER_FAILED: &str = "Failed to fetch user";
pub const ADD_USER_FAILED: &str = "Failed to add user";
pub const UPDATE_USER_FAILED: &str = "Failed to update user";
pub const DELETE_USER_FAILED: &str = "Failed to delete user";
pub const FIND_NEAREST_FAILED: &str = "Failed to find nearest users";

#[derive(Debug)]
pub enum Action {
    // Started by the user
    FetchUsers,
    AddUser(UserDetails),
    UpdateUser(UserId, User),
    DeleteUser(UserId),
    RefreshUser(UserId),
    FindNearestUsers,
    Quit,

    // Completions, sent back once the request finishes
    UsersFetched(Result<Vec<User>, ApiError>),
    UserAdded(Result<User, ApiError>),
    UserUpdated {
        id: UserId,
        user: User,
        result: Result<(), ApiError>,
    },
    UserDeleted {
        id: UserId,
        result: Result<(), ApiError>,
    },
    UserRefreshed(Result<User, ApiError>),
    NearestUsersFound(Result<Vec<NearestUserResult>, ApiError>),
}

/// What the caller has to do after `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Request(Request),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchUsers => {
            begin(app, "Fetching users...");
            Effect::Request(Request::ListUsers)
        }
        Action::AddUser(details) => {
            begin(app, "Adding user...");
            Effect::Request(Request::CreateUser(details))
        }
        Action::UpdateUser(id, user) => {
            begin(app, "Saving user...");
            Effect::Request(Request::UpdateUser { id, user })
        }
        Action::DeleteUser(id) => {
            begin(app, "Deleting user...");
            Effect::Request(Request::DeleteUser(id))
        }
        Action::RefreshUser(id) => {
            begin(app, "Refreshing user...");
            Effect::Request(Request::GetUser(id))
        }
        Action::FindNearestUsers => {
            begin(app, "Finding nearest users...");
            Effect::Request(Request::NearestUsers(app.hotels.clone()))
        }
        Action::Quit => Effect::Quit,

        Action::UsersFetched(result) => {
            match result {
                Ok(users) => {
                    app.status_message = format!("Loaded {} users", users.len());
                    app.users = users;
                    app.last_synced = Some(Local::now());
                }
                Err(e) => fail(app, FETCH_USERS_FAILED, &e),
            }
            finish(app)
        }
        Action::UserAdded(result) => {
            match result {
                Ok(user) => {
                    app.status_message = format!("Added user #{}", user.id);
                    app.users.push(user);
                }
                Err(e) => fail(app, ADD_USER_FAILED, &e),
            }
            finish(app)
        }
        Action::UserUpdated { id, user, result } => {
            match result {
                Ok(()) => {
                    match app.users.iter_mut().find(|u| u.id == id) {
                        Some(existing) => *existing = user,
                        None => debug!("Updated user #{} is not in the local list", id),
                    }
                    app.status_message = format!("Saved user #{id}");
                }
                Err(e) => fail(app, UPDATE_USER_FAILED, &e),
            }
            finish(app)
        }
        Action::UserDeleted { id, result } => {
            match result {
                Ok(()) => {
                    app.users.retain(|u| u.id != id);
                    app.status_message = format!("Deleted user #{id}");
                }
                Err(e) => fail(app, DELETE_USER_FAILED, &e),
            }
            finish(app)
        }
        Action::UserRefreshed(result) => {
            match result {
                Ok(user) => {
                    app.status_message = format!("Refreshed user #{}", user.id);
                    match app.users.iter_mut().find(|u| u.id == user.id) {
                        Some(existing) => *existing = user,
                        None => app.users.push(user),
                    }
                }
                Err(e) => fail(app, FETCH_USER_FAILED, &e),
            }
            finish(app)
        }
        Action::NearestUsersFound(result) => {
            match result {
                Ok(results) => {
                    app.status_message = format!("Matched {} hotels", results.len());
                    app.nearest_users = results;
                }
                Err(e) => fail(app, FIND_NEAREST_FAILED, &e),
            }
            finish(app)
        }
    }
}

fn begin(app: &mut App, status: &str) {
    app.is_loading = true;
    app.error = None;
    app.status_message = status.to_string();
}

fn fail(app: &mut App, message: &str, cause: &ApiError) {
    error!("{}: {}", message, cause);
    app.error = Some(message.to_string());
    app.status_message = message.to_string();
}

fn finish(app: &mut App) -> Effect {
    app.is_loading = false;
    info!("Action finished: {}", app.status_message);
    Effect::None
}
