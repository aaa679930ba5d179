//! # Core Application Logic
//!
//! This module contains Roster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (users, hotels)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Request (I/O to do)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  UserApi   │
//!     │  Adapter   │                          │ (reqwest)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`request`]: The I/O an action asks for, and `perform()` to run it
//! - [`store`]: Inline async helpers (`app.fetch_users().await`, ...)
//! - [`config`]: File/env/CLI settings

pub mod action;
pub mod config;
pub mod request;
pub mod state;
pub mod store;
