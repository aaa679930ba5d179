//! # Application State
//!
//! The explicit store that replaces a global reactive one. Views read it,
//! and only `update(state, action)` in action.rs writes it.
//!
//! ```text
//! App
//! ├── api: Arc<dyn UserApi>              // backend the actions talk to
//! ├── users: Vec<User>                   // cached copy of the server's records
//! ├── nearest_users: Vec<NearestUserResult>  // last nearest-user answer
//! ├── hotels: Vec<Hotel>                 // coordinates sent with each query
//! ├── is_loading: bool                   // an action is in flight
//! ├── error: Option<String>              // fixed message of the last failure
//! ├── status_message: String             // status bar text
//! └── last_synced: Option<DateTime>      // when the user list last loaded
//! ```

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::api::{Hotel, NearestUserResult, User, UserApi};
use crate::core::config::ResolvedConfig;

pub struct App {
    pub api: Arc<dyn UserApi>,
    pub users: Vec<User>,
    pub nearest_users: Vec<NearestUserResult>,
    pub hotels: Vec<Hotel>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
    pub last_synced: Option<DateTime<Local>>,
}

impl App {
    pub fn new(api: Arc<dyn UserApi>, hotels: Vec<Hotel>) -> Self {
        Self {
            api,
            users: Vec::new(),
            nearest_users: Vec::new(),
            hotels,
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Roster!"),
            last_synced: None,
        }
    }

    pub fn from_config(api: Arc<dyn UserApi>, config: &ResolvedConfig) -> Self {
        Self::new(api, config.hotels.clone())
    }
}
