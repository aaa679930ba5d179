//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: route, status, spinner, API base URL
//!
//! ### Stateful Components
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame together with the props it renders:
//! - `UserList` / `UserListState`: user table with two-step delete
//! - `UserDetail` / `UserDetailState`: scrollable record pane
//! - `NearestList` / `NearestListState`: hotel → nearest user table
//! - `UserForm`: create/edit overlay (owns its own field buffers)
//!
//! Components receive data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! UserList { state: &mut tui.user_list, users: &app.users, is_loading: app.is_loading }
//!     .render(frame, area);
//! ```

pub mod nearest_list;
pub mod title_bar;
pub mod user_detail;
pub mod user_form;
pub mod user_list;

pub use nearest_list::{NearestList, NearestListEvent, NearestListState};
pub use title_bar::TitleBar;
pub use user_detail::{UserDetail, UserDetailState};
pub use user_form::{FormEvent, UserForm};
pub use user_list::{UserList, UserListEvent, UserListState};
