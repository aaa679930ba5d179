//! # Routes
//!
//! Two views, addressed by path the same way the web client addressed them:
//!
//! | Path       | Route                 | View             |
//! |------------|-----------------------|------------------|
//! | `/`        | `Route::Users`        | user table       |
//! | `/nearest` | `Route::NearestUsers` | nearest per hotel|

use crate::core::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Users,
    NearestUsers,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Users),
            "/nearest" => Some(Route::NearestUsers),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Users => "/",
            Route::NearestUsers => "/nearest",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Users => "Users",
            Route::NearestUsers => "Nearest Users",
        }
    }

    /// Tab cycles between the two views.
    pub fn next(self) -> Route {
        match self {
            Route::Users => Route::NearestUsers,
            Route::NearestUsers => Route::Users,
        }
    }

    /// The action a view fires when it becomes visible.
    pub fn on_enter(self) -> Action {
        match self {
            Route::Users => Action::FetchUsers,
            Route::NearestUsers => Action::FindNearestUsers,
        }
    }
}
