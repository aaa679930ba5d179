//! # Requests
//!
//! The I/O half of an action. `update()` returns a `Request`; whoever owns
//! the runtime calls `perform()` and feeds the returned completion `Action`
//! back into `update()`.

use crate::api::{Hotel, User, UserApi, UserDetails, UserId};
use crate::core::action::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListUsers,
    GetUser(UserId),
    CreateUser(UserDetails),
    UpdateUser { id: UserId, user: User },
    DeleteUser(UserId),
    NearestUsers(Vec<Hotel>),
}

/// Runs one request against the API and wraps the outcome as a completion.
pub async fn perform(api: &dyn UserApi, request: Request) -> Action {
    match request {
        Request::ListUsers => Action::UsersFetched(api.list_users().await),
        Request::GetUser(id) => Action::UserRefreshed(api.get_user(id).await),
        Request::CreateUser(details) => Action::UserAdded(api.create_user(&details).await),
        Request::UpdateUser { id, user } => {
            let result = api.update_user(id, &user).await;
            Action::UserUpdated { id, user, result }
        }
        Request::DeleteUser(id) => {
            let result = api.delete_user(id).await;
            Action::UserDeleted { id, result }
        }
        Request::NearestUsers(hotels) => {
            Action::NearestUsersFound(api.nearest_users_to_hotels(&hotels).await)
        }
    }
}
