//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{
    Address, ApiError, Company, Geo, Hotel, NearestUserResult, User, UserApi, UserDetails, UserId,
};
use crate::core::config::default_hotels;
use crate::core::state::App;

/// In-memory stand-in for the backend. Ids are assigned like a database
/// sequence; `failing()` makes every call return a network error.
pub struct MockUserApi {
    users: Mutex<Vec<User>>,
    fail: bool,
}

impl MockUserApi {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail {
            Err(ApiError::Network("mock backend is down".to_string()))
        } else {
            Ok(())
        }
    }

    fn not_found(id: UserId) -> ApiError {
        ApiError::Api {
            status: 404,
            message: format!("user {id} not found"),
        }
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    fn base_url(&self) -> &str {
        "mock://users"
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_user(&self, details: &UserDetails) -> Result<User, ApiError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::new(id, details.clone());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: UserId, user: &User) -> Result<(), ApiError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *existing = user.clone();
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }

    async fn nearest_users_to_hotels(
        &self,
        hotels: &[Hotel],
    ) -> Result<Vec<NearestUserResult>, ApiError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        let Some(first) = users.first() else {
            return Ok(Vec::new());
        };
        Ok(hotels
            .iter()
            .enumerate()
            .map(|(i, hotel)| NearestUserResult {
                hotel: hotel.clone(),
                nearest_user: first.clone(),
                distance: i as f64 * 100.0,
            })
            .collect())
    }
}

pub fn sample_details(name: &str) -> UserDetails {
    UserDetails {
        name: name.to_string(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031".to_string(),
        website: "example.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub fn sample_user(id: UserId, name: &str) -> User {
    User::new(id, sample_details(name))
}

/// Creates a test App backed by an empty MockUserApi.
pub fn test_app() -> App {
    App::new(Arc::new(MockUserApi::with_users(Vec::new())), default_hotels())
}
