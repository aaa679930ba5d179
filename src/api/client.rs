//! HTTP implementation of [`UserApi`].
//!
//! Every method is one request against `{base_url}{path}`. There is no retry,
//! no timeout and no caching: a failure comes straight back as an `ApiError`.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Hotel, NearestUserResult, User, UserDetails, UserId};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5249/api";

/// One async operation per backend endpoint.
///
/// The store only ever talks to this trait, so tests can swap in an
/// in-memory implementation.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Where requests go. Shown in the title bar.
    fn base_url(&self) -> &str;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: UserId) -> Result<User, ApiError>;

    /// `POST /users`. The server assigns the id.
    async fn create_user(&self, details: &UserDetails) -> Result<User, ApiError>;

    /// `PUT /users/{id}` with the full record. The response body is ignored.
    async fn update_user(&self, id: UserId, user: &User) -> Result<(), ApiError>;

    /// `DELETE /users/{id}`. The response body is ignored.
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;

    /// `POST /users/nearest-to-hotels`
    async fn nearest_users_to_hotels(
        &self,
        hotels: &[Hotel],
    ) -> Result<Vec<NearestUserResult>, ApiError>;
}

/// reqwest-backed client for the user directory API.
pub struct HttpUserApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        info!("User API client ready: base_url={}", base_url);
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        info!("{} {}", method, path);
        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!("{} {} -> {}", method, path, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("{} {} returned {}: {}", method, path, status.as_u16(), body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }
}

/// Reads the whole body and decodes it, keeping transport and decode
/// failures apart.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl UserApi for HttpUserApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let path = "/users";
        let response = self
            .send("GET", path, self.client.get(self.url(path)))
            .await?;
        let users: Vec<User> = decode(response).await?;
        debug!("Received {} users", users.len());
        Ok(users)
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        let path = format!("/users/{id}");
        let response = self
            .send("GET", &path, self.client.get(self.url(&path)))
            .await?;
        decode(response).await
    }

    async fn create_user(&self, details: &UserDetails) -> Result<User, ApiError> {
        let path = "/users";
        let response = self
            .send("POST", path, self.client.post(self.url(path)).json(details))
            .await?;
        decode(response).await
    }

    async fn update_user(&self, id: UserId, user: &User) -> Result<(), ApiError> {
        let path = format!("/users/{id}");
        self.send("PUT", &path, self.client.put(self.url(&path)).json(user))
            .await?;
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        let path = format!("/users/{id}");
        self.send("DELETE", &path, self.client.delete(self.url(&path)))
            .await?;
        Ok(())
    }

    async fn nearest_users_to_hotels(
        &self,
        hotels: &[Hotel],
    ) -> Result<Vec<NearestUserResult>, ApiError> {
        let path = "/users/nearest-to-hotels";
        let response = self
            .send("POST", path, self.client.post(self.url(path)).json(hotels))
            .await?;
        let results: Vec<NearestUserResult> = decode(response).await?;
        debug!(
            "Received {} nearest-user results for {} hotels",
            results.len(),
            hotels.len()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = HttpUserApi::new("http://localhost:5249/api/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:5249/api");
        assert_eq!(api.url("/users"), "http://localhost:5249/api/users");
    }

    #[test]
    fn test_url_joins_path() {
        let api = HttpUserApi::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(api.url("/users/7"), "http://localhost:5249/api/users/7");
    }
}
