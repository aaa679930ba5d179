//! Wire types for the user directory API.
//!
//! Field names follow the backend's JSON (camelCase). Coordinates on a
//! user's address are decimal *strings*; hotel coordinates are floats.

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Everything about a user except the id. This is the body of a create request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserDetails {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// A user record as the backend stores it.
///
/// The details are flattened so the JSON stays a single object:
/// `{"id": 1, "name": "...", "address": {...}, ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub details: UserDetails,
}

impl User {
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }
}

/// A fixed point the backend measures user distances against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Hotel {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// One row of the nearest-user answer: the closest user to `hotel`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NearestUserResult {
    pub hotel: Hotel,
    pub nearest_user: User,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        })
    }

    #[test]
    fn test_user_deserializes_flat_json() {
        let user: User = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.details.username, "Bret");
        assert_eq!(user.details.address.geo.lat, "-37.3159");
        assert_eq!(
            user.details.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_user_serializes_id_alongside_details() {
        let user: User = serde_json::from_value(sample_json()).unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Leanne Graham");
        assert_eq!(value["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_user_details_omit_id() {
        let details = UserDetails {
            name: "New".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "New");
        assert_eq!(value["company"]["catchPhrase"], "");
    }

    #[test]
    fn test_nearest_result_uses_camel_case() {
        let value = json!({
            "hotel": { "name": "Hotel B", "latitude": 40.7128, "longitude": -74.006 },
            "nearestUser": sample_json(),
            "distance": 12.5
        });
        let result: NearestUserResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.hotel.name, "Hotel B");
        assert_eq!(result.nearest_user.id, 1);
        assert_eq!(result.distance, 12.5);
    }
}
