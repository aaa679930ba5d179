use roster::api::{ApiError, HttpUserApi, Hotel, UserApi};
use serde_json::{Value, json};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": name.to_lowercase(),
        "email": format!("{}@example.com", name.to_lowercase()),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031",
        "website": "example.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

/// Same record without the id, as sent on create.
fn details_json(name: &str) -> Value {
    let mut value = user_json(0, name);
    if let Some(object) = value.as_object_mut() {
        object.remove("id");
    }
    value
}

async fn client_for(server: &MockServer) -> HttpUserApi {
    HttpUserApi::new(format!("{}/api", server.uri())).unwrap()
}

// ============================================================================
// Endpoints
// ============================================================================

#[tokio::test]
async fn test_list_users_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_json(1, "Leanne"), user_json(2, "Ervin")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let users = assert_ok!(api.list_users().await);

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[1].details.name, "Ervin");
    assert_eq!(users[0].details.address.geo.lat, "-37.3159");
    assert_eq!(
        users[0].details.company.catch_phrase,
        "Multi-layered client-server neural-net"
    );
}

#[tokio::test]
async fn test_get_user_hits_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "Kurtis")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let user = assert_ok!(api.get_user(7).await);
    assert_eq!(user.id, 7);
    assert_eq!(user.details.username, "kurtis");
}

#[tokio::test]
async fn test_create_user_posts_details_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .and(body_json(details_json("Clementine")))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(11, "Clementine")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let details: roster::api::UserDetails =
        serde_json::from_value(details_json("Clementine")).unwrap();
    let created = assert_ok!(api.create_user(&details).await);

    assert_eq!(created.id, 11);
    assert_eq!(created.details, details);
}

#[tokio::test]
async fn test_update_user_puts_full_record_and_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/3"))
        .and(body_json(user_json(3, "Clementine")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let user: roster::api::User = serde_json::from_value(user_json(3, "Clementine")).unwrap();
    assert_ok!(api.update_user(3, &user).await);
}

#[tokio::test]
async fn test_delete_user_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    assert_ok!(api.delete_user(4).await);
}

#[tokio::test]
async fn test_nearest_users_posts_hotels() {
    let server = MockServer::start().await;
    let hotels = vec![
        Hotel::new("Hotel A", -43.9509, -34.4618),
        Hotel::new("Hotel B", 40.7128, -74.006),
    ];
    let expected_body = json!([
        { "name": "Hotel A", "latitude": -43.9509, "longitude": -34.4618 },
        { "name": "Hotel B", "latitude": 40.7128, "longitude": -74.006 }
    ]);
    let response = json!([
        {
            "hotel": { "name": "Hotel A", "latitude": -43.9509, "longitude": -34.4618 },
            "nearestUser": user_json(5, "Chelsey"),
            "distance": 1520.25
        },
        {
            "hotel": { "name": "Hotel B", "latitude": 40.7128, "longitude": -74.006 },
            "nearestUser": user_json(2, "Ervin"),
            "distance": 88.5
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/users/nearest-to-hotels"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let results = assert_ok!(api.nearest_users_to_hotels(&hotels).await);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].hotel, hotels[0]);
    assert_eq!(results[0].nearest_user.id, 5);
    assert_eq!(results[1].distance, 88.5);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("User not found"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = assert_err!(api.get_user(99).await);
    assert_eq!(
        err,
        ApiError::Api {
            status: 404,
            message: "User not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_server_error_on_delete_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    match api.delete_user(1).await {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected ApiError::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = assert_err!(api.list_users().await);
    assert!(matches!(err, ApiError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network_error() {
    // Nothing listens on port 1.
    let api = HttpUserApi::new("http://127.0.0.1:1/api").unwrap();
    let err = assert_err!(api.list_users().await);
    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}
