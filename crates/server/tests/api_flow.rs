mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{build_app, get, json_request, send};

#[tokio::test]
async fn empty_catalog_lists_are_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    for (uri, msg) in [("/planets", "no planets found"), ("/characters", "no characters found"), ("/vehicles", "no vehicles found")] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["msg"], msg);
    }
    Ok(())
}

#[tokio::test]
async fn tatooine_favourite_lifecycle() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, json_request("POST", "/users", json!({"userName": "luke", "email": "luke@rebels.org", "password": "x"}))).await;
    assert_eq!(status, StatusCode::OK);
    let user_id = body["result"]["id"].as_i64().expect("user id");
    assert!(body["result"].get("password").is_none());

    let (status, body) = send(&app, json_request("POST", "/planets", json!({"name": "Tatooine", "population": 200000, "averageTemp": 45}))).await;
    assert_eq!(status, StatusCode::OK);
    let planet_id = body["result"]["id"].as_i64().expect("planet id");
    assert_eq!(body["result"]["averageTemp"], 45);

    let uri = format!("/favourites/planets/{planet_id}");
    let (status, body) = send(&app, json_request("POST", &uri, json!({"userId": user_id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "planet added to favourites");
    assert_eq!(body["result"]["kind"], "planet");

    let (status, body) = send(&app, json_request("POST", &uri, json!({"userId": user_id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "this user already has this planet as a favourite");
    assert!(body.get("result").is_none());

    let (status, body) = send(&app, get(&format!("/users/favourites/{user_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["itemId"], planet_id);

    let (status, _) = send(&app, json_request("DELETE", &uri, json!({"userId": user_id}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, json_request("DELETE", &uri, json!({"userId": user_id}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "this planet is not a favourite of this user");

    let (status, _) = send(&app, get("/users/favourites")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn favourite_for_unknown_user_and_item_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, json_request("POST", "/favourites/vehicles/9", json!({"userId": 9}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "both user and vehicle do not exist");

    send(&app, json_request("POST", "/characters", json!({"name": "Leia", "race": "Human", "homeworld": "Alderaan"}))).await;
    let (status, body) = send(&app, json_request("POST", "/favourites/characters/1", json!({"user_id": 9}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "this user does not exist");
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_and_ids_are_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/planets")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))?;
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());

    let (status, body) = send(&app, json_request("POST", "/characters", json!({"name": "R2-D2"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());

    let (status, body) = send(&app, json_request("POST", "/planets", json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "name required");

    let (status, body) = send(&app, get("/planets/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());
    Ok(())
}

#[tokio::test]
async fn vehicle_create_then_get_by_id() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, json_request("POST", "/vehicles", json!({"name": "X-wing", "length": 12, "crewSize": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["result"]["id"].as_i64().expect("id");

    let (status, body) = send(&app, get(&format!("/vehicles/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "X-wing");
    assert_eq!(body["result"]["crewSize"], 1);

    let (status, body) = send(&app, get("/vehicles/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "no vehicle with that id");
    Ok(())
}

#[tokio::test]
async fn index_health_and_fallback() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let routes = body.as_array().expect("route map");
    assert!(routes.iter().any(|r| r["path"] == "/favourites/planets/{id}" && r["method"] == "DELETE"));
    for served in ["/docs", "/api-docs/openapi.json"] {
        assert!(routes.iter().any(|r| r["path"] == served), "{served} missing from route map");
    }

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/planets"].is_object());

    let (status, body) = send(&app, get("/death-star-plans")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "route not found");
    Ok(())
}
