//! HTTP-level integration tests for gift endpoints, including the purchase
//! toggle state transition.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{
    body_json, create_entity, get_auth, put_json_auth, seed_user_with_token,
};
use sqlx::PgPool;

/// Create a family + person for the given token and return the person id.
async fn seed_person(app: axum::Router, token: &str, name: &str) -> String {
    let family = create_entity(
        app.clone(),
        "/api/families",
        token,
        serde_json::json!({ "name": "Novákovi" }),
    )
    .await;
    let family_id = family["id"].as_str().unwrap();

    let person = create_entity(
        app,
        &format!("/api/families/{family_id}/persons"),
        token,
        serde_json::json!({ "name": name }),
    )
    .await;
    person["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Creation and listing
// ---------------------------------------------------------------------------

/// A new gift starts unpurchased with no purchase date.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_gift_starts_unpurchased(pool: PgPool) {
    let (_user, token) = seed_user_with_token(&pool, "gifts@test.com").await;
    let app = common::build_test_app(pool);
    let person_id = seed_person(app.clone(), &token, "Babička").await;

    let gift = create_entity(
        app,
        &format!("/api/persons/{person_id}/gifts"),
        &token,
        serde_json::json!({ "name": "Hrneček", "description": "modrý", "price": 250 }),
    )
    .await;

    assert_eq!(gift["name"], "Hrneček");
    assert_eq!(gift["purchased"], false);
    assert_matches!(gift["purchase_date"], serde_json::Value::Null);
}

/// Gifts are listed newest first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gifts_listed_newest_first(pool: PgPool) {
    let (_user, token) = seed_user_with_token(&pool, "order@test.com").await;
    let app = common::build_test_app(pool);
    let person_id = seed_person(app.clone(), &token, "Děda").await;

    create_entity(
        app.clone(),
        &format!("/api/persons/{person_id}/gifts"),
        &token,
        serde_json::json!({ "name": "Šátek" }),
    )
    .await;
    create_entity(
        app.clone(),
        &format!("/api/persons/{person_id}/gifts"),
        &token,
        serde_json::json!({ "name": "Knížka" }),
    )
    .await;

    let response = get_auth(app, &format!("/api/persons/{person_id}/gifts"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let gifts = json.as_array().unwrap();
    assert_eq!(gifts.len(), 2);
    assert_eq!(gifts[0]["name"], "Knížka");
    assert_eq!(gifts[1]["name"], "Šátek");
}

// ---------------------------------------------------------------------------
// Purchase toggle
// ---------------------------------------------------------------------------

/// Marking a gift purchased stamps the purchase date; undoing the purchase
/// clears it again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_purchase_toggle_stamps_and_clears_date(pool: PgPool) {
    let (_user, token) = seed_user_with_token(&pool, "toggle@test.com").await;
    let app = common::build_test_app(pool);
    let person_id = seed_person(app.clone(), &token, "Máma").await;

    let gift = create_entity(
        app.clone(),
        &format!("/api/persons/{person_id}/gifts"),
        &token,
        serde_json::json!({ "name": "Kytka" }),
    )
    .await;
    let gift_id = gift["id"].as_str().unwrap();

    // Purchase: date is stamped server-side.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/gifts/{gift_id}/purchased"),
        &token,
        serde_json::json!({ "purchased": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let purchased = body_json(response).await;
    assert_eq!(purchased["purchased"], true);
    assert!(purchased["purchase_date"].is_string());

    // Undo: date is cleared.
    let response = put_json_auth(
        app,
        &format!("/api/gifts/{gift_id}/purchased"),
        &token,
        serde_json::json!({ "purchased": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let unpurchased = body_json(response).await;
    assert_eq!(unpurchased["purchased"], false);
    assert_matches!(unpurchased["purchase_date"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Updates and ownership
// ---------------------------------------------------------------------------

/// Updating a gift applies only the provided fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_gift_partial(pool: PgPool) {
    let (_user, token) = seed_user_with_token(&pool, "update@test.com").await;
    let app = common::build_test_app(pool);
    let person_id = seed_person(app.clone(), &token, "Táta").await;

    let gift = create_entity(
        app.clone(),
        &format!("/api/persons/{person_id}/gifts"),
        &token,
        serde_json::json!({ "name": "Ponožky", "store": "obchod na rohu" }),
    )
    .await;
    let gift_id = gift["id"].as_str().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/gifts/{gift_id}"),
        &token,
        serde_json::json!({ "name": "Vlněné ponožky", "price": 199 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Vlněné ponožky");
    assert_eq!(updated["store"], "obchod na rohu");
}

/// Mutating another user's gift is forbidden, identical to a missing gift.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_gift_update_forbidden(pool: PgPool) {
    let (_user_a, token_a) = seed_user_with_token(&pool, "a@test.com").await;
    let (_user_b, token_b) = seed_user_with_token(&pool, "b@test.com").await;
    let app = common::build_test_app(pool);
    let person_id = seed_person(app.clone(), &token_a, "Babička").await;

    let gift = create_entity(
        app.clone(),
        &format!("/api/persons/{person_id}/gifts"),
        &token_a,
        serde_json::json!({ "name": "Hrneček" }),
    )
    .await;
    let gift_id = gift["id"].as_str().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/gifts/{gift_id}"),
        &token_b,
        serde_json::json!({ "name": "Ukradený hrneček" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        app,
        &format!("/api/gifts/{gift_id}/purchased"),
        &token_b,
        serde_json::json!({ "purchased": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
