//! HTTP boundary: routing, identity extraction, envelopes and status codes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestHarness;
use test_context::test_context;

fn event_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Bring snacks",
        "date": "2025-06-01",
        "time": "18:30:00",
        "location": "Library"
    })
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_store_status(ctx: &mut TestHarness) {
    let response = ctx.api().get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["database"]["status"], "ok");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn guarded_routes_require_a_valid_token(ctx: &mut TestHarness) {
    let api = ctx.api();

    let response = api.post("/events", None, event_body("Party")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");

    let response = api.get("/invitations/my", Some("not-a-jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Public routes work without one
    let response = api.get("/events", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data(), &json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_then_fetch_event(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let token = ctx.token_for(&alice);
    let api = ctx.api();

    let created = api.post("/events", Some(&token), event_body("Party")).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "event created successfully");
    assert_eq!(created.data()["organizer_id"], alice.user_id.as_i64());
    assert_eq!(created.data()["date"], "2025-06-01");
    assert_eq!(created.data()["time"], "18:30:00");

    let id = created.data()["id"].as_i64().unwrap();
    let fetched = api.get(&format!("/events/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "Party");

    let attendees = api.get(&format!("/events/{}/attendees", id), None).await;
    assert_eq!(attendees.data()[0]["role"], "organizer");
    assert_eq!(attendees.data()[0]["status"], "going");

    let organized = api.get("/events/my/organized", Some(&token)).await;
    assert_eq!(organized.data().as_array().unwrap().len(), 1);

    let by_organizer = api
        .get(&format!("/events/organizer/{}", alice.user_id), None)
        .await;
    assert_eq!(by_organizer.data()[0]["id"], id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_input_is_a_bad_request(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let token = ctx.token_for(&alice);
    let api = ctx.api();

    let response = api.post_raw("/events", Some(&token), "{not json").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "BAD_REQUEST");

    let response = api.get("/events/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "BAD_REQUEST");

    let mut body = event_body("Party");
    body["time"] = json!("half past six");
    let response = api.post("/events", Some(&token), body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("time"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_event_is_not_found(ctx: &mut TestHarness) {
    let response = ctx.api().get("/events/4242", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_organizer_delete_is_forbidden(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let carol = ctx.register("carol@example.com");
    let api = ctx.api();

    let created = api
        .post("/events", Some(&ctx.token_for(&alice)), event_body("Party"))
        .await;
    let path = format!("/events/{}", created.data()["id"]);

    let response = api.delete(&path, Some(&ctx.token_for(&carol))).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
    assert_eq!(
        response.body["message"],
        "you are not authorized to delete this event"
    );

    assert_eq!(api.get(&path, None).await.status, StatusCode::OK);

    let response = api.delete(&path, Some(&ctx.token_for(&alice))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "event deleted successfully");
    assert_eq!(api.get(&path, None).await.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invitation_round_trip_over_http(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let bob = ctx.register("bob@example.com");
    let alice_token = ctx.token_for(&alice);
    let bob_token = ctx.token_for(&bob);
    let api = ctx.api();

    let created = api
        .post("/events", Some(&alice_token), event_body("Party"))
        .await;
    let event_id = created.data()["id"].as_i64().unwrap();

    let sent = api
        .post(
            "/invitations",
            Some(&alice_token),
            json!({
                "event_id": event_id,
                "invitee_email": "bob@example.com",
                "role": "collaborator",
                "message": "Join us"
            }),
        )
        .await;
    assert_eq!(sent.status, StatusCode::CREATED);
    assert_eq!(sent.data()["status"], "pending");
    let invitation_id = sent.data()["id"].as_i64().unwrap();

    let mine = api.get("/invitations/my", Some(&bob_token)).await;
    assert_eq!(mine.data()[0]["event_title"], "Party");
    assert_eq!(mine.data()[0]["inviter_email"], "alice@example.com");

    let respond_path = format!("/invitations/{}/respond", invitation_id);
    let accepted = api
        .put(&respond_path, Some(&bob_token), json!({ "status": "accepted" }))
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.data()["status"], "accepted");
    assert!(accepted.data()["responded_at"].is_string());

    let again = api
        .put(&respond_path, Some(&bob_token), json!({ "status": "declined" }))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.error_code(), "CONFLICT");

    let attending = api.get("/events/my/attending", Some(&bob_token)).await;
    assert_eq!(attending.data()[0]["id"], event_id);
    assert_eq!(attending.data()[0]["role"], "collaborator");
    assert_eq!(attending.data()[0]["status"], "going");

    let for_event = api
        .get(&format!("/events/{}/invitations", event_id), Some(&bob_token))
        .await;
    assert_eq!(for_event.status, StatusCode::OK);
    assert_eq!(for_event.data().as_array().unwrap().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn join_invite_and_attendance_routes(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let bob = ctx.register("bob@example.com");
    let dave = ctx.register("dave@example.com");
    let alice_token = ctx.token_for(&alice);
    let bob_token = ctx.token_for(&bob);
    let api = ctx.api();

    let created = api
        .post("/events", Some(&alice_token), event_body("Party"))
        .await;
    let event_id = created.data()["id"].as_i64().unwrap();

    let joined = api
        .post(&format!("/events/{}/join", event_id), Some(&bob_token), json!({}))
        .await;
    assert_eq!(joined.status, StatusCode::OK);
    assert_eq!(joined.body["message"], "successfully joined event");

    let invite_path = format!("/events/{}/invite", event_id);
    let forbidden = api
        .post(
            &invite_path,
            Some(&bob_token),
            json!({ "user_id": dave.user_id.as_i64(), "role": "attendee" }),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let added = api
        .post(
            &invite_path,
            Some(&alice_token),
            json!({ "user_id": dave.user_id.as_i64(), "role": "collaborator" }),
        )
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.data()["role"], "collaborator");

    let unknown = api
        .post(
            &invite_path,
            Some(&alice_token),
            json!({ "user_id": 9999, "role": "attendee" }),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.error_code(), "NOT_FOUND");
    assert_eq!(unknown.body["message"], "user not found");

    let attendance_path = format!("/events/{}/attendance", event_id);
    let updated = api
        .put(&attendance_path, Some(&bob_token), json!({ "status": "maybe" }))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["status"], "maybe");

    let invalid = api
        .put(&attendance_path, Some(&bob_token), json!({ "status": "sure" }))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.error_code(), "VALIDATION_ERROR");

    let attendees = api.get(&format!("/events/{}/attendees", event_id), None).await;
    assert_eq!(attendees.data().as_array().unwrap().len(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn partial_update_over_http(ctx: &mut TestHarness) {
    let alice = ctx.register("alice@example.com");
    let token = ctx.token_for(&alice);
    let api = ctx.api();

    let created = api.post("/events", Some(&token), event_body("Party")).await;
    let path = format!("/events/{}", created.data()["id"]);

    let updated = api
        .put(&path, Some(&token), json!({ "title": "", "location": "Park" }))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["title"], "Party");
    assert_eq!(updated.data()["location"], "Park");
}
