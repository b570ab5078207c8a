use super::*;
use crate::test_support::{MockBackend, student_session, teacher_session, tokenless_session};
use serde_json::json;

#[tokio::test]
async fn student_activities_carry_standing() {
    let body = r#"[{"actID":1,"actTitle":"Loops","overallScore":8.5,"maxPoints":10,"rank":2,"scorePercentage":85}]"#;
    let backend = MockBackend::start(&[("GET", "/student/activities", 200, body)]).await;

    let activities = backend.client().student_activities(&student_session()).await.unwrap();
    assert_eq!(activities[0].rank, Some(2));
    assert_eq!(activities[0].score_percentage, Some(85.0));
}

#[tokio::test]
async fn create_activity_passes_extra_fields_through() {
    let backend = MockBackend::start(&[("POST", "/teacher/activities", 201, r#"{"message":"Created","actID":3}"#)]).await;
    let mut draft = ActivityDraft { class_id: Some(4), act_title: Some("Loops".into()), ..ActivityDraft::default() };
    draft.extra.insert("actDuration".into(), json!("01:00:00"));

    let reply = backend.client().create_activity(&teacher_session(), &draft).await.unwrap();
    assert_eq!(reply.extra["actID"], 3);
    assert_eq!(
        backend.only_request().json(),
        json!({"classID": 4, "actTitle": "Loops", "actDuration": "01:00:00"})
    );
}

#[tokio::test]
async fn edit_activity_failure_has_fallback_message_and_details() {
    let backend = MockBackend::start(&[("PUT", "/teacher/activities/3", 422, r#"{"errors":{"actTitle":["required"]}}"#)]).await;

    let err = backend
        .client()
        .edit_activity(&teacher_session(), 3, &ActivityDraft::default())
        .await
        .unwrap_err();
    let failure = err.to_failure();
    assert_eq!(failure.error, "Failed to update activity");
    assert_eq!(failure.details, Some(json!({"errors": {"actTitle": ["required"]}})));
}

#[tokio::test]
async fn delete_activity_reports_fixed_confirmation() {
    let backend = MockBackend::start(&[("DELETE", "/teacher/activities/3", 200, r#"{"message":"gone"}"#)]).await;
    let message = backend.client().delete_activity(&teacher_session(), 3).await.unwrap();
    assert_eq!(message.message, ACTIVITY_DELETED);
}

#[tokio::test]
async fn delete_activity_failure_keeps_server_message() {
    let backend = MockBackend::start(&[("DELETE", "/teacher/activities/3", 403, r#"{"message":"Not yours"}"#)]).await;
    let err = backend.client().delete_activity(&teacher_session(), 3).await.unwrap_err();
    assert_eq!(err.to_string(), "Not yours");

    let backend = MockBackend::start(&[("DELETE", "/teacher/activities/3", 500, "")]).await;
    let err = backend.client().delete_activity(&teacher_session(), 3).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete activity");
}

#[tokio::test]
async fn items_and_leaderboard_follow_requested_role() {
    let items = r#"[{"itemID":1,"itemName":"FizzBuzz","actItemPoints":5}]"#;
    let board = r#"[{"studentName":"Lin","averageScore":90,"rank":1}]"#;
    let backend = MockBackend::start(&[
        ("GET", "/student/activities/3/items", 200, items),
        ("GET", "/teacher/activities/3/items", 200, items),
        ("GET", "/student/activities/3/leaderboard", 200, board),
        ("GET", "/teacher/activities/3/leaderboard", 200, board),
    ])
    .await;
    let client = backend.client();
    let session = teacher_session();

    for role in [Role::Student, Role::Teacher] {
        let items = client.activity_items(&session, role, 3).await.unwrap();
        assert_eq!(items[0].item_name, "FizzBuzz");
        let board = client.activity_leaderboard(&session, role, 3).await.unwrap();
        assert_eq!(board[0].rank, Some(1));
    }

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/student/activities/3/items",
            "/student/activities/3/leaderboard",
            "/teacher/activities/3/items",
            "/teacher/activities/3/leaderboard",
        ]
    );
}

#[tokio::test]
async fn settings_round_trip_through_backend() {
    let backend = MockBackend::start(&[
        ("GET", "/teacher/activities/3/settings", 200, r#"{"examMode":true,"randomizedItems":false}"#),
        ("PUT", "/teacher/activities/3/settings", 200, r#"{"message":"Saved"}"#),
    ])
    .await;
    let client = backend.client();
    let session = teacher_session();

    let mut settings = client.activity_settings(&session, 3).await.unwrap();
    settings.fields.insert("examMode".into(), json!(false));
    let reply = client.update_activity_settings(&session, 3, &settings).await.unwrap();
    assert_eq!(reply.message.as_deref(), Some("Saved"));
    assert_eq!(backend.requests()[1].json(), json!({"examMode": false, "randomizedItems": false}));
}

#[tokio::test]
async fn class_activities_and_details_paths() {
    let backend = MockBackend::start(&[
        ("GET", "/teacher/class/4/activities", 200, r#"[{"actID":3,"actTitle":"Loops","classID":4}]"#),
        ("GET", "/teacher/activities/3", 200, r#"{"actID":3,"actTitle":"Loops","maxPoints":20}"#),
    ])
    .await;
    let client = backend.client();

    let listed = client.class_activities(&teacher_session(), 4).await.unwrap();
    assert_eq!(listed[0].class_id, Some(4));
    let details = client.activity_details(&teacher_session(), 3).await.unwrap();
    assert_eq!(details.max_points, Some(20.0));
}

#[tokio::test]
async fn activity_calls_without_token_send_nothing() {
    let backend = MockBackend::start(&[]).await;
    let client = backend.client();
    let session = tokenless_session();

    let err = client.student_activities(&session).await.unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized access: No token found");
    assert!(client.delete_activity(&session, 1).await.is_err());
    assert!(client.activity_items(&session, Role::Student, 1).await.is_err());
    assert!(backend.requests().is_empty());
}
