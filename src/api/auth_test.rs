use super::*;
use crate::test_support::{MockBackend, student_session, teacher_session, unreachable_client};
use crate::types::{Role, StudentSignup, TeacherSignup};
use serde_json::json;

fn teacher_signup(email: &str, password: &str) -> Registration {
    Registration::Teacher(TeacherSignup {
        firstname: "Ada".into(),
        lastname: "Lovelace".into(),
        email: email.into(),
        password: password.into(),
    })
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_rejects_bad_input_without_requests() {
    let backend = MockBackend::start(&[]).await;
    let client = backend.client();

    let cases = [
        (teacher_signup("ada@gmail.com", "password1"), "password1", "Invalid email format! Use '@neu.edu.ph'."),
        (teacher_signup("ada@neu.edu.ph", "short"), "short", "Password must be at least 8 characters."),
        (teacher_signup("ada@neu.edu.ph", "password1"), "password2", "Passwords do not match!"),
    ];
    for (registration, confirm, expected) in cases {
        let err = client.register(&registration, confirm).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), expected);
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn register_student_posts_to_student_path() {
    let backend = MockBackend::start(&[("POST", "/register/student", 201, r#"{"message":"Registered"}"#)]).await;
    let registration = Registration::Student(StudentSignup {
        firstname: "Lin".into(),
        lastname: "Chen".into(),
        email: "lin@neu.edu.ph".into(),
        password: "password1".into(),
        student_num: "21-0001".into(),
        program: "BSCS".into(),
    });

    let reply = backend.client().register(&registration, "password1").await.unwrap();
    assert_eq!(reply.message.as_deref(), Some("Registered"));

    let req = backend.only_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.json()["student_num"], "21-0001");
    assert_eq!(req.json()["program"], "BSCS");
}

#[tokio::test]
async fn register_failure_exposes_validation_errors_only() {
    let body = r#"{"errors":{"email":["taken"]},"hint":"x"}"#;
    let backend = MockBackend::start(&[("POST", "/register/teacher", 422, body)]).await;

    let err = backend
        .client()
        .register(&teacher_signup("ada@neu.edu.ph", "password1"), "password1")
        .await
        .unwrap_err();
    let failure = err.to_failure();
    assert_eq!(failure.error, "Registration failed");
    assert_eq!(failure.details, Some(json!({"email": ["taken"]})));
}

#[tokio::test]
async fn register_failure_without_errors_has_empty_details() {
    let backend = MockBackend::start(&[("POST", "/register/teacher", 409, r#"{"message":"Email exists"}"#)]).await;

    let err = backend
        .client()
        .register(&teacher_signup("ada@neu.edu.ph", "password1"), "password1")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email exists");
    assert_eq!(err.details(), Some(&json!({})));
}

// =============================================================================
// login / logout
// =============================================================================

#[tokio::test]
async fn login_builds_session_from_role_specific_id() {
    let body = r#"{"access_token":"tok","user_type":"student","studentID":"21","teacherID":null,"note":"hi"}"#;
    let backend = MockBackend::start(&[("POST", "/login", 200, body)]).await;

    let (login, session) = backend.client().login("lin@neu.edu.ph", "password1").await.unwrap();
    assert_eq!(session.access_token, "tok");
    assert_eq!(session.role, Some(Role::Student));
    assert_eq!(session.user_id, Some(21));
    assert_eq!(session.user_email.as_deref(), Some("lin@neu.edu.ph"));
    assert_eq!(login.extra["note"], "hi");

    let req = backend.only_request();
    assert_eq!(req.json(), json!({"email": "lin@neu.edu.ph", "password": "password1"}));
}

#[tokio::test]
async fn login_failure_falls_back_to_generic_message() {
    let backend = MockBackend::start(&[("POST", "/login", 401, "")]).await;
    let err = backend.client().login("a@neu.edu.ph", "bad").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn logout_clears_session_on_success() {
    let backend = MockBackend::start(&[("POST", "/logout", 200, r#"{"message":"bye"}"#)]).await;
    let mut session = Some(teacher_session());

    let message = backend.client().logout(&mut session).await.unwrap();
    assert_eq!(message.message, LOGOUT_SUCCESS);
    assert!(session.is_none());
    assert_eq!(backend.only_request().header("authorization"), Some("Bearer teacher-token"));
}

#[tokio::test]
async fn logout_keeps_session_on_rejection() {
    let backend = MockBackend::start(&[("POST", "/logout", 500, r#"{"message":"boom"}"#)]).await;
    let mut session = Some(teacher_session());

    let err = backend.client().logout(&mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "Logout failed. Try again.");
    assert_eq!(session, Some(teacher_session()));
}

#[tokio::test]
async fn logout_success_ignores_non_json_body() {
    let backend = MockBackend::start(&[("POST", "/logout", 200, "Logged out")]).await;
    let mut session = Some(teacher_session());

    let message = backend.client().logout(&mut session).await.unwrap();
    assert_eq!(message.message, LOGOUT_SUCCESS);
    assert!(session.is_none());
}

#[tokio::test]
async fn logout_rejection_with_html_body_keeps_session() {
    let backend = MockBackend::start(&[("POST", "/logout", 500, "<html>oops</html>")]).await;
    let mut session = Some(teacher_session());

    let err = backend.client().logout(&mut session).await.unwrap_err();
    assert!(matches!(err, ApiError::Operation(_)));
    assert_eq!(err.to_string(), "Logout failed. Try again.");
    assert_eq!(session, Some(teacher_session()));
}

#[tokio::test]
async fn logout_transport_failure_keeps_session() {
    let mut session = Some(teacher_session());

    let err = unreachable_client().logout(&mut session).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(session, Some(teacher_session()));
}

#[tokio::test]
async fn logout_without_session_sends_nothing() {
    let backend = MockBackend::start(&[]).await;
    let mut session = None;

    let err = backend.client().logout(&mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "No user is logged in.");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn verify_password_reports_wrong_password() {
    let backend = MockBackend::start(&[("POST", "/login", 401, "{}")]).await;
    let err = backend.client().verify_password("a@neu.edu.ph", "nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Wrong password");
}

// =============================================================================
// user_info
// =============================================================================

#[tokio::test]
async fn user_info_refreshes_session_identity() {
    let body = r#"{"user_type":"teacher","teacherID":9,"email":"t@neu.edu.ph"}"#;
    let backend = MockBackend::start(&[("GET", "/user", 200, body)]).await;
    let mut session = student_session();

    let info = backend.client().user_info(&mut session).await.unwrap();
    assert_eq!(info.email.as_deref(), Some("t@neu.edu.ph"));
    assert_eq!(session.role, Some(Role::Teacher));
    assert_eq!(session.user_id, Some(9));
}

#[tokio::test]
async fn user_info_without_role_id_is_incomplete() {
    let backend = MockBackend::start(&[("GET", "/user", 200, r#"{"user_type":"student"}"#)]).await;
    let mut session = student_session();

    let err = backend.client().user_info(&mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "User data is incomplete");
    assert_eq!(session, student_session());
}

#[tokio::test]
async fn user_info_stores_known_role_before_reporting_incomplete() {
    let backend = MockBackend::start(&[("GET", "/user", 200, r#"{"user_type":"teacher"}"#)]).await;
    let mut session = student_session();

    let err = backend.client().user_info(&mut session).await.unwrap_err();
    assert_eq!(err.to_string(), "User data is incomplete");
    assert_eq!(session.role, Some(Role::Teacher));
    assert_eq!(session.user_id, Some(21));
}

#[tokio::test]
async fn user_info_with_unknown_role_is_incomplete() {
    let body = r#"{"user_type":"admin","studentID":3,"teacherID":4}"#;
    let backend = MockBackend::start(&[("GET", "/user", 200, body)]).await;
    let mut session = student_session();

    let err = backend.client().user_info(&mut session).await.unwrap_err();
    assert!(matches!(err, ApiError::Operation(_)));
    assert_eq!(err.to_string(), "User data is incomplete");
    assert_eq!(session, student_session());
}
