//! Registration, login, logout, and account identity.

use serde_json::Value;

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{LoginRequest, LoginResponse, Message, Registration, Reply, UserInfo};

pub const LOGOUT_SUCCESS: &str = "Logout successful";

impl NeuDevClient {
    /// Validate and submit a sign-up form.
    ///
    /// Validation failures return before any request is sent.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for rejected input, otherwise the normalised
    /// backend error with the body's `errors` object as details.
    pub async fn register(&self, registration: &Registration, confirm_password: &str) -> Result<Reply, ApiError> {
        registration.validate(confirm_password)?;
        let path = format!("/register/{}", registration.role());
        self.post(path)
            .json(registration)?
            .send("registration")
            .await
            .map_err(|e| registration_error(e.or_message("Registration failed")))
    }

    /// Log in and establish a session.
    ///
    /// The session's user id is `studentID` or `teacherID` depending on the
    /// returned `user_type`.
    ///
    /// # Errors
    ///
    /// Returns the normalised backend error, with `"Login failed"` when the
    /// server gives no message.
    pub async fn login(&self, email: &str, password: &str) -> Result<(LoginResponse, Session), ApiError> {
        let login: LoginResponse = self
            .post("/login".into())
            .json(&LoginRequest { email, password })?
            .send("login")
            .await
            .map_err(|e| e.or_message("Login failed"))?;
        let session = Session::from_login(&login, email);
        tracing::info!(role = %login.user_type, user_id = ?session.user_id, "logged in");
        Ok((login, session))
    }

    /// End the session. Only the status is consulted: on a 2xx response
    /// `session` becomes `None` whatever the body holds; on any other
    /// outcome it is left untouched.
    ///
    /// # Errors
    ///
    /// `"No user is logged in."` without a session, `"Logout failed. Try
    /// again."` for any non-2xx response, or a transport error.
    pub async fn logout(&self, session: &mut Option<Session>) -> Result<Message, ApiError> {
        let token = match session.as_ref() {
            Some(s) if s.has_access_token() => s.access_token.as_str(),
            _ => return Err(ApiError::Operation("No user is logged in.")),
        };
        let status = self.post("/logout".into()).bearer(token).send_status().await?;
        if !(200..300).contains(&status) {
            tracing::warn!(status, "logout rejected");
            return Err(ApiError::Operation("Logout failed. Try again."));
        }
        *session = None;
        tracing::info!("logged out");
        Ok(Message::new(LOGOUT_SUCCESS))
    }

    /// Check a password by attempting a login without keeping its session.
    ///
    /// # Errors
    ///
    /// Returns the normalised backend error, with `"Wrong password"` when the
    /// server gives no message.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.post("/login".into())
            .json(&LoginRequest { email, password })?
            .send_value()
            .await
            .map(|_| ())
            .map_err(|e| e.or_message("Wrong password"))
    }

    /// Fetch the current account and refresh the session's role and id.
    ///
    /// A recognised role is stored even when the id check then fails.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; `"User data is incomplete"` when the
    /// role is unrecognised or the response lacks the id for its role.
    pub async fn user_info(&self, session: &mut Session) -> Result<UserInfo, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        let info: UserInfo = self.get("/user".into()).bearer(token).send("user").await?;
        if let Some(role) = info.user_type {
            session.role = Some(role);
        }
        let Some(user_id) = info.user_id() else {
            tracing::warn!(role = ?info.user_type, "user data is incomplete");
            return Err(ApiError::Operation("User data is incomplete"));
        };
        session.user_id = Some(user_id);
        Ok(info)
    }
}

/// Registration failures carry the validation `errors` map, not the whole body.
fn registration_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Status { status, message, details } => {
            let errors = details
                .get("errors")
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
            ApiError::Status { status, message, details: errors }
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
