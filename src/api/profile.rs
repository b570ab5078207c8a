//! Role-scoped profile read, multipart update, and account deletion.

use reqwest::multipart::{Form, Part};

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{Id, ImageUpload, Message, Profile, ProfileUpdate, Reply, Role};

pub const PROFILE_DELETED: &str = "Profile deleted successfully";

fn profile_path(role: Role, user_id: Id) -> String {
    format!("/{role}/profile/{user_id}")
}

impl NeuDevClient {
    /// Fetch the logged-in user's profile and remember their display name.
    ///
    /// # Errors
    ///
    /// Unauthorized unless the session has a token, role, and user id.
    pub async fn profile(&self, session: &mut Session) -> Result<Profile, ApiError> {
        let (token, role, user_id) = session.identity(MissingCredential::Identity)?;
        let profile: Profile = self.get(profile_path(role, user_id)).bearer(token).send("profile").await?;
        session.instructor_name = Some(profile.display_name());
        Ok(profile)
    }

    /// Submit a profile change as multipart form data.
    ///
    /// Sent as `POST` with a `_method=PUT` field so image parts can ride
    /// along.
    ///
    /// # Errors
    ///
    /// Unauthorized unless the session has a token, role, and user id;
    /// otherwise the normalised backend error.
    pub async fn update_profile(&self, session: &Session, update: ProfileUpdate) -> Result<Reply, ApiError> {
        let (token, role, user_id) = session.identity(MissingCredential::Generic)?;
        let form = profile_form(update)?;
        self.post(profile_path(role, user_id))
            .bearer(token)
            .form(form)
            .send("profile update")
            .await
    }

    /// Delete the logged-in account. On success `session` becomes `None`.
    ///
    /// # Errors
    ///
    /// Unauthorized without full credentials; `"Failed to delete profile"`
    /// for any backend or transport failure.
    pub async fn delete_profile(&self, session: &mut Option<Session>) -> Result<Message, ApiError> {
        let Some(current) = session.as_ref() else {
            return Err(ApiError::Unauthorized(MissingCredential::Generic));
        };
        let (token, role, user_id) = current.identity(MissingCredential::Generic)?;
        match self.delete(profile_path(role, user_id)).bearer(token).send_value().await {
            Ok(_) => {
                *session = None;
                tracing::info!(%role, user_id, "profile deleted");
                Ok(Message::new(PROFILE_DELETED))
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile deletion failed");
                Err(ApiError::Operation("Failed to delete profile"))
            }
        }
    }
}

fn profile_form(update: ProfileUpdate) -> Result<Form, ApiError> {
    let mut form = Form::new().text("_method", "PUT");
    for (name, value) in update.text_fields() {
        form = form.text(name, value);
    }
    if let Some(image) = update.profile_image {
        form = form.part("profileImage", image_part(image)?);
    }
    if let Some(image) = update.cover_image {
        form = form.part("coverImage", image_part(image)?);
    }
    Ok(form)
}

fn image_part(image: ImageUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes).file_name(image.file_name);
    match image.mime {
        Some(mime) => part
            .mime_str(&mime)
            .map_err(|e| ApiError::Validation(format!("invalid image type {mime}: {e}"))),
        None => Ok(part),
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
