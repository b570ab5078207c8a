//! Class bulletin board and student concerns.

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{BulletinPost, Id, Message, NewBulletinPost, NewConcern, Reply};

impl NeuDevClient {
    /// Posts on `class_id`'s bulletin board.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn bulletin_posts(&self, session: &Session, class_id: Id) -> Result<Vec<BulletinPost>, ApiError> {
        let token = session.token(MissingCredential::Generic)?;
        self.get(format!("/teacher/class/{class_id}/bulletin")).bearer(token).send_list("bulletin posts").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn create_bulletin_post(
        &self,
        session: &Session,
        class_id: Id,
        title: &str,
        message: &str,
    ) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Generic)?;
        self.post("/teacher/bulletin".into())
            .bearer(token)
            .json(&NewBulletinPost { class_id, title, message })?
            .send("bulletin post")
            .await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn delete_bulletin_post(&self, session: &Session, post_id: Id) -> Result<Message, ApiError> {
        let token = session.token(MissingCredential::Generic)?;
        self.delete(format!("/teacher/bulletin/{post_id}")).bearer(token).send_ack().await
    }

    /// Raise a concern about a class. Sent without a bearer token.
    ///
    /// # Errors
    ///
    /// Returns the normalised backend error.
    pub async fn create_concern(&self, concern: &NewConcern) -> Result<Reply, ApiError> {
        self.post("/concerns".into()).json(concern)?.send("concern").await
    }
}

#[cfg(test)]
#[path = "bulletins_test.rs"]
mod tests;
