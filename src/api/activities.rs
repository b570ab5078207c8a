//! Activities: authoring, per-class listing, items, leaderboards, and
//! settings.
//!
//! Items and leaderboards exist under both `/student/activities` and
//! `/teacher/activities`; the caller names the [`Role`] whose view it wants.

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{
    Activity, ActivityDraft, ActivityItem, ActivitySettings, Id, LeaderboardEntry, Message, Reply, Role,
    StudentActivity,
};

pub const ACTIVITY_DELETED: &str = "Activity deleted successfully";

impl NeuDevClient {
    /// The session student's activities with their scores and rank.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn student_activities(&self, session: &Session) -> Result<Vec<StudentActivity>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get("/student/activities".into()).bearer(token).send_list("student activities").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn create_activity(&self, session: &Session, draft: &ActivityDraft) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.post("/teacher/activities".into()).bearer(token).json(draft)?.send("activity").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error,
    /// with `"Failed to update activity"` when the server gives no message.
    pub async fn edit_activity(&self, session: &Session, act_id: Id, draft: &ActivityDraft) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.put(format!("/teacher/activities/{act_id}"))
            .bearer(token)
            .json(draft)?
            .send("activity")
            .await
            .map_err(|e| e.or_message("Failed to update activity"))
    }

    /// Delete an activity. Any 2xx reply becomes the fixed confirmation.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error,
    /// with `"Failed to delete activity"` when the server gives no message.
    pub async fn delete_activity(&self, session: &Session, act_id: Id) -> Result<Message, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.delete(format!("/teacher/activities/{act_id}"))
            .bearer(token)
            .send_value()
            .await
            .map(|_| Message::new(ACTIVITY_DELETED))
            .map_err(|e| e.or_message("Failed to delete activity"))
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn class_activities(&self, session: &Session, class_id: Id) -> Result<Vec<Activity>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        let activities: Vec<Activity> = self
            .get(format!("/teacher/class/{class_id}/activities"))
            .bearer(token)
            .send_list("class activities")
            .await?;
        tracing::debug!(class_id, count = activities.len(), "class activities");
        Ok(activities)
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn activity_details(&self, session: &Session, act_id: Id) -> Result<Activity, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/activities/{act_id}")).bearer(token).send("activity").await
    }

    /// Items of an activity as `role` sees them.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn activity_items(&self, session: &Session, role: Role, act_id: Id) -> Result<Vec<ActivityItem>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/{role}/activities/{act_id}/items")).bearer(token).send_list("activity items").await
    }

    /// Leaderboard of an activity as `role` sees it.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn activity_leaderboard(
        &self,
        session: &Session,
        role: Role,
        act_id: Id,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/{role}/activities/{act_id}/leaderboard"))
            .bearer(token)
            .send_list("leaderboard")
            .await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn activity_settings(&self, session: &Session, act_id: Id) -> Result<ActivitySettings, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/activities/{act_id}/settings")).bearer(token).send("activity settings").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn update_activity_settings(
        &self,
        session: &Session,
        act_id: Id,
        settings: &ActivitySettings,
    ) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.put(format!("/teacher/activities/{act_id}/settings"))
            .bearer(token)
            .json(settings)?
            .send("activity settings")
            .await
    }
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
