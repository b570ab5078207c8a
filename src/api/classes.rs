//! Class management for teachers and enrollment for students.
//!
//! Student calls need a token and the session's user id as a student id;
//! teacher calls need a token and the user id as a teacher id. Checks run
//! before any request is built.

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{Class, ClassInfo, ClassStudent, EnrollRequest, Id, Message, NewClass, Reply, StudentClass};

impl NeuDevClient {
    // =========================================================================
    // STUDENT
    // =========================================================================

    /// Join `class_id` as the session's student.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token or student id; otherwise the normalised
    /// backend error.
    pub async fn enroll_in_class(&self, session: &Session, class_id: Id) -> Result<Reply, ApiError> {
        let (token, student_id) = session.token_and_user(MissingCredential::StudentId)?;
        self.post(format!("/student/class/{class_id}/enroll"))
            .bearer(token)
            .json(&EnrollRequest { student_id })?
            .send("enrollment")
            .await
    }

    /// Leave `class_id`.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token or student id; otherwise the normalised
    /// backend error.
    pub async fn unenroll_from_class(&self, session: &Session, class_id: Id) -> Result<Message, ApiError> {
        let (token, _) = session.token_and_user(MissingCredential::StudentId)?;
        self.delete(format!("/class/{class_id}/unenroll")).bearer(token).send_ack().await
    }

    /// Classes the session's student is enrolled in.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token or student id; otherwise the normalised
    /// backend error.
    pub async fn student_classes(&self, session: &Session) -> Result<Vec<StudentClass>, ApiError> {
        let (token, _) = session.token_and_user(MissingCredential::StudentId)?;
        self.get("/student/classes".into()).bearer(token).send_list("student classes").await
    }

    // =========================================================================
    // TEACHER
    // =========================================================================

    /// Classes owned by the session's teacher.
    ///
    /// The backend list may include other teachers' classes; only rows whose
    /// `teacherID` equals the session user id are kept.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token or teacher id; otherwise the normalised
    /// backend error.
    pub async fn classes(&self, session: &Session) -> Result<Vec<Class>, ApiError> {
        let (token, teacher_id) = session.token_and_user(MissingCredential::TeacherId)?;
        let classes: Vec<Class> = self.get("/teacher/classes".into()).bearer(token).send_list("classes").await?;
        let total = classes.len();
        let owned: Vec<Class> = classes.into_iter().filter(|c| c.teacher_id == Some(teacher_id)).collect();
        tracing::debug!(teacher_id, total, kept = owned.len(), "filtered teacher classes");
        Ok(owned)
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn create_class(&self, session: &Session, class: &NewClass) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.post("/teacher/class".into())
            .bearer(token)
            .json(&class.trimmed())?
            .send("class")
            .await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn update_class(&self, session: &Session, class_id: Id, class: &NewClass) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.put(format!("/teacher/class/{class_id}"))
            .bearer(token)
            .json(&class.trimmed())?
            .send("class")
            .await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn delete_class(&self, session: &Session, class_id: Id) -> Result<Message, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.delete(format!("/teacher/class/{class_id}")).bearer(token).send_ack().await
    }

    /// Class header: name, section, and instructor.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn class_info(&self, session: &Session, class_id: Id) -> Result<ClassInfo, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/class-info/{class_id}")).bearer(token).send("class info").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn class_students(&self, session: &Session, class_id: Id) -> Result<Vec<ClassStudent>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/class/{class_id}/students")).bearer(token).send_list("class roster").await
    }

    /// Remove `student_id` from the teacher's class.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn unenroll_student(&self, session: &Session, class_id: Id, student_id: Id) -> Result<Message, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.delete(format!("/teacher/class/{class_id}/unenroll/{student_id}"))
            .bearer(token)
            .send_ack()
            .await
    }
}

#[cfg(test)]
#[path = "classes_test.rs"]
mod tests;
