//! Class bulletin posts and student concerns.

use serde::{Deserialize, Serialize};

use super::{Extra, Id, deserialize_id, deserialize_opt_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletinPost {
    #[serde(rename = "id", alias = "postID", deserialize_with = "deserialize_id")]
    pub post_id: Id,
    #[serde(rename = "classID", default, deserialize_with = "deserialize_opt_id")]
    pub class_id: Option<Id>,
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct NewBulletinPost<'a> {
    #[serde(rename = "classID")]
    pub class_id: Id,
    pub title: &'a str,
    pub message: &'a str,
}

/// A concern raised against a class, sent to `POST /concerns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConcern {
    #[serde(rename = "classID")]
    pub class_id: Id,
    #[serde(rename = "studentID", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Id>,
    #[serde(rename = "teacherID", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<Id>,
    pub concern: String,
}
