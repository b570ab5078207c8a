//! Class, roster, and enrollment payloads.

use serde::{Deserialize, Serialize};

use super::{Extra, Id, deserialize_id, deserialize_opt_id};

/// A teacher-owned class as listed by `GET /teacher/classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "classID", deserialize_with = "deserialize_id")]
    pub class_id: Id,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classSection", default)]
    pub class_section: Option<String>,
    #[serde(rename = "teacherID", default, deserialize_with = "deserialize_opt_id")]
    pub teacher_id: Option<Id>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A class a student is enrolled in, projected to the four fields the
/// dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentClass {
    #[serde(rename = "classID", deserialize_with = "deserialize_id")]
    pub class_id: Id,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classSection", default)]
    pub class_section: Option<String>,
    #[serde(rename = "teacherName", default)]
    pub teacher_name: Option<String>,
}

/// Body for creating or renaming a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClass {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classSection")]
    pub class_section: String,
}

impl NewClass {
    #[must_use]
    pub fn new(class_name: &str, class_section: &str) -> Self {
        Self { class_name: class_name.to_owned(), class_section: class_section.to_owned() }
    }

    /// Copy with surrounding whitespace removed from both fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.class_name.trim(), self.class_section.trim())
    }
}

/// `GET /teacher/class-info/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "classSection", default)]
    pub class_section: Option<String>,
    #[serde(rename = "instructorName", default)]
    pub instructor_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One row of a class roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStudent {
    #[serde(rename = "studentID", deserialize_with = "deserialize_id")]
    pub student_id: Id,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub student_num: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct EnrollRequest {
    #[serde(rename = "studentID")]
    pub student_id: Id,
}
