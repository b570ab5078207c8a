//! Registration, login, and account-identity payloads.

use serde::{Deserialize, Serialize};

use super::{Extra, Id, Role, deserialize_known_role, deserialize_opt_id};
use crate::error::ApiError;

/// Only institutional addresses may register.
pub const ALLOWED_EMAIL_SUFFIX: &str = "@neu.edu.ph";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherSignup {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSignup {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub student_num: String,
    pub program: String,
}

/// A sign-up request. The variant picks `/register/teacher` or
/// `/register/student`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Registration {
    Teacher(TeacherSignup),
    Student(StudentSignup),
}

impl Registration {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Teacher(_) => Role::Teacher,
            Self::Student(_) => Role::Student,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Teacher(s) => &s.email,
            Self::Student(s) => &s.email,
        }
    }

    #[must_use]
    pub fn password(&self) -> &str {
        match self {
            Self::Teacher(s) => &s.password,
            Self::Student(s) => &s.password,
        }
    }

    /// Check the sign-up form rules.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the message shown to the user.
    pub fn validate(&self, confirm_password: &str) -> Result<(), ApiError> {
        if !self.email().ends_with(ALLOWED_EMAIL_SUFFIX) {
            return Err(ApiError::Validation(format!("Invalid email format! Use '{ALLOWED_EMAIL_SUFFIX}'.")));
        }
        if self.password().chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        if self.password() != confirm_password {
            return Err(ApiError::Validation("Passwords do not match!".into()));
        }
        if let Self::Student(s) = self {
            if s.student_num.trim().is_empty() || s.program.trim().is_empty() {
                return Err(ApiError::Validation("Student number and program are required.".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body returned by `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_type: Role,
    #[serde(rename = "studentID", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Id>,
    #[serde(rename = "teacherID", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<Id>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl LoginResponse {
    /// The id matching `user_type`, if the backend sent it.
    #[must_use]
    pub fn user_id(&self) -> Option<Id> {
        role_id(self.user_type, self.student_id, self.teacher_id)
    }
}

/// Body returned by `GET /user`. An unrecognised `user_type` reads as
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "deserialize_known_role", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<Role>,
    #[serde(rename = "studentID", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Id>,
    #[serde(rename = "teacherID", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl UserInfo {
    #[must_use]
    pub fn user_id(&self) -> Option<Id> {
        self.user_type.and_then(|role| role_id(role, self.student_id, self.teacher_id))
    }
}

fn role_id(role: Role, student_id: Option<Id>, teacher_id: Option<Id>) -> Option<Id> {
    match role {
        Role::Student => student_id,
        Role::Teacher => teacher_id,
    }
}
