//! Profile read and multipart update payloads.

use serde::{Deserialize, Serialize};

use super::Extra;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(rename = "profileImage", default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(rename = "coverImage", default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Profile {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Binary image attached to a profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fields to change on a profile. `None` and blank values are left out of
/// the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub student_num: Option<String>,
    pub program: Option<String>,
    /// Sent as `password` only when non-blank.
    pub new_password: Option<String>,
    pub profile_image: Option<ImageUpload>,
    pub cover_image: Option<ImageUpload>,
}

impl ProfileUpdate {
    /// Text form fields in submission order, blanks dropped.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let candidates = [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("email", &self.email),
            ("student_num", &self.student_num),
            ("program", &self.program),
        ];
        let mut fields: Vec<(&'static str, String)> = candidates
            .into_iter()
            .filter_map(|(name, value)| {
                let value = value.as_deref()?;
                (!value.is_empty()).then(|| (name, value.to_owned()))
            })
            .collect();
        if let Some(password) = self.new_password.as_deref() {
            if !password.trim().is_empty() {
                fields.push(("password", password.to_owned()));
            }
        }
        fields
    }
}
