//! Wire schemas for the NEUDev backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON (`classID`,
//! `teacherName`, ...). Identity fields are required so malformed responses
//! fail at the boundary; descriptive fields are optional, and each resource
//! keeps unmodelled server fields in a flattened `extra` map.

pub mod activity;
pub mod auth;
pub mod bulletin;
pub mod class;
pub mod item;
pub mod profile;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use activity::*;
pub use auth::*;
pub use bulletin::*;
pub use class::*;
pub use item::*;
pub use profile::*;

/// Backend primary key. Serialized as a JSON integer.
pub type Id = u64;

/// Open-ended extra fields carried alongside a typed resource.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Account role; selects the endpoint family for role-scoped calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Plain-message body, e.g. `{"message": "Success"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self { message: message.to_owned() }
    }
}

/// Free-form write acknowledgement: an optional `message` plus whatever
/// else the backend echoes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Accept an id as a JSON integer or a numeric string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value).map_err(D::Error::custom)
}

/// Optional variant of [`deserialize_id`]; `null` maps to `None`.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value).map(Some).map_err(D::Error::custom)
}

/// Lenient role: anything other than a known role name maps to `None`.
pub(crate) fn deserialize_known_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|text| text.parse().ok()))
}

fn id_from_value(value: &serde_json::Value) -> Result<Id, String> {
    match value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| format!("expected non-negative integer id, got {number}")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<Id>()
            .map_err(|_| format!("expected numeric id, got {text:?}")),
        other => Err(format!("expected id, got {other}")),
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
