//! Programming items, their test cases, item types, and languages.

use serde::{Deserialize, Serialize};

use super::{Extra, Id, deserialize_id, deserialize_opt_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    #[serde(rename = "itemTypeID", deserialize_with = "deserialize_id")]
    pub item_type_id: Id,
    #[serde(rename = "itemTypeName")]
    pub item_type_name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammingLanguage {
    #[serde(rename = "progLangID", deserialize_with = "deserialize_id")]
    pub prog_lang_id: Id,
    #[serde(rename = "progLangName")]
    pub prog_lang_name: String,
    #[serde(rename = "progLangExtension", default)]
    pub prog_lang_extension: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "testCaseID", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<Id>,
    #[serde(rename = "inputData", default)]
    pub input_data: String,
    #[serde(rename = "expectedOutput")]
    pub expected_output: String,
    #[serde(rename = "testCasePoints", default, skip_serializing_if = "Option::is_none")]
    pub test_case_points: Option<f64>,
    #[serde(rename = "isHidden", default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "itemID", deserialize_with = "deserialize_id")]
    pub item_id: Id,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemDesc", default)]
    pub item_desc: Option<String>,
    #[serde(rename = "itemTypeID", default, deserialize_with = "deserialize_opt_id")]
    pub item_type_id: Option<Id>,
    #[serde(rename = "teacherID", default, deserialize_with = "deserialize_opt_id")]
    pub teacher_id: Option<Id>,
    #[serde(rename = "testCases", default)]
    pub test_cases: Vec<TestCase>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for creating or updating an item together with its test cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(rename = "itemTypeID", skip_serializing_if = "Option::is_none")]
    pub item_type_id: Option<Id>,
    #[serde(rename = "itemName", skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(rename = "itemDesc", skip_serializing_if = "Option::is_none")]
    pub item_desc: Option<String>,
    #[serde(rename = "progLangIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub prog_lang_ids: Vec<Id>,
    #[serde(rename = "testCases", default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemScope {
    Personal,
    Global,
}

impl ItemScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Global => "global",
        }
    }
}

impl std::str::FromStr for ItemScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "global" => Ok(Self::Global),
            other => Err(format!("unknown item scope: {other}")),
        }
    }
}

/// Optional filters for `GET /teacher/items/itemType/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ItemScope>,
    #[serde(rename = "teacherID", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<Id>,
}

impl ItemQuery {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scope.is_none() && self.teacher_id.is_none()
    }

    /// Query-string pairs in a stable order: `scope`, then `teacherID`.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(scope) = self.scope {
            pairs.push(("scope", scope.as_str().to_owned()));
        }
        if let Some(teacher_id) = self.teacher_id {
            pairs.push(("teacherID", teacher_id.to_string()));
        }
        pairs
    }
}
