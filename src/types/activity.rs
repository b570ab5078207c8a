//! Activities, their items, leaderboards, and settings.

use serde::{Deserialize, Serialize};

use super::{Extra, Id, deserialize_id, deserialize_opt_id};

/// An activity as seen by its teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "actID", deserialize_with = "deserialize_id")]
    pub act_id: Id,
    #[serde(rename = "actTitle")]
    pub act_title: String,
    #[serde(rename = "actDesc", default)]
    pub act_desc: Option<String>,
    #[serde(rename = "classID", default, deserialize_with = "deserialize_opt_id")]
    pub class_id: Option<Id>,
    #[serde(rename = "openDate", default)]
    pub open_date: Option<String>,
    #[serde(rename = "closeDate", default)]
    pub close_date: Option<String>,
    #[serde(rename = "maxPoints", default)]
    pub max_points: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// An activity as seen by an enrolled student, with their standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentActivity {
    #[serde(rename = "actID", deserialize_with = "deserialize_id")]
    pub act_id: Id,
    #[serde(rename = "actTitle")]
    pub act_title: String,
    #[serde(rename = "overallScore", default)]
    pub overall_score: Option<f64>,
    #[serde(rename = "maxPoints", default)]
    pub max_points: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(rename = "scorePercentage", default)]
    pub score_percentage: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for creating or editing an activity. Fields other than the core
/// ones go through `extra` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    #[serde(rename = "classID", skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Id>,
    #[serde(rename = "actTitle", skip_serializing_if = "Option::is_none")]
    pub act_title: Option<String>,
    #[serde(rename = "actDesc", skip_serializing_if = "Option::is_none")]
    pub act_desc: Option<String>,
    #[serde(rename = "openDate", skip_serializing_if = "Option::is_none")]
    pub open_date: Option<String>,
    #[serde(rename = "closeDate", skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One programming item attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(rename = "itemID", deserialize_with = "deserialize_id")]
    pub item_id: Id,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "itemDifficulty", default)]
    pub item_difficulty: Option<String>,
    #[serde(rename = "actItemPoints", default)]
    pub act_item_points: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "studentNum", default)]
    pub student_num: Option<String>,
    #[serde(rename = "averageScore", default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Teacher-editable activity settings; passed through as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySettings {
    #[serde(flatten)]
    pub fields: Extra,
}
