//! Draft input

use serde::{Deserialize, Deserializer, Serialize};

/// A post draft to audit, as stored by the scheduling dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Task identifier, when the draft comes from a stored task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Plain-text title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Body, possibly containing inline markup
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Free-form platform label such as "百家号 - 财经号"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platform: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            platform: platform.into(),
        }
    }
}

/// Stored tasks may carry `null` for fields that were never filled in
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
