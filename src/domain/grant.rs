//! Grant Entity
//!
//! Grants only ever arrive in batches from the content provider.
//! `amount` and `deadline` are free text ("Up to $5,000", "Rolling"); grants
//! saved by older versions may hold a bare number there.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{text_or_number, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub organization: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub deadline: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub eligibility: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub website: String,
    #[serde(rename = "isAIGenerated", default)]
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for Grant {
    fn id(&self) -> &str {
        &self.id
    }
}
