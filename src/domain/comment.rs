//! Comment Entity
//!
//! Authorship is a snapshot of the verification state when the comment was written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::verification::VerificationRecord;

pub const VERIFIED_AUTHOR: &str = "Verified Human";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub page_id: String,
    pub text: String,
    pub author: String,
    pub is_verified: bool,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: String,
        page_id: &str,
        text: &str,
        verification: Option<&VerificationRecord>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let is_verified = verification.is_some();
        Self {
            id,
            page_id: page_id.to_string(),
            text: text.to_string(),
            author: if is_verified { VERIFIED_AUTHOR } else { ANONYMOUS_AUTHOR }.to_string(),
            is_verified,
            timestamp,
        }
    }
}

impl Entity for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}
