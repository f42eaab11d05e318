//! Support Page Entity
//!
//! A creator's funding campaign. `amount` and `supporters` start at zero and
//! only grow through the store's support operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{empty_as_none, DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportPage {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Funding goal
    pub goal: f64,
    pub category: Category,
    /// Cover image URL
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Cumulative amount received
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub supporters: u32,
    pub created_at: DateTime<Utc>,
}

impl SupportPage {
    pub fn from_draft(id: String, draft: NewSupportPage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            goal: draft.goal,
            category: draft.category,
            image: draft.image.filter(|url| !url.trim().is_empty()),
            amount: 0.0,
            supporters: 0,
            created_at,
        }
    }

    /// Fraction of the goal reached, capped at 1.0
    pub fn progress(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.amount / self.goal).min(1.0)
    }

    /// Case-insensitive match on title, description or category
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.category.as_str().to_lowercase().contains(&term)
    }

    pub(crate) fn record_support(&mut self, amount: f64) {
        self.amount += amount;
        self.supporters += 1;
    }
}

impl Entity for SupportPage {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields supplied by the creator-setup flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewSupportPage {
    pub title: String,
    pub description: String,
    pub goal: f64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewSupportPage {
    pub fn new(title: impl Into<String>, description: impl Into<String>, goal: f64, category: Category) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            goal,
            category,
            image: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Checks the creator form rules: title and description present, goal a positive number.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DomainError::InvalidInput("Please fill in all required fields".into()));
        }
        if !self.goal.is_finite() || self.goal <= 0.0 {
            return Err(DomainError::InvalidInput("Please enter a valid goal amount".into()));
        }
        Ok(())
    }
}
