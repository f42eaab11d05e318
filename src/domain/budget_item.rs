//! Budget Item Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;
use super::entity::{empty_as_none, DomainError, DomainResult, Entity};

/// One line of a project budget, entered by hand or generated in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: BudgetCategory,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isAIGenerated", default)]
    pub is_ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl BudgetItem {
    pub fn from_draft(id: String, draft: NewBudgetItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            category: draft.category,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            is_ai_generated: false,
            created_at,
        }
    }
}

impl Entity for BudgetItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields of a hand-entered budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewBudgetItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub category: BudgetCategory,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewBudgetItem {
    pub fn new(name: impl Into<String>, amount: f64, category: BudgetCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Item name and amount are required.".into()));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(DomainError::InvalidInput("Please enter a valid amount.".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_item_is_not_generated() {
        let draft = NewBudgetItem::new("Microphone", 150.0, BudgetCategory::Equipment).with_description("  ");
        let item = BudgetItem::from_draft("b1".into(), draft, Utc::now());
        assert!(!item.is_ai_generated);
        assert_eq!(item.description, None);
        assert_eq!(item.id(), "b1");
    }

    #[test]
    fn test_wire_field_names() {
        let draft = NewBudgetItem::new("Ads", 75.0, BudgetCategory::Marketing);
        let item = BudgetItem::from_draft("b2".into(), draft, Utc::now());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["isAIGenerated"], false);
        assert_eq!(json["category"], "Marketing");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_draft_validation() {
        assert!(NewBudgetItem::new("Ads", 1.0, BudgetCategory::Marketing).validate().is_ok());
        assert!(NewBudgetItem::new("", 1.0, BudgetCategory::Marketing).validate().is_err());
        assert!(NewBudgetItem::new("Ads", -1.0, BudgetCategory::Marketing).validate().is_err());
    }
}
