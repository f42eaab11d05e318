//! Budget items, grants and AI-budget flags

use chrono::Utc;

use super::{insert_entity, AppStore};
use crate::domain::{generate_id, BudgetItem, Grant, NewBudgetItem};
use crate::repository::StorageKey;

impl AppStore {
    pub async fn create_budget_item(&self, draft: NewBudgetItem) -> String {
        let id = generate_id();
        let item = BudgetItem::from_draft(id.clone(), draft, Utc::now());

        let mut state = self.state.lock().await;
        insert_entity(&mut state.budget_items, item);
        self.persist(&state, &[StorageKey::BudgetItems]);
        id
    }

    /// Remove a budget item; returns whether it existed
    pub async fn delete_budget_item(&self, item_id: &str) -> bool {
        let mut state = self.state.lock().await;
        let removed = state.budget_items.remove(item_id).is_some();
        if removed {
            self.persist(&state, &[StorageKey::BudgetItems]);
        }
        removed
    }

    /// Budget items, oldest first
    pub async fn budget_items(&self) -> Vec<BudgetItem> {
        let state = self.state.lock().await;
        let mut items: Vec<BudgetItem> = state.budget_items.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        items
    }

    pub async fn total_budget(&self) -> f64 {
        let state = self.state.lock().await;
        state.budget_items.values().map(|item| item.amount).sum()
    }

    /// Grants, newest first
    pub async fn grants(&self) -> Vec<Grant> {
        let state = self.state.lock().await;
        let mut grants: Vec<Grant> = state.grants.values().cloned().collect();
        grants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        grants
    }

    pub async fn mark_ai_budget_generated(&self, token: &str) {
        let mut state = self.state.lock().await;
        state.ai_budget_generated.insert(token.to_string(), true);
        self.persist(&state, &[StorageKey::AiBudgetGenerated]);
    }

    pub async fn is_ai_budget_generated(&self, token: &str) -> bool {
        let state = self.state.lock().await;
        state.ai_budget_generated.get(token).copied().unwrap_or(false)
    }

    pub(crate) async fn insert_budget_batch(&self, items: Vec<BudgetItem>) {
        let mut state = self.state.lock().await;
        for item in items {
            insert_entity(&mut state.budget_items, item);
        }
        self.persist(&state, &[StorageKey::BudgetItems]);
    }

    pub(crate) async fn insert_grant_batch(&self, grants: Vec<Grant>) {
        let mut state = self.state.lock().await;
        for grant in grants {
            insert_entity(&mut state.grants, grant);
        }
        self.persist(&state, &[StorageKey::Grants]);
    }
}
