//! Support pages, the supported-by-me set and the creator flag

use chrono::Utc;

use super::{insert_entity, AppStore, Collections};
use crate::domain::{generate_id, DomainError, DomainResult, NewSupportPage, SupportPage, ToastKind};
use crate::repository::StorageKey;

const SUPPORT_THANKS: &str = "Thank you for your support!";

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

/// Apply one support event. Returns false when the page does not exist.
fn record_support(state: &mut Collections, page_id: &str, amount: f64) -> bool {
    let Some(page) = state.support_pages.get_mut(page_id) else {
        return false;
    };
    page.record_support(amount);
    state.supported_by_me.insert(page_id.to_string());
    true
}

impl AppStore {
    /// Create a support page with zero amount and supporters; returns its id
    pub async fn create_support_page(&self, draft: NewSupportPage) -> String {
        let id = generate_id();
        let page = SupportPage::from_draft(id.clone(), draft, Utc::now());

        let mut state = self.state.lock().await;
        insert_entity(&mut state.support_pages, page);
        self.persist(&state, &[StorageKey::SupportPages]);
        log::info!("Created support page {id}");
        id
    }

    /// Record a contribution to `page_id`.
    ///
    /// Unknown pages are ignored. Duplicate support is not prevented here;
    /// callers check `is_page_supported_by_me` or use `try_support_page`.
    pub async fn support_page(&self, page_id: &str, amount: f64) {
        if !is_valid_amount(amount) {
            log::warn!("Ignoring support of {amount} for page {page_id}");
            return;
        }
        let mut state = self.state.lock().await;
        if !record_support(&mut state, page_id, amount) {
            log::debug!("Ignoring support for unknown page {page_id}");
            return;
        }
        self.persist(&state, &[StorageKey::SupportPages, StorageKey::SupportedPages]);
        drop(state);

        self.toasts.show(SUPPORT_THANKS, ToastKind::Success);
    }

    /// Support a page at most once from this profile
    pub async fn try_support_page(&self, page_id: &str, amount: f64) -> DomainResult<()> {
        if !is_valid_amount(amount) {
            self.toasts.show("Please enter a valid amount.", ToastKind::Error);
            return Err(DomainError::InvalidInput(format!("invalid support amount {amount}")));
        }

        let mut state = self.state.lock().await;
        if state.supported_by_me.contains(page_id) {
            drop(state);
            self.toasts.show("You have already supported this page.", ToastKind::Error);
            return Err(DomainError::Conflict(format!("page {page_id} already supported")));
        }
        if !record_support(&mut state, page_id, amount) {
            drop(state);
            self.toasts.show("Support page not found.", ToastKind::Error);
            return Err(DomainError::NotFound(format!("page {page_id}")));
        }
        self.persist(&state, &[StorageKey::SupportPages, StorageKey::SupportedPages]);
        drop(state);

        self.toasts.show(SUPPORT_THANKS, ToastKind::Success);
        Ok(())
    }

    pub async fn is_page_supported_by_me(&self, page_id: &str) -> bool {
        self.state.lock().await.supported_by_me.contains(page_id)
    }

    pub async fn get_support_page(&self, page_id: &str) -> Option<SupportPage> {
        self.state.lock().await.support_pages.get(page_id).cloned()
    }

    /// All pages, newest first
    pub async fn support_pages(&self) -> Vec<SupportPage> {
        let state = self.state.lock().await;
        let mut pages: Vec<SupportPage> = state.support_pages.values().cloned().collect();
        pages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pages
    }

    /// Pages whose title, description or category contains `term`
    pub async fn search_pages(&self, term: &str) -> Vec<SupportPage> {
        let mut pages = self.support_pages().await;
        pages.retain(|page| page.matches(term));
        pages
    }

    /// Sum received across all pages
    pub async fn total_support(&self) -> f64 {
        let state = self.state.lock().await;
        state.support_pages.values().map(|p| p.amount).sum()
    }

    pub async fn set_creator_verified(&self, verified: bool) {
        let mut state = self.state.lock().await;
        state.creator_verified = verified;
        self.persist(&state, &[StorageKey::CreatorVerified]);
    }

    pub async fn is_creator_verified(&self) -> bool {
        self.state.lock().await.creator_verified
    }
}
