//! Comments and likes

use chrono::Utc;

use super::AppStore;
use crate::domain::{generate_id, Comment, DomainError, DomainResult, ToastKind};
use crate::repository::StorageKey;

impl AppStore {
    /// Append a comment; authorship reflects the verification state right now
    pub async fn add_comment(&self, page_id: &str, text: &str) -> Comment {
        let mut state = self.state.lock().await;
        let comment = Comment::new(generate_id(), page_id, text, state.verification.as_ref(), Utc::now());
        state
            .comments
            .entry(page_id.to_string())
            .or_default()
            .push(comment.clone());
        self.persist(&state, &[StorageKey::Comments]);
        drop(state);

        self.toasts.show("Comment added!", ToastKind::Success);
        comment
    }

    /// Toggle the current verifier's like on a page; returns the new liked state.
    pub async fn toggle_like(&self, page_id: &str) -> DomainResult<bool> {
        let mut state = self.state.lock().await;
        let Some(hash) = state.verification.as_ref().map(|r| r.verifier_hash().to_string()) else {
            drop(state);
            self.toasts
                .show("Please verify with World ID to like projects", ToastKind::Error);
            return Err(DomainError::Unverified("liking requires a verified identity".into()));
        };

        let likes = state.likes.entry(page_id.to_string()).or_default();
        let liked = if likes.remove(&hash) {
            false
        } else {
            likes.insert(hash);
            true
        };
        if likes.is_empty() {
            state.likes.remove(page_id);
        }
        self.persist(&state, &[StorageKey::Likes]);
        Ok(liked)
    }

    pub async fn get_page_likes(&self, page_id: &str) -> usize {
        let state = self.state.lock().await;
        state.likes.get(page_id).map_or(0, |likes| likes.len())
    }

    pub async fn is_page_liked_by_user(&self, page_id: &str) -> bool {
        let state = self.state.lock().await;
        match (&state.verification, state.likes.get(page_id)) {
            (Some(record), Some(likes)) => likes.contains(record.verifier_hash()),
            _ => false,
        }
    }

    /// Comments on a page in the order they were added
    pub async fn get_page_comments(&self, page_id: &str) -> Vec<Comment> {
        let state = self.state.lock().await;
        state.comments.get(page_id).cloned().unwrap_or_default()
    }
}
