//! Content provider pass-throughs
//!
//! Every provider failure ends in a log line, an error toast and a safe
//! default. Nothing here returns an error to the caller.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;

use super::AppStore;
use crate::ai::{media, parse, prompts};
use crate::domain::{generate_id, Category, ToastKind};

/// A provider call running in the background.
///
/// Dropping the task detaches it; call `cancel` to make sure its result is
/// never applied.
pub struct GenerationTask<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> GenerationTask<T> {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The task's result, or `None` if it was cancelled
    pub async fn join(self) -> Option<T> {
        match self.handle.await {
            Ok(value) => Some(value),
            Err(e) if e.is_cancelled() => {
                log::debug!("Generation task cancelled");
                None
            }
            Err(e) => {
                log::error!("Generation task failed: {e}");
                None
            }
        }
    }
}

impl AppStore {
    async fn request_text(&self, prompt: &str) -> Option<String> {
        match self.provider.generate_text(prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Content generation failed: {e}");
                self.toasts.show(e.user_message(), ToastKind::Error);
                None
            }
        }
    }

    /// Ask the provider for a budget breakdown and insert every item
    pub async fn generate_ai_budget(&self, project_description: &str, project_goal: f64) -> bool {
        let prompt = prompts::budget(project_description, project_goal);
        let Some(text) = self.request_text(&prompt).await else {
            return false;
        };

        match parse::budget_items(&text) {
            Ok(generated) => {
                let now = Utc::now();
                let items: Vec<_> = generated
                    .into_iter()
                    .map(|item| item.into_budget_item(generate_id(), now))
                    .collect();
                log::info!("Generated {} budget items", items.len());
                self.insert_budget_batch(items).await;
                self.toasts.show("AI budget generated successfully!", ToastKind::Success);
                true
            }
            Err(e) => {
                log::error!("Failed to parse budget response: {e}. Raw response: {text}");
                self.toasts.show("Failed to parse AI budget response.", ToastKind::Error);
                false
            }
        }
    }

    /// Ask the provider for grant opportunities and insert every grant
    pub async fn generate_grant_ideas(&self, project_description: &str, category: Category) -> bool {
        let prompt = prompts::grants(project_description, category);
        let Some(text) = self.request_text(&prompt).await else {
            return false;
        };

        match parse::grants(&text) {
            Ok(generated) => {
                let now = Utc::now();
                let grants: Vec<_> = generated
                    .into_iter()
                    .map(|grant| grant.into_grant(generate_id(), now))
                    .collect();
                log::info!("Generated {} grants", grants.len());
                self.insert_grant_batch(grants).await;
                self.toasts.show("Grant opportunities found!", ToastKind::Success);
                true
            }
            Err(e) => {
                log::error!("Failed to parse grant response: {e}. Raw response: {text}");
                self.toasts.show("Failed to parse grant opportunities.", ToastKind::Error);
                false
            }
        }
    }

    pub fn generate_avatar(&self, name: &str) -> String {
        media::avatar_url(&self.options.avatar_base_url, name)
    }

    pub fn generate_project_image(&self, title: &str, category: Category) -> String {
        media::project_image_url(&self.options.image_base_url, title, category)
    }

    /// Provider rewrite of a description; the original on any failure
    pub async fn enhance_description(&self, basic_description: &str, category: Category) -> String {
        let prompt = prompts::enhance_description(basic_description, category);
        let Some(text) = self.request_text(&prompt).await else {
            return basic_description.to_string();
        };

        let enhanced = text.trim();
        if enhanced.is_empty() {
            log::warn!("Provider returned an empty description");
            self.toasts.show("Failed to enhance description.", ToastKind::Error);
            return basic_description.to_string();
        }
        self.toasts.show("Description enhanced!", ToastKind::Success);
        enhanced.to_string()
    }

    /// Up to three title suggestions
    pub async fn generate_project_title(&self, description: &str, category: Category) -> Vec<String> {
        let prompt = prompts::project_titles(description, category);
        let Some(text) = self.request_text(&prompt).await else {
            return Vec::new();
        };

        let titles = match parse::titles(&text) {
            Ok(titles) => titles,
            Err(e) => {
                log::error!("Failed to parse titles: {e}");
                Vec::new()
            }
        };
        if !titles.is_empty() {
            self.toasts.show("Titles generated!", ToastKind::Success);
            return titles;
        }

        let raw = text.trim();
        if raw.is_empty() {
            log::warn!("Provider returned no titles");
            return Vec::new();
        }
        log::warn!("Unexpected title format, using raw output: {raw}");
        self.toasts.show(
            "AI returned titles in an unexpected format. Using raw output.",
            ToastKind::Info,
        );
        vec![raw.to_string()]
    }

    // ========================
    // Background variants
    // ========================

    pub fn spawn_ai_budget(self: &Arc<Self>, project_description: String, project_goal: f64) -> GenerationTask<bool> {
        let store = Arc::clone(self);
        GenerationTask::spawn(async move { store.generate_ai_budget(&project_description, project_goal).await })
    }

    pub fn spawn_grant_ideas(self: &Arc<Self>, project_description: String, category: Category) -> GenerationTask<bool> {
        let store = Arc::clone(self);
        GenerationTask::spawn(async move { store.generate_grant_ideas(&project_description, category).await })
    }

    pub fn spawn_enhance_description(
        self: &Arc<Self>,
        basic_description: String,
        category: Category,
    ) -> GenerationTask<String> {
        let store = Arc::clone(self);
        GenerationTask::spawn(async move { store.enhance_description(&basic_description, category).await })
    }

    pub fn spawn_project_title(self: &Arc<Self>, description: String, category: Category) -> GenerationTask<Vec<String>> {
        let store = Arc::clone(self);
        GenerationTask::spawn(async move { store.generate_project_title(&description, category).await })
    }
}
