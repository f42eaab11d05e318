//! Storage keys, one per collection.
//!
//! The names are shared with data written by earlier versions of the app
//! and must not change.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SupportPages,
    SupportedPages,
    CreatorVerified,
    BudgetItems,
    AiBudgetGenerated,
    Grants,
    WorldId,
    Comments,
    Likes,
}

impl StorageKey {
    pub const ALL: [StorageKey; 9] = [
        StorageKey::SupportPages,
        StorageKey::SupportedPages,
        StorageKey::CreatorVerified,
        StorageKey::BudgetItems,
        StorageKey::AiBudgetGenerated,
        StorageKey::Grants,
        StorageKey::WorldId,
        StorageKey::Comments,
        StorageKey::Likes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::SupportPages => "backedSupportPages",
            StorageKey::SupportedPages => "backedSupportedPages",
            StorageKey::CreatorVerified => "backedCreatorVerified",
            StorageKey::BudgetItems => "backedBudgetItems",
            StorageKey::AiBudgetGenerated => "backedAIBudgetGenerated",
            StorageKey::Grants => "backedGrants",
            StorageKey::WorldId => "backedWorldId",
            StorageKey::Comments => "backedComments",
            StorageKey::Likes => "backedLikes",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
