//! Domain Layer
//!
//! Contains all domain entities, caller drafts and core abstractions.
//! This layer has no I/O (serde and chrono only).

mod budget_item;
mod category;
mod comment;
mod entity;
mod grant;
mod id;
mod support_page;
mod toast;
mod verification;

pub use budget_item::{BudgetItem, NewBudgetItem};
pub use category::{BudgetCategory, Category};
pub use comment::{Comment, ANONYMOUS_AUTHOR, VERIFIED_AUTHOR};
pub use entity::{DomainError, DomainResult, Entity};
pub use grant::Grant;
pub use id::generate_id;
pub use support_page::{NewSupportPage, SupportPage};
pub use toast::{Toast, ToastKind};
pub use verification::{ProofResult, VerificationRecord};

pub(crate) use entity::{empty_as_none, text_or_number};
