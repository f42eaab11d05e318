//! Provider response parsing
//!
//! Budgets and grants arrive as JSON arrays, sometimes wrapped in markdown
//! code fences. Titles arrive as one title per line.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{empty_as_none, text_or_number, BudgetCategory, BudgetItem, Grant};

pub const MAX_TITLES: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("payload is not a JSON array of the expected items: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn cached(cell: &'static OnceLock<Result<Regex, regex::Error>>, pattern: &str) -> Result<&'static Regex, ParseError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| ParseError::Pattern(e.clone()))
}

fn fence_pattern() -> Result<&'static Regex, ParseError> {
    static FENCE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    cached(&FENCE, r"```json\n?|\n?```")
}

fn numbered_pattern() -> Result<&'static Regex, ParseError> {
    static NUMBERED: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    cached(&NUMBERED, r"^\d+\.\s*")
}

/// Remove markdown code fences anywhere in the text
pub fn strip_code_fences(text: &str) -> Result<String, ParseError> {
    Ok(fence_pattern()?.replace_all(text, "").trim().to_string())
}

/// Budget line as returned by the provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedBudgetItem {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub category: BudgetCategory,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl GeneratedBudgetItem {
    pub fn into_budget_item(self, id: String, created_at: DateTime<Utc>) -> BudgetItem {
        BudgetItem {
            id,
            name: self.name,
            amount: self.amount,
            category: self.category,
            description: self.description,
            is_ai_generated: true,
            created_at,
        }
    }
}

/// Grant as returned by the provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedGrant {
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub deadline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub website: String,
}

impl GeneratedGrant {
    pub fn into_grant(self, id: String, created_at: DateTime<Utc>) -> Grant {
        Grant {
            id,
            name: self.name,
            organization: self.organization,
            amount: self.amount,
            deadline: self.deadline,
            description: self.description,
            eligibility: self.eligibility,
            website: self.website,
            is_ai_generated: true,
            created_at,
        }
    }
}

pub fn budget_items(text: &str) -> Result<Vec<GeneratedBudgetItem>, ParseError> {
    Ok(serde_json::from_str(&strip_code_fences(text)?)?)
}

pub fn grants(text: &str) -> Result<Vec<GeneratedGrant>, ParseError> {
    Ok(serde_json::from_str(&strip_code_fences(text)?)?)
}

/// Up to three titles, skipping blank and numbered lines
pub fn titles(text: &str) -> Result<Vec<String>, ParseError> {
    let numbered = numbered_pattern()?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !numbered.is_match(line))
        .take(MAX_TITLES)
        .map(String::from)
        .collect())
}

/// Numbers or numeric strings; anything unreadable or negative becomes 0
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => leading_number(&s),
        _ => 0.0,
    };
    Ok(if amount.is_finite() && amount > 0.0 { amount } else { 0.0 })
}

fn leading_number(s: &str) -> f64 {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0.0)
}
