//! Project and budget categories

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Project category of a support page or a grant search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Art,
    Music,
    Technology,
    Film,
    Writing,
    Games,
    Education,
    Health,
    Environment,
    #[serde(rename = "Social Impact")]
    SocialImpact,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Art,
        Category::Music,
        Category::Technology,
        Category::Film,
        Category::Writing,
        Category::Games,
        Category::Education,
        Category::Health,
        Category::Environment,
        Category::SocialImpact,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Technology => "Technology",
            Category::Film => "Film",
            Category::Writing => "Writing",
            Category::Games => "Games",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Environment => "Environment",
            Category::SocialImpact => "Social Impact",
            Category::Other => "Other",
        }
    }

}

/// Case-insensitive label match; unknown labels parse as `Other`
impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .unwrap_or(Category::Other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget line category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetCategory {
    #[default]
    Equipment,
    Software,
    Marketing,
    Materials,
    Services,
    /// Anything the provider invents lands here
    #[serde(other)]
    Other,
}

impl BudgetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Equipment => "Equipment",
            BudgetCategory::Software => "Software",
            BudgetCategory::Marketing => "Marketing",
            BudgetCategory::Materials => "Materials",
            BudgetCategory::Services => "Services",
            BudgetCategory::Other => "Other",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        assert_eq!(serde_json::to_string(&Category::SocialImpact).unwrap(), "\"Social Impact\"");
        let c: Category = serde_json::from_str("\"Film\"").unwrap();
        assert_eq!(c, Category::Film);
        let c: Category = serde_json::from_str("\"Podcasts\"").unwrap();
        assert_eq!(c, Category::Other);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("technology".parse::<Category>(), Ok(Category::Technology));
        assert_eq!(" social impact ".parse::<Category>(), Ok(Category::SocialImpact));
        assert_eq!("?".parse::<Category>(), Ok(Category::Other));
    }

    #[test]
    fn test_unknown_budget_category_is_other() {
        let c: BudgetCategory = serde_json::from_str("\"Travel\"").unwrap();
        assert_eq!(c, BudgetCategory::Other);
        assert_eq!(BudgetCategory::Materials.to_string(), "Materials");
    }
}
