//! Avatar and cover image URLs
//!
//! Both are deterministic URLs into public image services, nothing is fetched.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::Category;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://source.unsplash.com/800x400/";

const AVATAR_BACKGROUNDS: &str = "b6e3f4,c0aede,d1d4f9,ffd5dc,ffdfbf";
const IMAGE_KEYWORDS: usize = 3;

// Same set as JavaScript's encodeURIComponent
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn avatar_url(base_url: &str, name: &str) -> String {
    format!("{base_url}?seed={}&backgroundColor={AVATAR_BACKGROUNDS}", encode(name))
}

/// Cover image searched by category plus the first three title words
pub fn project_image_url(base_url: &str, title: &str, category: Category) -> String {
    let mut terms = vec![category.as_str().to_string()];
    terms.extend(title.split_whitespace().take(IMAGE_KEYWORDS).map(str::to_string));
    format!("{base_url}?{}", encode(&terms.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_encodes_seed() {
        assert_eq!(
            avatar_url(DEFAULT_AVATAR_BASE_URL, "Ada Lovelace"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Ada%20Lovelace&backgroundColor=b6e3f4,c0aede,d1d4f9,ffd5dc,ffdfbf"
        );
        assert!(avatar_url("http://x", "a&b=c").contains("seed=a%26b%3Dc&"));
        assert!(avatar_url("http://x", "o'neil (jr)").contains("seed=o'neil%20(jr)&"));
    }

    #[test]
    fn test_project_image_url_uses_three_words() {
        assert_eq!(
            project_image_url(DEFAULT_IMAGE_BASE_URL, "Community Garden For Everyone", Category::Environment),
            "https://source.unsplash.com/800x400/?Environment%2CCommunity%2CGarden%2CFor"
        );
    }

    #[test]
    fn test_project_image_url_keeps_category_label() {
        assert_eq!(
            project_image_url("http://img", "Clean Rivers", Category::SocialImpact),
            "http://img?Social%20Impact%2CClean%2CRivers"
        );
    }

    #[test]
    fn test_project_image_url_with_blank_title() {
        assert_eq!(
            project_image_url("http://img", "   ", Category::Music),
            "http://img?Music"
        );
    }
}
