//! Prompt templates. Each one pins down the output format that `parse` expects.

use crate::domain::Category;

pub fn budget(project_description: &str, project_goal: f64) -> String {
    format!(
        r#"Create a realistic budget breakdown for this project: "{project_description}" with a goal of ${project_goal}.

Return exactly 5-7 budget items in this exact JSON format (no markdown, no extra text):
[
  {{"name": "Item Name", "amount": 150.00, "category": "Equipment", "description": "Brief description"}},
  {{"name": "Item Name", "amount": 75.00, "category": "Software", "description": "Brief description"}}
]

Categories must be one of: Equipment, Software, Marketing, Materials, Services, Other
Amounts should be realistic and add up to roughly the goal amount. Ensure 'amount' is a number."#
    )
}

pub fn grants(project_description: &str, category: Category) -> String {
    format!(
        r#"Find relevant grants for this {category} project: "{project_description}"

Return exactly 3-5 grant opportunities in this exact JSON format (no markdown, no extra text):
[
  {{
    "name": "Grant Name",
    "organization": "Organization Name",
    "amount": "Up to $X,XXX",
    "deadline": "Month Year or Rolling",
    "description": "Brief description of what they fund",
    "eligibility": "Key eligibility requirements",
    "website": "https://website.com or Contact for info"
  }}
]

Focus on real, relevant grants for {category} projects. Include a mix of government, foundation, and corporate grants."#
    )
}

pub fn enhance_description(basic_description: &str, category: Category) -> String {
    format!(
        r#"Enhance this {category} project description to be more compelling and professional for crowdfunding:

Original: "{basic_description}"

Make it:
- More engaging and persuasive
- Clear about the project's value
- Include why people should support it
- Keep it concise but compelling (2-3 paragraphs max)
- Professional but approachable tone

Return only the enhanced description, no extra formatting or markdown."#
    )
}

pub fn project_titles(description: &str, category: Category) -> String {
    format!(
        r#"Generate 3 compelling project titles for this {category} project:

Description: "{description}"

Requirements:
- Catchy and memorable
- Clear about what the project is
- Good for crowdfunding campaigns
- 3-8 words each

Return exactly 3 titles in this format, each on a new line (no extra text, no numbering, no markdown):
Title One
Title Two
Title Three"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_prompt_embeds_inputs() {
        let prompt = budget("A mural for the library", 1200.0);
        assert!(prompt.contains("\"A mural for the library\""));
        assert!(prompt.contains("goal of $1200."));
        assert!(prompt.contains(r#"{"name": "Item Name""#));
    }

    #[test]
    fn test_grant_prompt_uses_category_label() {
        let prompt = grants("Clean rivers", Category::SocialImpact);
        assert!(prompt.contains("Social Impact project"));
    }
}
