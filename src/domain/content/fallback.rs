//! Deterministic templated content used when the model cannot help.

use super::record::{ContentRecord, DEFAULT_DESIGN_THEME, DEFAULT_LAYOUT_TYPE};

/// Title-cases a phrase: the first letter of every alphabetic run is
/// uppercased and the rest lowercased, so `"ocean facts"` becomes
/// `"Ocean Facts"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(ch);
            previous_alphabetic = false;
        }
    }

    out
}

pub fn templated_title(prompt: &str) -> String {
    format!("About {}", title_case(prompt))
}

pub fn templated_summary(prompt: &str) -> String {
    format!("This slide provides an overview and key points about {}.", prompt)
}

pub fn templated_bullets(prompt: &str) -> Vec<String> {
    vec![
        format!("Overview of {}", prompt),
        format!("Key facts about {}", prompt),
        format!("Why {} matters", prompt),
        format!("Recent developments in {}", prompt),
        format!("What you can do about {}", prompt),
    ]
}

/// Builds a complete record from the prompt alone.
pub fn fallback_content(prompt: &str) -> ContentRecord {
    ContentRecord {
        title: templated_title(prompt),
        content: templated_summary(prompt),
        bullet_points: templated_bullets(prompt),
        design_theme: DEFAULT_DESIGN_THEME.to_string(),
        layout_type: DEFAULT_LAYOUT_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("ocean facts"), "Ocean Facts");
        assert_eq!(title_case("the HISTORY of rome"), "The History Of Rome");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("web3 tools"), "Web3 Tools");
        assert_eq!(title_case("they're here"), "They'Re Here");
    }

    #[test]
    fn fallback_uses_fixed_templates() {
        let record = fallback_content("climate change");
        assert_eq!(record.title, "About Climate Change");
        assert_eq!(
            record.content,
            "This slide provides an overview and key points about climate change."
        );
        assert_eq!(record.bullet_points.len(), 5);
        assert_eq!(record.bullet_points[0], "Overview of climate change");
        assert_eq!(record.bullet_points[4], "What you can do about climate change");
        assert_eq!(record.design_theme, "professional");
        assert_eq!(record.layout_type, "bullet-list");
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(fallback_content("rust"), fallback_content("rust"));
    }

    proptest! {
        #[test]
        fn fallback_title_is_never_empty(prompt in "\\PC{1,40}") {
            let record = fallback_content(&prompt);
            prop_assert!(!record.title.is_empty());
            prop_assert!(record.bullet_points.len() <= 5);
        }
    }
}
