//! Soft checks on generated content.
//!
//! Nothing here fails a generation. The model is asked for certain counts,
//! orderings and lengths; these checks report where it fell short so the
//! caller can log or display the gap.

use crate::results::{
    HeadingLevel, KeywordCategory, PageOptimizationResult, SeoResult,
};

pub const META_TITLE_WARN_CHARS: usize = 60;
pub const META_DESCRIPTION_WARN_CHARS: usize = 160;

impl SeoResult {
    pub fn advisories(&self) -> Vec<String> {
        let mut advisories = Vec::new();

        match self {
            SeoResult::KeywordResearch(research) => {
                for category in KeywordCategory::ALL {
                    if research.by_category(category).next().is_none() {
                        advisories.push(format!("no {} keywords returned", category.as_str()));
                    }
                }
            }
            SeoResult::PageOptimization(page) => heading_advisories(page, &mut advisories),
            SeoResult::ProductCopy(copy) => {
                if copy.features.is_empty() {
                    advisories.push("product copy has no feature sections".to_string());
                }
            }
            SeoResult::BlogContent(blog) => {
                if blog.body.is_empty() {
                    advisories.push("blog draft has an empty body".to_string());
                }
            }
        }

        if let Some((title, description)) = self.meta() {
            let title_len = title.chars().count();
            if title_len > META_TITLE_WARN_CHARS {
                advisories.push(format!(
                    "meta title is {} chars (over {})",
                    title_len, META_TITLE_WARN_CHARS
                ));
            }
            let description_len = description.chars().count();
            if description_len > META_DESCRIPTION_WARN_CHARS {
                advisories.push(format!(
                    "meta description is {} chars (over {})",
                    description_len, META_DESCRIPTION_WARN_CHARS
                ));
            }
        }

        advisories
    }
}

fn heading_advisories(page: &PageOptimizationResult, advisories: &mut Vec<String>) {
    let headings = &page.headings;
    let Some(first) = headings.first() else {
        advisories.push("page blueprint has no headings".to_string());
        return;
    };

    if first.level != HeadingLevel::H1 {
        advisories.push("heading structure does not open with an H1".to_string());
    }
    let h1_count = headings
        .iter()
        .filter(|h| h.level == HeadingLevel::H1)
        .count();
    if h1_count != 1 {
        advisories.push(format!("expected exactly one H1, found {}", h1_count));
    }

    // Nesting is implied by order: a level may only go one step deeper.
    for pair in headings.windows(2) {
        if pair[1].level.depth() > pair[0].level.depth() + 1 {
            advisories.push(format!(
                "\"{}\" skips a level after \"{}\"",
                pair[1].text, pair[0].text
            ));
        }
    }

    if let Some(last) = headings.last() {
        let is_summary = last.level == HeadingLevel::H2
            && last.text.to_lowercase().contains("summary");
        if !is_summary {
            advisories.push("heading structure does not close with an H2 summary".to_string());
        }
    }
}
