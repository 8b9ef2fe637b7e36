//! Plain-text rendering of generation results for the terminal.

use seo_core::results::{
    BlogContentResult, KeywordCategory, KeywordResearchResult, PageOptimizationResult,
    ProductCopyResult,
};
use seo_core::SeoResult;

pub fn render(result: &SeoResult) -> String {
    let mut out = format!("== {} ==\n\n", result.kind().title());

    if let Some((title, description)) = result.meta() {
        out.push_str(&format!(
            "Meta title ({} chars): {}\n",
            title.chars().count(),
            title
        ));
        out.push_str(&format!(
            "Meta description ({} chars): {}\n\n",
            description.chars().count(),
            description
        ));
    }

    match result {
        SeoResult::KeywordResearch(research) => render_keywords(research, &mut out),
        SeoResult::PageOptimization(page) => render_page(page, &mut out),
        SeoResult::ProductCopy(copy) => render_product(copy, &mut out),
        SeoResult::BlogContent(blog) => render_blog(blog, &mut out),
    }

    let advisories = result.advisories();
    if !advisories.is_empty() {
        out.push_str("\nAdvisories:\n");
        for advisory in advisories {
            out.push_str(&format!("  ! {}\n", advisory));
        }
    }
    out
}

fn render_keywords(research: &KeywordResearchResult, out: &mut String) {
    out.push_str(&format!("Strategy: {}\n", research.strategy_summary));
    for category in KeywordCategory::ALL {
        let items: Vec<_> = research.by_category(category).collect();
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{} ({})\n", category.as_str(), items.len()));
        for item in items {
            out.push_str(&format!(
                "  - {} [{}]\n",
                item.keyword,
                item.indication_level.as_str()
            ));
        }
    }
}

fn render_page(page: &PageOptimizationResult, out: &mut String) {
    let cluster = &page.keyword_cluster;
    out.push_str(&format!("Short-tail: {}\n", cluster.short_tail.join(", ")));
    out.push_str(&format!("Long-tail: {}\n", cluster.long_tail.join(", ")));
    out.push_str(&format!("Related: {}\n\nOutline:\n", cluster.related.join(", ")));

    for heading in &page.headings {
        let indent = "  ".repeat(heading.level.depth() + 1);
        out.push_str(&format!("{}{:?} {}\n", indent, heading.level, heading.text));
        out.push_str(&format!("{}   {}\n", indent, heading.description));
    }
}

fn render_product(copy: &ProductCopyResult, out: &mut String) {
    let mapping = &copy.keyword_mapping;
    out.push_str(&format!("Focus: {}\n", mapping.focus.join(", ")));
    out.push_str(&format!("Short-tail: {}\n", mapping.short_tail.join(", ")));
    out.push_str(&format!("Long-tail: {}\n", mapping.long_tail.join(", ")));
    out.push_str(&format!("Related: {}\n\n", mapping.related.join(", ")));

    out.push_str(&format!("{}\n\n{}\n\n", copy.intro, copy.marketing_desc));
    for feature in &copy.features {
        out.push_str(&format!("## {}\n{}\n\n", feature.heading, feature.explanation));
    }
    out.push_str(&format!("{}\n", copy.conclusion));
}

fn render_blog(blog: &BlogContentResult, out: &mut String) {
    out.push_str(&format!("# {}\n\n", blog.meta_title));
    let intro = &blog.introduction;
    out.push_str(&format!("{}\n\n{}\n\n{}\n\n", intro.para1, intro.para2, intro.para3));

    for section in &blog.body {
        out.push_str(&format!("## {}\n{}\n\n", section.heading, section.content));
        for sub in &section.subheadings {
            out.push_str(&format!("### {}\n{}\n\n", sub.heading, sub.content));
        }
    }
    out.push_str(&format!("{}\n", blog.conclusion));
}
