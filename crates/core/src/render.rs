// Text renderers for tool output. All functions are pure; the current time is
// passed in so that identical inputs always render identically.

use crate::fields;
use crate::types::{ItemId, NewsItem, SearchResult};

/// Top stories listed by the popular discussions tool.
pub const TOP_DISCUSSIONS_LIMIT: usize = 30;
pub const TOP_DISCUSSIONS_HEADER: &str = "# TOP 30 HACKER NEWS DISCUSSIONS";
pub const TOP_DISCUSSIONS_UNAVAILABLE: &str = "Could not fetch popular discussions from Hacker News";
pub const NO_DISCUSSIONS: &str = "No discussions found";
pub const EMPTY_QUERY: &str = "Error: Search query cannot be empty.";
pub const TRUNCATION_NOTICE: &str = "...\n\n[Content truncated due to length]";

/// Scraped pages longer than this are cut.
pub const MAX_PAGE_CHARS: usize = 8000;

const SUMMARY_MAX_CHARS: usize = 200;
const SUMMARY_KEEP_CHARS: usize = 197;

pub fn item_not_found(id: ItemId) -> String {
    format!("Could not find Hacker News item with ID {}", id)
}

/// Full detail block for a single item.
pub fn item_detail(item: &NewsItem, now: i64) -> String {
    let mut out = format!("# {}\n\n", fields::title(item));
    out.push_str(&format!("**Type:** {}\n", fields::kind(item)));
    out.push_str(&format!("**Author:** {}\n", fields::author(item)));
    out.push_str(&format!(
        "**Posted:** {} ({})\n",
        fields::absolute_time(item),
        fields::relative_time(item, now)
    ));

    let score = fields::score(item);
    if score > 0 {
        out.push_str(&format!("**Score:** {} points\n", score));
    }

    let comments = fields::comment_count(item);
    if comments > 0 {
        out.push_str(&format!("**Comments:** {}\n", comments));
    }

    out.push_str("\n**Links:**\n");
    out.push_str(&format!("- Discussion: {}\n", fields::discussion_url(item)));
    if let Some(url) = &item.url {
        out.push_str(&format!("- Article: {}\n", url));
    }

    if let Some(text) = &item.text {
        out.push_str(&format!("\n**Content:**\n{}\n", text));
    }

    let replies = fields::direct_reply_count(item);
    if replies > 0 {
        out.push_str(&format!("\n**Has {} direct replies**\n", replies));
    }

    out
}

/// One ranked entry of the top-discussions listing. `rank` is 1-based.
pub fn discussion_entry(rank: usize, item: &NewsItem, now: i64) -> String {
    let mut out = format!("#{}: {}\n", rank, fields::title(item));
    out.push_str(&format!(
        "   Type: {} | Score: {} points | By: {} | Posted: {}\n",
        fields::kind(item),
        fields::score(item),
        fields::author(item),
        fields::relative_time(item, now)
    ));
    out.push_str(&format!("   Comments: {}\n", fields::direct_reply_count(item)));
    out.push_str(&format!("   Discussion: {}\n", fields::discussion_url(item)));

    if let Some(url) = &item.url {
        out.push_str(&format!("   Article: {}", url));
    }
    if let Some(text) = &item.text {
        out.push_str(&format!("\n   Summary: {}", summarize(text)));
    }

    out
}

pub fn discussion_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return NO_DISCUSSIONS.to_string();
    }
    format!("{}\n\n{}", TOP_DISCUSSIONS_HEADER, entries.join("\n\n"))
}

/// Shorten long item text to 197 characters plus an ellipsis.
pub fn summarize(text: &str) -> String {
    if text.chars().count() > SUMMARY_MAX_CHARS {
        let kept: String = text.chars().take(SUMMARY_KEEP_CHARS).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

pub fn scraped_page(url: &str, markdown: &str) -> String {
    format!("# Content from {}\n\n{}", url, truncate_page(markdown))
}

pub fn scrape_failed(url: &str, reason: &str) -> String {
    format!("Failed to scrape {}: {}", url, reason)
}

fn truncate_page(markdown: &str) -> String {
    match markdown.char_indices().nth(MAX_PAGE_CHARS) {
        Some((cut, _)) => format!("{}{}", &markdown[..cut], TRUNCATION_NOTICE),
        None => markdown.to_string(),
    }
}

pub fn no_search_results(query: &str) -> String {
    format!("No Hacker News discussions found for query: '{}'", query)
}

/// Numbered result blocks between a header and footer naming the query.
pub fn search_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return no_search_results(query);
    }

    let blocks: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "### {}. {}\n**Link**: [{}]({})\n**Description**: {}\n",
                i + 1,
                result.title,
                result.url,
                result.url,
                result.description
            )
        })
        .collect();

    format!(
        "# SEARCH RESULTS FOR '{}' ON HACKER NEWS\n\n{}\n\n*Results retrieved via Google site-specific search*",
        query,
        blocks.join("\n")
    )
}
