//! Search-result extraction from scraped markdown.
//!
//! The input is the markdown rendering of a search-engine results page that
//! was already restricted to one site (`site:news.ycombinator.com ...`). Page
//! structure is not under our control, so extraction is line-oriented pattern
//! matching with a couple of fallbacks:
//!
//! 1. A primary pass that treats every line mentioning the domain as a
//!    candidate, pulls a url (markdown link or bare token), infers a title
//!    from the line or its neighbours, and collects a short description from
//!    the lines that follow.
//! 2. A fallback pass, run only when the primary pass finds nothing, that
//!    picks up any `{domain}/item?id=` reference as a bare result.
//!
//! Extraction is a pure function of its input. Malformed input simply yields
//! fewer (or zero) results.

use crate::types::SearchResult;

/// Site searched by default.
pub const DEFAULT_DOMAIN: &str = "news.ycombinator.com";

pub const PLACEHOLDER_TITLE: &str = "Hacker News Discussion";
pub const NO_DESCRIPTION: &str = "No description available";
pub const FALLBACK_DESCRIPTION: &str = "Found through Google search";

/// A title must be longer than this many characters to be accepted.
const MIN_TITLE_LEN: usize = 5;

/// Lines after a candidate that may contribute to its description.
const DESCRIPTION_LOOKAHEAD: usize = 4;

/// One of these is dropped from the end of an extracted url.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', ')', ']', '}'];

/// A fallback url ends at the first of these.
const URL_TERMINATORS: &[char] = &[' ', ')', ']', '"', '\''];

/// Extracts [`SearchResult`]s for a single domain.
#[derive(Debug, Clone)]
pub struct ResultExtractor {
    domain: String,
    item_marker: String,
}

impl ResultExtractor {
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let item_marker = format!("{}/item?id=", domain);
        Self {
            domain,
            item_marker,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Extract results in input line order. No deduplication is applied.
    pub fn extract(&self, markdown: &str) -> Vec<SearchResult> {
        let lines: Vec<&str> = markdown.split('\n').map(str::trim).collect();

        let results: Vec<SearchResult> = (0..lines.len())
            .filter_map(|i| self.result_at(&lines, i))
            .collect();

        if !results.is_empty() {
            tracing::debug!(count = results.len(), "Extracted search results");
            return results;
        }

        let fallback = self.fallback(&lines);
        tracing::debug!(count = fallback.len(), "Extracted search results via fallback scan");
        fallback
    }

    fn is_candidate(&self, line: &str) -> bool {
        line.contains(self.domain.as_str()) && (line.contains('[') || line.contains("http"))
    }

    /// Build a result from the candidate line at `i`, if it is one.
    fn result_at(&self, lines: &[&str], i: usize) -> Option<SearchResult> {
        let line = lines[i];
        if !self.is_candidate(line) {
            return None;
        }

        let (url, title) = if has_markdown_link(line) {
            self.markdown_link(line)?
        } else {
            (self.bare_url(line)?, None)
        };

        let title = title
            .or_else(|| derive_title(lines, i))
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

        if url.is_empty() || title.is_empty() {
            return None;
        }

        Some(SearchResult {
            url: finish_url(url),
            title,
            description: describe(lines, i),
        })
    }

    /// `[title](url)`: the url must point at the domain. An empty title is
    /// reported as absent so that it can be inferred from context.
    fn markdown_link(&self, line: &str) -> Option<(String, Option<String>)> {
        let open = line.find('[')?;
        let close = line[open + 1..].find(']').map(|p| open + 1 + p);

        let search_from = close.map_or(open + 1, |c| c + 1);
        let paren = search_from + line[search_from..].find('(')?;
        let end = paren + 1 + line[paren + 1..].find(')')?;

        let url = line[paren + 1..end].trim();
        if !url.contains(self.domain.as_str()) {
            return None;
        }

        let title = close
            .map(|c| line[open + 1..c].trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Some((url.to_string(), title))
    }

    fn bare_url(&self, line: &str) -> Option<String> {
        line.split_whitespace()
            .find(|word| word.starts_with("http") && word.contains(self.domain.as_str()))
            .map(str::to_string)
    }

    fn fallback(&self, lines: &[&str]) -> Vec<SearchResult> {
        lines
            .iter()
            .filter(|line| line.contains(self.item_marker.as_str()))
            .filter_map(|line| self.fallback_url(line))
            .map(|url| SearchResult {
                url,
                title: PLACEHOLDER_TITLE.to_string(),
                description: FALLBACK_DESCRIPTION.to_string(),
            })
            .collect()
    }

    /// Widen the first domain mention to the nearest `http`/`www` before it,
    /// or synthesize a scheme, then cut at the first url terminator.
    fn fallback_url(&self, line: &str) -> Option<String> {
        let start = line.find(self.domain.as_str())?;
        let prefix = &line[..start];

        let url = match prefix.rfind("http").or_else(|| prefix.rfind("www")) {
            Some(url_start) => line[url_start..].to_string(),
            None => format!("https://{}", &line[start..]),
        };

        let end = url.find(URL_TERMINATORS).unwrap_or(url.len());
        let url = &url[..end];
        (!url.is_empty()).then(|| url.to_string())
    }
}

impl Default for ResultExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN)
    }
}

fn has_markdown_link(line: &str) -> bool {
    line.contains('[') && line.contains(']') && line.contains('(') && line.contains(')')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_title_like(line: &str) -> bool {
    !line.is_empty() && !line.contains("http") && char_len(line) > MIN_TITLE_LEN
}

/// Title from the candidate line with any url after leading text removed,
/// else from the previous line, else from the next one. A line that starts
/// with its url is kept whole.
fn derive_title(lines: &[&str], i: usize) -> Option<String> {
    let line = lines[i];
    let mut title = match line.find("http") {
        Some(idx) if idx > 0 => line[..idx].trim(),
        _ => line,
    };

    if char_len(title) < MIN_TITLE_LEN {
        let neighbour = |j: usize| lines.get(j).copied().filter(|l| is_title_like(l));

        if let Some(prev) = i.checked_sub(1).and_then(neighbour) {
            title = prev;
        }
        if char_len(title) < MIN_TITLE_LEN {
            if let Some(next) = neighbour(i + 1) {
                title = next;
            }
        }
    }

    (char_len(title) > MIN_TITLE_LEN).then(|| title.to_string())
}

fn describe(lines: &[&str], i: usize) -> String {
    let collected: Vec<&str> = lines
        .iter()
        .skip(i + 1)
        .take(DESCRIPTION_LOOKAHEAD)
        .copied()
        .filter(|l| !l.is_empty() && !l.contains("http") && !l.starts_with("..."))
        .collect();

    if collected.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        collected.join(" ")
    }
}

fn finish_url(mut url: String) -> String {
    if url.ends_with(TRAILING_PUNCTUATION) {
        url.pop();
    }
    if !url.starts_with("http") {
        url.insert_str(0, "https://");
    }
    url
}

/// Extract results for the default domain.
pub fn extract_results(markdown: &str) -> Vec<SearchResult> {
    ResultExtractor::default().extract(markdown)
}
