// Field extractors over a NewsItem. Each one is total and falls back to a
// display default when the field is missing.

use crate::types::{ItemId, NewsItem};
use chrono::DateTime;

pub const NO_TITLE: &str = "No title available";
pub const ANONYMOUS: &str = "Anonymous";
pub const UNKNOWN_TYPE: &str = "unknown";
pub const NO_TEXT: &str = "No text content available";
pub const NO_EXTERNAL_URL: &str = "No external URL available";

const DISCUSSION_URL_PREFIX: &str = "https://news.ycombinator.com/item?id=";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

pub fn id(item: &NewsItem) -> ItemId {
    item.id.unwrap_or_default()
}

pub fn title(item: &NewsItem) -> &str {
    item.title.as_deref().unwrap_or(NO_TITLE)
}

pub fn author(item: &NewsItem) -> &str {
    item.by.as_deref().unwrap_or(ANONYMOUS)
}

pub fn score(item: &NewsItem) -> i64 {
    item.score.unwrap_or(0)
}

pub fn kind(item: &NewsItem) -> &str {
    item.kind.as_deref().unwrap_or(UNKNOWN_TYPE)
}

pub fn text(item: &NewsItem) -> &str {
    item.text.as_deref().unwrap_or(NO_TEXT)
}

pub fn external_url(item: &NewsItem) -> &str {
    item.url.as_deref().unwrap_or(NO_EXTERNAL_URL)
}

pub fn discussion_url(item: &NewsItem) -> String {
    format!("{}{}", DISCUSSION_URL_PREFIX, id(item))
}

/// Total comment count: `descendants` when present, otherwise the number of
/// direct children.
pub fn comment_count(item: &NewsItem) -> u64 {
    item.descendants
        .unwrap_or_else(|| direct_reply_count(item) as u64)
}

/// Number of direct children only.
pub fn direct_reply_count(item: &NewsItem) -> usize {
    item.kids.as_ref().map_or(0, Vec::len)
}

/// Age of the item relative to `now` (unix seconds).
pub fn relative_time(item: &NewsItem, now: i64) -> String {
    format_age(now.saturating_sub(item.time.unwrap_or(0)))
}

/// Bucket an age in seconds into a human phrase.
pub fn format_age(diff: i64) -> String {
    if diff < MINUTE {
        return "just now".to_string();
    }

    let (n, unit) = if diff < HOUR {
        (diff / MINUTE, "minute")
    } else if diff < DAY {
        (diff / HOUR, "hour")
    } else {
        (diff / DAY, "day")
    };

    format!("{} {}{} ago", n, unit, if n > 1 { "s" } else { "" })
}

/// Posting time as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn absolute_time(item: &NewsItem) -> String {
    let timestamp = item.time.unwrap_or(0);
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => {
            tracing::debug!(timestamp, "Item time out of range");
            "1970-01-01 00:00:00".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_counts(descendants: Option<u64>, kids: Option<Vec<u64>>) -> NewsItem {
        NewsItem {
            descendants,
            kids: kids.map(|k| k.into_iter().map(ItemId).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_for_empty_item() {
        let item = NewsItem::default();

        assert_eq!(title(&item), "No title available");
        assert_eq!(author(&item), "Anonymous");
        assert_eq!(score(&item), 0);
        assert_eq!(kind(&item), "unknown");
        assert_eq!(text(&item), "No text content available");
        assert_eq!(external_url(&item), "No external URL available");
        assert_eq!(discussion_url(&item), "https://news.ycombinator.com/item?id=0");
    }

    #[test]
    fn test_discussion_url_uses_id() {
        let item = NewsItem {
            id: Some(ItemId(42)),
            ..Default::default()
        };
        assert_eq!(discussion_url(&item), "https://news.ycombinator.com/item?id=42");
    }

    #[test]
    fn test_age_buckets() {
        let cases = [
            (0, "just now"),
            (59, "just now"),
            (60, "1 minute ago"),
            (119, "1 minute ago"),
            (120, "2 minutes ago"),
            (3599, "59 minutes ago"),
            (3600, "1 hour ago"),
            (7200, "2 hours ago"),
            (86399, "23 hours ago"),
            (86400, "1 day ago"),
            (3 * 86400, "3 days ago"),
        ];

        for (diff, expected) in cases {
            assert_eq!(format_age(diff), expected, "diff = {}", diff);
        }
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_age(-30), "just now");
    }

    #[test]
    fn test_relative_time_uses_now() {
        let item = NewsItem {
            time: Some(1_000_000),
            ..Default::default()
        };
        assert_eq!(relative_time(&item, 1_000_000 + 7260), "2 hours ago");
    }

    #[test]
    fn test_relative_time_extreme_timestamps() {
        let ancient = NewsItem {
            time: Some(i64::MIN),
            ..Default::default()
        };
        let future = NewsItem {
            time: Some(i64::MAX),
            ..Default::default()
        };

        assert_eq!(
            relative_time(&ancient, 1_700_000_000),
            format!("{} days ago", i64::MAX / 86400)
        );
        assert_eq!(relative_time(&future, 1_700_000_000), "just now");
    }

    #[test]
    fn test_absolute_time_is_utc() {
        let item = NewsItem {
            time: Some(1175714200),
            ..Default::default()
        };
        assert_eq!(absolute_time(&item), "2007-04-04 19:16:40");
        assert_eq!(absolute_time(&NewsItem::default()), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_comment_count_prefers_descendants() {
        assert_eq!(comment_count(&item_with_counts(Some(5), Some(vec![1, 2]))), 5);
        assert_eq!(comment_count(&item_with_counts(None, Some(vec![1, 2, 3]))), 3);
        assert_eq!(comment_count(&item_with_counts(None, None)), 0);
    }

    #[test]
    fn test_direct_reply_count_ignores_descendants() {
        assert_eq!(direct_reply_count(&item_with_counts(Some(5), Some(vec![1, 2]))), 2);
        assert_eq!(direct_reply_count(&item_with_counts(Some(5), None)), 0);
    }
}
