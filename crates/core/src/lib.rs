// Core types and text processing for hnscout: Hacker News items, field
// extraction, search-result extraction and tool output rendering.

pub mod extract;
pub mod fields;
pub mod render;
pub mod types;

pub use extract::{extract_results, ResultExtractor};
pub use types::*;
