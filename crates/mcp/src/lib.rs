// MCP (Model Context Protocol) server exposing Hacker News and Firecrawl
// tools to agent clients over stdio

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{SearchConfig, ServerConfig};
pub use server::McpServer;
