//! Application Configuration
//!
//! Configuration for the boards application layer.

/// Boards application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardsConfig {
    /// Largest accepted request body, in bytes
    pub body_limit_bytes: usize,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            body_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

impl BoardsConfig {
    /// Create config for development (small body limit to surface oversized payloads early)
    pub fn development() -> Self {
        Self {
            body_limit_bytes: 1024 * 1024,
        }
    }

    /// Override the body limit
    pub fn with_body_limit(body_limit_bytes: usize) -> Self {
        Self { body_limit_bytes }
    }
}
