//! Paginator configuration

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_LINKS, DEFAULT_PAGE_SIZE};

/// Tunable paginator settings, usually read from a listing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Items per track on each page
    pub page_size: usize,

    /// Maximum number of links visible at once
    pub max_links: usize,

    /// Page shown by `init`
    pub current_page: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_links: DEFAULT_MAX_LINKS,
            current_page: 0,
        }
    }
}

impl PaginatorConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.max_links, 10);
        assert_eq!(config.current_page, 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PaginatorConfig = serde_json::from_str(r#"{"page_size": 3}"#).unwrap();
        assert_eq!(config, PaginatorConfig::default().with_page_size(3));
    }
}
