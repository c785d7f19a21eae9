use serde::{Deserialize, Serialize};

mod engine;
mod host;
mod subscriber;

pub use engine::Paginator;
pub use host::PageHost;
pub use subscriber::PageSubscriber;

use crate::PAGE_LINK_CLASS;

/// What a navigation link does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    /// Previous page, clamped at the first page
    Left,
    /// A specific page
    Page(usize),
    /// Next page, clamped at the last page
    Right,
}

impl NavTarget {
    /// Deterministic element id of this link inside `link_div`
    pub fn link_id(&self, link_div: &str) -> String {
        match self {
            NavTarget::Left => format!("{}-link-left", link_div),
            NavTarget::Page(page) => format!("{}-link-{}", link_div, page),
            NavTarget::Right => format!("{}-link-right", link_div),
        }
    }

    /// Text shown on the link
    pub fn label(&self) -> String {
        match self {
            NavTarget::Left => "<".to_string(),
            NavTarget::Page(page) => page.to_string(),
            NavTarget::Right => ">".to_string(),
        }
    }
}

/// A navigation link bound to the page it reveals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub target: NavTarget,
}

impl NavLink {
    pub fn new(link_div: &str, target: NavTarget) -> Self {
        Self {
            id: target.link_id(link_div),
            label: target.label(),
            target,
        }
    }

    /// CSS class of the link, if any
    pub fn class(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Page(_) => Some(PAGE_LINK_CLASS),
            NavTarget::Left | NavTarget::Right => None,
        }
    }
}

/// Snapshot handed to page subscribers after every reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub link_div: String,
    pub current_page: usize,
    pub n_pages: usize,
    pub length: usize,
}
