//! Page subscriber trait

use super::PageContext;

/// Trait for components that need to respond to page changes
pub trait PageSubscriber: Send + Sync {
    /// Called after a reveal changed what is on screen
    fn on_page_change(&self, context: &PageContext);
}
