//! Page components for the review listings
//!
//! Table switching, listing views that own their paginators, element id
//! helpers and a plain-text rendering of what is currently on screen.

pub mod listing;
pub mod render;
pub mod tables;
pub mod widget_utils;

use thiserror::Error;
use vp_core::PaginationError;
use vp_dom::DomError;

/// Re-export commonly used types
pub use listing::{ListingView, PageLogger};
pub use render::{render_links, render_table};
pub use tables::TableSwitcher;
pub use widget_utils::{companion_id, ElementId};

/// CSS class of tables managed by the table switcher
pub const TOGGLE_TABLE_CLASS: &str = "toggle-table";

/// CSS class of tables hidden whenever their body is empty
pub const NULLABLE_TABLE_CLASS: &str = "nullable-table";

/// CSS class marking the anchor of the visible table
pub const HIGHLIGHT_CLASS: &str = "highlighted";

/// Errors raised by page components
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("element '{0}' is not a paginator link")]
    UnboundLink(String),
}
