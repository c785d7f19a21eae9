//! Core pagination engine for the review tool listings
//!
//! This crate splits parallel tracks of target specs into fixed-size pages,
//! shows one page at a time through an injected [`PageHost`], and keeps the
//! row of navigation links in sync with the current page.

pub mod config;
pub mod pages;
pub mod paginator;
pub mod target;
pub mod window;

use thiserror::Error;

// Re-export commonly used types
pub use config::PaginatorConfig;
pub use pages::{equal_length, split_into_pages, total_pages};
pub use paginator::{NavLink, NavTarget, PageContext, PageHost, PageSubscriber, Paginator};
pub use target::{AttrValue, TargetSet, TargetSpec};
pub use window::link_window;

/// Items per track shown on one page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Number of page links kept visible around the current page
pub const DEFAULT_MAX_LINKS: usize = 10;

/// CSS class marking the link that matches the current state
pub const INACTIVE_LINK_CLASS: &str = "inactive-paginator-link";

/// CSS class carried by every numbered page link
pub const PAGE_LINK_CLASS: &str = "paginator-link";

/// Errors raised while configuring or driving a paginator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("all target arrays must have the same length (track {track} has {found}, expected {expected})")]
    UnequalTracks {
        track: usize,
        expected: usize,
        found: usize,
    },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("page {page} out of range ({n_pages} pages)")]
    PageOutOfRange { page: usize, n_pages: usize },
}
