//! In-memory element tree standing in for the review page
//!
//! Paginators and table switchers mutate a [`Document`] through ids, the way
//! the page scripts address DOM nodes. [`SharedDocument`] lets several of them
//! share one tree and plugs it into the paginator as its [`vp_core::PageHost`].

pub mod document;
pub mod shared;
pub mod visibility;

use thiserror::Error;

// Re-exports
pub use document::{Document, Element};
pub use shared::SharedDocument;
pub use visibility::{toggle_visibility, Visibility};

/// Errors that can occur while addressing elements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no element with id '{0}'")]
    MissingElement(String),

    #[error("an element with id '{0}' already exists")]
    DuplicateId(String),
}
