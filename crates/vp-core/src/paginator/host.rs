//! Element access injected into a paginator

use super::NavLink;
use crate::target::AttrValue;

/// Everything a paginator needs from the page it drives.
///
/// Lookups are by element id. Implementations decide what to do with ids
/// that do not resolve; the paginator never checks.
pub trait PageHost {
    /// Apply one attribute of a target spec
    fn set_attribute(&mut self, node_id: &str, attribute: &str, value: &AttrValue);

    /// Show or hide a target element
    fn set_visible(&mut self, node_id: &str, visible: bool);

    /// Append a navigation link to the link container
    fn append_link(&mut self, container: &str, link: &NavLink);

    /// Ids of the container's children, in document order
    fn link_children(&self, container: &str) -> Vec<String>;

    /// Show or hide a link inside the container
    fn set_link_visible(&mut self, link_id: &str, visible: bool);

    /// Flag a link as matching the current state
    fn set_link_inactive(&mut self, link_id: &str, inactive: bool);
}
