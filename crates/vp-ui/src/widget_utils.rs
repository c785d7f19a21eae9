//! Element id utilities
//!
//! Tables, their bodies, anchors and link rows are tied together purely by id
//! convention (`table-log`, `table-log-body`, `table-log-anchor`, ...). These
//! helpers build those ids in one place.

use std::fmt::Display;

/// Element id builder joining components with `-`
pub struct ElementId {
    components: Vec<String>,
}

impl ElementId {
    /// Create a new id builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the id
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add a row index to the id
    pub fn row(self, idx: usize) -> Self {
        self.with("row").with(idx)
    }

    /// Build the final id string
    pub fn build(&self) -> String {
        self.components.join("-")
    }
}

/// Id of an element that accompanies `base`, e.g. `companion_id("table-log", "anchor")`
pub fn companion_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}-{}", base, suffix)
}
