//! Target specs and the parallel tracks they are grouped into

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// Largest magnitude below which every integral `f64` is exact (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Value applied to an element attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag(flag) => write!(f, "{}", flag),
            // integral numbers print without a trailing ".0"; past 2^53 the cast would lose digits
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER => {
                write!(f, "{}", *n as i64)
            }
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A displayable unit plus the attributes to apply once its page is shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Lookup key of the element
    pub node_id: String,

    /// Attribute name / value pairs
    #[serde(default)]
    pub attributes: Vec<(String, AttrValue)>,
}

impl TargetSpec {
    /// Create a spec with no attributes
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute applied when the page is first populated
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Parallel tracks of target specs, all of the same length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetSet {
    tracks: Vec<Vec<TargetSpec>>,
    length: usize,
}

impl TargetSet {
    /// Validate and wrap a set of tracks
    pub fn new(tracks: Vec<Vec<TargetSpec>>) -> Result<Self, PaginationError> {
        let length = crate::pages::equal_length(&tracks)?;
        Ok(Self { tracks, length })
    }

    /// A set holding one track
    pub fn single(track: Vec<TargetSpec>) -> Self {
        let length = track.len();
        Self {
            tracks: vec![track],
            length,
        }
    }

    /// Items per track
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn tracks(&self) -> &[Vec<TargetSpec>] {
        &self.tracks
    }

    pub fn into_tracks(self) -> Vec<Vec<TargetSpec>> {
        self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_display() {
        assert_eq!(AttrValue::from(3i64).to_string(), "3");
        assert_eq!(AttrValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::from("thumb.png").to_string(), "thumb.png");
    }

    #[test]
    fn test_large_numbers_keep_their_digits() {
        assert_eq!(AttrValue::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(AttrValue::Number(-1e20).to_string(), "-100000000000000000000");
        assert_eq!(AttrValue::Number(9_007_199_254_740_991.0).to_string(), "9007199254740991");
        assert_eq!(AttrValue::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_target_spec_json() {
        let spec: TargetSpec =
            serde_json::from_str(r#"{"node_id": "img-1", "attributes": [["src", "a.png"], ["width", 64]]}"#)
                .unwrap();
        assert_eq!(
            spec,
            TargetSpec::new("img-1")
                .with_attribute("src", "a.png")
                .with_attribute("width", 64i64)
        );
    }

    #[test]
    fn test_mismatched_tracks_rejected() {
        let tracks = vec![
            vec![TargetSpec::new("a"), TargetSpec::new("b")],
            vec![TargetSpec::new("c")],
        ];
        let err = TargetSet::new(tracks).unwrap_err();
        assert!(err.to_string().starts_with("all target arrays must have the same length"));
    }

    #[test]
    fn test_empty_set() {
        let set = TargetSet::new(vec![vec![], vec![]]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.tracks().len(), 2);
    }
}
