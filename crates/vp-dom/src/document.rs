//! Element tree addressed by id

use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};
use vp_core::NavTarget;

use crate::DomError;

/// A single node of the document
#[derive(Debug, Clone)]
pub struct Element {
    /// Unique id
    pub id: String,

    /// Tag name (`table`, `tr`, `a`, ...)
    pub tag: String,

    /// Text content
    pub text: String,

    /// Whether the element's own display is suppressed
    pub hidden: bool,

    attributes: IndexMap<String, String>,
    classes: IndexSet<String>,
    children: Vec<String>,
    parent: Option<String>,
    on_click: Option<NavTarget>,
}

impl Element {
    fn new(id: &str, tag: &str, parent: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            text: String::new(),
            hidden: false,
            attributes: IndexMap::new(),
            classes: IndexSet::new(),
            children: Vec::new(),
            parent,
            on_click: None,
        }
    }

    pub fn with_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn with_class(&mut self, class: &str) -> &mut Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Bind a navigation target fired when the element is clicked
    pub fn on_click(&mut self, target: NavTarget) -> &mut Self {
        self.on_click = Some(target);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn click_target(&self) -> Option<NavTarget> {
        self.on_click
    }
}

/// Element tree keyed by id, children kept in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: IndexMap<String, Element, RandomState>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level element
    pub fn create(&mut self, id: &str, tag: &str) -> Result<&mut Element, DomError> {
        self.insert(Element::new(id, tag, None))
    }

    /// Create an element as the last child of `parent`
    pub fn append(&mut self, parent: &str, id: &str, tag: &str) -> Result<&mut Element, DomError> {
        if !self.elements.contains_key(parent) {
            return Err(DomError::MissingElement(parent.to_string()));
        }
        if self.elements.contains_key(id) {
            return Err(DomError::DuplicateId(id.to_string()));
        }
        self.element_mut(parent)?.children.push(id.to_string());
        self.insert(Element::new(id, tag, Some(parent.to_string())))
    }

    fn insert(&mut self, element: Element) -> Result<&mut Element, DomError> {
        let id = element.id.clone();
        if self.elements.contains_key(&id) {
            return Err(DomError::DuplicateId(id));
        }
        let (index, _) = self.elements.insert_full(id, element);
        Ok(&mut self.elements[index])
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Look up an element that must exist
    pub fn element(&self, id: &str) -> Result<&Element, DomError> {
        self.elements
            .get(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    pub fn children(&self, id: &str) -> Result<&[String], DomError> {
        Ok(self.element(id)?.children())
    }

    pub fn child_count(&self, id: &str) -> Result<usize, DomError> {
        Ok(self.element(id)?.children.len())
    }

    pub fn set_attribute(&mut self, id: &str, name: &str, value: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.insert(class.to_string());
        Ok(())
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.shift_remove(class);
        Ok(())
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<(), DomError> {
        self.element_mut(id)?.hidden = !visible;
        Ok(())
    }

    /// Whether the element's own display flag is on
    pub fn is_visible(&self, id: &str) -> Result<bool, DomError> {
        Ok(!self.element(id)?.hidden)
    }

    /// Whether the element and all of its ancestors are visible
    pub fn is_displayed(&self, id: &str) -> Result<bool, DomError> {
        let mut current = Some(self.element(id)?);
        while let Some(element) = current {
            if element.hidden {
                return Ok(false);
            }
            current = element.parent.as_deref().and_then(|p| self.elements.get(p));
        }
        Ok(true)
    }

    /// Navigation target bound to a clicked element, if any
    pub fn click(&self, id: &str) -> Result<Option<NavTarget>, DomError> {
        Ok(self.element(id)?.on_click)
    }

    /// Ids of every element carrying `class`, in creation order
    pub fn elements_by_class(&self, class: &str) -> Vec<String> {
        self.elements
            .values()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_doc() -> Document {
        let mut doc = Document::new();
        doc.create("table-log", "table").unwrap().with_class("toggle-table");
        doc.append("table-log", "table-log-body", "tbody").unwrap();
        for i in 0..3 {
            doc.append("table-log-body", &format!("log-row-{}", i), "tr")
                .unwrap()
                .with_text(format!("row {}", i));
        }
        doc
    }

    #[test]
    fn test_children_keep_order() {
        let doc = table_doc();
        assert_eq!(
            doc.children("table-log-body").unwrap(),
            &["log-row-0", "log-row-1", "log-row-2"]
        );
        assert_eq!(doc.get("log-row-1").unwrap().parent(), Some("table-log-body"));
    }

    #[test]
    fn test_duplicate_and_missing_ids() {
        let mut doc = table_doc();
        assert_eq!(
            doc.create("table-log", "table").unwrap_err(),
            DomError::DuplicateId("table-log".to_string())
        );
        assert_eq!(
            doc.append("nope", "x", "div").unwrap_err(),
            DomError::MissingElement("nope".to_string())
        );
        assert!(doc.set_visible("ghost", false).is_err());
    }

    #[test]
    fn test_displayed_respects_ancestors() {
        let mut doc = table_doc();
        assert!(doc.is_displayed("log-row-0").unwrap());
        doc.set_visible("table-log", false).unwrap();
        assert!(doc.is_visible("log-row-0").unwrap());
        assert!(!doc.is_displayed("log-row-0").unwrap());
    }

    #[test]
    fn test_classes_and_attributes() {
        let mut doc = table_doc();
        doc.add_class("log-row-0", "inactive").unwrap();
        assert!(doc.get("log-row-0").unwrap().has_class("inactive"));
        doc.remove_class("log-row-0", "inactive").unwrap();
        assert!(!doc.get("log-row-0").unwrap().has_class("inactive"));

        doc.set_attribute("log-row-2", "src", "a.png").unwrap();
        assert_eq!(doc.get("log-row-2").unwrap().attribute("src"), Some("a.png"));
        assert_eq!(doc.elements_by_class("toggle-table"), vec!["table-log".to_string()]);
    }

    #[test]
    fn test_click_targets() {
        let mut doc = Document::new();
        doc.create("links", "div").unwrap();
        doc.append("links", "links-link-left", "a").unwrap().on_click(NavTarget::Left);
        assert_eq!(doc.click("links-link-left").unwrap(), Some(NavTarget::Left));
        assert_eq!(doc.click("links").unwrap(), None);
    }
}
