//! Shared document handle implementing the paginator host

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;
use vp_core::{AttrValue, NavLink, PageHost, INACTIVE_LINK_CLASS};

use crate::document::Document;
use crate::DomError;

/// A document shared between paginators and other page components
#[derive(Clone, Default)]
pub struct SharedDocument {
    inner: Arc<RwLock<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Document> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Document> {
        self.inner.write()
    }

    fn apply(&self, op: &str, result: Result<(), DomError>) {
        if let Err(e) = result {
            warn!("{} skipped: {}", op, e);
        }
    }
}

impl PageHost for SharedDocument {
    fn set_attribute(&mut self, node_id: &str, attribute: &str, value: &AttrValue) {
        let result = self.write().set_attribute(node_id, attribute, value.to_string());
        self.apply("set_attribute", result);
    }

    fn set_visible(&mut self, node_id: &str, visible: bool) {
        let result = self.write().set_visible(node_id, visible);
        self.apply("set_visible", result);
    }

    fn append_link(&mut self, container: &str, link: &NavLink) {
        let mut doc = self.write();
        let result = doc.append(container, &link.id, "a").map(|element| {
            element.with_text(link.label.as_str()).on_click(link.target);
            if let Some(class) = link.class() {
                element.with_class(class);
            }
        });
        drop(doc);
        self.apply("append_link", result);
    }

    fn link_children(&self, container: &str) -> Vec<String> {
        match self.read().children(container) {
            Ok(children) => children.to_vec(),
            Err(e) => {
                warn!("link_children: {}", e);
                Vec::new()
            }
        }
    }

    fn set_link_visible(&mut self, link_id: &str, visible: bool) {
        let result = self.write().set_visible(link_id, visible);
        self.apply("set_link_visible", result);
    }

    fn set_link_inactive(&mut self, link_id: &str, inactive: bool) {
        let mut doc = self.write();
        let result = if inactive {
            doc.add_class(link_id, INACTIVE_LINK_CLASS)
        } else {
            doc.remove_class(link_id, INACTIVE_LINK_CLASS)
        };
        drop(doc);
        self.apply("set_link_inactive", result);
    }
}
