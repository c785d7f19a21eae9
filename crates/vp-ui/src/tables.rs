//! One-table-at-a-time switching for the listing pages

use tracing::debug;
use vp_dom::{Document, SharedDocument};

use crate::widget_utils::companion_id;
use crate::{UiError, HIGHLIGHT_CLASS, NULLABLE_TABLE_CLASS, TOGGLE_TABLE_CLASS};

/// Switches between the tables of a page.
///
/// Each table `T` comes with a `T-anchor` (the tab that selects it), a
/// `T-sorry` placeholder shown instead of an empty table, an optional
/// `T-paginator-links` row and an optional `T-body`.
pub struct TableSwitcher {
    doc: SharedDocument,
    tables: Vec<String>,
}

impl TableSwitcher {
    /// Collect every table carrying the toggle class
    pub fn new(doc: SharedDocument) -> Self {
        let tables = doc.read().elements_by_class(TOGGLE_TABLE_CLASS);
        debug!("Table switcher tracking {} tables", tables.len());
        Self { doc, tables }
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Show the table `table-{post}` and hide every other one
    pub fn reveal(&self, post: &str) -> Result<(), UiError> {
        let selected = format!("table-{}", post);
        let mut doc = self.doc.write();
        for table in &self.tables {
            style_table(&mut doc, table, *table == selected)?;
        }
        Ok(())
    }

    /// Hide nullable tables whose body has no rows
    pub fn nullify_empty(&self) -> Result<(), UiError> {
        let mut doc = self.doc.write();
        for table in doc.elements_by_class(NULLABLE_TABLE_CLASS) {
            let has_rows = body_rows(&doc, &table) > 0;
            style_table(&mut doc, &table, has_rows)?;
        }
        Ok(())
    }

    /// Append the row count of each table to its anchor text
    pub fn add_counts(&self) -> Result<(), UiError> {
        let mut doc = self.doc.write();
        for table in &self.tables {
            let rows = body_rows(&doc, table);
            let anchor = doc.element_mut(&companion_id(table, "anchor"))?;
            anchor.text = format!("{} ({})", anchor.text, rows);
        }
        Ok(())
    }
}

fn body_rows(doc: &Document, table: &str) -> usize {
    doc.child_count(&companion_id(table, "body")).unwrap_or(0)
}

/// Apply the visible / hidden styling of one table and its companions
fn style_table(doc: &mut Document, table: &str, visible: bool) -> Result<(), UiError> {
    let anchor = companion_id(table, "anchor");
    let sorry = companion_id(table, "sorry");
    let links = companion_id(table, "paginator-links");
    let has_links = doc.contains(&links);

    if visible {
        // header only: show the placeholder instead
        let empty = doc.child_count(table)? < 2;
        doc.set_visible(table, !empty)?;
        doc.set_visible(&sorry, empty)?;
        if has_links {
            doc.set_visible(&links, !empty)?;
        }
        doc.add_class(&anchor, HIGHLIGHT_CLASS)?;
    } else {
        doc.set_visible(table, false)?;
        doc.set_visible(&sorry, false)?;
        if has_links {
            doc.set_visible(&links, false)?;
        }
        doc.remove_class(&anchor, HIGHLIGHT_CLASS)?;
    }
    Ok(())
}
