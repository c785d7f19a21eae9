//! Listing files: the JSON description of a page's tables

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use vp_core::{AttrValue, Paginator, PaginatorConfig, TargetSpec};
use vp_dom::{toggle_visibility, Document, SharedDocument, Visibility};
use vp_ui::{companion_id, ElementId, ListingView, NULLABLE_TABLE_CLASS, TOGGLE_TABLE_CLASS};

/// Whole listing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFile {
    /// Table shown when the page loads (`table-{default_table}`)
    pub default_table: Option<String>,

    pub tables: Vec<TableSpec>,
}

/// One switchable, paginated table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Short name; the table element is `table-{name}`
    pub name: String,

    /// Anchor text
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub paginator: PaginatorConfig,

    /// Hide the table entirely, placeholder included, when it has no rows
    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub rows: Vec<RowSpec>,

    /// Caption track paginated in lockstep with the rows
    #[serde(default)]
    pub captions: Vec<RowSpec>,
}

/// A row (or caption) and the attributes applied when its page is first shown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSpec {
    pub text: String,

    #[serde(default)]
    pub attributes: Vec<(String, AttrValue)>,
}

impl ListingFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse listing {:?}", path))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl TableSpec {
    pub fn element_id(&self) -> String {
        format!("table-{}", self.name)
    }

    pub fn link_div(&self) -> String {
        companion_id(self.element_id(), "paginator-links")
    }
}

/// Build the document and a listing view with one paginator per table
pub fn build_view(listing: &ListingFile) -> Result<ListingView> {
    let mut doc = Document::new();
    let mut tracks = Vec::with_capacity(listing.tables.len());
    for table in &listing.tables {
        tracks.push(build_table(&mut doc, table)?);
    }

    let doc = SharedDocument::new(doc);
    let mut view = ListingView::new(doc.clone());
    for (table, table_tracks) in listing.tables.iter().zip(tracks) {
        let paginator = Paginator::from_tracks(table_tracks, table.link_div(), table.paginator, doc.clone())
            .with_context(|| format!("Invalid table '{}'", table.name))?;
        info!(
            "Table '{}': {} rows over {} pages",
            table.name,
            paginator.length(),
            paginator.n_pages()
        );
        view.add_paginator(paginator);
    }
    Ok(view)
}

fn build_table(doc: &mut Document, table: &TableSpec) -> Result<Vec<Vec<TargetSpec>>> {
    let id = table.element_id();
    let title = table.title.clone().unwrap_or_else(|| table.name.clone());

    doc.create(&companion_id(&id, "anchor"), "a")?.with_text(title);
    let element = doc.create(&id, "table")?.with_class(TOGGLE_TABLE_CLASS);
    if table.nullable {
        element.with_class(NULLABLE_TABLE_CLASS);
    }
    doc.append(&id, &companion_id(&id, "head"), "thead")?;
    // no body at all for an empty table, so it counts as header-only
    let body = companion_id(&id, "body");
    if !table.rows.is_empty() {
        doc.append(&id, &body, "tbody")?;
    }
    let sorry = doc.create(&companion_id(&id, "sorry"), "p")?.with_text("No entries.");
    sorry.hidden = true;
    doc.create(&table.link_div(), "div")?;

    let mut tracks = vec![add_rows(doc, &body, &id, "row", &table.rows)?];
    if !table.captions.is_empty() {
        let captions = companion_id(&id, "captions");
        doc.create(&captions, "div")?;
        tracks.push(add_rows(doc, &captions, &id, "caption", &table.captions)?);
    }
    Ok(tracks)
}

/// Flip the visibility of each listed element
pub fn apply_toggles(view: &ListingView, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    toggle_visibility(&mut view.document().write(), ids, Visibility::Toggle)
        .context("Toggle failed")?;
    info!("Toggled {} elements", ids.len());
    Ok(())
}

fn add_rows(
    doc: &mut Document,
    parent: &str,
    table_id: &str,
    kind: &str,
    rows: &[RowSpec],
) -> Result<Vec<TargetSpec>> {
    let mut specs = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_id = ElementId::new(table_id).with(kind).with(idx).build();
        doc.append(parent, &row_id, "tr")?.with_text(row.text.as_str());
        specs.push(TargetSpec {
            node_id: row_id,
            attributes: row.attributes.clone(),
        });
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "default_table": "pending",
        "tables": [
            {
                "name": "pending",
                "title": "Pending requests",
                "paginator": {"page_size": 2},
                "rows": [
                    {"text": "image 1", "attributes": [["data-src", "1.png"]]},
                    {"text": "image 2"},
                    {"text": "image 3"}
                ],
                "captions": [
                    {"text": "first"},
                    {"text": "second"},
                    {"text": "third"}
                ]
            },
            {"name": "log"}
        ]
    }"#;

    #[test]
    fn test_build_view_from_json() {
        let listing = ListingFile::from_json(LISTING).unwrap();
        let mut view = build_view(&listing).unwrap();
        view.init().unwrap();

        let pending = view.paginator("table-pending-paginator-links").unwrap();
        assert_eq!(pending.n_pages(), 2);
        assert_eq!(pending.page(0).unwrap().len(), 4);
        assert_eq!(view.paginator("table-log-paginator-links").unwrap().n_pages(), 0);

        let doc = view.document().read();
        assert_eq!(doc.get("table-pending-row-0").unwrap().attribute("data-src"), Some("1.png"));
        assert!(doc.is_visible("table-pending-caption-1").unwrap());
        assert!(!doc.is_visible("table-pending-caption-2").unwrap());
        assert_eq!(doc.get("table-pending-anchor").unwrap().text, "Pending requests");
        assert_eq!(view.switcher().tables(), &["table-pending", "table-log"]);
    }

    #[test]
    fn test_mismatched_captions_rejected() {
        let listing = ListingFile::from_json(
            r#"{"tables": [{"name": "t", "rows": [{"text": "a"}, {"text": "b"}], "captions": [{"text": "c"}]}]}"#,
        )
        .unwrap();
        let err = build_view(&listing).err().unwrap();
        assert!(format!("{:#}", err).contains("all target arrays must have the same length"));
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let listing = ListingFile::from_json(
            r#"{"tables": [{"name": "pending", "rows": [{"text": "a"}]}, {"name": "log"}]}"#,
        )
        .unwrap();
        let mut view = build_view(&listing).unwrap();
        view.init().unwrap();
        view.switcher().reveal("log").unwrap();

        let doc = view.document().read();
        assert!(!doc.contains("table-log-body"));
        assert!(!doc.is_visible("table-log").unwrap());
        assert!(doc.is_visible("table-log-sorry").unwrap());
        assert!(!doc.is_visible("table-pending").unwrap());
    }

    #[test]
    fn test_nullable_empty_table_is_hidden() {
        let listing = ListingFile::from_json(
            r#"{"tables": [
                {"name": "ccu-0", "nullable": true},
                {"name": "ccu-1", "nullable": true, "rows": [{"text": "a"}]}
            ]}"#,
        )
        .unwrap();
        let mut view = build_view(&listing).unwrap();
        view.init().unwrap();
        view.switcher().nullify_empty().unwrap();

        let doc = view.document().read();
        assert!(doc.get("table-ccu-0").unwrap().has_class(NULLABLE_TABLE_CLASS));
        assert!(!doc.is_visible("table-ccu-0").unwrap());
        assert!(!doc.is_visible("table-ccu-0-sorry").unwrap());
        assert!(doc.is_visible("table-ccu-1").unwrap());
    }

    #[test]
    fn test_apply_toggles() {
        let listing = ListingFile::from_json(r#"{"tables": [{"name": "log"}]}"#).unwrap();
        let view = build_view(&listing).unwrap();
        assert!(!view.document().read().is_visible("table-log-sorry").unwrap());
        apply_toggles(&view, &["table-log-sorry".to_string()]).unwrap();
        assert!(view.document().read().is_visible("table-log-sorry").unwrap());
        assert!(apply_toggles(&view, &["missing".to_string()]).is_err());
    }
}
