//! Listing view: the paginators and table switcher of one page

use tracing::{debug, info};
use vp_core::{PageContext, PageSubscriber, Paginator};
use vp_dom::SharedDocument;

use crate::tables::TableSwitcher;
use crate::UiError;

/// Owns every paginator on a page and routes link clicks to them
pub struct ListingView {
    doc: SharedDocument,
    switcher: TableSwitcher,
    paginators: Vec<Paginator<SharedDocument>>,
}

impl ListingView {
    /// Create a view over a document whose tables are already built
    pub fn new(doc: SharedDocument) -> Self {
        let switcher = TableSwitcher::new(doc.clone());
        Self {
            doc,
            switcher,
            paginators: Vec::new(),
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }

    pub fn switcher(&self) -> &TableSwitcher {
        &self.switcher
    }

    /// Register a paginator driving this view's document
    pub fn add_paginator(&mut self, paginator: Paginator<SharedDocument>) {
        debug!("Listing view: added paginator '{}'", paginator.link_div());
        self.paginators.push(paginator);
    }

    pub fn paginators(&self) -> &[Paginator<SharedDocument>] {
        &self.paginators
    }

    pub fn paginators_mut(&mut self) -> &mut [Paginator<SharedDocument>] {
        &mut self.paginators
    }

    /// Paginator rendering its links into `link_div`
    pub fn paginator(&self, link_div: &str) -> Option<&Paginator<SharedDocument>> {
        self.paginators.iter().find(|p| p.link_div() == link_div)
    }

    /// Build link rows and show the first page of every listing
    pub fn init(&mut self) -> Result<(), UiError> {
        for paginator in &mut self.paginators {
            paginator.init()?;
        }
        info!("Listing view initialised with {} paginators", self.paginators.len());
        Ok(())
    }

    /// Handle a click on a navigation link
    pub fn click(&mut self, element_id: &str) -> Result<(), UiError> {
        let (target, container) = {
            let doc = self.doc.read();
            let element = doc.element(element_id)?;
            (element.click_target(), element.parent().map(str::to_string))
        };
        let unbound = || UiError::UnboundLink(element_id.to_string());
        let target = target.ok_or_else(unbound)?;
        let container = container.ok_or_else(unbound)?;
        let paginator = self
            .paginators
            .iter_mut()
            .find(|p| p.link_div() == container)
            .ok_or_else(unbound)?;
        debug!("Click on '{}' resolved to {:?}", element_id, target);
        paginator.navigate(target)?;
        Ok(())
    }
}

/// Page subscriber writing every page change to the log
pub struct PageLogger;

impl PageSubscriber for PageLogger {
    fn on_page_change(&self, context: &PageContext) {
        info!(
            "'{}' now on page {} of {} ({} items per track)",
            context.link_div,
            context.current_page + 1,
            context.n_pages,
            context.length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_core::{PaginatorConfig, TargetSpec};
    use vp_dom::Document;

    use crate::widget_utils::{companion_id, ElementId};
    use crate::TOGGLE_TABLE_CLASS;

    fn view(rows: usize) -> ListingView {
        let mut doc = Document::new();
        doc.create("table-log", "table").unwrap().with_class(TOGGLE_TABLE_CLASS);
        doc.append("table-log", "table-log-body", "tbody").unwrap();
        let links = companion_id("table-log", "paginator-links");
        doc.create(&links, "div").unwrap();
        let mut specs = Vec::new();
        for i in 0..rows {
            let id = ElementId::new("table-log").row(i).build();
            doc.append("table-log-body", &id, "tr").unwrap();
            specs.push(TargetSpec::new(id));
        }
        let doc = SharedDocument::new(doc);
        let paginator = Paginator::from_tracks(
            vec![specs],
            links,
            PaginatorConfig::default().with_page_size(2),
            doc.clone(),
        )
        .unwrap();
        let mut view = ListingView::new(doc);
        view.add_paginator(paginator);
        view
    }

    #[test]
    fn test_click_routes_to_owning_paginator() {
        let mut view = view(5);
        view.init().unwrap();
        view.click("table-log-paginator-links-link-2").unwrap();
        let paginator = view.paginator("table-log-paginator-links").unwrap();
        assert_eq!(paginator.current_page(), 2);
        assert!(view.document().read().is_visible("table-log-row-4").unwrap());
        assert!(!view.document().read().is_visible("table-log-row-0").unwrap());

        view.click("table-log-paginator-links-link-left").unwrap();
        assert_eq!(view.paginators()[0].current_page(), 1);
    }

    #[test]
    fn test_click_on_plain_element_is_rejected() {
        let mut view = view(5);
        view.init().unwrap();
        assert!(matches!(view.click("table-log-row-0"), Err(UiError::UnboundLink(_))));
        assert!(matches!(view.click("missing"), Err(UiError::Dom(_))));
    }

    #[test]
    fn test_switcher_sees_tables() {
        let view = view(1);
        assert_eq!(view.switcher().tables(), &["table-log"]);
    }
}
