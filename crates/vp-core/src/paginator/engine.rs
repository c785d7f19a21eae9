//! Paginator implementation

use std::sync::{Arc, Weak};

use ahash::AHashSet;
use tracing::debug;

use super::{NavLink, NavTarget, PageContext, PageHost, PageSubscriber};
use crate::config::PaginatorConfig;
use crate::pages::{split_into_pages, total_pages};
use crate::target::{TargetSet, TargetSpec};
use crate::window::link_window;
use crate::PaginationError;

/// Shows one page of target specs at a time and drives its link row
pub struct Paginator<H: PageHost> {
    length: usize,
    page_size: usize,
    n_pages: usize,
    pages: Vec<Vec<TargetSpec>>,
    current_page: usize,
    pages_populated: AHashSet<usize>,
    link_div: String,
    max_links: usize,
    host: H,
    subscribers: Vec<Weak<dyn PageSubscriber>>,
}

impl<H: PageHost> Paginator<H> {
    /// Create a paginator over a validated target set
    pub fn new(
        targets: TargetSet,
        link_div: impl Into<String>,
        config: PaginatorConfig,
        host: H,
    ) -> Result<Self, PaginationError> {
        if config.page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let length = targets.len();
        let n_pages = total_pages(length, config.page_size);
        let pages = split_into_pages(targets.tracks(), config.page_size);
        let link_div = link_div.into();

        debug!(
            "Paginator '{}': {} items per track across {} tracks, {} pages of {}",
            link_div,
            length,
            targets.tracks().len(),
            n_pages,
            config.page_size
        );

        Ok(Self {
            length,
            page_size: config.page_size,
            n_pages,
            pages,
            current_page: config.current_page,
            pages_populated: AHashSet::new(),
            link_div,
            max_links: config.max_links,
            host,
            subscribers: Vec::new(),
        })
    }

    /// Validate raw tracks and create a paginator over them
    pub fn from_tracks(
        tracks: Vec<Vec<TargetSpec>>,
        link_div: impl Into<String>,
        config: PaginatorConfig,
        host: H,
    ) -> Result<Self, PaginationError> {
        Self::new(TargetSet::new(tracks)?, link_div, config, host)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn n_pages(&self) -> usize {
        self.n_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn link_div(&self) -> &str {
        &self.link_div
    }

    pub fn max_links(&self) -> usize {
        self.max_links
    }

    pub fn pages(&self) -> &[Vec<TargetSpec>] {
        &self.pages
    }

    pub fn page(&self, page: usize) -> Option<&[TargetSpec]> {
        self.pages.get(page).map(Vec::as_slice)
    }

    /// Whether a page's attributes have already been applied
    pub fn is_populated(&self, page: usize) -> bool {
        self.pages_populated.contains(&page)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Add a subscriber notified after every reveal
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn PageSubscriber>) {
        self.subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Apply the current page's attributes, once per page
    pub fn populate(&mut self) {
        let page = self.current_page;
        if self.pages_populated.contains(&page) {
            return;
        }
        let Some(specs) = self.pages.get(page) else {
            return;
        };
        for spec in specs {
            for (attribute, value) in &spec.attributes {
                self.host.set_attribute(&spec.node_id, attribute, value);
            }
        }
        self.pages_populated.insert(page);
        debug!("Paginator '{}': populated page {}", self.link_div, page);
    }

    /// Make exactly one page visible and update the link row
    pub fn reveal(&mut self, page_number: usize) -> Result<(), PaginationError> {
        if self.current_page == page_number && self.pages_populated.contains(&page_number) {
            return Ok(());
        }
        if page_number >= self.n_pages {
            return Err(PaginationError::PageOutOfRange {
                page: page_number,
                n_pages: self.n_pages,
            });
        }

        if self.n_pages > 1 {
            for target in [NavTarget::Page(self.current_page), NavTarget::Left, NavTarget::Right] {
                let id = target.link_id(&self.link_div);
                self.host.set_link_inactive(&id, false);
            }
        }

        self.current_page = page_number;
        self.populate();

        for (index, page) in self.pages.iter().enumerate() {
            let visible = index == self.current_page;
            for spec in page {
                self.host.set_visible(&spec.node_id, visible);
            }
        }

        self.reveal_links();

        if self.n_pages > 1 {
            let current = NavTarget::Page(self.current_page).link_id(&self.link_div);
            self.host.set_link_inactive(&current, true);
            if self.current_page == self.n_pages - 1 {
                let right = NavTarget::Right.link_id(&self.link_div);
                self.host.set_link_inactive(&right, true);
            } else if self.current_page == 0 {
                let left = NavTarget::Left.link_id(&self.link_div);
                self.host.set_link_inactive(&left, true);
            }
        }

        debug!(
            "Paginator '{}': revealed page {} of {}",
            self.link_div, self.current_page, self.n_pages
        );
        self.notify_subscribers();
        Ok(())
    }

    /// Page a navigation target leads to from the current page
    pub fn resolve(&self, target: NavTarget) -> usize {
        match target {
            NavTarget::Left => self.current_page.saturating_sub(1),
            NavTarget::Page(page) => page,
            NavTarget::Right => (self.current_page + 1).min(self.n_pages.saturating_sub(1)),
        }
    }

    /// Follow a navigation link
    pub fn navigate(&mut self, target: NavTarget) -> Result<(), PaginationError> {
        let page = self.resolve(target);
        self.reveal(page)
    }

    /// Build the link row if needed and show the initial page
    pub fn init(&mut self) -> Result<(), PaginationError> {
        if self.n_pages == 0 {
            debug!("Paginator '{}': nothing to paginate", self.link_div);
            return Ok(());
        }
        if self.n_pages > 1 {
            self.build_links();
        }
        self.reveal(self.current_page)
    }

    fn build_links(&mut self) {
        let targets = std::iter::once(NavTarget::Left)
            .chain((0..self.n_pages).map(NavTarget::Page))
            .chain(std::iter::once(NavTarget::Right));
        for target in targets {
            let link = NavLink::new(&self.link_div, target);
            self.host.append_link(&self.link_div, &link);
        }
    }

    fn reveal_links(&mut self) {
        let children = self.host.link_children(&self.link_div);
        let window = link_window(self.current_page, children.len(), self.max_links);
        for (id, visible) in children.iter().zip(window) {
            self.host.set_link_visible(id, visible);
        }
    }

    /// Current state as handed to subscribers
    pub fn context(&self) -> PageContext {
        PageContext {
            link_div: self.link_div.clone(),
            current_page: self.current_page,
            n_pages: self.n_pages,
            length: self.length,
        }
    }

    fn notify_subscribers(&mut self) {
        let context = self.context();

        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in self.subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_page_change(&context);
            }
        }
    }
}
