//! Page selection and chrome state.
//!
//! Pages are not deep-linkable: the active page lives only in memory and
//! starts at [`PageId::Home`] on every load.

use std::fmt;

/// Scroll offset (px) past which the nav bar switches to its raised style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 40.0;

/// The five pages the shell can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    #[default]
    Home,
    Services,
    Contact,
    Jobs,
    Privacy,
}

impl PageId {
    /// Menu order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Services,
        PageId::Contact,
        PageId::Jobs,
        PageId::Privacy,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Services => "services",
            PageId::Contact => "contact",
            PageId::Jobs => "jobs",
            PageId::Privacy => "privacy",
        }
    }

    /// Map a raw page id to a page. Anything unrecognised lands on home, so a
    /// lookup can never produce an empty view.
    pub fn from_id(id: &str) -> PageId {
        match id {
            "services" => PageId::Services,
            "contact" => PageId::Contact,
            "jobs" => PageId::Jobs,
            "privacy" => PageId::Privacy,
            _ => PageId::Home,
        }
    }

    /// Catalog key for the menu label.
    pub const fn label_key(self) -> &'static str {
        match self {
            PageId::Home => "nav.home",
            PageId::Services => "nav.services",
            PageId::Contact => "nav.contact",
            PageId::Jobs => "nav.jobs",
            PageId::Privacy => "nav.privacy",
        }
    }

    /// Label used when the catalog has no entry.
    pub const fn default_label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Services => "Services",
            PageId::Contact => "Contact",
            PageId::Jobs => "Careers",
            PageId::Privacy => "Privacy",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side effect the shell must perform after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationEffect {
    /// Reset the viewport to the top of the document.
    ScrollToTop,
}

/// Which page is showing, plus the bits of chrome that depend on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub active: PageId,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `page` active. Does not touch the mobile menu; callers navigating
    /// from inside it use [`navigate_from_menu`](Self::navigate_from_menu).
    pub fn navigate(&mut self, page: PageId) -> NavigationEffect {
        if self.active != page {
            tracing::debug!(from = %self.active, to = %page, "navigate");
        }
        self.active = page;
        NavigationEffect::ScrollToTop
    }

    pub fn navigate_to_id(&mut self, id: &str) -> NavigationEffect {
        self.navigate(PageId::from_id(id))
    }

    /// Navigate and close the mobile menu in one step.
    pub fn navigate_from_menu(&mut self, page: PageId) -> NavigationEffect {
        self.mobile_menu_open = false;
        self.navigate(page)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Record the current vertical scroll offset. Returns `true` when the
    /// `scrolled` flag flipped.
    pub fn observe_scroll(&mut self, offset_y: f64, threshold: f64) -> bool {
        let scrolled = offset_y > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }
}
