//! Application state shared through Leptos context.

use leptos::prelude::*;
use tatcg_core::catalog::Catalog;
use tatcg_core::{
    ContactForm, FormStore, NavigationEffect, NavigationState, PageId, SiteConfig, SubmissionFlow,
};

use crate::transport::{BrowserDelay, FetchTransport};

/// Everything the shell and pages read or mutate. `Copy`, so handlers can
/// capture it freely.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub nav: RwSignal<NavigationState>,
    pub form: RwSignal<ContactForm>,
    config: StoredValue<SiteConfig>,
    catalog: StoredValue<Catalog>,
}

impl SiteState {
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            nav: RwSignal::new(NavigationState::new()),
            form: RwSignal::new(ContactForm::new()),
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn locale(&self) -> String {
        self.catalog.with_value(|c| c.locale().to_string())
    }

    /// Catalog lookup; a missing key renders as itself.
    pub fn t(&self, key: &str) -> String {
        self.catalog.with_value(|c| c.text(key).to_string())
    }

    /// Catalog lookup with a literal default.
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.catalog.with_value(|c| c.text_or(key, fallback).to_string())
    }

    pub fn config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn navigate(&self, page: PageId) {
        if let Some(effect) = self.nav.try_update(|nav| nav.navigate(page)) {
            perform(effect);
        }
    }

    /// Selection from the mobile menu also closes it.
    pub fn navigate_from_menu(&self, page: PageId) {
        if let Some(effect) = self.nav.try_update(|nav| nav.navigate_from_menu(page)) {
            perform(effect);
        }
    }

    pub fn active_page(&self) -> PageId {
        self.nav.with(|nav| nav.active)
    }

    pub fn submission_flow(&self) -> SubmissionFlow<FetchTransport, BrowserDelay> {
        let (endpoint, policy) = self.config(|c| (c.contact.endpoint.clone(), c.submission_policy()));
        SubmissionFlow::new(FetchTransport::new(endpoint), BrowserDelay, policy)
    }
}

pub fn use_site() -> SiteState {
    expect_context::<SiteState>()
}

fn perform(effect: NavigationEffect) {
    match effect {
        NavigationEffect::ScrollToTop => {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// [`FormStore`] over the form signal. Once the reactive owner is disposed
/// `try_update` yields `None` and an in-flight submission detaches.
#[derive(Clone, Copy)]
pub struct SignalFormStore(pub RwSignal<ContactForm>);

impl FormStore for SignalFormStore {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
