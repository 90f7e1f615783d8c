// TAT Consulting Group site - Leptos 0.8 CSR

mod boot;
mod pages;
mod sections;
mod state;
mod transport;

use leptos::prelude::*;
use pages::{ContactPage, HomePage, JobsPage, PrivacyPage, ServicesPage};
use sections::{Footer, Nav};
use state::SiteState;
use tatcg_core::catalog::Catalog;
use tatcg_core::{PageId, SiteConfig};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = boot::site_config();
    let locales = config.locale_config();

    let win = window();
    let path = win.location().pathname().unwrap_or_default();
    let preferred = win.navigator().language();
    let boot = boot::boot_locale(&locales, &path, preferred.as_deref());

    if let Some(url) = boot.replace_url.as_deref() {
        match win.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
                    tracing::warn!("could not rewrite URL to {}: {:?}", url, e);
                }
            }
            Err(e) => tracing::warn!("history unavailable: {:?}", e),
        }
    }
    if let Some(root) = document().document_element() {
        if let Err(e) = root.set_attribute("lang", &boot.locale) {
            tracing::warn!("could not set document lang to {}: {:?}", boot.locale, e);
        }
    }

    let catalog = boot::catalog_for(&locales, &boot.locale);
    tracing::info!(locale = %catalog.locale(), "mounting site");
    leptos::mount::mount_to_body(move || view! { <App config=config catalog=catalog /> });
}

#[component]
fn App(config: SiteConfig, catalog: Catalog) -> impl IntoView {
    let site = SiteState::new(config, catalog);
    provide_context(site);
    // Re-render the page only when the active page changes, not on chrome updates.
    let active = Memo::new(move |_| site.active_page());

    view! {
        <div class="site" data-locale=site.locale()>
            <Nav />
            <main class="site-main">
                {move || match active.get() {
                    PageId::Home => view! { <HomePage /> }.into_any(),
                    PageId::Services => view! { <ServicesPage /> }.into_any(),
                    PageId::Contact => view! { <ContactPage /> }.into_any(),
                    PageId::Jobs => view! { <JobsPage /> }.into_any(),
                    PageId::Privacy => view! { <PrivacyPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
