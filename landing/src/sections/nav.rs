use leptos::prelude::*;
use tatcg_core::content::{COMPANY_NAME, COMPANY_TAGLINE, MENU};
use tatcg_core::{NavigationState, PageId};

use crate::state::use_site;

fn link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "nav nav-scrolled" } else { "nav" }
}

#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();
    let threshold = site.config(|c| c.chrome.scroll_threshold_px);

    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        site.nav.maybe_update(|nav| nav.observe_scroll(offset, threshold));
    });
    on_cleanup(move || scroll.remove());

    let menu_open = move || site.nav.with(|nav| nav.mobile_menu_open);
    let engage = site.t_or("nav.engage", "Engage Us");
    let engage_drawer = engage.clone();

    view! {
        <header class=move || header_class(site.nav.with(|nav| nav.scrolled))>
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| site.navigate(PageId::Home)>
                    <span class="nav-logo">"TAT"</span>
                    <span class="nav-brand-text">
                        <span class="nav-title">{COMPANY_NAME}</span>
                        <span class="nav-tagline">{COMPANY_TAGLINE}</span>
                    </span>
                </button>

                <nav class="nav-links">
                    {MENU
                        .iter()
                        .map(|item| {
                            let page = item.page;
                            view! {
                                <button
                                    class=move || link_class(site.nav.with(|nav| nav.is_active(page)))
                                    on:click=move |_| site.navigate(page)
                                >
                                    {site.t_or(page.label_key(), item.label)}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="nav-cta" on:click=move |_| site.navigate(PageId::Contact)>
                        {engage}
                    </button>
                </nav>

                <button
                    class="nav-toggle"
                    aria-label=site.t_or("nav.menu", "Toggle navigation")
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| site.nav.update(NavigationState::toggle_mobile_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav-drawer">
                    {MENU
                        .iter()
                        .map(|item| {
                            let page = item.page;
                            view! {
                                <button
                                    class=move || link_class(site.nav.with(|nav| nav.is_active(page)))
                                    on:click=move |_| site.navigate_from_menu(page)
                                >
                                    {site.t_or(page.label_key(), item.label)}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="nav-cta"
                        on:click=move |_| site.navigate_from_menu(PageId::Contact)
                    >
                        {engage_drawer.clone()}
                    </button>
                </div>
            </Show>
        </header>
    }
}
