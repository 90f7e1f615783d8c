use leptos::prelude::*;
use tatcg_core::content::{
    COMPANY_LEGAL_NAME, COMPANY_NAME, CONTACT, Icon, MENU, OFFICES, REGIONS,
};

use super::icons::IconGlyph;
use crate::state::use_site;

fn copyright(year: u32, rights: &str) -> String {
    format!("© {year} {COMPANY_LEGAL_NAME} {rights}")
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">"TAT"</span>
                    <span class="footer-title">{COMPANY_NAME}</span>
                    <p class="footer-tagline">{site.t("footer.tagline")}</p>
                    <p class="footer-regions">{REGIONS}</p>
                </div>

                <div class="footer-links">
                    {MENU
                        .iter()
                        .map(|item| {
                            let page = item.page;
                            view! {
                                <button class="footer-link" on:click=move |_| site.navigate(page)>
                                    {site.t_or(page.label_key(), item.label)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-offices">
                    {OFFICES
                        .iter()
                        .map(|office| {
                            view! {
                                <address class="footer-office">
                                    <IconGlyph icon=Icon::MapPin />
                                    <strong>{office.country}</strong>
                                    <span>{office.address}</span>
                                    <span>{office.street}</span>
                                </address>
                            }
                        })
                        .collect_view()}
                    <a class="footer-link" href=format!("mailto:{}", CONTACT.email)>
                        <IconGlyph icon=Icon::Mail />
                        {CONTACT.email}
                    </a>
                </div>
            </div>
            <p class="footer-copyright">{copyright(year, &site.t("footer.rights"))}</p>
        </footer>
    }
}
