// Services page - every practice area in full
use crate::sections::{SectionTitle, ServiceDetail};
use crate::state::use_site;
use leptos::prelude::*;
use tatcg_core::PageId;
use tatcg_core::content::SERVICES;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="page services-page">
            <div class="container">
                <SectionTitle
                    eyebrow=site.t("nav.services")
                    title=site.t("home.servicesTitle")
                    subtitle=site.t("hero.lead")
                />
                {SERVICES.iter().map(|s| view! { <ServiceDetail service=s /> }).collect_view()}
                <div class="page-cta">
                    <button class="btn btn-primary" on:click=move |_| site.navigate(PageId::Contact)>
                        {site.t("hero.primary")}
                    </button>
                </div>
            </div>
        </section>
    }
}
