use crate::sections::{Align, IconGlyph, SectionTitle};
use crate::state::use_site;
use leptos::prelude::*;
use tatcg_core::PageId;
use tatcg_core::content::{CONTACT, Icon};

#[component]
pub fn JobsPage() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="page jobs-page">
            <div class="container narrow">
                <SectionTitle
                    eyebrow=site.t("nav.jobs")
                    title=site.t("jobs.title")
                    subtitle=site.t("jobs.lead")
                    align=Align::Left
                />
                <div class="panel">
                    <div class="panel-icon">
                        <IconGlyph icon=Icon::Briefcase />
                    </div>
                    <p class="panel-note">{site.t("jobs.none")}</p>
                    <p>{site.t("jobs.apply")}</p>
                    <a class="panel-link" href=format!("mailto:{}", CONTACT.email)>
                        <IconGlyph icon=Icon::Mail />
                        {CONTACT.email}
                    </a>
                    <div class="panel-actions">
                        <button class="btn btn-primary" on:click=move |_| site.navigate(PageId::Contact)>
                            {site.t("nav.contact")}
                            " →"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
