use crate::sections::{Align, IconGlyph, SectionTitle};
use crate::state::use_site;
use leptos::prelude::*;
use tatcg_core::content::{Icon, PRIVACY_SECTIONS, PRIVACY_UPDATED};

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="page privacy-page">
            <div class="container narrow">
                <SectionTitle
                    eyebrow=site.t("nav.privacy")
                    title=site.t("privacy.title")
                    subtitle=PRIVACY_UPDATED
                    align=Align::Left
                />
                <div class="panel">
                    <div class="panel-icon">
                        <IconGlyph icon=Icon::Shield />
                    </div>
                    {PRIVACY_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="policy-section">
                                    <h3>{section.title}</h3>
                                    <p>{section.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
