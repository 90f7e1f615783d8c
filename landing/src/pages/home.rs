// Home page - hero, proof points, service previews, case studies
use crate::sections::{
    Align, CaseStudyCard, IconGlyph, MetricTile, SectionTitle, ServicePreview, Testimonials,
};
use crate::state::use_site;
use leptos::prelude::*;
use tatcg_core::PageId;
use tatcg_core::content::{
    CAPABILITIES, CASE_STUDIES, ENGAGEMENT_STEPS, INDUSTRIES, Icon, METRICS, SERVICES,
    VALUE_POINTS,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <ValueGrid />
        <Testimonials />
        <ServicesPreview />
        <CaseStudies />
        <ConversionCta />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <p class="hero-badge">{site.t("hero.eyebrow")}</p>
                    <h1 class="hero-title">{site.t("hero.title")}</h1>
                    <p class="hero-description">{site.t("hero.lead")}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" on:click=move |_| site.navigate(PageId::Contact)>
                            {site.t("hero.primary")}
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| site.navigate(PageId::Services)>
                            {site.t("hero.secondary")}
                        </button>
                    </div>
                    <div class="pill-row">
                        {CAPABILITIES.iter().map(|c| view! { <span class="pill">{*c}</span> }).collect_view()}
                    </div>
                </div>
                <div class="hero-metrics">
                    {METRICS.iter().map(|m| view! { <MetricTile metric=m /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ValueGrid() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="value">
            <div class="container">
                <SectionTitle eyebrow="TAT" title=site.t("home.valueTitle") />
                <div class="value-grid">
                    {VALUE_POINTS
                        .iter()
                        .map(|point| {
                            view! {
                                <div class="value-point">
                                    <IconGlyph icon=Icon::BadgeCheck />
                                    <span>{*point}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="industry-row">
                    {INDUSTRIES.iter().map(|i| view! { <span class="industry">{*i}</span> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesPreview() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="services-preview">
            <div class="container">
                <SectionTitle eyebrow=site.t("nav.services") title=site.t("home.servicesTitle") />
                <div class="services-grid">
                    {SERVICES.iter().map(|s| view! { <ServicePreview service=s /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CaseStudies() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="cases">
            <div class="container">
                <SectionTitle eyebrow="Impact" title=site.t("home.casesTitle") align=Align::Left />
                <div class="cases-grid">
                    {CASE_STUDIES.iter().map(|c| view! { <CaseStudyCard study=c /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ConversionCta() -> impl IntoView {
    let site = use_site();
    view! {
        <section class="cta">
            <div class="container cta-inner">
                <div>
                    <h2 class="cta-title">{site.t("home.ctaTitle")}</h2>
                    <p class="cta-body">{site.t("home.ctaBody")}</p>
                </div>
                <ol class="cta-steps">
                    {ENGAGEMENT_STEPS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                </ol>
                <button class="btn btn-primary" on:click=move |_| site.navigate(PageId::Contact)>
                    {site.t_or("nav.engage", "Engage Us")}
                </button>
            </div>
        </section>
    }
}
