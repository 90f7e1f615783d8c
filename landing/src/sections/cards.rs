// Cards shared by the home and services pages

use leptos::prelude::*;
use tatcg_core::PageId;
use tatcg_core::content::{CaseStudy, Metric, ServiceDescriptor};

use super::icons::IconGlyph;
use crate::state::use_site;

#[component]
pub fn ServicePreview(service: &'static ServiceDescriptor) -> impl IntoView {
    let site = use_site();
    view! {
        <article class="service-card">
            <div class="service-icon">
                <IconGlyph icon=service.icon />
            </div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-summary">{service.summary}</p>
            <ul class="service-details">
                {service
                    .preview_details()
                    .iter()
                    .map(|d| view! { <li>{*d}</li> })
                    .collect_view()}
            </ul>
            <button class="service-more" on:click=move |_| site.navigate(PageId::Services)>
                {site.t("home.learnMore")}
                " →"
            </button>
        </article>
    }
}

/// Full descriptor as laid out on the services page.
#[component]
pub fn ServiceDetail(service: &'static ServiceDescriptor) -> impl IntoView {
    view! {
        <article id=service.slug class="service-detail">
            <header class="service-detail-header">
                <div class="service-icon">
                    <IconGlyph icon=service.icon />
                </div>
                <h2 class="service-title">{service.title}</h2>
            </header>
            <p class="service-lead">{service.detail}</p>
            {service
                .highlights
                .iter()
                .map(|h| {
                    view! {
                        <div class="service-highlight">
                            {h.heading.map(|heading| view! { <h4>{heading}</h4> })}
                            {(!h.text.is_empty()).then(|| view! { <p>{h.text}</p> })}
                            {(!h.items.is_empty())
                                .then(|| {
                                    view! {
                                        <ul>
                                            {h.items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
                                        </ul>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
            <div class="pill-row">
                {service.details.iter().map(|d| view! { <span class="pill">{*d}</span> }).collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn MetricTile(metric: &'static Metric) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric-value">{metric.value}</span>
            <span class="metric-label">{metric.label}</span>
        </div>
    }
}

#[component]
pub fn CaseStudyCard(study: &'static CaseStudy) -> impl IntoView {
    view! {
        <article class="case-card">
            <span class="case-industry">{study.industry}</span>
            <h3 class="case-title">{study.title}</h3>
            <p class="case-outcome">{study.outcome}</p>
            <ul class="case-bullets">
                {study.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
            </ul>
        </article>
    }
}
