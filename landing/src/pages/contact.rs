// Contact page - lead form plus office and direct-contact details
use crate::sections::{IconGlyph, SectionTitle};
use crate::state::{SignalFormStore, use_site};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tatcg_core::content::{CONTACT, Icon, OFFICES, SERVICE_INTERESTS};
use tatcg_core::{ContactField, ContactForm, SubmissionStatus, SubmitReport};

/// Which banner, if any, a status shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Banner {
    Success,
    Error,
}

fn banner(status: &SubmissionStatus) -> Option<Banner> {
    match status {
        SubmissionStatus::Success => Some(Banner::Success),
        SubmissionStatus::Error(_) => Some(Banner::Error),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "field-input invalid" } else { "field-input" }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_site();
    let form = site.form;

    let submitting = move || form.with(ContactForm::is_submitting);
    let send_label = site.t("contact.send");
    let sending_label = site.t("contact.sending");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }
        let flow = site.submission_flow();
        let store = SignalFormStore(form);
        spawn_local(async move {
            match flow.run(&store).await {
                SubmitReport::Concluded { status, .. } => {
                    tracing::debug!(?status, "contact banner cleared")
                }
                SubmitReport::Invalid(errors) => {
                    tracing::debug!(fields = errors.len(), "contact form has errors")
                }
                SubmitReport::InFlight | SubmitReport::Detached => {}
            }
        });
    };

    view! {
        <section class="page contact-page">
            <div class="container contact-grid">
                <div class="contact-main">
                    <SectionTitle
                        eyebrow=site.t("nav.contact")
                        title=site.t("contact.title")
                        subtitle=site.t("contact.lead")
                        align=crate::sections::Align::Left
                    />

                    {move || {
                        form.with(|f| banner(f.status()))
                            .map(|b| match b {
                                Banner::Success => {
                                    view! {
                                        <div class="banner banner-success" role="status">
                                            {site.t("contact.success")}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Banner::Error => {
                                    view! {
                                        <div class="banner banner-error" role="alert">
                                            {site.t("contact.error")}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}

                    <form class="contact-form" novalidate=true on:submit=on_submit>
                        <div class="field-row">
                            <TextField field=ContactField::Name label=site.t("contact.name") kind="text" required=true />
                            <TextField field=ContactField::Email label=site.t("contact.email") kind="email" required=true />
                        </div>
                        <div class="field-row">
                            <TextField field=ContactField::Phone label=site.t("contact.phone") kind="tel" />
                            <TextField field=ContactField::Company label=site.t("contact.company") kind="text" />
                        </div>
                        <InterestSelect label=site.t("contact.serviceInterest") />
                        <MessageField label=site.t("contact.message") />

                        <button type="submit" class="btn btn-primary" disabled=submitting>
                            <IconGlyph icon=Icon::Send />
                            {move || if submitting() { sending_label.clone() } else { send_label.clone() }}
                        </button>
                    </form>
                </div>

                <aside class="contact-aside">
                    <h3>{site.t("contact.offices")}</h3>
                    {OFFICES
                        .iter()
                        .map(|office| {
                            view! {
                                <address class="office">
                                    <IconGlyph icon=Icon::MapPin />
                                    <strong>{office.country}</strong>
                                    <span>{office.address}</span>
                                    <span>{office.street}</span>
                                </address>
                            }
                        })
                        .collect_view()}
                    <div class="contact-direct">
                        <a href=format!("mailto:{}", CONTACT.email)>
                            <IconGlyph icon=Icon::Mail />
                            {CONTACT.email}
                        </a>
                        <p>
                            <IconGlyph icon=Icon::Clock />
                            {site.t("contact.hours")} ": " {CONTACT.hours}
                        </p>
                        <p>{site.t("contact.response")} ": " {CONTACT.response_window}</p>
                    </div>
                </aside>
            </div>
        </section>
    }
}

fn error_for(form: RwSignal<ContactForm>, field: ContactField) -> impl Fn() -> Option<String> + Copy {
    move || form.with(|f| f.errors().message(field))
}

#[component]
fn TextField(
    field: ContactField,
    label: String,
    kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let form = use_site().form;
    let error = error_for(form, field);
    let id = format!("contact-{field}");
    let id_for = id.clone();

    view! {
        <label class="field" for=id_for>
            <span class="field-label">{label} {required.then_some(" *")}</span>
            <input
                id=id
                name=field.as_str()
                type=kind
                class=move || input_class(error().is_some())
                prop:value=move || form.with(|f| f.draft().field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

#[component]
fn InterestSelect(label: String) -> impl IntoView {
    let form = use_site().form;
    let field = ContactField::ServiceInterest;

    view! {
        <label class="field" for="contact-serviceInterest">
            <span class="field-label">{label}</span>
            <select
                id="contact-serviceInterest"
                name=field.as_str()
                class="field-input"
                prop:value=move || form.with(|f| f.draft().field(field).to_string())
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            >
                {SERVICE_INTERESTS
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn MessageField(label: String) -> impl IntoView {
    let form = use_site().form;
    let field = ContactField::Message;
    let error = error_for(form, field);

    view! {
        <label class="field" for="contact-message">
            <span class="field-label">{label} " *"</span>
            <textarea
                id="contact-message"
                name=field.as_str()
                rows="6"
                class=move || input_class(error().is_some())
                prop:value=move || form.with(|f| f.draft().field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
            {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}
