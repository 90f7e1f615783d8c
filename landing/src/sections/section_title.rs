use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Center => "section-header",
            Align::Left => "section-header section-header-left",
        }
    }
}

#[component]
pub fn SectionTitle(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] align: Align,
) -> impl IntoView {
    view! {
        <div class=align.class()>
            <p class="section-eyebrow">{eyebrow}</p>
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-description">{s}</p> })}
        </div>
    }
}
