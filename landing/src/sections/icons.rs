use leptos::prelude::*;
use tatcg_core::content::Icon;

/// Stroke paths (24x24 grid) for each glyph.
fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Building => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4M10 10h4M10 14h4M10 18h4",
        ],
        Icon::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
        Icon::GraduationCap => &[
            "M22 10 12 5 2 10l10 5 10-5Z",
            "M6 12v5c3 3 9 3 12 0v-5",
        ],
        Icon::Briefcase => &[
            "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2Z",
            "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
        ],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z"],
        Icon::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        Icon::Target => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z",
            "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12Z",
            "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z",
        ],
        Icon::BadgeCheck => &[
            "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
            "m9 12 2 2 4-4",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
            "m22 6-10 7L2 6",
        ],
        Icon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z",
        ],
        Icon::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z", "M12 6v6l4 2"],
        Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        Icon::Star => &[
            "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2Z",
        ],
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(icon).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
