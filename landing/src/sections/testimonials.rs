use leptos::prelude::*;
use tatcg_core::content::{TESTIMONIALS, TestimonialRotation};

use crate::state::use_site;

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

/// Cycles through client quotes. The timer lives as long as the component.
#[component]
pub fn Testimonials() -> impl IntoView {
    let site = use_site();
    let rotation = RwSignal::new(TestimonialRotation::default());
    let every = site.config(|c| c.testimonial_interval());

    match set_interval_with_handle(
        move || {
            rotation.update(|r| {
                r.advance();
            })
        },
        every,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("testimonial rotation disabled: {:?}", e),
    }

    let current = move || rotation.with(|r| r.current());

    view! {
        <section class="testimonials">
            <div class="container">
                <p class="section-eyebrow">{site.t("home.testimonialsTitle")}</p>
                {move || {
                    current()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial">
                                    <span class="testimonial-rating" aria-label=format!("{} out of 5", t.rating)>
                                        {stars(t.rating)}
                                    </span>
                                    <p class="testimonial-quote">"“" {t.quote} "”"</p>
                                    <footer class="testimonial-author">
                                        {t.author} " · " {t.org}
                                    </footer>
                                </blockquote>
                            }
                        })
                }}
                <div class="testimonial-dots">
                    {(0..TESTIMONIALS.len())
                        .map(|i| {
                            view! {
                                <span class=move || {
                                    if rotation.with(|r| r.index()) == i { "dot active" } else { "dot" }
                                }></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_renders_as_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(0), "");
    }
}
