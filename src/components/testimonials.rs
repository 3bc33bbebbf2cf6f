use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::client::{HttpApi, StudioApi};
use crate::api::models::Testimonial;

/// How many quotes the backend is asked for.
pub const TESTIMONIAL_LIMIT: usize = 5;

/// Quotes shown until (and unless) the backend answers.
pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new("1", "A.", "An extraordinary experience — every detail felt bespoke and poetic."),
        Testimonial::new("2", "M.", "The team turned our vision into a cinematic reality."),
        Testimonial::new("3", "S.", "Seamless production, breathtaking aesthetics. Unforgettable."),
    ]
}

/// Fetches the testimonial list once. Any failure is swallowed and the
/// built-in set is returned instead.
pub async fn load_testimonials<A: StudioApi + ?Sized>(api: &A) -> Vec<Testimonial> {
    match api.fetch_testimonials(TESTIMONIAL_LIMIT).await {
        Ok(testimonials) => {
            debug!("Loaded {} testimonials", testimonials.len());
            testimonials
        }
        Err(e) => {
            debug!("Testimonial fetch failed, keeping defaults: {}", e);
            fallback_testimonials()
        }
    }
}

/// Render key for a quote. Index keys live in their own namespace so they can
/// never collide with a backend id.
pub fn testimonial_key(idx: usize, quote: &Testimonial) -> String {
    if quote.id.is_empty() {
        format!("idx-{}", idx)
    } else {
        format!("id-{}", quote.id)
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub api: Rc<HttpApi>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let quotes = use_state(fallback_testimonials);

    {
        let quotes = quotes.clone();
        let api = props.api.clone();
        use_mount(move || {
            spawn_local(async move {
                quotes.set(load_testimonials(api.as_ref()).await);
            });
        });
    }

    html! {
        <div class="testimonial-grid">
            { for quotes.iter().enumerate().map(|(idx, quote)| {
                html! {
                    <blockquote key={testimonial_key(idx, quote)} class="testimonial-card" style={format!("animation-delay: {}ms;", idx * 100)}>
                        <span class="testimonial-mark">{"\u{201C}"}</span>
                        <p class="testimonial-message">{ &quote.message }</p>
                        <div class="testimonial-author">{ format!("— {}", quote.name) }</div>
                    </blockquote>
                }
            }) }
        </div>
    }
}
