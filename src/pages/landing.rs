use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::api::client::HttpApi;
use crate::components::feedback_form::{FeedbackPanel, FormVariant};
use crate::components::parallax::{use_parallax, HERO_PARALLAX};
use crate::components::testimonials::Testimonials;

struct Card {
    label: &'static str,
    value: &'static str,
    icon: &'static str,
}

const STUDIO_FACTS: [Card; 3] = [
    Card { label: "Studios in", value: "NYC — Paris — Dubai", icon: "⌖" },
    Card { label: "Signature", value: "Glassmorphic light & nature motifs", icon: "◐" },
    Card { label: "Philosophy", value: "Human, immersive, unforgettable", icon: "✦" },
];

const SERVICES: [Card; 4] = [
    Card { label: "Luxury Event Design", value: "Custom concepts and full visual identity.", icon: "◐" },
    Card { label: "Event Production & Management", value: "Planning to execution with precision.", icon: "⚙" },
    Card { label: "Destination Events", value: "Exotic locations, boutique logistics.", icon: "✧" },
    Card { label: "Creative Direction & Styling", value: "Artistic supervision and storytelling.", icon: "✦" },
];

const SOCIAL_LINKS: [(&str, &str); 2] = [("Instagram", "#"), ("LinkedIn", "#")];

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub kicker: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <p class="section-kicker">{ &props.kicker }</p>
            <h2 class="section-title">{ &props.title }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{ subtitle }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowOrbProps {
    pub position: AttrValue,
    #[prop_or(AttrValue::Static("glow-amber"))]
    pub tint: AttrValue,
}

#[function_component(GlowOrb)]
pub fn glow_orb(props: &GlowOrbProps) -> Html {
    html! { <div class={classes!("glow-orb", props.tint.to_string(), props.position.to_string())}></div> }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub api: Rc<HttpApi>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let hero_style = use_parallax(HERO_PARALLAX);
    let year = chrono::Local::now().year();

    html! {
        <>
            <GlowOrb position="orb-top-left" />
            <GlowOrb position="orb-right" tint="glow-cyan" />
            <GlowOrb position="orb-bottom" tint="glow-rose" />

            <section class="hero">
                <div class="hero-scene"></div>
                <div class="hero-content" style={hero_style}>
                    <h1 class="hero-title fade-up">{"Crafting Unforgettable Moments"}</h1>
                    <p class="hero-subtitle fade-up delay-1">
                        {"World‑class event design and production studio. We create exclusive experiences across the globe — from couture weddings to immersive brand spectacles."}
                    </p>
                    <div class="hero-actions fade-up delay-2">
                        <a href="#contact" class="glass-button">{"✦ Let’s Create Magic"}</a>
                        <a href="#services" class="glass-button gradient">{"Explore Services"}</a>
                    </div>
                </div>
                <div class="hero-fade"></div>
            </section>

            <section id="about" class="page-section">
                <SectionHeader
                    kicker="About"
                    title="A Cinematic Approach to Experience Design"
                    subtitle={AttrValue::Static("We blend creative direction, architecture, and technology to compose moments that resonate long after the lights fade.")}
                />
                <div class="card-grid three">
                    { for STUDIO_FACTS.iter().map(|fact| html! {
                        <div class="glass-card">
                            <span class="card-icon">{ fact.icon }</span>
                            <p class="card-label">{ fact.label }</p>
                            <p class="card-value">{ fact.value }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services" class="page-section">
                <SectionHeader kicker="Services" title="Elevated End‑to‑End Production" />
                <div class="card-grid four">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="glass-card service">
                            <span class="card-icon">{ service.icon }</span>
                            <h3 class="card-title">{ service.label }</h3>
                            <p class="card-desc">{ service.value }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="page-section">
                <SectionHeader kicker="Kind Words" title="Stories from Our Clients" />
                <Testimonials api={props.api.clone()} />
                <div class="glass-panel inline-feedback">
                    <h3>{"Leave Feedback"}</h3>
                    <p class="panel-lead">{"Share a note — we love hearing from our guests and partners."}</p>
                    <FeedbackPanel api={props.api.clone()} variant={FormVariant::Inline} />
                </div>
            </section>

            <section id="follow" class="page-section">
                <SectionHeader
                    kicker="Follow Us"
                    title="Join the Journey"
                    subtitle={AttrValue::Static("Find daily inspiration and behind‑the‑scenes magic")}
                />
                <div class="social-row">
                    { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} aria-label={*label} class="social-link">{ *label }</a>
                    }) }
                </div>
            </section>

            <section id="contact" class="page-section">
                <SectionHeader kicker="Contact" title="Tell Us About Your Vision" />
                <div class="glass-panel">
                    <FeedbackPanel api={props.api.clone()} variant={FormVariant::Contact} />
                </div>
            </section>

            <footer class="site-footer">
                { format!("© {} World‑Class Event Design & Production", year) }
            </footer>
        </>
    }
}
