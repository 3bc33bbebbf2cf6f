use yew::prelude::*;
use yew_hooks::prelude::*;

/// Drift factor of the hero headline relative to the page scroll.
pub const HERO_PARALLAX: f64 = 0.06;

pub fn parallax_transform(scroll_y: f64, intensity: f64) -> String {
    format!("transform: translate3d(0, {}px, 0);", scroll_y * intensity)
}

/// Inline style that shifts an element down as the window scrolls.
#[hook]
pub fn use_parallax(intensity: f64) -> String {
    let (_, scroll_y) = use_window_scroll();
    parallax_transform(scroll_y, intensity)
}
