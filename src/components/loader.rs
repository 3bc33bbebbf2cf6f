use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long the splash stays up before the page is revealed.
pub const SPLASH_DURATION_MS: u32 = 1_600;

/// Runs a task once after a delay. Dropping the returned handle must cancel
/// the task if it has not fired yet.
pub trait Scheduler {
    type Pending;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Pending = Timeout;

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, task)
    }
}

/// Holds the splash timer for as long as the loader is mounted.
pub struct SplashGate<S: Scheduler> {
    pending: Option<S::Pending>,
}

impl<S: Scheduler> SplashGate<S> {
    pub fn start<F>(scheduler: &S, on_complete: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let pending = scheduler.schedule(SPLASH_DURATION_MS, Box::new(on_complete));
        Self { pending: Some(pending) }
    }

    /// Cancels the timer if it is still pending.
    pub fn teardown(mut self) {
        self.pending.take();
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let gate = SplashGate::start(&BrowserScheduler, move || {
                    visible.set(false);
                    on_complete.emit(());
                });
                move || gate.teardown()
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="splash">
            <div class="splash-inner">
                <div class="splash-orb">
                    <div class="splash-ring"></div>
                    <span class="splash-spark">{"✦"}</span>
                </div>
                <div class="splash-caption">
                    <p class="splash-kicker">{"Crafting"}</p>
                    <p class="splash-title">{"Unforgettable Moments"}</p>
                </div>
            </div>
        </div>
    }
}
