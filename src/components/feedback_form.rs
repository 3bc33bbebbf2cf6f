use std::future::Future;
use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::client::{ApiError, HttpApi, StudioApi};
use crate::api::models::FeedbackSubmission;

pub const SUCCESS_MESSAGE: &str = "Thank you — we'll be in touch.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error. Please try again.";

/// Why a submit attempt was not sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error("A submission is already on its way.")]
    InFlight,
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please write a message.")]
    MissingMessage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub ok: bool,
    pub text: String,
}

/// Field values and submit state of one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
    in_flight: bool,
    status: Option<StatusLine>,
}

impl FeedbackForm {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Marks the form busy and snapshots its fields. Refused while a previous
    /// submission is outstanding or when a required field is empty.
    pub fn begin_submit(&mut self) -> Result<FeedbackSubmission, SubmitRefused> {
        if self.in_flight {
            return Err(SubmitRefused::InFlight);
        }
        if self.name.is_empty() {
            return Err(SubmitRefused::MissingName);
        }
        if self.message.is_empty() {
            return Err(SubmitRefused::MissingMessage);
        }

        self.in_flight = true;
        self.status = None;
        Ok(FeedbackSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Starts a submission and returns the pending POST, or why none was made.
    pub fn dispatch<A>(
        &mut self,
        api: Rc<A>,
    ) -> Result<impl Future<Output = Result<(), ApiError>> + 'static, SubmitRefused>
    where
        A: StudioApi + ?Sized + 'static,
    {
        let submission = self.begin_submit()?;
        Ok(async move { api.submit_feedback(&submission).await })
    }

    /// Applies the backend's answer. The busy flag is always released.
    pub fn finish(&mut self, outcome: Result<(), ApiError>) {
        self.in_flight = false;
        self.status = Some(match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                StatusLine { ok: true, text: SUCCESS_MESSAGE.to_string() }
            }
            Err(e) => StatusLine { ok: false, text: failure_message(&e) },
        });
    }

    /// Shows a validation prompt without touching the fields.
    pub fn refuse(&mut self, reason: SubmitRefused) {
        if reason != SubmitRefused::InFlight {
            self.status = Some(StatusLine { ok: false, text: reason.to_string() });
        }
    }
}

fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
        ApiError::Rejected { .. } | ApiError::Decode(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        ApiError::Network(_) | ApiError::Encode(_) => NETWORK_FAILURE_MESSAGE.to_string(),
    }
}

/// Which of the two page forms is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Inline,
    Contact,
}

#[derive(Properties, PartialEq)]
pub struct FeedbackPanelProps {
    pub api: Rc<HttpApi>,
    pub variant: FormVariant,
}

pub enum FeedbackMsg {
    SetName(String),
    SetEmail(String),
    SetMessage(String),
    Submit,
    Finished(Result<(), ApiError>),
}

pub struct FeedbackPanel {
    form: FeedbackForm,
}

impl Component for FeedbackPanel {
    type Message = FeedbackMsg;
    type Properties = FeedbackPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { form: FeedbackForm::default() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeedbackMsg::SetName(name) => {
                self.form.name = name;
                true
            }
            FeedbackMsg::SetEmail(email) => {
                self.form.email = email;
                true
            }
            FeedbackMsg::SetMessage(message) => {
                self.form.message = message;
                true
            }
            FeedbackMsg::Submit => match self.form.dispatch(ctx.props().api.clone()) {
                Ok(request) => {
                    ctx.link().send_future(async move { FeedbackMsg::Finished(request.await) });
                    true
                }
                Err(SubmitRefused::InFlight) => false,
                Err(reason) => {
                    self.form.refuse(reason);
                    true
                }
            },
            FeedbackMsg::Finished(outcome) => {
                match &outcome {
                    Ok(()) => info!("Feedback submitted"),
                    Err(e) => warn!("Feedback submission failed: {}", e),
                }
                self.form.finish(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let variant = ctx.props().variant;
        let link = ctx.link();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            FeedbackMsg::Submit
        });
        let oninput_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FeedbackMsg::SetName(input.value())
        });
        let oninput_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FeedbackMsg::SetEmail(input.value())
        });
        let oninput_message = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            FeedbackMsg::SetMessage(input.value())
        });

        let (email_placeholder, message_placeholder, rows, button_class, button_label) = match variant {
            FormVariant::Inline => ("Email (optional)", "Your message", 4, "glass-button", "Submit Feedback"),
            FormVariant::Contact => ("Email", "Tell us about your event", 6, "glass-button gradient", "Let’s Create Magic"),
        };

        let status = self.form.status().map(|status| {
            html! {
                <span class={classes!("form-status", if status.ok { "ok" } else { "error" })}>
                    { &status.text }
                </span>
            }
        });

        html! {
            <form class={classes!("feedback-form", (variant == FormVariant::Contact).then(|| "contact-form"))} {onsubmit}>
                <input
                    value={self.form.name.clone()}
                    oninput={oninput_name}
                    required={true}
                    placeholder="Name"
                    class="form-field"
                />
                <input
                    type="email"
                    value={self.form.email.clone()}
                    oninput={oninput_email}
                    placeholder={email_placeholder}
                    class="form-field"
                />
                <textarea
                    value={self.form.message.clone()}
                    oninput={oninput_message}
                    required={true}
                    placeholder={message_placeholder}
                    rows={rows.to_string()}
                    class="form-field wide"
                />
                <div class="form-footer wide">
                    <button type="submit" class={button_class} disabled={self.form.in_flight()}>
                        <span>{ button_label }</span>
                    </button>
                    { for status }
                </div>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::rejection;
    use crate::api::models::Testimonial;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingBackend {
        reply: Result<(), ApiError>,
        posts: RefCell<Vec<FeedbackSubmission>>,
    }

    impl RecordingBackend {
        fn answering(reply: Result<(), ApiError>) -> Rc<Self> {
            Rc::new(Self { reply, posts: RefCell::new(Vec::new()) })
        }
    }

    #[async_trait(?Send)]
    impl StudioApi for RecordingBackend {
        async fn fetch_testimonials(&self, _limit: usize) -> Result<Vec<Testimonial>, ApiError> {
            unreachable!("forms never read testimonials")
        }

        async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ApiError> {
            self.posts.borrow_mut().push(submission.clone());
            self.reply.clone()
        }
    }

    fn filled() -> FeedbackForm {
        FeedbackForm {
            name: "Ines".into(),
            email: "ines@example.com".into(),
            message: "A garden wedding in June".into(),
            ..FeedbackForm::default()
        }
    }

    fn submit(form: &mut FeedbackForm, api: Rc<RecordingBackend>) {
        let request = form.dispatch(api).expect("form should submit");
        let outcome = block_on(request);
        form.finish(outcome);
    }

    #[test]
    fn second_submit_while_pending_sends_nothing() {
        let api = RecordingBackend::answering(Ok(()));
        let mut form = filled();

        let first = form.dispatch(api.clone()).expect("first submit goes out");
        assert!(form.in_flight());
        assert_eq!(form.dispatch(api.clone()).err(), Some(SubmitRefused::InFlight));

        form.finish(block_on(first));
        assert_eq!(api.posts.borrow().len(), 1);
        assert!(!form.in_flight());
    }

    #[test]
    fn success_clears_fields_and_confirms() {
        let api = RecordingBackend::answering(Ok(()));
        let mut form = filled();
        submit(&mut form, api.clone());

        assert_eq!((form.name.as_str(), form.email.as_str(), form.message.as_str()), ("", "", ""));
        assert_eq!(form.status(), Some(&StatusLine { ok: true, text: SUCCESS_MESSAGE.into() }));
        assert_eq!(
            api.posts.borrow()[0],
            FeedbackSubmission {
                name: "Ines".into(),
                email: "ines@example.com".into(),
                message: "A garden wedding in June".into(),
            }
        );
    }

    #[test]
    fn server_detail_is_shown_and_fields_kept() {
        let api = RecordingBackend::answering(Err(ApiError::Rejected {
            status: 422,
            detail: Some("Invalid email".into()),
        }));
        let mut form = filled();
        submit(&mut form, api);

        assert_eq!(form.status().map(|s| s.text.as_str()), Some("Invalid email"));
        assert_eq!(form.status().map(|s| s.ok), Some(false));
        assert_eq!(form.name, "Ines");
        assert_eq!(form.email, "ines@example.com");
        assert_eq!(form.message, "A garden wedding in June");
        assert!(!form.in_flight());
    }

    #[test]
    fn rejection_without_detail_is_generic() {
        for detail in [None, Some(String::new())] {
            let api = RecordingBackend::answering(Err(ApiError::Rejected { status: 500, detail }));
            let mut form = filled();
            submit(&mut form, api);
            assert_eq!(form.status().map(|s| s.text.as_str()), Some(GENERIC_FAILURE_MESSAGE));
            assert_eq!(form.name, "Ines");
        }
    }

    #[test]
    fn transport_failure_shows_network_message() {
        let api = RecordingBackend::answering(Err(ApiError::Network("dns lookup failed".into())));
        let mut form = filled();
        submit(&mut form, api);

        assert_eq!(form.status().map(|s| s.text.as_str()), Some(NETWORK_FAILURE_MESSAGE));
        assert_eq!(form, FeedbackForm { status: form.status.clone(), ..filled() });
    }

    #[test]
    fn form_can_resubmit_after_failure() {
        let mut form = filled();
        submit(&mut form, RecordingBackend::answering(Err(ApiError::Network("offline".into()))));

        let retry = RecordingBackend::answering(Ok(()));
        submit(&mut form, retry.clone());
        assert_eq!(retry.posts.borrow().len(), 1);
        assert_eq!(form.status().map(|s| s.ok), Some(true));
    }

    #[test]
    fn empty_required_fields_are_refused() {
        let api = RecordingBackend::answering(Ok(()));

        let mut nameless = FeedbackForm { name: String::new(), ..filled() };
        assert_eq!(nameless.dispatch(api.clone()).err(), Some(SubmitRefused::MissingName));

        let mut silent = FeedbackForm { message: String::new(), ..filled() };
        let reason = silent.begin_submit().unwrap_err();
        assert_eq!(reason, SubmitRefused::MissingMessage);
        silent.refuse(reason);
        assert_eq!(silent.status().map(|s| s.text.as_str()), Some("Please write a message."));
        assert!(!silent.in_flight());

        assert!(api.posts.borrow().is_empty());
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let api = RecordingBackend::answering(Ok(()));
        let mut form = FeedbackForm { name: " ".into(), message: " ".into(), ..filled() };
        submit(&mut form, api.clone());
        assert_eq!(api.posts.borrow()[0].name, " ");
        assert_eq!(form.status().map(|s| s.ok), Some(true));
    }

    #[test]
    fn unparseable_error_bodies_show_generic_message() {
        let bodies = [
            "<html><body>Internal Server Error</body></html>",
            r#"{"detail": [{"msg": "field required"}]}"#,
            "",
        ];
        for body in bodies {
            let api = RecordingBackend::answering(Err(rejection(500, body)));
            let mut form = filled();
            submit(&mut form, api);
            assert_eq!(form.status().map(|s| s.text.as_str()), Some(GENERIC_FAILURE_MESSAGE));
            assert_eq!(form.message, "A garden wedding in June");
        }
    }

    #[test]
    fn parsed_server_detail_reaches_the_status_line() {
        let api = RecordingBackend::answering(Err(rejection(422, r#"{"detail": "Invalid email"}"#)));
        let mut form = filled();
        submit(&mut form, api);
        assert_eq!(form.status().map(|s| s.text.as_str()), Some("Invalid email"));
    }

    #[test]
    fn email_is_optional() {
        let api = RecordingBackend::answering(Ok(()));
        let mut form = FeedbackForm { email: String::new(), ..filled() };
        submit(&mut form, api.clone());
        assert_eq!(api.posts.borrow()[0].email, "");
    }

    #[test]
    fn new_attempt_clears_previous_status() {
        let mut form = filled();
        submit(&mut form, RecordingBackend::answering(Err(ApiError::Network("offline".into()))));
        assert!(form.status().is_some());

        form.begin_submit().unwrap();
        assert!(form.status().is_none());
    }
}
