use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{AnimationContext, Anchor, Ease, Edge, HoverEffect, Mode, Pose, ScrollWindow, Tween};
use crate::api;
use crate::config;
use crate::error::SubmitError;
use crate::forms::newsletter::NewsletterForm;
use crate::forms::Phase;
use crate::Route;

const BENEFITS: [(&str, &str, &str); 3] = [
    ("📅", "Weekly Health Tips", "Evidence-based insights for your wellness journey"),
    ("⚡", "Early Access", "Be the first to try new features and updates"),
    ("👥", "Community", "Connect with other women on similar journeys"),
];

pub enum NewsletterMsg {
    SetEmail(String),
    Submit,
    Finished(Result<(), SubmitError>),
    Reset,
    JoinBeta,
}

pub struct Newsletter {
    form: NewsletterForm,
    reset_timer: Option<Timeout>,
    fx: Option<AnimationContext>,
    form_ref: NodeRef,
    field_ref: NodeRef,
    input_ref: NodeRef,
}

impl Component for Newsletter {
    type Message = NewsletterMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: NewsletterForm::default(),
            reset_timer: None,
            fx: None,
            form_ref: NodeRef::default(),
            field_ref: NodeRef::default(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NewsletterMsg::SetEmail(email) => self.form.set_email(email),
            NewsletterMsg::Submit => match self.form.begin_submit() {
                Ok(request) => {
                    // A result arriving after unmount is dropped with the scope.
                    ctx.link().send_future(async move {
                        NewsletterMsg::Finished(api::subscribe_newsletter(request).await)
                    });
                    true
                }
                Err(rejected) => {
                    debug!("Newsletter submit ignored: {}", rejected);
                    false
                }
            },
            NewsletterMsg::Finished(outcome) => {
                let schedule_reset = self.form.finish_submit(outcome);
                if schedule_reset {
                    info!("Newsletter subscription accepted");
                    let link = ctx.link().clone();
                    self.reset_timer = Some(Timeout::new(config::NEWSLETTER_RESET_MS, move || {
                        link.send_message(NewsletterMsg::Reset);
                    }));
                }
                true
            }
            NewsletterMsg::Reset => {
                self.reset_timer = None;
                self.form.reset()
            }
            NewsletterMsg::JoinBeta => {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Beta);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let phase = self.form.phase();
        let locked = phase != Phase::Editing;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            NewsletterMsg::Submit
        });
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            NewsletterMsg::SetEmail(input.value())
        });

        let button = match phase {
            Phase::Submitting => html! { <span class="spinner" /> },
            Phase::Submitted => html! { <span>{"✓ Subscribed!"}</span> },
            Phase::Editing => html! { <>{"Subscribe"}<span>{"→"}</span></> },
        };

        html! {
            <section class="section-padding newsletter">
                <div class="container" style="text-align: center;">
                    <h2 class="section-title text-gradient">{"Stay Connected"}</h2>
                    <p class="section-lead">
                        {"Get the latest health insights, feature updates, and wellness tips delivered to your inbox. Join our community of empowered women."}
                    </p>

                    <form ref={self.form_ref.clone()} class="fx newsletter-form" {onsubmit}>
                        <div class="glass newsletter-card">
                            <div ref={self.field_ref.clone()} class="fx newsletter-field">
                                <input
                                    ref={self.input_ref.clone()}
                                    type="email"
                                    placeholder="Enter your email address"
                                    value={self.form.email().to_string()}
                                    {oninput}
                                    disabled={locked}
                                    required=true
                                />
                            </div>
                            <button
                                type="submit"
                                class={classes!("btn-primary", (phase == Phase::Submitted).then(|| "newsletter-done"))}
                                disabled={locked}
                            >
                                {button}
                            </button>
                        </div>
                        <p class="newsletter-note">{"No spam, unsubscribe anytime. We respect your privacy."}</p>
                    </form>

                    <div class="grid-3 newsletter-benefits">
                        {
                            BENEFITS.iter().map(|(icon, title, text)| html! {
                                <div class="card">
                                    <div class="icon-tile">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="newsletter-beta">
                        <h3>{"Ready to Shape the Future?"}</h3>
                        <p>
                            {"Join our exclusive beta testing program and help us build the perfect health companion for women."}
                        </p>
                        <button class="btn-primary" onclick={link.callback(|_| NewsletterMsg::JoinBeta)}>
                            {"Join as Beta Tester"}<span>{"🚀"}</span>
                        </button>
                    </div>
                </div>

                <div class="blob" style="top: 8rem; left: 2.5rem; width: 6rem; height: 6rem; background: rgba(199, 2, 118, 0.05);" />
                <div class="blob" style="bottom: 5rem; right: 4rem; width: 8rem; height: 8rem; background: rgba(255, 119, 181, 0.1);" />

                <style>
                    {r#"
                    .newsletter-form {
                        max-width: 28rem;
                        margin: 0 auto 4rem;
                    }
                    .newsletter-card {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding: 2rem;
                    }
                    .newsletter-field {
                        flex: 1;
                        min-width: 12rem;
                        border-radius: 1rem;
                    }
                    .newsletter-field input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1.5rem;
                        font-size: 1.1rem;
                        border: 2px solid #e5e7eb;
                        border-radius: 1rem;
                        background: #fff;
                        outline: none;
                        transition: border-color 0.3s;
                    }
                    .newsletter-field input:focus {
                        border-color: var(--brand-pink);
                    }
                    .newsletter-done {
                        background: #22c55e;
                    }
                    .newsletter-note {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-top: 1rem;
                    }
                    .newsletter-benefits {
                        margin-bottom: 4rem;
                    }
                    .newsletter-benefits h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }
                    .newsletter-benefits p {
                        color: #4b5563;
                        margin: 0;
                    }
                    .newsletter-beta {
                        max-width: 42rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, var(--brand-pink-light), #fce7f3);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .newsletter-beta h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }
                    .newsletter-beta p {
                        font-size: 1.125rem;
                        color: #374151;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }
                    "#}
                </style>
            </section>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        self.fx = AnimationContext::attach(|scene| {
            scene.reveal(
                &self.form_ref,
                ScrollWindow::from(Anchor::new(Edge::Top, 0.8)),
                Mode::Toggle,
                &[self.form_ref.clone()],
                Tween::reveal(Pose::REST.opacity(0.0).y(40.0).scale(0.95))
                    .duration_ms(1000.0)
                    .ease(Ease::BACK_OUT),
                0.0,
            );
            scene.focus(
                &self.input_ref,
                &self.field_ref,
                HoverEffect::new(Pose::REST.scale(1.02)),
            );
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn email_input(root: &web_sys::Element) -> HtmlInputElement {
        root.query_selector("input[type=email]")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn accepted_subscription_clears_itself_after_the_delay() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<Newsletter>::with_root(root.clone()).render();
        app.send_message(NewsletterMsg::SetEmail("a@b.com".into()));
        app.send_message(NewsletterMsg::Submit);
        app.send_message(NewsletterMsg::Finished(Ok(())));

        TimeoutFuture::new(200).await;
        let input = email_input(&root);
        assert!(input.disabled());
        assert_eq!(input.value(), "a@b.com");

        TimeoutFuture::new(config::NEWSLETTER_RESET_MS).await;
        let input = email_input(&root);
        assert!(!input.disabled());
        assert_eq!(input.value(), "");

        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn failed_subscription_keeps_the_email_editable() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<Newsletter>::with_root(root.clone()).render();
        app.send_message(NewsletterMsg::SetEmail("a@b.com".into()));
        app.send_message(NewsletterMsg::Submit);
        app.send_message(NewsletterMsg::Finished(Err(SubmitError::Status(500))));

        TimeoutFuture::new(200).await;
        let input = email_input(&root);
        assert!(!input.disabled());
        assert_eq!(input.value(), "a@b.com");

        app.destroy();
    }
}
