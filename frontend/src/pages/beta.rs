use log::{debug, error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{AnimationContext, Ease, Pose, Tween};
use crate::api;
use crate::config;
use crate::error::SubmitError;
use crate::forms::beta::{AgeGroup, BetaField, BetaForm, Feature, Notice, TechComfort};
use crate::forms::Phase;
use crate::Route;

const PERKS: [(&str, &str, &str); 4] = [
    ("✨", "Early Access", "Get exclusive access to new features before anyone else"),
    ("👥", "VIP Community", "Connect with other beta testers and share insights"),
    ("🎯", "Shape the Product", "Your feedback directly influences our development"),
    ("⚡", "Free Premium", "Enjoy premium features at no cost during beta"),
];

/// Back link, title, lead and perks.
const HEADER_PARTS: usize = 4;
const FORM_SECTIONS: usize = 4;

pub enum BetaMsg {
    Edit(BetaField),
    ToggleFeature(Feature),
    Submit,
    Finished(Result<(), SubmitError>),
    BackHome,
    JoinCommunity,
}

pub struct BetaSignup {
    form: BetaForm,
    fx: Option<AnimationContext>,
    header: Vec<NodeRef>,
    sections: Vec<NodeRef>,
}

fn on_text(link: &Scope<BetaSignup>, field: fn(String) -> BetaField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        BetaMsg::Edit(field(input.value()))
    })
}

fn on_long_text(link: &Scope<BetaSignup>, field: fn(String) -> BetaField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        BetaMsg::Edit(field(area.value()))
    })
}

fn section_heading(number: u8, title: &str) -> Html {
    html! {
        <h2 class="beta-section-title">
            <span class="beta-step">{number.to_string()}</span>
            {title.to_string()}
        </h2>
    }
}

impl BetaSignup {
    fn view_submitted(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="beta-page beta-done">
                <div class="beta-done-card">
                    <div class="beta-done-badge">{"🎉"}</div>
                    <h1 class="section-title text-gradient">{"Welcome to ST3 Beta!"}</h1>
                    <p class="section-lead">
                        {"Thank you for joining our exclusive beta program. We're excited to have you on this journey with us. You'll receive early access details and updates via email soon."}
                    </p>
                    <div class="beta-done-actions">
                        <button class="btn-primary" onclick={link.callback(|_| BetaMsg::BackHome)}>
                            {"Back to Home"}
                        </button>
                        <button class="btn-secondary" onclick={link.callback(|_| BetaMsg::JoinCommunity)}>
                            {"Join Our Community"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn view_notice(&self) -> Html {
        match self.form.notice() {
            Some(Notice::Invalid(invalid)) => html! {
                <div class="beta-notice" role="alert">{invalid.to_string()}</div>
            },
            Some(Notice::Failed) => html! {
                <div class="beta-notice" role="alert">
                    {"We couldn't send your application. Please check your connection and try again."}
                </div>
            },
            None => html! {},
        }
    }
}

impl Component for BetaSignup {
    type Message = BetaMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: BetaForm::default(),
            fx: None,
            header: (0..HEADER_PARTS).map(|_| NodeRef::default()).collect(),
            sections: (0..FORM_SECTIONS).map(|_| NodeRef::default()).collect(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BetaMsg::Edit(field) => self.form.edit(field),
            BetaMsg::ToggleFeature(feature) => self.form.toggle_feature(feature),
            BetaMsg::Submit => match self.form.begin_submit() {
                Ok(application) => {
                    // A result arriving after unmount is dropped with the scope.
                    ctx.link().send_future(async move {
                        BetaMsg::Finished(api::submit_beta(application).await)
                    });
                    true
                }
                Err(rejected) => {
                    debug!("Beta submit not sent: {}", rejected);
                    true
                }
            },
            BetaMsg::Finished(outcome) => {
                self.form.finish_submit(outcome);
                if self.form.phase() == Phase::Submitted {
                    info!("Beta application accepted");
                    // The form is about to be replaced by the confirmation view
                    self.fx = None;
                }
                true
            }
            BetaMsg::BackHome => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
            BetaMsg::JoinCommunity => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.open_with_url_and_target(config::COMMUNITY_URL, "_blank") {
                        error!("Could not open community link: {:?}", e);
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.phase() == Phase::Submitted {
            return self.view_submitted(ctx);
        }

        let link = ctx.link();
        let record = self.form.record();
        let submitting = self.form.phase() == Phase::Submitting;

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            BetaMsg::Submit
        });
        let on_age = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BetaMsg::Edit(BetaField::Age(AgeGroup::from_value(&select.value())))
        });
        let on_comfort = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BetaMsg::Edit(BetaField::TechComfort(TechComfort::from_value(&select.value())))
        });
        let on_newsletter = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BetaMsg::Edit(BetaField::Newsletter(input.checked()))
        });

        html! {
            <div class="beta-page">
                <div class="container beta-container">
                    <div class="beta-header">
                        <button
                            ref={self.header[0].clone()}
                            type="button"
                            class="fx beta-back"
                            onclick={link.callback(|_| BetaMsg::BackHome)}
                        >
                            {"← Back to Home"}
                        </button>
                        <h1 ref={self.header[1].clone()} class="fx section-title text-gradient beta-title">
                            {"Join ST3 Beta Program"}
                        </h1>
                        <p ref={self.header[2].clone()} class="fx section-lead">
                            {"Be among the first to experience the future of women's health tracking. Your feedback will help us create the perfect companion for your wellness journey."}
                        </p>
                        <div ref={self.header[3].clone()} class="fx beta-perks">
                            {
                                PERKS.iter().map(|(icon, title, text)| html! {
                                    <div>
                                        <div class="icon-tile">{*icon}</div>
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <form class="beta-form" {onsubmit}>
                        <div ref={self.sections[0].clone()} class="fx glass beta-section">
                            { section_heading(1, "Personal Information") }
                            <div class="beta-grid">
                                <label>
                                    <span>{"Full Name *"}</span>
                                    <input
                                        type="text"
                                        placeholder="Enter your full name"
                                        value={record.full_name.clone()}
                                        oninput={on_text(link, BetaField::FullName)}
                                        required=true
                                    />
                                </label>
                                <label>
                                    <span>{"Email Address *"}</span>
                                    <input
                                        type="email"
                                        placeholder="Enter your email"
                                        value={record.email.clone()}
                                        oninput={on_text(link, BetaField::Email)}
                                        required=true
                                    />
                                </label>
                                <label>
                                    <span>{"Age Group *"}</span>
                                    <select onchange={on_age} required=true>
                                        <option value="" selected={record.age.is_none()}>{"Select your age group"}</option>
                                        {
                                            AgeGroup::ALL.into_iter().map(|age| html! {
                                                <option value={age.value()} selected={record.age == Some(age)}>
                                                    {age.label()}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </label>
                                <label>
                                    <span>{"Tech Comfort Level"}</span>
                                    <select onchange={on_comfort}>
                                        <option value="" selected={record.tech_comfort.is_none()}>
                                            {"How comfortable are you with tech?"}
                                        </option>
                                        {
                                            TechComfort::ALL.into_iter().map(|level| html! {
                                                <option value={level.value()} selected={record.tech_comfort == Some(level)}>
                                                    {level.label()}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </label>
                            </div>
                        </div>

                        <div ref={self.sections[1].clone()} class="fx glass beta-section">
                            { section_heading(2, "Health Goals & Challenges") }
                            <label>
                                <span>{"What are your primary health goals?"}</span>
                                <textarea
                                    placeholder="e.g., Track my cycle better, manage PCOD symptoms, prepare for pregnancy..."
                                    value={record.health_goals.clone()}
                                    oninput={on_long_text(link, BetaField::HealthGoals)}
                                />
                            </label>
                            <label>
                                <span>{"What health challenges are you currently facing?"}</span>
                                <textarea
                                    placeholder="e.g., Irregular periods, fertility concerns, pregnancy symptoms..."
                                    value={record.current_challenges.clone()}
                                    oninput={on_long_text(link, BetaField::CurrentChallenges)}
                                />
                            </label>
                        </div>

                        <div ref={self.sections[2].clone()} class="fx glass beta-section">
                            { section_heading(3, "Features You're Most Excited About") }
                            <div class="beta-grid">
                                {
                                    Feature::CATALOG.into_iter().map(|feature| html! {
                                        <label class="beta-check">
                                            <input
                                                type="checkbox"
                                                checked={record.features.contains(&feature)}
                                                onchange={link.callback(move |_: Event| BetaMsg::ToggleFeature(feature))}
                                            />
                                            <span>{feature.label()}</span>
                                        </label>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div ref={self.sections[3].clone()} class="fx glass beta-section">
                            { section_heading(4, "Additional Thoughts") }
                            <label>
                                <span>{"Any specific feedback or suggestions for ST3?"}</span>
                                <textarea
                                    class="beta-feedback"
                                    placeholder="Share any ideas, concerns, or features you'd love to see..."
                                    value={record.feedback.clone()}
                                    oninput={on_long_text(link, BetaField::Feedback)}
                                />
                            </label>
                            <label class="beta-check">
                                <input type="checkbox" checked={record.newsletter} onchange={on_newsletter} />
                                <span>{"Yes, I'd like to receive updates about ST3 and women's health insights"}</span>
                            </label>
                        </div>

                        { self.view_notice() }

                        <div class="beta-submit">
                            <button type="submit" class="btn-primary" disabled={submitting}>
                                if submitting {
                                    <><span class="spinner" />{"Joining Beta Program..."}</>
                                } else {
                                    <>{"Join Beta Program"}<span>{"🚀"}</span></>
                                }
                            </button>
                            <p>{"By joining, you agree to provide feedback and help us improve ST3"}</p>
                        </div>
                    </form>
                </div>

                <style>
                    {r#"
                    .beta-page {
                        min-height: 100vh;
                        padding: 3rem 1.5rem;
                        box-sizing: border-box;
                        background: linear-gradient(135deg, #fff, #fdf2f8);
                    }
                    .beta-container {
                        max-width: 56rem;
                    }
                    .beta-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .beta-back {
                        border: none;
                        background: none;
                        color: #4b5563;
                        font-size: 1rem;
                        cursor: pointer;
                        margin-bottom: 2rem;
                    }
                    .beta-back:hover {
                        color: var(--brand-pink);
                    }
                    .beta-title {
                        font-size: 4rem;
                    }
                    .beta-perks {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                    }
                    .beta-perks h3 {
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }
                    .beta-perks p {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin: 0;
                    }
                    .beta-form {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .beta-section {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .beta-section-title {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.5rem;
                        margin: 0;
                    }
                    .beta-step {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 0.875rem;
                        background: var(--brand-pink);
                    }
                    .beta-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .beta-section label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .beta-section input[type="text"],
                    .beta-section input[type="email"],
                    .beta-section select,
                    .beta-section textarea {
                        padding: 0.75rem 1rem;
                        font-size: 1rem;
                        border: 2px solid #e5e7eb;
                        border-radius: 0.75rem;
                        outline: none;
                        font-family: inherit;
                    }
                    .beta-section textarea {
                        height: 6rem;
                        resize: none;
                    }
                    .beta-section textarea.beta-feedback {
                        height: 8rem;
                    }
                    .beta-section input:focus,
                    .beta-section select:focus,
                    .beta-section textarea:focus {
                        border-color: var(--brand-pink);
                    }
                    .beta-section label.beta-check {
                        flex-direction: row;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        cursor: pointer;
                    }
                    .beta-check input {
                        width: 1.25rem;
                        height: 1.25rem;
                        accent-color: var(--brand-pink);
                    }
                    .beta-notice {
                        padding: 1rem 1.5rem;
                        border-radius: 1rem;
                        color: #9f1239;
                        background: #ffe4e6;
                        border: 1px solid #fecdd3;
                    }
                    .beta-submit {
                        text-align: center;
                    }
                    .beta-submit p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-top: 1rem;
                    }
                    .beta-done {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .beta-done-card {
                        max-width: 42rem;
                        text-align: center;
                    }
                    .beta-done-badge {
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 2rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.25rem;
                        background: linear-gradient(135deg, var(--brand-pink), var(--brand-pink-glow));
                        animation: float 2s ease-in-out infinite;
                    }
                    .beta-done-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    "#}
                </style>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.fx = AnimationContext::attach(|scene| {
            scene.intro(
                &self.header[..],
                Tween::reveal(Pose::REST.opacity(0.0).y(30.0)).ease(Ease::BACK_OUT),
                200.0,
            );
            scene.intro(
                &self.sections[..],
                Tween::reveal(Pose::REST.opacity(0.0).y(40.0))
                    .duration_ms(600.0)
                    .delay_ms(500.0),
                100.0,
            );
        });
    }
}
