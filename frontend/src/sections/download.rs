use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, HoverEffect, Mode, Pose, ScrollWindow, Tween,
};

/// Trust indicators. The figure is both the rendered text and the count-up target.
const STATS: [(&str, &str); 3] = [
    ("50000", "Active Users"),
    ("95", "% Accuracy Rate"),
    ("4.9", "App Store Rating"),
];

#[function_component(Download)]
pub fn download() -> Html {
    let section = use_node_ref();
    let copy = use_node_ref();
    let visual = use_node_ref();
    let phone = use_node_ref();
    let figures = use_node_refs(STATS.len());
    let buttons = use_node_refs(2);

    {
        let section = section.clone();
        let copy = copy.clone();
        let visual = visual.clone();
        let phone = phone.clone();
        let figures = figures.clone();
        let buttons = buttons.clone();
        use_animation(move |scene| {
            scene.scrub(
                &section,
                ScrollWindow::new(Anchor::new(Edge::Top, 1.0), Anchor::new(Edge::Center, 0.5)),
                &phone,
                Tween::new(Pose::REST.scale(0.8).y(50.0).rotate(-5.0), Pose::REST),
            );

            for (side, offset) in [(&copy, -50.0), (&visual, 50.0)] {
                scene.reveal(
                    side,
                    ScrollWindow::from(Anchor::new(Edge::Top, 0.9)),
                    Mode::OneShot,
                    &[side.clone()],
                    Tween::reveal(Pose::REST.opacity(0.0).x(offset)),
                    0.0,
                );
            }

            for figure in figures.iter() {
                scene.count_up(figure, ScrollWindow::from(Anchor::new(Edge::Top, 0.8)));
            }

            for button in buttons.iter() {
                scene.hover(
                    button,
                    HoverEffect::new(Pose::REST.scale(1.05).y(-2.0))
                        .enter(300.0, Ease::BACK_OUT)
                        .leave(300.0, Ease::Power2Out),
                );
            }
        });
    }

    html! {
        <section ref={section} class="section-padding download">
            <div class="container download-grid">
                <div ref={copy} class="fx">
                    <h2 class="section-title text-gradient download-title">
                        {"Ready to Transform Your Health Journey?"}
                    </h2>
                    <p class="download-lead">
                        {"Join thousands of women who have already discovered the power of personalized health tracking with ST3."}
                    </p>

                    <div class="download-buttons">
                        <button ref={buttons[0].clone()} class="fx btn-primary">
                            <span>{"⬇"}</span>{"Download for iOS"}
                        </button>
                        <button ref={buttons[1].clone()} class="fx btn-secondary">
                            <span>{"📱"}</span>{"Download for Android"}
                        </button>
                    </div>

                    <div class="download-stats">
                        {
                            STATS.iter().zip(figures.iter()).map(|((figure, label), node)| html! {
                                <div>
                                    <div class="download-figure">
                                        <span ref={node.clone()}>{*figure}</span>
                                        if figure.contains('.') {
                                            <span class="download-star">{"★"}</span>
                                        }
                                    </div>
                                    <div class="download-label">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div ref={visual} class="fx download-visual">
                    <div class="download-phone-wrap">
                        <img ref={phone} class="fx download-phone" src="/phone-iphone.png" alt="ST3 App Download" />
                        <div class="download-badge">{"Download Now!"}</div>
                        <div class="download-check">{"✓"}</div>
                    </div>
                </div>
            </div>

            <div class="blob" style="top: 5rem; right: 5rem; width: 8rem; height: 8rem; background: rgba(199, 2, 118, 0.05);" />
            <div class="blob" style="bottom: 8rem; left: 4rem; width: 10rem; height: 10rem; background: rgba(255, 119, 181, 0.1);" />

            <style>
                {r#"
                .download {
                    background: linear-gradient(135deg, #fdf2f8, #fff);
                }
                .download-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 4rem;
                    align-items: center;
                }
                .download-title {
                    text-align: left;
                    line-height: 1.1;
                }
                .download-lead {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 0 0 2rem;
                }
                .download-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .download-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .download-figure {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 2.25rem;
                    font-weight: 900;
                    color: var(--brand-pink);
                    margin-bottom: 0.5rem;
                }
                .download-star {
                    color: #facc15;
                    font-size: 1.5rem;
                }
                .download-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .download-visual {
                    display: flex;
                    justify-content: center;
                }
                .download-phone-wrap {
                    position: relative;
                }
                .download-phone {
                    width: 20rem;
                    filter: drop-shadow(0 30px 60px rgba(199, 2, 118, 0.25));
                }
                .download-badge {
                    position: absolute;
                    top: -2rem;
                    left: -2rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    background: linear-gradient(to right, var(--brand-pink), var(--brand-pink-glow));
                    animation: float 2s ease-in-out infinite;
                }
                .download-check {
                    position: absolute;
                    bottom: -1rem;
                    right: -1rem;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.5rem;
                    background: linear-gradient(135deg, #4ade80, #10b981);
                }
                "#}
            </style>
        </section>
    }
}
