use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, Mode, Pose, ScrollWindow, Tween,
};

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    illustration: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Cycle Tracking",
        description: "Begin your health journey with intelligent cycle tracking that learns from your unique patterns and provides personalized insights.",
        illustration: "🌸",
    },
    Step {
        number: "02",
        title: "Pregnancy Insights",
        description: "Navigate your pregnancy with confidence through week-by-week guidance, health monitoring, and expert recommendations.",
        illustration: "🤰",
    },
    Step {
        number: "03",
        title: "Postpartum Support",
        description: "Embrace motherhood with comprehensive postpartum care, recovery tracking, and mental health support for you and your baby.",
        illustration: "🍼",
    },
    Step {
        number: "04",
        title: "PCOD & Fertility Tracker",
        description: "Specialized tracking for women with PCOD and fertility needs, offering precise cycle predictions and personalized lifestyle guidance.",
        illustration: "🩺",
    },
];

/// Rows inside each step card that slide in one after another.
const CONTENT_ROWS: usize = 3;

#[function_component(Journey)]
pub fn journey() -> Html {
    let timeline = use_node_ref();
    let line = use_node_ref();
    let rows = use_node_refs(STEPS.len());
    let illustrations = use_node_refs(STEPS.len());
    let content = use_node_refs(STEPS.len() * CONTENT_ROWS);

    {
        let timeline = timeline.clone();
        let line = line.clone();
        let rows = rows.clone();
        let illustrations = illustrations.clone();
        let content = content.clone();
        use_animation(move |scene| {
            scene.scrub(
                &timeline,
                ScrollWindow::new(Anchor::new(Edge::Top, 0.7), Anchor::new(Edge::Bottom, 0.3)),
                &line,
                Tween::new(Pose::REST.scale_x(0.0), Pose::REST).ease(Ease::Power2InOut),
            );

            for (i, (row, illustration)) in rows.iter().zip(illustrations.iter()).enumerate() {
                scene.reveal(
                    row,
                    ScrollWindow::from(Anchor::new(Edge::Top, 0.7)),
                    Mode::Toggle,
                    &[illustration.clone()],
                    Tween::reveal(Pose::REST.scale(0.0).rotate(-180.0))
                        .delay_ms(300.0)
                        .ease(Ease::BackOut(2.0)),
                    0.0,
                );
                scene.reveal(
                    row,
                    ScrollWindow::from(Anchor::new(Edge::Top, 0.75)),
                    Mode::Toggle,
                    &content[i * CONTENT_ROWS..(i + 1) * CONTENT_ROWS],
                    Tween::reveal(Pose::REST.opacity(0.0).y(20.0))
                        .duration_ms(600.0)
                        .delay_ms(500.0),
                    100.0,
                );

                // Rows fan out sideways while the timeline crosses the middle of the screen
                scene.scrub(
                    &timeline,
                    ScrollWindow::new(Anchor::new(Edge::Top, 0.5), Anchor::new(Edge::Bottom, 0.5)),
                    row,
                    Tween::new(Pose::REST, Pose::REST.x(-50.0 + 25.0 * i as f64)).ease(Ease::Linear),
                );
            }
        });
    }

    html! {
        <section class="section-padding journey">
            <div class="container">
                <h2 class="section-title text-gradient">{"Your Health Journey"}</h2>
                <p class="section-lead">
                    {"Every woman's health story is unique. ST3 adapts and grows with you through each chapter."}
                </p>

                <div ref={timeline} class="journey-timeline">
                    <div ref={line} class="fx journey-line" />

                    <div class="journey-steps">
                        {
                            STEPS.iter().enumerate().map(|(i, step)| {
                                let content = &content[i * CONTENT_ROWS..(i + 1) * CONTENT_ROWS];
                                html! {
                                    <div
                                        ref={rows[i].clone()}
                                        class={classes!("fx", "journey-step", (i % 2 == 1).then(|| "reversed"))}
                                    >
                                        <div ref={illustrations[i].clone()} class="fx journey-illustration">
                                            {step.illustration}
                                        </div>
                                        <div class="card journey-content">
                                            <div ref={content[0].clone()} class="fx journey-number">
                                                <span>{step.number}</span>
                                                <div class="journey-rule" />
                                            </div>
                                            <h3 ref={content[1].clone()} class="fx">{step.title}</h3>
                                            <p ref={content[2].clone()} class="fx">{step.description}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div class="blob" style="top: 8rem; right: 5rem; width: 5rem; height: 5rem; background: rgba(199, 2, 118, 0.1);" />
            <div class="blob" style="bottom: 10rem; left: 4rem; width: 8rem; height: 8rem; background: rgba(255, 119, 181, 0.15);" />

            <style>
                {r#"
                .journey {
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                }
                .journey-timeline {
                    position: relative;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .journey-line {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    margin-top: -2px;
                    border-radius: 9999px;
                    transform-origin: left center;
                    background: linear-gradient(to right, var(--brand-pink), var(--brand-pink-glow));
                }
                .journey-steps {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .journey-step {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .journey-step.reversed {
                    flex-direction: row-reverse;
                }
                .journey-illustration {
                    flex-shrink: 0;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 9999px;
                    border: 4px solid #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.25rem;
                    background: linear-gradient(135deg, #fff, var(--brand-pink-light));
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .journey-content {
                    flex: 1;
                    max-width: 28rem;
                }
                .journey-number {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    color: var(--brand-pink);
                    font-weight: 700;
                    font-size: 1.5rem;
                }
                .journey-rule {
                    flex: 1;
                    height: 2px;
                    background: linear-gradient(to right, var(--brand-pink), var(--brand-pink-glow));
                }
                .journey-content h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .journey-content p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
