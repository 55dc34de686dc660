use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, Mode, Pose, ScrollWindow, Tween,
};

const PARAGRAPHS: [&str; 2] = [
    "We believe every woman deserves healthcare that truly understands her. ST3 combines advanced medical research with compassionate care, creating a platform that evolves with you through every stage of your journey.",
    "From the complexities of menstrual health to the transformative experience of pregnancy and beyond, we're here to provide insights, support, and personalized guidance when you need it most.",
];

const HEARTBEAT: &str = "M0 40 L50 40 L60 20 L70 60 L80 10 L90 70 L100 40 \
    L120 40 L130 20 L140 60 L150 10 L160 70 L170 40 \
    L190 40 L200 20 L210 60 L220 10 L230 70 L240 40 \
    L260 40 L270 20 L280 60 L290 10 L300 70 L310 40 \
    L400 40";

#[function_component(Mission)]
pub fn mission() -> Html {
    let section = use_node_ref();
    let heartline = use_node_ref();
    let stroke = use_node_ref();
    // The two paragraphs plus the closing line
    let paragraphs = use_node_refs(PARAGRAPHS.len() + 1);

    {
        let heartline = heartline.clone();
        let stroke = stroke.clone();
        let paragraphs = paragraphs.clone();
        use_animation(move |scene| {
            for (i, paragraph) in paragraphs.iter().enumerate() {
                scene.reveal(
                    paragraph,
                    ScrollWindow::from(Anchor::new(Edge::Top, 0.9)),
                    Mode::OneShot,
                    &[paragraph.clone()],
                    Tween::reveal(Pose::REST.opacity(0.0).y(40.0))
                        .delay_ms(200.0 + 300.0 * i as f64),
                    0.0,
                );
            }
            scene.reveal(
                &heartline,
                ScrollWindow::new(Anchor::new(Edge::Top, 0.8), Anchor::new(Edge::Bottom, 0.2)),
                Mode::Toggle,
                &[stroke],
                Tween::reveal(Pose::REST.draw(0.0))
                    .duration_ms(2000.0)
                    .ease(Ease::Power2InOut),
                0.0,
            );
        });
    }

    html! {
        <section ref={section} class="section-padding mission">
            <div class="container" style="text-align: center;">
                <h2 class="section-title text-gradient">
                    {"Science + Empathy ="}<br />{"Women's Health Reimagined"}
                </h2>

                <div class="mission-copy">
                    {
                        PARAGRAPHS.iter().zip(paragraphs.iter()).map(|(text, node)| html! {
                            <p ref={node.clone()} class="fx">{*text}</p>
                        }).collect::<Html>()
                    }
                    <p ref={paragraphs[PARAGRAPHS.len()].clone()} class="fx mission-closing">
                        {"Because your health story is unique, and it deserves to be honored."}
                    </p>
                </div>

                <svg ref={heartline} class="mission-heartline" viewBox="0 0 400 80" fill="none">
                    <path
                        ref={stroke}
                        class="fx-stroke"
                        d={HEARTBEAT}
                        pathLength="1"
                        stroke="url(#heartline-gradient)"
                        stroke-width="3"
                        fill="none"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                    <defs>
                        <linearGradient id="heartline-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" style="stop-color: #C70276;" />
                            <stop offset="100%" style="stop-color: #FF77B5;" />
                        </linearGradient>
                    </defs>
                </svg>
            </div>

            <style>
                {r#"
                .mission {
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                }
                .mission-copy {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .mission-copy p {
                    font-size: 1.5rem;
                    color: #374151;
                    line-height: 1.7;
                    margin: 0 0 2rem;
                }
                .mission-copy p.mission-closing {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--brand-pink);
                    margin-top: 3rem;
                }
                .mission-heartline {
                    display: block;
                    width: 100%;
                    max-width: 42rem;
                    height: 5rem;
                    margin: 4rem auto 0;
                }
                "#}
            </style>
        </section>
    }
}
