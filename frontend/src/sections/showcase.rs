use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, Mode, Pose, ScrollWindow, Tween,
};

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("🎯", "Precise Tracking", "AI-powered predictions with 95% accuracy for your health patterns"),
    ("📊", "Smart Insights", "Personalized health recommendations based on your unique data"),
    ("🛡", "Privacy First", "Your data is encrypted and secure with bank-level protection"),
];

const FLOATING: [(&str, &str); 3] = [
    ("💗", "top: 5rem; left: 5rem; animation-duration: 4s;"),
    ("📅", "top: 10rem; right: 8rem; animation-duration: 5s; animation-delay: 0.3s;"),
    ("🍼", "bottom: 8rem; left: 10rem; animation-duration: 6s; animation-delay: 0.6s;"),
];

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let section = use_node_ref();
    let stage = use_node_ref();
    let phone = use_node_ref();
    let grid = use_node_ref();
    let cards = use_node_refs(HIGHLIGHTS.len());

    {
        let section = section.clone();
        let stage = stage.clone();
        let phone = phone.clone();
        let grid = grid.clone();
        let cards = cards.clone();
        use_animation(move |scene| {
            scene.scrub(
                &section,
                ScrollWindow::full_pass(),
                &phone,
                Tween::new(Pose::REST.rotate_y(-30.0), Pose::REST.rotate_y(30.0)).ease(Ease::Linear),
            );
            scene.reveal(
                &stage,
                ScrollWindow::from(Anchor::new(Edge::Top, 0.8)),
                Mode::Toggle,
                &[stage.clone()],
                Tween::reveal(Pose::REST.scale(0.8).opacity(0.0).y(50.0))
                    .duration_ms(1000.0)
                    .ease(Ease::BACK_OUT),
                0.0,
            );
            scene.reveal(
                &grid,
                ScrollWindow::from(Anchor::new(Edge::Top, 0.8)),
                Mode::Toggle,
                &cards[..],
                Tween::reveal(Pose::REST.opacity(0.0).y(30.0).scale(0.9))
                    .duration_ms(600.0)
                    .ease(Ease::BACK_OUT),
                200.0,
            );
        });
    }

    html! {
        <section ref={section} class="section-padding showcase">
            <div class="container" style="text-align: center;">
                <h2 class="section-title text-gradient">{"Experience ST3 in Action"}</h2>
                <p class="section-lead">
                    {"See how our intuitive interface makes managing your health simple, beautiful, and empowering."}
                </p>

                {
                    FLOATING.iter().map(|(icon, style)| html! {
                        <div class="showcase-float" style={*style}>{*icon}</div>
                    }).collect::<Html>()
                }

                <div class="showcase-stage fx-stage">
                    <div ref={stage} class="fx">
                        <div ref={phone} class="fx showcase-phone">
                            <div class="showcase-screen">
                                <div class="showcase-bar">{"ST3 Dashboard"}</div>
                                <div class="showcase-tiles">
                                    <div class="showcase-tile">
                                        <div class="showcase-tile-icon">{"🌸"}</div>
                                        <div>{"Cycle Day 14"}</div>
                                    </div>
                                    <div class="showcase-tile">
                                        <div class="showcase-tile-icon">{"📊"}</div>
                                        <div>{"95% Accuracy"}</div>
                                    </div>
                                </div>
                                <div class="showcase-calendar">{"Interactive Health Calendar"}</div>
                            </div>
                            <div class="showcase-notch" />
                        </div>
                    </div>
                </div>

                <div ref={grid} class="grid-3 showcase-highlights">
                    {
                        HIGHLIGHTS.iter().zip(cards.iter()).map(|((icon, title, text), card)| html! {
                            <div ref={card.clone()} class="fx card">
                                <div class="icon-tile showcase-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .showcase {
                    background: linear-gradient(135deg, #fff, #fdf2f8);
                }
                .showcase-float {
                    position: absolute;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    opacity: 0.5;
                    background: var(--brand-pink-light);
                    animation: float 4s ease-in-out infinite alternate;
                }
                .showcase-stage {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 500px;
                    margin-bottom: 4rem;
                }
                .showcase-phone {
                    position: relative;
                    width: 20rem;
                    height: 600px;
                    border: 8px solid #1f2937;
                    border-radius: 3rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #fff, #f3f4f6);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .showcase-screen {
                    height: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    border-radius: 2rem;
                    background: linear-gradient(to bottom, var(--brand-pink-light), #fff);
                }
                .showcase-bar {
                    width: 100%;
                    padding: 1.25rem 0;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.8);
                    color: var(--brand-pink);
                    font-weight: 700;
                    font-size: 1.125rem;
                }
                .showcase-tiles {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    width: 100%;
                    margin-bottom: 1.5rem;
                }
                .showcase-tile {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #fff;
                    font-size: 0.875rem;
                    color: #4b5563;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .showcase-tile-icon {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .showcase-calendar {
                    width: 100%;
                    height: 8rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.6);
                    color: var(--brand-pink);
                    font-size: 0.875rem;
                }
                .showcase-notch {
                    position: absolute;
                    top: 0.5rem;
                    left: 50%;
                    width: 6rem;
                    height: 1.5rem;
                    margin-left: -3rem;
                    border-radius: 9999px;
                    background: #1f2937;
                }
                .showcase-highlights {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .showcase-icon {
                    background: linear-gradient(135deg, var(--brand-pink), var(--brand-pink-glow));
                }
                .showcase-highlights h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .showcase-highlights p {
                    color: #4b5563;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
