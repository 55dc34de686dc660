use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, HoverEffect, Pose, ScrollWindow, Tween,
};

const TITLE: [&str; 4] = ["Women's", "Complete", "Health", "Companion"];

/// Past this much progress through the hero the phone shows the Android build.
const ANDROID_AT: f64 = 0.6;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let phone = use_node_ref();
    let words = use_node_refs(TITLE.len());
    let ctas = use_node_refs(2);
    let buttons = use_node_refs(2);
    let show_android = use_state_eq(|| false);

    {
        let section = section.clone();
        let phone = phone.clone();
        let words = words.clone();
        let ctas = ctas.clone();
        let buttons = buttons.clone();
        let show_android = show_android.clone();
        use_animation(move |scene| {
            scene.intro(
                &words[..],
                Tween::reveal(Pose::REST.opacity(0.0).y(30.0).rotate_x(-90.0))
                    .duration_ms(800.0)
                    .delay_ms(500.0)
                    .ease(Ease::BACK_OUT),
                200.0,
            );

            // Tilt follows the hero passing through the middle of the screen
            let window = ScrollWindow::new(Anchor::new(Edge::Top, 0.5), Anchor::new(Edge::Bottom, 0.5));
            scene.scrub(
                &section,
                window,
                &phone,
                Tween::new(
                    Pose::REST.rotate_y(-7.5).rotate_x(-5.0),
                    Pose::REST.rotate_y(7.5).rotate_x(5.0),
                )
                .ease(Ease::Linear),
            );
            scene.observe(&section, window, move |progress| {
                show_android.set(progress > ANDROID_AT);
            });

            scene.intro(
                &ctas[..],
                Tween::reveal(Pose::REST.opacity(0.0).y(20.0).scale(0.9))
                    .duration_ms(600.0)
                    .delay_ms(2000.0)
                    .ease(Ease::BACK_OUT),
                200.0,
            );
            for button in buttons.iter() {
                scene.hover(button, HoverEffect::new(Pose::REST.scale(1.05)));
            }
        });
    }

    let (phone_src, phone_alt) = if *show_android {
        ("/phone-android.png", "ST3 on Android")
    } else {
        ("/phone-iphone.png", "ST3 on iPhone")
    };

    html! {
        <section ref={section} class="hero">
            <div class="blob hero-dot" style="top: 5rem; left: 5rem; width: 1rem; height: 1rem; animation-delay: 0s;" />
            <div class="blob hero-dot" style="top: 10rem; right: 8rem; width: 1.5rem; height: 1.5rem; animation-delay: 1s;" />
            <div class="blob hero-dot" style="bottom: 8rem; left: 10rem; width: 0.75rem; height: 0.75rem; animation-delay: 2s;" />

            <div class="container" style="text-align: center;">
                <h1 class="hero-title fx-stage">
                    {
                        TITLE.iter().zip(words.iter()).map(|(word, node)| html! {
                            <span ref={node.clone()} class="fx text-gradient hero-word">{*word}</span>
                        }).collect::<Html>()
                    }
                </h1>

                <p class="hero-lead">
                    {"Revolutionary platform combining cutting-edge science with heartfelt empathy for your complete wellness journey."}
                </p>

                <div class="fx-stage" style="margin-bottom: 4rem;">
                    <div ref={phone} class="fx hero-phone">
                        <img src={phone_src} alt={phone_alt} />
                    </div>
                </div>

                <div class="hero-ctas">
                    {
                        ["Download for iOS", "Download for Android"].iter()
                            .zip(ctas.iter().zip(buttons.iter()))
                            .map(|(label, (cta, button))| html! {
                                <div ref={cta.clone()} class="fx">
                                    <button ref={button.clone()} class="btn-primary fx">
                                        <span>{"⬇"}</span>
                                        {*label}
                                    </button>
                                </div>
                            }).collect::<Html>()
                    }
                </div>

                <div class="scroll-indicator">
                    <div class="scroll-indicator-dot" />
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(135deg, #fff, #fdf2f8 50%, #fce7f3);
                }
                .hero-dot {
                    filter: none;
                    background: rgba(199, 2, 118, 0.25);
                    animation: float 6s ease-in-out infinite;
                }
                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                }
                .hero-word {
                    display: inline-block;
                    margin-right: 1rem;
                }
                .hero-lead {
                    font-size: 1.5rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }
                .hero-phone {
                    width: 16rem;
                    margin: 0 auto;
                }
                .hero-phone img {
                    width: 100%;
                    height: auto;
                    filter: drop-shadow(0 25px 50px rgba(199, 2, 118, 0.3));
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid var(--brand-pink);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                    padding-top: 0.25rem;
                    box-sizing: border-box;
                    animation: bounce-gentle 2s ease-in-out infinite;
                }
                .scroll-indicator-dot {
                    width: 0.25rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: var(--brand-pink);
                }
                @media (max-width: 768px) {
                    .hero-title { font-size: 3rem; }
                    .hero-lead { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
