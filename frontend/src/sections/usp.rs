use yew::prelude::*;

use crate::animation::{use_animation, use_node_refs, Ease, HoverEffect, Pose, ScrollWindow, Tween};

struct Usp {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
}

const USPS: [Usp; 4] = [
    Usp {
        icon: "🌸",
        title: "Period Prediction",
        description: "Advanced AI algorithms learn your unique patterns, providing accurate predictions and personalized insights for your menstrual health.",
        points: ["Smart cycle tracking", "Symptom analysis", "Mood patterns", "Health insights"],
    },
    Usp {
        icon: "🤰",
        title: "Pregnancy Tracker",
        description: "Comprehensive pregnancy support with week-by-week guidance, milestone tracking, and expert-backed health recommendations.",
        points: ["Week-by-week updates", "Baby development", "Health monitoring", "Expert advice"],
    },
    Usp {
        icon: "🍼",
        title: "Postpartum Care",
        description: "Nurturing support through your postpartum journey with recovery tracking, mental health resources, and breastfeeding guidance.",
        points: ["Recovery tracking", "Mental health support", "Breastfeeding help", "Sleep optimization"],
    },
    Usp {
        icon: "🩺",
        title: "PCOD & Fertility Tracker",
        description: "AI-powered tracker designed for women with PCOD and fertility needs, offering precise cycle and ovulation predictions along with personalized lifestyle guidance to manage symptoms and improve reproductive health.",
        points: [
            "Period start/end logging",
            "Next cycle and ovulation prediction",
            "Symptom tracking: mood, flow, acne, weight gain, cramps",
            "Voice-based daily tips on yoga, food and lifestyle",
        ],
    },
];

/// Slide index after stepping `step` cards from `current`, wrapping both ways.
pub fn wrap_slide(current: usize, step: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(count as isize) as usize
}

#[function_component(UspSlider)]
pub fn usp_slider() -> Html {
    let section = use_node_ref();
    let cards = use_node_refs(USPS.len());
    let icon_wraps = use_node_refs(USPS.len());
    let icons = use_node_refs(USPS.len());
    let current = use_state(|| 0usize);

    {
        let section = section.clone();
        let cards = cards.clone();
        let icon_wraps = icon_wraps.clone();
        let icons = icons.clone();
        use_animation(move |scene| {
            for (i, ((card, wrap), icon)) in cards
                .iter()
                .zip(icon_wraps.iter())
                .zip(icons.iter())
                .enumerate()
            {
                scene.hover(
                    card,
                    HoverEffect::new(Pose::REST.y(-10.0).rotate_y(5.0).scale(1.02)),
                );
                scene.hover_via(card, icon, HoverEffect::new(Pose::REST.scale(1.2).rotate(10.0)));

                // Parallax drift, a little stronger for each card
                let i = i as f64;
                scene.scrub(
                    &section,
                    ScrollWindow::full_pass(),
                    wrap,
                    Tween::new(Pose::REST, Pose::REST.y(20.0 + i * 5.0).rotate(10.0 + i * 2.0))
                        .ease(Ease::Linear),
                );
            }
        });
    }

    let count = USPS.len();
    let step = |by: isize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(wrap_slide(*current, by, count)))
    };
    let prev = step(-1);
    let next = step(1);

    html! {
        <section ref={section} class="section-padding usp">
            <div class="container">
                <h2 class="section-title text-gradient">{"Your Complete Health Journey"}</h2>
                <p class="section-lead">
                    {"From cycles to pregnancy to postpartum care, we're with you every step of the way."}
                </p>

                <div class="usp-slider">
                    <div class="usp-viewport">
                        <div
                            class="usp-track"
                            style={format!("transform: translateX(-{}%);", *current * 100)}
                        >
                            {
                                USPS.iter().enumerate().map(|(i, usp)| html! {
                                    <div class="usp-slide fx-stage">
                                        <div ref={cards[i].clone()} class="fx glass usp-card">
                                            <div ref={icon_wraps[i].clone()} class="fx usp-icon-wrap">
                                                <span ref={icons[i].clone()} class="fx usp-icon">{usp.icon}</span>
                                            </div>
                                            <h3>{usp.title}</h3>
                                            <p>{usp.description}</p>
                                            <div class="usp-points">
                                                {
                                                    usp.points.iter().map(|point| html! {
                                                        <div class="usp-point">
                                                            <span class="usp-bullet" />
                                                            <span>{*point}</span>
                                                        </div>
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <button class="usp-nav usp-prev" onclick={prev} aria-label="Previous">{"‹"}</button>
                    <button class="usp-nav usp-next" onclick={next} aria-label="Next">{"›"}</button>

                    <div class="usp-dots">
                        {
                            (0..count).map(|i| {
                                let onclick = {
                                    let current = current.clone();
                                    Callback::from(move |_: MouseEvent| current.set(i))
                                };
                                html! {
                                    <button
                                        class={classes!("usp-dot", (*current == i).then(|| "active"))}
                                        aria-label={format!("Go to slide {}", i + 1)}
                                        {onclick}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .usp-slider {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .usp-viewport {
                    overflow: hidden;
                    border-radius: 1.5rem;
                    width: 100%;
                }
                .usp-track {
                    display: flex;
                    width: 100%;
                    transition: transform 0.5s ease-out;
                }
                .usp-slide {
                    flex-shrink: 0;
                    width: 100%;
                    padding: 2rem 0;
                }
                .usp-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem;
                    text-align: center;
                }
                .usp-icon-wrap {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                }
                .usp-icon {
                    display: inline-block;
                    font-size: 6rem;
                }
                .usp-card h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .usp-card p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    line-height: 1.7;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .usp-points {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                    text-align: left;
                }
                .usp-point {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 228, 241, 0.4);
                    color: #374151;
                    font-weight: 500;
                }
                .usp-bullet {
                    width: 0.5rem;
                    height: 0.5rem;
                    flex-shrink: 0;
                    border-radius: 9999px;
                    background: var(--brand-pink);
                }
                .usp-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.8);
                    color: var(--brand-pink);
                    font-size: 2rem;
                    line-height: 1;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .usp-prev { left: 1rem; }
                .usp-next { right: 1rem; }
                .usp-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .usp-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .usp-dot.active {
                    background: var(--brand-pink);
                    transform: scale(1.25);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(wrap_slide(3, 1, 4), 0);
        assert_eq!(wrap_slide(1, 1, 4), 2);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(wrap_slide(0, -1, 4), 3);
        assert_eq!(wrap_slide(2, -1, 4), 1);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut slide = 0;
        for _ in 0..USPS.len() {
            slide = wrap_slide(slide, 1, USPS.len());
        }
        assert_eq!(slide, 0);
    }
}
