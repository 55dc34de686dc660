use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::{
    use_animation, use_node_refs, Anchor, Ease, Edge, HoverEffect, Mode, Pose, ScrollWindow, Tween,
};

const SOCIALS: [(&str, &str); 4] = [
    ("Instagram", "◎"),
    ("Twitter", "𝕏"),
    ("Facebook", "f"),
    ("LinkedIn", "in"),
];

const LINKS: [(&str, [&str; 4]); 4] = [
    ("Product", ["Features", "Pricing", "Updates", "API"]),
    ("Support", ["Help Center", "Contact Us", "Community", "Status"]),
    ("Company", ["About", "Careers", "Press", "Partners"]),
    ("Legal", ["Privacy", "Terms", "Security", "Cookies"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer = use_node_ref();
    let socials = use_node_refs(SOCIALS.len());
    let year = Local::now().year();

    {
        let footer = footer.clone();
        let socials = socials.clone();
        use_animation(move |scene| {
            scene.reveal(
                &footer,
                ScrollWindow::from(Anchor::new(Edge::Top, 0.9)),
                Mode::Toggle,
                &[footer.clone()],
                Tween::reveal(Pose::REST.opacity(0.0).y(30.0)).duration_ms(1000.0),
                0.0,
            );
            for icon in socials.iter() {
                scene.hover(
                    icon,
                    HoverEffect::new(Pose::REST.rotate(360.0).scale(1.2))
                        .enter(600.0, Ease::BACK_OUT)
                        .leave(300.0, Ease::Power2Out),
                );
            }
        });
    }

    html! {
        <footer ref={footer} class="fx site-footer">
            <div class="section-padding">
                <div class="container">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <div class="footer-mark">{"♥"}</div>
                            <h3>{"ST3"}</h3>
                        </div>
                        <p>
                            {"Empowering women through intelligent health technology and compassionate care. Your journey to better health starts here."}
                        </p>
                    </div>

                    <div class="footer-socials">
                        {
                            SOCIALS.iter().zip(socials.iter()).map(|((name, glyph), node)| html! {
                                <a ref={node.clone()} href="#" class="fx footer-social" aria-label={*name}>{*glyph}</a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="footer-links">
                        {
                            LINKS.iter().map(|(heading, items)| html! {
                                <div>
                                    <h4>{*heading}</h4>
                                    <ul>
                                        { items.iter().map(|item| html! { <li><a href="#">{*item}</a></li> }).collect::<Html>() }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="footer-bottom">
                        <p>{format!("© {} ST3. All rights reserved. Made with ❤️ for women's health.", year)}</p>
                        <p class="footer-tags">
                            <span>{"Privacy-first"}</span><span>{"•"}</span>
                            <span>{"Secure"}</span><span>{"•"}</span>
                            <span>{"Empowering"}</span>
                        </p>
                    </div>
                </div>
            </div>

            <div class="blob" style="top: 2.5rem; left: 2.5rem; width: 5rem; height: 5rem; background: rgba(255, 255, 255, 0.1);" />
            <div class="blob" style="bottom: 2.5rem; right: 2.5rem; width: 8rem; height: 8rem; background: rgba(255, 255, 255, 0.05);" />

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    color: #fff;
                    background: linear-gradient(135deg, var(--brand-pink), var(--brand-pink-glow));
                }
                .footer-brand {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .footer-logo h3 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin: 0;
                }
                .footer-mark, .footer-social {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }
                .footer-mark {
                    width: 4rem;
                    height: 4rem;
                    font-size: 2rem;
                }
                .footer-brand p {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 42rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .footer-social {
                    width: 3.5rem;
                    height: 3.5rem;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .footer-links {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .footer-links h4 {
                    font-size: 1.125rem;
                    margin: 0 0 1.5rem;
                }
                .footer-links ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-links li {
                    margin-bottom: 0.75rem;
                }
                .footer-links a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    color: rgba(255, 255, 255, 0.8);
                }
                .footer-bottom p {
                    margin: 0;
                }
                .footer-tags {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
