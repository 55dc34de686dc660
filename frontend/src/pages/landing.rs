use yew::prelude::*;

use crate::sections::{
    download::Download,
    footer::Footer,
    hero::Hero,
    journey::Journey,
    mission::Mission,
    newsletter::Newsletter,
    showcase::Showcase,
    usp::UspSlider,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <Hero />
            <Mission />
            <UspSlider />
            <Journey />
            <Showcase />
            <Download />
            <Newsletter />
            <Footer />
        </main>
    }
}
