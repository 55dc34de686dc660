use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod animation;
mod api;
mod config;
mod error;
mod forms;
mod theme;
mod sections {
    pub mod hero;
    pub mod mission;
    pub mod usp;
    pub mod journey;
    pub mod showcase;
    pub mod download;
    pub mod newsletter;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod beta;
}

use pages::{
    landing::Landing,
    beta::BetaSignup,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/beta")]
    Beta,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Beta => {
            info!("Rendering Beta page");
            html! { <BetaSignup /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{theme::THEME}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(Level::Info);

    animation::install();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
