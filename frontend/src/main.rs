use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod links;
mod animation {
    pub mod bubble;
    pub mod cycle;
    pub mod field;
    pub mod viewport;
}
mod components {
    pub mod bubble_container;
    pub mod floating_bubble;
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::header::Header;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
