use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod countdown;
mod event;
mod registration;
mod scroll;
mod components {
    pub mod header;
    pub mod hero;
    pub mod countdown_clock;
    pub mod registration_card;
    pub mod sticky_bar;
}
mod pages {
    pub mod landing;
}

use components::header::Header;
use pages::landing::Landing;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
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
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting webinar landing");
    yew::Renderer::<App>::new().render();
}
