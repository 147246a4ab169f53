use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod actions;
mod config;
mod components {
    pub mod notification;
}
mod engine {
    pub mod dom;
    pub mod effects;
    pub mod frame;
    pub mod layers;
    pub mod listener;
    pub mod pointer;
    pub mod roster;
    pub mod scroll;
    pub mod timers;
}
mod motion {
    pub mod easing;
    pub mod geometry;
    pub mod pointer;
    pub mod scroll;
    pub mod transform;
}
mod pages {
    pub mod landing;
    pub mod menu;
}

use components::notification::NotificationProvider;
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
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NotificationProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </NotificationProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE.name);
    yew::Renderer::<App>::new().render();
}
