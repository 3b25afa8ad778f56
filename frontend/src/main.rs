use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod counter;
mod dom;
mod error;
mod reveal;
mod ticker;
mod visibility;
mod components {
    pub mod anchor;
    pub mod fade_in;
    pub mod glow_card;
    pub mod grid_canvas;
    pub mod nav;
    pub mod parallax;
    pub mod press_button;
    pub mod stats;
    pub mod typing;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use components::{grid_canvas::GridCanvas, nav::Nav};
use config::SiteConfig;
use pages::landing::{Landing, TELEGRAM_URL};

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
    let config = use_memo(|_| SiteConfig::load(), ());

    visibility::use_visibility_tracking();

    use_effect_with_deps(
        move |_| {
            dom::compensate_scrollbar();
            dom::play_page_load_animation();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <BrowserRouter>
                <GridCanvas />
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    gloo_console::log!("🔓 SocialUnlock - Elite Social Media Solutions");
    gloo_console::log!(format!("📲 Contact: @socialunlock on Telegram ({})", TELEGRAM_URL));

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
