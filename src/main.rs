use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod state;

mod components {
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use state::Menu;

/// One public page. Anything else lands back on it.
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
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state_eq(|| Menu::Closed);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(state::is_scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Pick up a restored scroll position before the first event.
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(state::is_scrolled(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // Navigating from the mobile menu dismisses it; the anchor jump itself is
    // left to the browser.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then(|| "scrolled"))}>
            <div class="container header-inner">
                <div class="logo">
                    <div class="logo-badge">{"🔧"}</div>
                    <div>
                        <h1>{catalog::COMPANY_NAME}</h1>
                        <p>{catalog::COMPANY_TAGLINE}</p>
                    </div>
                </div>
                <nav class="desktop-nav">
                    { for catalog::NAV_LABELS.iter().map(|label| html! {
                        <a href={catalog::nav_href(label)} class="nav-link">{*label}</a>
                    }) }
                </nav>
                <a href={format!("tel:{}", catalog::PHONE)} class="call-button">
                    {"📞 Call Now"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if menu.is_open() {
                <div class="mobile-menu">
                    <nav>
                        { for catalog::NAV_LABELS.iter().map(|label| html! {
                            <a
                                href={catalog::nav_href(label)}
                                class="nav-link"
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        }) }
                        <a
                            href={format!("tel:{}", catalog::PHONE)}
                            class="call-button mobile-call"
                            onclick={close_menu.clone()}
                        >
                            {"📞 Call Now"}
                        </a>
                    </nav>
                </div>
            }
        </header>
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

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
