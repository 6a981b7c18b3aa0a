use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod content;
mod motion;
mod state;
mod timecode;
mod components {
    pub mod camera_lens;
    pub mod contact_form;
    pub mod icon;
    pub mod logo;
    pub mod parallax_items;
    pub mod rec_badge;
    pub mod section_heading;
}
mod pages {
    pub mod landing;
}

use components::{icon::SvgIcon, logo::AdmoxLogo};
use content::{Icon, NAV_LINKS};
use pages::landing::{navigate_to, Landing};
use state::{SiteAction, SiteState};


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub dispatch: UseReducerDispatcher<SiteState>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, dispatch } = props;

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        dispatch.dispatch(SiteAction::Scrolled(scroll_y));
                    }
                }) as Box<dyn FnMut()>)
            };

            // Initial call, the browser may have restored a scroll position on reload
            if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                dispatch.dispatch(SiteAction::Scrolled(scroll_y));
            }

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::error!("Failed to attach scroll listener: {:?}", err);
                }
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.dispatch(SiteAction::ToggleMenu);
        })
    };

    let go_to = |id: String| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| navigate_to(&dispatch, &id))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                        background: none;
                        border: none;
                        padding: 0;
                    }
                    .nav-logo-mark {
                        width: 3rem;
                        height: 3rem;
                        transition: transform 0.3s;
                    }
                    .nav-logo:hover .nav-logo-mark {
                        transform: scale(1.05);
                    }
                    .admox-logo {
                        width: 100%;
                        height: 100%;
                        filter: drop-shadow(0 4px 3px rgba(0, 0, 0, 0.07));
                    }
                    .nav-wordmark {
                        display: flex;
                        flex-direction: column;
                        text-align: left;
                    }
                    .nav-wordmark .brand {
                        font-family: 'Outfit', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        letter-spacing: 0.025em;
                        line-height: 1;
                    }
                    .nav-wordmark .sub {
                        font-size: 0.75rem;
                        font-weight: 700;
                        color: #006B3F;
                        letter-spacing: 0.2em;
                        line-height: 1;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        cursor: pointer;
                        transition: color 0.15s;
                    }
                    .nav-link:hover {
                        color: #FDC500;
                    }
                    .nav-follow {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        background: #006B3F;
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.15s;
                    }
                    .nav-follow:hover {
                        background: #15803d;
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        box-sizing: border-box;
                        background: #000;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-menu .nav-link {
                        text-align: left;
                        color: #fff;
                        font-size: 1.125rem;
                        text-transform: none;
                    }
                    .mobile-menu .nav-instagram {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #FDC500;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav-right {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to("hero".to_string())}>
                    <div class="nav-logo-mark">
                        <AdmoxLogo />
                    </div>
                    <div class="nav-wordmark">
                        <span class="brand">{"ADMOX"}</span>
                        <span class="sub">{"MEDIA"}</span>
                    </div>
                </button>

                <div class="nav-right">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button key={link.label} class="nav-link" onclick={go_to(link.anchor())}>
                            { link.label }
                        </button>
                    }) }
                    <a href={config::instagram_url()} target="_blank" rel="noopener noreferrer" class="nav-follow">
                        <SvgIcon icon={Icon::Instagram} size={18} />
                        <span>{"Follow Us"}</span>
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <SvgIcon icon={if *menu_open { Icon::Close } else { Icon::Menu }} size={28} />
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <button key={link.label} class="nav-link" onclick={go_to(link.anchor())}>
                                    { link.label }
                                </button>
                            }) }
                            <a href={config::instagram_url()} target="_blank" rel="noopener noreferrer" class="nav-instagram">
                                <SvgIcon icon={Icon::Instagram} size={20} />
                                {"Instagram"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let site = use_reducer(SiteState::default);

    html! {
        <>
            <Nav scrolled={site.scrolled} menu_open={site.menu_open} dispatch={site.dispatcher()} />
            <Landing pointer={site.pointer} dispatch={site.dispatcher()} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
