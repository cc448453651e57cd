use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::Route;
use crate::animation::viewport::scroll_offset;
use crate::config::SCROLL_THRESHOLD;
use crate::links::{nav_href, NAV_ITEMS};

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                match scroll_offset() {
                    Ok(offset) => is_scrolled.set(offset > SCROLL_THRESHOLD),
                    Err(e) => log::warn!("Failed to read scroll offset: {}", e),
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    log::error!("Failed to attach scroll listener: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: background-color 0.3s, box-shadow 0.3s;
                    }
                    .site-header.scrolled {
                        background: #ffffff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        text-decoration: none;
                    }
                    .brand h1 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2563eb;
                        margin: 0;
                    }
                    .header-nav {
                        display: none;
                        gap: 1rem;
                    }
                    .header-nav a {
                        color: #4b5563;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .header-nav a:hover {
                        color: #2563eb;
                    }
                    .header-actions {
                        display: flex;
                        gap: 0.5rem;
                    }
                    @media (min-width: 768px) {
                        .header-nav {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <svg width="40" height="40" viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <circle cx="20" cy="20" r="20" fill="#4299E1"/>
                        <path d="M12 20C12 13.9249 16.9249 9 23 9C29.0751 9 34 13.9249 34 20C34 26.0751 29.0751 31 23 31" stroke="white" stroke-width="2"/>
                        <circle cx="23" cy="20" r="4" fill="white"/>
                        <circle cx="13" cy="25" r="2" fill="white"/>
                    </svg>
                    <h1>{"Study Bubbly"}</h1>
                </Link<Route>>
                <nav class="header-nav">
                    {
                        NAV_ITEMS.iter().map(|item| html! {
                            <a key={*item} href={nav_href(item)}>{*item}</a>
                        }).collect::<Html>()
                    }
                </nav>
                <div class="header-actions">
                    <button class="btn btn-yellow btn-outline">{"Start Now"}</button>
                    <button class="btn btn-blue">{"Apply Now"}</button>
                </div>
            </div>
        </header>
    }
}
