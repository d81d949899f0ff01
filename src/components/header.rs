use log::warn;
use web_sys::window;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            if let Err(e) = window.location().reload() {
                warn!("Page reload failed: {:?}", e);
            }
        }
    });

    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                }
                .site-logo {
                    cursor: pointer;
                }
                .site-logo img {
                    height: 40px;
                    width: auto;
                }
                .menu-button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    padding: 6px;
                }
                .menu-button span {
                    display: block;
                    width: 24px;
                    height: 3px;
                    background: white;
                    border-radius: 2px;
                }
                "#}
            </style>
            <div class="site-logo" onclick={reload}>
                <img src="/assets/logo.png" alt="Altro Webinar" />
            </div>
            <button class="menu-button" aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
        </header>
    }
}
