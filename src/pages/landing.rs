use yew::prelude::*;

use crate::components::hero::Hero;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on every visit
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0a0a0a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing-page {
                    min-height: 100vh;
                    background: radial-gradient(circle at top, rgba(124, 58, 237, 0.15), transparent 60%);
                }
                "#}
            </style>
            <Hero />
        </div>
    }
}
