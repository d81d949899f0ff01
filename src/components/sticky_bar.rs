use yew::prelude::*;

use crate::scroll::scroll_to_form;

#[derive(Properties, PartialEq)]
pub struct StickyBarProps {
    pub form_ref: NodeRef,
}

/// Mobile call-to-action pinned to the bottom of the viewport.
#[function_component(StickyBar)]
pub fn sticky_bar(props: &StickyBarProps) -> Html {
    let onclick = {
        let form_ref = props.form_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_to_form(&form_ref))
    };

    html! {
        <div class="sticky-bar">
            <style>
                {r#"
                .sticky-bar {
                    display: none;
                }
                @media (max-width: 768px) {
                    .sticky-bar {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 12px 16px;
                        background: rgba(10, 10, 10, 0.95);
                        border-top: 1px solid #27272a;
                        backdrop-filter: blur(10px);
                        z-index: 50;
                    }
                }
                .sticky-text {
                    color: white;
                    font-weight: 600;
                }
                .sticky-fire {
                    color: #ef4444;
                    margin-right: 6px;
                }
                .sticky-button {
                    background: #7c3aed;
                    color: white;
                    border: none;
                    border-radius: 10px;
                    padding: 10px 18px;
                    font-weight: 700;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="sticky-text">
                <span class="sticky-fire">{"🔥"}</span>{"Ultimi 3 posti"}
            </div>
            <button class="sticky-button" onclick={onclick}>
                {"Prenota ora"}
            </button>
        </div>
    }
}
