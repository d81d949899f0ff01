use yew::prelude::*;

use crate::components::registration_card::RegistrationCard;
use crate::components::sticky_bar::StickyBar;
use crate::config;
use crate::event::{italian_date, italian_time};

fn live_badge() -> Html {
    let Some(start) = config::get_event_start() else {
        return html! {};
    };
    html! {
        <div class="live-badge">
            <span class="pulsing-dot"></span>
            <span>
                {"Evento Live: "}
                <span class="accent-date">{italian_date(&start)}</span>
                {format!(" - {}", italian_time(&start))}
            </span>
        </div>
    }
}

/// The webinar section: persuasive copy on the left, registration on the
/// right, and the mobile sticky bar. The form handle is created here and
/// shared between the card that renders the form and the bar that scrolls
/// to it.
#[function_component(Hero)]
pub fn hero() -> Html {
    let form_ref = use_node_ref();

    html! {
        <section class="hero-container">
            <style>
                {r#"
                .hero-container {
                    display: grid;
                    grid-template-columns: 1.3fr 1fr;
                    gap: 3rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                    padding-bottom: 6rem;
                }
                @media (max-width: 768px) {
                    .hero-container {
                        grid-template-columns: 1fr;
                        padding: 1rem;
                        padding-bottom: 6rem;
                    }
                }
                .live-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    border-radius: 999px;
                    padding: 6px 14px;
                    color: #e4e4e7;
                    font-size: 0.85rem;
                }
                .pulsing-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #ef4444;
                    animation: pulse 1.5s ease-in-out infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.3; }
                }
                .accent-date {
                    color: #ef4444;
                    font-weight: 700;
                }
                .headline {
                    font-size: 3rem;
                    color: white;
                    margin: 1.5rem 0 1rem;
                }
                .subheadline {
                    color: #a1a1aa;
                    font-size: 1.15rem;
                    line-height: 1.6;
                }
                .highlight {
                    color: #c4b5fd;
                    font-weight: 700;
                }
                .social-proof {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    margin: 1.5rem 0;
                }
                .avatar-group {
                    display: flex;
                }
                .avatar {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: 2px solid #0a0a0a;
                    background: #7c3aed;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-left: -8px;
                }
                .avatar:first-child {
                    margin-left: 0;
                }
                .social-text {
                    color: #a1a1aa;
                    font-size: 0.9rem;
                }
                .video-placeholder {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 24px;
                    overflow: hidden;
                    background: #18181b;
                }
                .video-logo {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 120px;
                    opacity: 0.2;
                    pointer-events: none;
                }
                .video-placeholder iframe {
                    position: relative;
                    border: none;
                    border-radius: 24px;
                }
                "#}
            </style>
            <div class="left-column">
                { live_badge() }

                <h1 class="headline">{"Webinar Conoscitivo"}</h1>
                <p class="subheadline">
                    {"L’unico metodo "}
                    <span class="highlight">{"realmente funzionante"}</span>
                    {" che oltre "}
                    <span class="highlight">{"3000 persone"}</span>
                    {" stanno già matetando per fare fino a "}
                    <span class="highlight">{"4000€ al mese"}</span>
                    {" in modo semi-automatico"}
                </p>

                <div class="social-proof">
                    <div class="avatar-group">
                        <div class="avatar">{"MJ"}</div>
                        <div class="avatar" style="background-color: #10b981;">{"GL"}</div>
                        <div class="avatar" style="background-color: #f59e0b;">{"RK"}</div>
                    </div>
                    <span class="social-text">
                        {"Unisciti a "}<strong>{"Marco, Giulia"}</strong>
                        {" e altri "}<strong>{"284"}</strong>{" iscritti di oggi"}
                    </span>
                </div>

                <div class="video-placeholder">
                    <img src="/assets/logo.png" alt="" class="video-logo" />
                    <iframe
                        src={config::PRESENTATION_VIDEO_URL}
                        width="100%"
                        height="100%"
                        allow="autoplay; fullscreen"
                        title="Webinar Presentation"
                    ></iframe>
                </div>
            </div>

            <div class="right-column">
                <RegistrationCard form_ref={form_ref.clone()} />
            </div>

            <StickyBar form_ref={form_ref} />
        </section>
    }
}
