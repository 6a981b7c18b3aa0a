use chrono::Datelike;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::{
    camera_lens::CameraLens,
    contact_form::ContactForm,
    icon::SvgIcon,
    logo::AdmoxLogo,
    parallax_items::ParallaxFloatingItems,
    rec_badge::RecBadge,
    section_heading::{Align, SectionHeading},
};
use crate::config;
use crate::content::{ticker_line, Icon, HERO_SUBTITLE, REASONS, SERVICES, VISION_QUOTE};
use crate::motion::{compute_offset, Layer, PointerOffset};
use crate::state::{SiteAction, SiteState};

/// Smoothly scrolls the section with `id` into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document available, can't scroll to #{}", id);
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            debug!("Scrolling to #{}", id);
        }
        None => warn!("No section with id #{}", id),
    }
}

/// Closes the mobile menu and scrolls to `id`.
pub fn navigate_to(dispatch: &UseReducerDispatcher<SiteState>, id: &str) {
    dispatch.dispatch(SiteAction::NavigateTo(id.to_string()));
    scroll_to_section(id);
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub pointer: PointerOffset,
    pub dispatch: UseReducerDispatcher<SiteState>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let on_mouse_move = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((width, height)) = viewport_size() {
                let offset = compute_offset(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    width,
                    height,
                );
                dispatch.dispatch(SiteAction::PointerMoved(offset));
            }
        })
    };

    let go_to = |id: &'static str| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| navigate_to(&dispatch, id))
    };

    let hero_lens_style = format!("transform: {};", Layer::HeroLens.css(props.pointer));
    let year = chrono::Local::now().year();
    let ticker = ticker_line();

    html! {
        <div class="landing-page">
            <section id="hero" class="hero" onmousemove={on_mouse_move}>
                <div class="hero-background">
                    <div class="hero-gradient"></div>
                    <div class="hero-dots"></div>
                    <div class="viewfinder top-left"></div>
                    <div class="viewfinder top-right"></div>
                    <div class="viewfinder bottom-left"></div>
                    <div class="viewfinder bottom-right"></div>
                    <div class="crosshair">
                        <div class="crosshair-h"></div>
                        <div class="crosshair-v"></div>
                    </div>
                </div>

                <ParallaxFloatingItems offset={props.pointer} />

                <div class="container hero-grid">
                    <div class="hero-copy">
                        <RecBadge />
                        <h1>
                            {"Transforming Ideas Into "}
                            <span class="gradient-text">{"High-Impact"}</span>
                            {" Visuals"}
                        </h1>
                        <p class="hero-subtitle">
                            { HERO_SUBTITLE }
                        </p>
                        <div class="hero-cta-group">
                            <button class="cta-primary" onclick={go_to("contact")}>
                                <SvgIcon icon={Icon::Aperture} size={20} />
                                {"Start Your Project"}
                            </button>
                            <button class="cta-secondary" onclick={go_to("services")}>
                                <SvgIcon icon={Icon::Play} size={20} filled={true} />
                                {"Our Services"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-lens" style={hero_lens_style}>
                        <CameraLens />
                    </div>
                </div>
            </section>

            <div class="ticker">
                <div class="ticker-track">
                    { for (0..2).map(|i| html! { <span key={i.to_string()}>{ ticker.clone() }</span> }) }
                </div>
            </div>

            <section id="services" class="services">
                <div class="container">
                    <SectionHeading title="What We Do" subtitle="Our Expertise" />
                    <div class="services-grid">
                        {
                            SERVICES.iter().map(|service| html! {
                                <div key={service.id} class="service-card">
                                    <div class="service-watermark">
                                        <SvgIcon icon={Icon::Aperture} size={60} />
                                    </div>
                                    <div class="service-icon">
                                        <SvgIcon icon={service.icon} size={28} />
                                    </div>
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                    <ul>
                                        { for service.features.iter().map(|feature| html! {
                                            <li><span class="bullet"></span>{ *feature }</li>
                                        }) }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="why-us" class="why-us">
                <div class="glow-circle green"></div>
                <div class="glow-circle yellow"></div>
                <div class="container why-grid">
                    <div>
                        <SectionHeading title="Why Brands Choose Admox" subtitle="The Difference" align={Align::Left} />
                        <p class="why-intro">
                            {"We believe in the power of visual storytelling. Our approach combines data-driven strategy with high-end creativity to ensure your message isn't just seen, but felt."}
                        </p>
                        <div class="reasons">
                            {
                                REASONS.iter().map(|reason| html! {
                                    <div key={reason.id} class="reason">
                                        <div class="reason-icon">
                                            <SvgIcon icon={reason.icon} size={20} />
                                        </div>
                                        <div>
                                            <h4>{ reason.title }</h4>
                                            <p>{ reason.description }</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="portfolio">
                        <div class="portfolio-grid">
                            <div class="portfolio-column offset">
                                <div class="portfolio-tile tall">
                                    <img src="https://picsum.photos/400/600?random=1" alt="Portfolio" loading="lazy" />
                                    <div class="tile-caption"><span>{"Brand Identity"}</span></div>
                                </div>
                                <div class="portfolio-tile short">
                                    <img src="https://picsum.photos/400/400?random=2" alt="Portfolio" loading="lazy" />
                                </div>
                            </div>
                            <div class="portfolio-column">
                                <div class="portfolio-tile short">
                                    <img src="https://picsum.photos/400/400?random=3" alt="Portfolio" loading="lazy" />
                                </div>
                                <div class="portfolio-tile tall">
                                    <img src="https://picsum.photos/400/600?random=4" alt="Portfolio" loading="lazy" />
                                    <div class="tile-caption"><span>{"Video Production"}</span></div>
                                </div>
                            </div>
                        </div>
                        <div class="quote-card">
                            <p>{ format!("\"{}\"", VISION_QUOTE) }</p>
                            <div class="stars">
                                { for (0..5).map(|i| html! { <span key={i.to_string()} class="star"></span> }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="instagram">
                <div class="grid-lines"></div>
                <div class="container instagram-content">
                    <SvgIcon icon={Icon::Instagram} size={48} class="instagram-mark" />
                    <h2>{"See Our Latest Work"}</h2>
                    <p>{"Follow us on Instagram for behind-the-scenes content, latest shoots, and design inspiration."}</p>
                    <a href={config::instagram_url()} target="_blank" rel="noopener noreferrer" class="instagram-button">
                        <SvgIcon icon={Icon::Instagram} size={20} />
                        { config::INSTAGRAM_HANDLE }
                    </a>
                    <div class="insta-grid">
                        { for (5..=8).map(|n| html! {
                            <div key={n.to_string()} class="insta-tile">
                                <img src={format!("https://picsum.photos/300/300?random={}", n)} alt="Insta" loading="lazy" />
                                <div class="insta-overlay">
                                    <SvgIcon icon={Icon::Instagram} size={32} />
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <SectionHeading title="Let's Create Together" subtitle="Contact Us" />
                    <div class="contact-card">
                        <div class="contact-glow"></div>
                        <div class="contact-grid">
                            <div class="contact-details">
                                <h3>{"Get in Touch"}</h3>
                                <p class="muted">{"Ready to elevate your brand? Drop us a message or give us a call."}</p>
                                <a class="contact-line" href={format!("tel:{}", config::contact_phone())}>
                                    <div class="contact-icon"><SvgIcon icon={Icon::Phone} size={24} /></div>
                                    <div>
                                        <p class="contact-label">{"Call Us"}</p>
                                        <p class="contact-value">{ config::contact_phone() }</p>
                                    </div>
                                </a>
                                <a class="contact-line" href={format!("mailto:{}", config::contact_email())}>
                                    <div class="contact-icon"><SvgIcon icon={Icon::Mail} size={24} /></div>
                                    <div>
                                        <p class="contact-label">{"Email Us"}</p>
                                        <p class="contact-value">{ config::contact_email() }</p>
                                    </div>
                                </a>
                                <div class="connect">
                                    <p class="connect-label">{"CONNECT WITH US"}</p>
                                    <div class="connect-links">
                                        <a href={config::instagram_url()} target="_blank" rel="noopener noreferrer" class="social-link instagram-link">
                                            <SvgIcon icon={Icon::Instagram} size={20} />
                                        </a>
                                        <a href="#" class="social-link community-link">
                                            <SvgIcon icon={Icon::Users} size={20} />
                                        </a>
                                    </div>
                                </div>
                            </div>
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container footer-row">
                    <div class="footer-brand">
                        <div class="footer-logo"><AdmoxLogo /></div>
                        <div>
                            <h4>{"ADMOX "}<span class="accent">{"MEDIA"}</span></h4>
                            <p>{ format!("\u{a9} {} {}. All rights reserved.", year, config::BRAND_NAME) }</p>
                        </div>
                    </div>
                    <div class="legal-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .landing-page ::selection {
                        background: #FDC500;
                        color: #000;
                    }
                    .container {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding-top: 5rem;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #000, #111827, #000);
                        opacity: 0.9;
                    }
                    .hero-dots {
                        position: absolute;
                        inset: 0;
                        background-image: radial-gradient(rgba(255,255,255,0.1) 1px, transparent 1px);
                        background-size: 40px 40px;
                        opacity: 0.2;
                    }
                    .viewfinder {
                        position: absolute;
                        width: 4rem;
                        height: 4rem;
                        border-color: rgba(255, 255, 255, 0.2);
                        border-style: solid;
                        border-width: 0;
                        pointer-events: none;
                        z-index: 10;
                    }
                    .viewfinder.top-left { top: 6rem; left: 1.5rem; border-left-width: 2px; border-top-width: 2px; border-top-left-radius: 1.5rem; }
                    .viewfinder.top-right { top: 6rem; right: 1.5rem; border-right-width: 2px; border-top-width: 2px; border-top-right-radius: 1.5rem; }
                    .viewfinder.bottom-left { bottom: 1.5rem; left: 1.5rem; border-left-width: 2px; border-bottom-width: 2px; border-bottom-left-radius: 1.5rem; }
                    .viewfinder.bottom-right { bottom: 1.5rem; right: 1.5rem; border-right-width: 2px; border-bottom-width: 2px; border-bottom-right-radius: 1.5rem; }
                    .crosshair {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 2rem;
                        height: 2rem;
                        opacity: 0.2;
                        pointer-events: none;
                    }
                    .crosshair-h { position: absolute; top: 50%; left: 0; width: 100%; height: 1px; background: #fff; }
                    .crosshair-v { position: absolute; left: 50%; top: 0; height: 100%; width: 1px; background: #fff; }
                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-copy > * + * {
                        margin-top: 1.5rem;
                    }
                    .hero-copy h1 {
                        font-family: 'Outfit', sans-serif;
                        font-size: 4.5rem;
                        font-weight: 800;
                        line-height: 1.1;
                        color: #fff;
                    }
                    .gradient-text {
                        color: transparent;
                        background: linear-gradient(to right, #006B3F, #FDC500);
                        -webkit-background-clip: text;
                        background-clip: text;
                    }
                    .hero-subtitle {
                        color: #9ca3af;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        max-width: 36rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        padding-top: 1rem;
                    }
                    .cta-primary, .cta-secondary {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 1.125rem;
                        cursor: pointer;
                        transition: all 0.15s;
                    }
                    .cta-primary {
                        background: #FDC500;
                        color: #000;
                        border: none;
                        box-shadow: 0 0 20px rgba(253, 197, 0, 0.3);
                    }
                    .cta-primary:hover {
                        background: #facc15;
                        transform: scale(1.05);
                    }
                    .cta-secondary {
                        background: transparent;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .cta-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .hero-lens {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        position: relative;
                        transition: transform 75ms ease-out;
                    }

                    .ticker {
                        background: #006B3F;
                        padding: 1rem 0;
                        overflow: hidden;
                        white-space: nowrap;
                        position: relative;
                        z-index: 20;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .ticker-track {
                        display: inline-block;
                        animation: ticker-scroll 20s linear infinite;
                    }
                    .ticker-track span {
                        color: #000;
                        font-family: 'Outfit', sans-serif;
                        font-weight: 900;
                        font-size: 1.5rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 1rem;
                    }
                    @keyframes ticker-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }

                    .services {
                        padding: 6rem 0;
                        background: #000;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(17, 24, 39, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: all 0.3s;
                    }
                    .service-card:hover {
                        background: #1f2937;
                        transform: translateY(-0.5rem);
                    }
                    .service-watermark {
                        position: absolute;
                        top: 0;
                        right: 0;
                        padding: 1rem;
                        color: #006B3F;
                        opacity: 0.1;
                        transition: opacity 0.3s;
                    }
                    .service-card:hover .service-watermark {
                        opacity: 0.2;
                    }
                    .service-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(to bottom right, #006B3F, #064e3b);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        margin-bottom: 1.5rem;
                        box-shadow: 0 0 15px rgba(0, 107, 63, 0.3);
                        transition: transform 0.3s;
                    }
                    .service-card:hover .service-icon {
                        transform: scale(1.1);
                    }
                    .service-card h3 {
                        font-family: 'Outfit', sans-serif;
                        font-size: 1.25rem;
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .service-card p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        min-height: 40px;
                        margin: 0 0 1.5rem;
                    }
                    .service-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .service-card li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }
                    .bullet {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #FDC500;
                    }

                    .why-us {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #000, #111827);
                    }
                    .glow-circle {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .glow-circle.green {
                        top: 0;
                        right: 0;
                        background: rgba(0, 107, 63, 0.1);
                        transform: translate(50%, -50%);
                    }
                    .glow-circle.yellow {
                        bottom: 0;
                        left: 0;
                        background: rgba(253, 197, 0, 0.05);
                        transform: translate(-50%, 50%);
                    }
                    .why-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .why-intro {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .reason {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: border-color 0.15s;
                    }
                    .reason:hover {
                        border-color: rgba(0, 107, 63, 0.5);
                    }
                    .reason-icon {
                        margin-top: 0.25rem;
                        min-width: 40px;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: #000;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #FDC500;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .reason h4 {
                        color: #fff;
                        font-size: 1.125rem;
                        margin: 0 0 0.25rem;
                    }
                    .reason p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .portfolio {
                        position: relative;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .portfolio-column > * + * {
                        margin-top: 1rem;
                    }
                    .portfolio-column.offset {
                        transform: translateY(3rem);
                    }
                    .portfolio-tile {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        background: #1f2937;
                    }
                    .portfolio-tile.tall { height: 16rem; }
                    .portfolio-tile.short { height: 12rem; }
                    .portfolio-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.6;
                        transition: opacity 0.5s;
                    }
                    .portfolio-tile:hover img {
                        opacity: 1;
                    }
                    .tile-caption {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 1rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                        color: #fff;
                        font-weight: 700;
                    }
                    .quote-card {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 75%;
                        padding: 1.5rem;
                        text-align: center;
                        border-radius: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(24px);
                        border: 1px solid #006B3F;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .quote-card p {
                        color: #fff;
                        font-style: italic;
                        font-weight: 500;
                        margin: 0 0 0.75rem;
                    }
                    .stars {
                        display: flex;
                        justify-content: center;
                        gap: 0.25rem;
                    }
                    .star {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #FDC500;
                    }

                    .instagram {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 0;
                        background: #0a0a0a;
                    }
                    .grid-lines {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px);
                        background-size: 50px 50px;
                    }
                    .instagram-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .instagram-mark {
                        color: #FDC500;
                        display: block;
                        margin: 0 auto 1.5rem;
                    }
                    .instagram h2 {
                        font-family: 'Outfit', sans-serif;
                        font-size: 2.25rem;
                        color: #fff;
                        margin: 0 0 1.5rem;
                    }
                    .instagram-content > p {
                        color: #9ca3af;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                    }
                    .instagram-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #9333ea, #db2777);
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.15s;
                    }
                    .instagram-button:hover {
                        background: linear-gradient(to right, #7e22ce, #be185d);
                        box-shadow: 0 10px 15px -3px rgba(168, 85, 247, 0.3);
                    }
                    .insta-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                        margin-top: 3rem;
                        opacity: 0.7;
                        transition: opacity 0.5s;
                    }
                    .insta-grid:hover {
                        opacity: 1;
                    }
                    .insta-tile {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #1f2937;
                        cursor: pointer;
                    }
                    .insta-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .insta-tile:hover img {
                        transform: scale(1.1);
                    }
                    .insta-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.4);
                        opacity: 0;
                        transition: opacity 0.15s;
                    }
                    .insta-tile:hover .insta-overlay {
                        opacity: 1;
                    }

                    .contact {
                        padding: 6rem 0;
                        background: #000;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .contact-card {
                        position: relative;
                        overflow: hidden;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: #111827;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .contact-glow {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 16rem;
                        height: 16rem;
                        border-radius: 50%;
                        background: rgba(0, 107, 63, 0.2);
                        filter: blur(100px);
                        pointer-events: none;
                    }
                    .contact-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-details h3 {
                        font-size: 1.5rem;
                        color: #fff;
                        margin: 0 0 1rem;
                    }
                    .muted {
                        color: #9ca3af;
                    }
                    .contact-line {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .contact-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #1f2937;
                        color: #FDC500;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.15s;
                    }
                    .contact-line:hover .contact-icon {
                        background: #FDC500;
                        color: #000;
                    }
                    .contact-label {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin: 0;
                    }
                    .contact-value {
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin: 0;
                    }
                    .connect {
                        padding-top: 2rem;
                    }
                    .connect-label {
                        color: #6b7280;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .connect-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #1f2937;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.15s;
                    }
                    .instagram-link:hover { background: #006B3F; }
                    .community-link:hover { background: #2563eb; }

                    .site-footer {
                        background: #000;
                        padding: 3rem 0;
                        border-top: 1px solid #111827;
                    }
                    .footer-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .footer-logo {
                        width: 2.5rem;
                        height: 2.5rem;
                    }
                    .footer-brand h4 {
                        font-size: 1.5rem;
                        color: #fff;
                        line-height: 1;
                        margin: 0;
                    }
                    .footer-brand .accent {
                        color: #FDC500;
                    }
                    .footer-brand p {
                        color: #6b7280;
                        font-size: 0.75rem;
                        margin: 0.25rem 0 0;
                    }
                    .legal-links {
                        display: flex;
                        gap: 2rem;
                        font-size: 0.875rem;
                    }
                    .legal-links a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.15s;
                    }
                    .legal-links a:hover {
                        color: #fff;
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .why-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .hero-grid, .contact-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-copy {
                            text-align: center;
                        }
                        .hero-copy h1 {
                            font-size: 3rem;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                        }
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                        .insta-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .contact-card {
                            padding: 2rem;
                        }
                        .footer-row {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
