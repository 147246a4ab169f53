use log::{debug, error, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::menu::{Showcase, FEATURED, HANDCRAFTED, MENU, SECTIONS, SIGNATURES};
use crate::actions::{self, ActionRunner, DeliveryProvider};
use crate::components::notification::NotificationQueue;
use crate::config::SITE;
use crate::engine::effects::PageEffects;

#[function_component(Landing)]
pub fn landing() -> Html {
    match use_context::<NotificationQueue>() {
        Some(queue) => html! { <LandingPage {queue} /> },
        None => {
            error!("landing page rendered outside NotificationProvider");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub queue: NotificationQueue,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let runner = use_memo(|queue| ActionRunner::new(SITE, queue.clone()), props.queue.clone());

    // Engines need the rendered markup, so they attach after the first render and
    // detach when the page goes away.
    {
        let runner = (*runner).clone();
        use_effect_with_deps(
            move |_| {
                let mut effects = None;
                let mut contacts = None;
                if let Some((window, document)) = actions::window_and_document() {
                    match PageEffects::attach(&window, &document) {
                        Ok(attached) => effects = Some(attached),
                        Err(err) => warn!("page effects unavailable: {:?}", err),
                    }
                    match runner.listen_for_contacts(&document) {
                        Ok(listener) => contacts = Some(listener),
                        Err(err) => warn!("contact links unavailable: {:?}", err),
                    }
                    runner.entrance(&document);
                }
                move || {
                    if let Some(effects) = &effects {
                        debug!("leaving landing page at {:?}", effects.scroll().active_section());
                    }
                    drop(contacts);
                    drop(effects);
                    runner.cancel_pending();
                }
            },
            (),
        );
    }

    let order = |item: &'static Showcase| {
        let runner = runner.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            runner.order(Some(item.name), Some(item.price));
        })
    };

    let deliver = |provider: DeliveryProvider| {
        let runner = runner.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            runner.deliver(provider);
        })
    };

    html! {
        <div class="landing">
            <nav id="navbar" class="navbar">
                <a href="#home" class="nav-brand">{"Hangout"}</a>
                <div class="nav-links">
                    { for SECTIONS.iter().map(|(label, id)| html! {
                        <a class="nav-link" href={format!("#{}", id)}>{ *label }</a>
                    }) }
                </div>
            </nav>

            <section id="home" class="hero">
                <div class="parallax-layer layer-back"></div>
                <div class="parallax-layer layer-mid"></div>
                <div class="parallax-layer layer-front"></div>
                <div class="floating-logo">{"🧇"}</div>
                <div class="hero-content">
                    <h1>{ SITE.name }</h1>
                    <p>{"Thick shakes, golden waffles and late-night hangouts in Kukatpally."}</p>
                </div>
                <a href="#menu" class="btn hero-cta">{"Explore the Menu"}</a>
            </section>

            <section id="featured" class="featured-waffle">
                <div class="waffle-background"></div>
                <div class="featured-text">
                    <h2 class="section-title">{ FEATURED.name }</h2>
                    <p>{ FEATURED.blurb }</p>
                    <span class="price-tag">{ FEATURED.price }</span>
                    <button class="btn order-btn" onclick={order(&FEATURED)}>{"Order Now"}</button>
                </div>
            </section>

            <section id="menu" class="menu-section">
                <h2>{"Our Menu"}</h2>
                <div class="menu-grid">
                    { for MENU.iter().map(|category| html! {
                        <div class="menu-category">
                            <h3>{ category.title }</h3>
                            <ul>
                                { for category.items.iter().map(|(name, price)| html! {
                                    <li class="menu-item">
                                        <span>{ *name }</span>
                                        <span class="menu-price">{ *price }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section id="signature" class="signature-collection">
                <h2>{"Signature Collection"}</h2>
                <div class="card-grid">
                    { for SIGNATURES.iter().map(|item| html! {
                        <div class="signature-card">
                            <h3 class="signature-name">{ item.name }</h3>
                            <p>{ item.blurb }</p>
                            <span class="signature-price">{ item.price }</span>
                            <button class="btn btn--outline" onclick={order(item)}>{"Order"}</button>
                        </div>
                    }) }
                </div>
            </section>

            <section id="shakes" class="handcrafted-shakes">
                <h2>{"Handcrafted Shakes"}</h2>
                <div class="card-grid">
                    { for HANDCRAFTED.iter().map(|item| html! {
                        <div class="handcrafted-card">
                            <h3 class="handcrafted-name">{ item.name }</h3>
                            <p>{ item.blurb }</p>
                            <span class="handcrafted-price">{ item.price }</span>
                            <button class="btn btn--outline" onclick={order(item)}>{"Order"}</button>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="about-text">
                    <h2>{"About Hangout"}</h2>
                    <p>{"A neighbourhood dessert bar serving waffles and shakes made fresh to order."}</p>
                </div>
                <div class="floating-card">{"🥤 Fresh shakes"}</div>
                <div class="floating-card">{"🧇 Belgian waffles"}</div>
                <div class="floating-card">{"🍫 Real chocolate"}</div>
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Visit Us"}</h2>
                <div class="contact-grid">
                    <div class="contact-item">
                        <h3>{"Call"}</h3>
                        <p class="contact-phone">{ SITE.phone_display }</p>
                    </div>
                    <div class="contact-item">
                        <h3>{"Instagram"}</h3>
                        <p class="contact-social">{ SITE.social_handle }</p>
                    </div>
                    <div class="contact-item">
                        <h3>{"Address"}</h3>
                        <p>{"Beside Nexa Showroom, Chayamina Enclave, Kukatpally, Hyderabad"}</p>
                    </div>
                </div>
                <div class="delivery-info">
                    <h3>{"Order Online"}</h3>
                    { for DeliveryProvider::ALL.iter().map(|provider| html! {
                        <button
                            class={classes!("btn", "delivery-btn", provider.class())}
                            onclick={deliver(*provider)}
                        >
                            { provider.label() }
                        </button>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <p>{ format!("© {}", SITE.name) }</p>
            </footer>

            <style>
                {r#"
                .fade-in {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 1000;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                    background: rgba(255, 248, 240, 0.7);
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(255, 248, 240, 0.95);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                }
                .nav-link {
                    margin-left: 1.5rem;
                    transition: transform 0.2s ease, color 0.2s ease;
                }
                .nav-link.active {
                    color: #c0392b;
                }
                .hero, .featured-waffle, .menu-section, .signature-collection,
                .handcrafted-shakes, .about-section, .contact-section {
                    position: relative;
                    overflow: hidden;
                    background-size: cover;
                    background-position: center center;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }
                .parallax-layer {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    will-change: transform;
                }
                .floating-card {
                    display: inline-block;
                    padding: 1rem 1.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    will-change: transform, opacity;
                }
                .menu-category, .signature-card, .handcrafted-card, .contact-item {
                    transition: transform 0.3s ease, box-shadow 0.3s ease, filter 0.3s ease;
                }
                .menu-item {
                    transition: transform 0.2s ease;
                }
                .btn {
                    position: relative;
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }
                @keyframes advancedRipple {
                    0% {
                        transform: scale(0);
                        opacity: 0.8;
                    }
                    50% {
                        opacity: 0.4;
                    }
                    100% {
                        transform: scale(1);
                        opacity: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
