use gloo_timers::callback::Timeout;
use web_sys::{HtmlImageElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::catalog;
use crate::components::reveal::{Direction, RevealBlock};

/// Swap in the placeholder once if an external photo fails, so a dead image
/// host never leaves a hole in the layout.
fn photo_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            if img.src() != catalog::IMAGE_FALLBACK {
                img.set_src(catalog::IMAGE_FALLBACK);
            }
        }
    })
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    // Always in view on load, so no viewport gate: a short timer after mount
    // kicks off the stagger schedule instead.
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(80, move || {
                    mounted.set(true);
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    let item = |index: u32| -> (Classes, String) {
        (
            classes!("hero-item", (*mounted).then_some("visible")),
            format!("transition-delay: {}ms;", index * 200),
        )
    };
    let (c0, s0) = item(0);
    let (c1, s1) = item(1);
    let (c2, s2) = item(2);
    let (c3, s3) = item(3);

    html! {
        <section id="home" class="hero">
            <div class="container hero-grid">
                <div class="hero-copy-col">
                    <div class={c0} style={s0}>
                        <div class="badge">{"🏅 24+ Years Experience"}</div>
                        <h2 class="hero-title">
                            {"Professional"}
                            <span class="accent-block">{"Plumbing & Heating"}</span>
                            {"Services"}
                        </h2>
                        <p class="hero-lede">
                            {"Installing a new central heating system with high efficiency \
                              condensing boiler system controls will save you money on your \
                              annual heating bills."}
                        </p>
                    </div>
                    <div class={classes!(c1, "hero-actions")} style={s1}>
                        <a href={format!("tel:{}", catalog::PHONE)} class="phone-button">
                            {"📞 "}{catalog::PHONE}
                        </a>
                        <a href="#services" class="outline-button">{"View Services"}</a>
                    </div>
                    <div class={classes!(c2, "trust-grid")} style={s2}>
                        <div class="trust-item">
                            <span class="trust-icon">{"🛡️"}</span>
                            <p>{"Fully Insured"}</p>
                        </div>
                        <div class="trust-item">
                            <span class="trust-icon">{"🕑"}</span>
                            <p>{"Emergency Service"}</p>
                        </div>
                        <div class="trust-item">
                            <span class="trust-icon">{"⭐"}</span>
                            <p>{"5-Star Rated"}</p>
                        </div>
                    </div>
                </div>
                <div class={classes!(c3, "hero-photo-col")} style={s3}>
                    <img
                        src="https://images.pexels.com/photos/8986048/pexels-photo-8986048.jpeg"
                        alt="Professional plumber in uniform"
                        class="hero-photo"
                        onerror={photo_fallback()}
                    />
                    <div class="deco deco-orange"></div>
                    <div class="deco deco-blue"></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section id="services" class="section section-white">
            <div class="container">
                <RevealBlock class="section-heading">
                    <h2>{"Our Professional Services"}</h2>
                    <p>
                        {"We offer excellent value for money, with a promise that the price \
                          we quote, is the price you pay, no hidden charges."}
                    </p>
                </RevealBlock>
                <div class="services-grid">
                    { for catalog::SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <RevealBlock class="service-card" delay_ms={index as u32 * 120}>
                            <div class="card-photo-wrap">
                                <img
                                    src={service.image}
                                    alt={service.title}
                                    class="card-photo"
                                    onerror={photo_fallback()}
                                />
                                <div class="icon-badge">{service.icon}</div>
                            </div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul class="feature-list">
                                { for service.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✔"}</span>{*feature}</li>
                                }) }
                            </ul>
                        </RevealBlock>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="section section-tinted">
            <div class="container about-grid">
                <RevealBlock direction={Direction::Left}>
                    <div class="badge">{"🏅 Trusted Professionals"}</div>
                    <h2 class="about-title">
                        {"Why Choose"}
                        <span class="accent-block">{"Facey Plumbing?"}</span>
                    </h2>
                    <p class="about-lede">
                        {"Boilers are rated according to their efficiency in converting gas \
                          to heat. The latest Energy Efficiency 'A' boilers being rated at \
                          90% efficiency, with A-rated boilers being around 90% or less. It \
                          may be worth replacing it with a modern condensing boiler which \
                          offer efficiencies of up to 97%. This could dramatically reduce \
                          your gas bill and carbon footprint."}
                    </p>
                    <div class="stat-grid">
                        <div class="stat-tile">
                            <h3>{"24+"}</h3>
                            <p>{"Years Experience"}</p>
                        </div>
                        <div class="stat-tile">
                            <h3>{"100%"}</h3>
                            <p>{"Satisfaction Rate"}</p>
                        </div>
                    </div>
                </RevealBlock>
                <RevealBlock direction={Direction::Right} delay_ms={200} class="highlight-col">
                    <div class="highlight-card">
                        <div class="highlight-head">
                            <span class="highlight-icon green">{"✔"}</span>
                            <h3>{"Quality Guarantee"}</h3>
                        </div>
                        <p>{"All our work comes with comprehensive warranties and quality guarantees."}</p>
                    </div>
                    <div class="highlight-card">
                        <div class="highlight-head">
                            <span class="highlight-icon blue">{"🕑"}</span>
                            <h3>{"Emergency Service"}</h3>
                        </div>
                        <p>{"Available for emergency plumbing and heating issues, providing rapid response."}</p>
                    </div>
                    <div class="highlight-card">
                        <div class="highlight-head">
                            <span class="highlight-icon orange">{"🏅"}</span>
                            <h3>{"Certified Installers"}</h3>
                        </div>
                        <p>{"Worcester, Vaillant and Ideal Preferred Installer with extended warranties."}</p>
                    </div>
                </RevealBlock>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let name = use_state(String::default);
    let email = use_state(String::default);
    let phone = use_state(String::default);
    let message = use_state(String::default);
    let rejected = use_state(|| false);

    let oninput_text = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    // No form backend exists yet. Refuse the submission visibly and keep the
    // typed values in place rather than dropping them.
    let onsubmit = {
        let rejected = rejected.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::warn!("contact form submitted but no form backend is configured; rejecting");
            rejected.set(true);
        })
    };

    html! {
        <section id="contact" class="section section-white">
            <div class="container">
                <RevealBlock class="section-heading">
                    <h2>{"Get In Touch Today"}</h2>
                    <p>{"Ready to get started? Contact us for a free quote and professional consultation."}</p>
                </RevealBlock>
                <div class="contact-grid">
                    <RevealBlock class="contact-form-card">
                        <h3>{"Send us a message"}</h3>
                        <form class="contact-form" {onsubmit}>
                            <div class="field-row">
                                <input
                                    type="text"
                                    placeholder="Your Name"
                                    value={(*name).clone()}
                                    oninput={oninput_text(name.clone())}
                                />
                                <input
                                    type="email"
                                    placeholder="Your Email"
                                    value={(*email).clone()}
                                    oninput={oninput_text(email.clone())}
                                />
                            </div>
                            <input
                                type="tel"
                                placeholder="Your Phone"
                                value={(*phone).clone()}
                                oninput={oninput_text(phone.clone())}
                            />
                            <textarea
                                rows="5"
                                placeholder="Tell us about your project..."
                                value={(*message).clone()}
                                oninput={oninput_message}
                            />
                            <button type="submit" class="submit-button">{"Send Message"}</button>
                            if *rejected {
                                <p class="form-notice">
                                    {"Online enquiries aren't available just yet. Please call "}
                                    <a href={format!("tel:{}", catalog::PHONE)}>{catalog::PHONE}</a>
                                    {" or email "}
                                    <a href={format!("mailto:{}", catalog::EMAIL)}>{catalog::EMAIL}</a>
                                    {" and we'll get straight back to you."}
                                </p>
                            }
                        </form>
                    </RevealBlock>
                    <RevealBlock direction={Direction::Right} delay_ms={200} class="contact-info-col">
                        <div class="info-card info-card-accent">
                            <span class="info-icon">{"📞"}</span>
                            <h3>{"Call Us Now"}</h3>
                            <p>{"Available for emergency services"}</p>
                            <a href={format!("tel:{}", catalog::PHONE)} class="info-phone">{catalog::PHONE}</a>
                        </div>
                        <div class="info-card">
                            <span class="info-icon">{"✉️"}</span>
                            <h3>{"Email Us"}</h3>
                            <p>{"Get a quote via email"}</p>
                            <a href={format!("mailto:{}", catalog::EMAIL)} class="info-link">{catalog::EMAIL}</a>
                        </div>
                        <div class="info-card">
                            <span class="info-icon">{"📍"}</span>
                            <h3>{"Service Area"}</h3>
                            <p>{catalog::SERVICE_AREA}</p>
                        </div>
                        <div class="info-card">
                            <span class="info-icon">{"🕑"}</span>
                            <h3>{"Business Hours"}</h3>
                            { for catalog::HOURS.iter().map(|line| html! { <p>{*line}</p> }) }
                            <p class="info-emergency">{catalog::EMERGENCY_NOTE}</p>
                        </div>
                    </RevealBlock>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-company">
                        <div class="logo">
                            <div class="logo-badge">{"🔧"}</div>
                            <div>
                                <h3>{catalog::COMPANY_NAME}</h3>
                                <p>{catalog::COMPANY_TAGLINE}</p>
                            </div>
                        </div>
                        <p class="footer-blurb">
                            {"Professional plumbing and heating services with over 24 years \
                              of experience. We provide excellent value for money with no \
                              hidden charges."}
                        </p>
                        <div class="footer-social">
                            <a href="#" aria-label="Facebook">{"f"}</a>
                            <a href="#" aria-label="Twitter">{"t"}</a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul class="footer-links">
                            { for catalog::FOOTER_SERVICES.iter().map(|label| html! {
                                <li><a href="#services">{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <div class="footer-contact">
                            <p>{"📞 "}<a href={format!("tel:{}", catalog::PHONE)}>{catalog::PHONE}</a></p>
                            <p>{"✉️ "}<a href={format!("mailto:{}", catalog::EMAIL)}>{catalog::EMAIL}</a></p>
                            <p>{"📍 "}{catalog::SERVICE_AREA}</p>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Facey Plumbing & Heating Specialists. All rights reserved."}</p>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                        color: #1e293b;
                        background: linear-gradient(135deg, #f8fafc 0%, #eff6ff 100%);
                        line-height: 1.6;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section {
                        padding: 5rem 0;
                    }
                    .section-white {
                        background: #fff;
                    }
                    .section-tinted {
                        background: linear-gradient(135deg, #f8fafc 0%, #eff6ff 100%);
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.8rem;
                        margin-bottom: 1.2rem;
                    }
                    .section-heading p {
                        font-size: 1.2rem;
                        color: #475569;
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .badge {
                        display: inline-block;
                        background: #ffedd5;
                        color: #9a3412;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        font-size: 0.9rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .accent-block {
                        display: block;
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    /* Entrance animations */
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .reveal-up { transform: translateY(40px); }
                    .reveal-left { transform: translateX(-60px); }
                    .reveal-right { transform: translateX(60px); }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .hero-item {
                        opacity: 0;
                        transform: translateY(60px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .hero-item.visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* Header */
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.1);
                    }
                    .header-inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .logo-badge {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #fb923c, #ea580c);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        box-shadow: 0 8px 16px rgba(15, 23, 42, 0.15);
                    }
                    .logo h1 {
                        font-size: 1.25rem;
                    }
                    .logo p {
                        font-size: 0.85rem;
                        color: #475569;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #334155;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #ea580c;
                    }
                    .call-button {
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 10px 20px rgba(249, 115, 22, 0.25);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .call-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 14px 28px rgba(249, 115, 22, 0.35);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #334155;
                        border-radius: 2px;
                    }
                    .mobile-menu {
                        border-top: 1px solid #e2e8f0;
                        background: rgba(255, 255, 255, 0.97);
                        padding: 1rem;
                    }
                    .mobile-menu nav {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-call {
                        width: fit-content;
                    }

                    /* Hero */
                    .hero {
                        padding: 8rem 0 4rem;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-title {
                        font-size: 3.4rem;
                        line-height: 1.15;
                        margin: 1rem 0;
                    }
                    .hero-lede {
                        font-size: 1.25rem;
                        color: #475569;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .phone-button {
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 999px;
                        font-weight: 600;
                        font-size: 1.1rem;
                        text-decoration: none;
                        box-shadow: 0 10px 20px rgba(249, 115, 22, 0.25);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .phone-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 14px 28px rgba(249, 115, 22, 0.35);
                    }
                    .outline-button {
                        border: 2px solid #cbd5e1;
                        color: #334155;
                        padding: 1rem 2rem;
                        border-radius: 999px;
                        font-weight: 600;
                        font-size: 1.1rem;
                        text-decoration: none;
                        transition: border-color 0.3s ease, color 0.3s ease;
                    }
                    .outline-button:hover {
                        border-color: #f97316;
                        color: #ea580c;
                    }
                    .trust-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 2.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid #e2e8f0;
                        text-align: center;
                    }
                    .trust-icon {
                        font-size: 1.8rem;
                    }
                    .trust-item p {
                        font-size: 0.9rem;
                        color: #475569;
                        font-weight: 500;
                    }
                    .hero-photo-col {
                        position: relative;
                    }
                    .hero-photo {
                        width: 100%;
                        height: 600px;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                        position: relative;
                        z-index: 1;
                    }
                    .deco {
                        position: absolute;
                        border-radius: 1.5rem;
                        opacity: 0.2;
                        z-index: 0;
                    }
                    .deco-orange {
                        top: -1.5rem;
                        right: -1.5rem;
                        width: 8rem;
                        height: 8rem;
                        background: linear-gradient(135deg, #fb923c, #ea580c);
                    }
                    .deco-blue {
                        bottom: -1.5rem;
                        left: -1.5rem;
                        width: 6rem;
                        height: 6rem;
                        background: linear-gradient(135deg, #60a5fa, #2563eb);
                    }

                    /* Services */
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        background: linear-gradient(135deg, #f8fafc 0%, #eff6ff 100%);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.08);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out,
                                    box-shadow 0.4s ease;
                    }
                    .service-card:hover {
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.15);
                    }
                    .card-photo-wrap {
                        position: relative;
                        margin-bottom: 1.5rem;
                    }
                    .card-photo {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 0.75rem;
                    }
                    .icon-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        border-radius: 0.75rem;
                        padding: 0.6rem;
                        font-size: 1.4rem;
                        box-shadow: 0 8px 16px rgba(15, 23, 42, 0.2);
                    }
                    .service-card h3 {
                        font-size: 1.3rem;
                        margin-bottom: 0.75rem;
                    }
                    .service-card > p {
                        color: #475569;
                        margin-bottom: 1rem;
                    }
                    .feature-list {
                        list-style: none;
                    }
                    .feature-list li {
                        color: #475569;
                        font-size: 0.9rem;
                        margin-bottom: 0.4rem;
                    }
                    .check {
                        color: #16a34a;
                        margin-right: 0.5rem;
                    }

                    /* About */
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-title {
                        font-size: 2.8rem;
                        margin-bottom: 1.5rem;
                    }
                    .about-lede {
                        font-size: 1.1rem;
                        color: #475569;
                        margin-bottom: 2rem;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .stat-tile {
                        background: #fff;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        text-align: center;
                        box-shadow: 0 6px 12px rgba(15, 23, 42, 0.08);
                    }
                    .stat-tile h3 {
                        font-size: 2rem;
                        color: #ea580c;
                        margin-bottom: 0.5rem;
                    }
                    .stat-tile p {
                        color: #475569;
                        font-weight: 500;
                    }
                    .highlight-col {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .highlight-card {
                        background: #fff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.08);
                    }
                    .highlight-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 0.75rem;
                    }
                    .highlight-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.2rem;
                    }
                    .highlight-icon.green { background: #dcfce7; color: #16a34a; }
                    .highlight-icon.blue { background: #dbeafe; }
                    .highlight-icon.orange { background: #ffedd5; }
                    .highlight-card p {
                        color: #475569;
                    }

                    /* Contact */
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                        align-items: start;
                    }
                    .contact-form-card {
                        background: linear-gradient(135deg, #f8fafc 0%, #eff6ff 100%);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .contact-form-card h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.85rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e2e8f0;
                        background: #fff;
                        font-size: 1rem;
                        font-family: inherit;
                        resize: none;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #f97316;
                        box-shadow: 0 0 0 3px rgba(249, 115, 22, 0.15);
                    }
                    .submit-button {
                        background: linear-gradient(90deg, #f97316, #ea580c);
                        color: #fff;
                        border: none;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        box-shadow: 0 10px 20px rgba(249, 115, 22, 0.25);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .submit-button:hover {
                        transform: scale(1.02);
                        box-shadow: 0 14px 28px rgba(249, 115, 22, 0.35);
                    }
                    .form-notice {
                        background: #fff7ed;
                        border: 1px solid #fdba74;
                        border-radius: 0.75rem;
                        padding: 1rem;
                        color: #9a3412;
                    }
                    .form-notice a {
                        color: #ea580c;
                        font-weight: 600;
                    }
                    .contact-info-col {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .info-card {
                        background: linear-gradient(135deg, #f8fafc 0%, #eff6ff 100%);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.08);
                    }
                    .info-card-accent {
                        background: linear-gradient(135deg, #f97316, #ea580c);
                        color: #fff;
                    }
                    .info-card-accent p {
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .info-icon {
                        font-size: 1.8rem;
                        display: block;
                        margin-bottom: 0.75rem;
                    }
                    .info-card h3 {
                        font-size: 1.2rem;
                        margin-bottom: 0.5rem;
                    }
                    .info-card p {
                        color: #475569;
                    }
                    .info-card-accent h3 {
                        color: #fff;
                    }
                    .info-phone {
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .info-link {
                        color: #ea580c;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .info-emergency {
                        color: #ea580c !important;
                        font-weight: 600;
                    }

                    /* Footer */
                    .site-footer {
                        background: #1e293b;
                        color: #fff;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .site-footer .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .site-footer .logo p {
                        color: #94a3b8;
                    }
                    .footer-blurb {
                        color: #94a3b8;
                        margin-bottom: 1rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #334155;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        font-weight: 700;
                        transition: background 0.3s ease;
                    }
                    .footer-social a:hover {
                        background: #ea580c;
                    }
                    .site-footer h4 {
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links a,
                    .footer-contact a {
                        color: #94a3b8;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-links a:hover,
                    .footer-contact a:hover {
                        color: #fb923c;
                    }
                    .footer-contact p {
                        color: #94a3b8;
                        margin-bottom: 0.75rem;
                    }
                    .footer-bottom {
                        border-top: 1px solid #334155;
                        padding-top: 2rem;
                        text-align: center;
                        color: #94a3b8;
                    }

                    @media (max-width: 950px) {
                        .desktop-nav,
                        .header-inner > .call-button {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .hero-grid,
                        .about-grid,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                        .field-row {
                            grid-template-columns: 1fr;
                        }
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-title,
                        .section-heading h2,
                        .about-title {
                            font-size: 2.2rem;
                        }
                        .hero-photo {
                            height: 400px;
                        }
                    }
                "#}
            </style>
            <main>
                <HeroSection />
                <ServicesSection />
                <AboutSection />
                <ContactSection />
            </main>
            <Footer />
        </>
    }
}
