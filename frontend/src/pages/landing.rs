use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::fade_in::{FadeIn, FadeKind};
use crate::components::glow_card::GlowCard;
use crate::components::parallax::Particles;
use crate::components::press_button::{use_press, PressButton};
use crate::components::stats::StatsSection;
use crate::components::typing::TypingTitle;
use crate::dom;
use crate::pages::faq::FaqSection;

pub const TELEGRAM_URL: &str = "https://t.me/socialunlock";

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🔑",
        "Account Recovery",
        "Locked out, hacked or wrongly suspended. We work the official appeal channels until you are back in.",
    ),
    (
        "🛡️",
        "Security Hardening",
        "Two-factor setup, recovery contacts and session audits so it does not happen twice.",
    ),
    (
        "✅",
        "Verification Support",
        "Prepare and submit verification requests that meet each platform's criteria.",
    ),
    (
        "📈",
        "Growth Strategy",
        "Content and posting plans built around how your audience actually engages.",
    ),
];

const PILLARS: &[(&str, &str)] = &[
    ("Discretion", "Your case stays between you and your specialist."),
    ("Speed", "Most accounts are restored within three days."),
    ("Honesty", "If we cannot help, we tell you before you pay anything."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let telegram_press = use_press();

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::smooth_scroll_to("#contact");
    });

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <Particles />
                <div class="hero-content">
                    <TypingTitle text="Elite Social Media Solutions" />
                    <p class="hero-subtitle">
                        {"Account recovery, security and growth for creators and businesses who cannot afford to be locked out."}
                    </p>
                    <div class="hero-cta-group">
                        <PressButton class="cta-button" onclick={to_contact}>
                            {"Get Started"}
                        </PressButton>
                        <AnchorLink href="#services" class="secondary-link">
                            {"See what we do"}
                        </AnchorLink>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="container">
                    <FadeIn kind={FadeKind::Title}>{"Services"}</FadeIn>
                    <FadeIn kind={FadeKind::Subtitle}>{"One team for every platform"}</FadeIn>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <GlowCard class="service-card" track_pointer={true}>
                                <div class="service-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </GlowCard>
                        }) }
                    </div>
                </div>
            </section>

            <section id="approach" class="pillars-section">
                <div class="container">
                    <FadeIn kind={FadeKind::Title}>{"How We Work"}</FadeIn>
                    <div class="pillars-grid">
                        { for PILLARS.iter().map(|(title, text)| html! {
                            <GlowCard class="pillar-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </GlowCard>
                        }) }
                    </div>
                </div>
            </section>

            <StatsSection />

            <FaqSection />

            <section id="contact" class="contact-section">
                <div class="container">
                    <FadeIn kind={FadeKind::Title}>{"Get Your Account Back"}</FadeIn>
                    <FadeIn kind={FadeKind::Text}>
                        {"Message us on Telegram with your handle and what happened. A specialist will reply within the hour."}
                    </FadeIn>
                    <a
                        class="cta-button"
                        href={TELEGRAM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        style={telegram_press.style}
                        onmousedown={telegram_press.onmousedown}
                        onmouseup={telegram_press.onmouseup}
                    >
                        {"📲 @socialunlock on Telegram"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <p>{"© SocialUnlock. Not affiliated with any social media platform."}</p>
            </footer>

            <style>
                {r#"
                :root {
                    --neon-cyan: #00d4ff;
                    --bg-dark: #05070d;
                    --card-bg: rgba(12, 18, 30, 0.85);
                    --text-muted: #9aa4b5;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                body {
                    margin: 0;
                    background: var(--bg-dark);
                    color: #fff;
                    font-family: 'Inter', system-ui, sans-serif;
                }
                .grid-canvas {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }
                .landing-page {
                    position: relative;
                    z-index: 1;
                }
                .container {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                section {
                    padding: 6rem 0;
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    background: rgba(5, 7, 13, 0.8);
                    backdrop-filter: blur(8px);
                }
                .nav-container {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .logo {
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: var(--neon-cyan);
                }
                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger .bar {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .hamburger.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .hamburger.active .bar:nth-child(2) { opacity: 0; }
                .hamburger.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                }
                .animated-particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: var(--neon-cyan);
                    opacity: 0.4;
                }
                .particle:nth-child(3n) { left: 12%; top: 30%; }
                .particle:nth-child(3n+1) { left: 48%; top: 72%; }
                .particle:nth-child(3n+2) { left: 83%; top: 18%; }
                .hero-title {
                    font-size: 3.5rem;
                    min-height: 1.2em;
                    text-shadow: 0 0 20px rgba(0, 212, 255, 0.4);
                }
                .hero-subtitle {
                    max-width: 600px;
                    margin: 0 auto 2rem;
                    color: var(--text-muted);
                    font-size: 1.2rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .cta-button {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border: 1px solid var(--neon-cyan);
                    border-radius: 8px;
                    background: rgba(0, 212, 255, 0.1);
                    color: #fff;
                    font-size: 1rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.1s ease, box-shadow 0.2s ease;
                }
                .cta-button:hover {
                    box-shadow: 0 0 20px rgba(0, 212, 255, 0.5);
                }
                .secondary-link {
                    color: var(--neon-cyan);
                }
                .services-grid,
                .pillars-grid,
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .service-card,
                .pillar-card,
                .stat-card {
                    --glow-opacity: 0;
                    position: relative;
                    padding: 2rem;
                    border: 1px solid rgba(0, 212, 255, 0.15);
                    border-radius: 12px;
                    background: var(--card-bg);
                    overflow: hidden;
                }
                .service-card::before,
                .pillar-card::before,
                .stat-card::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    opacity: var(--glow-opacity);
                    transition: opacity 0.3s ease;
                    background: radial-gradient(300px circle at var(--mouse-x, 50%) var(--mouse-y, 50%), rgba(0, 212, 255, 0.15), transparent 60%);
                    pointer-events: none;
                }
                .service-icon {
                    font-size: 2rem;
                }
                .stat-card {
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    color: var(--neon-cyan);
                }
                .stat-label {
                    color: var(--text-muted);
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: var(--text-muted);
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                .contact-section {
                    text-align: center;
                }
                .footer {
                    padding: 2rem;
                    text-align: center;
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .hamburger {
                        display: block;
                    }
                    .nav-menu {
                        position: fixed;
                        top: 60px;
                        left: -100%;
                        width: 100%;
                        flex-direction: column;
                        padding: 2rem 0;
                        text-align: center;
                        background: rgba(5, 7, 13, 0.97);
                        transition: left 0.3s ease;
                    }
                    .nav-menu.active {
                        left: 0;
                    }
                    .hero-title {
                        font-size: 2.2rem;
                    }
                    .hero-cta-group {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
