use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config::SiteConfig;

struct Card {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    text: &'static str,
}

const STEPS: [Card; 3] = [
    Card { icon: "📤", title: "Upload License", desc: "Submit your unused software licenses securely." },
    Card { icon: "💲", title: "Get Valuation", desc: "Receive a fair and transparent valuation instantly." },
    Card { icon: "✅", title: "Get Paid", desc: "Get paid quickly via your preferred payment method." },
];

const REASONS: [Card; 4] = [
    Card { icon: "🛡️", title: "Secure Transactions", desc: "Your data is protected with top-tier security." },
    Card { icon: "💲", title: "Fair Valuations", desc: "Get the best price for your licenses." },
    Card { icon: "🎧", title: "24/7 Support", desc: "Our team is here to help anytime." },
    Card { icon: "✅", title: "Fast Payments", desc: "Receive your payment within 24 hours." },
];

const STARS: &str = "★★★★★";

const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "John Doe",
        role: "IT Manager",
        company: "TechCorp",
        text: "SoftSell made selling our unused licenses so easy. Fast payment and great support!",
    },
    Testimonial {
        name: "Jane Smith",
        role: "Procurement Lead",
        company: "Innovate Ltd",
        text: "The valuation was fair, and the process was seamless. Highly recommend!",
    },
];

fn card(card: &Card, index: usize) -> Html {
    html! {
        <div class="info-card" key={index} style={format!("animation-delay: {}ms;", index * 200)}>
            <div class="info-card-icon">{ card.icon }</div>
            <h3>{ card.title }</h3>
            <p>{ card.desc }</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_else(|| Rc::new(SiteConfig::degraded()));
    let brand = config.brand_name.as_str();
    let year = chrono::Local::now().year();

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

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Sell Your Unused Software Licenses"}</h1>
                    <p class="hero-subtitle">
                        {format!("Get instant valuations and fast payments with {}.", brand)}
                    </p>
                    <a href="#contact" class="hero-cta">{"Sell My Licenses"}</a>
                </div>
            </section>

            <section class="info-section">
                <h2>{"How It Works"}</h2>
                <div class="card-grid three">
                    { for STEPS.iter().enumerate().map(|(i, step)| card(step, i)) }
                </div>
            </section>

            <section class="info-section alt">
                <h2>{format!("Why Choose {}?", brand)}</h2>
                <div class="card-grid four">
                    { for REASONS.iter().enumerate().map(|(i, reason)| card(reason, i)) }
                </div>
            </section>

            <section class="info-section">
                <h2>{"What Our Customers Say"}</h2>
                <div class="card-grid two">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, review)| html! {
                        <div class="testimonial" key={i}>
                            <div class="stars">{ STARS }</div>
                            <p class="testimonial-text">{ review.text }</p>
                            <p class="testimonial-name">{ review.name }</p>
                            <p class="testimonial-role">{ format!("{}, {}", review.role, review.company) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Get In Touch"}</h2>
                <ContactForm />
            </section>

            <footer class="site-footer">
                <p>{ format!("© {} {}. All rights reserved.", year, brand) }</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    padding-top: 72px;
                }
                .hero {
                    padding: 6rem 2rem 3rem;
                    text-align: center;
                    color: #fff;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                }
                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                    animation: dropIn 0.8s ease-out;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #fff;
                    color: #2563eb;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .hero-cta:hover {
                    background: #e5e7eb;
                }
                @keyframes dropIn {
                    from { opacity: 0; transform: translateY(-50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .info-section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .info-section.alt {
                    background: #e5e7eb;
                    max-width: none;
                }
                .dark .info-section.alt {
                    background: #1f2937;
                }
                .info-section h2,
                .contact-section h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                .info-card,
                .testimonial {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    animation: riseIn 0.5s ease-out both;
                    transition: transform 0.2s ease;
                }
                .dark .info-card,
                .dark .testimonial {
                    background: #374151;
                }
                .info-card {
                    text-align: center;
                }
                .info-card:hover {
                    transform: scale(1.05);
                }
                .info-card-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .stars {
                    color: #eab308;
                    margin-bottom: 1rem;
                }
                .testimonial-name {
                    font-weight: 600;
                }
                .testimonial-role {
                    color: #6b7280;
                }
                .contact-section {
                    padding: 4rem 2rem;
                    color: #fff;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                }
                .contact-form {
                    max-width: 32rem;
                    margin: 0 auto;
                }
                .form-group {
                    margin-bottom: 1rem;
                }
                .form-group label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: none;
                    color: #111827;
                }
                .contact-submit {
                    width: 100%;
                    background: #fff;
                    color: #2563eb;
                    font-weight: 600;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .success-message,
                .error-message {
                    margin-bottom: 1rem;
                    padding: 0.75rem;
                    border-radius: 8px;
                }
                .success-message { background: rgba(34, 197, 94, 0.3); }
                .error-message { background: rgba(239, 68, 68, 0.3); }
                .site-footer {
                    padding: 1.5rem;
                    text-align: center;
                    background: #1f2937;
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .card-grid.two,
                    .card-grid.three,
                    .card-grid.four {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
