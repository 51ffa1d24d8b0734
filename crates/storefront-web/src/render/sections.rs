use storefront_core::{input::InputEvent, render::Screen, section::SectionId};
use yew::{html::Scope, prelude::*};

use super::{StorefrontRoot, entrance_style, section_class, send, style};
use crate::input::browser::reveal_marker;

fn anchor(target: SectionId, link: &Scope<StorefrontRoot>) -> Callback<MouseEvent> {
    link.callback(move |event: MouseEvent| {
        event.prevent_default();
        send(InputEvent::AnchorClicked(target.as_str().to_owned()))
    })
}

pub(super) fn home(screen: &Screen<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let id = SectionId::Home;

    html! {
        <section id={id.as_str()} class={section_class(screen, id)}>
            <div class="hero">
                <h1 class="hero-title animate-fade-up" style={entrance_style(screen, id, 0)}>
                    { screen.title }
                </h1>
                <p class="hero-subtitle animate-fade-up" style={entrance_style(screen, id, 1)}>
                    { "نصمم مواقع احترافية تعكس هوية مشروعك وتحقق أهدافه" }
                </p>
                <div class="hero-buttons animate-fade-up" style={entrance_style(screen, id, 2)}>
                    <a href="#projects" class="btn btn-primary" onclick={anchor(SectionId::Projects, link)}>
                        <i class="fas fa-briefcase"></i>
                        { "تصفح أعمالنا" }
                    </a>
                    <a href="#contact" class="btn btn-secondary" onclick={anchor(SectionId::Contact, link)}>
                        <i class="fas fa-envelope"></i>
                        { "اطلب موقعك" }
                    </a>
                </div>
            </div>
        </section>
    }
}

pub(super) fn services(screen: &Screen<'_>) -> Html {
    let id = SectionId::Services;

    html! {
        <section id={id.as_str()} class={section_class(screen, id)}>
            <div class="section-header">
                <h2 class="section-title animate-fade-up" style={entrance_style(screen, id, 0)}>
                    { id.nav_label() }
                </h2>
                <p class="section-subtitle animate-fade-up" style={entrance_style(screen, id, 1)}>
                    { "حلول ويب متكاملة تناسب احتياجات عملك" }
                </p>
            </div>
            <div class="services-grid">
                { for screen.services.iter().map(|service| html! {
                    <div
                        class="service-card"
                        data-reveal={reveal_marker("service", service.index)}
                        style={style::reveal(service.reveal)}
                    >
                        <div class="service-icon"><i class={service.icon.to_owned()}></i></div>
                        <h3>{ service.title }</h3>
                        <p>{ service.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

pub(super) fn about(screen: &Screen<'_>) -> Html {
    let id = SectionId::About;

    html! {
        <section id={id.as_str()} class={section_class(screen, id)}>
            <div class="section-header">
                <h2 class="section-title animate-fade-up" style={entrance_style(screen, id, 0)}>
                    { id.nav_label() }
                </h2>
            </div>
            <div class="about-content animate-fade-up" style={entrance_style(screen, id, 1)}>
                <p>
                    { "نحن فريق متخصص في تصميم وتطوير المواقع الحديثة، نهتم بالتفاصيل ونبني تجارب سريعة ومتجاوبة على جميع الأجهزة." }
                </p>
            </div>
            <div class="about-stats animate-fade-up" style={entrance_style(screen, id, 2)}>
                <div class="stat"><span class="stat-number">{ screen.projects.len().to_string() }</span><span>{ "مشروع منجز" }</span></div>
                <div class="stat"><span class="stat-number">{ screen.services.len().to_string() }</span><span>{ "خدمات" }</span></div>
            </div>
        </section>
    }
}
