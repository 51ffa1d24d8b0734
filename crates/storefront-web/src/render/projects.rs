use storefront_core::{
    gesture::ScrollDirection,
    input::{ImageSlot, InputEvent},
    render::{ProjectCardView, Screen},
    section::SectionId,
    text_policy::{DETAILS_LABEL, VIEW_LABEL},
};
use web_sys::TouchEvent;
use yew::{html::Scope, prelude::*};

use super::{StorefrontRoot, entrance_style, image_class, section_class, send, style};
use crate::{
    input::browser::{reveal_marker, touch_point},
    platform::dom::PROJECTS_CONTAINER_ID,
};

pub(super) fn render(screen: &Screen<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let id = SectionId::Projects;
    let ontouchstart = link.batch_callback(|event: TouchEvent| {
        touch_point(&event).map(|point| send(InputEvent::ProjectsTouchStarted(point)))
    });
    let ontouchend = link.batch_callback(|event: TouchEvent| {
        touch_point(&event).map(|point| send(InputEvent::ProjectsTouchEnded(point)))
    });

    let strip = match screen.empty_notice {
        Some(notice) => html! {
            <p class="projects-empty">{ notice }</p>
        },
        None => html! {
            <>{ for screen.projects.iter().map(|card| project_card(card, link)) }</>
        },
    };

    html! {
        <section id={id.as_str()} class={section_class(screen, id)}>
            <div class="section-header">
                <h2 class="section-title animate-fade-up" style={entrance_style(screen, id, 0)}>
                    { id.nav_label() }
                </h2>
                <p class="section-subtitle animate-fade-up" style={entrance_style(screen, id, 1)}>
                    { "نماذج من المواقع التي صممناها لعملائنا" }
                </p>
            </div>
            <div class="projects-wrapper animate-fade-up" style={entrance_style(screen, id, 2)}>
                <button
                    class="scroll-btn scroll-left"
                    aria-label="scroll left"
                    onclick={link.callback(|_| send(InputEvent::ProjectsScrollClicked(ScrollDirection::Forward)))}
                >
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div id={PROJECTS_CONTAINER_ID} class="projects-container" {ontouchstart} {ontouchend}>
                    { strip }
                </div>
                <button
                    class="scroll-btn scroll-right"
                    aria-label="scroll right"
                    onclick={link.callback(|_| send(InputEvent::ProjectsScrollClicked(ScrollDirection::Backward)))}
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </section>
    }
}

fn project_card(card: &ProjectCardView<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let index = card.index;
    let slot = ImageSlot::Card(index);
    let on_details = link.callback(move |event: MouseEvent| {
        event.stop_propagation();
        send(InputEvent::ProductDetailsRequested(index))
    });

    html! {
        <div
            class="project-card"
            data-id={card.id.to_string()}
            data-reveal={reveal_marker("project", index)}
            style={style::card(card.reveal, card.hovered)}
            onmouseenter={link.callback(move |_| send(InputEvent::CardHovered(Some(index))))}
            onmouseleave={link.callback(|_| send(InputEvent::CardHovered(None)))}
        >
            <img
                src={card.cover_image.to_owned()}
                alt={card.name.to_owned()}
                class={classes!("project-image", image_class(card.image))}
                loading="lazy"
                onload={link.callback(move |_| send(InputEvent::ImageLoaded(slot)))}
                onerror={link.callback(move |_| send(InputEvent::ImageFailed(slot)))}
            />
            <div class="project-info">
                <h3 class="project-name">{ card.name }</h3>
                <p class="project-type">
                    <i class="fas fa-tag"></i>
                    { card.category }
                </p>
                <div class="project-actions">
                    <button class="btn btn-primary btn-small view-details-btn" onclick={on_details}>
                        <i class="fas fa-info-circle"></i>
                        { DETAILS_LABEL }
                    </button>
                    <a href={card.live_demo.to_owned()} target="_blank" rel="noopener" class="btn btn-secondary btn-small">
                        <i class="fas fa-external-link-alt"></i>
                        { VIEW_LABEL }
                    </a>
                </div>
            </div>
        </div>
    }
}
