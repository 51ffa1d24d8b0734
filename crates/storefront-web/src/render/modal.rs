use storefront_core::{
    input::{ImageSlot, InputEvent},
    render::ModalView,
    text_policy::{REQUEST_SIMILAR_LABEL, VIEW_LABEL},
};
use yew::{html::Scope, prelude::*};

use super::{StorefrontRoot, image_class, send, style};

pub(super) fn render(modal: &ModalView<'_>, link: &Scope<StorefrontRoot>) -> Html {
    // Clicks bubbling up from the dialog do not close it.
    let on_overlay = link.batch_callback(|event: MouseEvent| {
        (event.target() == event.current_target()).then(|| send(InputEvent::ModalOverlayClicked))
    });

    html! {
        <div id="modalOverlay" class="modal-overlay active" onclick={on_overlay}>
            <div class="modal-container" style={style::zoom(modal.entrance)}>
                <button
                    class="modal-close"
                    aria-label="close"
                    onclick={link.callback(|_| send(InputEvent::ModalCloseClicked))}
                >
                    <i class="fas fa-times"></i>
                </button>
                { gallery(modal, link) }
                <div class="modal-content">
                    <h2 id="modalTitle" class="modal-title">{ modal.title }</h2>
                    <p id="modalType" class="modal-type">
                        <i class="fas fa-tag"></i>
                        { " " }
                        { modal.category }
                    </p>
                    <p id="modalDescription" class="modal-description">{ modal.description }</p>
                    <div class="modal-section">
                        <h3>{ "الهدف من المشروع" }</h3>
                        <p id="modalGoal">{ modal.goal }</p>
                    </div>
                    <div class="modal-section">
                        <h3>{ "التقنيات المستخدمة" }</h3>
                        <div id="modalTechnologies" class="modal-tags">
                            { for modal.technologies.iter().map(|tech| html! {
                                <span class="modal-tag">{ *tech }</span>
                            }) }
                        </div>
                    </div>
                    <div class="modal-section">
                        <h3>{ "المميزات" }</h3>
                        <ul id="modalFeatures" class="modal-features">
                            { for modal.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                        </ul>
                    </div>
                    <div class="modal-actions">
                        <a
                            id="modalLiveLink"
                            href={modal.live_demo.to_owned()}
                            target="_blank"
                            rel="noopener"
                            class="btn btn-secondary"
                        >
                            <i class="fas fa-external-link-alt"></i>
                            { VIEW_LABEL }
                        </a>
                        <button
                            id="modalRequestBtn"
                            class="btn btn-primary"
                            onclick={link.callback(|_| send(InputEvent::ModalRequestClicked))}
                        >
                            <i class="fas fa-paper-plane"></i>
                            { REQUEST_SIMILAR_LABEL }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn gallery(modal: &ModalView<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let slot = ImageSlot::Gallery;
    let dots = if modal.show_dots {
        html! {
            <div id="galleryDots" class="gallery-dots">
                { for (0..modal.image_total).map(|index| html! {
                    <div
                        class={classes!("gallery-dot", (index == modal.image_index).then_some("active"))}
                        onclick={link.callback(move |_| send(InputEvent::GalleryDotClicked(index)))}
                    ></div>
                }) }
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="modal-gallery">
            <img
                id="modalImage"
                src={modal.image_src.to_owned()}
                alt={modal.title.to_owned()}
                class={classes!("gallery-main", image_class(modal.image))}
                style={style::gallery_image(modal.image_hidden, modal.image_animation)}
                onload={link.callback(move |_| send(InputEvent::ImageLoaded(slot)))}
                onerror={link.callback(move |_| send(InputEvent::ImageFailed(slot)))}
            />
            <button
                class="gallery-nav gallery-prev"
                aria-label="previous"
                onclick={link.callback(|_| send(InputEvent::GalleryPrevClicked))}
            >
                <i class="fas fa-chevron-right"></i>
            </button>
            <button
                class="gallery-nav gallery-next"
                aria-label="next"
                onclick={link.callback(|_| send(InputEvent::GalleryNextClicked))}
            >
                <i class="fas fa-chevron-left"></i>
            </button>
            { dots }
        </div>
    }
}
