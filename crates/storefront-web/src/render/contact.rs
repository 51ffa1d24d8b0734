use storefront_core::{
    form::{FormField, ProjectType},
    input::InputEvent,
    render::Screen,
    section::SectionId,
    text_policy::{SUBMIT_LABEL, SUBMITTING_LABEL},
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::{html::Scope, prelude::*};

use super::{Msg, StorefrontRoot, entrance_style, section_class, send};

fn edited(field: FormField, value: String) -> Msg {
    send(InputEvent::FormFieldEdited { field, value })
}

fn on_text_input(field: FormField, link: &Scope<StorefrontRoot>) -> Callback<web_sys::InputEvent> {
    link.callback(move |event: web_sys::InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        edited(field, input.value())
    })
}

pub(super) fn render(screen: &Screen<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let id = SectionId::Contact;
    let form = screen.form;

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        send(InputEvent::FormSubmitted)
    });
    let on_project_type = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        edited(FormField::ProjectType, select.value())
    });
    let on_message = link.callback(|event: web_sys::InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        edited(FormField::Message, area.value())
    });

    html! {
        <section id={id.as_str()} class={section_class(screen, id)}>
            <div class="section-header">
                <h2 class="section-title animate-fade-up" style={entrance_style(screen, id, 0)}>
                    { id.nav_label() }
                </h2>
                <p class="section-subtitle animate-fade-up" style={entrance_style(screen, id, 1)}>
                    { "أخبرنا عن مشروعك وسنعود إليك في أقرب وقت" }
                </p>
            </div>
            <form id="contactForm" class="contact-form animate-fade-up" style={entrance_style(screen, id, 2)} {onsubmit}>
                <div class="form-group">
                    <label for="name">{ "الاسم" }</label>
                    <input
                        id="name"
                        type="text"
                        required=true
                        value={form.name.to_owned()}
                        oninput={on_text_input(FormField::Name, link)}
                    />
                </div>
                <div class="form-group">
                    <label for="email">{ "البريد الإلكتروني" }</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        value={form.email.to_owned()}
                        oninput={on_text_input(FormField::Email, link)}
                    />
                </div>
                <div class="form-group">
                    <label for="projectType">{ "نوع المشروع" }</label>
                    <select id="projectType" onchange={on_project_type}>
                        <option value="" selected={form.project_type.is_empty()} disabled=true>
                            { "اختر نوع المشروع" }
                        </option>
                        { for ProjectType::ALL.into_iter().map(|kind| html! {
                            <option value={kind.as_value()} selected={form.project_type == kind.as_value()}>
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="message">{ "الرسالة" }</label>
                    <textarea id="message" rows="5" required=true value={form.message.to_owned()} oninput={on_message} />
                </div>
                <button type="submit" class="btn btn-primary submit-btn" disabled={form.submitting}>
                    if form.submitting {
                        <i class="fas fa-spinner fa-spin"></i>
                        { SUBMITTING_LABEL }
                    } else {
                        <i class="fas fa-paper-plane"></i>
                        { SUBMIT_LABEL }
                    }
                </button>
            </form>
        </section>
    }
}
