//! Yew renderer for the storefront [`Screen`].

mod contact;
mod modal;
mod projects;
mod sections;
mod sidebar;
pub mod style;

use gloo::timers::callback::Interval;
use log::debug;
use storefront_core::{
    app::{Effect, StorefrontApp, StorefrontConfig, TickResult},
    content::static_catalog::StaticCatalog,
    input::{InputEvent, InputSender, QueuedInput},
    render::{ImageStatus, Screen},
    section::SectionId,
};
use yew::{html::Scope, prelude::*};

use crate::{
    input::browser::BrowserListeners,
    platform::{dom, reveal::RevealObserver},
};

const TICK_INTERVAL_MS: u32 = 16;

#[derive(Properties, Clone, PartialEq)]
pub struct StorefrontProps {
    pub catalog: StaticCatalog<'static>,
    pub config: StorefrontConfig,
    pub title: &'static str,
}

pub enum Msg {
    Input(InputEvent),
    Tick,
}

pub struct StorefrontRoot {
    app: StorefrontApp<StaticCatalog<'static>, QueuedInput>,
    sender: InputSender,
    scroll_locked: bool,
    _reveal: Option<RevealObserver>,
    _listeners: BrowserListeners,
    _ticker: Interval,
}

impl Component for StorefrontRoot {
    type Message = Msg;
    type Properties = StorefrontProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let input = QueuedInput::new();
        let sender = input.sender();
        let mut app = StorefrontApp::new(props.catalog, input, props.config, props.title);

        if let Some(width) = dom::viewport_width() {
            app.set_viewport_width(width);
        }
        app.handle_fragment(&dom::read_fragment(), dom::now_ms());

        let link = ctx.link().clone();
        let ticker = Interval::new(TICK_INTERVAL_MS, move || link.send_message(Msg::Tick));
        let listeners = BrowserListeners::install(sender.clone());

        Self {
            app,
            sender,
            scroll_locked: false,
            _reveal: None,
            _listeners: listeners,
            _ticker: ticker,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Msg::Input(event) = msg {
            self.sender.send(event);
        }

        let result = self.app.tick(dom::now_ms());
        self.app.drain_effects(apply_effect);

        let locked = self.app.body_scroll_locked();
        if locked != self.scroll_locked {
            self.scroll_locked = locked;
            dom::set_body_scroll_locked(locked);
        }

        result == TickResult::RenderRequested
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self._reveal = RevealObserver::install(self.sender.clone());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let mut page = Html::default();
        self.app
            .with_screen(dom::now_ms(), |screen| page = render_page(&screen, link));
        page
    }
}

fn apply_effect(effect: Effect) {
    debug!("effect: {:?}", effect);
    match effect {
        Effect::WriteFragment(section) => dom::write_fragment(section),
        Effect::ScrollSectionToTop(section) => dom::scroll_section_to_top(section),
        Effect::ScrollProjects { delta_px } => dom::scroll_projects_by(delta_px),
        Effect::Alert(message) => dom::alert(message),
    }
}

fn render_page(screen: &Screen<'_>, link: &Scope<StorefrontRoot>) -> Html {
    html! {
        <div class="app-shell">
            { sidebar::render(screen, link) }
            <main class="main-content">
                { sections::home(screen, link) }
                { projects::render(screen, link) }
                { sections::services(screen) }
                { sections::about(screen) }
                { contact::render(screen, link) }
            </main>
            { screen.modal.map(|view| modal::render(&view, link)).unwrap_or_default() }
        </div>
    }
}

/// Wraps an app event in a component message.
fn send(event: InputEvent) -> Msg {
    Msg::Input(event)
}

fn image_class(status: ImageStatus) -> Option<&'static str> {
    match status {
        ImageStatus::Pending => None,
        ImageStatus::Loaded => Some("loaded"),
        ImageStatus::Failed => Some("error"),
    }
}

/// Section wrapper shared by every page section.
fn section_class(screen: &Screen<'_>, id: SectionId) -> Classes {
    classes!("section", (screen.active_section == id).then_some("active"))
}

/// Inline style of the `index`th `animate-fade-up` element of `id`.
fn entrance_style(screen: &Screen<'_>, id: SectionId, index: usize) -> String {
    if screen.active_section != id {
        return String::new();
    }
    style::fade_up(screen.section_entrance.and_then(|frame| frame.element(index)))
}
