use storefront_core::{input::InputEvent, render::Screen, section::SectionId};
use yew::{html::Scope, prelude::*};

use super::{StorefrontRoot, send};

const LOGO_IMAGE: &str = "public/logo.png";

pub(super) fn render(screen: &Screen<'_>, link: &Scope<StorefrontRoot>) -> Html {
    let sidebar = screen.sidebar;

    html! {
        <>
            <button
                class="mobile-menu-toggle"
                aria-label="menu"
                onclick={link.callback(|_| send(InputEvent::MenuToggleClicked))}
            >
                <i class="fas fa-bars"></i>
            </button>
            <div
                class={classes!("sidebar-overlay", sidebar.open.then_some("active"))}
                onclick={link.callback(|_| send(InputEvent::SidebarOverlayClicked))}
            ></div>
            <aside
                id="sidebar"
                class={classes!(
                    "sidebar",
                    sidebar.open.then_some("active"),
                    sidebar.expanded.then_some("expanded"),
                )}
                onmouseenter={link.callback(|_| send(InputEvent::SidebarHovered(true)))}
                onmouseleave={link.callback(|_| send(InputEvent::SidebarHovered(false)))}
            >
                <div class="logo">
                    <img src={LOGO_IMAGE} alt={screen.title.to_owned()} class="loaded" />
                    <span class="logo-text">{ screen.title }</span>
                </div>
                <button
                    class="sidebar-close"
                    aria-label="close"
                    onclick={link.callback(|_| send(InputEvent::SidebarCloseClicked))}
                >
                    <i class="fas fa-times"></i>
                </button>
                <nav>
                    <ul class="nav-menu">
                        { for SectionId::ALL.into_iter().map(|section| nav_item(section, screen.active_section, link)) }
                    </ul>
                </nav>
            </aside>
        </>
    }
}

fn nav_item(section: SectionId, active: SectionId, link: &Scope<StorefrontRoot>) -> Html {
    let onclick = link.callback(move |event: MouseEvent| {
        event.prevent_default();
        send(InputEvent::NavLinkClicked(section))
    });

    html! {
        <li>
            <a
                href={format!("#{}", section.as_str())}
                class={classes!("nav-link", (section == active).then_some("active"))}
                data-section={section.as_str()}
                title={format!("Alt+{}", section.shortcut())}
                {onclick}
            >
                <i class={section.nav_icon()}></i>
                <span class="nav-text">{ section.nav_label() }</span>
            </a>
        </li>
    }
}
