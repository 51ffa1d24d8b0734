//! Translation of browser events into [`InputEvent`]s.

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, error};
use storefront_core::{
    gesture::{DoubleTapGuard, TouchPoint},
    input::{InputEvent, InputSender, KeyCode},
    section::SectionId,
};
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, Event, KeyboardEvent, TouchEvent};

use crate::platform::dom;

const DOUBLE_TAP_WINDOW_MS: u64 = 300;

pub fn key_code(key: &str) -> KeyCode {
    match key {
        "Escape" | "Esc" => KeyCode::Escape,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => KeyCode::Other,
            }
        }
    }
}

/// Alt+digit is read from the physical key, since Alt changes the produced
/// character on some layouts.
pub fn key_input(event: &KeyboardEvent) -> InputEvent {
    let alt = event.alt_key();
    let digit = event
        .code()
        .strip_prefix("Digit")
        .and_then(|rest| rest.chars().next());

    let key = match digit {
        Some(ch) if alt => KeyCode::Char(ch),
        _ => key_code(&event.key()),
    };
    InputEvent::KeyPressed { key, alt }
}

/// Screen position of the touch that changed in `event`.
pub fn touch_point(event: &TouchEvent) -> Option<TouchPoint> {
    let touch = event.changed_touches().get(0)?;
    Some(TouchPoint::new(touch.screen_x(), touch.screen_y()))
}

/// Parses a `data-reveal` marker such as `project:2` or `service:0`.
pub fn parse_reveal_marker(marker: &str) -> Option<InputEvent> {
    let (kind, index) = marker.split_once(':')?;
    let index = index.parse::<usize>().ok()?;
    match kind {
        "project" => Some(InputEvent::CardRevealed(index)),
        "service" => Some(InputEvent::ServiceRevealed(index)),
        _ => None,
    }
}

pub fn reveal_marker(kind: &str, index: usize) -> String {
    format!("{}:{}", kind, index)
}

/// Window and document level listeners. Dropping the value removes them.
pub struct BrowserListeners {
    _listeners: Vec<EventListener>,
}

impl BrowserListeners {
    pub fn install(sender: InputSender) -> Self {
        let mut listeners = Vec::new();
        let Some(window) = web_sys::window() else {
            error!("input: no window, browser listeners not installed");
            return Self {
                _listeners: listeners,
            };
        };

        let keys = sender.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let input = key_input(event);
                if let InputEvent::KeyPressed {
                    key: KeyCode::Char(ch),
                    alt: true,
                } = input
                    && SectionId::from_shortcut(ch).is_some()
                {
                    event.prevent_default();
                }
                keys.send(input);
            },
        ));

        for event_type in ["hashchange", "popstate"] {
            let fragments = sender.clone();
            listeners.push(EventListener::new(&window, event_type, move |_| {
                fragments.send(InputEvent::FragmentChanged(dom::read_fragment()));
            }));
        }

        let resizes = sender.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            if let Some(width) = dom::viewport_width() {
                resizes.send(InputEvent::ViewportResized { width });
            }
        }));

        listeners.push(EventListener::new(&window, "error", |event: &Event| {
            match event.dyn_ref::<ErrorEvent>() {
                Some(event) => error!(
                    "page error: {} ({}:{})",
                    event.message(),
                    event.filename(),
                    event.lineno()
                ),
                None => error!("page error"),
            }
        }));

        if let Some(document) = window.document() {
            let starts = sender.clone();
            listeners.push(EventListener::new(&document, "touchstart", move |event: &Event| {
                if let Some(point) = event.dyn_ref::<TouchEvent>().and_then(touch_point) {
                    starts.send(InputEvent::PageTouchStarted(point));
                }
            }));

            let ends = sender;
            let mut double_tap = DoubleTapGuard::new(DOUBLE_TAP_WINDOW_MS);
            listeners.push(EventListener::new_with_options(
                &document,
                "touchend",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    if double_tap.touch_ended(dom::now_ms()) {
                        event.prevent_default();
                    }
                    if let Some(point) = event.dyn_ref::<TouchEvent>().and_then(touch_point) {
                        ends.send(InputEvent::PageTouchEnded(point));
                    }
                },
            ));
        }

        debug!("input: {} browser listeners installed", listeners.len());
        Self {
            _listeners: listeners,
        }
    }
}
