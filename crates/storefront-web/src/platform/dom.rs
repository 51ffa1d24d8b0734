//! Thin wrappers over the browser globals the storefront touches.
//!
//! Every call is best effort: a missing window, document or element is logged
//! and skipped so a broken DOM never takes the app loop down.

use log::{debug, warn};
use storefront_core::section::SectionId;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub const PROJECTS_CONTAINER_ID: &str = "projectsContainer";
const TOUCH_DEVICE_CLASS: &str = "touch-device";

pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

fn window() -> Option<Window> {
    let window = web_sys::window();
    if window.is_none() {
        warn!("dom: no window");
    }
    window
}

fn document() -> Option<Document> {
    window()?.document()
}

fn element_by_id(id: &str) -> Option<Element> {
    let element = document()?.get_element_by_id(id);
    if element.is_none() {
        debug!("dom: #{} not found", id);
    }
    element
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Layout width of the viewport in CSS pixels.
pub fn viewport_width() -> Option<u32> {
    let width = window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Current URL fragment without its leading `#`.
pub fn read_fragment() -> String {
    let Some(window) = window() else {
        return String::new();
    };

    match window.location().hash() {
        Ok(hash) => hash.trim_start_matches('#').to_owned(),
        Err(err) => {
            warn!("dom: failed to read location hash: {}", describe(&err));
            String::new()
        }
    }
}

/// Records `#<section>` as a new history entry without jumping to the anchor.
pub fn write_fragment(section: SectionId) {
    let Some(window) = window() else {
        return;
    };

    let url = format!("#{}", section.as_str());
    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str())));
    if let Err(err) = pushed {
        warn!("dom: failed to push {}: {}", url, describe(&err));
    }
}

pub fn scroll_section_to_top(section: SectionId) {
    if let Some(element) = element_by_id(section.as_str()) {
        element.set_scroll_top(0);
    }
}

/// Smoothly scrolls the projects strip horizontally.
pub fn scroll_projects_by(delta_px: i32) {
    let Some(container) = element_by_id(PROJECTS_CONTAINER_ID) else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_left(delta_px as f64);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_by_with_scroll_to_options(&options);
}

pub fn alert(message: &str) {
    let Some(window) = window() else {
        return;
    };

    if let Err(err) = window.alert_with_message(message) {
        warn!("dom: alert failed: {}", describe(&err));
    }
}

/// Toggles `overflow: hidden` on the body.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };

    let overflow = if locked { "hidden" } else { "auto" };
    if let Err(err) = body.style().set_property("overflow", overflow) {
        warn!("dom: failed to set body overflow: {}", describe(&err));
    }
}

/// Tags the body with `touch-device` when the browser exposes touch events.
pub fn mark_touch_device() {
    let Some(window) = window() else {
        return;
    };

    let has_touch = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    if !has_touch {
        return;
    }

    let Some(body) = window.document().and_then(|document| document.body()) else {
        return;
    };
    if let Err(err) = body.class_list().add_1(TOUCH_DEVICE_CLASS) {
        warn!("dom: failed to tag touch device: {}", describe(&err));
    } else {
        debug!("dom: touch device");
    }
}

/// Elements matching `selector`, skipping nodes that are not elements.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(document) = document() else {
        return Vec::new();
    };

    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!("dom: bad selector {}: {}", selector, describe(&err));
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
