//! Scroll-triggered reveal of project and service cards.

use log::{debug, warn};
use storefront_core::input::InputSender;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{input::browser::parse_reveal_marker, platform::dom};

const REVEAL_SELECTOR: &str = "[data-reveal]";
const REVEAL_ATTRIBUTE: &str = "data-reveal";
const VISIBLE_THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Reports each marked card once, the first time it scrolls into view.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn install(sender: InputSender) -> Option<Self> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    observer.unobserve(&target);
                    let Some(marker) = target.get_attribute(REVEAL_ATTRIBUTE) else {
                        continue;
                    };
                    match parse_reveal_marker(&marker) {
                        Some(event) => sender.send(event),
                        None => warn!("reveal: unknown marker {}", marker),
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("reveal: observer unavailable: {:?}", err);
                    return None;
                }
            };

        let targets = dom::query_all(REVEAL_SELECTOR);
        debug!("reveal: observing {} cards", targets.len());
        for target in &targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
