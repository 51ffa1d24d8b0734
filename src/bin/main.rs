use log::{Level, info};
use storefront_core::{
    app::StorefrontConfig,
    content::{ProductCatalog, static_catalog::default_storefront_catalog},
    gesture::SwipeConfig,
};
use storefront_web::{
    platform::dom,
    render::{StorefrontProps, StorefrontRoot},
};

const TITLE: &str = "AWDD Store Studio";
const LOG_LEVEL: Level = Level::Debug;
const MOBILE_BREAKPOINT_PX: u32 = 768;
const PROJECTS_SCROLL_STEP_PX: i32 = 350;
const GALLERY_FADE_MS: u16 = 200;
const SUBMIT_DELAY_MS: u64 = 1_500;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    info!("boot: {} starting", TITLE);
    info!("Welcome to our portfolio store!");

    dom::mark_touch_device();

    let config = StorefrontConfig {
        projects_scroll_step_px: PROJECTS_SCROLL_STEP_PX,
        swipe: SwipeConfig::default(),
        ..StorefrontConfig::default()
    }
    .with_mobile_breakpoint_px(MOBILE_BREAKPOINT_PX)
    .with_gallery_fade_ms(GALLERY_FADE_MS)
    .with_submit_delay_ms(SUBMIT_DELAY_MS);

    let catalog = default_storefront_catalog();
    info!(
        "catalog products={} services={}",
        catalog.product_count(),
        catalog.service_count()
    );

    yew::Renderer::<StorefrontRoot>::with_props(StorefrontProps {
        catalog,
        config,
        title: TITLE,
    })
    .render();
}
