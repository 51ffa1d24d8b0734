//! Page controller: section navigation, product modal with gallery, mobile
//! sidebar, scroll reveals and the contact form.

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::{
    content::ProductCatalog,
    form::{ContactForm, FormField},
    gesture::{self, ScrollDirection, SidebarSwipe, SwipeConfig, TouchPoint},
    input::{ImageSlot, InputEvent, InputProvider, KeyCode},
    render::{
        AnimationKind, AnimationSpec, FormView, ImageStatus, ModalView, ProjectCardView, Reveal,
        Screen, ServiceCardView, SidebarView, StaggeredFrame,
    },
    section::SectionId,
    text_policy::{self, EMPTY_CATALOG_NOTICE, SUBMIT_SUCCESS_MESSAGE},
};

/// Upper bound of staggered elements per section used to decide when the
/// entrance has settled.
const MAX_STAGGERED_ELEMENTS: u64 = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Side effects the platform layer applies outside the rendered tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    /// Push `#id` to the location without jumping.
    WriteFragment(SectionId),
    ScrollSectionToTop(SectionId),
    ScrollProjects { delta_px: i32 },
    Alert(&'static str),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GalleryStep {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StorefrontConfig {
    /// Widths at or below this are treated as mobile.
    pub mobile_breakpoint_px: u32,
    pub projects_scroll_step_px: i32,
    pub swipe: SwipeConfig,
    pub gallery_fade_ms: u16,
    pub modal_entrance_ms: u16,
    pub section_entrance_ms: u16,
    pub section_stagger_ms: u16,
    pub reveal_ms: u16,
    pub submit_delay_ms: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            projects_scroll_step_px: 350,
            swipe: SwipeConfig::default(),
            gallery_fade_ms: 200,
            modal_entrance_ms: 300,
            section_entrance_ms: 800,
            section_stagger_ms: 100,
            reveal_ms: 600,
            submit_delay_ms: 1_500,
        }
    }
}

impl StorefrontConfig {
    pub const fn with_mobile_breakpoint_px(mut self, mobile_breakpoint_px: u32) -> Self {
        self.mobile_breakpoint_px = mobile_breakpoint_px;
        self
    }

    pub const fn with_gallery_fade_ms(mut self, gallery_fade_ms: u16) -> Self {
        self.gallery_fade_ms = gallery_fade_ms;
        self
    }

    pub const fn with_submit_delay_ms(mut self, submit_delay_ms: u64) -> Self {
        self.submit_delay_ms = submit_delay_ms;
        self
    }
}

/// Open product dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalState {
    product_index: usize,
    image_index: usize,
    /// Index whose image is on screen; trails `image_index` while fading.
    shown_index: usize,
    swap_at_ms: Option<u64>,
    fade_in: Option<AnimationSpec>,
    entrance: AnimationSpec,
    image: ImageStatus,
}

impl ModalState {
    pub fn product_index(&self) -> usize {
        self.product_index
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn shown_index(&self) -> usize {
        self.shown_index
    }

    pub fn image_status(&self) -> ImageStatus {
        self.image
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct CardState {
    revealed_at_ms: Option<u64>,
    image: ImageStatus,
}

pub struct StorefrontApp<C, IN>
where
    C: ProductCatalog,
    IN: InputProvider,
{
    content: C,
    input: IN,
    config: StorefrontConfig,
    app_title: &'static str,
    viewport_width: u32,
    section: SectionId,
    section_epoch: u32,
    section_entrance: Option<AnimationSpec>,
    sidebar_open: bool,
    sidebar_hovered: bool,
    modal: Option<ModalState>,
    cards: Vec<CardState>,
    services_revealed_at: Vec<Option<u64>>,
    hovered_card: Option<usize>,
    projects_touch: Option<TouchPoint>,
    page_touch: Option<TouchPoint>,
    form: ContactForm,
    effects: VecDeque<Effect>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
include!("cursor.rs");

#[cfg(test)]
mod tests;
