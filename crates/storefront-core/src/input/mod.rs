//! Input abstraction layer.

mod mock;
mod queue;

pub use mock::MockInput;
pub use queue::{InputSender, QueuedInput};

use crate::{
    form::FormField,
    gesture::{ScrollDirection, TouchPoint},
    section::SectionId,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyCode {
    Escape,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other,
}

/// Image element whose load outcome is being reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageSlot {
    Card(usize),
    Gallery,
}

/// Logical events consumed by the storefront app.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    NavLinkClicked(SectionId),
    /// In-page `#id` anchor. The id may not name a section.
    AnchorClicked(String),
    /// URL fragment without its leading `#`.
    FragmentChanged(String),
    KeyPressed {
        key: KeyCode,
        alt: bool,
    },
    ProductDetailsRequested(usize),
    ModalCloseClicked,
    /// Click that landed on the overlay itself, not on the dialog.
    ModalOverlayClicked,
    ModalRequestClicked,
    GalleryPrevClicked,
    GalleryNextClicked,
    GalleryDotClicked(usize),
    MenuToggleClicked,
    SidebarCloseClicked,
    SidebarOverlayClicked,
    SidebarHovered(bool),
    ViewportResized {
        width: u32,
    },
    ProjectsScrollClicked(ScrollDirection),
    ProjectsTouchStarted(TouchPoint),
    ProjectsTouchEnded(TouchPoint),
    PageTouchStarted(TouchPoint),
    PageTouchEnded(TouchPoint),
    CardHovered(Option<usize>),
    CardRevealed(usize),
    ServiceRevealed(usize),
    ImageLoaded(ImageSlot),
    ImageFailed(ImageSlot),
    FormFieldEdited {
        field: FormField,
        value: String,
    },
    FormSubmitted,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
