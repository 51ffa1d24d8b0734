use super::*;
use crate::{
    content::{
        Product, ServiceOffer,
        static_catalog::{StaticCatalog, default_storefront_catalog},
        PLACEHOLDER_IMAGE,
    },
    form::ProjectType,
    input::{InputEvent, InputProvider, MockInput},
    render::Screen,
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).cloned() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

const ABC_PRODUCTS: [Product<'static>; 2] = [
    Product {
        id: 10,
        name: "Alpha",
        category: "موقع مطعم",
        description: "d",
        goal: "g",
        technologies: &["Rust"],
        features: &["one", "two"],
        images: &["a.jpg", "b.jpg", "c.jpg"],
        live_demo: "https://example.com/alpha",
    },
    Product {
        id: 11,
        name: "Bare",
        category: "مدونة",
        description: "d",
        goal: "g",
        technologies: &[],
        features: &[],
        images: &[],
        live_demo: "https://example.com/bare",
    },
];

const ABC_SERVICES: [ServiceOffer<'static>; 1] = [ServiceOffer {
    icon: "fas fa-rocket",
    title: "t",
    description: "d",
}];

fn abc_app() -> StorefrontApp<StaticCatalog<'static>, MockInput> {
    StorefrontApp::new(
        StaticCatalog::new(&ABC_PRODUCTS, &ABC_SERVICES),
        MockInput,
        StorefrontConfig::default(),
        "Test",
    )
}

fn scripted_app(
    events: &[InputEvent],
) -> StorefrontApp<StaticCatalog<'static>, ScriptedInput<'_>> {
    StorefrontApp::new(
        StaticCatalog::new(&ABC_PRODUCTS, &ABC_SERVICES),
        ScriptedInput::new(events),
        StorefrontConfig::default(),
        "Test",
    )
}

fn effects_of<C: ProductCatalog, IN: InputProvider>(app: &mut StorefrontApp<C, IN>) -> Vec<Effect> {
    let mut effects = Vec::new();
    app.drain_effects(|effect| effects.push(effect));
    effects
}

#[test]
fn every_valid_section_becomes_the_only_active_one() {
    let mut app = abc_app();
    for (step, section) in SectionId::ALL.into_iter().enumerate() {
        assert!(app.navigate_to_section(section.as_str(), step as u64));
        assert_eq!(app.active_section(), section);

        let mut active = None;
        app.with_screen(step as u64, |screen| active = Some(screen.active_section));
        assert_eq!(active, Some(section));
    }
}

#[test]
fn invalid_section_ids_leave_navigation_untouched() {
    let mut app = abc_app();
    app.navigate_to_section("services", 0);
    let epoch = app.section_epoch();
    let _ = effects_of(&mut app);

    for id in ["", "pricing", "#", "Services", "services "] {
        assert!(!app.navigate_to_section(id, 10));
    }

    assert_eq!(app.active_section(), SectionId::Services);
    assert_eq!(app.section_epoch(), epoch);
    assert!(effects_of(&mut app).is_empty());
}

#[test]
fn navigation_resets_section_scroll() {
    let mut app = abc_app();
    app.navigate_to_section("about", 0);
    assert_eq!(effects_of(&mut app), [Effect::ScrollSectionToTop(SectionId::About)]);
}

#[test]
fn gallery_cycles_back_after_n_steps_both_ways() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    let total = ABC_PRODUCTS[0].images.len();

    for _ in 0..total {
        app.navigate_gallery(GalleryStep::Forward, 0);
    }
    assert_eq!(app.modal().map(ModalState::image_index), Some(0));

    for _ in 0..total {
        app.navigate_gallery(GalleryStep::Backward, 0);
    }
    assert_eq!(app.modal().map(ModalState::image_index), Some(0));
}

#[test]
fn gallery_scenario_wraps_backwards_to_last_image() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    assert_eq!(app.modal().map(ModalState::image_index), Some(0));
    assert_eq!(app.current_image(), Some("a.jpg"));

    app.navigate_gallery(GalleryStep::Forward, 10);
    assert_eq!(app.modal().map(ModalState::image_index), Some(1));
    assert_eq!(app.current_image(), Some("b.jpg"));

    app.navigate_gallery(GalleryStep::Backward, 20);
    app.navigate_gallery(GalleryStep::Backward, 30);
    assert_eq!(app.modal().map(ModalState::image_index), Some(2));
    assert_eq!(app.current_image(), Some("c.jpg"));
}

#[test]
fn opening_a_modal_always_starts_at_the_first_image() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    app.navigate_gallery(GalleryStep::Forward, 0);
    app.navigate_gallery(GalleryStep::Forward, 0);

    app.open_modal(0, 100);
    assert_eq!(app.modal().map(ModalState::image_index), Some(0));

    app.navigate_gallery(GalleryStep::Backward, 200);
    app.open_modal(1, 300);
    let modal = app.modal().copied().unwrap();
    assert_eq!(modal.product_index(), 1);
    assert_eq!(modal.image_index(), 0);
}

#[test]
fn closing_the_modal_clears_the_product() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    app.navigate_gallery(GalleryStep::Forward, 0);
    app.close_modal();

    assert!(app.modal().is_none());
    assert_eq!(app.current_image(), None);

    let mut has_modal = true;
    app.with_screen(0, |screen| has_modal = screen.modal.is_some());
    assert!(!has_modal);
}

#[test]
fn gallery_is_inert_without_modal_or_images() {
    let mut app = abc_app();
    app.navigate_gallery(GalleryStep::Forward, 0);
    assert!(app.modal().is_none());

    app.open_modal(1, 0);
    app.navigate_gallery(GalleryStep::Forward, 0);
    app.select_gallery_image(0, 0);
    assert_eq!(app.modal().map(ModalState::image_index), Some(0));
    assert_eq!(app.current_image(), Some(PLACEHOLDER_IMAGE));

    let mut dots = None;
    app.with_screen(0, |screen| {
        dots = screen.modal.map(|modal| (modal.show_dots, modal.image_total))
    });
    assert_eq!(dots, Some((false, 1)));
}

#[test]
fn opening_an_unknown_product_is_ignored() {
    let mut app = abc_app();
    app.open_modal(7, 0);
    assert!(app.modal().is_none());
}

#[test]
fn gallery_image_swaps_after_fade() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    let _ = app.tick(0);
    app.navigate_gallery(GalleryStep::Forward, 1_000);

    let mut shown = None;
    app.with_screen(1_050, |screen| {
        shown = screen
            .modal
            .map(|modal| (modal.image_src.to_owned(), modal.image_hidden))
    });
    assert_eq!(shown, Some(("a.jpg".to_owned(), true)));

    assert_eq!(app.tick(1_199), TickResult::RenderRequested);
    assert_eq!(app.modal().map(ModalState::shown_index), Some(0));

    let _ = app.tick(1_200);
    app.with_screen(1_200, |screen| {
        shown = screen
            .modal
            .map(|modal| (modal.image_src.to_owned(), modal.image_hidden))
    });
    assert_eq!(shown, Some(("b.jpg".to_owned(), false)));
}

#[test]
fn dots_jump_to_an_image_and_reject_out_of_range() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    app.select_gallery_image(2, 0);
    assert_eq!(app.current_image(), Some("c.jpg"));

    app.select_gallery_image(3, 0);
    assert_eq!(app.modal().map(ModalState::image_index), Some(2));
}

#[test]
fn arrow_keys_step_inverted_and_escape_closes() {
    let events = [
        InputEvent::ProductDetailsRequested(0),
        InputEvent::KeyPressed {
            key: KeyCode::ArrowLeft,
            alt: false,
        },
    ];
    let mut app = scripted_app(&events);
    let _ = app.tick(0);
    assert_eq!(app.current_image(), Some("b.jpg"));

    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::ArrowRight,
            alt: false,
        },
        10,
    );
    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::ArrowRight,
            alt: false,
        },
        20,
    );
    assert_eq!(app.current_image(), Some("c.jpg"));

    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::Escape,
            alt: false,
        },
        30,
    );
    assert!(app.modal().is_none());
}

#[test]
fn arrow_keys_do_nothing_without_modal() {
    let mut app = abc_app();
    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::ArrowLeft,
            alt: false,
        },
        0,
    );
    assert!(app.modal().is_none());
    assert_eq!(app.active_section(), SectionId::Home);
}

#[test]
fn alt_digits_switch_sections() {
    let mut app = abc_app();
    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::Char('3'),
            alt: true,
        },
        0,
    );
    assert_eq!(app.active_section(), SectionId::Services);

    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::Char('5'),
            alt: false,
        },
        0,
    );
    app.apply_input_event(
        InputEvent::KeyPressed {
            key: KeyCode::Char('9'),
            alt: true,
        },
        0,
    );
    assert_eq!(app.active_section(), SectionId::Services);
}

#[test]
fn fragment_changes_drive_navigation() {
    let mut app = abc_app();
    app.handle_fragment("#contact", 0);
    assert_eq!(app.active_section(), SectionId::Contact);

    app.handle_fragment("#nowhere", 0);
    assert_eq!(app.active_section(), SectionId::Contact);

    app.handle_fragment("", 0);
    assert_eq!(app.active_section(), SectionId::Home);
}

#[test]
fn nav_link_writes_fragment_and_closes_mobile_menu() {
    let mut app = abc_app();
    app.set_viewport_width(400);
    app.toggle_mobile_menu();
    assert!(app.body_scroll_locked());
    let _ = effects_of(&mut app);

    app.apply_input_event(InputEvent::NavLinkClicked(SectionId::Projects), 0);

    assert_eq!(app.active_section(), SectionId::Projects);
    assert!(!app.is_mobile_menu_open());
    assert!(!app.body_scroll_locked());
    assert_eq!(
        effects_of(&mut app),
        [
            Effect::ScrollSectionToTop(SectionId::Projects),
            Effect::WriteFragment(SectionId::Projects),
        ]
    );
}

#[test]
fn desktop_nav_link_keeps_menu_state() {
    let mut app = abc_app();
    app.toggle_mobile_menu();
    app.apply_input_event(InputEvent::AnchorClicked("#about".to_owned()), 0);
    assert_eq!(app.active_section(), SectionId::About);
    assert!(app.is_mobile_menu_open());

    app.apply_input_event(InputEvent::AnchorClicked("#top".to_owned()), 0);
    assert_eq!(app.active_section(), SectionId::About);
}

#[test]
fn resizing_to_desktop_closes_mobile_menu() {
    let mut app = abc_app();
    app.set_viewport_width(500);
    app.toggle_mobile_menu();
    app.set_viewport_width(768);
    assert!(app.is_mobile_menu_open());

    app.set_viewport_width(769);
    assert!(!app.is_mobile_menu_open());
}

#[test]
fn edge_swipe_opens_sidebar_on_mobile_only() {
    let swipe = [
        InputEvent::PageTouchStarted(TouchPoint::new(10, 300)),
        InputEvent::PageTouchEnded(TouchPoint::new(200, 300)),
    ];

    let mut app = scripted_app(&swipe);
    let _ = app.tick(0);
    assert!(!app.is_mobile_menu_open());

    let mut app = scripted_app(&swipe);
    app.set_viewport_width(390);
    let _ = app.tick(0);
    assert!(app.is_mobile_menu_open());

    app.apply_input_event(InputEvent::PageTouchStarted(TouchPoint::new(120, 300)), 10);
    app.apply_input_event(InputEvent::PageTouchEnded(TouchPoint::new(260, 300)), 20);
    assert!(!app.is_mobile_menu_open());
}

#[test]
fn projects_swipe_and_buttons_scroll_the_strip() {
    let events = [
        InputEvent::ProjectsScrollClicked(ScrollDirection::Forward),
        InputEvent::ProjectsScrollClicked(ScrollDirection::Backward),
        InputEvent::ProjectsTouchStarted(TouchPoint::new(300, 100)),
        InputEvent::ProjectsTouchEnded(TouchPoint::new(180, 110)),
        InputEvent::ProjectsTouchStarted(TouchPoint::new(300, 100)),
        InputEvent::ProjectsTouchEnded(TouchPoint::new(290, 300)),
    ];
    let mut app = scripted_app(&events);
    let _ = app.tick(0);

    assert_eq!(
        effects_of(&mut app),
        [
            Effect::ScrollProjects { delta_px: 350 },
            Effect::ScrollProjects { delta_px: -350 },
            Effect::ScrollProjects { delta_px: 350 },
        ]
    );
}

#[test]
fn request_similar_site_prefills_contact_form() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    app.apply_input_event(InputEvent::ModalRequestClicked, 10);

    assert!(app.modal().is_none());
    assert_eq!(app.active_section(), SectionId::Contact);
    assert_eq!(
        app.form().field(FormField::ProjectType),
        ProjectType::Restaurant.as_value()
    );
    assert_eq!(
        app.form().field(FormField::Message),
        "أرغب في طلب موقع مشابه لـ \"Alpha\""
    );

    app.open_modal(1, 20);
    app.request_similar_site(30);
    assert_eq!(app.form().field(FormField::ProjectType), "other");
}

#[test]
fn form_submission_alerts_and_resets_after_delay() {
    let events = [
        InputEvent::FormFieldEdited {
            field: FormField::Name,
            value: "Lina".to_owned(),
        },
        InputEvent::FormFieldEdited {
            field: FormField::Email,
            value: "lina@example.com".to_owned(),
        },
        InputEvent::FormSubmitted,
        InputEvent::FormFieldEdited {
            field: FormField::Name,
            value: "ignored".to_owned(),
        },
    ];
    let mut app = scripted_app(&events);
    let _ = app.tick(1_000);

    assert!(app.form().is_submitting());
    assert_eq!(app.form().field(FormField::Name), "Lina");
    assert!(!effects_of(&mut app).contains(&Effect::Alert(SUBMIT_SUCCESS_MESSAGE)));

    let _ = app.tick(2_499);
    assert!(app.form().is_submitting());

    assert_eq!(app.tick(2_500), TickResult::RenderRequested);
    assert!(!app.form().is_submitting());
    assert_eq!(app.form().field(FormField::Name), "");
    assert!(effects_of(&mut app).contains(&Effect::Alert(SUBMIT_SUCCESS_MESSAGE)));
}

#[test]
fn failed_images_are_marked() {
    let mut app = abc_app();
    app.apply_input_event(InputEvent::ImageFailed(ImageSlot::Card(0)), 0);
    app.apply_input_event(InputEvent::ImageLoaded(ImageSlot::Card(1)), 0);
    app.open_modal(0, 0);
    app.apply_input_event(InputEvent::ImageFailed(ImageSlot::Gallery), 0);

    let mut statuses = Vec::new();
    app.with_screen(0, |screen| {
        statuses.extend(screen.projects.iter().map(|card| card.image));
        statuses.extend(screen.modal.map(|modal| modal.image));
    });
    assert_eq!(
        statuses,
        [ImageStatus::Failed, ImageStatus::Loaded, ImageStatus::Failed]
    );
}

#[test]
fn cards_reveal_once_and_settle() {
    let mut app = abc_app();
    app.apply_input_event(InputEvent::CardRevealed(0), 1_000);
    app.apply_input_event(InputEvent::CardRevealed(0), 1_400);
    app.apply_input_event(InputEvent::ServiceRevealed(0), 1_000);

    let mut reveals = Vec::new();
    app.with_screen(1_300, |screen| {
        reveals.extend(screen.projects.iter().map(|card| card.reveal));
        reveals.extend(screen.services.iter().map(|card| card.reveal));
    });
    assert!(matches!(reveals[0], Reveal::Entering(frame) if frame.progress_pct == 50));
    assert_eq!(reveals[1], Reveal::Hidden);
    assert!(matches!(reveals[2], Reveal::Entering(_)));

    let mut first = None;
    app.with_screen(1_600, |screen| first = screen.projects.first().map(|card| card.reveal));
    assert_eq!(first, Some(Reveal::Visible));
}

#[test]
fn empty_catalog_shows_notice() {
    let mut app = StorefrontApp::new(
        StaticCatalog::empty(),
        MockInput,
        StorefrontConfig::default(),
        "Test",
    );
    app.open_modal(0, 0);
    assert!(app.modal().is_none());

    let mut seen = None;
    app.with_screen(0, |screen: Screen<'_>| {
        seen = Some((screen.projects.len(), screen.empty_notice.map(str::to_owned)))
    });
    assert_eq!(seen, Some((0, Some(EMPTY_CATALOG_NOTICE.to_owned()))));
}

#[test]
fn sidebar_hover_expands_on_desktop_only() {
    let mut app = StorefrontApp::new(
        default_storefront_catalog(),
        MockInput,
        StorefrontConfig::default(),
        "Test",
    );
    app.apply_input_event(InputEvent::SidebarHovered(true), 0);

    let mut expanded = false;
    app.with_screen(0, |screen| expanded = screen.sidebar.expanded);
    assert!(expanded);

    app.set_viewport_width(600);
    app.with_screen(0, |screen| expanded = screen.sidebar.expanded);
    assert!(!expanded);
}

#[test]
fn tick_settles_once_animations_finish() {
    let mut app = abc_app();
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(1), TickResult::NoRender);

    app.navigate_to_section("projects", 100);
    assert_eq!(app.tick(200), TickResult::RenderRequested);
    assert_eq!(app.tick(900), TickResult::RenderRequested);
    let _ = app.tick(1_700);
    assert_eq!(app.tick(1_701), TickResult::NoRender);
}

const SOLO_PRODUCTS: [Product<'static>; 1] = [Product {
    id: 20,
    name: "Solo",
    category: "موقع شخصي",
    description: "d",
    goal: "g",
    technologies: &[],
    features: &[],
    images: &["solo.jpg"],
    live_demo: "https://example.com/solo",
}];

#[test]
fn stepping_a_single_image_gallery_keeps_its_load_status() {
    let mut app = StorefrontApp::new(
        StaticCatalog::new(&SOLO_PRODUCTS, &[]),
        MockInput,
        StorefrontConfig::default(),
        "Test",
    );
    app.open_modal(0, 0);
    app.apply_input_event(InputEvent::ImageLoaded(ImageSlot::Gallery), 0);

    app.navigate_gallery(GalleryStep::Forward, 100);
    let _ = app.tick(400);

    assert_eq!(app.current_image(), Some("solo.jpg"));
    assert_eq!(app.modal().map(ModalState::image_status), Some(ImageStatus::Loaded));
}

#[test]
fn dot_of_the_shown_image_keeps_its_load_status() {
    let mut app = abc_app();
    app.open_modal(0, 0);
    app.apply_input_event(InputEvent::ImageLoaded(ImageSlot::Gallery), 0);

    app.select_gallery_image(0, 100);
    let _ = app.tick(400);
    assert_eq!(app.modal().map(ModalState::image_status), Some(ImageStatus::Loaded));

    app.select_gallery_image(1, 500);
    let _ = app.tick(800);
    assert_eq!(app.modal().map(ModalState::shown_index), Some(1));
    assert_eq!(app.modal().map(ModalState::image_status), Some(ImageStatus::Pending));
}

#[test]
fn scroll_lock_holds_while_modal_or_menu_stays_open() {
    let mut app = abc_app();
    app.set_viewport_width(400);
    app.toggle_mobile_menu();
    app.open_modal(0, 0);
    assert!(app.body_scroll_locked());

    app.close_modal();
    assert!(app.is_mobile_menu_open());
    assert!(app.body_scroll_locked());

    app.open_modal(0, 0);
    app.close_mobile_menu();
    assert!(app.modal().is_some());
    assert!(app.body_scroll_locked());

    app.close_modal();
    assert!(!app.body_scroll_locked());
}
