impl<C, IN> StorefrontApp<C, IN>
where
    C: ProductCatalog,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider failed, dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::NavLinkClicked(section) => self.follow_link(section, now_ms),
            InputEvent::AnchorClicked(target) => match SectionId::from_fragment(&target) {
                Some(section) => self.follow_link(section, now_ms),
                None => debug!("ui-nav: anchor target={:?} ignored", target),
            },
            InputEvent::FragmentChanged(fragment) => self.handle_fragment(&fragment, now_ms),
            InputEvent::KeyPressed { key, alt } => self.apply_key(key, alt, now_ms),
            InputEvent::ProductDetailsRequested(index) => self.open_modal(index, now_ms),
            InputEvent::ModalCloseClicked | InputEvent::ModalOverlayClicked => self.close_modal(),
            InputEvent::ModalRequestClicked => self.request_similar_site(now_ms),
            InputEvent::GalleryPrevClicked => self.navigate_gallery(GalleryStep::Backward, now_ms),
            InputEvent::GalleryNextClicked => self.navigate_gallery(GalleryStep::Forward, now_ms),
            InputEvent::GalleryDotClicked(index) => self.select_gallery_image(index, now_ms),
            InputEvent::MenuToggleClicked => self.toggle_mobile_menu(),
            InputEvent::SidebarCloseClicked | InputEvent::SidebarOverlayClicked => {
                self.close_mobile_menu()
            }
            InputEvent::SidebarHovered(hovered) => {
                if self.sidebar_hovered != hovered {
                    self.sidebar_hovered = hovered;
                    self.pending_redraw = true;
                }
            }
            InputEvent::ViewportResized { width } => self.set_viewport_width(width),
            InputEvent::ProjectsScrollClicked(direction) => self.scroll_projects(direction),
            InputEvent::ProjectsTouchStarted(point) => self.projects_touch = Some(point),
            InputEvent::ProjectsTouchEnded(end) => {
                if let Some(start) = self.projects_touch.take()
                    && let Some(direction) = gesture::projects_swipe(start, end, &self.config.swipe)
                {
                    self.scroll_projects(direction);
                }
            }
            InputEvent::PageTouchStarted(point) => self.page_touch = Some(point),
            InputEvent::PageTouchEnded(end) => {
                if let Some(start) = self.page_touch.take() {
                    self.apply_sidebar_swipe(start.x, end.x);
                }
            }
            InputEvent::CardHovered(card) => {
                if self.hovered_card != card {
                    self.hovered_card = card;
                    self.pending_redraw = true;
                }
            }
            InputEvent::CardRevealed(index) => {
                if let Some(card) = self.cards.get_mut(index)
                    && card.revealed_at_ms.is_none()
                {
                    card.revealed_at_ms = Some(now_ms);
                    self.pending_redraw = true;
                }
            }
            InputEvent::ServiceRevealed(index) => {
                if let Some(slot) = self.services_revealed_at.get_mut(index)
                    && slot.is_none()
                {
                    *slot = Some(now_ms);
                    self.pending_redraw = true;
                }
            }
            InputEvent::ImageLoaded(slot) => self.set_image_status(slot, ImageStatus::Loaded),
            InputEvent::ImageFailed(slot) => {
                warn!("image failed to load: {}", self.image_source(slot).unwrap_or("?"));
                self.set_image_status(slot, ImageStatus::Failed);
            }
            InputEvent::FormFieldEdited { field, value } => {
                if !self.form.is_submitting() {
                    self.form.set_field(field, value);
                    self.pending_redraw = true;
                }
            }
            InputEvent::FormSubmitted => self.submit_form(now_ms),
        }
    }

    fn apply_key(&mut self, key: KeyCode, alt: bool, now_ms: u64) {
        if alt
            && let KeyCode::Char(ch) = key
            && let Some(section) = SectionId::from_shortcut(ch)
        {
            self.enter_section(section, now_ms);
        }

        if self.modal.is_none() {
            return;
        }

        // ArrowLeft advances: the page reads right-to-left.
        match key {
            KeyCode::Escape => self.close_modal(),
            KeyCode::ArrowLeft => self.navigate_gallery(GalleryStep::Forward, now_ms),
            KeyCode::ArrowRight => self.navigate_gallery(GalleryStep::Backward, now_ms),
            KeyCode::Char(_) | KeyCode::Other => {}
        }
    }

    fn follow_link(&mut self, section: SectionId, now_ms: u64) {
        self.enter_section(section, now_ms);
        self.effects.push_back(Effect::WriteFragment(section));
        if self.is_mobile() {
            self.close_mobile_menu();
        }
    }

    fn apply_sidebar_swipe(&mut self, start_x: i32, end_x: i32) {
        if !self.is_mobile() {
            return;
        }

        match gesture::sidebar_swipe(start_x, end_x, self.sidebar_open, &self.config.swipe) {
            Some(SidebarSwipe::Open) => self.toggle_mobile_menu(),
            Some(SidebarSwipe::Close) => self.close_mobile_menu(),
            None => {}
        }
    }

    fn scroll_projects(&mut self, direction: ScrollDirection) {
        self.effects.push_back(Effect::ScrollProjects {
            delta_px: direction.signed(self.config.projects_scroll_step_px),
        });
    }

    fn image_source(&self, slot: ImageSlot) -> Option<&str> {
        match slot {
            ImageSlot::Card(index) => self
                .content
                .product_at(index)
                .map(|product| product.gallery_image(0)),
            ImageSlot::Gallery => {
                let modal = self.modal.as_ref()?;
                self.content
                    .product_at(modal.product_index)
                    .map(|product| product.gallery_image(modal.shown_index))
            }
        }
    }

    fn set_image_status(&mut self, slot: ImageSlot, status: ImageStatus) {
        let target = match slot {
            ImageSlot::Card(index) => self.cards.get_mut(index).map(|card| &mut card.image),
            ImageSlot::Gallery => self.modal.as_mut().map(|modal| &mut modal.image),
        };

        if let Some(image) = target
            && *image != status
        {
            *image = status;
            self.pending_redraw = true;
        }
    }
}
