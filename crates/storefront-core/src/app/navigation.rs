impl<C, IN> StorefrontApp<C, IN>
where
    C: ProductCatalog,
    IN: InputProvider,
{
    /// Activates the section named `id`. Unknown ids leave the page as it is.
    /// Returns whether a section was activated.
    pub fn navigate_to_section(&mut self, id: &str, now_ms: u64) -> bool {
        match SectionId::from_fragment(id) {
            Some(section) => {
                self.enter_section(section, now_ms);
                true
            }
            None => {
                debug!("ui-nav: unknown section id={:?} ignored", id);
                false
            }
        }
    }

    /// Applies the URL fragment; an empty fragment means the home section.
    pub fn handle_fragment(&mut self, fragment: &str, now_ms: u64) {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            self.enter_section(SectionId::Home, now_ms);
        } else {
            self.navigate_to_section(id, now_ms);
        }
    }

    fn enter_section(&mut self, section: SectionId, now_ms: u64) {
        debug!(
            "ui-nav: enter section from={} to={} epoch={}",
            self.section,
            section,
            self.section_epoch.wrapping_add(1)
        );
        self.section = section;
        self.section_epoch = self.section_epoch.wrapping_add(1);
        self.section_entrance = Some(AnimationSpec::new(
            AnimationKind::FadeUp,
            now_ms,
            self.config.section_entrance_ms,
        ));
        self.effects.push_back(Effect::ScrollSectionToTop(section));
        self.pending_redraw = true;
    }

    /// Opens the dialog for the product at `index`, replacing any open one.
    pub fn open_modal(&mut self, index: usize, now_ms: u64) {
        let Some(product) = self.content.product_at(index) else {
            debug!("ui-modal: open ignored, no product at index={}", index);
            return;
        };
        debug!(
            "ui-modal: open product id={} name={:?} images={}",
            product.id,
            product.name,
            product.images.len()
        );

        self.modal = Some(ModalState {
            product_index: index,
            image_index: 0,
            shown_index: 0,
            swap_at_ms: None,
            fade_in: None,
            entrance: AnimationSpec::new(AnimationKind::Zoom, now_ms, self.config.modal_entrance_ms),
            image: ImageStatus::Pending,
        });
        self.pending_redraw = true;
    }

    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.take() {
            debug!("ui-modal: close product_index={}", modal.product_index);
            self.pending_redraw = true;
        }
    }

    /// Steps through the open product's images with wraparound.
    pub fn navigate_gallery(&mut self, step: GalleryStep, now_ms: u64) {
        let Some(total) = self.open_image_count() else {
            return;
        };
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        let next = match step {
            GalleryStep::Forward => wrap_next(modal.image_index, total),
            GalleryStep::Backward => wrap_prev(modal.image_index, total),
        };
        debug!(
            "ui-modal: gallery {:?} index={}/{} -> {}/{}",
            step,
            modal.image_index.saturating_add(1),
            total,
            next.saturating_add(1),
            total
        );
        modal.image_index = next;
        self.begin_gallery_fade(now_ms);
    }

    /// Jumps to a gallery image, as the dots below the image do.
    pub fn select_gallery_image(&mut self, index: usize, now_ms: u64) {
        let Some(total) = self.open_image_count() else {
            return;
        };
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if index >= total {
            return;
        }

        modal.image_index = index;
        self.begin_gallery_fade(now_ms);
    }

    /// Closes the dialog and moves to the contact form, prefilled for a site
    /// like the open product.
    pub fn request_similar_site(&mut self, now_ms: u64) {
        let Some((project_type, message)) = self
            .modal
            .as_ref()
            .and_then(|modal| self.content.product_at(modal.product_index))
            .map(|product| {
                (
                    text_policy::project_type_for_category(product.category),
                    text_policy::request_message(product.name),
                )
            })
        else {
            return;
        };

        self.close_modal();
        self.enter_section(SectionId::Contact, now_ms);
        self.form.prefill(project_type, message);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        debug!("ui-nav: mobile menu open={}", self.sidebar_open);
        self.pending_redraw = true;
    }

    pub fn close_mobile_menu(&mut self) {
        if self.sidebar_open {
            self.sidebar_open = false;
            debug!("ui-nav: mobile menu open=false");
            self.pending_redraw = true;
        }
    }

    /// Records the viewport width. Growing past the mobile breakpoint closes
    /// the mobile menu.
    pub fn set_viewport_width(&mut self, width: u32) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.pending_redraw = true;
        }
        if !self.is_mobile() {
            self.close_mobile_menu();
        }
    }

    pub fn submit_form(&mut self, now_ms: u64) {
        let Some(submission) = self.form.begin_submit(now_ms, self.config.submit_delay_ms) else {
            debug!("ui-form: submit ignored, already sending");
            return;
        };

        info!(
            "contact form submitted name={:?} email={:?} project_type={:?} message={:?}",
            submission.name, submission.email, submission.project_type, submission.message
        );
        self.pending_redraw = true;
    }

    /// Image count of the open product, `None` when nothing can be stepped.
    fn open_image_count(&self) -> Option<usize> {
        let modal = self.modal.as_ref()?;
        let total = self.content.product_at(modal.product_index)?.images.len();
        (total > 0).then_some(total)
    }

    fn begin_gallery_fade(&mut self, now_ms: u64) {
        if let Some(modal) = self.modal.as_mut() {
            modal.swap_at_ms = Some(now_ms.saturating_add(self.config.gallery_fade_ms as u64));
            modal.fade_in = None;
            self.pending_redraw = true;
        }
    }
}
