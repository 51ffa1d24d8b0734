impl<C, IN> StorefrontApp<C, IN>
where
    C: ProductCatalog,
    IN: InputProvider,
{
    fn run_deadlines(&mut self, now_ms: u64) {
        if let Some(modal) = self.modal.as_mut()
            && let Some(swap_at_ms) = modal.swap_at_ms
            && now_ms >= swap_at_ms
        {
            modal.swap_at_ms = None;
            // An unchanged source fires no new load event.
            if modal.shown_index != modal.image_index {
                modal.shown_index = modal.image_index;
                modal.image = ImageStatus::Pending;
            }
            modal.fade_in = Some(AnimationSpec::new(
                AnimationKind::Fade,
                now_ms,
                self.config.gallery_fade_ms,
            ));
            self.pending_redraw = true;
        }

        if self.form.poll(now_ms) {
            info!("contact form sent");
            self.effects.push_back(Effect::Alert(SUBMIT_SUCCESS_MESSAGE));
            self.pending_redraw = true;
        }

        if self
            .section_entrance
            .is_some_and(|spec| now_ms >= self.section_entrance_end(spec))
        {
            self.section_entrance = None;
            self.pending_redraw = true;
        }
    }

    fn is_animating(&self, now_ms: u64) -> bool {
        let section = self
            .section_entrance
            .is_some_and(|spec| now_ms < self.section_entrance_end(spec));

        let modal = self.modal.is_some_and(|modal| {
            modal.swap_at_ms.is_some()
                || modal.entrance.frame(now_ms).is_some()
                || modal.fade_in.and_then(|anim| anim.frame(now_ms)).is_some()
        });

        let reveal_ms = self.config.reveal_ms as u64;
        let revealing = self
            .cards
            .iter()
            .map(|card| card.revealed_at_ms)
            .chain(self.services_revealed_at.iter().copied())
            .flatten()
            .any(|start_ms| now_ms < start_ms.saturating_add(reveal_ms));

        section || modal || revealing
    }

    fn section_entrance_end(&self, spec: AnimationSpec) -> u64 {
        let last_delay = (MAX_STAGGERED_ELEMENTS - 1) * self.config.section_stagger_ms as u64;
        spec.end_ms(last_delay)
    }
}
